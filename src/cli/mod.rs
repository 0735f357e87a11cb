//! CLI commands for LawBook using clap.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::seed::run_seed;
use crate::store::open_store;
use crate::web::run_server;

/// LawBook - lawyer appointment booking service.
#[derive(Parser)]
#[command(name = "lawbook")]
#[command(version = "0.1.0")]
#[command(about = "LawBook - book a lawyer, chat with support", long_about = None)]
pub struct Commands {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve {
        /// Bind address
        #[arg(long)]
        host: Option<String>,

        /// Listen port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Wipe and repopulate the lawyer collection, then exit.
    /// Destructive by default.
    Seed,
}

impl Commands {
    pub async fn run(self) -> Result<()> {
        let mut settings = Settings::from_env()?;

        match self.command {
            Command::Serve { host, port } => {
                if let Some(host) = host {
                    settings.host = host;
                }
                if let Some(port) = port {
                    settings.port = port;
                }

                settings.announce();

                run_server(settings)
                    .await
                    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
            }
            Command::Seed => {
                let store = open_store(&settings);
                run_seed(store.as_ref()).await?;
                println!("Database seeded with 12 lawyers successfully!");
                Ok(())
            }
        }
    }
}
