//! LawBook library root.

pub mod chatbot;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod payments;
pub mod providers;
pub mod seed;
pub mod store;
pub mod web;

pub use chatbot::{classify, ChatResponder, Intent};
pub use cli::Commands;
pub use config::Settings;
pub use error::{Error, Result};
pub use models::{Appointment, Lawyer};
pub use providers::CompletionBackend;
pub use store::{FileStore, MemStore, Store};
pub use web::run_server;
