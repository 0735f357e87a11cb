//! Seed data: the fixed lawyer catalog.
//!
//! `lawbook seed` wipes and repopulates the lawyer collection from this
//! list. The same list backs the in-memory placeholder store.

use chrono::Utc;

use crate::error::Result;
use crate::models::Lawyer;
use crate::store::Store;

struct SeedLawyer {
    name: &'static str,
    speciality: &'static str,
    experience: u32,
    license_number: &'static str,
    image: &'static str,
    fee: f64,
    availability: &'static [&'static str],
}

const SEED_LAWYERS: &[SeedLawyer] = &[
    SeedLawyer {
        name: "Sarah Johnson",
        speciality: "Corporate Law",
        experience: 12,
        license_number: "LAW-001-2024",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&h=400&fit=crop",
        fee: 150.0,
        availability: &["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"],
    },
    SeedLawyer {
        name: "James Mitchell",
        speciality: "Criminal Defense",
        experience: 15,
        license_number: "LAW-002-2024",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
        fee: 200.0,
        availability: &["Monday", "Wednesday", "Friday"],
    },
    SeedLawyer {
        name: "Emily Richardson",
        speciality: "Family Law",
        experience: 10,
        license_number: "LAW-003-2024",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop",
        fee: 120.0,
        availability: &["Tuesday", "Wednesday", "Thursday", "Friday"],
    },
    SeedLawyer {
        name: "Robert Chen",
        speciality: "Intellectual Property",
        experience: 14,
        license_number: "LAW-004-2024",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
        fee: 180.0,
        availability: &["Monday", "Tuesday", "Thursday"],
    },
    SeedLawyer {
        name: "Maria Garcia",
        speciality: "Immigration Law",
        experience: 11,
        license_number: "LAW-005-2024",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
        fee: 140.0,
        availability: &["Monday", "Tuesday", "Wednesday", "Thursday"],
    },
    SeedLawyer {
        name: "David Thompson",
        speciality: "Tax Law",
        experience: 16,
        license_number: "LAW-006-2024",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=400&fit=crop",
        fee: 190.0,
        availability: &["Tuesday", "Wednesday", "Thursday", "Friday"],
    },
    SeedLawyer {
        name: "Lisa Anderson",
        speciality: "Real Estate Law",
        experience: 9,
        license_number: "LAW-007-2024",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop",
        fee: 110.0,
        availability: &["Monday", "Wednesday", "Friday"],
    },
    SeedLawyer {
        name: "Christopher Lee",
        speciality: "Employment Law",
        experience: 13,
        license_number: "LAW-008-2024",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
        fee: 160.0,
        availability: &["Monday", "Tuesday", "Wednesday", "Friday"],
    },
    SeedLawyer {
        name: "Jennifer Martinez",
        speciality: "Bankruptcy Law",
        experience: 10,
        license_number: "LAW-009-2024",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop",
        fee: 130.0,
        availability: &["Tuesday", "Thursday", "Friday"],
    },
    SeedLawyer {
        name: "William Davis",
        speciality: "Estate Planning",
        experience: 18,
        license_number: "LAW-010-2024",
        image: "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=400&h=400&fit=crop",
        fee: 170.0,
        availability: &["Monday", "Tuesday", "Thursday"],
    },
    SeedLawyer {
        name: "Susan Brown",
        speciality: "Contracts",
        experience: 12,
        license_number: "LAW-011-2024",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop",
        fee: 150.0,
        availability: &["Monday", "Wednesday", "Thursday", "Friday"],
    },
    SeedLawyer {
        name: "Michael Wilson",
        speciality: "Litigation",
        experience: 14,
        license_number: "LAW-012-2024",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop",
        fee: 175.0,
        availability: &["Tuesday", "Wednesday", "Thursday"],
    },
];

/// Build the fixed lawyer list with stable ids ("1".."12").
pub fn sample_lawyers() -> Vec<Lawyer> {
    SEED_LAWYERS
        .iter()
        .enumerate()
        .map(|(i, seed)| Lawyer {
            id: (i + 1).to_string(),
            name: seed.name.to_string(),
            speciality: seed.speciality.to_string(),
            experience: seed.experience,
            license_number: seed.license_number.to_string(),
            image: seed.image.to_string(),
            fee: seed.fee,
            availability: seed.availability.iter().map(|d| d.to_string()).collect(),
            created_at: Utc::now(),
        })
        .collect()
}

/// Wipe and repopulate the lawyer collection. Destructive by default.
pub async fn run_seed(store: &dyn Store) -> Result<()> {
    let lawyers = sample_lawyers();
    let count = lawyers.len();

    store.replace_lawyers(lawyers).await?;

    tracing::info!("Seeded lawyer collection with {} lawyers", count);
    Ok(())
}
