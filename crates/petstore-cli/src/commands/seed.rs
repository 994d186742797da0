//! Seed command
//!
//! Usage: petstore seed
//!
//! Destructive: discards all existing pets before inserting the new batch.

use clap::Args;

use petstore_store::seed::{seed_pets, SEED_COUNT};
use petstore_store::{db, migrations};

/// Database file the production application is bound to
const DB_PATH: &str = "app.db";

#[derive(Debug, Args)]
pub struct SeedArgs {}

/// Execute the seed command against the production database file
pub fn execute(_args: SeedArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = db::open(DB_PATH)?;
    db::configure(&conn)?;

    migrations::apply_migrations(&mut conn)?;

    let seeded = seed_pets(&mut conn, SEED_COUNT)?;
    println!("Successfully seeded {} pets to the database.", seeded);

    Ok(())
}
