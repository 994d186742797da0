//! Seeder
//!
//! Resets and repopulates the pets table with synthetic data for manual
//! testing and demos. Destructive: every run discards all prior rows.

use fake::faker::name::en::FirstName;
use fake::Fake;
use petstore_core::Pet;
use rand::seq::SliceRandom;
use rusqlite::Connection;
use tracing::info;

use crate::errors::{from_rusqlite, Result};
use crate::repo::PetRepo;

/// Fixed species vocabulary the seeder draws from
pub const SPECIES: [&str; 5] = ["Dog", "Cat", "Chicken", "Hamster", "Turtle"];

/// Number of rows a seeding run leaves behind
pub const SEED_COUNT: usize = 10;

/// Generate `count` in-memory Pets with random names and species
///
/// Names come from a first-name generator; species are chosen uniformly
/// from [`SPECIES`].
pub fn generate_pets(count: usize) -> Vec<Pet> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| {
            let name: String = FirstName().fake();
            let species = SPECIES
                .choose(&mut rng)
                .copied()
                .unwrap_or(SPECIES[0]);
            Pet::new(name, species)
        })
        .collect()
}

/// Reset the pets table and insert `count` random Pets
///
/// The delete and the batch insert share one transaction, so the run is
/// atomic: if the commit fails, no prior row was lost and no new row
/// persists. Returns the number of seeded rows.
pub fn seed_pets(conn: &mut Connection, count: usize) -> Result<usize> {
    let tx = conn.transaction().map_err(from_rusqlite)?;

    let removed = PetRepo::delete_all_tx(&tx)?;

    let mut pets = generate_pets(count);
    PetRepo::insert_all_tx(&tx, &mut pets)?;

    tx.commit().map_err(from_rusqlite)?;

    info!(removed, seeded = pets.len(), "reseeded pets table");
    Ok(pets.len())
}
