//! SQLite repository implementation
//!
//! Persists Pets to the pets table. All methods are stateless and operate
//! on a caller-supplied connection or transaction; durability is decided
//! by the caller's commit.

use petstore_core::Pet;
use rusqlite::{Connection, OptionalExtension, Row, Transaction};

use crate::errors::{from_rusqlite, Result};

/// SQLite repository for Pets
pub struct PetRepo;

impl PetRepo {
    /// Insert a Pet and assign its store-generated id
    ///
    /// The Pet's `id` field is set from the row id SQLite assigns.
    pub fn insert(conn: &Connection, pet: &mut Pet) -> Result<i64> {
        conn.execute(
            "INSERT INTO pets (name, species) VALUES (?1, ?2)",
            rusqlite::params![pet.name, pet.species],
        )
        .map_err(from_rusqlite)?;

        let id = conn.last_insert_rowid();
        pet.id = Some(id);
        Ok(id)
    }

    /// Insert a Pet within a transaction
    pub fn insert_tx(tx: &Transaction, pet: &mut Pet) -> Result<i64> {
        Self::insert(tx, pet)
    }

    /// Stage a batch of Pets for insertion within a transaction
    ///
    /// Ids are assigned as rows are staged but become durable only at the
    /// transaction commit.
    pub fn insert_all_tx(tx: &Transaction, pets: &mut [Pet]) -> Result<()> {
        for pet in pets.iter_mut() {
            Self::insert(tx, pet)?;
        }
        Ok(())
    }

    /// Delete every row in the pets table
    ///
    /// Returns the number of rows removed.
    pub fn delete_all(conn: &Connection) -> Result<usize> {
        conn.execute("DELETE FROM pets", []).map_err(from_rusqlite)
    }

    /// Delete every row within a transaction
    pub fn delete_all_tx(tx: &Transaction) -> Result<usize> {
        Self::delete_all(tx)
    }

    /// Get a Pet from the database by id
    pub fn get(conn: &Connection, id: i64) -> Result<Option<Pet>> {
        let mut stmt = conn
            .prepare("SELECT id, name, species FROM pets WHERE id = ?")
            .map_err(from_rusqlite)?;

        let result = stmt
            .query_row([id], row_to_pet)
            .optional()
            .map_err(from_rusqlite)?;

        Ok(result)
    }

    /// Get all committed Pets (order unspecified)
    pub fn all(conn: &Connection) -> Result<Vec<Pet>> {
        let mut stmt = conn
            .prepare("SELECT id, name, species FROM pets")
            .map_err(from_rusqlite)?;

        let pets = stmt
            .query_map([], row_to_pet)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(pets)
    }

    /// Get exactly the Pets whose species equals the given value
    pub fn find_by_species(conn: &Connection, species: &str) -> Result<Vec<Pet>> {
        let mut stmt = conn
            .prepare("SELECT id, name, species FROM pets WHERE species = ?1")
            .map_err(from_rusqlite)?;

        let pets = stmt
            .query_map([species], row_to_pet)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(pets)
    }

    /// Count the committed rows in the pets table
    pub fn count(conn: &Connection) -> Result<i64> {
        conn.query_row("SELECT COUNT(*) FROM pets", [], |row| row.get(0))
            .map_err(from_rusqlite)
    }
}

/// Map a pets row to the Pet model
fn row_to_pet(row: &Row<'_>) -> rusqlite::Result<Pet> {
    Ok(Pet {
        id: Some(row.get(0)?),
        name: row.get(1)?,
        species: row.get(2)?,
    })
}
