//! Error handling for petstore-store
//!
//! Wraps petstore-core PetError with store-specific helpers

use petstore_core::errors::{PetError, PetErrorKind};

/// Result type alias using PetError
pub type Result<T> = std::result::Result<T, PetError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> PetError {
    PetError::new(PetErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> PetError {
    PetError::new(PetErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}
