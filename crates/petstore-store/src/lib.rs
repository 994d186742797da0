//! Petstore Store - SQLite persistence layer
//!
//! Provides:
//! - SQLite connection management (file-backed and in-memory)
//! - Migration framework with checksums and idempotent application
//! - Repository layer for the `pets` table
//! - Seeder that resets and repopulates random sample data

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;
pub mod seed;

// Re-export key types
pub use errors::Result;
pub use repo::PetRepo;
