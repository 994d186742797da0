//! Repository layer for persisting the Pet model to SQLite

pub mod pet_repo;

pub use pet_repo::PetRepo;
