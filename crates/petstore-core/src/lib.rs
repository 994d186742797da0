//! Petstore core - domain model and shared facilities
//!
//! Provides:
//! - The `Pet` domain model and its serialization view
//! - Canonical structured error type with a stable kind taxonomy
//! - Logging initialization profiles

pub mod errors;
pub mod logging;
pub mod model;

pub use errors::{PetError, PetErrorKind, Result};
pub use model::Pet;
