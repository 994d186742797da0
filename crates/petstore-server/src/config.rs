//! Application configuration
//!
//! Exactly two recognized options, both hard-coded defaults rather than
//! environment-driven: the database path and the modification-tracking
//! flag (always disabled).

use std::path::{Path, PathBuf};

/// Configuration for an application instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the single-file SQLite database
    pub database_path: PathBuf,

    /// Whether row-modification tracking is enabled. Recognized for parity
    /// with the configuration surface but always disabled; nothing in the
    /// system consumes change notifications.
    pub track_modifications: bool,
}

impl AppConfig {
    /// Configuration pointing at an arbitrary database path
    pub fn with_database_path(path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: path.into(),
            track_modifications: false,
        }
    }

    /// The configured database location as a URI
    pub fn database_uri(&self) -> String {
        format!("sqlite:///{}", self.database_path.display())
    }

    /// The configured database path
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }
}

impl Default for AppConfig {
    /// Production defaults: `app.db`, tracking disabled
    fn default() -> Self {
        Self::with_database_path("app.db")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.database_path, PathBuf::from("app.db"));
        assert!(!config.track_modifications);
        assert_eq!(config.database_uri(), "sqlite:///app.db");
    }

    #[test]
    fn test_custom_database_path() {
        let config = AppConfig::with_database_path("test.db");
        assert_eq!(config.database_uri(), "sqlite:///test.db");
        assert!(!config.track_modifications);
    }
}
