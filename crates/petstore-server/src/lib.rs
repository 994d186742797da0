//! Petstore application factory
//!
//! Produces configured application instances bound to a SQLite-backed
//! store, with the schema-migration helper attached. Constructing an
//! instance performs no I/O; a misconfigured database path surfaces as a
//! store error on first actual use, not at factory time.

use axum::Router;
use rusqlite::Connection;
use tracing::info;

use petstore_core::errors::Result;
use petstore_store::{db, migrations};

mod config;

pub use config::AppConfig;

/// A configured application instance
///
/// Each factory call yields an independent instance. The router carries no
/// routes beyond framework defaults; unknown paths answer 404.
pub struct App {
    config: AppConfig,
}

impl App {
    /// Application factory: build an instance from the given configuration
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configured database location as a URI
    pub fn database_uri(&self) -> String {
        self.config.database_uri()
    }

    /// Whether modification tracking is enabled (always false)
    pub fn track_modifications(&self) -> bool {
        self.config.track_modifications
    }

    /// The instance's configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Build the HTTP router (framework defaults only, no routes)
    pub fn router(&self) -> Router {
        Router::new()
    }

    /// Open and configure a connection to the configured database
    ///
    /// Lazy: the factory never connects on its own. An unwritable path
    /// surfaces here as a persistence error.
    pub fn connect(&self) -> Result<Connection> {
        let conn = db::open(&self.config.database_path)?;
        db::configure(&conn)?;
        Ok(conn)
    }

    /// Schema-migration helper: apply pending migrations to the configured
    /// database
    pub fn migrate(&self) -> Result<()> {
        let mut conn = self.connect()?;
        migrations::apply_migrations(&mut conn)
    }

    /// Serve the application on the given address until shutdown
    pub async fn run(self, addr: &str) -> std::io::Result<()> {
        info!(addr, uri = %self.database_uri(), "starting petstore server");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
