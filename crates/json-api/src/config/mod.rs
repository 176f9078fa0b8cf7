//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Rostering JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "rostering-json", about = "Rostering JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Request observability settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Storage settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::{db::StorageBackend, observability::LogFormat, *};

    #[test]
    fn defaults_to_postgres_without_migrations() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "rostering-json",
            "--database-url",
            "postgres://localhost/rostering",
        ])?;

        assert_eq!(config.database.storage, StorageBackend::Postgres);
        assert!(!config.database.run_migrations, "migrations must be opt-in");
        assert!(matches!(config.logging.log_format, LogFormat::Compact));
        assert_eq!(config.socket_addr(), "0.0.0.0:8698");

        Ok(())
    }

    #[test]
    fn memory_storage_needs_no_database_url() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "rostering-json",
            "--storage",
            "memory",
            "--port",
            "9000",
        ])?;

        assert_eq!(config.database.storage, StorageBackend::Memory);
        assert_eq!(config.server.port, 9000);

        Ok(())
    }
}
