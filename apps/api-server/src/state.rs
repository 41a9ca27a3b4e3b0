//! Application state - shared across all handlers.

#[cfg(feature = "postgres")]
use std::sync::Arc;

use thiserror::Error;

use folio_core::error::RepoError;
use folio_core::ports::ContentRepositories;
use folio_core::seed::{SeedReport, seed_content};
use folio_infra::in_memory_repositories;

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use folio_infra::database::{DbConn, DbErr};
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};

/// Which content store the server is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl StorageBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Postgres => "postgres",
            StorageBackend::Memory => "memory",
        }
    }
}

/// Failures that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[cfg(feature = "postgres")]
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] DbErr),

    #[cfg(feature = "postgres")]
    #[error("Failed to apply migrations: {0}")]
    Migrate(#[source] DbErr),

    #[error("Failed to seed default content: {0}")]
    Seed(#[from] RepoError),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content: ContentRepositories,
    pub storage: StorageBackend,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DbConn>>,
}

impl AppState {
    /// State over an explicit set of repositories, with no database handle.
    pub fn with_repositories(content: ContentRepositories, storage: StorageBackend) -> Self {
        Self {
            content,
            storage,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// State over fresh in-memory collections.
    pub fn in_memory() -> Self {
        Self::with_repositories(in_memory_repositories(), StorageBackend::Memory)
    }

    /// Build the application state from configuration.
    ///
    /// A configured database that cannot be reached is fatal.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StartupError> {
        match &config.database {
            #[cfg(feature = "postgres")]
            Some(db_config) => Self::connect_postgres(db_config, config.auto_migrate).await,
            #[cfg(not(feature = "postgres"))]
            Some(_) => {
                tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
                Ok(Self::in_memory())
            }
            None => {
                if config.auto_migrate {
                    tracing::warn!("AUTO_MIGRATE has no effect without a database");
                }
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Ok(Self::in_memory())
            }
        }
    }

    #[cfg(feature = "postgres")]
    async fn connect_postgres(
        db_config: &folio_infra::DatabaseConfig,
        auto_migrate: bool,
    ) -> Result<Self, StartupError> {
        let conn = folio_infra::database::connect(db_config)
            .await
            .map_err(StartupError::Connect)?;

        if auto_migrate {
            tracing::info!("Applying pending migrations");
            Migrator::up(&conn, None)
                .await
                .map_err(StartupError::Migrate)?;
        }

        let conn = Arc::new(conn);

        tracing::info!("Application state initialized (postgres)");
        Ok(Self {
            content: folio_infra::postgres_repositories(Arc::clone(&conn)),
            storage: StorageBackend::Postgres,
            db: Some(conn),
        })
    }

    /// Run the seed routine against this state's store.
    pub async fn seed(&self) -> Result<SeedReport, StartupError> {
        let report = seed_content(&self.content).await?;

        if report.is_empty() {
            tracing::info!("Content already present - nothing to seed");
        } else {
            for collection in &report.populated {
                tracing::info!(collection, "Seeded default content");
            }
        }

        Ok(report)
    }
}
