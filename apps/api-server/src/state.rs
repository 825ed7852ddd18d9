//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::ports::PostRepository;
use postboard_infra::InMemoryPostRepository;

#[cfg(feature = "mysql")]
use postboard_infra::{DatabaseConnections, MySqlPostRepository};

use crate::config::AppConfig;

/// Which backend holds the posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Storage {
    Memory,
    MySql,
}

impl Storage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Storage::Memory => "memory",
            Storage::MySql => "mysql",
        }
    }
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub storage: Storage,
    #[cfg(feature = "mysql")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::from_repository(Arc::new(InMemoryPostRepository::new()), Storage::Memory)
    }

    /// State over an already-built repository, with no pool to close.
    pub fn from_repository(posts: Arc<dyn PostRepository>, storage: Storage) -> Self {
        Self {
            posts,
            storage,
            #[cfg(feature = "mysql")]
            db: None,
        }
    }

    /// Build the application state with the configured store.
    #[cfg(feature = "mysql")]
    pub async fn new(config: &AppConfig) -> Self {
        use migration::{Migrator, MigratorTrait};

        let Some(db_config) = config.database.as_ref() else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        let connections = match DatabaseConnections::init(db_config).await {
            Ok(connections) => connections,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    "Failed to connect to database. Using in-memory fallback."
                );
                return Self::in_memory();
            }
        };

        if config.run_migrations {
            if let Err(e) = Migrator::up(&connections.main, None).await {
                tracing::error!(error = %e, "Failed to apply migrations");
            } else {
                tracing::info!("Migrations applied");
            }
        }

        let posts = Arc::new(MySqlPostRepository::new(connections.main.clone()));
        tracing::info!("Application state initialized (mysql)");

        Self {
            posts,
            storage: Storage::MySql,
            db: Some(Arc::new(connections)),
        }
    }

    #[cfg(not(feature = "mysql"))]
    pub async fn new(config: &AppConfig) -> Self {
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL ignored - built without the mysql feature");
        }
        tracing::info!("Running without mysql feature - using in-memory repository");
        Self::in_memory()
    }

    /// Release store resources. Failures are logged, never returned.
    pub async fn shutdown(&self) {
        #[cfg(feature = "mysql")]
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
