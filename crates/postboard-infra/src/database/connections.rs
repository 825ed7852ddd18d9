use std::time::Duration;

#[cfg(feature = "mysql")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the MySQL post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
}

/// Pooled connection to the post database.
///
/// Each repository call checks a connection out of the pool and hands it
/// back when the call finishes, whether it succeeded or not.
#[cfg(feature = "mysql")]
pub struct DatabaseConnections {
    pub main: DbConn,
}

#[cfg(feature = "mysql")]
impl DatabaseConnections {
    /// Open the connection pool from configuration.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection pool...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(config.connect_timeout)
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Database connected"
        );

        Ok(Self { main })
    }

    /// Close the pool. Best-effort: a failure is logged, never returned.
    pub async fn close(&self) {
        match self.main.close_by_ref().await {
            Ok(()) => tracing::info!("Database connection pool closed"),
            Err(e) => tracing::warn!(error = %e, "Failed to close database connection pool"),
        }
    }
}
