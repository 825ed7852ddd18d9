//! Database connection management and the MySQL post repository.

mod connections;

#[cfg(feature = "mysql")]
pub mod entity;
#[cfg(feature = "mysql")]
mod mysql_repo;

pub use connections::DatabaseConfig;

#[cfg(feature = "mysql")]
pub use connections::DatabaseConnections;
#[cfg(feature = "mysql")]
pub use mysql_repo::MySqlPostRepository;

#[cfg(feature = "mysql")]
#[cfg(test)]
mod tests;
