//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mysql` - MySQL post storage via SeaORM

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::InMemoryPostRepository;

// Re-exports - MySQL
pub use database::DatabaseConfig;
#[cfg(feature = "mysql")]
pub use database::{DatabaseConnections, MySqlPostRepository};
