//! # Postboard Core
//!
//! The domain layer of the Postboard service.
//! Posts and the repository port live here, with no infrastructure
//! dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
