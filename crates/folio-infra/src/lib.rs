//! # Folio Infrastructure
//!
//! Content store implementations for the ports defined in `folio-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL content store via SeaORM
//! - `minimal` - No external dependencies, in-memory store only

pub mod database;
pub mod memory;

pub use database::DatabaseConfig;
pub use memory::in_memory_repositories;

#[cfg(feature = "postgres")]
pub use database::postgres_repositories;
