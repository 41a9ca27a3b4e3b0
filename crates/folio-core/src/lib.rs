//! # Folio Core
//!
//! The domain layer of the Folio portfolio backend.
//! This crate contains the content records, their insert schemas, the
//! repository ports and the seed routine, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod seed;

pub use error::RepoError;
pub use seed::{SeedReport, seed_content};
