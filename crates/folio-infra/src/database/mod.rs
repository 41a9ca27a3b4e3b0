//! Database connection management and the PostgreSQL content store.

mod connections;

#[cfg(feature = "postgres")]
mod postgres_base;
#[cfg(feature = "postgres")]
pub mod postgres_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use connections::{connect, ping};

#[cfg(feature = "postgres")]
pub use sea_orm::{DbConn, DbErr};

#[cfg(feature = "postgres")]
pub use postgres_base::PostgresBaseRepository;

#[cfg(feature = "postgres")]
pub use postgres_repo::{
    PostgresBlogPostRepository, PostgresClubRepository, PostgresMarketingWorkRepository,
    PostgresMessageRepository, PostgresProjectRepository, PostgresTestimonialRepository,
    postgres_repositories,
};
