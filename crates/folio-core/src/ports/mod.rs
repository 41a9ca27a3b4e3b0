//! Ports - trait definitions for the content store.
//! These are the "interfaces" that infrastructure must implement.

mod repository;

pub use repository::{
    BlogPostRepository, ClubRepository, CollectionRepository, ContentRepositories,
    MarketingWorkRepository, MessageRepository, ProjectRepository, TestimonialRepository,
};
