use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    BlogPost, Club, MarketingWork, Message, NewBlogPost, NewClub, NewMarketingWork, NewMessage,
    NewProject, NewTestimonial, Project, Testimonial,
};
use crate::error::RepoError;

/// One content collection: insert-one, select-all and count.
///
/// `T` is the stored record, `N` the insert payload the store completes with
/// its own fields (identifier, timestamps).
#[async_trait]
pub trait CollectionRepository<T, N>: Send + Sync {
    /// Every record in the collection, in ascending identifier order.
    async fn list(&self) -> Result<Vec<T>, RepoError>;

    /// Insert a single record and return it as stored.
    async fn create(&self, record: N) -> Result<T, RepoError>;

    /// Number of records in the collection.
    async fn count(&self) -> Result<u64, RepoError>;
}

pub trait ClubRepository: CollectionRepository<Club, NewClub> {}

pub trait MarketingWorkRepository: CollectionRepository<MarketingWork, NewMarketingWork> {}

pub trait ProjectRepository: CollectionRepository<Project, NewProject> {}

pub trait MessageRepository: CollectionRepository<Message, NewMessage> {}

pub trait TestimonialRepository: CollectionRepository<Testimonial, NewTestimonial> {}

/// Blog post repository with publication-ordered reads.
#[async_trait]
pub trait BlogPostRepository: CollectionRepository<BlogPost, NewBlogPost> {
    /// All posts, newest `published_at` first.
    async fn list_published(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// The newest post, if any. Always equals the head of `list_published`.
    async fn latest(&self) -> Result<Option<BlogPost>, RepoError>;
}

/// The content access layer: one repository per entity kind.
///
/// Constructed once at startup and handed to whoever needs the store.
#[derive(Clone)]
pub struct ContentRepositories {
    pub clubs: Arc<dyn ClubRepository>,
    pub marketing: Arc<dyn MarketingWorkRepository>,
    pub projects: Arc<dyn ProjectRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub testimonials: Arc<dyn TestimonialRepository>,
    pub blog_posts: Arc<dyn BlogPostRepository>,
}
