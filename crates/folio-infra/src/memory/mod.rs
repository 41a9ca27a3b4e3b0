//! In-memory content store.

mod collection;

use std::sync::Arc;

use async_trait::async_trait;

use folio_core::domain::{BlogPost, Club, MarketingWork, Message, Project, Testimonial};
use folio_core::error::RepoError;
use folio_core::ports::{
    BlogPostRepository, ClubRepository, ContentRepositories, MarketingWorkRepository,
    MessageRepository, ProjectRepository, TestimonialRepository,
};

pub use collection::{InMemoryCollection, StoredRecord};

pub type InMemoryClubRepository = InMemoryCollection<Club>;
pub type InMemoryMarketingWorkRepository = InMemoryCollection<MarketingWork>;
pub type InMemoryProjectRepository = InMemoryCollection<Project>;
pub type InMemoryMessageRepository = InMemoryCollection<Message>;
pub type InMemoryTestimonialRepository = InMemoryCollection<Testimonial>;
pub type InMemoryBlogPostRepository = InMemoryCollection<BlogPost>;

impl ClubRepository for InMemoryClubRepository {}
impl MarketingWorkRepository for InMemoryMarketingWorkRepository {}
impl ProjectRepository for InMemoryProjectRepository {}
impl MessageRepository for InMemoryMessageRepository {}
impl TestimonialRepository for InMemoryTestimonialRepository {}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn list_published(&self) -> Result<Vec<BlogPost>, RepoError> {
        let mut posts = self.records.read().await.clone();
        posts.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(posts)
    }

    async fn latest(&self) -> Result<Option<BlogPost>, RepoError> {
        let posts = self.records.read().await;
        Ok(posts
            .iter()
            .max_by(|a, b| {
                a.published_at
                    .cmp(&b.published_at)
                    .then_with(|| a.id.cmp(&b.id))
            })
            .cloned())
    }
}

/// Content access layer over fresh, empty in-memory collections.
pub fn in_memory_repositories() -> ContentRepositories {
    ContentRepositories {
        clubs: Arc::new(InMemoryClubRepository::new()),
        marketing: Arc::new(InMemoryMarketingWorkRepository::new()),
        projects: Arc::new(InMemoryProjectRepository::new()),
        messages: Arc::new(InMemoryMessageRepository::new()),
        testimonials: Arc::new(InMemoryTestimonialRepository::new()),
        blog_posts: Arc::new(InMemoryBlogPostRepository::new()),
    }
}
