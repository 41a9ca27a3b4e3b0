//! In-memory collection - used when no database is configured.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use folio_core::domain::{
    BlogPost, Club, MarketingWork, Message, NewBlogPost, NewClub, NewMarketingWork, NewMessage,
    NewProject, NewTestimonial, Project, Testimonial,
};
use folio_core::error::RepoError;
use folio_core::ports::CollectionRepository;

/// A record the in-memory store can complete from its insert payload.
pub trait StoredRecord: Clone + Send + Sync + 'static {
    type Insert: Send + 'static;

    fn id(&self) -> i32;

    /// Fill in the store-assigned fields.
    fn assemble(id: i32, insert: Self::Insert) -> Self;
}

/// A single collection held in a `Vec` behind an async RwLock.
///
/// Records are never removed, so identifiers stay monotonic.
/// Note: Data is lost on process restart.
pub struct InMemoryCollection<T> {
    pub(crate) records: RwLock<Vec<T>>,
}

impl<T> InMemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl<T> Default for InMemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> CollectionRepository<T, T::Insert> for InMemoryCollection<T>
where
    T: StoredRecord,
{
    async fn list(&self) -> Result<Vec<T>, RepoError> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, record: T::Insert) -> Result<T, RepoError> {
        // Hold the write lock across id assignment and push.
        let mut records = self.records.write().await;
        let id = records.last().map_or(1, |last| last.id() + 1);
        let stored = T::assemble(id, record);
        records.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.records.read().await.len() as u64)
    }
}

impl StoredRecord for Club {
    type Insert = NewClub;

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, club: NewClub) -> Self {
        Self {
            id,
            name: club.name,
            role: club.role,
            description: club.description,
            link: club.link,
            category: club.category,
            images: club.images,
        }
    }
}

impl StoredRecord for MarketingWork {
    type Insert = NewMarketingWork;

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, work: NewMarketingWork) -> Self {
        Self {
            id,
            title: work.title,
            description: work.description,
            image_url: work.image_url,
            carousel_images: work.carousel_images,
            category: work.category,
        }
    }
}

impl StoredRecord for Project {
    type Insert = NewProject;

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, project: NewProject) -> Self {
        Self {
            id,
            title: project.title,
            description: project.description,
            tech_stack: project.tech_stack,
            repo_link: project.repo_link,
            demo_link: project.demo_link,
        }
    }
}

impl StoredRecord for Message {
    type Insert = NewMessage;

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, message: NewMessage) -> Self {
        Self {
            id,
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: Utc::now(),
        }
    }
}

impl StoredRecord for Testimonial {
    type Insert = NewTestimonial;

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, testimonial: NewTestimonial) -> Self {
        Self {
            id,
            name: testimonial.name,
            role: testimonial.role,
            content: testimonial.content,
        }
    }
}

impl StoredRecord for BlogPost {
    type Insert = NewBlogPost;

    fn id(&self) -> i32 {
        self.id
    }

    fn assemble(id: i32, post: NewBlogPost) -> Self {
        let published_at = post.published_at_or(Utc::now());
        Self {
            id,
            title: post.title,
            content: post.content,
            image_url: post.image_url,
            published_at,
        }
    }
}
