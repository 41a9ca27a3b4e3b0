//! PostgreSQL repository implementations.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DbConn, EntityTrait, QueryOrder};

use folio_core::domain::BlogPost;
use folio_core::error::RepoError;
use folio_core::ports::{
    BlogPostRepository, ClubRepository, ContentRepositories, MarketingWorkRepository,
    MessageRepository, ProjectRepository, TestimonialRepository,
};

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::entity::club::Entity as ClubEntity;
use super::entity::marketing_work::Entity as MarketingWorkEntity;
use super::entity::message::Entity as MessageEntity;
use super::entity::project::Entity as ProjectEntity;
use super::entity::testimonial::Entity as TestimonialEntity;
use super::postgres_base::{PostgresBaseRepository, repo_error};

pub type PostgresClubRepository = PostgresBaseRepository<ClubEntity>;
pub type PostgresMarketingWorkRepository = PostgresBaseRepository<MarketingWorkEntity>;
pub type PostgresProjectRepository = PostgresBaseRepository<ProjectEntity>;
pub type PostgresMessageRepository = PostgresBaseRepository<MessageEntity>;
pub type PostgresTestimonialRepository = PostgresBaseRepository<TestimonialEntity>;
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

impl ClubRepository for PostgresClubRepository {}
impl MarketingWorkRepository for PostgresMarketingWorkRepository {}
impl ProjectRepository for PostgresProjectRepository {}
impl MessageRepository for PostgresMessageRepository {}
impl TestimonialRepository for PostgresTestimonialRepository {}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn list_published(&self) -> Result<Vec<BlogPost>, RepoError> {
        let posts = BlogPostEntity::find()
            .order_by_desc(blog_post::Column::PublishedAt)
            .order_by_desc(blog_post::Column::Id)
            .all(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        Ok(posts.into_iter().map(Into::into).collect())
    }

    async fn latest(&self) -> Result<Option<BlogPost>, RepoError> {
        let post = BlogPostEntity::find()
            .order_by_desc(blog_post::Column::PublishedAt)
            .order_by_desc(blog_post::Column::Id)
            .one(self.db.as_ref())
            .await
            .map_err(repo_error)?;

        Ok(post.map(Into::into))
    }
}

/// Content access layer backed by one shared connection pool.
pub fn postgres_repositories(db: Arc<DbConn>) -> ContentRepositories {
    ContentRepositories {
        clubs: Arc::new(PostgresClubRepository::new(Arc::clone(&db))),
        marketing: Arc::new(PostgresMarketingWorkRepository::new(Arc::clone(&db))),
        projects: Arc::new(PostgresProjectRepository::new(Arc::clone(&db))),
        messages: Arc::new(PostgresMessageRepository::new(Arc::clone(&db))),
        testimonials: Arc::new(PostgresTestimonialRepository::new(Arc::clone(&db))),
        blog_posts: Arc::new(PostgresBlogPostRepository::new(db)),
    }
}
