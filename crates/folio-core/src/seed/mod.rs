//! Startup bootstrap that fills empty collections with default content.
//!
//! A collection is seeded only when it holds no records at all, so running
//! the routine again never duplicates content. Nothing here versions the
//! defaults: editing them does not touch collections that were already seeded.

pub mod defaults;

use crate::domain::{
    BlogPost, Club, MarketingWork, Message, NewBlogPost, NewClub, NewMarketingWork, NewMessage,
    NewProject, NewTestimonial, Project, Testimonial,
};
use crate::error::RepoError;
use crate::ports::{CollectionRepository, ContentRepositories};

/// Collections populated by one seed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub populated: Vec<&'static str>,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.populated.is_empty()
    }
}

/// Seed every empty collection, in a fixed order.
///
/// Two processes starting against the same empty store can both observe
/// "empty" and insert twice; seeding assumes a single instance.
pub async fn seed_content(repos: &ContentRepositories) -> Result<SeedReport, RepoError> {
    let mut report = SeedReport::default();

    if seed_collection::<Club, NewClub, _>(repos.clubs.as_ref(), defaults::clubs()).await? {
        report.populated.push("clubs");
    }
    if seed_collection::<Project, NewProject, _>(repos.projects.as_ref(), defaults::projects())
        .await?
    {
        report.populated.push("projects");
    }
    if seed_collection::<MarketingWork, NewMarketingWork, _>(
        repos.marketing.as_ref(),
        defaults::marketing_work(),
    )
    .await?
    {
        report.populated.push("marketing_work");
    }
    if seed_collection::<Testimonial, NewTestimonial, _>(
        repos.testimonials.as_ref(),
        defaults::testimonials(),
    )
    .await?
    {
        report.populated.push("testimonials");
    }
    if seed_collection::<BlogPost, NewBlogPost, _>(
        repos.blog_posts.as_ref(),
        defaults::blog_posts(),
    )
    .await?
    {
        report.populated.push("blog_posts");
    }
    if seed_collection::<Message, NewMessage, _>(repos.messages.as_ref(), defaults::messages())
        .await?
    {
        report.populated.push("messages");
    }

    Ok(report)
}

/// Insert `records` in order if the collection is empty. Returns whether
/// anything was inserted.
async fn seed_collection<T, N, R>(repo: &R, records: Vec<N>) -> Result<bool, RepoError>
where
    R: CollectionRepository<T, N> + ?Sized,
    N: Send,
{
    if records.is_empty() || repo.count().await? > 0 {
        return Ok(false);
    }

    for record in records {
        repo.create(record).await?;
    }

    Ok(true)
}
