//! Domain entities - the content records and their insert schemas.

mod blog_post;
mod club;
mod marketing;
mod message;
mod project;
mod schema;
mod testimonial;

pub use blog_post::{BlogPost, NewBlogPost};
pub use club::{Club, ClubCategory, NewClub};
pub use marketing::{MarketingWork, NewMarketingWork};
pub use message::{Message, NewMessage};
pub use project::{NewProject, Project};
pub use schema::{InsertSchema, SchemaViolation};
pub use testimonial::{NewTestimonial, Testimonial};

#[cfg(test)]
mod tests;
