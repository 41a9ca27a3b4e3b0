//! SeaORM entities, one per content collection.

pub mod blog_post;
pub mod club;
pub mod marketing_work;
pub mod message;
pub mod project;
pub mod testimonial;
