//! Blog post entity for SeaORM.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use folio_core::domain::{BlogPost, NewBlogPost};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub image_url: Option<String>,
    pub published_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            image_url: model.image_url,
            published_at: model.published_at.into(),
        }
    }
}

impl From<NewBlogPost> for ActiveModel {
    fn from(post: NewBlogPost) -> Self {
        let published_at = post.published_at_or(Utc::now());
        Self {
            id: NotSet,
            title: Set(post.title),
            content: Set(post.content),
            image_url: Set(post.image_url),
            published_at: Set(published_at.into()),
        }
    }
}
