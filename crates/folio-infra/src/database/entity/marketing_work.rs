//! Marketing work entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use folio_core::domain::{MarketingWork, NewMarketingWork};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "marketing_work")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub image_url: String,
    pub carousel_images: Vec<String>,
    pub category: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for MarketingWork {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            image_url: model.image_url,
            carousel_images: model.carousel_images,
            category: model.category,
        }
    }
}

impl From<NewMarketingWork> for ActiveModel {
    fn from(work: NewMarketingWork) -> Self {
        Self {
            id: NotSet,
            title: Set(work.title),
            description: Set(work.description),
            image_url: Set(work.image_url),
            carousel_images: Set(work.carousel_images),
            category: Set(work.category),
        }
    }
}
