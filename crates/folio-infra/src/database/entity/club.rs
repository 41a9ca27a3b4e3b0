//! Club entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use folio_core::domain::{Club, ClubCategory, NewClub};

/// Text-backed club category; any other stored value fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Category {
    #[sea_orm(string_value = "main")]
    Main,
    #[sea_orm(string_value = "other")]
    Other,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clubs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub role: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub link: Option<String>,
    pub category: Category,
    pub images: Vec<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Category> for ClubCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Main => ClubCategory::Main,
            Category::Other => ClubCategory::Other,
        }
    }
}

impl From<ClubCategory> for Category {
    fn from(category: ClubCategory) -> Self {
        match category {
            ClubCategory::Main => Category::Main,
            ClubCategory::Other => Category::Other,
        }
    }
}

/// Conversion from SeaORM Model to Domain Club.
impl From<Model> for Club {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            role: model.role,
            description: model.description,
            link: model.link,
            category: model.category.into(),
            images: model.images,
        }
    }
}

/// Conversion from the insert payload to a SeaORM ActiveModel.
impl From<NewClub> for ActiveModel {
    fn from(club: NewClub) -> Self {
        Self {
            id: NotSet,
            name: Set(club.name),
            role: Set(club.role),
            description: Set(club.description),
            link: Set(club.link),
            category: Set(club.category.into()),
            images: Set(club.images),
        }
    }
}
