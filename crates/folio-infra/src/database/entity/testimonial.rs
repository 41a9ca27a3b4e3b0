//! Testimonial entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use folio_core::domain::{NewTestimonial, Testimonial};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub role: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Testimonial {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            role: model.role,
            content: model.content,
        }
    }
}

impl From<NewTestimonial> for ActiveModel {
    fn from(testimonial: NewTestimonial) -> Self {
        Self {
            id: NotSet,
            name: Set(testimonial.name),
            role: Set(testimonial.role),
            content: Set(testimonial.content),
        }
    }
}
