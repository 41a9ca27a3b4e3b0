//! Contact message entity for SeaORM.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use folio_core::domain::{Message, NewMessage};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Message {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            message: model.message,
            created_at: model.created_at.into(),
        }
    }
}

/// The creation timestamp is stamped here, at insert time.
impl From<NewMessage> for ActiveModel {
    fn from(message: NewMessage) -> Self {
        Self {
            id: NotSet,
            name: Set(message.name),
            email: Set(message.email),
            message: Set(message.message),
            created_at: Set(Utc::now().into()),
        }
    }
}
