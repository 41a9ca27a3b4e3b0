//! Project entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use folio_core::domain::{NewProject, Project};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub tech_stack: Vec<String>,
    pub repo_link: Option<String>,
    pub demo_link: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Project {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            tech_stack: model.tech_stack,
            repo_link: model.repo_link,
            demo_link: model.demo_link,
        }
    }
}

impl From<NewProject> for ActiveModel {
    fn from(project: NewProject) -> Self {
        Self {
            id: NotSet,
            title: Set(project.title),
            description: Set(project.description),
            tech_stack: Set(project.tech_stack),
            repo_link: Set(project.repo_link),
            demo_link: Set(project.demo_link),
        }
    }
}
