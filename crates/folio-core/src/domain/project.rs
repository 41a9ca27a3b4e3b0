use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::InsertSchema;
use super::schema::no_blank_entries;

/// Project - a coding project card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub repo_link: Option<String>,
    pub demo_link: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(
        length(min = 1, message = "At least one technology is required"),
        custom(function = "no_blank_entries")
    )]
    pub tech_stack: Vec<String>,
    pub repo_link: Option<String>,
    pub demo_link: Option<String>,
}

impl InsertSchema for NewProject {
    const FIELDS: &'static [&'static str] = &["title", "description", "tech_stack"];
}
