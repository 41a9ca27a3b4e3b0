use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::InsertSchema;

/// BlogPost - a dated update shown newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub image_url: Option<String>,
    /// Defaults to the time of insertion.
    pub published_at: Option<DateTime<Utc>>,
}

impl NewBlogPost {
    /// Publication time, falling back to `now` when none was given.
    pub fn published_at_or(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.published_at.unwrap_or(now)
    }
}

impl InsertSchema for NewBlogPost {
    const FIELDS: &'static [&'static str] = &["title", "content"];
}
