use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::InsertSchema;

/// MarketingWork - a marketing design sample with optional carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketingWork {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub carousel_images: Vec<String>,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewMarketingWork {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: String,
    #[serde(default)]
    pub carousel_images: Vec<String>,
    pub category: Option<String>,
}

impl InsertSchema for NewMarketingWork {
    const FIELDS: &'static [&'static str] = &["title", "description", "image_url"];
}
