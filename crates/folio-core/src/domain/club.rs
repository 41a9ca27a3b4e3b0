use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::InsertSchema;

/// Where a club is listed on the clubs page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClubCategory {
    Main,
    Other,
}

impl ClubCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClubCategory::Main => "main",
            ClubCategory::Other => "other",
        }
    }
}

impl fmt::Display for ClubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Club - a club or leadership activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub role: String,
    pub description: String,
    pub link: Option<String>,
    pub category: ClubCategory,
    pub images: Vec<String>,
}

/// Insert schema for a club. Clubs are only created by seeding.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewClub {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub link: Option<String>,
    pub category: ClubCategory,
    #[serde(default)]
    pub images: Vec<String>,
}

impl InsertSchema for NewClub {
    const FIELDS: &'static [&'static str] = &["name", "role", "description"];
}
