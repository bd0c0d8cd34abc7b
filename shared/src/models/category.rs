//! Category Model

use serde::{Deserialize, Serialize};

/// Menu category entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
}

/// Image attached to a category create/update (sent as multipart)
#[derive(Debug, Clone)]
pub struct CategoryImage {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Create category payload
#[derive(Debug, Clone)]
pub struct CategoryCreate {
    pub name: String,
    pub image: Option<CategoryImage>,
}

/// Update category payload
#[derive(Debug, Clone)]
pub struct CategoryUpdate {
    pub name: String,
    pub image: Option<CategoryImage>,
}
