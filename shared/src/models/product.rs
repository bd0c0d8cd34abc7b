//! Product Model

use serde::{Deserialize, Serialize};

/// Free-form product metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMetadata {
    pub price_full: Option<f64>,
    pub spiciness: Option<u8>,
    pub ingredients: Option<String>,
    pub about: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub favorite: Option<bool>,
}

/// Product entity as returned by `GET /api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in currency unit
    pub price: f64,
    #[serde(default)]
    pub metadata: Option<ProductMetadata>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
