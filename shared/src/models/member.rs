//! Customer Model

use serde::{Deserialize, Serialize};

/// Logged-in customer profile (`GET /api/customers/me`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    /// Loyalty points
    #[serde(default)]
    pub points: i64,
}

/// Editable part of the profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: String,
    pub mobile: String,
}
