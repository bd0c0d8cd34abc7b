//! Business Profile Model

use serde::{Deserialize, Serialize};

/// Restaurant (business) profile
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub theme_color: String,
    #[serde(default)]
    pub tagline: String,
}
