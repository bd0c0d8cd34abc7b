//! Coupon Model

use serde::{Deserialize, Serialize};

/// Coupon validation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponValidate {
    pub code: String,
    /// Pre-discount cart total
    #[serde(rename = "orderTotal")]
    pub order_total: f64,
}

/// Coupon as echoed back by the validation endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coupon {
    #[serde(default)]
    pub code: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Successful validation: a flat discount amount
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouponValidation {
    pub discount: f64,
    #[serde(default)]
    pub coupon: Option<Coupon>,
}
