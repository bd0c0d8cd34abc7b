//! Subscription Plan Model

use serde::{Deserialize, Serialize};

/// Billing cycle offered on the plans page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingCycle {
    #[default]
    Monthly,
    Annual,
}

impl BillingCycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Annual => "annual",
        }
    }
}

/// Subscription plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub id: String,
    pub name: String,
    /// Price in currency unit for the selected cycle
    pub price: f64,
    pub duration_days: u32,
    pub features: Vec<String>,
}

/// Current subscription of a business
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub status: String,
    pub name: String,
    #[serde(default)]
    pub expires_at: Option<String>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// `GET /api/subscription/status/:businessId` body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionStatusResponse {
    #[serde(default)]
    pub subscription: Option<Subscription>,
}
