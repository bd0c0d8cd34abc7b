//! Subscription plans

use crate::redirect::{LOGIN_PATH, Redirect};
use crate::{ClientResult, DineInClient};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use shared::models::{BillingCycle, Plan, Subscription};

/// Checkout view
pub const CHECKOUT_PATH: &str = "/PlanCheckoutPage";
/// Suffix marking a feature the plan does not include
const DISABLED_SUFFIX: &str = "(Disabled)";
/// Plan highlighted on the page
pub const HIGHLIGHT_PLAN_INDEX: usize = 1;

fn features(list: &[&str]) -> Vec<String> {
    list.iter().map(|f| f.to_string()).collect()
}

/// Plans offered for a billing cycle
pub fn demo_plans(cycle: BillingCycle) -> Vec<Plan> {
    let monthly = cycle == BillingCycle::Monthly;
    let duration = if monthly { 30 } else { 365 };
    vec![
        Plan {
            id: "trial".into(),
            name: "Trial".into(),
            price: 0.0,
            duration_days: 28,
            features: features(&[
                "Digital Menu (Limited Items)",
                "Basic Order Taking",
                "Trial Access Features",
                "Community Support",
                "Limited Analytics (Disabled)",
            ]),
        },
        Plan {
            id: "basic".into(),
            name: "Basic".into(),
            price: if monthly { 399.0 } else { 4599.0 },
            duration_days: duration,
            features: features(&[
                "Digital Menu (Up to 25 Items)",
                "Order Management",
                "Daily Sales Report",
                "Promotions & Offers",
                "Advanced Analytics (Disabled)",
            ]),
        },
        Plan {
            id: "pro".into(),
            name: "Pro".into(),
            price: if monthly { 599.0 } else { 6599.0 },
            duration_days: duration,
            features: features(&[
                "Unlimited Menu Items",
                "QR Table Ordering",
                "Customer Feedback System",
                "Offers & Promotions",
                "Analytics Dashboard (Disabled)",
                "Inventory Management (Disabled)",
            ]),
        },
        Plan {
            id: "standard".into(),
            name: "Standard".into(),
            price: if monthly { 799.0 } else { 8599.0 },
            duration_days: duration,
            features: features(&[
                "All Pro Features",
                "Multi-Branch Support",
                "Staff Role Management",
                "Real-Time Inventory",
                "Loyalty Program Integration",
                "24/7 Premium Support",
            ]),
        },
    ]
}

/// A feature line split into label and availability
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    pub label: String,
    pub enabled: bool,
}

pub fn parse_feature(raw: &str) -> Feature {
    match raw.trim().strip_suffix(DISABLED_SUFFIX) {
        Some(label) => Feature {
            label: label.trim_end().to_string(),
            enabled: false,
        },
        None => Feature {
            label: raw.trim().to_string(),
            enabled: true,
        },
    }
}

/// `businessId` claim of a JWT, without verifying the signature
pub fn business_id_from_token(token: &str) -> Option<String> {
    let payload = token.split('.').nth(1)?;
    let bytes = match URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Error decoding token");
            return None;
        }
    };
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    match claims.get("businessId")? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// What pressing "buy" on a plan leads to
#[derive(Debug, Clone, PartialEq)]
pub enum BuyDecision {
    /// Not signed in
    Login(Redirect),
    /// The same plan is already active
    AlreadySubscribed,
    Checkout { plan: Plan, redirect: Redirect },
}

/// Plans page view model
#[derive(Debug)]
pub struct PlansView {
    client: DineInClient,
    cycle: BillingCycle,
    subscription: Option<Subscription>,
}

impl PlansView {
    /// Load the current subscription when a token with a business id is stored
    ///
    /// Failures are logged and treated as "no subscription".
    pub async fn load(client: &DineInClient) -> Self {
        let subscription = match client.session().auth_token().as_deref().and_then(business_id_from_token) {
            Some(business_id) => match client.subscription_status(&business_id).await {
                Ok(sub) => sub,
                Err(e) => {
                    tracing::warn!(business_id = %business_id, error = %e, "Subscription check error");
                    None
                }
            },
            None => None,
        };
        Self {
            client: client.clone(),
            cycle: BillingCycle::default(),
            subscription,
        }
    }

    pub fn cycle(&self) -> BillingCycle {
        self.cycle
    }

    pub fn set_cycle(&mut self, cycle: BillingCycle) {
        self.cycle = cycle;
    }

    pub fn plans(&self) -> Vec<Plan> {
        demo_plans(self.cycle)
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    pub fn buy(&self, plan: &Plan) -> BuyDecision {
        if self.client.session().auth_token().is_none() {
            return BuyDecision::Login(Redirect::now(LOGIN_PATH));
        }
        if let Some(sub) = &self.subscription
            && sub.is_active()
            && sub.name.to_lowercase() == plan.name.to_lowercase()
        {
            return BuyDecision::AlreadySubscribed;
        }
        BuyDecision::Checkout {
            plan: plan.clone(),
            redirect: Redirect::now(CHECKOUT_PATH),
        }
    }
}
