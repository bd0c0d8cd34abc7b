//! Navigation intents returned by workflows
//!
//! The library never navigates itself; a workflow that ends on another view
//! hands back a [`Redirect`] for the embedding UI to follow.

use std::time::Duration;

/// Menu view
pub const MENU_PATH: &str = "/restaurant";
/// Login view
pub const LOGIN_PATH: &str = "/login";

/// Billing view for an order
pub fn bill_path(order_id: &str) -> String {
    format!("/bill/{}", order_id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub path: String,
    /// How long to wait before following it
    pub after: Duration,
}

impl Redirect {
    pub fn now(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            after: Duration::ZERO,
        }
    }

    pub fn delayed(path: impl Into<String>, after: Duration) -> Self {
        Self {
            path: path.into(),
            after,
        }
    }

    /// Sleep out the delay, then yield the path
    pub async fn wait(self) -> String {
        if !self.after.is_zero() {
            tokio::time::sleep(self.after).await;
        }
        self.path
    }
}
