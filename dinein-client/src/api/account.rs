//! Customer profile, subscription and dashboard endpoints

use crate::{ClientError, ClientResult, DineInClient};
use shared::models::{Customer, CustomerUpdate, Subscription, SubscriptionStatusResponse};

impl DineInClient {
    // ========== Customer API ==========

    /// Profile of the signed-in customer
    pub async fn customer_profile(&self) -> ClientResult<Customer> {
        let token = self.session.customer_token().ok_or(ClientError::Unauthorized)?;
        self.http.get("api/customers/me", Some(token.as_str())).await
    }

    pub async fn update_customer(&self, id: i64, update: &CustomerUpdate) -> ClientResult<()> {
        let token = self.session.customer_token().ok_or(ClientError::Unauthorized)?;
        self.http
            .put_unit(&format!("api/customers/customer/{}/full", id), update, Some(token.as_str()))
            .await
    }

    // ========== Subscription API ==========

    pub async fn subscription_status(&self, business_id: &str) -> ClientResult<Option<Subscription>> {
        let token = self.staff_token().ok_or(ClientError::Unauthorized)?;
        let body: SubscriptionStatusResponse = self
            .http
            .get(&format!("api/subscription/status/{}", business_id), Some(token.as_str()))
            .await?;
        Ok(body.subscription)
    }

    // ========== Dashboard API ==========

    pub async fn customers(&self) -> ClientResult<serde_json::Value> {
        let token = self.staff_token();
        self.http.get("api/customers", token.as_deref()).await
    }

    pub async fn ratings(&self) -> ClientResult<serde_json::Value> {
        let token = self.staff_token();
        self.http.get("api/ratings", token.as_deref()).await
    }

    pub async fn top_dishes(&self) -> ClientResult<serde_json::Value> {
        let token = self.staff_token();
        self.http.get("api/top-dishes", token.as_deref()).await
    }
}
