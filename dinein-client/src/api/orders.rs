//! Orders, coupons and bill endpoints

use crate::{ClientResult, DineInClient};
use serde::Serialize;
use shared::models::{
    BillLinkUpdate, CouponValidate, CouponValidation, ItemStatusUpdate, Order, OrderStatus,
    OrderSubmit, OrderSubmitResponse,
};

/// Query for `GET /api/orders`
///
/// `_` carries a timestamp so intermediaries never serve a cached list.
#[derive(Debug, Clone, Serialize)]
pub struct OrderListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(rename = "_")]
    pub cache_buster: i64,
}

impl OrderListQuery {
    pub fn new(date: Option<&str>) -> Self {
        Self {
            date: date.filter(|d| !d.is_empty()).map(str::to_string),
            cache_buster: chrono::Utc::now().timestamp_millis(),
        }
    }
}

impl DineInClient {
    // ========== Orders API ==========

    /// Fetch one order by numeric id
    pub async fn order(&self, id: i64) -> ClientResult<Order> {
        let order: Order = self.http.get(&format!("api/orders/{}", id), None).await?;
        Ok(order.normalize())
    }

    /// Staff order list, optionally for one day (`YYYY-MM-DD`)
    pub async fn orders(&self, date: Option<&str>) -> ClientResult<Vec<Order>> {
        let token = self.staff_token();
        let orders: Vec<Order> = self
            .http
            .get_query("api/orders", &OrderListQuery::new(date), token.as_deref())
            .await?;
        Ok(orders.into_iter().map(Order::normalize).collect())
    }

    /// Dashboard: orders for a month (`YYYY-MM`)
    pub async fn orders_for_month(&self, month: Option<&str>) -> ClientResult<serde_json::Value> {
        #[derive(Serialize)]
        struct MonthQuery<'a> {
            #[serde(skip_serializing_if = "Option::is_none")]
            month: Option<&'a str>,
        }
        let token = self.staff_token();
        self.http
            .get_query("api/orders", &MonthQuery { month }, token.as_deref())
            .await
    }

    pub async fn create_order(&self, order: &OrderSubmit) -> ClientResult<OrderSubmitResponse> {
        let token = self.staff_token();
        self.http.post("api/orders", order, token.as_deref()).await
    }

    /// Replace the lines of an existing order, addressed as the UI knows it
    pub async fn update_order(&self, order_id: &str, order: &OrderSubmit) -> ClientResult<OrderSubmitResponse> {
        let token = self.staff_token();
        self.http
            .put(&format!("api/orders/{}", order_id), order, token.as_deref())
            .await
    }

    pub async fn update_item_status(&self, order_id: i64, product_id: i64, status: OrderStatus) -> ClientResult<()> {
        let token = self.staff_token();
        self.http
            .patch(
                &format!("api/orders/{}/items/{}/status", order_id, product_id),
                &ItemStatusUpdate { status },
                token.as_deref(),
            )
            .await
    }

    pub async fn complete_all_items(&self, order_id: i64) -> ClientResult<()> {
        let token = self.staff_token();
        self.http
            .patch(
                &format!("api/orders/{}/complete-all", order_id),
                &serde_json::json!({}),
                token.as_deref(),
            )
            .await
    }

    // ========== Coupon API ==========

    pub async fn validate_coupon(&self, code: &str, order_total: f64) -> ClientResult<CouponValidation> {
        let token = self.staff_token();
        let body = CouponValidate {
            code: code.to_string(),
            order_total,
        };
        self.http.post("api/coupons/validate", &body, token.as_deref()).await
    }

    // ========== Bill API ==========

    /// Record where the uploaded receipt lives
    pub async fn store_bill_link(&self, order_id: i64, bill_url: &str) -> ClientResult<()> {
        let token = self.staff_token();
        let body = BillLinkUpdate {
            bill_url: bill_url.to_string(),
        };
        self.http
            .put_unit(&format!("api/bill/{}/store-link", order_id), &body, token.as_deref())
            .await
    }
}
