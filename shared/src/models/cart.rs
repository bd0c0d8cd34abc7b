//! Cart Model

use serde::{Deserialize, Serialize};

use super::order::OrderStatus;

/// Cart line item, keyed by product id
///
/// Persisted as JSON in the session store, so the field names follow the
/// snapshot format the menu flow writes (`id`, `name`, `image`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product id
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    /// Always >= 1 once the item is in a cart
    pub quantity: u32,
    /// Unit price in currency unit
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl CartItem {
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            quantity: 1,
            price,
            status: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Order line as sent with a create/update order request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartLinePayload {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: u32,
    pub price: f64,
    pub name: String,
    pub status: OrderStatus,
}

impl From<&CartItem> for CartLinePayload {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.id,
            quantity: item.quantity,
            price: item.price,
            name: item.name.clone(),
            status: item.status.unwrap_or(OrderStatus::Pending),
        }
    }
}

/// Create / update order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSubmit {
    #[serde(rename = "businessId")]
    pub business_id: Option<i64>,
    pub table_number: i64,
    pub cart_items: Vec<CartLinePayload>,
    /// Amount payable after discount
    pub total_amount: f64,
    pub payment_method: String,
    pub estimated_time: String,
}

/// Create / update order response
///
/// The backend answers with either `order_id` (prefixed form) or a bare `id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderSubmitResponse {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default, deserialize_with = "crate::order_id::de_opt_id_string")]
    pub id: Option<String>,
}
