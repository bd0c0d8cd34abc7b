//! Order Model

use serde::{Deserialize, Serialize};

use crate::order_id::{de_opt_i64, format_order_id};

/// Status of an order or of a single line item
///
/// Parsed case-insensitively; anything unrecognised becomes `Unknown`.
/// Staff may move an item between any two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Ready,
    Served,
    Completed,
    #[default]
    Unknown,
}

impl OrderStatus {
    /// States offered by the per-item selector, in workflow order
    pub const SELECTABLE: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Ready,
        OrderStatus::Served,
        OrderStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Ready => "Ready",
            OrderStatus::Served => "Served",
            OrderStatus::Completed => "Completed",
            OrderStatus::Unknown => "Unknown",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => OrderStatus::Pending,
            "ready" => OrderStatus::Ready,
            "served" => OrderStatus::Served,
            "completed" => OrderStatus::Completed,
            _ => OrderStatus::Unknown,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, OrderStatus::Completed)
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        OrderStatus::parse(&value)
    }
}

impl From<OrderStatus> for String {
    fn from(value: OrderStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    #[serde(rename = "productId", alias = "product_id")]
    pub product_id: i64,
    pub quantity: u32,
    /// Unit price in currency unit
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Per-item status, independent of the order's aggregate status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
}

impl OrderLineItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// Receipt / list label, falling back to the product id
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) if !name.is_empty() => name.clone(),
            _ => format!("Product #{}", self.product_id),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_some_and(|s| s.is_completed())
    }
}

/// Order entity as returned by the orders API
///
/// List and detail endpoints disagree on casing, so camelCase aliases are
/// accepted for every scalar field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Prefixed order id (`ORD00012`); filled from `id` by [`Order::normalize`]
    #[serde(default)]
    pub order_id: String,
    #[serde(default, deserialize_with = "de_opt_i64", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, alias = "tableNumber")]
    pub table_number: i64,
    #[serde(default, alias = "paymentMethod")]
    pub payment_method: String,
    #[serde(default, alias = "estimatedTime")]
    pub estimated_time: String,
    /// Total amount in currency unit
    #[serde(default, alias = "totalAmount")]
    pub total_amount: f64,
    #[serde(default)]
    pub status: OrderStatus,
    /// Creation timestamp as sent by the backend (RFC 3339)
    #[serde(default, alias = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default)]
    pub items: Vec<OrderLineItem>,
}

impl Order {
    /// Fill `order_id` from the numeric id when the backend left it out
    pub fn normalize(mut self) -> Self {
        if self.order_id.is_empty()
            && let Some(id) = self.id
        {
            self.order_id = format_order_id(id);
        }
        self
    }

    /// Completed iff every line item is Completed
    pub fn aggregate_status(&self) -> OrderStatus {
        if self.items.iter().all(OrderLineItem::is_completed) {
            OrderStatus::Completed
        } else {
            OrderStatus::Pending
        }
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_completed()).count()
    }

    pub fn all_items_completed(&self) -> bool {
        self.completed_count() == self.items.len()
    }

    /// Sum of line-item quantities
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Status shown for an item: its own, else the order's
    pub fn effective_item_status(&self, index: usize) -> Option<OrderStatus> {
        self.items
            .get(index)
            .map(|item| item.status.unwrap_or(self.status))
    }

    /// Parsed creation time, if the backend sent a valid timestamp
    pub fn created_at_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let raw = self.created_at.as_deref()?;
        chrono::DateTime::parse_from_rfc3339(raw)
            .map(|t| t.with_timezone(&chrono::Utc))
            .ok()
    }
}

/// Per-item status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemStatusUpdate {
    pub status: OrderStatus,
}

/// Record of an uploaded bill against an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillLinkUpdate {
    #[serde(rename = "billUrl")]
    pub bill_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: i64, status: Option<OrderStatus>) -> OrderLineItem {
        OrderLineItem {
            product_id,
            quantity: 1,
            price: 10.0,
            name: None,
            status,
        }
    }

    #[test]
    fn test_status_parse_is_case_insensitive() {
        assert_eq!(OrderStatus::parse("completed"), OrderStatus::Completed);
        assert_eq!(OrderStatus::parse(" PENDING "), OrderStatus::Pending);
        assert_eq!(OrderStatus::parse("Served"), OrderStatus::Served);
        assert_eq!(OrderStatus::parse("cooking"), OrderStatus::Unknown);
    }

    #[test]
    fn test_aggregate_status_single_pending_item_forces_pending() {
        let mut order: Order = serde_json::from_value(serde_json::json!({
            "order_id": "ORD00001",
            "status": "Pending",
            "items": []
        }))
        .unwrap();
        order.items = vec![
            item(1, Some(OrderStatus::Pending)),
            item(2, Some(OrderStatus::Completed)),
        ];
        assert_eq!(order.aggregate_status(), OrderStatus::Pending);

        order.items[0].status = Some(OrderStatus::Completed);
        assert_eq!(order.aggregate_status(), OrderStatus::Completed);
    }

    #[test]
    fn test_missing_item_status_is_not_completed() {
        let order = Order {
            order_id: "ORD00002".into(),
            id: Some(2),
            table_number: 4,
            payment_method: String::new(),
            estimated_time: String::new(),
            total_amount: 0.0,
            status: OrderStatus::Completed,
            created_at: None,
            items: vec![item(1, None)],
        };
        assert_eq!(order.aggregate_status(), OrderStatus::Pending);
        assert_eq!(order.effective_item_status(0), Some(OrderStatus::Completed));
    }

    #[test]
    fn test_deserialize_camel_case_list_record() {
        let order: Order = serde_json::from_value::<Order>(serde_json::json!({
            "id": 12,
            "tableNumber": 3,
            "totalAmount": 250.5,
            "paymentMethod": "Cash on Counter",
            "estimatedTime": "15 min",
            "status": "pending",
            "items": [{ "productId": 7, "quantity": 2, "price": 50.0 }]
        }))
        .unwrap()
        .normalize();

        assert_eq!(order.order_id, "ORD00012");
        assert_eq!(order.table_number, 3);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.item_count(), 2);
        assert_eq!(order.items[0].display_name(), "Product #7");
    }
}
