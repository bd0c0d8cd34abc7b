//! Staff order list

use crate::{ClientError, ClientResult, DineInClient};
use shared::models::{Order, OrderStatus};

const FETCH_FAILED: &str = "Failed to fetch orders";

/// Search fields of the list view; empty means "match all"
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Case-insensitive substring of the order id
    pub order_id: String,
    /// Substring of the table number
    pub table: String,
}

impl OrderFilter {
    pub fn matches(&self, order: &Order) -> bool {
        let id_ok = self.order_id.is_empty()
            || order
                .order_id
                .to_lowercase()
                .contains(&self.order_id.to_lowercase());
        let table_ok = self.table.is_empty() || order.table_number.to_string().contains(&self.table);
        id_ok && table_ok
    }

    pub fn is_active(&self) -> bool {
        !self.order_id.is_empty() || !self.table.is_empty()
    }
}

fn status_rank(status: OrderStatus) -> u8 {
    match status {
        OrderStatus::Pending => 0,
        OrderStatus::Completed => 2,
        _ => 1,
    }
}

/// Pending first, Completed last, stable otherwise
pub fn sort_orders(orders: &mut [Order]) {
    orders.sort_by_key(|o| status_rank(o.status));
}

/// Order list view model
#[derive(Debug)]
pub struct OrderList {
    client: DineInClient,
    date: Option<String>,
    orders: Vec<Order>,
    error: Option<String>,
    pub filter: OrderFilter,
}

impl OrderList {
    pub fn new(client: &DineInClient) -> Self {
        Self {
            client: client.clone(),
            date: None,
            orders: Vec::new(),
            error: None,
            filter: OrderFilter::default(),
        }
    }

    pub fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    /// Change the day filter (`YYYY-MM-DD`, empty clears) and refetch
    pub async fn set_date(&mut self, date: Option<&str>) -> ClientResult<()> {
        self.date = date.filter(|d| !d.is_empty()).map(str::to_string);
        self.refresh().await
    }

    /// Refetch; on failure the list is emptied and the error kept for display
    pub async fn refresh(&mut self) -> ClientResult<()> {
        self.orders.clear();
        self.error = None;
        match self.client.orders(self.date.as_deref()).await {
            Ok(mut orders) => {
                sort_orders(&mut orders);
                tracing::debug!(count = orders.len(), date = ?self.date, "Orders fetched");
                self.orders = orders;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch orders");
                self.error = Some(match &e {
                    ClientError::Api { message, .. } => message.clone(),
                    _ => FETCH_FAILED.to_string(),
                });
                Err(e)
            }
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Orders passing the search filters
    pub fn visible(&self) -> Vec<&Order> {
        self.orders.iter().filter(|o| self.filter.matches(o)).collect()
    }

    /// Text for an empty list
    pub fn empty_message(&self) -> &'static str {
        if self.date.is_some() {
            "No orders are available on this date."
        } else {
            "No orders found."
        }
    }

    /// Clear every filter including the date, then refetch
    pub async fn clear_filters(&mut self) -> ClientResult<()> {
        self.filter = OrderFilter::default();
        self.set_date(None).await
    }
}

/// Detail view path for a row
pub fn detail_path(order_id: &str) -> String {
    format!("/order-details/{}", order_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: i64, table: i64, status: OrderStatus) -> Order {
        serde_json::from_value::<Order>(serde_json::json!({
            "id": id,
            "table_number": table,
            "status": status.as_str(),
            "items": []
        }))
        .unwrap()
        .normalize()
    }

    #[test]
    fn test_sort_pending_first_completed_last() {
        let mut orders = vec![
            order(1, 1, OrderStatus::Completed),
            order(2, 1, OrderStatus::Served),
            order(3, 1, OrderStatus::Pending),
            order(4, 1, OrderStatus::Completed),
            order(5, 1, OrderStatus::Pending),
        ];
        sort_orders(&mut orders);
        let ids: Vec<i64> = orders.iter().filter_map(|o| o.id).collect();
        assert_eq!(ids, vec![3, 5, 2, 1, 4]);
    }

    #[test]
    fn test_filter_by_id_and_table() {
        let a = order(12, 3, OrderStatus::Pending);
        let b = order(7, 13, OrderStatus::Pending);

        let filter = OrderFilter {
            order_id: "ord0001".into(),
            table: String::new(),
        };
        assert!(filter.matches(&a));
        assert!(!filter.matches(&b));

        let filter = OrderFilter {
            order_id: String::new(),
            table: "3".into(),
        };
        assert!(filter.matches(&a));
        assert!(filter.matches(&b));
        assert!(filter.is_active());
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(detail_path("ORD00012"), "/order-details/ORD00012");
    }
}
