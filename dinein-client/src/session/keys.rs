//! Persisted key names
//!
//! Only [`super::Session`] reads or writes these.

pub const BUSINESS_ID: &str = "businessId";
pub const BUSINESS_NAME: &str = "business_name";
pub const AUTH_TOKEN: &str = "token";
pub const CUSTOMER_TOKEN: &str = "customerToken";
pub const ROLE: &str = "role";
pub const TABLE_NUMBER: &str = "table_number";
pub const EXTRA_PERCENT: &str = "extra_percent";
pub const EXISTING_ITEMS: &str = "existingItems";
pub const NEWLY_ADDED_ITEMS: &str = "newlyAddedItems";
pub const EDIT_ORDER_ID: &str = "editOrderId";
pub const LAST_ORDER_ID: &str = "lastOrderId";

/// Per-item binding of a cart item to the order it is being edited for
pub fn item_tag(product_id: i64) -> String {
    format!("item_{}_orderId", product_id)
}
