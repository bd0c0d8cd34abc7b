//! Staff order views
//!
//! - [`OrderList`]: date-filtered list with search filters
//! - [`OrderDetail`]: per-item status workflow and the billing gate

mod detail;
mod list;

pub use detail::{BillingHandoff, OrderDetail, StagedItemStatus};
pub use list::{OrderFilter, OrderList};
