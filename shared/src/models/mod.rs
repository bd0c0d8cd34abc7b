//! Data models
//!
//! Wire types shared between the client library and anything that talks to
//! the restaurant backend. Money is carried as `f64` in currency unit;
//! arithmetic happens in `rust_decimal` on the client side.

pub mod billing;
pub mod cart;
pub mod category;
pub mod coupon;
pub mod dining_table;
pub mod member;
pub mod order;
pub mod plan;
pub mod product;
pub mod store_info;

// Re-exports
pub use billing::*;
pub use cart::*;
pub use category::*;
pub use coupon::*;
pub use dining_table::*;
pub use member::*;
pub use order::*;
pub use plan::*;
pub use product::*;
pub use store_info::*;
