//! Session - persisted client state
//!
//! The single owner of every persisted key. View models never touch the
//! underlying [`KvStore`] directly; they go through the typed accessors here.
//!
//! Values are plain strings, JSON for structured entries (cart snapshots,
//! billing settings). A value that fails to parse is treated as absent.

pub mod keys;
pub mod store;

pub use store::{FileStore, KvStore, MemoryStore};

use crate::{ClientConfig, ClientResult};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{CartItem, ExtraPercent};
use std::sync::Arc;

/// Typed view over the persisted key/value store
#[derive(Debug, Clone)]
pub struct Session {
    store: Arc<dyn KvStore>,
}

impl Session {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Session that lives only in memory
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Session backed by a JSON file
    pub fn open_file(path: impl Into<std::path::PathBuf>) -> ClientResult<Self> {
        Ok(Self::new(Arc::new(FileStore::open(path)?)))
    }

    /// File-backed if the config names a storage path, else in memory
    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        match &config.storage_path {
            Some(path) => Self::open_file(path.clone()),
            None => Ok(Self::in_memory()),
        }
    }

    fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.store.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(key, error = %e, "Failed to parse persisted value");
                None
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> ClientResult<()> {
        let json = serde_json::to_string(value)?;
        self.store.set(key, &json)
    }

    fn read_non_empty(&self, key: &str) -> Option<String> {
        self.store.get(key).filter(|v| !v.is_empty())
    }

    // ========== Business ==========

    pub fn business_id(&self) -> Option<i64> {
        self.store.get(keys::BUSINESS_ID)?.trim().parse().ok()
    }

    pub fn set_business_id(&self, id: impl ToString) -> ClientResult<()> {
        self.store.set(keys::BUSINESS_ID, &id.to_string())
    }

    pub fn business_name(&self) -> Option<String> {
        self.read_non_empty(keys::BUSINESS_NAME)
    }

    pub fn set_business_name(&self, name: &str) -> ClientResult<()> {
        self.store.set(keys::BUSINESS_NAME, name)
    }

    // ========== Auth ==========

    /// Staff token attached to mutating and staff-scoped calls
    pub fn auth_token(&self) -> Option<String> {
        self.read_non_empty(keys::AUTH_TOKEN)
    }

    pub fn set_auth_token(&self, token: &str) -> ClientResult<()> {
        self.store.set(keys::AUTH_TOKEN, token)
    }

    pub fn role(&self) -> Option<String> {
        self.read_non_empty(keys::ROLE).map(|r| r.to_lowercase())
    }

    pub fn set_role(&self, role: &str) -> ClientResult<()> {
        self.store.set(keys::ROLE, role)
    }

    /// A role is present (staff or owner signed in)
    pub fn is_logged_in(&self) -> bool {
        self.role().is_some()
    }

    pub fn logout(&self) -> ClientResult<()> {
        self.store.remove(keys::AUTH_TOKEN)?;
        self.store.remove(keys::ROLE)
    }

    pub fn customer_token(&self) -> Option<String> {
        self.read_non_empty(keys::CUSTOMER_TOKEN)
    }

    pub fn set_customer_token(&self, token: &str) -> ClientResult<()> {
        self.store.set(keys::CUSTOMER_TOKEN, token)
    }

    pub fn customer_logout(&self) -> ClientResult<()> {
        self.store.remove(keys::CUSTOMER_TOKEN)
    }

    // ========== Table ==========

    pub fn table_number(&self) -> Option<i64> {
        self.store.get(keys::TABLE_NUMBER)?.trim().parse().ok()
    }

    pub fn set_table_number(&self, table: i64) -> ClientResult<()> {
        self.store.set(keys::TABLE_NUMBER, &table.to_string())
    }

    // ========== Billing ==========

    /// Saved surcharge percentages; `None` until the settings panel is saved
    pub fn extra_percent(&self) -> Option<ExtraPercent> {
        self.read_json(keys::EXTRA_PERCENT)
    }

    pub fn set_extra_percent(&self, percent: &ExtraPercent) -> ClientResult<()> {
        self.write_json(keys::EXTRA_PERCENT, percent)
    }

    // ========== Cart ==========

    pub fn existing_items(&self) -> Vec<CartItem> {
        self.read_json(keys::EXISTING_ITEMS).unwrap_or_default()
    }

    pub fn set_existing_items(&self, items: &[CartItem]) -> ClientResult<()> {
        self.write_json(keys::EXISTING_ITEMS, items)
    }

    pub fn clear_existing_items(&self) -> ClientResult<()> {
        self.store.remove(keys::EXISTING_ITEMS)
    }

    /// Staging buffer filled by the menu flow
    pub fn newly_added_items(&self) -> Vec<CartItem> {
        self.read_json(keys::NEWLY_ADDED_ITEMS).unwrap_or_default()
    }

    pub fn set_newly_added_items(&self, items: &[CartItem]) -> ClientResult<()> {
        self.write_json(keys::NEWLY_ADDED_ITEMS, items)
    }

    pub fn clear_newly_added_items(&self) -> ClientResult<()> {
        self.store.remove(keys::NEWLY_ADDED_ITEMS)
    }

    /// Order id the item was tagged with while editing that order
    pub fn item_tag(&self, product_id: i64) -> Option<String> {
        self.read_non_empty(&keys::item_tag(product_id))
    }

    pub fn set_item_tag(&self, product_id: i64, order_id: &str) -> ClientResult<()> {
        self.store.set(&keys::item_tag(product_id), order_id)
    }

    pub fn clear_item_tag(&self, product_id: i64) -> ClientResult<()> {
        self.store.remove(&keys::item_tag(product_id))
    }

    pub fn edit_order_id(&self) -> Option<String> {
        self.read_non_empty(keys::EDIT_ORDER_ID)
    }

    pub fn set_edit_order_id(&self, order_id: &str) -> ClientResult<()> {
        self.store.set(keys::EDIT_ORDER_ID, order_id)
    }

    pub fn clear_edit_order_id(&self) -> ClientResult<()> {
        self.store.remove(keys::EDIT_ORDER_ID)
    }

    pub fn last_order_id(&self) -> Option<String> {
        self.read_non_empty(keys::LAST_ORDER_ID)
    }

    pub fn set_last_order_id(&self, order_id: &str) -> ClientResult<()> {
        self.store.set(keys::LAST_ORDER_ID, order_id)
    }

    /// Drop every cart-related key and the tags of `items`
    ///
    /// A sequence of independent writes; a failure part-way leaves the
    /// earlier keys cleared.
    pub fn clear_cart(&self, items: &[CartItem]) -> ClientResult<()> {
        self.clear_edit_order_id()?;
        self.clear_existing_items()?;
        self.clear_newly_added_items()?;
        for item in items {
            self.clear_item_tag(item.id)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corrupt_json_reads_as_empty() {
        let store = Arc::new(MemoryStore::new());
        store.set(keys::EXISTING_ITEMS, "{not json").unwrap();
        let session = Session::new(store);
        assert!(session.existing_items().is_empty());
    }

    #[test]
    fn test_empty_string_token_is_absent() {
        let session = Session::in_memory();
        session.set_auth_token("").unwrap();
        assert!(session.auth_token().is_none());
    }

    #[test]
    fn test_logout_clears_token_and_role() {
        let session = Session::in_memory();
        session.set_auth_token("abc").unwrap();
        session.set_role("Admin").unwrap();
        assert_eq!(session.role().as_deref(), Some("admin"));

        session.logout().unwrap();
        assert!(session.auth_token().is_none());
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_clear_cart_removes_tags() {
        let session = Session::in_memory();
        let items = vec![CartItem::new(1, "Naan", 40.0), CartItem::new(2, "Dal", 120.0)];
        session.set_existing_items(&items).unwrap();
        session.set_item_tag(1, "ORD00007").unwrap();
        session.set_item_tag(2, "ORD00007").unwrap();
        session.set_edit_order_id("ORD00007").unwrap();

        session.clear_cart(&items).unwrap();

        assert!(session.existing_items().is_empty());
        assert!(session.item_tag(1).is_none());
        assert!(session.item_tag(2).is_none());
        assert!(session.edit_order_id().is_none());
    }
}
