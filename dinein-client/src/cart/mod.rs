//! Cart workflow
//!
//! [`CartSession`] reconciles the three cart sources on open, owns the
//! quantity/coupon state of the cart view and submits it as a create or
//! update order request.
//!
//! Edit-mode is bound to an order id passed at open. Persisted entries are
//! filtered by their per-item tag:
//! - existing items must be tagged with exactly that order id
//! - newly added items may be untagged or tagged with that order id

mod merge;

pub use merge::merge_cart_items;

use crate::money::{self, to_decimal, to_f64};
use crate::redirect::{MENU_PATH, Redirect};
use crate::session::Session;
use crate::{ClientError, ClientResult, DineInClient};
use rust_decimal::Decimal;
use shared::models::{CartItem, CartLinePayload, Coupon, OrderSubmit};

/// Only payment method offered at the table
pub const PAYMENT_METHOD: &str = "Cash on Counter";
/// Estimate sent with every order
pub const ESTIMATED_TIME: &str = "15 min";
/// Order id recorded when the backend returns none
const UNKNOWN_ORDER_ID: &str = "N/A";

/// Add a product to the newly-added buffer from the menu
///
/// Increments the staged quantity if the product is already there.
pub fn stage_product(session: &Session, item: CartItem) -> ClientResult<Vec<CartItem>> {
    let mut staged = session.newly_added_items();
    match staged.iter_mut().find(|i| i.id == item.id) {
        Some(existing) => existing.quantity += 1,
        None => staged.push(item.with_quantity(1)),
    }
    session.set_newly_added_items(&staged)?;
    Ok(staged)
}

/// Result of a successful submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Order id as recorded in the session (`lastOrderId`)
    pub order_id: String,
    /// Whether an existing order was updated rather than created
    pub updated: bool,
    /// Where to go once the success notice has been shown
    pub redirect: Redirect,
}

impl SubmitOutcome {
    pub fn notice(&self) -> String {
        format!("Order {} successfully!", if self.updated { "updated" } else { "placed" })
    }
}

/// Live cart view
#[derive(Debug)]
pub struct CartSession {
    client: DineInClient,
    order_id: Option<String>,
    items: Vec<CartItem>,
    table_number: i64,
    discount: Decimal,
    applied_coupon: Option<Coupon>,
    /// Names of items picked up from the staging buffer on open
    newly_added: Vec<String>,
}

impl CartSession {
    /// Open the cart, reconciling caller, persisted and staged items
    ///
    /// Persists the merged list as the existing items, tags every item with
    /// `order_id` in edit-mode, and drains the staging buffer.
    pub fn open(client: &DineInClient, caller_items: &[CartItem], order_id: Option<&str>) -> ClientResult<Self> {
        let session = client.session();
        let order_id = order_id.filter(|id| !id.is_empty()).map(str::to_string);

        let mut existing = session.existing_items();
        let mut newly = session.newly_added_items();
        if let Some(current) = order_id.as_deref() {
            existing.retain(|item| session.item_tag(item.id).as_deref() == Some(current));
            newly.retain(|item| match session.item_tag(item.id) {
                None => true,
                Some(tag) => tag == current,
            });
        }

        let items = merge_cart_items(caller_items, &existing, &newly, &client.config().fallback_image);

        if let Some(current) = order_id.as_deref() {
            for item in &items {
                session.set_item_tag(item.id, current)?;
            }
        }
        session.set_existing_items(&items)?;

        let newly_added: Vec<String> = newly.iter().map(|i| i.name.clone()).collect();
        if !newly_added.is_empty() {
            tracing::info!(items = %newly_added.join(", "), "Added to cart");
            session.clear_newly_added_items()?;
        }

        Ok(Self {
            client: client.clone(),
            order_id,
            items,
            table_number: session.table_number().unwrap_or(1),
            discount: Decimal::ZERO,
            applied_coupon: None,
            newly_added,
        })
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Notice for items picked up from the staging buffer, if any
    pub fn newly_added_notice(&self) -> Option<String> {
        if self.newly_added.is_empty() {
            None
        } else {
            Some(format!("Added to cart: {}", self.newly_added.join(", ")))
        }
    }

    /// Order being edited: the one bound at open, else the persisted one
    pub fn edit_order_id(&self) -> Option<String> {
        self.order_id
            .clone()
            .or_else(|| self.client.session().edit_order_id())
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_order_id().is_some()
    }

    // ========== Quantities ==========

    pub fn increment(&mut self, id: i64) -> ClientResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity += 1;
        }
        self.persist()
    }

    /// No-op at quantity 1
    pub fn decrement(&mut self, id: i64) -> ClientResult<()> {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id && i.quantity > 1) {
            item.quantity -= 1;
        }
        self.persist()
    }

    /// Remove an item and its order tag; returns the removed item
    pub fn delete(&mut self, id: i64) -> ClientResult<Option<CartItem>> {
        let removed = self
            .items
            .iter()
            .position(|i| i.id == id)
            .map(|pos| self.items.remove(pos));
        self.persist()?;
        self.client.session().clear_item_tag(id)?;
        if let Some(item) = &removed {
            tracing::info!(id, name = %item.name, "Removed from cart");
        }
        Ok(removed)
    }

    fn persist(&self) -> ClientResult<()> {
        self.client.session().set_existing_items(&self.items)
    }

    // ========== Totals ==========

    /// Sum of `price × quantity`
    pub fn subtotal(&self) -> Decimal {
        self.items
            .iter()
            .map(|i| money::line_total(i.price, i.quantity))
            .sum()
    }

    pub fn discount(&self) -> Decimal {
        self.discount
    }

    pub fn applied_coupon(&self) -> Option<&Coupon> {
        self.applied_coupon.as_ref()
    }

    /// `max(0, subtotal − discount)`
    pub fn payable(&self) -> Decimal {
        (self.subtotal() - self.discount).max(Decimal::ZERO)
    }

    // ========== Coupon ==========

    /// Validate a coupon against the current subtotal
    ///
    /// Any failure clears a previously applied discount. An empty code is
    /// rejected without a request.
    pub async fn apply_coupon(&mut self, code: &str) -> ClientResult<Decimal> {
        let code = code.trim();
        if code.is_empty() {
            return Err(ClientError::Validation("Please enter a coupon code".into()));
        }

        let total = to_f64(self.subtotal());
        match self.client.validate_coupon(code, total).await {
            Ok(validation) => {
                self.discount = to_decimal(validation.discount);
                self.applied_coupon = validation.coupon;
                tracing::info!(code, discount = %self.discount, "Coupon applied");
                Ok(self.discount)
            }
            Err(e) => {
                tracing::warn!(code, error = %e, "Coupon rejected");
                self.discount = Decimal::ZERO;
                self.applied_coupon = None;
                Err(match e {
                    ClientError::Api { .. } => e,
                    _ => ClientError::Validation("Invalid or expired coupon code".into()),
                })
            }
        }
    }

    // ========== Table ==========

    pub fn table_number(&self) -> i64 {
        self.table_number
    }

    /// Whether the table field is editable (a staff role is signed in)
    pub fn can_edit_table(&self) -> bool {
        self.client.session().is_logged_in()
    }

    /// Set the table number, clamped to at least 1, and persist it
    pub fn set_table_number(&mut self, table: i64) -> ClientResult<i64> {
        self.table_number = table.max(1);
        self.client.session().set_table_number(self.table_number)?;
        Ok(self.table_number)
    }

    // ========== Edit-mode ==========

    /// Go back to the menu to add more items to the order being edited
    ///
    /// The current cart becomes both the existing items and the staging
    /// buffer, every item is tagged with the edit order id.
    pub fn stage_for_more_items(&self) -> ClientResult<Redirect> {
        let session = self.client.session();
        let edit_id = self.edit_order_id().unwrap_or_default();

        session.set_existing_items(&self.items)?;
        session.set_edit_order_id(&edit_id)?;
        for item in &self.items {
            session.set_item_tag(item.id, &edit_id)?;
        }
        session.set_newly_added_items(&self.items)?;

        Ok(Redirect::now(MENU_PATH))
    }

    // ========== Submit ==========

    /// Request body for the current cart
    pub fn payload(&self) -> OrderSubmit {
        OrderSubmit {
            business_id: self.client.session().business_id(),
            table_number: self.table_number,
            cart_items: self.items.iter().map(CartLinePayload::from).collect(),
            total_amount: to_f64(self.payable()),
            payment_method: PAYMENT_METHOD.to_string(),
            estimated_time: ESTIMATED_TIME.to_string(),
        }
    }

    /// Create or update the order
    ///
    /// On success every cart key and item tag is cleared and the new order
    /// id is recorded. On failure nothing local changes.
    pub async fn submit(&mut self) -> ClientResult<SubmitOutcome> {
        if self.items.is_empty() {
            return Err(ClientError::Validation("Your cart is empty.".into()));
        }
        if self.table_number <= 0 {
            return Err(ClientError::Validation("Please enter a valid table number.".into()));
        }

        let payload = self.payload();
        let edit_id = self.edit_order_id();
        let result = match edit_id.as_deref() {
            Some(id) => self.client.update_order(id, &payload).await,
            None => self.client.create_order(&payload).await,
        };

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                let action = if edit_id.is_some() { "update" } else { "place" };
                tracing::error!(error = %e, "Failed to {} order", action);
                return Err(e);
            }
        };

        let order_id = response
            .order_id
            .filter(|id| !id.is_empty())
            .or(response.id.filter(|id| !id.is_empty()))
            .or_else(|| edit_id.clone())
            .unwrap_or_else(|| UNKNOWN_ORDER_ID.to_string());

        let session = self.client.session();
        session.set_last_order_id(&order_id)?;
        session.clear_cart(&self.items)?;

        let updated = edit_id.is_some();
        tracing::info!(order_id = %order_id, updated, total = payload.total_amount, "Order submitted");

        let config = self.client.config();
        Ok(SubmitOutcome {
            order_id,
            updated,
            redirect: Redirect::delayed(config.tracking_path.clone(), config.redirect_delay),
        })
    }
}
