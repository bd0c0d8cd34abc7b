//! Order detail workflow
//!
//! Per-item updates are two-phase: [`OrderDetail::stage`] marks the item in
//! flight and captures the change, the request is sent, and only a
//! successful response commits the change to the local snapshot. A failed
//! request drops the staged change and leaves the snapshot untouched.
//!
//! Several items may be updated concurrently; each item is blocked only
//! while its own request is outstanding. The local lock is never held across
//! an await.

use crate::redirect::{Redirect, bill_path};
use crate::{ClientError, ClientResult, DineInClient};
use shared::models::{Order, OrderStatus};
use shared::parse_order_id;
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Everything the billing view needs
#[derive(Debug, Clone)]
pub struct BillingHandoff {
    pub order: Order,
    pub redirect: Redirect,
}

/// A per-item status change waiting for the backend
///
/// Dropping it without [`StagedItemStatus::commit`] discards the change and
/// releases the item.
#[derive(Debug)]
pub struct StagedItemStatus {
    index: usize,
    product_id: i64,
    status: OrderStatus,
    order: Arc<Mutex<Order>>,
    in_flight: Arc<Mutex<HashSet<usize>>>,
}

impl StagedItemStatus {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn product_id(&self) -> i64 {
        self.product_id
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Apply the change and recompute the aggregate status
    pub fn commit(self) -> Order {
        let mut order = lock(&self.order);
        if let Some(item) = order.items.get_mut(self.index) {
            item.status = Some(self.status);
        }
        order.status = order.aggregate_status();
        order.clone()
    }
}

impl Drop for StagedItemStatus {
    fn drop(&mut self) {
        lock(&self.in_flight).remove(&self.index);
    }
}

/// Order detail view model
///
/// Shareable across tasks (`Arc<OrderDetail>`); all methods take `&self`.
#[derive(Debug)]
pub struct OrderDetail {
    client: DineInClient,
    numeric_id: i64,
    order: Arc<Mutex<Order>>,
    in_flight: Arc<Mutex<HashSet<usize>>>,
}

impl OrderDetail {
    /// Fetch an order by its prefixed (`ORD00012`) or bare id
    pub async fn load(client: &DineInClient, order_id: &str) -> ClientResult<Self> {
        let numeric_id = parse_order_id(order_id)?;
        let order = client.order(numeric_id).await.inspect_err(|e| {
            tracing::error!(order_id, error = %e, "Error fetching order");
        })?;
        Ok(Self::from_order(client, numeric_id, order))
    }

    fn from_order(client: &DineInClient, numeric_id: i64, order: Order) -> Self {
        Self {
            client: client.clone(),
            numeric_id,
            order: Arc::new(Mutex::new(order)),
            in_flight: Arc::new(Mutex::new(HashSet::new())),
        }
    }

    /// Snapshot of the current local state
    pub fn order(&self) -> Order {
        lock(&self.order).clone()
    }

    pub fn numeric_id(&self) -> i64 {
        self.numeric_id
    }

    /// Whether the item's control should be disabled
    pub fn is_updating(&self, index: usize) -> bool {
        lock(&self.in_flight).contains(&index)
    }

    /// `(completed, total)` line-item counts
    pub fn progress(&self) -> (usize, usize) {
        let order = lock(&self.order);
        (order.completed_count(), order.items.len())
    }

    /// Whether proceeding to billing is allowed
    pub fn can_proceed_to_billing(&self) -> bool {
        let (completed, total) = self.progress();
        completed == total
    }

    /// Phase one: reserve the item and capture the change
    pub fn stage(&self, index: usize, status: OrderStatus) -> ClientResult<StagedItemStatus> {
        let product_id = lock(&self.order)
            .items
            .get(index)
            .map(|item| item.product_id)
            .ok_or_else(|| ClientError::Validation(format!("No line item at position {}", index)))?;

        if !lock(&self.in_flight).insert(index) {
            return Err(ClientError::InFlight(index));
        }

        Ok(StagedItemStatus {
            index,
            product_id,
            status,
            order: Arc::clone(&self.order),
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    /// Set one item's status; any state may follow any other
    pub async fn update_item_status(&self, index: usize, status: OrderStatus) -> ClientResult<Order> {
        let staged = self.stage(index, status)?;
        match self
            .client
            .update_item_status(self.numeric_id, staged.product_id(), status)
            .await
        {
            Ok(()) => {
                let order = staged.commit();
                tracing::info!(order_id = self.numeric_id, index, %status, aggregate = %order.status, "Item status updated");
                Ok(order)
            }
            Err(e) => {
                tracing::error!(order_id = self.numeric_id, index, error = %e, "Failed to update item status");
                Err(e)
            }
        }
    }

    /// Mark every item and the order Completed
    pub async fn complete_all(&self) -> ClientResult<Order> {
        if let Err(e) = self.client.complete_all_items(self.numeric_id).await {
            tracing::error!(order_id = self.numeric_id, error = %e, "Failed to complete all items");
            return Err(e);
        }
        let mut order = lock(&self.order);
        for item in &mut order.items {
            item.status = Some(OrderStatus::Completed);
        }
        order.status = OrderStatus::Completed;
        tracing::info!(order_id = self.numeric_id, "All items marked as completed");
        Ok(order.clone())
    }

    /// Gate on every item being Completed, then hand the snapshot over
    pub fn proceed_to_billing(&self) -> ClientResult<BillingHandoff> {
        let order = self.order();
        if !order.all_items_completed() {
            tracing::warn!(order_id = self.numeric_id, "Billing blocked, items still open");
            return Err(ClientError::Validation(
                "Please complete all items before proceeding to billing".into(),
            ));
        }
        let redirect = Redirect::now(bill_path(&order.order_id));
        Ok(BillingHandoff { order, redirect })
    }
}
