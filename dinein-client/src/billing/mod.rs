//! Billing view
//!
//! [`BillView`] is opened with the order snapshot handed over by the order
//! detail view. It owns the surcharge settings, computes the bill and
//! renders, publishes and shares the receipt.

mod bill;
mod cloud;
mod receipt;
mod settings;
mod share;

pub use bill::{BillSummary, SurchargeLine};
pub use cloud::{AssetStore, HttpAssetStore, Rasterizer, ReceiptImage, TextSnapshot};
pub use receipt::{RECEIPT_WIDTH, ReceiptRenderer};
pub use settings::BillingSettings;
pub use share::{bill_message, whatsapp_link};

use crate::{ClientError, ClientResult, DineInClient};
use shared::models::{Order, SurchargeKind};
use shared::parse_order_id;

/// Text shown when the view was opened without an order
pub const NO_ORDER_MESSAGE: &str = "No order data available. Please go back.";

/// Billing view model
#[derive(Debug)]
pub struct BillView {
    client: DineInClient,
    order: Order,
    restaurant: String,
    settings: BillingSettings,
    bill_url: Option<String>,
}

impl BillView {
    /// Open the view; without an order this is a missing-context error
    ///
    /// The business name for the header is fetched when a business id is
    /// stored; any failure falls back to the configured name.
    pub async fn open(client: &DineInClient, order: Option<Order>) -> ClientResult<Self> {
        let order = order.ok_or_else(|| ClientError::MissingContext(NO_ORDER_MESSAGE.into()))?;

        let mut restaurant = client.config().restaurant_name.clone();
        if let Some(id) = client.session().business_id() {
            match client.business(id).await {
                Ok(info) if !info.name.is_empty() => restaurant = info.name,
                Ok(_) => {}
                Err(e) => tracing::warn!(business_id = id, error = %e, "Error fetching business"),
            }
        }

        Ok(Self {
            settings: BillingSettings::load(client.session()),
            client: client.clone(),
            order,
            restaurant,
            bill_url: None,
        })
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn restaurant(&self) -> &str {
        &self.restaurant
    }

    pub fn settings(&self) -> &BillingSettings {
        &self.settings
    }

    /// Edit one surcharge rate
    pub fn set_percent(&mut self, kind: SurchargeKind, value: f64) -> ClientResult<()> {
        self.settings.set(kind, value)
    }

    pub fn save_settings(&mut self) -> ClientResult<()> {
        self.settings.save(self.client.session())
    }

    pub fn toggle_settings(&mut self) -> bool {
        self.settings.toggle_panel()
    }

    /// Totals against the order's stored total
    pub fn summary(&self) -> BillSummary {
        BillSummary::compute(self.order.total_amount, self.settings.percent())
    }

    /// Receipt text with the current (possibly unsaved) rates
    pub fn render(&self) -> String {
        let summary = self.summary();
        ReceiptRenderer::new(&self.restaurant, &self.order, &summary).render()
    }

    /// Receipt for printing; requires saved settings
    pub fn finalize(&self) -> ClientResult<String> {
        if !self.settings.is_saved() {
            return Err(ClientError::SettingsRequired);
        }
        Ok(self.render())
    }

    /// Link recorded by the last successful [`BillView::publish`]
    pub fn bill_url(&self) -> Option<&str> {
        self.bill_url.as_deref()
    }

    /// Rasterize the receipt, upload it and record the link on the order
    pub async fn publish(&mut self, rasterizer: &dyn Rasterizer, store: &dyn AssetStore) -> ClientResult<String> {
        let receipt = self.finalize()?;
        let numeric_id = match self.order.id {
            Some(id) => id,
            None => parse_order_id(&self.order.order_id)?,
        };

        let image = rasterizer.rasterize(&self.order.order_id, &receipt)?;
        let url = store.upload(image).await.inspect_err(|e| {
            tracing::error!(order_id = %self.order.order_id, error = %e, "Receipt upload failed");
        })?;
        self.client.store_bill_link(numeric_id, &url).await?;

        tracing::info!(order_id = %self.order.order_id, url = %url, "Bill published");
        self.bill_url = Some(url.clone());
        Ok(url)
    }

    /// WhatsApp link carrying the published bill
    pub fn share_link(&self, phone: &str) -> ClientResult<String> {
        let url = self
            .bill_url
            .as_deref()
            .ok_or_else(|| ClientError::MissingContext("Upload the bill before sharing it".into()))?;
        whatsapp_link(
            &self.client.config().country_code,
            phone,
            &bill_message(&self.order.order_id, url),
        )
    }
}
