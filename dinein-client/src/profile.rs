//! Customer profile editor

use crate::{ClientResult, DineInClient};
use shared::models::{Customer, CustomerUpdate};

/// Profile view with a cancellable edit form
#[derive(Debug)]
pub struct ProfileEditor {
    client: DineInClient,
    customer: Customer,
    original: CustomerUpdate,
    form: CustomerUpdate,
    editing: bool,
}

impl ProfileEditor {
    /// Load the signed-in customer
    pub async fn load(client: &DineInClient) -> ClientResult<Self> {
        let customer = client.customer_profile().await?;
        Ok(Self::new(client, customer))
    }

    fn new(client: &DineInClient, customer: Customer) -> Self {
        let original = CustomerUpdate {
            name: customer.name.clone(),
            mobile: customer.mobile.clone(),
        };
        Self {
            client: client.clone(),
            customer,
            form: original.clone(),
            original,
            editing: false,
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn form(&self) -> &CustomerUpdate {
        &self.form
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn start_editing(&mut self) {
        self.editing = true;
    }

    pub fn set_name(&mut self, name: &str) {
        self.form.name = name.to_string();
    }

    pub fn set_mobile(&mut self, mobile: &str) {
        self.form.mobile = mobile.to_string();
    }

    /// Restore the last saved values
    pub fn cancel(&mut self) {
        self.form = self.original.clone();
        self.editing = false;
    }

    /// Persist the form; on failure the form keeps the unsaved edits
    pub async fn save(&mut self) -> ClientResult<()> {
        self.client
            .update_customer(self.customer.id, &self.form)
            .await
            .inspect_err(|e| tracing::error!(customer_id = self.customer.id, error = %e, "Failed to update profile"))?;
        self.customer.name = self.form.name.clone();
        self.customer.mobile = self.form.mobile.clone();
        self.original = self.form.clone();
        self.editing = false;
        tracing::info!(customer_id = self.customer.id, "Profile updated");
        Ok(())
    }
}
