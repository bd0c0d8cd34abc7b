//! Surcharge settings panel

use crate::session::Session;
use crate::{ClientError, ClientResult};
use shared::models::{ExtraPercent, SurchargeKind};

/// Settings panel state
///
/// Forced open until a configuration has been saved at least once.
#[derive(Debug, Clone)]
pub struct BillingSettings {
    percent: ExtraPercent,
    saved: bool,
    panel_open: bool,
}

impl BillingSettings {
    /// Read the saved percentages, opening the panel if there are none
    pub fn load(session: &Session) -> Self {
        match session.extra_percent() {
            Some(percent) => Self {
                percent,
                saved: true,
                panel_open: false,
            },
            None => Self {
                percent: ExtraPercent::default(),
                saved: false,
                panel_open: true,
            },
        }
    }

    pub fn percent(&self) -> &ExtraPercent {
        &self.percent
    }

    pub fn is_saved(&self) -> bool {
        self.saved
    }

    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    /// Edit one rate; takes effect on the bill immediately, persisted on save
    pub fn set(&mut self, kind: SurchargeKind, value: f64) -> ClientResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(ClientError::Validation(format!(
                "{} must be a non-negative number",
                kind.label()
            )));
        }
        self.percent.set(kind, value);
        Ok(())
    }

    /// Show or hide the panel; it cannot be hidden before the first save
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open || !self.saved;
        self.panel_open
    }

    pub fn save(&mut self, session: &Session) -> ClientResult<()> {
        session.set_extra_percent(&self.percent)?;
        self.saved = true;
        self.panel_open = false;
        tracing::info!(percent = ?self.percent, "Billing settings saved");
        Ok(())
    }
}
