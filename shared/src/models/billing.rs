//! Billing Settings Model

use serde::{Deserialize, Serialize};

/// Surcharge percentages applied to a bill subtotal
///
/// Each rate is applied to the subtotal on its own; rates never compound.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPercent {
    #[serde(default)]
    pub vat_low: f64,
    #[serde(default)]
    pub vat_high: f64,
    #[serde(default)]
    pub service_tax: f64,
    #[serde(default)]
    pub service_charge: f64,
}

/// One of the four surcharge categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurchargeKind {
    VatLow,
    VatHigh,
    ServiceTax,
    ServiceCharge,
}

impl SurchargeKind {
    /// Receipt order
    pub const ALL: [SurchargeKind; 4] = [
        SurchargeKind::VatLow,
        SurchargeKind::VatHigh,
        SurchargeKind::ServiceTax,
        SurchargeKind::ServiceCharge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SurchargeKind::VatLow => "VAT Low",
            SurchargeKind::VatHigh => "VAT High",
            SurchargeKind::ServiceTax => "Service Tax",
            SurchargeKind::ServiceCharge => "Service Charge",
        }
    }
}

impl ExtraPercent {
    pub fn get(&self, kind: SurchargeKind) -> f64 {
        match kind {
            SurchargeKind::VatLow => self.vat_low,
            SurchargeKind::VatHigh => self.vat_high,
            SurchargeKind::ServiceTax => self.service_tax,
            SurchargeKind::ServiceCharge => self.service_charge,
        }
    }

    pub fn set(&mut self, kind: SurchargeKind, value: f64) {
        let slot = match kind {
            SurchargeKind::VatLow => &mut self.vat_low,
            SurchargeKind::VatHigh => &mut self.vat_high,
            SurchargeKind::ServiceTax => &mut self.service_tax,
            SurchargeKind::ServiceCharge => &mut self.service_charge,
        };
        *slot = value;
    }

    /// Every rate is a finite, non-negative number
    pub fn is_valid(&self) -> bool {
        SurchargeKind::ALL.iter().all(|k| {
            let v = self.get(*k);
            v.is_finite() && v >= 0.0
        })
    }
}
