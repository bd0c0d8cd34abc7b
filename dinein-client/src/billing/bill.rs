//! Bill arithmetic
//!
//! Each surcharge is `subtotal × percent ÷ 100` on its own; the grand total
//! is the subtotal plus the four surcharges. Computed in `Decimal`.

use crate::money::{percent_of, round, to_decimal};
use rust_decimal::Decimal;
use shared::models::{ExtraPercent, SurchargeKind};

#[derive(Debug, Clone, PartialEq)]
pub struct SurchargeLine {
    pub kind: SurchargeKind,
    pub percent: f64,
    pub amount: Decimal,
}

/// Derived totals of a bill
#[derive(Debug, Clone, PartialEq)]
pub struct BillSummary {
    pub subtotal: Decimal,
    /// In receipt order
    pub surcharges: Vec<SurchargeLine>,
    pub grand_total: Decimal,
}

impl BillSummary {
    pub fn compute(subtotal: f64, percent: &ExtraPercent) -> Self {
        let subtotal = to_decimal(subtotal);
        let surcharges: Vec<SurchargeLine> = SurchargeKind::ALL
            .iter()
            .map(|&kind| SurchargeLine {
                kind,
                percent: percent.get(kind),
                amount: percent_of(subtotal, percent.get(kind)),
            })
            .collect();
        let grand_total = round(subtotal + surcharges.iter().map(|s| s.amount).sum::<Decimal>());
        Self {
            subtotal,
            surcharges,
            grand_total,
        }
    }

    pub fn surcharge(&self, kind: SurchargeKind) -> Decimal {
        self.surcharges
            .iter()
            .find(|s| s.kind == kind)
            .map(|s| s.amount)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent(a: f64, b: f64, c: f64, d: f64) -> ExtraPercent {
        ExtraPercent {
            vat_low: a,
            vat_high: b,
            service_tax: c,
            service_charge: d,
        }
    }

    #[test]
    fn test_grand_total_example() {
        let bill = BillSummary::compute(420.0, &percent(5.0, 0.0, 2.0, 3.0));
        assert_eq!(bill.grand_total, Decimal::new(46200, 2));
        assert_eq!(bill.surcharge(SurchargeKind::VatLow), Decimal::from(21));
        assert_eq!(bill.surcharge(SurchargeKind::VatHigh), Decimal::ZERO);
        assert_eq!(bill.surcharges.len(), 4);
    }

    #[test]
    fn test_no_compounding() {
        // 10% + 10% on 100 is 120, not 121
        let bill = BillSummary::compute(100.0, &percent(10.0, 10.0, 0.0, 0.0));
        assert_eq!(bill.grand_total, Decimal::from(120));
    }

    #[test]
    fn test_zero_settings() {
        let bill = BillSummary::compute(99.99, &ExtraPercent::default());
        assert_eq!(bill.grand_total, Decimal::new(9999, 2));
    }

    #[test]
    fn test_fractional_percent() {
        let bill = BillSummary::compute(250.0, &percent(2.5, 0.0, 0.0, 0.0));
        assert_eq!(bill.grand_total, Decimal::new(25625, 2));
    }
}
