//! Plain-text receipt
//!
//! Fixed-width rendering of the printable bill region: header, order facts,
//! item table, subtotal, surcharges and grand total.

use super::bill::BillSummary;
use crate::money::{format_amount, line_total};
use shared::models::Order;

/// Default receipt width in characters
pub const RECEIPT_WIDTH: usize = 32;

struct TextBuilder {
    width: usize,
    out: String,
}

impl TextBuilder {
    fn new(width: usize) -> Self {
        Self {
            width,
            out: String::new(),
        }
    }

    fn center(&mut self, text: &str) {
        let len = text.chars().count();
        let pad = self.width.saturating_sub(len) / 2;
        self.out.push_str(&" ".repeat(pad));
        self.out.push_str(text);
        self.out.push('\n');
    }

    /// Left and right text on one line
    fn line_lr(&mut self, left: &str, right: &str) {
        let used = left.chars().count() + right.chars().count();
        let gap = self.width.saturating_sub(used).max(1);
        self.out.push_str(left);
        self.out.push_str(&" ".repeat(gap));
        self.out.push_str(right);
        self.out.push('\n');
    }

    fn right(&mut self, text: &str) {
        let pad = self.width.saturating_sub(text.chars().count());
        self.out.push_str(&" ".repeat(pad));
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn sep(&mut self) {
        self.out.push_str(&"-".repeat(self.width));
        self.out.push('\n');
    }

    fn finish(self) -> String {
        self.out
    }
}

pub struct ReceiptRenderer<'a> {
    restaurant: &'a str,
    order: &'a Order,
    bill: &'a BillSummary,
    width: usize,
}

impl<'a> ReceiptRenderer<'a> {
    pub fn new(restaurant: &'a str, order: &'a Order, bill: &'a BillSummary) -> Self {
        Self {
            restaurant,
            order,
            bill,
            width: RECEIPT_WIDTH,
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self) -> String {
        let mut b = TextBuilder::new(self.width);
        b.center(self.restaurant);
        b.center("-- Bill Summary --");
        b.center(&format!("Order ID: {}", self.order.order_id));
        match self.order.created_at_utc() {
            Some(at) => {
                b.center(&format!("Date: {}", at.format("%d/%m/%Y")));
                b.center(&format!("Time: {}", at.format("%H:%M:%S")));
            }
            None => b.center("Date: -"),
        }
        b.center(&format!(
            "Table: {} | Payment: {}",
            self.order.table_number, self.order.payment_method
        ));
        b.center(&format!("Status: {}", self.order.status));
        b.sep();

        b.line_lr("Item", "Qty        Rs");
        for item in &self.order.items {
            let amount = format_amount(line_total(item.price, item.quantity));
            b.line_lr(&item.display_name(), &format!("{:>3} {:>9}", item.quantity, amount));
        }
        b.sep();

        b.right(&format!("Subtotal: Rs {}", format_amount(self.bill.subtotal)));
        for line in &self.bill.surcharges {
            b.right(&format!(
                "{} ({}%): Rs {}",
                line.kind.label(),
                line.percent,
                format_amount(line.amount)
            ));
        }
        b.sep();
        b.right(&format!("Grand Total: Rs {}", format_amount(self.bill.grand_total)));
        b.sep();
        b.center("Thank You! Visit Again");
        b.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::ExtraPercent;

    fn order() -> Order {
        serde_json::from_value(serde_json::json!({
            "order_id": "ORD00042",
            "table_number": 6,
            "payment_method": "Cash on Counter",
            "total_amount": 420.0,
            "status": "Completed",
            "created_at": "2026-03-01T18:30:00Z",
            "items": [
                { "productId": 1, "quantity": 2, "price": 150.0, "name": "Paneer Tikka" },
                { "productId": 2, "quantity": 3, "price": 40.0 }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_receipt_contains_totals_and_fallback_names() {
        let order = order();
        let percent = ExtraPercent {
            vat_low: 5.0,
            vat_high: 0.0,
            service_tax: 2.0,
            service_charge: 3.0,
        };
        let bill = BillSummary::compute(order.total_amount, &percent);
        let text = ReceiptRenderer::new("Saoji Dhaba & Family Restaurant", &order, &bill).render();

        assert!(text.contains("Order ID: ORD00042"));
        assert!(text.contains("Product #2"));
        assert!(text.contains("Paneer Tikka"));
        assert!(text.contains("Subtotal: Rs 420.00"));
        assert!(text.contains("VAT Low (5%): Rs 21.00"));
        assert!(text.contains("Grand Total: Rs 462.00"));
        assert!(text.contains("Date: 01/03/2026"));
        assert!(text.trim_end().ends_with("Thank You! Visit Again"));
    }
}
