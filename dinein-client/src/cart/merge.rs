//! Three-source cart merge
//!
//! Pure reducer over the persisted "existing" items, the "newly added"
//! staging buffer and the caller's items. Keyed by product id, first
//! insertion fixes the position:
//!
//! 1. existing items are inserted in order
//! 2. newly added items replace same-id entries in place, or append
//! 3. caller items append only for ids not yet present
//!
//! Every merged item without an image gets `fallback_image`.

use shared::models::CartItem;
use std::collections::HashMap;

/// Merge the three sources into one ordered, de-duplicated list
pub fn merge_cart_items(
    caller: &[CartItem],
    existing: &[CartItem],
    newly_added: &[CartItem],
    fallback_image: &str,
) -> Vec<CartItem> {
    let mut merged: Vec<CartItem> = Vec::with_capacity(existing.len() + newly_added.len() + caller.len());
    let mut index: HashMap<i64, usize> = HashMap::new();

    for item in existing.iter().chain(newly_added) {
        let item = with_image(item, fallback_image);
        match index.get(&item.id) {
            Some(&pos) => merged[pos] = item,
            None => {
                index.insert(item.id, merged.len());
                merged.push(item);
            }
        }
    }

    for item in caller {
        if !index.contains_key(&item.id) {
            index.insert(item.id, merged.len());
            merged.push(with_image(item, fallback_image));
        }
    }

    merged
}

fn with_image(item: &CartItem, fallback_image: &str) -> CartItem {
    let mut item = item.clone();
    if item.image.is_empty() {
        item.image = fallback_image.to_string();
    }
    item
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::OrderStatus;

    const FALLBACK: &str = "/assets/CartImg.jpg";

    fn ids(items: &[CartItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    #[test]
    fn test_merge_union_and_order() {
        let existing = vec![CartItem::new(1, "Naan", 40.0), CartItem::new(2, "Dal", 120.0)];
        let newly = vec![CartItem::new(3, "Lassi", 60.0)];
        let caller = vec![CartItem::new(4, "Rice", 90.0), CartItem::new(1, "Naan (old)", 35.0)];

        let merged = merge_cart_items(&caller, &existing, &newly, FALLBACK);

        assert_eq!(ids(&merged), vec![1, 2, 3, 4]);
        // caller never overrides
        assert_eq!(merged[0].name, "Naan");
    }

    #[test]
    fn test_newly_added_wins_over_existing_in_place() {
        let existing = vec![
            CartItem::new(1, "Naan", 40.0).with_quantity(1),
            CartItem::new(2, "Dal", 120.0),
        ];
        let newly = vec![
            CartItem::new(1, "Butter Naan", 50.0)
                .with_quantity(3)
                .with_status(OrderStatus::Ready),
        ];

        let merged = merge_cart_items(&[], &existing, &newly, FALLBACK);

        assert_eq!(ids(&merged), vec![1, 2]);
        assert_eq!(merged[0], newly[0].clone().with_image(FALLBACK));
    }

    #[test]
    fn test_fallback_image_only_when_missing() {
        let existing = vec![CartItem::new(1, "Naan", 40.0).with_image("/img/naan.png")];
        let caller = vec![CartItem::new(2, "Dal", 120.0)];

        let merged = merge_cart_items(&caller, &existing, &[], FALLBACK);

        assert_eq!(merged[0].image, "/img/naan.png");
        assert_eq!(merged[1].image, FALLBACK);
    }

    #[test]
    fn test_duplicate_ids_within_one_source_collapse() {
        let newly = vec![
            CartItem::new(5, "Tea", 20.0),
            CartItem::new(5, "Tea", 20.0).with_quantity(2),
        ];
        let merged = merge_cart_items(&[], &[], &newly, FALLBACK);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].quantity, 2);
    }

    #[test]
    fn test_empty_sources() {
        assert!(merge_cart_items(&[], &[], &[], FALLBACK).is_empty());
    }
}
