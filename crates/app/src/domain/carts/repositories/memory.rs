//! In-memory cart store.

use jiff::Timestamp;
use rustc_hash::FxHashMap;

use crate::domain::carts::models::{CartItem, MAX_QUANTITY, NewCartItem, ProductId};

/// Keyed collection of cart lines that remembers insertion order.
#[derive(Debug, Default)]
pub(crate) struct MemoryCartStore {
    items: FxHashMap<ProductId, CartItem>,
    order: Vec<ProductId>,
}

impl MemoryCartStore {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn all_items(&self) -> Vec<CartItem> {
        self.order
            .iter()
            .filter_map(|product| self.items.get(product))
            .cloned()
            .collect()
    }

    pub(crate) fn item(&self, product: &ProductId) -> Option<CartItem> {
        self.items.get(product).cloned()
    }

    /// Returns `None` when the combined quantity would exceed [`MAX_QUANTITY`].
    pub(crate) fn add_item(&mut self, item: NewCartItem, now: Timestamp) -> Option<CartItem> {
        if let Some(existing) = self.items.get_mut(&item.product_id) {
            existing.quantity = existing
                .quantity
                .checked_add(item.quantity)
                .filter(|quantity| *quantity <= MAX_QUANTITY)?;

            return Some(existing.clone());
        }

        let created = CartItem {
            product_id: item.product_id.clone(),
            product_name: item.product_name,
            price: item.price,
            quantity: item.quantity,
            image: item.image,
            created_at: now,
        };

        self.order.push(item.product_id.clone());
        self.items.insert(item.product_id, created.clone());

        Some(created)
    }

    pub(crate) fn set_quantity(&mut self, product: &ProductId, quantity: u32) -> Option<CartItem> {
        let existing = self.items.get_mut(product)?;

        existing.quantity = quantity;

        Some(existing.clone())
    }

    pub(crate) fn remove_item(&mut self, product: &ProductId) -> bool {
        if self.items.remove(product).is_none() {
            return false;
        }

        self.order.retain(|id| id != product);

        true
    }

    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_item(product_id: &str, quantity: u32) -> NewCartItem {
        NewCartItem {
            product_id: product_id.into(),
            product_name: format!("Panel {product_id}"),
            price: 100.0,
            quantity,
            image: None,
        }
    }

    #[test]
    fn adding_existing_product_merges_quantities() {
        let mut store = MemoryCartStore::new();

        store.add_item(new_item("p1", 2), Timestamp::UNIX_EPOCH);
        let merged = store.add_item(new_item("p1", 3), Timestamp::now());

        assert_eq!(merged.map(|item| item.quantity), Some(5));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn merge_keeps_original_created_at() {
        let mut store = MemoryCartStore::new();

        store.add_item(new_item("p1", 1), Timestamp::UNIX_EPOCH);
        store.add_item(new_item("p1", 1), Timestamp::now());

        let item = store.item(&"p1".into());

        assert_eq!(item.map(|item| item.created_at), Some(Timestamp::UNIX_EPOCH));
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut store = MemoryCartStore::new();

        for id in ["c", "a", "b"] {
            store.add_item(new_item(id, 1), Timestamp::UNIX_EPOCH);
        }

        store.remove_item(&"a".into());
        store.add_item(new_item("a", 1), Timestamp::UNIX_EPOCH);

        let ids: Vec<String> = store
            .all_items()
            .into_iter()
            .map(|item| item.product_id.into_string())
            .collect();

        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn overflowing_quantity_is_refused() {
        let mut store = MemoryCartStore::new();

        store.add_item(new_item("p1", MAX_QUANTITY), Timestamp::UNIX_EPOCH);

        assert!(store.add_item(new_item("p1", 1), Timestamp::now()).is_none());
        assert_eq!(
            store.item(&"p1".into()).map(|item| item.quantity),
            Some(MAX_QUANTITY)
        );
    }

    #[test]
    fn set_quantity_on_missing_product_does_nothing() {
        let mut store = MemoryCartStore::new();

        assert!(store.set_quantity(&"missing".into(), 4).is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn remove_reports_whether_anything_was_deleted() {
        let mut store = MemoryCartStore::new();

        store.add_item(new_item("p1", 1), Timestamp::UNIX_EPOCH);

        assert!(store.remove_item(&"p1".into()));
        assert!(!store.remove_item(&"p1".into()));
    }

    #[test]
    fn clear_empties_everything() {
        let mut store = MemoryCartStore::new();

        store.add_item(new_item("p1", 1), Timestamp::UNIX_EPOCH);
        store.add_item(new_item("p2", 1), Timestamp::UNIX_EPOCH);
        store.clear();

        assert!(store.all_items().is_empty());
    }
}
