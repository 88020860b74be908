//! Cart Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

/// Largest quantity a single cart line can hold; matches the `INTEGER` column.
pub const MAX_QUANTITY: u32 = i32::MAX.unsigned_abs();

/// Product identifier used as the cart line key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Cart Model
///
/// The total is derived from the items every time a cart is built.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total: f64,
}

impl Cart {
    #[must_use]
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(CartItem::line_total).sum();

        Self { items, total }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// CartItem Model
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: Option<String>,
    pub created_at: Timestamp,
}

impl CartItem {
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// NewCartItem Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCartItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: Option<String>,
}

impl NewCartItem {
    /// Whether the item can be stored: a finite, positive price and a non-zero quantity.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price > 0.0 && self.quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(product_id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            product_id: product_id.into(),
            product_name: product_id.to_uppercase(),
            price,
            quantity,
            image: None,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn cart_total_sums_price_times_quantity() {
        let cart = Cart::from_items(vec![item("p1", 100.0, 2), item("p2", 12.5, 4)]);

        assert!((cart.total - 250.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_cart_has_zero_total() {
        let cart = Cart::from_items(vec![]);

        assert!(cart.is_empty());
        assert!(cart.total.abs() < f64::EPSILON);
    }

    #[test]
    fn new_item_validity() {
        let valid = NewCartItem {
            product_id: "p1".into(),
            product_name: "Panel".to_string(),
            price: 100.0,
            quantity: 1,
            image: None,
        };

        assert!(valid.is_valid());
        assert!(!NewCartItem { price: f64::NAN, ..valid.clone() }.is_valid());
        assert!(!NewCartItem { price: 0.0, ..valid.clone() }.is_valid());
        assert!(!NewCartItem { price: -1.0, ..valid.clone() }.is_valid());
        assert!(!NewCartItem { quantity: 0, ..valid }.is_valid());
    }
}
