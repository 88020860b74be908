//! Catalog Models

/// Product Model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub wattage: &'static str,
    pub efficiency: &'static str,
    pub price: f64,
    pub image: &'static str,
    pub description: &'static str,
    pub specs: &'static [ProductSpec],
}

/// A labelled line on a product's specification sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSpec {
    pub label: &'static str,
    pub value: &'static str,
}

pub(crate) const fn spec(label: &'static str, value: &'static str) -> ProductSpec {
    ProductSpec { label, value }
}
