//! Catalog service.

use mockall::automock;

use crate::domain::{
    carts::models::ProductId,
    catalog::{data::PRODUCTS, models::Product},
};

/// Catalog compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCatalogService;

impl StaticCatalogService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CatalogService for StaticCatalogService {
    fn list_products(&self) -> Vec<Product> {
        PRODUCTS.to_vec()
    }

    fn get_product(&self, id: &ProductId) -> Option<Product> {
        PRODUCTS
            .iter()
            .find(|product| product.id == id.as_str())
            .copied()
    }
}

#[automock]
pub trait CatalogService: Send + Sync {
    /// Every product, in display order.
    fn list_products(&self) -> Vec<Product>;

    /// Look up a single product by id.
    fn get_product(&self, id: &ProductId) -> Option<Product>;
}
