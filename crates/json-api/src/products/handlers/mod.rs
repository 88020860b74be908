//! Product Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use solarcart_app::domain::catalog::models::{Product, ProductSpec};

pub(crate) mod get;
pub(crate) mod index;

/// Product Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// Catalog product id
    pub id: String,

    /// Display name
    pub name: String,

    /// Market segment
    pub category: String,

    /// Rated output
    pub wattage: String,

    /// Cell efficiency
    pub efficiency: String,

    /// Unit price
    pub price: f64,

    /// Image path
    pub image: String,

    /// Marketing description
    pub description: String,

    /// Specification sheet in display order
    pub specs: Vec<ProductSpecResponse>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.to_string(),
            category: product.category.to_string(),
            wattage: product.wattage.to_string(),
            efficiency: product.efficiency.to_string(),
            price: product.price,
            image: product.image.to_string(),
            description: product.description.to_string(),
            specs: product
                .specs
                .iter()
                .copied()
                .map(ProductSpecResponse::from)
                .collect(),
        }
    }
}

/// Product Spec Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductSpecResponse {
    /// Specification label, e.g. "Max Power"
    pub label: String,

    /// Specification value
    pub value: String,
}

impl From<ProductSpec> for ProductSpecResponse {
    fn from(spec: ProductSpec) -> Self {
        Self {
            label: spec.label.to_string(),
            value: spec.value.to_string(),
        }
    }
}
