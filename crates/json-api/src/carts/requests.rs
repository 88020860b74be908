//! Cart request bodies and their validation.

use salvo::{http::StatusError, oapi::ToSchema};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use solarcart_app::domain::carts::models::{NewCartItem, ProductId};

/// Price as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub(crate) enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.trim().is_empty())
    }

    fn parse(&self) -> Result<f64, CartRequestError> {
        let price = match self {
            Self::Number(price) => *price,
            Self::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_ignored| CartRequestError::InvalidPrice)?,
        };

        if !price.is_finite() || price <= 0.0 {
            return Err(CartRequestError::InvalidPrice);
        }

        Ok(price)
    }
}

/// Request validation failures, raised before the cart store is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum CartRequestError {
    #[error("Missing required fields")]
    MissingRequiredFields,

    #[error("Invalid price")]
    InvalidPrice,

    #[error("Invalid quantity")]
    InvalidQuantity,
}

impl From<CartRequestError> for StatusError {
    fn from(error: CartRequestError) -> Self {
        StatusError::bad_request().brief(error.to_string())
    }
}

/// Add Cart Item Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddCartItemRequest {
    /// Catalog product id
    pub product_id: Option<String>,

    /// Display name of the product
    pub product_name: Option<String>,

    /// Unit price, as a number or numeric string
    pub price: Option<PriceInput>,

    /// Quantity to add; defaults to 1
    pub quantity: Option<i64>,

    /// Image path or URL
    pub image: Option<String>,
}

impl TryFrom<AddCartItemRequest> for NewCartItem {
    type Error = CartRequestError;

    fn try_from(request: AddCartItemRequest) -> Result<Self, Self::Error> {
        let (Some(product_id), Some(product_name), Some(price)) = (
            non_empty(request.product_id),
            non_empty(request.product_name),
            request.price.filter(|price| !price.is_blank()),
        ) else {
            return Err(CartRequestError::MissingRequiredFields);
        };

        let price = price.parse()?;

        let quantity = match request.quantity {
            None => 1,
            Some(quantity) => {
                u32::try_from(quantity)
                    .ok()
                    .filter(|quantity| *quantity >= 1)
                    .ok_or(CartRequestError::InvalidQuantity)?
            }
        };

        Ok(NewCartItem {
            product_id: ProductId::from(product_id),
            product_name,
            price,
            quantity,
            image: non_empty(request.image),
        })
    }
}

/// Update Cart Item Request
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UpdateCartItemRequest {
    /// Catalog product id
    pub product_id: Option<String>,

    /// New quantity; zero, negative or `null` removes the item
    #[serde(default, deserialize_with = "present")]
    #[salvo(schema(value_type = Option<f64>))]
    pub quantity: Option<Option<f64>>,
}

impl UpdateCartItemRequest {
    /// The product and quantity to apply.
    pub(crate) fn into_parts(self) -> Result<(ProductId, i64), CartRequestError> {
        match (non_empty(self.product_id), self.quantity) {
            (Some(product_id), Some(quantity)) => {
                Ok((ProductId::from(product_id), whole_quantity(quantity)?))
            }
            _ => Err(CartRequestError::MissingRequiredFields),
        }
    }
}

/// Keeps an explicit `null` distinct from an absent field.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

/// `null` and anything at or below zero become 0; positive values must be whole.
fn whole_quantity(quantity: Option<f64>) -> Result<i64, CartRequestError> {
    let Some(quantity) = quantity.filter(|quantity| *quantity > 0.0) else {
        return Ok(0);
    };

    if quantity.fract() > 0.0 || quantity > f64::from(i32::MAX) {
        return Err(CartRequestError::InvalidQuantity);
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "whole number within the i32 range"
    )]
    let quantity = quantity as i64;

    Ok(quantity)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
