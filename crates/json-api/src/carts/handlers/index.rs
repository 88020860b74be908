//! List Cart Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use solarcart_app::domain::carts::models::{Cart, CartItem};

use crate::{carts::errors::into_status_error, extensions::*};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The items in the cart, oldest first
    pub items: Vec<CartItemResponse>,

    /// Sum of price times quantity over every item
    pub total: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            items: cart.items.into_iter().map(CartItemResponse::from).collect(),
            total: cart.total,
        }
    }
}

/// Cart Item Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemResponse {
    /// Catalog product id
    pub product_id: String,

    /// Display name of the product
    pub product_name: String,

    /// Unit price
    pub price: f64,

    /// Quantity in the cart
    pub quantity: u32,

    /// Image path or URL
    pub image: Option<String>,

    /// When the product was first added
    pub created_at: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id.into_string(),
            product_name: item.product_name,
            price: item.price,
            quantity: item.quantity,
            image: item.image,
            created_at: item.created_at.to_string(),
        }
    }
}

/// List Cart Handler
///
/// Returns every cart item and the cart total.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    responses(
        (status_code = StatusCode::OK, description = "Cart contents"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to fetch cart"),
    ),
)]
#[tracing::instrument(
    name = "cart.index",
    skip(depot),
    fields(item_count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let app = depot.app_or_500()?;

    let items = app
        .carts
        .list_items()
        .await
        .map_err(|error| into_status_error(error, "Failed to fetch cart"))?;

    tracing::Span::current().record("item_count", items.len());

    Ok(Json(Cart::from_items(items).into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use solarcart_app::domain::carts::{CartsServiceError, MockCartsService};

    use crate::{carts::handlers::tests::make_item, test_helpers::carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_items_and_total() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_items()
            .once()
            .return_once(|| Ok(vec![make_item("p1", 100.0, 2), make_item("p2", 12.5, 4)]));

        let mut res = TestClient::get("http://example.com/api/cart")
            .send(&make_service(carts))
            .await;

        let body: CartResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert_eq!(body.items.len(), 2, "item count");
        assert_eq!(
            body.items.first().map(|item| item.product_id.as_str()),
            Some("p1"),
            "insertion order"
        );
        assert!((body.total - 250.0).abs() < f64::EPSILON, "total");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_uses_camel_case_fields() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_items()
            .once()
            .return_once(|| Ok(vec![make_item("p1", 100.0, 1)]));

        let body: serde_json::Value = TestClient::get("http://example.com/api/cart")
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        let item = body.pointer("/items/0");

        assert_eq!(
            item.and_then(|item| item.get("productId")),
            Some(&serde_json::json!("p1")),
            "productId"
        );
        assert_eq!(
            item.and_then(|item| item.get("productName")),
            Some(&serde_json::json!("Panel p1")),
            "productName"
        );
        assert!(
            item.and_then(|item| item.get("createdAt")).is_some(),
            "createdAt present"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_index_empty_cart_has_zero_total() -> TestResult {
        let mut carts = MockCartsService::new();

        carts.expect_list_items().once().return_once(|| Ok(vec![]));

        let body: CartResponse = TestClient::get("http://example.com/api/cart")
            .send(&make_service(carts))
            .await
            .take_json()
            .await?;

        assert!(body.items.is_empty(), "no items");
        assert!(body.total.abs() < f64::EPSILON, "zero total");

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_fault_returns_500() {
        let mut carts = MockCartsService::new();

        carts
            .expect_list_items()
            .once()
            .return_once(|| Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::get("http://example.com/api/cart")
            .send(&make_service(carts))
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::INTERNAL_SERVER_ERROR),
            "status"
        );
    }
}
