//! Update Cart Item Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    carts::{
        errors::into_status_error, handlers::MessageResponse, requests::UpdateCartItemRequest,
    },
    extensions::*,
};

/// Update Cart Item Handler
///
/// Sets the quantity of a cart item. A quantity of zero or less removes it.
#[endpoint(
    tags("cart"),
    summary = "Update Cart Item Quantity",
    responses(
        (status_code = StatusCode::OK, description = "Cart updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid fields"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to update cart"),
    ),
)]
#[tracing::instrument(
    name = "cart.update",
    skip(json, depot),
    fields(
        product_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let (product, quantity) = json.into_inner().into_parts()?;

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(&product));
    span.record("quantity", quantity);

    let updated = app
        .carts
        .update_quantity(product.clone(), quantity)
        .await
        .map_err(|error| into_status_error(error, "Failed to update cart"))?;

    match updated {
        Some(item) => {
            tracing::info!(product_id = %product, quantity = item.quantity, "updated cart item");
        }
        None => tracing::info!(product_id = %product, "no cart item left to update"),
    }

    Ok(Json(MessageResponse::ok("Cart updated")))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use solarcart_app::domain::carts::{CartsServiceError, MockCartsService, models::ProductId};

    use crate::{carts::handlers::tests::make_item, test_helpers::carts_service};

    use super::*;

    fn make_service(carts: MockCartsService) -> Service {
        carts_service(carts, Router::with_path("api/cart/update").put(handler))
    }

    #[tokio::test]
    async fn test_update_success() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(|product, quantity| *product == ProductId::from("p1") && *quantity == 7)
            .return_once(|_, _| Ok(Some(make_item("p1", 100.0, 7))));

        let mut res = TestClient::put("http://example.com/api/cart/update")
            .json(&json!({ "productId": "p1", "quantity": 7 }))
            .send(&make_service(carts))
            .await;

        let body: MessageResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
        assert_eq!(body.message, "Cart updated", "message");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_zero_quantity_is_forwarded() {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .withf(|_, quantity| *quantity == 0)
            .return_once(|_, _| Ok(None));

        let res = TestClient::put("http://example.com/api/cart/update")
            .json(&json!({ "productId": "p1", "quantity": 0 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "status");
    }

    #[tokio::test]
    async fn test_update_missing_quantity_returns_400() {
        let mut carts = MockCartsService::new();

        carts.expect_update_quantity().never();

        let res = TestClient::put("http://example.com/api/cart/update")
            .json(&json!({ "productId": "p1" }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "status");
    }

    #[tokio::test]
    async fn test_update_missing_product_id_returns_400() {
        let mut carts = MockCartsService::new();

        carts.expect_update_quantity().never();

        let res = TestClient::put("http://example.com/api/cart/update")
            .json(&json!({ "quantity": 3 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "status");
    }

    #[tokio::test]
    async fn test_update_store_fault_returns_500() {
        let mut carts = MockCartsService::new();

        carts
            .expect_update_quantity()
            .once()
            .return_once(|_, _| Err(CartsServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::put("http://example.com/api/cart/update")
            .json(&json!({ "productId": "p1", "quantity": 2 }))
            .send(&make_service(carts))
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::INTERNAL_SERVER_ERROR),
            "status"
        );
    }
}
