//! App Router

use salvo::Router;

use crate::{carts, products};

/// Cart and catalog routes under `/api`.
pub(crate) fn app_router() -> Router {
    Router::with_path("api")
        .push(
            Router::with_path("cart")
                .get(carts::index::handler)
                .push(Router::with_path("add").post(carts::add::handler))
                .push(Router::with_path("update").put(carts::update::handler))
                .push(Router::with_path("remove/{product_id}").delete(carts::remove::handler)),
        )
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product_id}").get(products::get::handler)),
        )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::{
        affix_state::inject,
        catcher::Catcher,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use serde_json::json;
    use testresult::TestResult;

    use solarcart_app::context::AppContext;

    use crate::{
        carts::index::CartResponse,
        catcher::{ErrorResponse, json_errors},
        products::index::ProductsResponse,
        state::State,
    };

    use super::*;

    fn service() -> Service {
        let state: Arc<State> = State::from_app_context(AppContext::in_memory());

        Service::new(Router::new().hoop(inject(state)).push(app_router()))
            .catcher(Catcher::default().hoop(json_errors))
    }

    async fn get_cart(service: &Service) -> Result<CartResponse, salvo::Error> {
        TestClient::get("http://example.com/api/cart")
            .send(service)
            .await
            .take_json()
            .await
    }

    async fn add(service: &Service, body: serde_json::Value) -> Option<StatusCode> {
        TestClient::post("http://example.com/api/cart/add")
            .json(&body)
            .send(service)
            .await
            .status_code
    }

    #[tokio::test]
    async fn adding_twice_merges_and_totals() -> TestResult {
        let service = service();
        let panel = json!({ "productId": "p1", "productName": "Panel", "price": 100, "quantity": 2 });

        assert_eq!(add(&service, panel).await, Some(StatusCode::OK), "first add");

        let cart = get_cart(&service).await?;

        assert_eq!(cart.items.len(), 1, "one line");
        assert!((cart.total - 200.0).abs() < f64::EPSILON, "total after first add");

        let again = json!({ "productId": "p1", "productName": "Panel", "price": 100, "quantity": 3 });

        assert_eq!(add(&service, again).await, Some(StatusCode::OK), "second add");

        let cart = get_cart(&service).await?;

        assert_eq!(
            cart.items.first().map(|item| item.quantity),
            Some(5),
            "merged quantity"
        );
        assert!((cart.total - 500.0).abs() < f64::EPSILON, "total after merge");

        Ok(())
    }

    #[tokio::test]
    async fn update_to_zero_empties_the_cart() -> TestResult {
        let service = service();

        add(
            &service,
            json!({ "productId": "p1", "productName": "Panel", "price": 100, "quantity": 2 }),
        )
        .await;

        let res = TestClient::put("http://example.com/api/cart/update")
            .json(&json!({ "productId": "p1", "quantity": 0 }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "update status");

        let cart = get_cart(&service).await?;

        assert!(cart.items.is_empty(), "no items");
        assert!(cart.total.abs() < f64::EPSILON, "zero total");

        Ok(())
    }

    #[tokio::test]
    async fn add_without_price_leaves_cart_unchanged() -> TestResult {
        let service = service();

        let status = add(&service, json!({ "productId": "p1", "productName": "Panel" })).await;

        assert_eq!(status, Some(StatusCode::BAD_REQUEST), "missing price");
        assert!(get_cart(&service).await?.items.is_empty(), "cart unchanged");

        Ok(())
    }

    #[tokio::test]
    async fn validation_errors_are_json_without_an_accept_header() -> TestResult {
        let service = service();

        let mut res = TestClient::post("http://example.com/api/cart/add")
            .json(&json!({ "productId": "p1", "productName": "Panel" }))
            .send(&service)
            .await;

        let content_type = res
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST), "status");
        assert!(
            content_type.is_some_and(|value| value.starts_with("application/json")),
            "json content type"
        );
        assert_eq!(body.error, "Missing required fields", "error message");

        Ok(())
    }

    #[tokio::test]
    async fn update_with_null_quantity_removes_the_line() -> TestResult {
        let service = service();

        add(
            &service,
            json!({ "productId": "p1", "productName": "Panel", "price": 100 }),
        )
        .await;

        let res = TestClient::put("http://example.com/api/cart/update")
            .json(&json!({ "productId": "p1", "quantity": null }))
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK), "update status");
        assert!(get_cart(&service).await?.items.is_empty(), "line removed");

        Ok(())
    }

    #[tokio::test]
    async fn remove_is_idempotent() -> TestResult {
        let service = service();

        add(
            &service,
            json!({ "productId": "p1", "productName": "Panel", "price": 10 }),
        )
        .await;

        for _ in 0..2 {
            let res = TestClient::delete("http://example.com/api/cart/remove/p1")
                .send(&service)
                .await;

            assert_eq!(res.status_code, Some(StatusCode::OK), "remove status");
        }

        assert!(get_cart(&service).await?.items.is_empty(), "cart empty");

        Ok(())
    }

    #[tokio::test]
    async fn catalog_is_served() -> TestResult {
        let service = service();

        let catalog: ProductsResponse = TestClient::get("http://example.com/api/products")
            .send(&service)
            .await
            .take_json()
            .await?;

        let res = TestClient::get("http://example.com/api/products/ultracell-550w")
            .send(&service)
            .await;

        assert_eq!(catalog.products.len(), 4, "four products");
        assert_eq!(res.status_code, Some(StatusCode::OK), "product detail");

        Ok(())
    }
}
