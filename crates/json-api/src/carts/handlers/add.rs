//! Add Cart Item Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use solarcart_app::domain::carts::models::NewCartItem;

use crate::{
    carts::{
        errors::into_status_error, handlers::MessageResponse, requests::AddCartItemRequest,
    },
    extensions::*,
};

/// Add Cart Item Handler
///
/// Adds a product to the cart, or increases its quantity when already present.
#[endpoint(
    tags("cart"),
    summary = "Add Item to Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item added to cart"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing or invalid fields"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to add item to cart"),
    ),
)]
#[tracing::instrument(
    name = "cart.add",
    skip(json, depot),
    fields(
        product_id = tracing::field::Empty,
        quantity = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<AddCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let item = NewCartItem::try_from(json.into_inner())?;

    let span = tracing::Span::current();

    span.record("product_id", tracing::field::display(&item.product_id));
    span.record("quantity", item.quantity);

    let item = app
        .carts
        .add_item(item)
        .await
        .map_err(|error| into_status_error(error, "Failed to add item to cart"))?;

    tracing::info!(
        product_id = %item.product_id,
        quantity = item.quantity,
        "added item to cart"
    );

    Ok(Json(MessageResponse::ok("Item added to cart")))
}
