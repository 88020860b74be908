//! Remove Cart Item Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use solarcart_app::domain::carts::models::ProductId;

use crate::{
    carts::{errors::into_status_error, handlers::MessageResponse},
    extensions::*,
};

/// Remove Cart Item Handler
///
/// Removing a product that is not in the cart still succeeds.
#[endpoint(
    tags("cart"),
    summary = "Remove Item from Cart",
    responses(
        (status_code = StatusCode::OK, description = "Item removed from cart"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Failed to remove item from cart"),
    ),
)]
#[tracing::instrument(
    name = "cart.remove",
    skip(product_id, depot),
    fields(product_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<MessageResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let product = ProductId::from(product_id.into_inner());

    tracing::Span::current().record("product_id", tracing::field::display(&product));

    let removed = app
        .carts
        .remove_item(product.clone())
        .await
        .map_err(|error| into_status_error(error, "Failed to remove item from cart"))?;

    tracing::info!(product_id = %product, removed, "removed cart item");

    Ok(Json(MessageResponse::ok("Item removed from cart")))
}
