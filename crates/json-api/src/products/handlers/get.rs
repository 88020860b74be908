//! Get Product Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use solarcart_app::domain::carts::models::ProductId;

use crate::{extensions::*, products::handlers::ProductResponse};

/// Get Product Handler
///
/// Returns a single product.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product_id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let app = depot.app_or_500()?;
    let product = ProductId::from(product_id.into_inner());

    let Some(found) = app.catalog.get_product(&product) else {
        return Err(StatusError::not_found().brief("Product not found"));
    };

    Ok(Json(found.into()))
}
