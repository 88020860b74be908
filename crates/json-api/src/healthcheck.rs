//! SolarCart JSON API Healthcheck Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::extensions::*;

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Cart store selected at startup (`postgres` or `memory`)
    pub cart_store: String,
}

/// Healthcheck handler
///
/// Returns service health status and the active cart store
#[endpoint(tags("health"), summary = "Health check endpoint")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<HealthResponse>, StatusError> {
    let app = depot.app_or_500()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        cart_store: app.cart_backend.to_string(),
    }))
}
