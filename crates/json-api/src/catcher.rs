//! JSON error bodies

use salvo::{
    http::{StatusCode, body::ResBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

/// Error Response
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

/// Writes every error response as `{"error": "<message>"}`, whatever the client accepts.
#[handler]
pub(crate) async fn json_errors(res: &mut Response, ctrl: &mut FlowCtrl) {
    let status = res
        .status_code
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let error = match res.replace_body(ResBody::None) {
        ResBody::Error(error) if !error.brief.is_empty() => error.brief,
        _ => status.canonical_reason().unwrap_or("Error").to_owned(),
    };

    res.status_code(status);
    res.render(Json(ErrorResponse { error }));

    ctrl.skip_rest();
}
