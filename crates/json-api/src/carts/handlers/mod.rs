//! Cart Handlers

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

pub(crate) mod add;
pub(crate) mod index;
pub(crate) mod remove;
pub(crate) mod update;

/// Acknowledgement returned by cart mutations.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// Always `true` for a successful mutation
    pub success: bool,

    /// Human-readable outcome
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}
