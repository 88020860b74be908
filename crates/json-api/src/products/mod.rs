//! Product catalog HTTP surface.

pub(crate) mod handlers;

pub(crate) use handlers::*;
