//! Catalog

mod data;
pub mod models;
pub mod service;

pub use service::*;
