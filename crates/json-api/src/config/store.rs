//! Cart Store Config

use std::time::Duration;

use clap::Args;
use solarcart_app::{
    context::{CartStoreKind, StoreSettings},
    database::DatabaseTimeouts,
};

/// Cart store selection and database settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Cart store to use (auto, postgres, memory)
    #[arg(long, env = "CART_STORE", value_enum, default_value_t = CartStoreKind::Auto)]
    pub cart_store: CartStoreKind,

    /// `PostgreSQL` connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// How long to wait for a pooled database connection.
    #[arg(long, env = "DATABASE_CONNECT_TIMEOUT_MS", default_value_t = 3_000_u64)]
    pub database_connect_timeout_ms: u64,

    /// Server-side statement timeout applied to every connection.
    #[arg(long, env = "DATABASE_STATEMENT_TIMEOUT_MS", default_value_t = 5_000_u64)]
    pub database_statement_timeout_ms: u64,
}

impl StoreConfig {
    /// Store selection inputs for the application context.
    #[must_use]
    pub fn settings(&self) -> StoreSettings {
        StoreSettings {
            kind: self.cart_store,
            database_url: self.database_url.clone(),
            timeouts: DatabaseTimeouts {
                connect: Duration::from_millis(self.database_connect_timeout_ms),
                statement: Duration::from_millis(self.database_statement_timeout_ms),
            },
        }
    }
}
