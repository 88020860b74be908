//! App Context

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    sync::Arc,
};

use clap::ValueEnum;
use sqlx::migrate::MigrateError;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    database::{self, DatabaseTimeouts, Db},
    domain::{
        carts::{CartsService, MemoryCartsService, PgCartsService},
        catalog::{CatalogService, StaticCatalogService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] MigrateError),

    #[error("DATABASE_URL is required when CART_STORE=postgres")]
    MissingDatabaseUrl,
}

/// Which cart store the process should use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CartStoreKind {
    /// Use `PostgreSQL` when reachable, otherwise fall back to memory.
    #[default]
    Auto,
    Postgres,
    Memory,
}

/// The cart store that was actually selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartBackend {
    Postgres,
    Memory,
}

impl CartBackend {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::Memory => "memory",
        }
    }
}

impl Display for CartBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Store selection inputs.
#[derive(Debug, Clone, Default)]
pub struct StoreSettings {
    pub kind: CartStoreKind,
    pub database_url: Option<String>,
    pub timeouts: DatabaseTimeouts,
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub catalog: Arc<dyn CatalogService>,
    pub cart_backend: CartBackend,
}

impl AppContext {
    /// Build application context, choosing the cart store once.
    ///
    /// # Errors
    ///
    /// Returns an error when `postgres` is requested and the database cannot be reached or
    /// migrated. In `auto` mode database failures fall back to the in-memory store.
    pub async fn init(settings: &StoreSettings) -> Result<Self, AppInitError> {
        let database_url = settings
            .database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty());

        match (settings.kind, database_url) {
            (CartStoreKind::Memory, _) => Ok(Self::in_memory()),
            (CartStoreKind::Postgres, None) => Err(AppInitError::MissingDatabaseUrl),
            (CartStoreKind::Postgres, Some(url)) => {
                Self::from_database_url(url, settings.timeouts).await
            }
            (CartStoreKind::Auto, None) => {
                warn!("DATABASE_URL not set, continuing without database connection");

                Ok(Self::in_memory())
            }
            (CartStoreKind::Auto, Some(url)) => {
                match Self::from_database_url(url, settings.timeouts).await {
                    Ok(context) => Ok(context),
                    Err(error) => {
                        warn!(
                            error = %error,
                            "continuing without database connection, using in-memory cart"
                        );

                        Ok(Self::in_memory())
                    }
                }
            }
        }
    }

    /// Build application context from a database URL, applying migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(
        url: &str,
        timeouts: DatabaseTimeouts,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, timeouts)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        info!("connected to PostgreSQL cart store");

        Ok(Self::with_carts(
            Arc::new(PgCartsService::new(Db::new(pool))),
            CartBackend::Postgres,
        ))
    }

    #[must_use]
    pub fn in_memory() -> Self {
        info!("using in-memory cart store");

        Self::with_carts(Arc::new(MemoryCartsService::new()), CartBackend::Memory)
    }

    #[must_use]
    pub fn with_carts(carts: Arc<dyn CartsService>, cart_backend: CartBackend) -> Self {
        Self {
            carts,
            catalog: Arc::new(StaticCatalogService::new()),
            cart_backend,
        }
    }
}
