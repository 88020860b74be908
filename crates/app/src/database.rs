//! Database connection management

use std::{str::FromStr, time::Duration};

use sqlx::{
    PgPool, Postgres, Transaction,
    migrate::MigrateError,
    postgres::{PgConnectOptions, PgPoolOptions},
};

/// Bounds applied to every connection the pool hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseTimeouts {
    /// How long to wait for a pooled connection (and the first connect).
    pub connect: Duration,

    /// Server-side `statement_timeout` for each connection.
    pub statement: Duration,
}

impl Default for DatabaseTimeouts {
    fn default() -> Self {
        Self {
            connect: Duration::from_secs(3),
            statement: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be acquired or the transaction fails to start.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, sqlx::Error> {
        self.pool.begin().await
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL` with bounded acquire and statement timeouts.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the connection cannot be established in time.
pub async fn connect(database_url: &str, timeouts: DatabaseTimeouts) -> Result<PgPool, sqlx::Error> {
    let statement_timeout_ms = timeouts.statement.as_millis().to_string();

    let options = PgConnectOptions::from_str(database_url)?
        .options([("statement_timeout", statement_timeout_ms)]);

    PgPoolOptions::new()
        .acquire_timeout(timeouts.connect)
        .connect_with(options)
        .await
}

/// Apply pending schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn migrate(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
