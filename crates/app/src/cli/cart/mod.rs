use std::time::Duration;

use clap::{Args, Subcommand};
use solarcart_app::{
    database::{self, DatabaseTimeouts, Db},
    domain::carts::PgCartsService,
};

mod clear;
mod list;
mod remove;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    List(list::ListItemsArgs),
    Clear(clear::ClearCartArgs),
    Remove(remove::RemoveItemArgs),
}

/// Connection flags shared by every cart command.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// How long to wait for a database connection, in milliseconds
    #[arg(long, env = "DATABASE_CONNECT_TIMEOUT_MS", default_value_t = 3000)]
    connect_timeout_ms: u64,
}

impl DatabaseArgs {
    pub(crate) async fn carts_service(&self) -> Result<PgCartsService, String> {
        let timeouts = DatabaseTimeouts {
            connect: Duration::from_millis(self.connect_timeout_ms),
            ..DatabaseTimeouts::default()
        };

        let pool = database::connect(&self.database_url, timeouts)
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))?;

        database::migrate(&pool)
            .await
            .map_err(|error| format!("failed to apply migrations: {error}"))?;

        Ok(PgCartsService::new(Db::new(pool)))
    }
}

pub(crate) async fn run(command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::List(args) => list::run(args).await,
        CartSubcommand::Clear(args) => clear::run(args).await,
        CartSubcommand::Remove(args) => remove::run(args).await,
    }
}
