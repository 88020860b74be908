use clap::Args;
use solarcart_app::domain::carts::CartsService;

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ClearCartArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ClearCartArgs) -> Result<(), String> {
    let carts = args.database.carts_service().await?;

    let removed = carts
        .clear()
        .await
        .map_err(|error| format!("failed to clear cart: {error}"))?;

    println!("removed {removed} cart item(s)");

    Ok(())
}
