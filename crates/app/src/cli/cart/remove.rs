use clap::Args;
use solarcart_app::domain::carts::CartsService;

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct RemoveItemArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Product whose cart line should be removed
    #[arg(long)]
    product_id: String,
}

pub(crate) async fn run(args: RemoveItemArgs) -> Result<(), String> {
    if args.product_id.trim().is_empty() {
        return Err("product_id cannot be empty".to_string());
    }

    let carts = args.database.carts_service().await?;

    let removed = carts
        .remove_item(args.product_id.clone().into())
        .await
        .map_err(|error| format!("failed to remove cart item: {error}"))?;

    if removed {
        println!("removed {}", args.product_id);
    } else {
        println!("{} was not in the cart", args.product_id);
    }

    Ok(())
}
