use clap::Args;
use solarcart_app::domain::carts::{CartsService, models::Cart};

use super::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct ListItemsArgs {
    #[command(flatten)]
    database: DatabaseArgs,
}

pub(crate) async fn run(args: ListItemsArgs) -> Result<(), String> {
    let carts = args.database.carts_service().await?;

    let items = carts
        .list_items()
        .await
        .map_err(|error| format!("failed to list cart items: {error}"))?;

    if items.is_empty() {
        println!("cart is empty");
        return Ok(());
    }

    let cart = Cart::from_items(items);

    for item in &cart.items {
        println!("product_id: {}", item.product_id);
        println!("product_name: {}", item.product_name);
        println!("price: {:.2}", item.price);
        println!("quantity: {}", item.quantity);
        println!("image: {}", item.image.as_deref().unwrap_or("none"));
        println!("created_at: {}", item.created_at);
        println!();
    }

    println!("total: {:.2}", cart.total);

    Ok(())
}
