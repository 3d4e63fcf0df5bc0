//! Shopping cart commands.

use robotech_client::models::ProductSnapshot;
use robotech_core::ProductId;

use super::AppContext;

/// Fetch the product and add it to the cart.
pub async fn add(
    ctx: &AppContext,
    product_id: &str,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = ctx.api.get_product(&ProductId::new(product_id)).await?;

    if !product.in_stock {
        println!("note: {} is currently out of stock", product.name);
    }

    ctx.cart.add_item(ProductSnapshot::from(&product), quantity);
    println!(
        "Added {quantity} x {} - cart now holds {} item(s), total {}",
        product.name,
        ctx.cart.count(),
        ctx.cart.total_price()
    );
    Ok(())
}

/// Remove a product from the cart.
pub fn remove(ctx: &AppContext, product_id: &str) {
    ctx.cart.remove_item(&ProductId::new(product_id));
    println!(
        "Removed. Cart now holds {} item(s), total {}",
        ctx.cart.count(),
        ctx.cart.total_price()
    );
}

/// Set a product's quantity exactly; zero removes the line.
pub fn update(ctx: &AppContext, product_id: &str, quantity: u32) {
    ctx.cart
        .update_quantity(&ProductId::new(product_id), quantity);
    println!(
        "Updated. Cart now holds {} item(s), total {}",
        ctx.cart.count(),
        ctx.cart.total_price()
    );
}

/// Print the cart contents.
pub fn show(ctx: &AppContext) {
    let lines = ctx.cart.lines();

    if lines.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    println!("{:<26} {:<30} {:>4} {:>12}", "ID", "NAME", "QTY", "LINE TOTAL");
    for line in &lines {
        println!(
            "{:<26} {:<30} {:>4} {:>12}",
            line.product.id,
            line.product.name,
            line.quantity,
            robotech_core::Price::usd(line.line_total()).to_string(),
        );
    }
    println!(
        "\n{} item(s), total {}",
        ctx.cart.count(),
        ctx.cart.total_price()
    );
}

/// Empty the cart.
pub fn clear(ctx: &AppContext) {
    ctx.cart.clear();
    println!("Cart cleared.");
}

/// Checkout stub: print the order summary and clear the cart.
pub fn checkout(ctx: &AppContext) {
    if ctx.cart.is_empty() {
        println!("Your cart is empty - nothing to check out.");
        return;
    }

    let count = ctx.cart.count();
    let total = ctx.cart.total_price();
    ctx.cart.clear();

    println!("Order placed: {count} item(s), {total}. Thank you for shopping at RoboTech!");
}
