//! Catalog browsing commands.

use clap::Args;
use rust_decimal::Decimal;

use robotech_client::{CatalogController, FilterState};
use robotech_core::{CategoryId, ProductId, SortKey};

use super::AppContext;

/// Filters for `robo products list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by category ID
    #[arg(long)]
    pub category: Option<String>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<Decimal>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<Decimal>,

    /// Minimum star rating (1-5)
    #[arg(long)]
    pub rating: Option<u8>,

    /// Free-text search
    #[arg(long, short)]
    pub search: Option<String>,

    /// Only show in-stock products
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order (featured, popular, rating, price-low, price-high, newest)
    #[arg(long, default_value = "featured")]
    pub sort: SortKey,

    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

impl ListArgs {
    fn into_filter(self) -> FilterState {
        let mut filter = FilterState::default();
        filter.set_category(self.category.map(CategoryId::new));
        filter.set_price_range(self.min_price, self.max_price);
        filter.set_rating(self.rating);
        filter.set_search(self.search);
        if self.in_stock {
            filter.set_in_stock(Some(true));
        }
        filter.set_sort(self.sort);
        filter.set_page(self.page);
        filter
    }
}

/// List products matching the given filters.
pub async fn list(ctx: &AppContext, args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let controller =
        CatalogController::with_filter(ctx.api.clone(), ctx.config.page_size, args.into_filter());
    controller.refresh().await?;

    let Some(results) = controller.results() else {
        println!("No results.");
        return Ok(());
    };

    if results.items.is_empty() {
        println!("No products match the current filters.");
        return Ok(());
    }

    println!(
        "{:<26} {:<22} {:>10} {:>7}  {}",
        "ID", "NAME", "PRICE", "RATING", "STOCK"
    );
    for product in &results.items {
        println!(
            "{:<26} {:<22} {:>10} {:>7.1}  {}",
            product.id,
            truncate(&product.name, 22),
            product.display_price().to_string(),
            product.rating,
            if product.in_stock { "yes" } else { "no" },
        );
    }

    let pagination = results.pagination;
    println!(
        "\npage {}/{} ({} products total)",
        pagination.page, pagination.pages, pagination.total
    );
    Ok(())
}

/// Show a single product in detail.
pub async fn show(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let product = ctx.api.get_product(&ProductId::new(id)).await?;

    println!("{}  [{}]", product.name, product.id);
    if let Some(badge) = &product.badge {
        println!("  {badge}");
    }
    println!("  category: {}", product.category);
    print!("  price:    {}", product.display_price());
    if let Some(original) = product.original_price {
        print!("  (was {})", robotech_core::Price::usd(original));
    }
    println!();
    println!(
        "  rating:   {:.1} ({} reviews)",
        product.rating, product.review_count
    );
    println!(
        "  stock:    {}",
        match product.stock {
            Some(stock) => stock.to_string(),
            None if product.in_stock => "available".to_string(),
            None => "out of stock".to_string(),
        }
    );
    if !product.features.is_empty() {
        println!("  features: {}", product.features.join(", "));
    }
    if !product.description.is_empty() {
        println!("\n{}", product.description);
    }
    Ok(())
}

/// Show the featured products.
pub async fn featured(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let products = ctx.api.featured_products().await?;

    if products.is_empty() {
        println!("No featured products.");
        return Ok(());
    }

    for product in &products {
        println!(
            "{:<26} {:<30} {:>10}",
            product.id,
            truncate(&product.name, 30),
            product.display_price().to_string()
        );
    }
    Ok(())
}

/// Clip a string for table display.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let clipped: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{clipped}\u{2026}")
    }
}
