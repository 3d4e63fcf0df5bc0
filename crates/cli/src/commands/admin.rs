//! Admin console commands.
//!
//! Every operation here hits an authenticated endpoint; a 401 clears the
//! session and asks the operator to log in again.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;
use rust_decimal::Decimal;

use robotech_client::api::CategoryPayload;
use robotech_client::models::ProductPayload;
use robotech_client::validators::{ProductFormInput, validate_product_form};
use robotech_core::{
    CategoryId, MessageId, MessageStatus, ProductId, ProductStatus, ReviewId, ReviewStatus,
};

use super::{AppContext, fail_closed};

/// Product fields for create/update.
///
/// Price and stock are taken as raw strings and run through the form
/// validators, exactly like the admin form fields they mirror.
#[derive(Debug, Args)]
pub struct ProductArgs {
    /// Product name
    #[arg(long)]
    pub name: String,

    /// Category name
    #[arg(long)]
    pub category: String,

    /// Price (e.g. 599.99)
    #[arg(long)]
    pub price: String,

    /// Description (at least 10 characters)
    #[arg(long)]
    pub description: String,

    /// Units in stock
    #[arg(long)]
    pub stock: String,

    /// Comma-separated feature list
    #[arg(long)]
    pub features: Option<String>,

    /// Product status (active, draft, out_of_stock, discontinued)
    #[arg(long, default_value = "active")]
    pub status: String,

    /// Image file to upload alongside the product
    #[arg(long)]
    pub image: Option<PathBuf>,
}

impl ProductArgs {
    /// Validate the raw input and convert it into a payload.
    fn into_payload(self) -> Result<(ProductPayload, Option<PathBuf>), Box<dyn std::error::Error>> {
        let input = ProductFormInput {
            name: self.name.clone(),
            category: self.category.clone(),
            price: self.price.clone(),
            description: self.description.clone(),
            stock: self.stock.clone(),
        };

        let validation = validate_product_form(&input);
        if !validation.is_valid() {
            for (field, message) in validation.errors() {
                println!("  {field}: {message}");
            }
            return Err("product form is invalid".into());
        }

        let payload = ProductPayload {
            name: self.name,
            category: self.category,
            price: Decimal::from_str(self.price.trim())?,
            description: self.description,
            stock: self.stock.trim().parse()?,
            features: self
                .features
                .map(|features| {
                    features
                        .split(',')
                        .map(str::trim)
                        .filter(|f| !f.is_empty())
                        .map(ToOwned::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
            status: ProductStatus::from_str(&self.status)?,
        };

        Ok((payload, self.image))
    }
}

// =============================================================================
// Products
// =============================================================================

/// Create a product.
pub async fn product_create(
    ctx: &AppContext,
    args: ProductArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (payload, image) = args.into_payload()?;
    let product = ctx
        .api
        .create_product(&payload, image.as_deref())
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    println!("Created {} [{}]", product.name, product.id);
    Ok(())
}

/// Update a product.
pub async fn product_update(
    ctx: &AppContext,
    id: &str,
    args: ProductArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let (payload, image) = args.into_payload()?;
    let product = ctx
        .api
        .update_product(&ProductId::new(id), &payload, image.as_deref())
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    println!("Updated {} [{}]", product.name, product.id);
    Ok(())
}

/// Delete a product.
pub async fn product_delete(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    ctx.api
        .delete_product(&ProductId::new(id))
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    println!("Deleted product {id}.");
    Ok(())
}

// =============================================================================
// Categories
// =============================================================================

/// List all categories.
pub async fn category_list(ctx: &AppContext) -> Result<(), Box<dyn std::error::Error>> {
    let categories = ctx
        .api
        .list_categories()
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    if categories.is_empty() {
        println!("No categories.");
        return Ok(());
    }

    for category in &categories {
        let count = category
            .product_count
            .map_or(String::new(), |count| format!("  ({count} products)"));
        println!("{:<26} {}{count}", category.id, category.name);
    }
    Ok(())
}

/// Create a category.
pub async fn category_create(
    ctx: &AppContext,
    name: String,
    description: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = CategoryPayload { name, description };
    let category = ctx
        .api
        .create_category(&payload)
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    println!("Created category {} [{}]", category.name, category.id);
    Ok(())
}

/// Update a category.
pub async fn category_update(
    ctx: &AppContext,
    id: &str,
    name: String,
    description: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let payload = CategoryPayload { name, description };
    let category = ctx
        .api
        .update_category(&CategoryId::new(id), &payload)
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    println!("Updated category {} [{}]", category.name, category.id);
    Ok(())
}

/// Delete a category.
pub async fn category_delete(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    ctx.api
        .delete_category(&CategoryId::new(id))
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    println!("Deleted category {id}.");
    Ok(())
}

// =============================================================================
// Reviews
// =============================================================================

/// List reviews, optionally filtered by status.
pub async fn review_list(
    ctx: &AppContext,
    status: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = status.map(ReviewStatus::from_str).transpose()?;
    let reviews = ctx
        .api
        .list_reviews(status)
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    if reviews.is_empty() {
        println!("No reviews.");
        return Ok(());
    }

    for review in &reviews {
        println!(
            "{:<26} {:<10} {} stars by {} on {}\n    {}",
            review.id,
            review.status.as_str(),
            review.rating,
            review.author,
            review.product_id,
            review.comment,
        );
    }
    Ok(())
}

/// Approve a review.
pub async fn review_approve(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    ctx.api
        .approve_review(&ReviewId::new(id))
        .await
        .map_err(|e| fail_closed(ctx, e))?;
    println!("Approved review {id}.");
    Ok(())
}

/// Reject a review.
pub async fn review_reject(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    ctx.api
        .reject_review(&ReviewId::new(id))
        .await
        .map_err(|e| fail_closed(ctx, e))?;
    println!("Rejected review {id}.");
    Ok(())
}

/// Delete a review.
pub async fn review_delete(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    ctx.api
        .delete_review(&ReviewId::new(id))
        .await
        .map_err(|e| fail_closed(ctx, e))?;
    println!("Deleted review {id}.");
    Ok(())
}

// =============================================================================
// Messages
// =============================================================================

/// List contact messages, optionally filtered by status.
pub async fn message_list(
    ctx: &AppContext,
    status: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let status = status.map(MessageStatus::from_str).transpose()?;
    let messages = ctx
        .api
        .list_messages(status)
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    if messages.is_empty() {
        println!("No messages.");
        return Ok(());
    }

    for message in &messages {
        println!(
            "{:<26} [{:<8}] {} <{}>: {}",
            message.id,
            message.status.as_str(),
            message.name,
            message.email,
            message.subject,
        );
    }
    Ok(())
}

/// Show one message in full.
pub async fn message_show(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    let message = ctx
        .api
        .get_message(&MessageId::new(id))
        .await
        .map_err(|e| fail_closed(ctx, e))?;

    println!("From:     {} <{}>", message.name, message.email);
    println!("Subject:  {}", message.subject);
    println!("Status:   {}", message.status.as_str());
    if let Some(created_at) = message.created_at {
        println!("Received: {created_at}");
    }
    println!("\n{}", message.message);
    Ok(())
}

/// Mark a message as read.
pub async fn message_read(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    ctx.api
        .mark_message_read(&MessageId::new(id))
        .await
        .map_err(|e| fail_closed(ctx, e))?;
    println!("Marked message {id} as read.");
    Ok(())
}

/// Archive a message.
pub async fn message_archive(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    ctx.api
        .archive_message(&MessageId::new(id))
        .await
        .map_err(|e| fail_closed(ctx, e))?;
    println!("Archived message {id}.");
    Ok(())
}

/// Delete a message.
pub async fn message_delete(ctx: &AppContext, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    ctx.api
        .delete_message(&MessageId::new(id))
        .await
        .map_err(|e| fail_closed(ctx, e))?;
    println!("Deleted message {id}.");
    Ok(())
}
