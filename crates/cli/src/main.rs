//! RoboTech CLI - storefront and admin console in the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! robo products list --search robot --sort price-low
//! robo products show p1
//!
//! # Shop
//! robo cart add p1 --quantity 2
//! robo cart show
//! robo cart checkout
//!
//! # Authenticate
//! robo auth login -e admin@example.com -p <password>
//!
//! # Admin console
//! robo admin review list --status pending
//! robo admin review approve r1
//! ```
//!
//! # Environment Variables
//!
//! - `ROBOTECH_API_BASE_URL` - Backend base URL (default: `http://localhost:5000/api`)
//! - `ROBOTECH_DATA_DIR` - Durable state directory (default: `.robotech`)

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary's job is writing to the terminal.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

use commands::AppContext;

#[derive(Parser)]
#[command(name = "robo")]
#[command(author, version, about = "RoboTech storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Manage the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Log in and manage the session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Send a message to the store
    Contact(commands::contact::ContactArgs),
    /// Display theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
    /// Admin console operations
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products with optional filters
    List(commands::products::ListArgs),
    /// Show one product in detail
    Show {
        /// Product ID
        id: String,
    },
    /// Show the featured products
    Featured,
}

#[derive(Subcommand)]
enum CartAction {
    /// Add a product to the cart
    Add {
        /// Product ID
        product_id: String,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        product_id: String,
    },
    /// Set a product's quantity exactly (0 removes it)
    Update {
        /// Product ID
        product_id: String,

        /// New quantity
        quantity: u32,
    },
    /// Show the cart contents and total
    Show,
    /// Empty the cart
    Clear,
    /// Check out (clears the cart)
    Checkout,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Log in with email and password
    Login {
        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Log out and discard the persisted session
    Logout,
    /// Create an account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Account email
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Show the current session
    Whoami,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set a specific theme (`light` or `dark`)
    Set {
        /// Theme mode
        mode: String,
    },
}

#[derive(Subcommand)]
enum AdminAction {
    /// Manage products
    Product {
        #[command(subcommand)]
        action: AdminProductAction,
    },
    /// Manage categories
    Category {
        #[command(subcommand)]
        action: AdminCategoryAction,
    },
    /// Moderate reviews
    Review {
        #[command(subcommand)]
        action: AdminReviewAction,
    },
    /// Manage contact messages
    Message {
        #[command(subcommand)]
        action: AdminMessageAction,
    },
}

#[derive(Subcommand)]
enum AdminProductAction {
    /// Create a product
    Create(commands::admin::ProductArgs),
    /// Update a product
    Update {
        /// Product ID
        id: String,

        #[command(flatten)]
        args: commands::admin::ProductArgs,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: String,
    },
}

#[derive(Subcommand)]
enum AdminCategoryAction {
    /// List categories
    List,
    /// Create a category
    Create {
        /// Category name
        #[arg(short, long)]
        name: String,

        /// Category description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Update a category
    Update {
        /// Category ID
        id: String,

        /// New name
        #[arg(short, long)]
        name: String,

        /// New description
        #[arg(short, long)]
        description: Option<String>,
    },
    /// Delete a category
    Delete {
        /// Category ID
        id: String,
    },
}

#[derive(Subcommand)]
enum AdminReviewAction {
    /// List reviews
    List {
        /// Filter by status (`pending`, `approved`, `rejected`)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Approve a review
    Approve {
        /// Review ID
        id: String,
    },
    /// Reject a review
    Reject {
        /// Review ID
        id: String,
    },
    /// Delete a review
    Delete {
        /// Review ID
        id: String,
    },
}

#[derive(Subcommand)]
enum AdminMessageAction {
    /// List messages
    List {
        /// Filter by status (`unread`, `read`, `archived`)
        #[arg(short, long)]
        status: Option<String>,
    },
    /// Show one message
    Show {
        /// Message ID
        id: String,
    },
    /// Mark a message as read
    Read {
        /// Message ID
        id: String,
    },
    /// Archive a message
    Archive {
        /// Message ID
        id: String,
    },
    /// Delete a message
    Delete {
        /// Message ID
        id: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing; default to warnings so command output stays clean
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "robotech_client=warn,robotech_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = AppContext::init().await?;

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List(args) => commands::products::list(&ctx, args).await?,
            ProductsAction::Show { id } => commands::products::show(&ctx, &id).await?,
            ProductsAction::Featured => commands::products::featured(&ctx).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&ctx, &product_id, quantity).await?,
            CartAction::Remove { product_id } => commands::cart::remove(&ctx, &product_id),
            CartAction::Update {
                product_id,
                quantity,
            } => commands::cart::update(&ctx, &product_id, quantity),
            CartAction::Show => commands::cart::show(&ctx),
            CartAction::Clear => commands::cart::clear(&ctx),
            CartAction::Checkout => commands::cart::checkout(&ctx),
        },
        Commands::Auth { action } => match action {
            AuthAction::Login { email, password } => {
                commands::auth::login(&ctx, &email, &password).await?;
            }
            AuthAction::Logout => commands::auth::logout(&ctx),
            AuthAction::Register {
                name,
                email,
                password,
            } => commands::auth::register(&ctx, &name, &email, &password).await?,
            AuthAction::Whoami => commands::auth::whoami(&ctx),
        },
        Commands::Contact(args) => commands::contact::send(&ctx, args).await?,
        Commands::Theme { action } => match action {
            ThemeAction::Show => commands::theme::show(&ctx),
            ThemeAction::Toggle => commands::theme::toggle(&ctx),
            ThemeAction::Set { mode } => commands::theme::set(&ctx, &mode)?,
        },
        Commands::Admin { action } => match action {
            AdminAction::Product { action } => match action {
                AdminProductAction::Create(args) => {
                    commands::admin::product_create(&ctx, args).await?;
                }
                AdminProductAction::Update { id, args } => {
                    commands::admin::product_update(&ctx, &id, args).await?;
                }
                AdminProductAction::Delete { id } => {
                    commands::admin::product_delete(&ctx, &id).await?;
                }
            },
            AdminAction::Category { action } => match action {
                AdminCategoryAction::List => commands::admin::category_list(&ctx).await?,
                AdminCategoryAction::Create { name, description } => {
                    commands::admin::category_create(&ctx, name, description).await?;
                }
                AdminCategoryAction::Update {
                    id,
                    name,
                    description,
                } => commands::admin::category_update(&ctx, &id, name, description).await?,
                AdminCategoryAction::Delete { id } => {
                    commands::admin::category_delete(&ctx, &id).await?;
                }
            },
            AdminAction::Review { action } => match action {
                AdminReviewAction::List { status } => {
                    commands::admin::review_list(&ctx, status.as_deref()).await?;
                }
                AdminReviewAction::Approve { id } => {
                    commands::admin::review_approve(&ctx, &id).await?;
                }
                AdminReviewAction::Reject { id } => {
                    commands::admin::review_reject(&ctx, &id).await?;
                }
                AdminReviewAction::Delete { id } => {
                    commands::admin::review_delete(&ctx, &id).await?;
                }
            },
            AdminAction::Message { action } => match action {
                AdminMessageAction::List { status } => {
                    commands::admin::message_list(&ctx, status.as_deref()).await?;
                }
                AdminMessageAction::Show { id } => {
                    commands::admin::message_show(&ctx, &id).await?;
                }
                AdminMessageAction::Read { id } => {
                    commands::admin::message_read(&ctx, &id).await?;
                }
                AdminMessageAction::Archive { id } => {
                    commands::admin::message_archive(&ctx, &id).await?;
                }
                AdminMessageAction::Delete { id } => {
                    commands::admin::message_delete(&ctx, &id).await?;
                }
            },
        },
    }
    Ok(())
}
