//! `food-admin`: command line front end for the back office API.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use food_admin_sdk::client::API_URL_ENV;
use food_admin_sdk::prelude::*;
use food_admin_sdk::shared::fmt;
use futures_util::future::try_join;
use rust_decimal::Decimal;
use tracing::{error, info};

/// Command line interface for the food back office.
#[derive(Parser)]
#[command(
    name = "food-admin",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage users, catalog and orders of the food back office"
)]
struct Cli {
    /// API base URL
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Admin email used to log in
    #[arg(long, env = "FOOD_ADMIN_EMAIL")]
    email: Option<String>,

    /// Admin password used to log in
    #[arg(long, env = "FOOD_ADMIN_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard statistics
    Dashboard,

    /// Manage users
    Users {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Manage categories
    Categories {
        #[command(subcommand)]
        action: CategoryCommands,
    },

    /// Manage products
    Products {
        #[command(subcommand)]
        action: ProductCommands,
    },

    /// Compose and place an order
    Order {
        /// User the order is placed for
        #[arg(long, value_name = "USER_ID")]
        user: String,

        /// Line item as PRODUCT_ID or PRODUCT_ID=QUANTITY (repeatable)
        #[arg(long = "item", value_name = "PRODUCT[=QTY]", value_parser = parse_item, required = true)]
        items: Vec<(ProductId, i64)>,

        /// Print the total without placing the order
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
enum UserCommands {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        mobile: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    List,
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand)]
enum ProductCommands {
    List {
        /// Only list products that can be ordered
        #[arg(long)]
        active: bool,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        price: Decimal,
        #[arg(long, value_parser = parse_status, default_value = "active")]
        status: ProductStatus,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        price: Option<Decimal>,
        #[arg(long, value_parser = parse_status)]
        status: Option<ProductStatus>,
    },
    Delete {
        id: String,
    },
}

fn parse_status(s: &str) -> Result<ProductStatus, String> {
    ProductStatus::parse(s).ok_or_else(|| format!("expected `active` or `inactive`, got {s:?}"))
}

fn parse_item(s: &str) -> Result<(ProductId, i64), String> {
    match s.split_once('=') {
        Some((id, qty)) => qty
            .trim()
            .parse::<i64>()
            .map(|q| (ProductId::from(id.trim()), q))
            .map_err(|_| format!("invalid quantity in {s:?}")),
        None => Ok((ProductId::from(s.trim()), 1)),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<(), SdkError> {
    let client = FoodAdminClient::builder().base_url(&cli.api_url).build()?;

    match (&cli.email, &cli.password) {
        (Some(email), Some(password)) => {
            let admin = client.auth().login(email, password).await?;
            info!(admin = %admin.username, api = client.base_url(), "authenticated");
        }
        _ => return Err(AuthError::NotAuthenticated.into()),
    }

    match cli.command {
        Commands::Dashboard => {
            for tile in client.dashboard().tiles().await? {
                println!("{:<16}{}", tile.title, tile.value);
            }
        }
        Commands::Users { action } => users(&client, action).await?,
        Commands::Categories { action } => categories(&client, action).await?,
        Commands::Products { action } => products(&client, action).await?,
        Commands::Order {
            user,
            items,
            dry_run,
        } => order(&client, user, items, dry_run).await?,
    }
    Ok(())
}

async fn users(client: &FoodAdminClient, action: UserCommands) -> Result<(), SdkError> {
    match action {
        UserCommands::List => {
            for user in client.users().list().await? {
                println!("{}\t{}\t{}", user.id, user.label(), user.mobile);
            }
        }
        UserCommands::Create {
            name,
            email,
            mobile,
        } => {
            let user = client
                .users()
                .create(&NewUser {
                    name,
                    email,
                    mobile,
                })
                .await?;
            println!("created user {}", user.id);
        }
        UserCommands::Update {
            id,
            name,
            email,
            mobile,
        } => {
            let patch = UserPatch {
                name,
                email,
                mobile,
            };
            if patch.is_empty() {
                return Err(SdkError::Validation("nothing to update".to_string()));
            }
            let user = client.users().update(&id.into(), &patch).await?;
            println!("updated user {}", user.id);
        }
        UserCommands::Delete { id } => {
            client.users().delete(&id.into()).await?;
            println!("deleted");
        }
    }
    Ok(())
}

async fn categories(client: &FoodAdminClient, action: CategoryCommands) -> Result<(), SdkError> {
    match action {
        CategoryCommands::List => {
            for category in client.categories().list().await? {
                println!("{}\t{}\t{}", category.id, category.name, category.description);
            }
        }
        CategoryCommands::Create { name, description } => {
            let category = client
                .categories()
                .create(&NewCategory { name, description })
                .await?;
            println!("created category {}", category.id);
        }
        CategoryCommands::Update {
            id,
            name,
            description,
        } => {
            let category = client
                .categories()
                .update(&id.into(), &CategoryPatch { name, description })
                .await?;
            println!("updated category {}", category.id);
        }
        CategoryCommands::Delete { id } => {
            client.categories().delete(&id.into()).await?;
            println!("deleted");
        }
    }
    Ok(())
}

async fn products(client: &FoodAdminClient, action: ProductCommands) -> Result<(), SdkError> {
    match action {
        ProductCommands::List { active } => {
            let products = client.products();
            let categories = client.categories();
            let (list, categories) = if active {
                try_join(products.list_active(), categories.list()).await?
            } else {
                try_join(products.list(), categories.list()).await?
            };
            for p in &list {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    p.id,
                    p.name,
                    p.category_name(&categories),
                    fmt::usd(&p.price),
                    p.status
                );
            }
        }
        ProductCommands::Create {
            name,
            category,
            price,
            status,
        } => {
            let product = client
                .products()
                .create(&NewProduct {
                    name,
                    category_id: category.into(),
                    price,
                    status,
                })
                .await?;
            println!("created product {}", product.id);
        }
        ProductCommands::Update {
            id,
            name,
            category,
            price,
            status,
        } => {
            let patch = ProductPatch {
                name,
                category_id: category.map(CategoryId::from),
                price,
                status,
            };
            let product = client.products().update(&id.into(), &patch).await?;
            println!("updated product {}", product.id);
        }
        ProductCommands::Delete { id } => {
            client.products().delete(&id.into()).await?;
            println!("deleted");
        }
    }
    Ok(())
}

async fn order(
    client: &FoodAdminClient,
    user: String,
    items: Vec<(ProductId, i64)>,
    dry_run: bool,
) -> Result<(), SdkError> {
    let mut composer = OrderComposer::new(load_snapshot(client).await?);
    composer.select_user(user)?;
    for (product_id, quantity) in items {
        composer.add_line_item(product_id)?;
        let index = composer.line_items().len() - 1;
        composer.update_line_item(index, LineItemUpdate::Quantity(quantity))?;
    }

    for (index, item) in composer.line_items().iter().enumerate() {
        let name = composer
            .catalog()
            .product(&item.product_id)
            .map_or("Unknown", |p| p.name.as_str());
        let line_total = composer.line_total(index).unwrap_or_default();
        println!("{:>4} × {:<24}{:>12}", item.quantity, name, fmt::usd(&line_total));
    }
    println!("Total: {}", fmt::usd(&composer.compute_total()));

    if dry_run {
        composer.validate()?;
        return Ok(());
    }

    let placed = composer.submit(client).await?;
    if let Some(notice) = composer.notice() {
        println!("{} ({})", notice.message(), placed.id);
    }
    Ok(())
}
