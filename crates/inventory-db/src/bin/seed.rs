//! # Seed Data Generator
//!
//! Populates the database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 100 products (default)
//! cargo run -p inventory-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p inventory-db --bin seed -- --count 1000
//!
//! # Specify database path
//! cargo run -p inventory-db --bin seed -- --db ./data/inventory.db
//! ```
//!
//! Products get ids `1..=count`, a name built from an item and a size,
//! a stock level of 0 - 100 and a price of $0.99 - $24.98.

use std::env;

use anyhow::{bail, Context};
use inventory_core::{NewProduct, ProductStore};
use inventory_db::{Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const DEFAULT_COUNT: usize = 100;
const DEFAULT_DB_PATH: &str = "./inventory.db";

/// Item names for realistic test data
const ITEMS: &[&str] = &[
    "Widget",
    "Gadget",
    "Sprocket",
    "Bolt",
    "Nut",
    "Washer",
    "Hinge",
    "Bracket",
    "Gear",
    "Spring",
    "Pulley",
    "Valve",
    "Gasket",
    "Bearing",
    "Clamp",
    "Rivet",
];

/// Size variants, with the price step each adds in cents
const SIZES: &[(&str, i64)] = &[
    ("Small", 0),
    ("Medium", 150),
    ("Large", 300),
    ("XL", 500),
    ("Bulk Pack", 900),
];

struct Args {
    count: usize,
    db_path: String,
}

fn parse_args() -> anyhow::Result<Option<Args>> {
    let args: Vec<String> = env::args().collect();

    let mut parsed = Args {
        count: DEFAULT_COUNT,
        db_path: DEFAULT_DB_PATH.to_string(),
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                let value = args.get(i + 1).context("--count needs a value")?;
                parsed.count = value
                    .parse()
                    .with_context(|| format!("invalid --count '{value}'"))?;
                i += 1;
            }
            "--db" | "-d" => {
                parsed.db_path = args.get(i + 1).context("--db needs a value")?.clone();
                i += 1;
            }
            "--help" | "-h" => {
                println!("Inventory Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: {DEFAULT_COUNT})");
                println!("  -d, --db <PATH>    Database file path (default: {DEFAULT_DB_PATH})");
                println!("  -h, --help         Show this help message");
                return Ok(None);
            }
            other => bail!("unknown argument '{other}' (try --help)"),
        }
        i += 1;
    }

    Ok(Some(parsed))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,inventory=debug,sqlx=warn")),
        )
        .init();

    let Some(args) = parse_args()? else {
        return Ok(());
    };

    info!(db = %args.db_path, count = args.count, "Seeding inventory database");

    let db = Database::new(DbConfig::new(&args.db_path))
        .await
        .context("failed to open database")?;
    let store = db.products();

    let existing = store.count().await?;
    if existing > 0 {
        warn!(
            existing,
            "Database already has products, skipping seed. Delete the file to regenerate."
        );
        db.close().await;
        return Ok(());
    }

    let start = std::time::Instant::now();
    let mut generated = 0usize;

    for seed in 0..args.count {
        let product = generate_product(seed);
        let id = product.id;

        if let Err(e) = store.create(product).await {
            warn!(?id, error = %e, "Failed to insert product");
            continue;
        }

        generated += 1;
        if generated % 500 == 0 {
            info!(generated, "Progress");
        }
    }

    let elapsed = start.elapsed();
    info!(
        generated,
        elapsed_ms = elapsed.as_millis() as u64,
        rate = %format!("{:.0}/s", generated as f64 / elapsed.as_secs_f64().max(f64::EPSILON)),
        "Seed complete"
    );

    db.close().await;
    Ok(())
}

/// Generates a single product with deterministic data.
fn generate_product(seed: usize) -> NewProduct {
    let item = ITEMS[seed % ITEMS.len()];
    let (size, price_step) = SIZES[(seed / ITEMS.len()) % SIZES.len()];

    // $0.99 - $15.98 base, plus the size step
    let price_cents = 99 + ((seed * 37) % 1500) as i64 + price_step;
    let quantity = (seed % 101) as i64;

    NewProduct::with_id(
        seed as i64 + 1,
        format!("{item} {size}"),
        quantity,
        price_cents as f64 / 100.0,
    )
}
