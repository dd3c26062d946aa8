//! shelf-edit - Edit an existing item on the board

use std::sync::Arc;

use clap::Parser;

use libshelf::remote::http::HttpRemote;
use libshelf::validation::validate_draft;
use libshelf::{Config, ItemStore, Result, ShelfError};

#[derive(Parser, Debug)]
#[command(name = "shelf-edit")]
#[command(version, about = "Edit an existing item on the board")]
#[command(long_about = r#"Edit the title and/or body of an existing item.

Fields not passed keep their current value. The new title must not collide
with a different item's title; collisions are rejected locally before any
request is made.

EXAMPLES:
    # Rename an item
    shelf-edit 12 --title "Grocery list (weekend)"

    # Replace the body
    shelf-edit 12 --body "milk, eggs, bread, coffee"

    # Both at once
    shelf-edit 12 --title "Groceries" --body "milk, eggs"

    # JSON output for scripting
    shelf-edit 12 --title "Groceries" --format json

EXIT CODES:
    0 - Item updated
    1 - Error (network failure, server error, bad config)
    3 - Invalid input (unknown id, empty field, duplicate title, nothing to change)
"#)]
struct Args {
    /// Id of the item to edit
    id: i64,

    /// New title
    #[arg(short, long, value_name = "TEXT")]
    title: Option<String>,

    /// New body
    #[arg(short, long, value_name = "TEXT")]
    body: Option<String>,

    /// Output format (text or json)
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    libshelf::logging::init(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(args: Args) -> Result<()> {
    if args.title.is_none() && args.body.is_none() {
        return Err(ShelfError::InvalidInput(
            "Nothing to change: pass --title and/or --body".to_string(),
        ));
    }

    let config = Config::load()?;
    let remote = HttpRemote::from_config(&config.api)?;
    let store = ItemStore::new(Arc::new(remote));

    store.fetch_all().await?;

    let mut item = store
        .snapshot()
        .find(args.id)
        .cloned()
        .ok_or_else(|| ShelfError::InvalidInput(format!("Item not found: {}", args.id)))?;

    if let Some(title) = args.title {
        item.title = title;
    }
    if let Some(body) = args.body {
        item.body = body;
    }

    let validation = validate_draft(&item.title, &item.body);
    if !validation.is_valid() {
        return Err(ShelfError::InvalidInput(validation.messages().join("; ")));
    }

    let updated = store.update(item).await?;

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&updated)
                .map_err(|e| ShelfError::InvalidInput(format!("Failed to encode JSON: {}", e)))?;
            println!("{}", json);
        }
        _ => println!("Updated item {} ({})", updated.id, updated.title),
    }

    Ok(())
}
