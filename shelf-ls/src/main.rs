//! shelf-ls - List items on the board

use std::sync::Arc;

use clap::Parser;

use libshelf::query::{self, SortOrder};
use libshelf::remote::http::HttpRemote;
use libshelf::{Config, ItemStore, Result, ShelfError};

#[derive(Parser, Debug)]
#[command(name = "shelf-ls")]
#[command(version, about = "List items on the board")]
#[command(long_about = r#"List items on the board with search and sort options.

EXAMPLES:
    # Show all items
    shelf-ls

    # Search titles (case-insensitive substring match)
    shelf-ls --search grocery

    # Sort by title
    shelf-ls --sort asc
    shelf-ls --sort desc

    # Show bodies as well
    shelf-ls --long

    # JSON output for scripting
    shelf-ls --format json
    shelf-ls --format json | jq '.[] | .title'

EXIT CODES:
    0 - Success (including empty results)
    1 - Error (network failure, server error, bad config)
"#)]
struct Args {
    /// Filter items whose title contains this text
    #[arg(short, long, value_name = "TERM")]
    search: Option<String>,

    /// Sort by title (asc or desc)
    #[arg(long, value_name = "ORDER", value_parser = ["asc", "desc"])]
    sort: Option<String>,

    /// Also print item bodies
    #[arg(short, long)]
    long: bool,

    /// Output format
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
    let config = Config::load()?;
    let remote = HttpRemote::from_config(&config.api)?;
    let store = ItemStore::new(Arc::new(remote));

    let mut items = store.fetch_all().await?;

    if let Some(term) = &args.search {
        items = query::filter_by_title(&items, term);
    }

    if let Some(order) = &args.sort {
        let order: SortOrder = order.parse().map_err(ShelfError::InvalidInput)?;
        query::sort_by_title(&mut items, order);
    }

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&items)
                .map_err(|e| ShelfError::InvalidInput(format!("Failed to encode JSON: {}", e)))?;
            println!("{}", json);
        }
        _ => {
            if items.is_empty() {
                println!("No items found.");
                return Ok(());
            }
            for item in &items {
                println!("{:>5}  {}", item.id, item.title);
                if args.long {
                    for line in item.body.lines() {
                        println!("       {}", line);
                    }
                }
            }
        }
    }

    Ok(())
}
