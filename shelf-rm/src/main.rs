//! shelf-rm - Remove items from the board

use std::sync::Arc;

use clap::Parser;

use libshelf::remote::http::HttpRemote;
use libshelf::{Config, ItemStore, Result};

#[derive(Parser, Debug)]
#[command(name = "shelf-rm")]
#[command(version, about = "Remove items from the board")]
#[command(long_about = r#"Remove one or more items from the board by id.

Ids are removed in the order given; the first failure stops the run.

EXAMPLES:
    # Remove a single item
    shelf-rm 12

    # Remove several items
    shelf-rm 12 13 14

    # Remove every item matching a search
    shelf-ls --search draft --format json | jq -r '.[].id' | xargs shelf-rm

EXIT CODES:
    0 - All items removed
    1 - Error (network failure, server error, bad config)
"#)]
struct Args {
    /// Ids of the items to remove
    #[arg(required = true)]
    ids: Vec<i64>,

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

    for id in args.ids {
        store.delete(id).await?;
        println!("Deleted item {}", id);
    }

    Ok(())
}
