//! shelf-new - Create an item on the board

use std::io::Read;
use std::sync::Arc;

use clap::Parser;

use libshelf::remote::http::HttpRemote;
use libshelf::validation::validate_draft;
use libshelf::{Config, ItemDraft, ItemStore, Result, ShelfError};

#[derive(Parser, Debug)]
#[command(name = "shelf-new")]
#[command(version, about = "Create an item on the board")]
#[command(long_about = r#"Create an item on the board.

The title must not collide with an existing item's title; collisions are
rejected locally before any request is made.

EXAMPLES:
    # Create an item with an inline body
    shelf-new "Grocery list" --body "milk, eggs, bread"

    # Read the body from stdin
    echo "milk, eggs, bread" | shelf-new "Grocery list"
    shelf-new "Meeting notes" < notes.txt

    # Create for a specific owner
    shelf-new "Team retro" --body "went well / to improve" --user-id 4

    # JSON output for scripting
    shelf-new "Grocery list" --body "milk" --format json | jq .id

EXIT CODES:
    0 - Item created
    1 - Error (network failure, server error, bad config)
    3 - Invalid input (empty title/body, duplicate title)
"#)]
struct Args {
    /// Title of the new item
    title: String,

    /// Body text (reads from stdin if not provided)
    #[arg(short, long, value_name = "TEXT")]
    body: Option<String>,

    /// Owner id (defaults to the configured one)
    #[arg(long, value_name = "ID")]
    user_id: Option<i64>,

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
    let body = match args.body {
        Some(body) => body,
        None => read_stdin()?,
    };

    let validation = validate_draft(&args.title, &body);
    if !validation.is_valid() {
        return Err(ShelfError::InvalidInput(validation.messages().join("; ")));
    }

    let config = Config::load()?;
    let remote = HttpRemote::from_config(&config.api)?;
    let store = ItemStore::new(Arc::new(remote));

    // Load the collection first so the duplicate-title check sees the board
    store.fetch_all().await?;

    let user_id = args.user_id.unwrap_or(config.defaults.user_id);
    let created = store.create(ItemDraft::new(args.title, body, user_id)).await?;

    match args.format.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&created)
                .map_err(|e| ShelfError::InvalidInput(format!("Failed to encode JSON: {}", e)))?;
            println!("{}", json);
        }
        _ => println!("Created item {} ({})", created.id, created.title),
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ShelfError::InvalidInput(format!("Failed to read body from stdin: {}", e)))?;
    Ok(buffer.trim_end_matches('\n').to_string())
}
