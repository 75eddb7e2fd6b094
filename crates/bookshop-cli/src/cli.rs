use clap::{ArgGroup, Args, Parser, Subcommand};
use clap_complete::Shell;

use bookshop_core::VERSION;

/// Bookshop - inventory manager for a small bookshop
#[derive(Parser)]
#[command(name = "bookshop")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the database file
    #[arg(short, long, global = true, env = "BOOKSHOP_DB")]
    pub db: Option<String>,

    /// Path to the config file
    #[arg(long, global = true, env = "BOOKSHOP_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use ASCII borders and badges instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Book title
    #[arg(value_name = "TITLE")]
    pub title: String,

    /// Author name
    #[arg(value_name = "AUTHOR")]
    pub author: String,

    /// Number of copies in stock
    #[arg(value_name = "QUANTITY", allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the `quantity` command
#[derive(Args)]
pub struct QuantityArgs {
    /// Book ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New number of copies in stock
    #[arg(value_name = "QUANTITY", allow_negative_numbers = true)]
    pub quantity: i64,
}

/// Arguments for the `edit` command
#[derive(Args)]
#[command(group(ArgGroup::new("field").required(true).args(["title", "author"])))]
pub struct EditArgs {
    /// Book ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New author name
    #[arg(long)]
    pub author: Option<String>,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Book ID
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Free-text query matched against titles and authors
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Limit number of results
    #[arg(long)]
    pub limit: Option<usize>,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Add a new book
    Add(AddArgs),

    /// Change the quantity of a book
    Quantity(QuantityArgs),

    /// Edit the title or author of a book
    Edit(EditArgs),

    /// Delete a book
    Delete(DeleteArgs),

    /// Search books by title or author
    Search(SearchArgs),

    /// List all books
    List(ListArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}
