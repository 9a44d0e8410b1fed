use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use larder::dates::{parse_date, Estimate};
use larder::model::{Category, ConfectionType, Location, Ripeness};

#[derive(Parser, Debug)]
#[command(name = "larder", bin_name = "larder", version)]
#[command(about = "Keep track of what is in the kitchen and when it goes off", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Accept every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an ingredient
    #[command(alias = "a", display_order = 1)]
    Add {
        /// Name words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,

        #[command(flatten)]
        details: Details,

        /// Ripeness (fresh items only)
        #[arg(long)]
        status: Option<Ripeness>,
    },

    /// List ingredients
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only items missing a category, location or expiration date
        #[arg(long, conflicts_with = "recent")]
        missing: bool,

        /// Only the most recently added items
        #[arg(long)]
        recent: bool,

        #[arg(long)]
        category: Option<Category>,

        #[arg(long)]
        location: Option<Location>,

        #[arg(long = "type", value_name = "TYPE")]
        confection: Option<ConfectionType>,
    },

    /// Items expiring soon, soonest first
    #[command(alias = "x", display_order = 3)]
    Expiring,

    /// Show one or more ingredients in full
    #[command(alias = "v", display_order = 10)]
    Show {
        /// Indexes of the ingredients (e.g. 1 3)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Edit an ingredient
    #[command(alias = "e", display_order = 11)]
    Edit {
        /// Index of the ingredient
        index: String,

        #[arg(long)]
        name: Option<String>,

        #[command(flatten)]
        details: Details,

        /// New ripeness (fresh items only)
        #[arg(long)]
        status: Option<Ripeness>,

        /// Mark the item as opened
        #[arg(long, conflicts_with = "closed")]
        opened: bool,

        /// Mark the item as not opened
        #[arg(long)]
        closed: bool,

        /// Record that the ripeness was checked just now
        #[arg(long)]
        check: bool,
    },

    /// Delete one or more ingredients
    #[command(alias = "rm", display_order = 12)]
    Delete {
        /// Indexes of the ingredients (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Add a scanned product; reads the product lookup response on stdin
    #[command(display_order = 20)]
    Scan {
        /// The scanned barcode
        code: String,
    },

    /// Get or set configuration
    #[command(display_order = 30)]
    Config {
        /// Configuration key (e.g., expiring-threshold)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Fields shared by `add` and `edit`.
#[derive(Args, Debug, Default)]
pub struct Details {
    #[arg(long)]
    pub brand: Option<String>,

    #[arg(long)]
    pub category: Option<Category>,

    #[arg(long)]
    pub location: Option<Location>,

    #[arg(long = "type", value_name = "TYPE")]
    pub confection: Option<ConfectionType>,

    /// Expiration date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date_arg, conflicts_with = "estimate")]
    pub expires: Option<NaiveDate>,

    /// Estimated shelf life: "2 days", "1 week", "10 days" or "1 month"
    #[arg(long)]
    pub estimate: Option<Estimate>,
}

fn parse_date_arg(input: &str) -> Result<NaiveDate, String> {
    parse_date(input).ok_or_else(|| format!("'{}' is not a YYYY-MM-DD date", input))
}
