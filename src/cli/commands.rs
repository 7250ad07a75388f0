//! CLI commands and argument parsing

use crate::types::Query;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Stream records from the Booli API
#[derive(Parser, Debug)]
#[command(name = "booli")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Stop after this many records
    #[arg(short = 'n', long, global = true)]
    pub max_records: Option<usize>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stream sold properties
    Sold {
        #[command(flatten)]
        filters: FilterArgs,

        /// Earliest sold date (YYYY-MM-DD)
        #[arg(long)]
        min_sold_date: Option<NaiveDate>,

        /// Latest sold date (YYYY-MM-DD)
        #[arg(long)]
        max_sold_date: Option<NaiveDate>,
    },

    /// Stream properties for sale
    Listings {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Stream named areas
    Areas {
        /// Free-text search
        #[arg(short, long)]
        q: Option<String>,
    },
}

/// Filters shared by the property commands
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search
    #[arg(short, long)]
    pub q: Option<String>,

    /// Area ids (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub area_id: Vec<u64>,

    /// Object type, e.g. Villa or Lägenhet
    #[arg(long)]
    pub object_type: Option<String>,

    /// Only new construction projects
    #[arg(long)]
    pub newbuilds: bool,
}

impl FilterArgs {
    /// Build the API query for these filters
    pub fn to_query(&self) -> Query {
        let mut query = Query::new();
        if let Some(q) = &self.q {
            query = query.q(q);
        }
        if !self.area_id.is_empty() {
            query = query.area_ids(self.area_id.iter().copied());
        }
        if let Some(object_type) = &self.object_type {
            query = query.object_type(object_type);
        }
        if self.newbuilds {
            query = query.new_construction();
        }
        query
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one record per line)
    Json,
    /// Human-readable output
    Pretty,
}
