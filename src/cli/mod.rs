//! CLI module
//!
//! Command-line interface that streams records to stdout.
//!
//! # Commands
//!
//! - `sold` - Stream sold properties
//! - `listings` - Stream properties for sale
//! - `areas` - Stream named areas

mod commands;
mod runner;

pub use commands::{Cli, Commands, FilterArgs, OutputFormat};
pub use runner::Runner;
