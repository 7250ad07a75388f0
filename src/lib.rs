// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]

//! # Booli
//!
//! Streaming client for the Booli real-estate API.
//!
//! ## Features
//!
//! - **Signed Requests**: Every page request carries a fresh SHA-1 signature
//! - **Lazy Pagination**: Offset/limit pages flattened into one record stream
//! - **Backpressure**: At most about one page buffered ahead of the consumer
//! - **Typed Records**: Properties, areas and strict date scalars
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use booli::{BooliClient, Query, Result};
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     // Reads BOOLI_CALLER_ID and BOOLI_PRIVATE_KEY
//!     let client = BooliClient::from_env()?;
//!
//!     let mut sold = client.sold(&Query::new().q("Tygelsjö").object_type("Villa"));
//!     while let Some(property) = sold.next().await {
//!         println!("{property}");
//!     }
//!
//!     // Learn why the stream ended
//!     let completion = sold.finish().await;
//!     if let Some(error) = completion.error() {
//!         eprintln!("stopped early: {error}");
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ BooliClient   sold() listings() areas()      │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────────────┴───────────────────────┐
//! │ Paginator → producer task → bounded channel  │
//! │            → RecordStream<T>                 │
//! └──────────────────────┬───────────────────────┘
//!                        │
//! ┌──────────────┬───────┴──────┬────────────────┐
//! │    Auth      │    HTTP      │    Models      │
//! ├──────────────┼──────────────┼────────────────┤
//! │ Signature    │ HttpFetcher  │ Property, Area │
//! │ Nonce        │ PageFetcher  │ Dates, Images  │
//! └──────────────┴──────────────┴────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Resources and queries
pub mod types;

/// Credentials and transport configuration
pub mod config;

/// Request signing
pub mod auth;

/// Authenticated page fetching
pub mod http;

/// Domain records
pub mod models;

/// Lazy pagination over pages
pub mod pagination;

/// Client facade
pub mod client;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::BooliClient;
pub use config::{ClientConfig, Credentials};
pub use error::{Error, Result};
pub use models::{image_url, Area, ImageSize, Property, SoldDate, Timestamp};
pub use pagination::{Completion, RecordStream};
pub use types::{Query, Resource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
