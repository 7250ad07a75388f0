//! HTTP module
//!
//! Fetches single pages of raw response bytes. A fetch is one signed GET:
//! no retries, no caching, and no interpretation of the status code. Whether
//! the body is usable is decided by the pagination layer when it decodes it.

mod fetcher;

pub use fetcher::{HttpFetcher, PageFetcher};

#[cfg(test)]
mod tests;
