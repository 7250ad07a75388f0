//! Booli API client
//!
//! Binds credentials and transport settings to a [`Paginator`] and exposes
//! one streaming operation per resource.

use crate::config::{ClientConfig, Credentials};
use crate::error::Result;
use crate::http::{HttpFetcher, PageFetcher};
use crate::models::{Area, Property};
use crate::pagination::{Areas, Collection, Listings, Paginator, RecordStream, Sold};
use crate::types::Query;
use std::sync::Arc;

/// Client for the sold, listings and areas resources
///
/// Cheap to clone. Streams created from the same client run independently
/// and share nothing but the read-only credentials.
#[derive(Debug, Clone)]
pub struct BooliClient {
    paginator: Paginator,
}

impl BooliClient {
    /// Create a client signing with `credentials`
    pub fn new(config: &ClientConfig, credentials: Credentials) -> Result<Self> {
        let fetcher = HttpFetcher::new(config, Arc::new(credentials))?;
        Ok(Self::with_fetcher(Arc::new(fetcher)))
    }

    /// Create a client from `BOOLI_CALLER_ID`, `BOOLI_PRIVATE_KEY` and
    /// optionally `BOOLI_API_URL`
    pub fn from_env() -> Result<Self> {
        let credentials = Credentials::from_env()?;
        Self::new(&ClientConfig::from_env(), credentials)
    }

    /// Create a client over any page fetcher
    pub fn with_fetcher(fetcher: Arc<dyn PageFetcher>) -> Self {
        Self {
            paginator: Paginator::new(fetcher),
        }
    }

    /// The underlying paginator
    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Stream sold properties matching `query`
    pub fn sold(&self, query: &Query) -> RecordStream<Property> {
        self.stream::<Sold>(query)
    }

    /// Stream properties for sale matching `query`
    pub fn listings(&self, query: &Query) -> RecordStream<Property> {
        self.stream::<Listings>(query)
    }

    /// Stream areas matching `query`
    pub fn areas(&self, query: &Query) -> RecordStream<Area> {
        self.stream::<Areas>(query)
    }

    /// Stream any collection matching `query`
    pub fn stream<C: Collection>(&self, query: &Query) -> RecordStream<C::Item> {
        self.paginator.stream::<C>(query)
    }
}
