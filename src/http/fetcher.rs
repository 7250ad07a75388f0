//! Authenticated page fetcher

use crate::auth::Signature;
use crate::config::{ClientConfig, Credentials};
use crate::error::{Error, Result};
use crate::types::{Query, Resource};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use std::collections::BTreeMap;
use std::sync::Arc;
use url::Url;

/// Source of raw page bytes for a resource query
///
/// The query already carries the pagination parameters; implementations
/// only add authentication and perform the transfer.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch one page, returning the complete response body
    async fn fetch_page(&self, resource: Resource, query: &Query) -> Result<Bytes>;
}

/// Page fetcher over `reqwest` that signs every request
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: Url,
    credentials: Arc<Credentials>,
}

impl HttpFetcher {
    /// Create a fetcher for the configured API root
    pub fn new(config: &ClientConfig, credentials: Arc<Credentials>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::config(format!("invalid API root '{}': {e}", config.base_url)))?;

        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            credentials,
        })
    }

    /// Credentials used for signing
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build the request URL for a page with the given signature
    ///
    /// Filter parameters are applied after the signature fields, so a filter
    /// with the same name replaces the signature value. Parameters are
    /// encoded in key order.
    pub fn page_url(&self, resource: Resource, query: &Query, signature: &Signature) -> Result<Url> {
        let root = self.base_url.as_str().trim_end_matches('/');
        let mut url = Url::parse(&format!("{root}/{}", resource.path()))?;

        let mut params: BTreeMap<&str, &str> = signature.query_pairs().into_iter().collect();
        params.extend(query.iter());

        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, resource: Resource, query: &Query) -> Result<Bytes> {
        let signature = Signature::generate(&self.credentials);
        let url = self.page_url(resource, query, &signature)?;

        let response = self.client.get(url).send().await?;
        Ok(response.bytes().await?)
    }
}
