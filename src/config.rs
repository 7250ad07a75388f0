//! Client configuration
//!
//! Credentials are read once at startup and shared read-only by every
//! fetcher and stream built from them.

use crate::error::{Error, Result};
use std::fmt;
use std::time::Duration;

/// Environment variable holding the caller identifier
pub const CALLER_ID_VAR: &str = "BOOLI_CALLER_ID";

/// Environment variable holding the private signing key
pub const PRIVATE_KEY_VAR: &str = "BOOLI_PRIVATE_KEY";

/// Environment variable overriding the API root
pub const API_URL_VAR: &str = "BOOLI_API_URL";

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.booli.se";

// ============================================================================
// Credentials
// ============================================================================

/// Caller ID and private key used to sign every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    caller_id: String,
    private_key: String,
}

impl Credentials {
    /// Create credentials from explicit values
    pub fn new(caller_id: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            caller_id: caller_id.into(),
            private_key: private_key.into(),
        }
    }

    /// Load credentials from `BOOLI_CALLER_ID` and `BOOLI_PRIVATE_KEY`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load credentials through an arbitrary variable lookup
    ///
    /// Unset and empty variables are both treated as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| Error::missing_credential(var))
        };

        Ok(Self {
            caller_id: read(CALLER_ID_VAR)?,
            private_key: read(PRIVATE_KEY_VAR)?,
        })
    }

    /// The caller identifier
    pub fn caller_id(&self) -> &str {
        &self.caller_id
    }

    /// The private signing key
    pub fn private_key(&self) -> &str {
        &self.private_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("caller_id", &self.caller_id)
            .field("private_key", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Client Config
// ============================================================================

/// Configuration for the HTTP transport
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without trailing slash
    pub base_url: String,
    /// Optional transport timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// User agent string
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("booli-rs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Default config with the API root taken from `BOOLI_API_URL` when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = std::env::var(API_URL_VAR).ok().filter(|u| !u.is_empty()) {
            config.base_url = url.trim_end_matches('/').to_string();
        }
        config
    }
}

/// Builder for client config
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the API root
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set a transport timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> ClientConfig {
        self.config
    }
}
