//! Per-request signature generation

use crate::config::Credentials;
use chrono::Utc;
use rand::distr::Alphanumeric;
use rand::Rng;
use sha1::{Digest, Sha1};

/// Length of the `unique` nonce
pub const NONCE_LENGTH: usize = 16;

/// Authentication fields attached to one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Caller identifier (`callerId`)
    pub caller_id: String,
    /// Unix seconds (`time`)
    pub time: String,
    /// Nonce (`unique`)
    pub unique: String,
    /// Hex SHA-1 digest (`hash`)
    pub hash: String,
}

impl Signature {
    /// Sign with an explicit time and nonce
    pub fn new(credentials: &Credentials, time: impl Into<String>, unique: impl Into<String>) -> Self {
        let time = time.into();
        let unique = unique.into();

        let mut hasher = Sha1::new();
        hasher.update(credentials.caller_id().as_bytes());
        hasher.update(time.as_bytes());
        hasher.update(credentials.private_key().as_bytes());
        hasher.update(unique.as_bytes());
        let hash = hex::encode(hasher.finalize());

        Self {
            caller_id: credentials.caller_id().to_string(),
            time,
            unique,
            hash,
        }
    }

    /// Sign with the current time and a fresh nonce
    pub fn generate(credentials: &Credentials) -> Self {
        let time = Utc::now().timestamp().to_string();
        Self::new(credentials, time, generate_nonce())
    }

    /// Query pairs in the order they are sent
    pub fn query_pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("callerId", self.caller_id.as_str()),
            ("unique", self.unique.as_str()),
            ("hash", self.hash.as_str()),
            ("time", self.time.as_str()),
        ]
    }
}

/// Random alphanumeric nonce of [`NONCE_LENGTH`] characters
///
/// Only needs to be unique within the server's replay window.
pub fn generate_nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}
