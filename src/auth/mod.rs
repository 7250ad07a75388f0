//! Request signing
//!
//! Every API request carries four query fields proving knowledge of the
//! private key without sending it:
//!
//! - `callerId` - the public caller identifier
//! - `time` - Unix time in seconds
//! - `unique` - a 16 character alphanumeric nonce
//! - `hash` - lowercase hex SHA-1 of `callerId || time || privateKey || unique`
//!
//! A fresh [`Signature`] is generated for each page request.

mod signature;

pub use signature::{generate_nonce, Signature, NONCE_LENGTH};
