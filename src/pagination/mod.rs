//! Pagination module
//!
//! Walks the API's offset/limit contract and republishes each page's records
//! as one flat, lazily produced stream.
//!
//! # Overview
//!
//! A [`Paginator`] spawns one producer task per stream. The producer fetches
//! pages strictly one after another, decodes each into an [`Envelope`] and
//! pushes the records of the requested [`Collection`] into a bounded channel
//! sized to one page, so it can never run more than about a page ahead of
//! the consumer.
//!
//! Streams end when the cursor passes the `totalCount` reported by the last
//! page, when a fetch or decode fails, or when the consumer cancels or drops
//! the [`RecordStream`]. Failures never appear as items; ask
//! [`RecordStream::finish`] for the [`Completion`] if the reason matters.

mod stream;
mod types;

pub use stream::{Completion, Paginator, RecordStream};
pub use types::{Areas, Collection, Cursor, Envelope, Listings, Sold, PAGE_SIZE};
