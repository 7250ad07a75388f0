//! Pagination types
//!
//! Page envelope, cursor and the collection markers that tie a resource to
//! the envelope field holding its records.

use crate::models::{Area, Property};
use crate::types::{Query, Resource};
use serde::Deserialize;

/// Records requested per page
pub const PAGE_SIZE: u32 = 100;

// ============================================================================
// Envelope
// ============================================================================

/// Decoded body of one page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    /// Records in this page
    pub count: u32,
    /// Records in the full result set when this page was served
    pub total_count: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub sold: Vec<Property>,
    #[serde(default)]
    pub listings: Vec<Property>,
    #[serde(default)]
    pub areas: Vec<Area>,
}

impl Envelope {
    /// Decode a raw page body
    pub fn from_slice(body: &[u8]) -> crate::Result<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

// ============================================================================
// Collections
// ============================================================================

/// A resource together with the envelope field it is read from
///
/// Records in the other two fields are ignored even when present.
pub trait Collection: Send + 'static {
    /// Record type yielded by the stream
    type Item: Send + 'static;

    /// Resource requested for this collection
    const RESOURCE: Resource;

    /// Take this collection's records out of a page
    fn select(envelope: Envelope) -> Vec<Self::Item>;
}

/// Sold properties
#[derive(Debug, Clone, Copy)]
pub struct Sold;

/// Properties for sale
#[derive(Debug, Clone, Copy)]
pub struct Listings;

/// Geographic areas
#[derive(Debug, Clone, Copy)]
pub struct Areas;

impl Collection for Sold {
    type Item = Property;
    const RESOURCE: Resource = Resource::Sold;

    fn select(envelope: Envelope) -> Vec<Property> {
        envelope.sold
    }
}

impl Collection for Listings {
    type Item = Property;
    const RESOURCE: Resource = Resource::Listings;

    fn select(envelope: Envelope) -> Vec<Property> {
        envelope.listings
    }
}

impl Collection for Areas {
    type Item = Area;
    const RESOURCE: Resource = Resource::Areas;

    fn select(envelope: Envelope) -> Vec<Area> {
        envelope.areas
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Offset/limit progress of one stream
///
/// The offset is wider than any reported total so advancing past
/// `u32::MAX` still ends the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub offset: u64,
    pub limit: u32,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Cursor {
    /// Cursor at offset zero
    pub fn new(limit: u32) -> Self {
        Self { offset: 0, limit }
    }

    /// Copy of `filters` with this cursor's `limit` and `offset` applied
    pub fn page_query(&self, filters: &Query) -> Query {
        let mut query = filters.clone();
        query.set("limit", self.limit.to_string());
        query.set("offset", self.offset.to_string());
        query
    }

    /// Move to the next page
    pub fn advance(&mut self) {
        self.offset += u64::from(self.limit);
    }

    /// Whether the cursor has moved past the reported total
    pub fn is_past(&self, total_count: u32) -> bool {
        self.offset > u64::from(total_count)
    }
}
