//! Common types used throughout the client
//!
//! Resources exposed by the API and the filter query sent with each request.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;

/// Query parameter date format (`YYYYMMDD`)
pub const QUERY_DATE_FORMAT: &str = "%Y%m%d";

// ============================================================================
// Resources
// ============================================================================

/// API resource collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Sold properties
    Sold,
    /// Properties currently for sale
    Listings,
    /// Named geographic areas
    Areas,
}

impl Resource {
    /// Path segment under the API root
    pub fn path(self) -> &'static str {
        match self {
            Resource::Sold => "sold",
            Resource::Listings => "listings",
            Resource::Areas => "areas",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

// ============================================================================
// Query
// ============================================================================

/// Filter parameters for a resource request
///
/// Keys are unique and ordering is irrelevant. Streams copy the query for
/// every page, so a caller's query is never modified by pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: HashMap<String, String>,
}

impl Query {
    /// Create an empty query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an arbitrary parameter
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Free-text search (`q`)
    #[must_use]
    pub fn q(self, text: impl Into<String>) -> Self {
        self.with("q", text)
    }

    /// Restrict to one or more area ids (`areaId`)
    #[must_use]
    pub fn area_ids<I>(self, ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let joined = ids
            .into_iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.with("areaId", joined)
    }

    /// Restrict to an object type such as `Villa` (`objectType`)
    #[must_use]
    pub fn object_type(self, object_type: impl Into<String>) -> Self {
        self.with("objectType", object_type)
    }

    /// Earliest sold date (`minSoldDate`)
    #[must_use]
    pub fn min_sold_date(self, date: NaiveDate) -> Self {
        self.with("minSoldDate", date.format(QUERY_DATE_FORMAT).to_string())
    }

    /// Latest sold date (`maxSoldDate`)
    #[must_use]
    pub fn max_sold_date(self, date: NaiveDate) -> Self {
        self.with("maxSoldDate", date.format(QUERY_DATE_FORMAT).to_string())
    }

    /// Only new construction projects (`isNewConstruction`)
    #[must_use]
    pub fn new_construction(self) -> Self {
        self.with("isNewConstruction", "1")
    }

    /// Insert or replace a parameter
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    /// Look up a parameter
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Remove a parameter
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the query has no parameters
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over parameters
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
