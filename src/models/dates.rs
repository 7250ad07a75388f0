//! Date scalars with fixed wire formats
//!
//! The API sends publication/change times as `YYYY-MM-DD HH:MM:SS` and sold
//! dates as `YYYY-MM-DD`. Both scalars parse strictly and reject anything
//! else with [`Error::DateParse`].

use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// `chrono` format of [`Timestamp`]
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `chrono` format of [`SoldDate`]
pub const SOLD_DATE_FORMAT: &str = "%Y-%m-%d";

const TIMESTAMP_LITERAL: &str = "YYYY-MM-DD HH:MM:SS";
const SOLD_DATE_LITERAL: &str = "YYYY-MM-DD";

// ============================================================================
// Timestamp
// ============================================================================

/// Publication or change time of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parse a `YYYY-MM-DD HH:MM:SS` literal
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|_| Error::date_parse(value, TIMESTAMP_LITERAL))
    }

    /// The underlying date-time
    pub fn as_datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// The calendar date part
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Sold Date
// ============================================================================

/// Date on which a property was sold
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SoldDate(NaiveDate);

impl SoldDate {
    /// Parse a `YYYY-MM-DD` literal
    pub fn parse(value: &str) -> Result<Self> {
        NaiveDate::parse_from_str(value, SOLD_DATE_FORMAT)
            .map(Self)
            .map_err(|_| Error::date_parse(value, SOLD_DATE_LITERAL))
    }

    /// The underlying date
    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for SoldDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl FromStr for SoldDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SoldDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SOLD_DATE_FORMAT))
    }
}

impl Serialize for SoldDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SoldDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
