//! Property and area records
//!
//! Field names follow the API's camelCase JSON. Everything except the
//! server-assigned `booliId` is optional, since sold and listed properties
//! carry different subsets.

use super::dates::{SoldDate, Timestamp};
use super::image::{image_url, ImageSize};
use serde::{Deserialize, Serialize};
use std::fmt;

/// WGS84 coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

/// Street address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
}

/// Where a property is
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default)]
    pub named_areas: Vec<String>,
    #[serde(default)]
    pub address: Address,
}

/// A sold or listed property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub booli_id: u64,
    #[serde(default)]
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sold_date: Option<SoldDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub living_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub construction_year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new_construction: Option<bool>,
}

impl Property {
    /// Primary image on the CDN
    pub fn image_url(&self, size: Option<ImageSize>) -> String {
        image_url(self.booli_id, size)
    }

    /// Street address, if the API sent one
    pub fn street_address(&self) -> Option<&str> {
        self.location.address.street_address.as_deref()
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.booli_id)?;
        if let Some(address) = self.street_address() {
            write!(f, ", {address}")?;
        }
        if let Some(object_type) = &self.object_type {
            write!(f, ", {object_type}")?;
        }
        match (self.sold_price, self.sold_date, self.list_price) {
            (Some(price), Some(date), _) => write!(f, ", sold {price} kr on {date}"),
            (Some(price), None, _) => write!(f, ", sold {price} kr"),
            (None, _, Some(price)) => write!(f, ", listed {price} kr"),
            _ => Ok(()),
        }
    }
}

/// A named geographic area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub booli_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_booli_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
    #[serde(default)]
    pub parent_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .full_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or("<unnamed>");
        write!(f, "{} {name}", self.booli_id)?;
        if !self.types.is_empty() {
            write!(f, " ({})", self.types.join(", "))?;
        }
        Ok(())
    }
}
