//! Domain records decoded from API pages
//!
//! # Overview
//!
//! - [`Property`] - a sold or listed unit (from `sold` and `listings`)
//! - [`Area`] - a named geographic region (from `areas`)
//! - [`Timestamp`] / [`SoldDate`] - strict date scalars used on the wire
//! - [`image_url`] - CDN image URL for a record id

mod dates;
mod image;
mod types;

pub use dates::{SoldDate, Timestamp, SOLD_DATE_FORMAT, TIMESTAMP_FORMAT};
pub use image::{image_url, ImageSize};
pub use types::{Address, Area, Location, Position, Property};
