//! Image URLs on the Booli CDN

/// Requested image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for ImageSize {
    /// Thumbnail size served when none is requested
    fn default() -> Self {
        Self {
            width: 140,
            height: 94,
        }
    }
}

/// Build the primary image URL for a record
pub fn image_url(booli_id: u64, size: Option<ImageSize>) -> String {
    let ImageSize { width, height } = size.unwrap_or_default();
    format!("https://bcdn.se/cache/primary_{booli_id}_{width}x{height}.jpg")
}
