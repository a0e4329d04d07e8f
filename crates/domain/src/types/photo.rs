//! Photo entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoSize {
    pub width: u32,
    pub height: u32,
}

impl PhotoSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Height divided by width, `None` for a zero width.
    pub fn aspect_ratio(&self) -> Option<f64> {
        if self.width == 0 {
            None
        } else {
            Some(f64::from(self.height) / f64::from(self.width))
        }
    }
}

/// One remote image as shown in the feed.
///
/// `id` is unique within a photo list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub size: PhotoSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    pub thumb_url: String,
    pub large_url: String,
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
