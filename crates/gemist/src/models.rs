// ABOUTME: Record types produced by page extraction.
// ABOUTME: MediaItem is shared by Broadcast, BroadcastProxy and Program through composition.

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Fields every page shape carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    pub title: String,
    pub description: String,
    /// Image URLs in document order; empty when the page declares none.
    pub image_urls: Vec<String>,
    pub url: String,
}

/// The media type of a broadcast page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
        };
        write!(f, "{}", s)
    }
}

/// A single broadcast page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Broadcast {
    #[serde(flatten)]
    pub item: MediaItem,
    pub long_description: String,
    pub date: DateTime<FixedOffset>,
    pub length: Duration,
    pub kind: MediaKind,
    /// Absolute URL of the audio or video stream.
    pub media_url: String,
}

/// Summary of a broadcast as rendered in a programme's broadcast list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastProxy {
    #[serde(flatten)]
    pub item: MediaItem,
    pub sub_title: String,
    pub date: DateTime<FixedOffset>,
    pub length: Duration,
}

/// A programme page with its most recent broadcasts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    #[serde(flatten)]
    pub item: MediaItem,
    /// Broadcasts in document order (most recent first).
    pub broadcasts: Vec<BroadcastProxy>,
}
