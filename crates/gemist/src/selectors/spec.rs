// ABOUTME: Serializable selector table describing where each field lives in the site's markup.
// ABOUTME: Defines SelectorSpec, FieldSpec and the per-page-shape tables loaded from JSON.

//! Selector table definitions.
//!
//! The table is plain data: CSS selectors and attribute names per field, in
//! the order they should be tried. It is validated and compiled once by
//! [`SelectorTable::compile`](crate::selectors::SelectorTable::compile).

use serde::{Deserialize, Serialize};

/// Specifies how to read one value from the DOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectorSpec {
    /// A CSS selector whose first direct text child is read, e.g. "span.duration"
    Text(String),
    /// A CSS selector with the attribute to read, e.g. ["meta[name='og:url']", "content"]
    Attr(Vec<String>),
}

impl SelectorSpec {
    /// Shorthand for an attribute selector.
    pub fn attr(css: impl Into<String>, attr: impl Into<String>) -> Self {
        SelectorSpec::Attr(vec![css.into(), attr.into()])
    }
}

/// Ordered candidate selectors for a single field; the first one yielding a value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    #[serde(default)]
    pub selectors: Vec<SelectorSpec>,
}

impl FieldSpec {
    pub fn new(selectors: Vec<SelectorSpec>) -> Self {
        Self { selectors }
    }
}

/// Fields shared by every page shape, read from page-level metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItemTable {
    pub title: FieldSpec,
    pub description: FieldSpec,
    pub url: FieldSpec,
    /// Every match of the winning selector is kept.
    pub images: FieldSpec,
}

/// Length and stream URL locations for one media kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTable {
    pub length: FieldSpec,
    pub media_url: FieldSpec,
}

/// Broadcast page fields beyond the shared media item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastTable {
    pub media_type: FieldSpec,
    /// Tried in order to cover the alternate page skins.
    pub long_description: FieldSpec,
    pub date: FieldSpec,
    /// Token prefix that selects the audio strategy.
    pub audio_prefix: String,
    /// Token prefix that selects the video strategy.
    pub video_prefix: String,
    pub audio: MediaTable,
    pub video: MediaTable,
}

/// Fields of one broadcast list item, relative to the item element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItemTable {
    pub title: FieldSpec,
    pub description: FieldSpec,
    pub image: FieldSpec,
    pub url: FieldSpec,
    pub info: FieldSpec,
    pub length: FieldSpec,
}

/// Programme page broadcast list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramTable {
    /// CSS selector for the list container; the first match is used.
    pub list: String,
    /// Attribute on the container holding the declared item count.
    pub count_attribute: String,
    /// Tag name of the container's direct children that are list items.
    pub item_tag: String,
    /// Delimiter between sub title, date and coarse length in the info line.
    pub info_separator: String,
    pub item: ListItemTable,
}

/// The complete selector table for one site layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorTable {
    /// Base used to make list item links absolute.
    pub base_url: String,
    pub media_item: MediaItemTable,
    pub broadcast: BroadcastTable,
    pub program: ProgramTable,
}
