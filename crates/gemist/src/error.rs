// ABOUTME: Error types for page extraction operations.
// ABOUTME: Provides the GemistError enum covering missing fields, format errors and list failures.

use std::fmt;
use thiserror::Error;

use crate::models::MediaKind;

/// Which date grammar was being applied when a date failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateContext {
    /// Fixed `YYYY-MM-DD HH:MM:SS ±HHMM` layout on video pages.
    Video,
    /// Audio pages (fixed layout, then the localized layout).
    Audio,
    /// Localized date inside a broadcast list item's info line.
    List,
}

impl fmt::Display for DateContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DateContext::Video => "video",
            DateContext::Audio => "audio",
            DateContext::List => "list",
        };
        write!(f, "{}", s)
    }
}

/// Errors that can occur while extracting records from a page.
#[derive(Debug, Error)]
pub enum GemistError {
    /// Reading the page from its byte source failed.
    #[error("gemist: failed to read page: {0}")]
    Io(#[from] std::io::Error),

    /// The page bytes are not valid UTF-8.
    #[error("gemist: page is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// A selector table could not be compiled.
    #[error("gemist: invalid selector table: {0}")]
    Selector(String),

    /// A mandatory selector matched nothing.
    #[error("gemist: error parsing {0}")]
    MissingField(&'static str),

    /// The page type token has neither the audio nor the video prefix.
    #[error("gemist: unknown broadcast type {0:?}")]
    UnknownType(String),

    /// The broadcast length was absent or malformed.
    #[error("gemist: error parsing broadcast length ({0})")]
    LengthParse(MediaKind),

    /// The broadcast media URL was absent or not an absolute URL.
    #[error("gemist: error parsing broadcast media URL ({0})")]
    MediaUrlParse(MediaKind),

    /// A `mm:ss` / `h:mm:ss` string did not match the duration grammar.
    #[error("gemist: error parsing duration {0:?}")]
    DurationParse(String),

    /// A date string did not match its layout.
    #[error("gemist: error parsing {context} date {input:?}")]
    DateParse { context: DateContext, input: String },

    /// The declared item count of a broadcast list is missing or not a number.
    #[error("gemist: error parsing program list length {0:?}")]
    ListCount(String),

    /// A list item's info line could not be split into its parts.
    #[error("gemist: error parsing program list info {0:?}")]
    InfoLine(String),

    /// A relative link could not be made absolute.
    #[error("gemist: invalid URL {0:?}")]
    InvalidUrl(String),

    /// A broadcast list item failed to extract (strict list policy only).
    #[error("gemist: program list item {index}: {source}")]
    Item {
        index: usize,
        #[source]
        source: Box<GemistError>,
    },

    /// Fetching a page over HTTP failed.
    #[cfg(feature = "fetch")]
    #[error("gemist: failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl GemistError {
    /// Creates a DateParse error for the given grammar and raw input.
    pub fn date(context: DateContext, input: impl Into<String>) -> Self {
        GemistError::DateParse {
            context,
            input: input.into(),
        }
    }

    /// Wraps a per-item failure with the item's position in the list.
    pub fn item(index: usize, source: GemistError) -> Self {
        GemistError::Item {
            index,
            source: Box::new(source),
        }
    }

    /// Returns the field name if this is a MissingField error.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            GemistError::MissingField(field) => Some(field),
            _ => None,
        }
    }

    /// Returns true if a date or duration string failed its grammar.
    pub fn is_format(&self) -> bool {
        matches!(
            self,
            GemistError::DateParse { .. } | GemistError::DurationParse(_)
        )
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GemistError>;
