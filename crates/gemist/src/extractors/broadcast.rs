// ABOUTME: Broadcast page extraction with type-dependent field strategies.
// ABOUTME: MediaStrategy selects the audio or video way of reading date, length and media URL.

use std::time::Duration;

use chrono::{DateTime, FixedOffset};
use chrono_tz::Tz;
use scraper::ElementRef;
use url::Url;

use crate::duration_parse::{parse_duration, HourMode};
use crate::error::{DateContext, GemistError, Result};
use crate::extractors::media_item::extract_media_item;
use crate::models::{Broadcast, MediaKind};
use crate::options::Options;
use crate::selectors::compiled::{BroadcastSelectors, MediaSelectors};
use crate::selectors::Selectors;
use crate::time_parse::{parse_broadcast_date, parse_local_date};

/// Field strategy chosen from the page's type token.
#[derive(Debug, Clone, Copy)]
pub enum MediaStrategy<'s> {
    /// Length is whole seconds in page metadata; date uses the fixed layout.
    Video(&'s MediaSelectors),
    /// Length is `mm:ss` text on the page; date may also be localized.
    Audio(&'s MediaSelectors),
}

impl<'s> MediaStrategy<'s> {
    /// Picks the strategy whose prefix the token starts with.
    pub fn resolve(token: &str, sel: &'s BroadcastSelectors) -> Result<Self> {
        if token.starts_with(&sel.audio_prefix) {
            Ok(MediaStrategy::Audio(&sel.audio))
        } else if token.starts_with(&sel.video_prefix) {
            Ok(MediaStrategy::Video(&sel.video))
        } else {
            Err(GemistError::UnknownType(token.to_string()))
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            MediaStrategy::Video(_) => MediaKind::Video,
            MediaStrategy::Audio(_) => MediaKind::Audio,
        }
    }

    fn fields(&self) -> &'s MediaSelectors {
        match *self {
            MediaStrategy::Video(s) | MediaStrategy::Audio(s) => s,
        }
    }

    pub fn length(&self, root: ElementRef<'_>, mode: HourMode) -> Result<Duration> {
        let kind = self.kind();
        let raw = self
            .fields()
            .length
            .first(root)
            .ok_or(GemistError::LengthParse(kind))?;

        match self {
            MediaStrategy::Video(_) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| GemistError::LengthParse(kind)),
            MediaStrategy::Audio(_) => parse_duration(&raw, mode),
        }
    }

    /// Reads the stream URL, which must be absolute.
    pub fn media_url(&self, root: ElementRef<'_>) -> Result<String> {
        let kind = self.kind();
        let raw = self
            .fields()
            .media_url
            .first(root)
            .ok_or(GemistError::MediaUrlParse(kind))?;
        Url::parse(&raw).map_err(|_| GemistError::MediaUrlParse(kind))?;
        Ok(raw)
    }

    pub fn date(&self, raw: &str, tz: Tz) -> Result<DateTime<FixedOffset>> {
        match self {
            MediaStrategy::Video(_) => parse_broadcast_date(raw, DateContext::Video),
            MediaStrategy::Audio(_) => parse_broadcast_date(raw, DateContext::Audio)
                .or_else(|_| parse_local_date(raw, tz, DateContext::Audio)),
        }
    }
}

/// Extracts a complete broadcast from a broadcast page.
pub fn extract_broadcast(root: ElementRef<'_>, sel: &Selectors, opts: &Options) -> Result<Broadcast> {
    let item = extract_media_item(root, &sel.media_item)?;
    let bsel = &sel.broadcast;

    let long_description = bsel
        .long_description
        .first(root)
        .ok_or(GemistError::MissingField("long description"))?;

    let token = bsel
        .media_type
        .first(root)
        .ok_or(GemistError::MissingField("type"))?;
    let strategy = MediaStrategy::resolve(&token, bsel)?;

    let raw_date = bsel
        .date
        .first(root)
        .ok_or(GemistError::MissingField("date"))?;
    let date = strategy.date(&raw_date, opts.timezone)?;

    let length = strategy.length(root, opts.hour_mode)?;
    let media_url = strategy.media_url(root)?;

    Ok(Broadcast {
        item,
        long_description,
        date,
        length,
        kind: strategy.kind(),
        media_url,
    })
}
