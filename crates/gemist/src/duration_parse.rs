// ABOUTME: Duration string parsing for broadcast lengths.
// ABOUTME: Parses `mm:ss` and `h:mm:ss` as rendered on audio pages and list thumbnails.

use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{GemistError, Result};

static DURATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d:)?(\d+):(\d+)").unwrap());

/// How the optional hour group of a duration contributes to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HourMode {
    /// `h:mm:ss` adds `h * 3600` seconds.
    #[default]
    Counted,
    /// The hour group is matched but never added, so `1:02:03` is 123 seconds.
    /// Reproduces the lengths the site scraper historically reported.
    Legacy,
}

/// Parses the first `(h:)?mm:ss` occurrence in `s`.
///
/// The match is unanchored, so surrounding text such as an icon label or a
/// trailing unit is ignored. Fails when no minute/second pair is present.
pub fn parse_duration(s: &str, mode: HourMode) -> Result<Duration> {
    let malformed = || GemistError::DurationParse(s.to_string());
    let caps = DURATION_RE.captures(s).ok_or_else(malformed)?;
    let number = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u64>().ok());

    let mut secs = number(2)
        .zip(number(3))
        .and_then(|(min, sec)| min.checked_mul(60)?.checked_add(sec))
        .ok_or_else(malformed)?;

    if let (Some(hours), HourMode::Counted) = (caps.get(1), mode) {
        let hours: u64 = hours
            .as_str()
            .trim_end_matches(':')
            .parse()
            .map_err(|_| malformed())?;
        secs = secs.checked_add(hours * 3600).ok_or_else(malformed)?;
    }

    Ok(Duration::from_secs(secs))
}
