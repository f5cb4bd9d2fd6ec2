// ABOUTME: Date parsing for broadcast pages and broadcast list items.
// ABOUTME: Handles the fixed numeric-offset layout and the Dutch-abbreviated localized layout.

use aho_corasick::{AhoCorasick, MatchKind};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Weekday};
use chrono_tz::Tz;
use once_cell::sync::Lazy;

use crate::error::{DateContext, GemistError, Result};

/// Layout of the `startDate` span: "2007-03-18 20:35:00 +0100".
pub const BROADCAST_DATE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Layout of a localized date once translated: "Sat 6 Oct 2007 18:32".
pub const LOCAL_DATE_LAYOUT: &str = "%a %e %b %Y %H:%M";

/// `LOCAL_DATE_LAYOUT` without the weekday, which is checked separately.
const LOCAL_DATE_BODY_LAYOUT: &str = "%e %b %Y %H:%M";

/// Dutch weekday and month abbreviations with their English counterparts.
const DUTCH_TO_ENGLISH: &[(&str, &str)] = &[
    ("Ma", "Mon"),
    ("Di", "Tue"),
    ("Wo", "Wed"),
    ("Do", "Thu"),
    ("Vr", "Fri"),
    ("Za", "Sat"),
    ("Zo", "Sun"),
    ("jan", "Jan"),
    ("feb", "Feb"),
    ("mrt", "Mar"),
    ("apr", "Apr"),
    ("mei", "May"),
    ("jun", "Jun"),
    ("jul", "Jul"),
    ("aug", "Aug"),
    ("sep", "Sep"),
    ("okt", "Oct"),
    ("nov", "Nov"),
    ("dec", "Dec"),
];

static DUTCH_MATCHER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(DUTCH_TO_ENGLISH.iter().map(|(nl, _)| *nl))
        .unwrap()
});

static ENGLISH_REPLACEMENTS: Lazy<Vec<&'static str>> =
    Lazy::new(|| DUTCH_TO_ENGLISH.iter().map(|(_, en)| *en).collect());

/// Rewrites Dutch weekday and month abbreviations to English in a single pass.
///
/// Replaced text is never rescanned, so "mrt" becomes "Mar" and stays that way.
pub fn translate_dutch_date(s: &str) -> String {
    DUTCH_MATCHER.replace_all(s, ENGLISH_REPLACEMENTS.as_slice())
}

/// Parses a fixed-layout broadcast date with its numeric UTC offset.
pub fn parse_broadcast_date(s: &str, context: DateContext) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s.trim(), BROADCAST_DATE_LAYOUT)
        .map_err(|_| GemistError::date(context, s))
}

/// Parses a localized date such as "Za 6 okt 2007 18:32" as wall-clock time in `tz`.
///
/// The weekday must be a known abbreviation but is not checked against the
/// date; the site sometimes labels a broadcast with the wrong day.
/// Ambiguous wall-clock times (the repeated hour when DST ends) resolve to the
/// earlier instant; times inside the DST gap fail.
pub fn parse_local_date(s: &str, tz: Tz, context: DateContext) -> Result<DateTime<FixedOffset>> {
    let malformed = || GemistError::date(context, s);
    let translated = translate_dutch_date(s.trim());
    let (weekday, body) = translated.split_once(' ').ok_or_else(malformed)?;
    weekday.parse::<Weekday>().map_err(|_| malformed())?;
    let naive = NaiveDateTime::parse_from_str(body.trim_start(), LOCAL_DATE_BODY_LAYOUT)
        .map_err(|_| malformed())?;

    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(malformed)
}
