// ABOUTME: Integration tests for broadcast page parsing across the audio, video and NPO 3 layouts.
// ABOUTME: Also checks failure modes that must reject the whole page and the hour-group modes.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeZone};
use chrono_tz::Europe::Amsterdam;
use gemist::{Broadcast, GemistError, HourMode, MediaKind, Parser};
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/html")
        .join(name)
}

fn load(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture")
}

fn parse_fixture(name: &str) -> Broadcast {
    let file = File::open(fixture_path(name)).expect("fixture");
    gemist::parse_broadcast(file).expect("broadcast page parses")
}

fn offset(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

#[test]
fn audio_broadcast() {
    let b = parse_fixture("broadcast-audio.html");

    assert_eq!(b.item.title, "Radio Bergeijk");
    assert_eq!(
        b.item.url,
        "http://www.npo.nl/radio-bergeijk/03-04-2001/POMS_VPRO_396139"
    );
    assert_eq!(
        b.item.image_urls,
        vec!["http://images.poms.omroep.nl/image/215303.png"]
    );
    assert!(b
        .item
        .description
        .starts_with("Met in de eerste nationale aflevering voor de regio Bergeijk ooit:\nDe rubriek"));
    assert_eq!(
        b.long_description,
        " NieuwsWeerVerkeer: o.a. tarieven varkensbelasting\n\
         Mestberichten: De Giertijden\n\
         Studiogast: Arno Vlemmings (Opvoedinstructies)\n\
         muziek: Onze vader zei (trad.) - Moek (van de CD: 'Brabant-bont-ste Vol. 2 Clipsound CCD 994)\n\
         Sportnieuws: Afgelastingen"
    );
    assert_eq!(b.kind, MediaKind::Audio);
    assert_eq!(b.length, Duration::from_secs(885));
    assert_eq!(
        b.date,
        Amsterdam
            .with_ymd_and_hms(2001, 4, 3, 0, 44, 0)
            .single()
            .unwrap()
            .fixed_offset()
    );
    assert_eq!(
        b.media_url,
        "http://download.omroep.nl/vpro/29/08/57/39/POMS_VPRO_396139.mp3"
    );
}

#[test]
fn video_broadcast() {
    let b = parse_fixture("broadcast-video.html");

    assert_eq!(b.item.title, "Het clusterbom gevoel - Zembla");
    assert_eq!(b.item.url, "http://www.npo.nl/zembla/18-03-2007/VARA_101141965");
    assert_eq!(
        b.item.image_urls,
        vec!["http://images.poms.omroep.nl/image/6848.png"]
    );
    assert!(b
        .long_description
        .starts_with(" Nederlandse pensioenfondsen beleggen in wapenbedrijven"));
    assert_eq!(b.kind, MediaKind::Video);
    assert_eq!(b.length, Duration::from_secs(3000));
    assert_eq!(b.date, offset("2007-03-18T20:35:00+01:00"));
    assert_eq!(b.date.offset().local_minus_utc(), 3600);
    assert_eq!(b.media_url, "http://www.npo.nl/zembla/18-03-2007/VARA_101141965");
}

#[test]
fn npo3_video_broadcast() {
    // Reduced reconstruction of an NPO 3 page, not a captured one: the markup
    // keeps the layout's structure but the description texts are shortened.
    let b = parse_fixture("broadcast-video-npo3.html");

    assert_eq!(b.item.title, "Radio Bergeijk, toewijding in beeld");
    assert_eq!(
        b.item.url,
        "http://www.npo.nl/radio-bergeijk-toewijding-in-beeld/25-06-2007/VPRO_1122739"
    );
    // The page declares an empty image.
    assert!(b.item.image_urls.is_empty());
    // Long description comes from the NPO 3 layout.
    assert_eq!(
        b.long_description,
        " Een filmploeg over de radiovloer! Ze moesten even aan de gedachte wennen, \
         de presentatoren van Radio Bergeijk.\nTeksten en spel: Pieter Bouwman en George van Houts."
    );
    assert_eq!(b.kind, MediaKind::Video);
    assert_eq!(b.length, Duration::from_secs(2100));
    assert_eq!(b.date, offset("2007-06-25T23:10:00+02:00"));
    assert_eq!(
        b.media_url,
        "http://www.npo.nl/radio-bergeijk-toewijding-in-beeld/25-06-2007/VPRO_1122739"
    );
}

#[test]
fn media_item_from_broadcast_page() {
    let item = gemist::parse_media_item(load("broadcast-video.html").as_bytes()).unwrap();
    let b = parse_fixture("broadcast-video.html");
    assert_eq!(item, b.item);
}

#[test]
fn parsing_is_idempotent() {
    let html = load("broadcast-audio.html");
    let parser = Parser::default();
    assert_eq!(
        parser.parse_broadcast_str(&html).unwrap(),
        parser.parse_broadcast_str(&html).unwrap()
    );
}

#[test]
fn unknown_type_rejects_page() {
    let html = load("broadcast-video.html").replace("video.episode", "article");
    let err = Parser::default().parse_broadcast_str(&html).unwrap_err();
    assert!(matches!(err, GemistError::UnknownType(ref t) if t == "article"));
}

#[test]
fn missing_type_rejects_page() {
    let html = load("broadcast-audio.html").replace(r#"name="og:type""#, r#"name="og:kind""#);
    let err = Parser::default().parse_broadcast_str(&html).unwrap_err();
    assert_eq!(err.missing_field(), Some("type"));
}

#[test]
fn missing_date_rejects_page() {
    let html = load("broadcast-video.html").replace("itemprop='startDate'", "itemprop='endDate'");
    let err = Parser::default().parse_broadcast_str(&html).unwrap_err();
    assert_eq!(err.missing_field(), Some("date"));
}

#[test]
fn malformed_audio_length_rejects_page() {
    let html = load("broadcast-audio.html").replace(">14:45<", ">kwartier<");
    let err = Parser::default().parse_broadcast_str(&html).unwrap_err();
    assert!(matches!(err, GemistError::DurationParse(_)));
}

#[test]
fn relative_media_url_rejects_page() {
    let html = load("broadcast-audio.html").replace(
        "http://download.omroep.nl/vpro/29/08/57/39/POMS_VPRO_396139.mp3",
        "/vpro/POMS_VPRO_396139.mp3",
    );
    let err = Parser::default().parse_broadcast_str(&html).unwrap_err();
    assert!(matches!(err, GemistError::MediaUrlParse(MediaKind::Audio)));
}

#[test]
fn audio_hour_group_modes() {
    let html = load("broadcast-audio.html").replace(">14:45<", ">1:02:03<");

    let counted = Parser::default().parse_broadcast_str(&html).unwrap();
    assert_eq!(counted.length, Duration::from_secs(3723));

    let legacy = Parser::builder().hour_mode(HourMode::Legacy).build();
    let b = legacy.parse_broadcast_str(&html).unwrap();
    assert_eq!(b.length, Duration::from_secs(123));
}

#[test]
fn broadcast_serializes_flat() {
    let b = parse_fixture("broadcast-video.html");
    let json = serde_json::to_value(&b).unwrap();
    assert_eq!(json["title"], "Het clusterbom gevoel - Zembla");
    assert_eq!(json["kind"], "video");
    assert!(json.get("item").is_none());
}
