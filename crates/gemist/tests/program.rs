// ABOUTME: Integration tests for programme page parsing against a saved npo.nl page.
// ABOUTME: Covers the programme fields, every broadcast list item and the list failure policies.

use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, TimeZone};
use chrono_tz::Europe::Amsterdam;
use gemist::{GemistError, ListPolicy, Parser, Program};
use pretty_assertions::assert_eq;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/html")
        .join(name)
}

fn load(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("fixture")
}

fn amsterdam(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<FixedOffset> {
    Amsterdam
        .with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("unambiguous local time")
        .fixed_offset()
}

fn parse_fixture() -> Program {
    let file = File::open(fixture_path("program.html")).expect("fixture");
    gemist::parse_program(file).expect("program page parses")
}

#[test]
fn program_fields() {
    let program = parse_fixture();

    assert_eq!(program.item.title, "Radio Bergeijk");
    assert_eq!(
        program.item.url,
        "http://www.npo.nl/radio-bergeijk/POMS_S_VPRO_396280"
    );
    assert_eq!(
        program.item.image_urls,
        vec![
            "http://images.poms.omroep.nl/image/215303.png",
            "http://images.poms.omroep.nl/image/193478.png",
            "http://images.poms.omroep.nl/image/215304.png",
        ]
    );
    assert!(program
        .item
        .description
        .starts_with("Radio Bergeijk, het radiostation voor Bergeijk, wordt gepresenteerd"));
    // Attribute values are returned untrimmed.
    assert!(program.item.description.ends_with(".\n "));
}

#[test]
fn broadcast_list_items() {
    let program = parse_fixture();
    assert_eq!(program.broadcasts.len(), 8);

    let expected: [(&str, &str, &str, (u32, u32), u64); 8] = [
        (
            "Radio Bergeijk : De allerlaatste !",
            "Zaterdagavond 6 okt om Half 7 op Radio 1",
            "radio-bergeijk-de-allerlaatste/06-10-2007/POMS_VPRO_396279",
            (10, 6),
            1502,
        ),
        (
            "Radio Bergeijk: De één na laatste!",
            "Zaterdagavond 29 sept om Half 7 op Radio 1",
            "radio-bergeijk-de-een-na-laatste/29-09-2007/POMS_VPRO_396278",
            (9, 29),
            1600,
        ),
        (
            "Radio Bergeijk",
            "Elke zaterdagavond om Half 7 op Radio 1",
            "radio-bergeijk/22-09-2007/POMS_VPRO_396277",
            (9, 22),
            1522,
        ),
        (
            "Radio Bergeijk",
            "Elke zaterdagavond om Half 7 op Radio 1",
            "radio-bergeijk/15-09-2007/POMS_VPRO_396276",
            (9, 15),
            1351,
        ),
        (
            "Radio Bergeijk",
            "Elke zaterdagavond om Half 7 op Radio 1",
            "radio-bergeijk/08-09-2007/POMS_VPRO_396275",
            (9, 8),
            1500,
        ),
        (
            "Radio Bergeijk",
            "Elke zaterdagavond om Half 7 op Radio 1",
            "radio-bergeijk/01-09-2007/POMS_VPRO_396274",
            (9, 1),
            1486,
        ),
        (
            "Geen Radio Bergeijk",
            "NOS verslag EK finale dameshockey",
            "geen-radio-bergeijk/25-08-2007/POMS_VPRO_396273",
            (8, 25),
            1680,
        ),
        (
            "Radio Bergeijk",
            "Elke zaterdagavond om Half 7 op Radio 1",
            "radio-bergeijk/18-08-2007/POMS_VPRO_396272",
            (8, 18),
            1680,
        ),
    ];

    for (bp, (title, sub_title, path, (month, day), secs)) in
        program.broadcasts.iter().zip(expected)
    {
        assert_eq!(bp.item.title, title);
        assert_eq!(bp.sub_title, sub_title);
        assert_eq!(bp.item.url, format!("http://www.npo.nl/{}", path));
        assert_eq!(
            bp.item.image_urls,
            vec!["http://images.poms.omroep.nl/image/s174/c174x98/215303.png"]
        );
        assert_eq!(bp.date, amsterdam(2007, month, day, 18, 32));
        assert_eq!(bp.length, Duration::from_secs(secs));
    }
}

#[test]
fn broadcast_list_descriptions_are_raw() {
    let program = parse_fixture();

    assert_eq!(
        program.broadcasts[0].item.description,
        "Aan het begin van de uitzending wordt Tedje van Lieshout dood aantroffen in zijn werkhok. \
         Een groots gevoel van machteloze moedeloosheid overvalt presen..."
    );
    assert!(program.broadcasts[1]
        .item
        .description
        .starts_with("Hoe kan het nu opeens zo snel gaan! Met de acties tégen Radio Bergeijk.\nToon leent"));
    // Empty teaser paragraph.
    assert_eq!(program.broadcasts[6].item.description, "");
}

#[test]
fn first_date_is_summer_time() {
    let program = parse_fixture();
    assert_eq!(
        program.broadcasts[0].date.to_rfc3339(),
        "2007-10-06T18:32:00+02:00"
    );
}

#[test]
fn parsing_is_idempotent() {
    let html = load("program.html");
    let parser = Parser::default();
    let a = parser.parse_program_str(&html).unwrap();
    let b = parser.parse_program(html.as_bytes()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn malformed_item_policies() {
    // Break the third item's date; the first two survive under the default policy.
    let html = load("program.html").replacen("Za 22 sep 2007 18:32", "Za 22 sep 2007 laat", 1);

    let program = Parser::default().parse_program_str(&html).unwrap();
    assert_eq!(program.broadcasts.len(), 2);
    assert_eq!(program.broadcasts[1].item.title, "Radio Bergeijk: De één na laatste!");

    let strict = Parser::builder().list_policy(ListPolicy::Strict).build();
    match strict.parse_program_str(&html).unwrap_err() {
        GemistError::Item { index, source } => {
            assert_eq!(index, 2);
            assert!(source.is_format());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_broadcast_block() {
    let html = load("program.html").replace("id='broadcasts-block'", "id='elsewhere'");
    let err = Parser::default().parse_program_str(&html).unwrap_err();
    assert_eq!(err.missing_field(), Some("broadcast list"));
}

#[test]
fn program_serializes_to_json() {
    let program = parse_fixture();
    let json = serde_json::to_value(&program).unwrap();
    assert_eq!(json["title"], "Radio Bergeijk");
    assert_eq!(json["broadcasts"].as_array().map(Vec::len), Some(8));
    assert_eq!(json["broadcasts"][6]["sub_title"], "NOS verslag EK finale dameshockey");
}
