//! Fixture tests for pt-title.
//!
//! Each case in `tests/fixtures/releases.json` lists an input release name
//! and every field the parser is expected to extract. `source` and
//! `resolution` use the display names of the enums, `null` meaning unknown.

use pt_title::config::ParserConfig;
use pt_title::{parse, DigitalFormat, DigitalResolution, MediaInfo, Parser};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A single test case from a fixture file.
#[derive(Debug, Deserialize)]
struct TestCase {
    input: String,
    expected: Expected,
}

/// Expected values for a test case.
#[derive(Debug, Deserialize)]
struct Expected {
    title: String,
    year: Option<u32>,
    source: Option<String>,
    resolution: Option<String>,
    group: String,
}

impl Expected {
    fn to_media_info(&self) -> MediaInfo {
        MediaInfo {
            title: self.title.clone(),
            year: self.year,
            group: self.group.clone(),
            source: self
                .source
                .as_deref()
                .map(|s| s.parse().expect("fixture source must be a known format"))
                .unwrap_or(DigitalFormat::Unknown),
            resolution: self
                .resolution
                .as_deref()
                .map(|s| s.parse().expect("fixture resolution must be known"))
                .unwrap_or(DigitalResolution::Unknown),
        }
    }
}

fn load_fixtures() -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/releases.json");
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse {}: {}", path.display(), e))
}

#[test]
fn test_all_fixtures() {
    let cases = load_fixtures();
    assert!(!cases.is_empty());

    let mut failures = Vec::new();
    for case in &cases {
        let actual = parse(&case.input);
        let expected = case.expected.to_media_info();
        if actual != expected {
            failures.push(format!(
                "{:?}\n  expected: {:?}\n  actual:   {:?}",
                case.input, expected, actual
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} fixtures failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn test_case_insensitive_sources() {
    for spelling in ["BluRay", "bluray", "BLURAY", "bLuRaY"] {
        let info = parse(&format!("Movie.2010.{spelling}.x264-GRP"));
        assert_eq!(info.source, DigitalFormat::Blueray, "{spelling}");
        assert_eq!(info.title, "Movie");
    }
}

#[test]
fn test_title_excludes_earliest_field_and_after() {
    let inputs = [
        "A.B.C.2015.D.E",
        "A.B.C.1080p.D.2015",
        "A.B.C.HDTV.2015.720p",
    ];
    for input in inputs {
        let info = parse(input);
        assert_eq!(info.title, "A B C", "{input}");
    }
}

#[test]
fn test_first_year_wins() {
    let info = parse("2001.A.Space.Odyssey.1968.BluRay-GRP");
    assert_eq!(info.year, Some(2001));
    assert_eq!(info.title, "");
}

#[test]
fn test_parser_with_config() {
    let parser = Parser::new(
        ParserConfig::builder()
            .title_separator(" - ")
            .site_separator(Some('#'))
            .build(),
    );
    let info = parser.parse("Some.Movie.2015.1080p-GRP#TRACKER");
    assert_eq!(info.title, "Some - Movie");
    assert_eq!(info.group, "TRACKER");
    assert_eq!(info.resolution, DigitalResolution::FHD);
}

#[test]
fn test_parse_is_repeatable_across_threads() {
    let input = "Some.Movie.Title.2015.1080p.BluRay.x264-GROUP";
    let expected = parse(input);
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(move || parse(input)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("parser thread panicked"), expected);
    }
}
