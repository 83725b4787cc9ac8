//! Integration tests for the moon report parser with pasted report files
//!
//! The fixtures mirror what users paste: straight from the game client
//! (tabs), through a spreadsheet (runs of spaces), and a mix of both, plus
//! the structurally broken variants validation must reject.

use moon_report_parser::{MoonReport, MoonShape, ReportError, field_keys};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const WELL_FORMED: &[&str] = &[
    "moon_report.txt",
    "moon_report_excel.txt",
    "moon_report_mixed.txt",
];

const EXPECTED_HEADER: &[&str] = &[
    "Moon",
    "Moon Product",
    "Quantity",
    "Ore TypeID",
    "SolarSystemID",
    "PlanetID",
    "MoonID",
];

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", name, e))
}

fn parse_fixture(name: &str) -> MoonReport {
    let mut report = MoonReport::new();
    report.parse(&load_fixture(name));
    report
}

fn row(values: [&str; 7]) -> HashMap<String, String> {
    field_keys::<MoonShape>()
        .into_iter()
        .zip(values)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Parse every well-formed fixture and check the full document
///
/// Purpose: Tab, space and mixed pastes must produce the same document
/// Benefit: Guards the delimiter heuristic against regressions on real layouts
#[test]
fn test_parse_well_formed_reports() {
    for name in WELL_FORMED {
        let report = parse_fixture(name);
        assert_eq!(report.validate(), Ok(()), "fixture {}", name);

        let header = report.header().expect("header present");
        assert_eq!(header.fields(), EXPECTED_HEADER, "fixture {}", name);

        let groups = report.groups();
        assert_eq!(groups.len(), 2, "fixture {}", name);

        assert_eq!(groups[0].name(), "OP9L-F II - Moon 10");
        let first = groups[0].elements();
        assert_eq!(first.len(), 4, "fixture {}", name);
        assert_eq!(
            first[0].fields(),
            &row([
                "",
                "Glossy Scordite",
                "0.300030559301",
                "46687",
                "30002173",
                "40138526",
                "40138527"
            ])
        );
        assert_eq!(
            first[1].fields(),
            &row([
                "",
                "Immaculate Jaspet",
                "0.328855156898",
                "46682",
                "30002173",
                "40138526",
                "40138527"
            ])
        );
        assert_eq!(
            first[2].fields(),
            &row([
                "",
                "Pellucid Crokite",
                "0.287893354893",
                "46677",
                "30002173",
                "40138526",
                "40138527"
            ])
        );
        assert_eq!(
            first[3].fields(),
            &row([
                "",
                "Sylvite",
                "0.083220936358",
                "45491",
                "30002173",
                "40138526",
                "40138527"
            ])
        );

        assert_eq!(groups[1].name(), "OP9L-F VII - Moon 8");
        let second = groups[1].elements();
        assert_eq!(second.len(), 3, "fixture {}", name);
        assert_eq!(
            second[0].fields(),
            &row([
                "",
                "Dazzling Spodumain",
                "0.397311687469",
                "46688",
                "30002173",
                "40138538",
                "40138546"
            ])
        );
        assert_eq!(
            second[1].fields(),
            &row([
                "",
                "Immaculate Jaspet",
                "0.412641495466",
                "46682",
                "30002173",
                "40138538",
                "40138546"
            ])
        );
        assert_eq!(
            second[2].fields(),
            &row([
                "",
                "Sylvite",
                "0.190046817064",
                "45491",
                "30002173",
                "40138538",
                "40138546"
            ])
        );
    }
}

#[test]
fn test_well_formed_accessors() {
    for name in WELL_FORMED {
        let report = parse_fixture(name);

        assert!(report.has_header(), "fixture {}", name);
        assert!(report.has_groups(), "fixture {}", name);
        assert!(!report.has_elements(), "fixture {}", name);
        assert!(report.elements().is_empty(), "fixture {}", name);
        assert!(!report.is_empty(), "fixture {}", name);
        assert!(report.header_matches_shape(), "fixture {}", name);
    }
}

#[test]
fn test_empty_report() {
    let mut report = MoonReport::new();
    assert!(report.is_empty());
    assert_eq!(report.validate(), Err(ReportError::EmptyReport));

    report.parse("");
    assert!(report.is_empty());
    assert_eq!(report.validate(), Err(ReportError::EmptyReport));
}

#[test]
fn test_missing_header() {
    let report = parse_fixture("moon_report_without_header.txt");

    assert!(!report.has_header());
    assert!(report.has_groups());
    assert_eq!(report.validate(), Err(ReportError::MissingHeader));
}

#[test]
fn test_missing_groups() {
    let report = parse_fixture("moon_report_without_groups.txt");

    assert!(report.has_header());
    assert!(!report.has_groups());
    assert!(report.has_elements());
    assert_eq!(report.elements().len(), 4);
    assert_eq!(report.validate(), Err(ReportError::MissingGroup));
}

#[test]
fn test_header_only_line() {
    let mut report = MoonReport::new();
    report.parse("Moon\tMoon Product\tQuantity\tOre TypeID\tSolarSystemID\tPlanetID\tMoonID");

    assert_eq!(report.validate(), Err(ReportError::MissingGroup));
}

#[test]
fn test_group_without_elements() {
    let report = parse_fixture("moon_report_without_elements.txt");

    assert_eq!(report.groups().len(), 2);
    assert!(report.groups()[0].has_elements());
    assert!(!report.groups()[1].has_elements());
    assert_eq!(report.validate(), Err(ReportError::InvalidGroupStructure));
}

#[test]
fn test_reparse_leaves_no_residue() {
    let mut report = parse_fixture("moon_report.txt");
    report.parse(&load_fixture("moon_report_without_groups.txt"));

    assert!(!report.has_groups());
    assert_eq!(report.validate(), Err(ReportError::MissingGroup));

    report.parse(&load_fixture("moon_report_excel.txt"));
    assert!(!report.has_elements());
    assert_eq!(report.groups().len(), 2);
    assert_eq!(report.validate(), Ok(()));
}

/// Round trip a pasted report through a file, as an upload handler would
#[test]
fn test_parse_from_written_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", load_fixture("moon_report_mixed.txt")).unwrap();

    let content = std::fs::read_to_string(temp_file.path()).unwrap();
    let mut report = MoonReport::new();
    report.parse(&content);

    assert_eq!(report.validate(), Ok(()));
    assert_eq!(report.stats().group_lines, 2);
    assert_eq!(report.stats().data_lines, 7);
}
