//! Integration tests for the hopnet simulation driver
//!
//! These tests exercise the full scenario flow: a TOML scenario file on
//! disk, loaded and executed against a ring, with the reported traces
//! checked hop by hop.

use hopnet_ring::RingError;
use hopnet_sim::scenario::Scenario;
use tempfile::TempDir;

#[test]
fn test_scenario_file_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("ring.toml");
    std::fs::write(
        &path,
        r#"
size = 10

[[place]]
node = 2
file = "arquivo1.txt"

[[place]]
node = 7
file = "arquivo2.txt"

[[query]]
start = 0
file = "arquivo1.txt"

[[query]]
start = 5
file = "arquivo2.txt"
"#,
    )
    .unwrap();

    let scenario = Scenario::load(&path).unwrap();
    let reports = scenario.run().unwrap();

    assert_eq!(reports.len(), 2);

    assert_eq!(reports[0].found, Some(2));
    assert_eq!(reports[0].trace.as_slice(), &[0, 1, 2]);

    assert_eq!(reports[1].found, Some(7));
    assert_eq!(reports[1].trace.as_slice(), &[5, 6, 7]);
}

#[test]
fn test_scenario_wraps_around_the_ring() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("wrap.toml");
    std::fs::write(
        &path,
        r#"
size = 10

[[place]]
node = 2
file = "arquivo1.txt"

[[query]]
start = 5
file = "arquivo1.txt"
"#,
    )
    .unwrap();

    let reports = Scenario::load(&path).unwrap().run().unwrap();

    // Passes the end of the ring before reaching node 2
    assert_eq!(reports[0].found, Some(2));
    assert_eq!(reports[0].trace.as_slice(), &[5, 6, 7, 8, 9, 0, 1, 2]);
}

#[test]
fn test_scenario_miss_traverses_whole_ring() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("miss.toml");
    std::fs::write(
        &path,
        r#"
size = 10

[[query]]
start = 0
file = "missing.txt"
"#,
    )
    .unwrap();

    let reports = Scenario::load(&path).unwrap().run().unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].found, None);
    assert_eq!(reports[0].trace.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_scenario_rejects_out_of_range_placement() {
    let scenario: Scenario = toml::from_str(
        r#"
size = 5

[[place]]
node = 5
file = "arquivo1.txt"
"#,
    )
    .unwrap();

    assert_eq!(
        scenario.run().err(),
        Some(RingError::OutOfRange { id: 5, size: 5 })
    );
}

#[test]
fn test_load_rejects_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    std::fs::write(&path, "size = \"ten\"").unwrap();

    assert!(Scenario::load(&path).is_err());
}

#[test]
fn test_report_serializes_to_json() {
    let reports = Scenario::demo().run().unwrap();
    let json = serde_json::to_string(&reports[0]).unwrap();

    assert!(json.contains("\"file\":\"arquivo1.txt\""));
    assert!(json.contains("\"found\":2"));
    assert!(json.contains("\"trace\":[0,1,2]"));
}
