//! Index loading from files and the degrade-on-failure policy.

use super::common::{fixture_index, FailingSource, RecordingSink, FIXTURE_INDEX};
use fitsearch::{fetch_index, load_index, FileSource, IndexStatus, StaticSource};
use futures::executor::block_on;
use std::io::Write;

#[test]
fn test_load_fixture_file() {
    let sink = RecordingSink::default();
    let outcome = block_on(fetch_index(&FileSource::new(FIXTURE_INDEX), &sink));

    assert_eq!(outcome.status, IndexStatus::Loaded { documents: 8 });
    assert_eq!(outcome.index, fixture_index());
    assert!(sink.failures().is_empty());
}

#[test]
fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(
        file,
        r#"{{"tdee": {{"title": "TDEE Calculator", "description": "", "url": "/calculators/tdee", "type": "calculator", "tags": ["tdee"]}}}}"#
    )
    .expect("Failed to write temp file");

    let sink = RecordingSink::default();
    let index = block_on(load_index(&FileSource::new(file.path()), &sink));
    assert_eq!(index.len(), 1);
    assert_eq!(index.get("tdee").map(|d| d.tags.len()), Some(1));
}

#[test]
fn test_network_failure_logs_once_and_returns_empty() {
    let sink = RecordingSink::default();
    let index = block_on(load_index(&FailingSource::new("connection reset"), &sink));

    assert!(index.is_empty());
    assert_eq!(sink.failures().len(), 1);
}

#[test]
fn test_wrong_shape_degrades() {
    let sink = RecordingSink::default();
    // Array instead of object
    let outcome = block_on(fetch_index(&StaticSource::new("[1, 2, 3]"), &sink));
    assert_eq!(outcome.status, IndexStatus::Degraded);
    assert!(outcome.index.is_empty());
    assert_eq!(sink.failures().len(), 1);
}

#[test]
fn test_truncated_file_degrades() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("search-index.json");
    std::fs::write(&path, r#"{"bmi": {"title": "BMI"#).expect("Failed to write index");

    let sink = RecordingSink::default();
    let outcome = block_on(fetch_index(&FileSource::new(&path), &sink));
    assert_eq!(outcome.status, IndexStatus::Degraded);
    assert!(sink.failures()[0].contains("invalid index JSON"));
}
