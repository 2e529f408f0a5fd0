//! Tests for import file export.

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use pdp_model::{AgeGroup, BenchmarkRecord, GenderScope, RatedBenchmark, RatingLevel};
use pdp_output::{export, read_document, render, sha256_hex};

fn temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    dir.push(format!("pdp_output_{stamp}"));
    dir
}

fn record(skill: &str, age_group: AgeGroup, level: RatingLevel) -> BenchmarkRecord {
    RatedBenchmark {
        sport_code: "rugby".to_string(),
        skill_name: skill.to_string(),
        age_group,
        gender: GenderScope::All,
        level,
        expected_rating: 1.5,
        min_acceptable: 1.0,
        developing_threshold: 1.5,
        excellent_threshold: 2.0,
        notes: "Foundation age".to_string(),
    }
    .into()
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn render_wraps_records_in_benchmarks_key() {
    let bytes = render(&[record("Drop Kick", AgeGroup::U10, RatingLevel::Recreational)]).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    insta::assert_snapshot!(text, @r#"
    {
      "benchmarks": [
        {
          "sportCode": "rugby",
          "skillName": "Drop Kick",
          "ageGroup": "U10",
          "gender": "all",
          "level": "recreational",
          "expectedRating": 1.5,
          "minAcceptable": 1.0,
          "developingThreshold": 1.5,
          "excellentThreshold": 2.0,
          "notes": "Foundation age"
        }
      ]
    }
    "#);
}

#[test]
fn render_empty_set() {
    let bytes = render(&[]).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), "{\n  \"benchmarks\": []\n}");
}

// ============================================================================
// Export
// ============================================================================

#[test]
fn export_creates_directories_and_matches_render() {
    let dir = temp_dir();
    let path = dir.join("nested").join("rugby-benchmarks-IMPORT.json");
    let records = vec![
        record("Drop Kick", AgeGroup::U10, RatingLevel::Recreational),
        record("Drop Kick", AgeGroup::U12, RatingLevel::Competitive),
    ];

    let summary = export(&records, &path, false).unwrap();

    let written = fs::read(&path).unwrap();
    assert_eq!(written, render(&records).unwrap());
    assert!(!written.ends_with(b"\n"));
    assert_eq!(summary.records, 2);
    assert_eq!(summary.bytes, written.len());
    assert_eq!(summary.sha256, sha256_hex(&written));
    assert!(!summary.dry_run);
    assert_eq!(summary.counts.by_age_group.get(&AgeGroup::U12), Some(&1));
    assert_eq!(
        summary.counts.by_level,
        vec![("recreational", 1), ("competitive", 1)]
    );
    assert!(summary.counts.by_event_group.is_empty());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn export_overwrites_existing_file() {
    let dir = temp_dir();
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("out.json");
    fs::write(&path, "stale contents that are longer than the new document").unwrap();

    export(&[], &path, false).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "{\n  \"benchmarks\": []\n}"
    );
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dry_run_leaves_filesystem_untouched() {
    let dir = temp_dir();
    let path = dir.join("out.json");

    let summary = export(
        &[record("Drop Kick", AgeGroup::U10, RatingLevel::Recreational)],
        &path,
        true,
    )
    .unwrap();

    assert!(summary.dry_run);
    assert_eq!(summary.records, 1);
    assert!(!dir.exists());
}

#[test]
fn written_document_reads_back() {
    let dir = temp_dir();
    let path = dir.join("out.json");
    let records = vec![record("Grubber Kick", AgeGroup::Senior, RatingLevel::Elite)];
    export(&records, &path, false).unwrap();

    let document = read_document(&path).unwrap();
    assert_eq!(document.benchmarks, records);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn reading_missing_file_reports_path() {
    let path = temp_dir().join("missing.json");
    let err = read_document(&path).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}
