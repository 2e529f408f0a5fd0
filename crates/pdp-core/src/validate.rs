//! Record-level checks over a benchmark set.
//!
//! | Code | Severity | Check |
//! |------|----------|-------|
//! | BM001 | error | duplicate (skill, age, gender, level, event group) key |
//! | BM002 | error | athletics expected level outside 1-5 |
//! | BM003 | error | expected rating outside 1.0-4.5 |
//! | BM004 | error | threshold outside 0.5-5.0 |
//! | BM005 | warning | rating or threshold off the half-point grid |
//! | BM006 | error | thresholds out of order |
//! | BM007 | error | empty technical indicator list |

use std::collections::HashMap;

use pdp_model::{
    AthleticsBenchmark, BenchmarkKey, BenchmarkRecord, IssueSeverity, RatedBenchmark,
    ValidationIssue, ValidationReport,
};
use pdp_standards::athletics::{MAX_LEVEL, MIN_LEVEL};

pub const MIN_EXPECTED_RATING: f64 = 1.0;
pub const MAX_EXPECTED_RATING: f64 = 4.5;
pub const MIN_THRESHOLD: f64 = 0.5;
pub const MAX_THRESHOLD: f64 = 5.0;

/// Run every check over `records`.
pub fn validate_records(records: &[BenchmarkRecord]) -> ValidationReport {
    let mut report = ValidationReport {
        records: records.len(),
        issues: Vec::new(),
    };

    // 1. Key uniqueness
    report.issues.extend(duplicate_keys(records));

    // 2. Per-record value checks
    for (index, record) in records.iter().enumerate() {
        let issues = match record {
            BenchmarkRecord::Athletics(record) => check_athletics(record),
            BenchmarkRecord::Rated(record) => check_rated(record),
        };
        report
            .issues
            .extend(issues.into_iter().map(|(code, severity, message)| {
                ValidationIssue {
                    code: code.to_string(),
                    message,
                    severity,
                    skill_name: Some(record.skill_name().to_string()),
                    record_index: Some(index),
                }
            }));
    }

    report
}

fn duplicate_keys(records: &[BenchmarkRecord]) -> Vec<ValidationIssue> {
    let mut first_seen: HashMap<BenchmarkKey, usize> = HashMap::new();
    let mut issues = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let key = record.key();
        if let Some(first) = first_seen.get(&key) {
            issues.push(ValidationIssue {
                code: "BM001".to_string(),
                message: format!("Duplicate benchmark key {key} (first at record {first})"),
                severity: IssueSeverity::Error,
                skill_name: Some(key.skill_name.clone()),
                record_index: Some(index),
            });
        } else {
            first_seen.insert(key, index);
        }
    }
    issues
}

type Finding = (&'static str, IssueSeverity, String);

fn check_athletics(record: &AthleticsBenchmark) -> Vec<Finding> {
    let mut findings = Vec::new();
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&record.expected_level) {
        findings.push((
            "BM002",
            IssueSeverity::Error,
            format!(
                "Expected level {} outside {MIN_LEVEL}-{MAX_LEVEL}",
                record.expected_level
            ),
        ));
    }
    if record.performance_indicators.technical.is_empty() {
        findings.push((
            "BM007",
            IssueSeverity::Error,
            "Technical indicator list is empty".to_string(),
        ));
    }
    findings
}

fn check_rated(record: &RatedBenchmark) -> Vec<Finding> {
    let mut findings = Vec::new();
    if !(MIN_EXPECTED_RATING..=MAX_EXPECTED_RATING).contains(&record.expected_rating) {
        findings.push((
            "BM003",
            IssueSeverity::Error,
            format!(
                "Expected rating {:.1} outside {MIN_EXPECTED_RATING:.1}-{MAX_EXPECTED_RATING:.1}",
                record.expected_rating
            ),
        ));
    }

    let thresholds = [
        ("minAcceptable", record.min_acceptable),
        ("developingThreshold", record.developing_threshold),
        ("excellentThreshold", record.excellent_threshold),
    ];
    for (field, value) in thresholds {
        if !(MIN_THRESHOLD..=MAX_THRESHOLD).contains(&value) {
            findings.push((
                "BM004",
                IssueSeverity::Error,
                format!("{field} {value:.1} outside {MIN_THRESHOLD:.1}-{MAX_THRESHOLD:.1}"),
            ));
        }
    }

    for (field, value) in [("expectedRating", record.expected_rating)]
        .into_iter()
        .chain(thresholds)
    {
        if !on_half_point_grid(value) {
            findings.push((
                "BM005",
                IssueSeverity::Warning,
                format!("{field} {value} is not a multiple of 0.5"),
            ));
        }
    }

    if record.min_acceptable > record.developing_threshold
        || record.developing_threshold > record.excellent_threshold
    {
        findings.push((
            "BM006",
            IssueSeverity::Error,
            format!(
                "Thresholds out of order: {} / {} / {}",
                record.min_acceptable, record.developing_threshold, record.excellent_threshold
            ),
        ));
    }
    findings
}

fn on_half_point_grid(value: f64) -> bool {
    let doubled = value * 2.0;
    (doubled - doubled.round()).abs() < 1e-9
}

#[cfg(test)]
mod tests {
    use pdp_model::{AgeGroup, GenderScope, RatingLevel};

    use super::*;

    fn rated(expected: f64, min: f64, developing: f64, excellent: f64) -> BenchmarkRecord {
        RatedBenchmark {
            sport_code: "rugby".to_string(),
            skill_name: "Drop Kick".to_string(),
            age_group: AgeGroup::U14,
            gender: GenderScope::Male,
            level: RatingLevel::Elite,
            expected_rating: expected,
            min_acceptable: min,
            developing_threshold: developing,
            excellent_threshold: excellent,
            notes: String::new(),
        }
        .into()
    }

    fn codes(report: &ValidationReport) -> Vec<&str> {
        report.issues.iter().map(|issue| issue.code.as_str()).collect()
    }

    #[test]
    fn clean_record_has_no_issues() {
        let report = validate_records(&[rated(3.5, 3.0, 3.5, 4.0)]);
        assert!(report.is_clean());
        assert_eq!(report.records, 1);
    }

    #[test]
    fn duplicate_is_reported_on_second_occurrence() {
        let record = rated(3.5, 3.0, 3.5, 4.0);
        let report = validate_records(&[record.clone(), record]);
        assert_eq!(codes(&report), vec!["BM001"]);
        assert_eq!(report.issues[0].record_index, Some(1));
        assert!(report.issues[0].message.contains("first at record 0"));
    }

    #[test]
    fn out_of_range_and_unordered_thresholds() {
        let report = validate_records(&[rated(5.0, 4.5, 5.0, 4.0)]);
        assert_eq!(codes(&report), vec!["BM003", "BM006"]);
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn off_grid_values_are_warnings() {
        let report = validate_records(&[rated(3.25, 2.75, 3.25, 3.75)]);
        assert_eq!(report.error_count(), 0);
        assert_eq!(report.warning_count(), 4);
        assert!(!report.has_errors());
    }
}
