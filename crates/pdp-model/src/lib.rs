#![deny(unsafe_code)]

pub mod benchmark;
pub mod enums;
pub mod error;
pub mod validation;

pub use benchmark::{
    AthleticsBenchmark, BenchmarkDocument, BenchmarkKey, BenchmarkRecord, PerformanceIndicators,
    RatedBenchmark,
};
pub use enums::{
    AgeGroup, CompetitiveLevel, EventGroup, Gender, GenderScope, RatingLevel, Sport,
};
pub use error::{ModelError, Result};
pub use validation::{IssueSeverity, ValidationIssue, ValidationReport};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_report_counts() {
        let report = ValidationReport {
            records: 2,
            issues: vec![
                ValidationIssue {
                    code: "BM001".to_string(),
                    message: "Duplicate benchmark key".to_string(),
                    severity: IssueSeverity::Error,
                    skill_name: Some("Tackle Technique".to_string()),
                    record_index: Some(1),
                },
                ValidationIssue {
                    code: "BM005".to_string(),
                    message: "Rating off the half-point grid".to_string(),
                    severity: IssueSeverity::Warning,
                    skill_name: None,
                    record_index: None,
                },
            ],
        };
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.warning_count(), 1);
        assert!(report.has_errors());
        assert!(!report.is_clean());
    }
}
