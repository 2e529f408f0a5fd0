//! Count summaries over a benchmark set.

use std::collections::BTreeMap;
use std::path::PathBuf;

use pdp_model::{AgeGroup, BenchmarkRecord, EventGroup};
use serde::Serialize;

/// Record counts grouped the way the import team reviews them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BenchmarkSummary {
    pub total: usize,
    pub by_age_group: BTreeMap<AgeGroup, usize>,
    /// Level labels in order of first appearance.
    pub by_level: Vec<(&'static str, usize)>,
    /// Empty for sports without event groups.
    pub by_event_group: BTreeMap<EventGroup, usize>,
}

impl BenchmarkSummary {
    pub fn from_records(records: &[BenchmarkRecord]) -> Self {
        let mut summary = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            *summary.by_age_group.entry(record.age_group()).or_insert(0) += 1;

            let level = record.level_label();
            match summary.by_level.iter_mut().find(|(label, _)| *label == level) {
                Some((_, count)) => *count += 1,
                None => summary.by_level.push((level, 1)),
            }

            if let Some(event_group) = record.event_group() {
                *summary.by_event_group.entry(event_group).or_insert(0) += 1;
            }
        }
        summary
    }
}

/// Result of writing one import file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub records: usize,
    pub bytes: usize,
    /// SHA-256 of the bytes written.
    pub sha256: String,
    pub counts: BenchmarkSummary,
    /// True when nothing was written (dry run).
    pub dry_run: bool,
}
