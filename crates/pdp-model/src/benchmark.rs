//! Benchmark records and the import document that carries them.
//!
//! Field order in these structs is the key order of the generated JSON,
//! which keeps regenerated files diffable against earlier runs.

use serde::{Deserialize, Serialize};

use crate::enums::{AgeGroup, CompetitiveLevel, EventGroup, Gender, GenderScope, RatingLevel};
use crate::error::Result;

/// Text indicators attached to an athletics benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceIndicators {
    pub technical: Vec<String>,
    pub performance: Vec<String>,
    pub training: Vec<String>,
}

/// Athletics benchmark with a 1-5 expected level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleticsBenchmark {
    pub sport: String,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub competitive_level: CompetitiveLevel,
    pub event_group: EventGroup,
    pub skill_name: String,
    pub expected_level: u8,
    pub performance_indicators: PerformanceIndicators,
    pub assessment_notes: String,
    pub progression_path: String,
}

/// Benchmark for sports rated on the half-point scale (rugby, Irish dancing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatedBenchmark {
    pub sport_code: String,
    pub skill_name: String,
    pub age_group: AgeGroup,
    pub gender: GenderScope,
    pub level: RatingLevel,
    pub expected_rating: f64,
    pub min_acceptable: f64,
    pub developing_threshold: f64,
    pub excellent_threshold: f64,
    pub notes: String,
}

/// One synthesized benchmark.
///
/// Serialized untagged so each variant keeps its own field set in the
/// import file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BenchmarkRecord {
    Athletics(AthleticsBenchmark),
    Rated(RatedBenchmark),
}

/// Identity of a benchmark within one sport's output.
///
/// Two records with the same key are duplicates.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BenchmarkKey {
    pub skill_name: String,
    pub age_group: AgeGroup,
    pub gender: &'static str,
    pub level: &'static str,
    pub event_group: Option<EventGroup>,
}

impl std::fmt::Display for BenchmarkKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.skill_name, self.age_group, self.gender, self.level
        )?;
        if let Some(event_group) = self.event_group {
            write!(f, " / {event_group}")?;
        }
        Ok(())
    }
}

impl BenchmarkRecord {
    pub fn skill_name(&self) -> &str {
        match self {
            BenchmarkRecord::Athletics(record) => &record.skill_name,
            BenchmarkRecord::Rated(record) => &record.skill_name,
        }
    }

    pub fn age_group(&self) -> AgeGroup {
        match self {
            BenchmarkRecord::Athletics(record) => record.age_group,
            BenchmarkRecord::Rated(record) => record.age_group,
        }
    }

    /// Gender label as serialized.
    pub fn gender_label(&self) -> &'static str {
        match self {
            BenchmarkRecord::Athletics(record) => record.gender.as_str(),
            BenchmarkRecord::Rated(record) => record.gender.as_str(),
        }
    }

    /// Competitive or rating level label as serialized.
    pub fn level_label(&self) -> &'static str {
        match self {
            BenchmarkRecord::Athletics(record) => record.competitive_level.as_str(),
            BenchmarkRecord::Rated(record) => record.level.as_str(),
        }
    }

    /// Event group, present for athletics only.
    pub fn event_group(&self) -> Option<EventGroup> {
        match self {
            BenchmarkRecord::Athletics(record) => Some(record.event_group),
            BenchmarkRecord::Rated(_) => None,
        }
    }

    pub fn key(&self) -> BenchmarkKey {
        BenchmarkKey {
            skill_name: self.skill_name().to_string(),
            age_group: self.age_group(),
            gender: self.gender_label(),
            level: self.level_label(),
            event_group: self.event_group(),
        }
    }

    pub fn as_athletics(&self) -> Option<&AthleticsBenchmark> {
        match self {
            BenchmarkRecord::Athletics(record) => Some(record),
            BenchmarkRecord::Rated(_) => None,
        }
    }

    pub fn as_rated(&self) -> Option<&RatedBenchmark> {
        match self {
            BenchmarkRecord::Athletics(_) => None,
            BenchmarkRecord::Rated(record) => Some(record),
        }
    }
}

impl From<AthleticsBenchmark> for BenchmarkRecord {
    fn from(record: AthleticsBenchmark) -> Self {
        BenchmarkRecord::Athletics(record)
    }
}

impl From<RatedBenchmark> for BenchmarkRecord {
    fn from(record: RatedBenchmark) -> Self {
        BenchmarkRecord::Rated(record)
    }
}

/// Top-level import document: `{ "benchmarks": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkDocument {
    pub benchmarks: Vec<BenchmarkRecord>,
}

impl BenchmarkDocument {
    pub fn new(benchmarks: Vec<BenchmarkRecord>) -> Self {
        Self { benchmarks }
    }

    /// Parse a document previously written by the exporter.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}
