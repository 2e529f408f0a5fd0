//! Athletics benchmark tables.
//!
//! | Table | Keyed by | Used for |
//! |-------|----------|----------|
//! | [`SKILL_CATEGORIES`] | category, skill | skill catalog and event groups |
//! | [`EXPECTED_LEVELS`] | age group, competitive level | expected 1-5 level |
//! | [`PERFORMANCE_STANDARDS`] | distance, age, gender, level | time bands |
//! | [`TECHNICAL_INDICATORS`] | skill, level | curated technical text |
//! | [`TRAINING_VOLUMES`] | level, age bracket | training text |
//! | [`EXCLUSION_RULES`] | - | eligibility policy |

mod exclusions;
mod indicators;
mod levels;
mod performance;
mod skills;
mod training;

/// Sport label written to every athletics record.
pub const SPORT_LABEL: &str = "Athletics";

/// Fixed output file for the athletics generator.
pub const OUTPUT_FILE: &str = "athletics-benchmarks-IMPORT.json";

pub use exclusions::{ADVANCED_PHYSIOLOGICAL_SKILLS, EXCLUSION_RULES, ExclusionRule};
pub use indicators::{TECHNICAL_INDICATORS, curated_levels};
pub use levels::{
    DEFAULT_EXPECTED_LEVEL, EXPECTED_LEVELS, MAX_LEVEL, MIN_LEVEL, expected_level,
    lookup_expected_level,
};
pub use performance::{
    AgeStandards, DistanceStandards, LevelBands, PERFORMANCE_STANDARDS,
    TIMED_EVENT_CORRELATIONS, TimedEventCorrelation, performance_standard, timed_event_for,
};
pub use skills::{
    AGE_GROUPS, COMPETITIVE_LEVELS, DEFAULT_EVENT_GROUPS, EventGroupScope, GENDERS,
    SKILL_CATEGORIES, SkillCategory, SkillDefinition, category_of, skill_definitions,
};
pub use training::{TRAINING_VOLUMES, TrainingVolume, training_volume};
