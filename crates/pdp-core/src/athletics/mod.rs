//! Athletics benchmark generation.
//!
//! Records are enumerated by category, skill, age group, gender,
//! competitive level and event group, in table order.

mod eligibility;
mod synthesizer;

use std::time::Instant;

use pdp_model::{
    AgeGroup, AthleticsBenchmark, BenchmarkRecord, CompetitiveLevel, EventGroup, Gender, Sport,
};
use pdp_standards::athletics::{
    AGE_GROUPS, COMPETITIVE_LEVELS, GENDERS, OUTPUT_FILE, SKILL_CATEGORIES, SkillDefinition,
    skill_definitions,
};
use tracing::{debug, info, info_span};

use crate::generator::BenchmarkGenerator;

pub use eligibility::{blocking_rule, is_eligible};
pub use synthesizer::{
    performance_indicators, synthesize, technical_indicators, training_indicators,
};

/// One (age group, gender, level, event group) combination for a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cohort {
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub level: CompetitiveLevel,
    pub event_group: EventGroup,
}

/// Every cohort a skill could be benchmarked for, before eligibility.
pub fn candidate_cohorts(skill: &SkillDefinition) -> impl Iterator<Item = Cohort> {
    let event_groups = skill.event_groups;
    AGE_GROUPS.iter().flat_map(move |&age_group| {
        GENDERS.iter().flat_map(move |&gender| {
            COMPETITIVE_LEVELS.iter().flat_map(move |&level| {
                event_groups.iter().map(move |&event_group| Cohort {
                    age_group,
                    gender,
                    level,
                    event_group,
                })
            })
        })
    })
}

/// Generates every eligible athletics benchmark in enumeration order.
pub fn generate_all() -> Vec<AthleticsBenchmark> {
    let span = info_span!("generate", sport = Sport::Athletics.code());
    let _guard = span.enter();
    let start = Instant::now();

    let mut benchmarks = Vec::new();
    for category in SKILL_CATEGORIES {
        let before = benchmarks.len();
        for skill in skill_definitions().filter(|skill| skill.category == category.name) {
            benchmarks.extend(
                candidate_cohorts(&skill)
                    .filter(|cohort| {
                        is_eligible(
                            cohort.age_group,
                            cohort.level,
                            cohort.event_group,
                            skill.name,
                        )
                    })
                    .map(|cohort| synthesize(skill.name, &cohort)),
            );
        }
        debug!(
            category = category.name,
            records = benchmarks.len() - before,
            "category generated"
        );
    }

    info!(
        records = benchmarks.len(),
        duration_ms = start.elapsed().as_millis(),
        "athletics generation complete"
    );
    benchmarks
}

pub struct AthleticsGenerator;

impl BenchmarkGenerator for AthleticsGenerator {
    fn sport(&self) -> Sport {
        Sport::Athletics
    }

    fn description(&self) -> &'static str {
        "Athletics skills by age group, gender, competitive level and event group"
    }

    fn default_file_name(&self) -> &'static str {
        OUTPUT_FILE
    }

    fn generate(&self) -> Vec<BenchmarkRecord> {
        generate_all().into_iter().map(BenchmarkRecord::from).collect()
    }
}
