//! Irish dancing benchmark generation.
//!
//! Every skill is benchmarked for every grade its age group can enter.
//! Gender is always shared.

use std::time::Instant;

use pdp_model::{AgeGroup, BenchmarkRecord, GenderScope, RatedBenchmark, Sport};
use pdp_standards::irish_dancing::{
    AGE_GROUPS, LevelGrade, OUTPUT_FILE, SKILL_STANDARDS, SPORT_CODE, SkillStandard,
    levels_for_age,
};
use tracing::{debug, info, info_span};

use crate::generator::BenchmarkGenerator;

pub fn synthesize(
    standard: &SkillStandard,
    age_group: AgeGroup,
    grade: LevelGrade,
) -> RatedBenchmark {
    let band = standard.band(grade.level);
    RatedBenchmark {
        sport_code: SPORT_CODE.to_string(),
        skill_name: standard.skill.to_string(),
        age_group,
        gender: GenderScope::All,
        level: grade.level,
        expected_rating: band.expected,
        min_acceptable: band.min_acceptable,
        developing_threshold: band.developing,
        excellent_threshold: band.excellent,
        notes: format!(
            "{} {age_group}: {}",
            grade.grade,
            standard.description(grade.level)
        ),
    }
}

pub fn generate_all() -> Vec<RatedBenchmark> {
    let span = info_span!("generate", sport = Sport::IrishDancing.code());
    let _guard = span.enter();
    let start = Instant::now();

    let mut benchmarks = Vec::new();
    for standard in SKILL_STANDARDS {
        for &age_group in AGE_GROUPS {
            benchmarks.extend(
                levels_for_age(age_group)
                    .iter()
                    .map(|&grade| synthesize(standard, age_group, grade)),
            );
        }
        debug!(skill = standard.skill, "skill generated");
    }

    info!(
        records = benchmarks.len(),
        duration_ms = start.elapsed().as_millis(),
        "irish dancing generation complete"
    );
    benchmarks
}

pub struct IrishDancingGenerator;

impl BenchmarkGenerator for IrishDancingGenerator {
    fn sport(&self) -> Sport {
        Sport::IrishDancing
    }

    fn description(&self) -> &'static str {
        "Irish dancing skills by age group and competition grade"
    }

    fn default_file_name(&self) -> &'static str {
        OUTPUT_FILE
    }

    fn generate(&self) -> Vec<BenchmarkRecord> {
        generate_all().into_iter().map(BenchmarkRecord::from).collect()
    }
}
