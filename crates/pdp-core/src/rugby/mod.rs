//! Rugby benchmark generation.
//!
//! Records are enumerated by age group, skill, gender scope and level.

mod eligibility;
mod synthesizer;

use std::time::Instant;

use pdp_model::{BenchmarkRecord, RatedBenchmark, Sport};
use pdp_standards::rugby::{AGE_GROUPS, OUTPUT_FILE, levels_for_age, skills};
use tracing::{debug, info, info_span};

use crate::generator::BenchmarkGenerator;

pub use eligibility::{genders_for_skill, is_eligible};
pub use synthesizer::{expected_rating, notes_for, synthesize};

pub fn generate_all() -> Vec<RatedBenchmark> {
    let span = info_span!("generate", sport = Sport::Rugby.code());
    let _guard = span.enter();
    let start = Instant::now();

    let mut benchmarks = Vec::new();
    for &age_group in AGE_GROUPS {
        let before = benchmarks.len();
        for skill in skills() {
            for &gender in genders_for_skill(skill, age_group) {
                for &level in levels_for_age(age_group) {
                    benchmarks.push(synthesize(skill, age_group, gender, level));
                }
            }
        }
        debug!(
            age_group = %age_group,
            records = benchmarks.len() - before,
            "age group generated"
        );
    }

    info!(
        records = benchmarks.len(),
        duration_ms = start.elapsed().as_millis(),
        "rugby generation complete"
    );
    benchmarks
}

pub struct RugbyGenerator;

impl BenchmarkGenerator for RugbyGenerator {
    fn sport(&self) -> Sport {
        Sport::Rugby
    }

    fn description(&self) -> &'static str {
        "Rugby skills by age group, gender scope and level"
    }

    fn default_file_name(&self) -> &'static str {
        OUTPUT_FILE
    }

    fn generate(&self) -> Vec<BenchmarkRecord> {
        generate_all().into_iter().map(BenchmarkRecord::from).collect()
    }
}
