//! Rugby eligibility filter.
//!
//! Rugby gates cohorts by age alone: an age group offers a fixed set of
//! levels and each skill declares how it splits by gender. This is kept
//! separate from the athletics exclusion rules.

use pdp_model::{AgeGroup, GenderScope, RatingLevel};
use pdp_standards::rugby::{gender_policy, levels_for_age};

pub fn is_eligible(age_group: AgeGroup, level: RatingLevel) -> bool {
    levels_for_age(age_group).contains(&level)
}

/// Gender scopes a skill is benchmarked for at an age group.
pub fn genders_for_skill(skill: &str, age_group: AgeGroup) -> &'static [GenderScope] {
    gender_policy(skill).scopes(age_group)
}
