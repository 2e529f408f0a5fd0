//! Rugby benchmark tables.
//!
//! Ratings use the half-point 1.0-5.0 scale. A rating comes from
//! [`BASE_RATINGS`] and is then rewritten by [`RATING_ADJUSTMENTS`].

mod notes;
mod ratings;
mod skills;

pub const SPORT_CODE: &str = "rugby";

pub const OUTPUT_FILE: &str = "rugby-benchmarks-IMPORT.json";

pub use notes::{
    BILATERAL_PASSING_SKILLS, COHORT_STANDARDS, CONTACT_TRANSITION_SKILLS, INTRODUCTORY_KICKS,
    JACKALING, KICK_DISTANCE_SKILLS, KICK_DISTANCE_TARGETS, RIP_TAG, RugbyNote, TACKLE_SKILLS,
    cohort_standard, kick_distance_target, render_notes,
};
pub use ratings::{
    BASE_RATINGS, CONTACT_SKILLS, DEFAULT_RATING, LevelFilter, RATING_ADJUSTMENTS,
    RatingAdjustment, RatingEffect, TACTICAL_SKILLS, THRESHOLD_MARGIN, adjustments_for,
    base_rating, lookup_base_rating,
};
pub use skills::{
    AGE_GROUPS, ALL_GENDER_SKILLS, GenderPolicy, KICKING_SKILLS, LEVELS_BY_AGE, SHARED_AGES,
    SKILL_FAMILIES, SPLIT_AGES, SPLIT_FROM_U14_SKILLS, SkillFamily, family_of, gender_policy,
    levels_for_age, skills,
};
