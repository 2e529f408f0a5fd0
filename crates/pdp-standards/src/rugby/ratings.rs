//! Base ratings and the ordered skill adjustments layered on top.
//!
//! Adjustments run in table order and each matching rule rewrites the
//! running value, so a later rule wins over an earlier one for the same
//! skill.

use pdp_model::{AgeGroup, RatingLevel};

use super::skills::KICKING_SKILLS;

/// Rating used when an (age group, level) pair has no base entry.
pub const DEFAULT_RATING: f64 = 2.0;

/// Distance from the expected rating to the min and excellent thresholds.
pub const THRESHOLD_MARGIN: f64 = 0.5;

pub const BASE_RATINGS: &[(AgeGroup, &[(RatingLevel, f64)])] = &[
    (AgeGroup::U10, &[(RatingLevel::Recreational, 1.5)]),
    (
        AgeGroup::U12,
        &[(RatingLevel::Recreational, 2.0), (RatingLevel::Competitive, 2.5)],
    ),
    (
        AgeGroup::U14,
        &[
            (RatingLevel::Recreational, 2.5),
            (RatingLevel::Competitive, 3.0),
            (RatingLevel::Elite, 3.5),
        ],
    ),
    (
        AgeGroup::U16,
        &[
            (RatingLevel::Recreational, 3.0),
            (RatingLevel::Competitive, 3.5),
            (RatingLevel::Elite, 4.0),
        ],
    ),
    (
        AgeGroup::U18,
        &[
            (RatingLevel::Recreational, 3.0),
            (RatingLevel::Competitive, 3.5),
            (RatingLevel::Elite, 4.0),
        ],
    ),
    (
        AgeGroup::Senior,
        &[
            (RatingLevel::Recreational, 3.0),
            (RatingLevel::Competitive, 4.0),
            (RatingLevel::Elite, 4.5),
        ],
    ),
];

pub fn lookup_base_rating(age_group: AgeGroup, level: RatingLevel) -> Option<f64> {
    BASE_RATINGS
        .iter()
        .find(|(age, _)| *age == age_group)
        .and_then(|(_, levels)| levels.iter().find(|(lvl, _)| *lvl == level))
        .map(|(_, rating)| *rating)
}

/// Base rating, falling back to [`DEFAULT_RATING`].
pub fn base_rating(age_group: AgeGroup, level: RatingLevel) -> f64 {
    lookup_base_rating(age_group, level).unwrap_or(DEFAULT_RATING)
}

/// Which levels an adjustment applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelFilter {
    Any,
    Only(RatingLevel),
    Except(RatingLevel),
}

impl LevelFilter {
    pub fn matches(&self, level: RatingLevel) -> bool {
        match self {
            LevelFilter::Any => true,
            LevelFilter::Only(only) => *only == level,
            LevelFilter::Except(except) => *except != level,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingEffect {
    /// Replace the rating.
    Set(f64),
    /// Lower the rating to at most this value.
    Cap(f64),
    /// Subtract from the rating.
    Subtract(f64),
}

impl RatingEffect {
    pub fn apply(&self, rating: f64) -> f64 {
        match self {
            RatingEffect::Set(value) => *value,
            RatingEffect::Cap(value) => rating.min(*value),
            RatingEffect::Subtract(value) => rating - value,
        }
    }
}

/// One adjustment row: skills, cohort filter and effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingAdjustment {
    pub rule: &'static str,
    pub skills: &'static [&'static str],
    pub age_group: AgeGroup,
    pub levels: LevelFilter,
    pub effect: RatingEffect,
}

impl RatingAdjustment {
    pub fn applies_to(&self, skill: &str, age_group: AgeGroup, level: RatingLevel) -> bool {
        self.age_group == age_group && self.levels.matches(level) && self.skills.contains(&skill)
    }
}

/// Tactical understanding develops later than technique.
pub const TACTICAL_SKILLS: &[&str] = &[
    "Decision Making",
    "Reading Defense",
    "Positional Understanding",
    "Game Sense / Instinct",
    "Following Game Plan",
    "Spatial Awareness",
    "Communication on Field",
];

pub const CONTACT_SKILLS: &[&str] = &[
    "Tackle Technique",
    "Tackle Completion",
    "Body Position in Contact",
    "Leg Drive Through Contact",
    "Ball Presentation",
    "Ruck Entry / Cleanout",
];

const fn adjust(
    rule: &'static str,
    skills: &'static [&'static str],
    age_group: AgeGroup,
    levels: LevelFilter,
    effect: RatingEffect,
) -> RatingAdjustment {
    RatingAdjustment {
        rule,
        skills,
        age_group,
        levels,
        effect,
    }
}

pub const RATING_ADJUSTMENTS: &[RatingAdjustment] = &[
    adjust("tactical", TACTICAL_SKILLS, AgeGroup::U10, LevelFilter::Any, RatingEffect::Set(1.0)),
    adjust(
        "tactical",
        TACTICAL_SKILLS,
        AgeGroup::U12,
        LevelFilter::Only(RatingLevel::Recreational),
        RatingEffect::Subtract(0.5),
    ),
    // Tag to contact transition
    adjust("contact", CONTACT_SKILLS, AgeGroup::U10, LevelFilter::Any, RatingEffect::Set(1.5)),
    // Progressive contact
    adjust("contact", CONTACT_SKILLS, AgeGroup::U12, LevelFilter::Any, RatingEffect::Cap(2.5)),
    adjust(
        "kicking",
        KICKING_SKILLS,
        AgeGroup::U10,
        LevelFilter::Any,
        RatingEffect::Set(1.0),
    ),
    adjust(
        "kicking",
        KICKING_SKILLS,
        AgeGroup::U12,
        LevelFilter::Only(RatingLevel::Recreational),
        RatingEffect::Set(1.5),
    ),
    adjust(
        "kicking",
        KICKING_SKILLS,
        AgeGroup::U12,
        LevelFilter::Except(RatingLevel::Recreational),
        RatingEffect::Set(2.0),
    ),
    adjust(
        "offload",
        &["Offload in Contact"],
        AgeGroup::U10,
        LevelFilter::Any,
        RatingEffect::Set(1.0),
    ),
    adjust(
        "spiral pass",
        &["Spiral / Long Pass"],
        AgeGroup::U10,
        LevelFilter::Any,
        RatingEffect::Set(1.0),
    ),
    adjust(
        "spiral pass",
        &["Spiral / Long Pass"],
        AgeGroup::U12,
        LevelFilter::Any,
        RatingEffect::Cap(2.0),
    ),
    adjust(
        "jackaling",
        &["Jackaling / Turnovers"],
        AgeGroup::U10,
        LevelFilter::Any,
        RatingEffect::Set(1.0),
    ),
    adjust(
        "jackaling",
        &["Jackaling / Turnovers"],
        AgeGroup::U12,
        LevelFilter::Any,
        RatingEffect::Set(1.0),
    ),
    adjust(
        "dummy pass",
        &["Dummy Pass"],
        AgeGroup::U10,
        LevelFilter::Any,
        RatingEffect::Set(1.0),
    ),
    adjust(
        "catching under pressure",
        &["Catching Under Pressure"],
        AgeGroup::U10,
        LevelFilter::Any,
        RatingEffect::Set(1.0),
    ),
    adjust(
        "catching under pressure",
        &["Catching Under Pressure"],
        AgeGroup::U12,
        LevelFilter::Only(RatingLevel::Recreational),
        RatingEffect::Set(1.5),
    ),
    adjust(
        "ruck entry",
        &["Ruck Entry / Cleanout"],
        AgeGroup::U10,
        LevelFilter::Any,
        RatingEffect::Set(1.0),
    ),
    adjust(
        "ruck entry",
        &["Ruck Entry / Cleanout"],
        AgeGroup::U12,
        LevelFilter::Only(RatingLevel::Recreational),
        RatingEffect::Set(1.5),
    ),
];

/// Adjustments matching a cohort, in application order.
pub fn adjustments_for(
    skill: &str,
    age_group: AgeGroup,
    level: RatingLevel,
) -> impl Iterator<Item = &'static RatingAdjustment> {
    RATING_ADJUSTMENTS
        .iter()
        .filter(move |adjustment| adjustment.applies_to(skill, age_group, level))
}
