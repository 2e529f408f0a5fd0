//! Expected 1-5 level by age group and competitive level.

use pdp_model::{AgeGroup, CompetitiveLevel};

/// Level used when an (age group, competitive level) pair has no entry.
pub const DEFAULT_EXPECTED_LEVEL: u8 = 2;

/// Highest level on the athletics scale.
pub const MAX_LEVEL: u8 = 5;

/// Lowest level on the athletics scale.
pub const MIN_LEVEL: u8 = 1;

pub const EXPECTED_LEVELS: &[(AgeGroup, &[(CompetitiveLevel, u8)])] = &[
    // Foundation, fun, multi-event
    (AgeGroup::U10, &[(CompetitiveLevel::Developmental, 1)]),
    // Basic fundamentals
    (
        AgeGroup::U12,
        &[
            (CompetitiveLevel::Developmental, 2),
            (CompetitiveLevel::Competitive, 2),
        ],
    ),
    // Specialization begins
    (
        AgeGroup::U14,
        &[
            (CompetitiveLevel::Developmental, 2),
            (CompetitiveLevel::Competitive, 3),
            (CompetitiveLevel::Elite, 3),
        ],
    ),
    // Technical refinement
    (
        AgeGroup::U16,
        &[
            (CompetitiveLevel::Developmental, 2),
            (CompetitiveLevel::Competitive, 3),
            (CompetitiveLevel::Elite, 4),
        ],
    ),
    // Competition development
    (
        AgeGroup::U18,
        &[
            (CompetitiveLevel::Developmental, 3),
            (CompetitiveLevel::Competitive, 3),
            (CompetitiveLevel::Elite, 4),
        ],
    ),
    // Approaching peak
    (
        AgeGroup::U20,
        &[
            (CompetitiveLevel::Developmental, 3),
            (CompetitiveLevel::Competitive, 4),
            (CompetitiveLevel::Elite, 4),
        ],
    ),
    // Peak performance
    (
        AgeGroup::Senior,
        &[
            (CompetitiveLevel::Developmental, 3),
            (CompetitiveLevel::Competitive, 4),
            (CompetitiveLevel::Elite, 5),
        ],
    ),
];

/// Table entry for the pair, if one is declared.
pub fn lookup_expected_level(age_group: AgeGroup, level: CompetitiveLevel) -> Option<u8> {
    EXPECTED_LEVELS
        .iter()
        .find(|(age, _)| *age == age_group)
        .and_then(|(_, levels)| levels.iter().find(|(lvl, _)| *lvl == level))
        .map(|(_, expected)| *expected)
}

/// Expected level, falling back to [`DEFAULT_EXPECTED_LEVEL`].
pub fn expected_level(age_group: AgeGroup, level: CompetitiveLevel) -> u8 {
    lookup_expected_level(age_group, level).unwrap_or(DEFAULT_EXPECTED_LEVEL)
}
