//! Combinations that are not benchmarked.
//!
//! Rules are listed in the order they were written by the coaching team.
//! Any rule matching a combination excludes it.

use pdp_model::{AgeGroup, CompetitiveLevel, EventGroup};

/// Skills with a physiological basis that is not assessed before U14.
pub const ADVANCED_PHYSIOLOGICAL_SKILLS: &[&str] = &[
    "Aerobic Capacity (VO2 Max)",
    "Lactate Threshold",
    "Running Economy",
    "Lactate Tolerance",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionRule {
    /// The age group offers only the listed competitive levels.
    LevelsOnly {
        age_group: AgeGroup,
        levels: &'static [CompetitiveLevel],
    },
    /// The competitive level does not exist at the age group.
    LevelAbsent {
        age_group: AgeGroup,
        level: CompetitiveLevel,
    },
    /// The event group is not contested at these ages.
    EventGroupNotAt {
        event_group: EventGroup,
        age_groups: &'static [AgeGroup],
    },
    /// The skills are not assessed at these ages.
    SkillsNotAt {
        skills: &'static [&'static str],
        age_groups: &'static [AgeGroup],
    },
}

impl ExclusionRule {
    pub fn description(&self) -> &'static str {
        match self {
            ExclusionRule::LevelsOnly { .. } => "age group offers a restricted set of levels",
            ExclusionRule::LevelAbsent { .. } => "level not offered at age group",
            ExclusionRule::EventGroupNotAt { .. } => "event group not contested at age group",
            ExclusionRule::SkillsNotAt { .. } => "skill not assessed at age group",
        }
    }
}

pub const EXCLUSION_RULES: &[ExclusionRule] = &[
    // U10 only has Developmental level
    ExclusionRule::LevelsOnly {
        age_group: AgeGroup::U10,
        levels: &[CompetitiveLevel::Developmental],
    },
    // U12 only has Developmental and Competitive
    ExclusionRule::LevelAbsent {
        age_group: AgeGroup::U12,
        level: CompetitiveLevel::Elite,
    },
    // Hurdles introduced at U12+
    ExclusionRule::EventGroupNotAt {
        event_group: EventGroup::Hurdles,
        age_groups: &[AgeGroup::U10],
    },
    ExclusionRule::SkillsNotAt {
        skills: &["Starting Blocks Technique"],
        age_groups: &[AgeGroup::U10, AgeGroup::U12],
    },
    ExclusionRule::SkillsNotAt {
        skills: ADVANCED_PHYSIOLOGICAL_SKILLS,
        age_groups: &[AgeGroup::U10, AgeGroup::U12],
    },
    // 5000m starts at U14
    ExclusionRule::EventGroupNotAt {
        event_group: EventGroup::LongDistance,
        age_groups: &[AgeGroup::U10, AgeGroup::U12],
    },
];
