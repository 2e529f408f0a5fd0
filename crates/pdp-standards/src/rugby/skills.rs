//! Rugby skill catalog, age groups and gender scopes.

use pdp_model::{AgeGroup, GenderScope, RatingLevel};

/// A named family of related skills.
#[derive(Debug, Clone, Copy)]
pub struct SkillFamily {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_FAMILIES: &[SkillFamily] = &[
    SkillFamily {
        name: "Passing & Handling",
        skills: &[
            "Pass Accuracy (Left)",
            "Pass Accuracy (Right)",
            "Pass Under Pressure",
            "Offload in Contact",
            "Draw and Pass",
            "Spiral / Long Pass",
            "Ball Security",
        ],
    },
    SkillFamily {
        name: "Catching & Receiving",
        skills: &[
            "High Ball Catching",
            "Chest / Body Catch",
            "Low Ball Pickup",
            "Catching Under Pressure",
            "Hands Ready Position",
            "Watch Ball Into Hands",
        ],
    },
    SkillFamily {
        name: "Running & Ball Carry",
        skills: &[
            "Running With Ball",
            "Evasion (Side Step)",
            "Evasion (Swerve)",
            "Dummy Pass",
            "Acceleration Into Space",
            "Ball Carry Into Contact",
            "Body Position / Balance",
        ],
    },
    SkillFamily {
        name: "Kicking",
        skills: KICKING_SKILLS,
    },
    SkillFamily {
        name: "Contact & Breakdown",
        skills: &[
            "Tackle Technique",
            "Tackle Completion",
            "Rip / Tag Technique",
            "Body Position in Contact",
            "Leg Drive Through Contact",
            "Ball Presentation",
            "Ruck Entry / Cleanout",
            "Jackaling / Turnovers",
        ],
    },
    SkillFamily {
        name: "Tactical & Game Awareness",
        skills: &[
            "Decision Making",
            "Reading Defense",
            "Positional Understanding",
            "Support Play (Attack)",
            "Support Play (Defense)",
            "Communication on Field",
            "Spatial Awareness",
            "Game Sense / Instinct",
            "Following Game Plan",
        ],
    },
];

pub const KICKING_SKILLS: &[&str] = &[
    "Punt Kick (Left)",
    "Punt Kick (Right)",
    "Grubber Kick",
    "Drop Kick",
    "Place Kicking",
    "Kicking Distance",
    "Kick Accuracy",
];

/// All skills in family order.
pub fn skills() -> impl Iterator<Item = &'static str> {
    SKILL_FAMILIES
        .iter()
        .flat_map(|family| family.skills.iter().copied())
}

pub fn family_of(skill: &str) -> Option<&'static SkillFamily> {
    SKILL_FAMILIES
        .iter()
        .find(|family| family.skills.contains(&skill))
}

pub const AGE_GROUPS: &[AgeGroup] = &[
    AgeGroup::U10,
    AgeGroup::U12,
    AgeGroup::U14,
    AgeGroup::U16,
    AgeGroup::U18,
    AgeGroup::Senior,
];

/// Levels offered at each age group.
pub const LEVELS_BY_AGE: &[(AgeGroup, &[RatingLevel])] = &[
    (AgeGroup::U10, &[RatingLevel::Recreational]),
    (
        AgeGroup::U12,
        &[RatingLevel::Recreational, RatingLevel::Competitive],
    ),
    (AgeGroup::U14, FULL_LEVELS),
    (AgeGroup::U16, FULL_LEVELS),
    (AgeGroup::U18, FULL_LEVELS),
    (AgeGroup::Senior, FULL_LEVELS),
];

const FULL_LEVELS: &[RatingLevel] = &[
    RatingLevel::Recreational,
    RatingLevel::Competitive,
    RatingLevel::Elite,
];

/// Levels offered at an age group. Unknown ages offer none.
pub fn levels_for_age(age_group: AgeGroup) -> &'static [RatingLevel] {
    LEVELS_BY_AGE
        .iter()
        .find(|(age, _)| *age == age_group)
        .map_or(&[], |(_, levels)| *levels)
}

/// Technical and tactical skills benchmarked without a gender split.
pub const ALL_GENDER_SKILLS: &[&str] = &[
    "Pass Accuracy (Left)",
    "Pass Accuracy (Right)",
    "Ball Security",
    "Chest / Body Catch",
    "Hands Ready Position",
    "Watch Ball Into Hands",
    "Decision Making",
    "Reading Defense",
    "Positional Understanding",
    "Support Play (Attack)",
    "Support Play (Defense)",
    "Communication on Field",
    "Spatial Awareness",
    "Game Sense / Instinct",
    "Following Game Plan",
];

/// Skills with a strength, power or speed component that split by gender
/// from U14.
pub const SPLIT_FROM_U14_SKILLS: &[&str] = &[
    "Tackle Technique",
    "Tackle Completion",
    "Body Position in Contact",
    "Leg Drive Through Contact",
    "Ball Presentation",
    "Ruck Entry / Cleanout",
    "Jackaling / Turnovers",
    "Offload in Contact",
    "Kicking Distance",
    "Punt Kick (Left)",
    "Punt Kick (Right)",
    "Evasion (Side Step)",
    "Evasion (Swerve)",
    "Pass Under Pressure",
];

pub const SPLIT_AGES: &[AgeGroup] = &[
    AgeGroup::U14,
    AgeGroup::U16,
    AgeGroup::U18,
    AgeGroup::Senior,
];

/// Ages where skills without an explicit policy stay shared.
pub const SHARED_AGES: &[AgeGroup] = &[AgeGroup::U10, AgeGroup::U12];

const SHARED: &[GenderScope] = &[GenderScope::All];
const SPLIT: &[GenderScope] = &[GenderScope::Male, GenderScope::Female];

/// How a skill's benchmarks divide by gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenderPolicy {
    /// One shared benchmark at every age.
    Shared,
    /// Split at the listed ages, shared elsewhere.
    SplitAt(&'static [AgeGroup]),
    /// Shared at the listed ages, split elsewhere.
    SharedAt(&'static [AgeGroup]),
}

impl GenderPolicy {
    pub fn scopes(&self, age_group: AgeGroup) -> &'static [GenderScope] {
        match self {
            GenderPolicy::Shared => SHARED,
            GenderPolicy::SplitAt(ages) if ages.contains(&age_group) => SPLIT,
            GenderPolicy::SplitAt(_) => SHARED,
            GenderPolicy::SharedAt(ages) if ages.contains(&age_group) => SHARED,
            GenderPolicy::SharedAt(_) => SPLIT,
        }
    }
}

pub fn gender_policy(skill: &str) -> GenderPolicy {
    if ALL_GENDER_SKILLS.contains(&skill) {
        GenderPolicy::Shared
    } else if SPLIT_FROM_U14_SKILLS.contains(&skill) {
        GenderPolicy::SplitAt(SPLIT_AGES)
    } else {
        GenderPolicy::SharedAt(SHARED_AGES)
    }
}
