//! Coaching notes attached to rugby benchmarks.
//!
//! Notes are chosen as [`RugbyNote`] values and only turned into text when a
//! record is assembled.

use std::fmt;

use pdp_model::{AgeGroup, GenderScope, RatingLevel};

/// Skills where U10 players move from tag to contact.
pub const CONTACT_TRANSITION_SKILLS: &[&str] = &[
    "Tackle Technique",
    "Tackle Completion",
    "Body Position in Contact",
    "Ball Carry Into Contact",
];

pub const TACKLE_SKILLS: &[&str] = &["Tackle Technique", "Tackle Completion"];

/// Kicking skills introduced at U12. Distance and accuracy come later.
pub const INTRODUCTORY_KICKS: &[&str] = &[
    "Punt Kick (Left)",
    "Punt Kick (Right)",
    "Grubber Kick",
    "Drop Kick",
    "Place Kicking",
];

pub const BILATERAL_PASSING_SKILLS: &[&str] = &["Pass Accuracy (Left)", "Pass Accuracy (Right)"];

pub const KICK_DISTANCE_SKILLS: &[&str] =
    &["Kicking Distance", "Punt Kick (Left)", "Punt Kick (Right)"];

pub const JACKALING: &str = "Jackaling / Turnovers";
pub const RIP_TAG: &str = "Rip / Tag Technique";

/// Standard of play expected per cohort from U14 upwards.
pub const COHORT_STANDARDS: &[(AgeGroup, &[(RatingLevel, &str)])] = &[
    (
        AgeGroup::U14,
        &[
            (RatingLevel::Recreational, "Club level - functional competence"),
            (
                RatingLevel::Competitive,
                "Representative level - strong skills under pressure",
            ),
            (RatingLevel::Elite, "County/development squad standard"),
        ],
    ),
    (
        AgeGroup::U16,
        &[
            (RatingLevel::Recreational, "Social club level - competent execution"),
            (
                RatingLevel::Competitive,
                "Representative/development level - consistent performance",
            ),
            (
                RatingLevel::Elite,
                "Academy selection standard - professional potential",
            ),
        ],
    ),
    (
        AgeGroup::U18,
        &[
            (RatingLevel::Recreational, "Adult baseline - functional rugby"),
            (RatingLevel::Competitive, "Strong club/county level"),
            (RatingLevel::Elite, "Academy/U20 level - professional pathway"),
        ],
    ),
    (
        AgeGroup::Senior,
        &[
            (
                RatingLevel::Recreational,
                "Social/club rugby - competent adult standard",
            ),
            (RatingLevel::Competitive, "High-level club/county competition"),
            (RatingLevel::Elite, "Professional/international standard"),
        ],
    ),
];

pub fn cohort_standard(age_group: AgeGroup, level: RatingLevel) -> Option<&'static str> {
    COHORT_STANDARDS
        .iter()
        .find(|(age, _)| *age == age_group)
        .and_then(|(_, levels)| levels.iter().find(|(lvl, _)| *lvl == level))
        .map(|(_, text)| *text)
}

/// Elite kick distance targets as (age group, male, female).
pub const KICK_DISTANCE_TARGETS: &[(AgeGroup, &str, &str)] = &[
    (AgeGroup::U16, "45m+ expected", "40m+ expected"),
    (
        AgeGroup::Senior,
        "50m+ (backs), 40m+ (forwards)",
        "45m+ (backs), 35m+ (forwards)",
    ),
];

pub fn kick_distance_target(age_group: AgeGroup, gender: GenderScope) -> Option<&'static str> {
    let (_, male, female) = KICK_DISTANCE_TARGETS
        .iter()
        .find(|(age, _, _)| *age == age_group)?;
    match gender {
        GenderScope::Male => Some(*male),
        GenderScope::Female => Some(*female),
        GenderScope::All => None,
    }
}

/// A single coaching note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RugbyNote {
    ContactTransition,
    KickingNotIntroduced,
    FoundationConcepts,
    FoundationTechnique,
    ProgressiveContact,
    KickingIntroduction,
    RepresentativeDeveloping,
    FullContact,
    /// Standard of play for a cohort, see [`COHORT_STANDARDS`].
    CohortStandard {
        age_group: AgeGroup,
        level: RatingLevel,
    },
    BilateralPassing,
    HeadPositionSafety,
    TagPrimarySkill,
    StripTechnique,
    /// Elite distance target, see [`KICK_DISTANCE_TARGETS`].
    KickDistance {
        age_group: AgeGroup,
        gender: GenderScope,
    },
    JackalNotIntroduced,
    JackalSpecialist,
}

impl RugbyNote {
    pub fn text(&self) -> &'static str {
        match self {
            RugbyNote::ContactTransition => "Tag to contact transition - safe technique emphasis",
            RugbyNote::KickingNotIntroduced => "Not yet introduced - optional if included",
            RugbyNote::FoundationConcepts => "Foundation age - learning basic concepts",
            RugbyNote::FoundationTechnique => "Foundation age - learning fundamental technique",
            RugbyNote::ProgressiveContact => {
                "Progressive contact with safety restrictions. Walking to jogging speed."
            }
            RugbyNote::KickingIntroduction => "Introduction to kicking - focus on technique",
            RugbyNote::RepresentativeDeveloping => {
                "Above average for age - representative standard developing"
            }
            RugbyNote::FullContact => {
                "Full contact with age-appropriate restrictions. Safe technique at game speed."
            }
            RugbyNote::CohortStandard { age_group, level } => {
                cohort_standard(*age_group, *level).unwrap_or_default()
            }
            RugbyNote::BilateralPassing => "Bilateral development essential",
            RugbyNote::HeadPositionSafety => "Head position safety critical",
            RugbyNote::TagPrimarySkill => "Tag rugby primary skill",
            RugbyNote::StripTechnique => "Strip technique in contact rugby",
            RugbyNote::KickDistance { age_group, gender } => {
                kick_distance_target(*age_group, *gender).unwrap_or_default()
            }
            RugbyNote::JackalNotIntroduced => "Not yet introduced - complex skill for older ages",
            RugbyNote::JackalSpecialist => "Specialist skill (7s, loose forwards)",
        }
    }
}

impl fmt::Display for RugbyNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Joins notes with single spaces, the way they are stored.
pub fn render_notes(notes: &[RugbyNote]) -> String {
    notes
        .iter()
        .map(RugbyNote::text)
        .collect::<Vec<_>>()
        .join(" ")
}
