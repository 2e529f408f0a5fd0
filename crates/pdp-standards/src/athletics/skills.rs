//! Athletics skill catalog and cohort axes.

use pdp_model::{AgeGroup, CompetitiveLevel, EventGroup, Gender};

/// Age groups in enumeration order.
pub const AGE_GROUPS: &[AgeGroup] = &[
    AgeGroup::U10,
    AgeGroup::U12,
    AgeGroup::U14,
    AgeGroup::U16,
    AgeGroup::U18,
    AgeGroup::U20,
    AgeGroup::Senior,
];

pub const GENDERS: &[Gender] = &[Gender::Male, Gender::Female];

pub const COMPETITIVE_LEVELS: &[CompetitiveLevel] = &[
    CompetitiveLevel::Developmental,
    CompetitiveLevel::Competitive,
    CompetitiveLevel::Elite,
];

/// Event groups used when a skill has no explicit mapping.
pub const DEFAULT_EVENT_GROUPS: &[EventGroup] = &[EventGroup::General];

/// How a category assigns event groups to its skills.
#[derive(Debug, Clone, Copy)]
pub enum EventGroupScope {
    /// Every skill in the category applies to the same groups.
    Uniform(&'static [EventGroup]),
    /// Each skill lists its own groups.
    PerSkill(&'static [(&'static str, &'static [EventGroup])]),
}

/// A named group of skills sharing an event-group policy.
#[derive(Debug, Clone, Copy)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub event_groups: EventGroupScope,
}

impl SkillCategory {
    /// Event groups a skill in this category is benchmarked against.
    ///
    /// A uniform list applies unconditionally. A per-skill map without an
    /// entry for `skill` falls back to [`DEFAULT_EVENT_GROUPS`].
    pub fn event_groups_for(&self, skill: &str) -> &'static [EventGroup] {
        match self.event_groups {
            EventGroupScope::Uniform(groups) => groups,
            EventGroupScope::PerSkill(entries) => entries
                .iter()
                .find(|(name, _)| *name == skill)
                .map_or(DEFAULT_EVENT_GROUPS, |(_, groups)| *groups),
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(&skill)
    }
}

/// A single skill with its resolved category and event groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillDefinition {
    pub name: &'static str,
    pub category: &'static str,
    pub event_groups: &'static [EventGroup],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Running Mechanics",
        skills: &[
            "Posture & Alignment",
            "Arm Action & Mechanics",
            "Hip Extension & Drive",
            "Knee Drive & Lift",
            "Foot Strike Pattern",
            "Ground Contact Time",
            "Stride Length",
            "Stride Frequency",
            "Core Stability During Running",
            "Ankle Control & Stiffness",
        ],
        event_groups: EventGroupScope::Uniform(&[EventGroup::General]),
    },
    SkillCategory {
        name: "Speed & Power",
        skills: &[
            "Acceleration Ability",
            "Maximum Velocity",
            "Speed Endurance",
            "Power Output",
            "Starting Blocks Technique",
        ],
        event_groups: EventGroupScope::PerSkill(&[
            ("Acceleration Ability", &[EventGroup::General]),
            ("Maximum Velocity", &[EventGroup::Sprints]),
            (
                "Speed Endurance",
                &[EventGroup::Sprints, EventGroup::MiddleDistance],
            ),
            ("Power Output", &[EventGroup::Sprints]),
            ("Starting Blocks Technique", &[EventGroup::Sprints]),
        ]),
    },
    SkillCategory {
        name: "Endurance & Physiological",
        skills: &[
            "Aerobic Capacity (VO2 Max)",
            "Lactate Threshold",
            "Running Economy",
            "Lactate Tolerance",
            "Recovery Ability",
        ],
        event_groups: EventGroupScope::PerSkill(&[
            (
                "Aerobic Capacity (VO2 Max)",
                &[EventGroup::MiddleDistance, EventGroup::LongDistance],
            ),
            (
                "Lactate Threshold",
                &[EventGroup::MiddleDistance, EventGroup::LongDistance],
            ),
            ("Running Economy", &[EventGroup::General]),
            (
                "Lactate Tolerance",
                &[EventGroup::Sprints, EventGroup::MiddleDistance],
            ),
            ("Recovery Ability", &[EventGroup::General]),
        ]),
    },
    SkillCategory {
        name: "Technical & Event-Specific",
        skills: &[
            "Hurdle Clearance Technique",
            "Relay Handoff Technique",
            "Cornering Technique",
            "Finishing Technique",
            "Starting Stance & Reaction",
        ],
        event_groups: EventGroupScope::PerSkill(&[
            ("Hurdle Clearance Technique", &[EventGroup::Hurdles]),
            ("Relay Handoff Technique", &[EventGroup::General]),
            ("Cornering Technique", &[EventGroup::Sprints]),
            ("Finishing Technique", &[EventGroup::General]),
            ("Starting Stance & Reaction", &[EventGroup::General]),
        ]),
    },
    SkillCategory {
        name: "Tactical & Mental",
        skills: &[
            "Race Strategy & Tactics",
            "Pacing Judgment",
            "Competitive Mindset",
            "Focus & Concentration",
            "Visualization & Mental Preparation",
        ],
        event_groups: EventGroupScope::Uniform(&[EventGroup::General]),
    },
];

/// All skills in catalog order (category order, then skill order).
pub fn skill_definitions() -> impl Iterator<Item = SkillDefinition> {
    SKILL_CATEGORIES.iter().flat_map(|category| {
        category.skills.iter().map(move |&name| SkillDefinition {
            name,
            category: category.name,
            event_groups: category.event_groups_for(name),
        })
    })
}

/// Looks up the category that declares `skill`.
pub fn category_of(skill: &str) -> Option<&'static SkillCategory> {
    SKILL_CATEGORIES
        .iter()
        .find(|category| category.contains(skill))
}
