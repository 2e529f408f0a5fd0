//! Training-volume descriptions by competitive level and age bracket.

use pdp_model::{AgeGroup, CompetitiveLevel};

/// Training descriptions for one competitive level.
///
/// Age groups in `younger_ages` get `younger`; every other age gets `older`.
#[derive(Debug, Clone, Copy)]
pub struct TrainingVolume {
    pub level: CompetitiveLevel,
    pub younger_ages: &'static [AgeGroup],
    pub younger: &'static [&'static str],
    pub older: &'static [&'static str],
}

impl TrainingVolume {
    pub fn for_age(&self, age_group: AgeGroup) -> &'static [&'static str] {
        if self.younger_ages.contains(&age_group) {
            self.younger
        } else {
            self.older
        }
    }
}

pub const TRAINING_VOLUMES: &[TrainingVolume] = &[
    TrainingVolume {
        level: CompetitiveLevel::Developmental,
        younger_ages: &[AgeGroup::U10, AgeGroup::U12],
        younger: &[
            "Fun, game-based activities",
            "Multi-event exposure",
            "1-2 sessions per week",
        ],
        older: &[
            "Regular participation for fitness/social",
            "1-2 training sessions per week",
            "Basic technical understanding",
        ],
    },
    TrainingVolume {
        level: CompetitiveLevel::Competitive,
        younger_ages: &[AgeGroup::U12, AgeGroup::U14],
        younger: &[
            "Regular structured training 3-4x per week",
            "Event preferences developing",
            "Club-level competition",
        ],
        older: &[
            "Consistent training 4-5x per week",
            "Event specialization established",
            "Regional/national competition",
        ],
    },
    TrainingVolume {
        level: CompetitiveLevel::Elite,
        younger_ages: &[AgeGroup::U14, AgeGroup::U16],
        younger: &[
            "High-level training 5-6x per week",
            "Advanced event-specific work",
            "National age-group competition",
        ],
        older: &[
            "Elite-level training 6-8x per week",
            "Specialized high-performance program",
            "International competition level",
        ],
    },
];

/// Training descriptions for a cohort.
pub fn training_volume(level: CompetitiveLevel, age_group: AgeGroup) -> &'static [&'static str] {
    TRAINING_VOLUMES
        .iter()
        .find(|volume| volume.level == level)
        .map_or(&[], |volume| volume.for_age(age_group))
}
