//! Performance time bands by distance, age group, gender and level.
//!
//! Bands are advisory text ("<10.8", "2:30-2:50") quoted into generated
//! performance indicators; they are never parsed.

use pdp_model::{AgeGroup, CompetitiveLevel, EventGroup, Gender};

/// Time bands for the three competitive levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelBands {
    pub developmental: &'static str,
    pub competitive: &'static str,
    pub elite: &'static str,
}

impl LevelBands {
    pub fn for_level(&self, level: CompetitiveLevel) -> &'static str {
        match level {
            CompetitiveLevel::Developmental => self.developmental,
            CompetitiveLevel::Competitive => self.competitive,
            CompetitiveLevel::Elite => self.elite,
        }
    }
}

/// Male and female bands for one age group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeStandards {
    pub age_group: AgeGroup,
    pub male: LevelBands,
    pub female: LevelBands,
}

impl AgeStandards {
    pub fn for_gender(&self, gender: Gender) -> &LevelBands {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }
}

/// Standards for one race distance.
#[derive(Debug, Clone, Copy)]
pub struct DistanceStandards {
    pub distance: &'static str,
    pub ages: &'static [AgeStandards],
}

const fn age(age_group: AgeGroup, male: [&'static str; 3], female: [&'static str; 3]) -> AgeStandards {
    AgeStandards {
        age_group,
        male: LevelBands {
            developmental: male[0],
            competitive: male[1],
            elite: male[2],
        },
        female: LevelBands {
            developmental: female[0],
            competitive: female[1],
            elite: female[2],
        },
    }
}

pub const PERFORMANCE_STANDARDS: &[DistanceStandards] = &[
    DistanceStandards {
        distance: "100m",
        ages: &[
            age(AgeGroup::U12, [">16.0", "14.5-16.0", "<14.5"], [">17.0", "15.0-17.0", "<15.0"]),
            age(AgeGroup::U14, [">14.5", "12.8-14.5", "<12.8"], [">15.0", "13.3-15.0", "<13.3"]),
            age(AgeGroup::U16, [">12.5", "11.5-12.5", "<11.5"], [">13.5", "12.5-13.5", "<12.5"]),
            age(AgeGroup::U18, [">11.8", "11.0-11.8", "<10.8"], [">13.0", "12.0-13.0", "<11.8"]),
            age(AgeGroup::U20, [">11.5", "10.8-11.5", "<10.5"], [">12.8", "12.0-12.8", "<11.6"]),
            age(AgeGroup::Senior, [">12.0", "10.8-12.0", "<10.0"], [">13.5", "12.0-13.5", "<11.0"]),
        ],
    },
    DistanceStandards {
        distance: "400m",
        ages: &[
            age(AgeGroup::U14, [">64", "56-64", "<56"], [">69", "62-69", "<62"]),
            age(AgeGroup::U16, [">56", "52-56", "<50"], [">64", "59-64", "<57"]),
            age(AgeGroup::U18, [">52", "49-52", "<47.5"], [">61", "57-61", "<54"]),
            age(AgeGroup::U20, [">50", "47-50", "<46.5"], [">58", "53-58", "<52"]),
            age(AgeGroup::Senior, [">52", "48-52", "<45"], [">60", "55-60", "<50"]),
        ],
    },
    DistanceStandards {
        distance: "800m",
        ages: &[
            age(AgeGroup::U12, [">2:50", "2:30-2:50", "<2:30"], [">3:00", "2:40-3:00", "<2:40"]),
            age(AgeGroup::U14, [">2:40", "2:15-2:40", "<2:10"], [">2:50", "2:25-2:50", "<2:18"]),
            age(AgeGroup::U16, [">2:15", "2:00-2:15", "<1:55"], [">2:30", "2:15-2:30", "<2:08"]),
            age(AgeGroup::U18, [">2:05", "1:54-2:05", "<1:50"], [">2:20", "2:10-2:20", "<2:05"]),
            age(AgeGroup::U20, [">2:00", "1:52-2:00", "<1:48"], [">2:15", "2:08-2:15", "<2:03"]),
            age(AgeGroup::Senior, [">2:05", "1:50-2:05", "<1:44"], [">2:20", "2:05-2:20", "<1:58"]),
        ],
    },
    DistanceStandards {
        distance: "1500m",
        ages: &[
            age(AgeGroup::U14, [">5:15", "4:45-5:15", "<4:30"], [">5:45", "5:10-5:45", "<4:55"]),
            age(AgeGroup::U16, [">4:45", "4:15-4:45", "<4:05"], [">5:20", "4:50-5:20", "<4:35"]),
            age(AgeGroup::U18, [">4:20", "4:00-4:20", "<3:52"], [">5:00", "4:35-5:00", "<4:22"]),
            age(AgeGroup::U20, [">4:10", "3:55-4:10", "<3:45"], [">4:50", "4:30-4:50", "<4:15"]),
            age(AgeGroup::Senior, [">4:20", "3:50-4:20", "<3:33"], [">5:05", "4:25-5:05", "<3:57"]),
        ],
    },
    DistanceStandards {
        distance: "5000m",
        ages: &[
            age(AgeGroup::U16, [">17:30", "16:00-17:30", "<15:30"], [">19:30", "18:00-19:30", "<17:30"]),
            age(AgeGroup::U18, [">17:00", "15:30-17:00", "<14:50"], [">19:30", "17:30-19:30", "<16:30"]),
            age(AgeGroup::U20, [">16:00", "14:45-16:00", "<14:00"], [">18:00", "17:00-18:00", "<15:45"]),
            age(AgeGroup::Senior, [">17:00", "14:45-17:00", "<13:00"], [">20:00", "16:30-20:00", "<14:25"]),
        ],
    },
];

/// A skill whose benchmark is tied to a timed race when assessed in an
/// event group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimedEventCorrelation {
    pub skill: &'static str,
    pub event_group: EventGroup,
    pub distance: &'static str,
}

pub const TIMED_EVENT_CORRELATIONS: &[TimedEventCorrelation] = &[TimedEventCorrelation {
    skill: "Acceleration Ability",
    event_group: EventGroup::Sprints,
    distance: "100m",
}];

/// Time band for a cohort, if the distance is run at that age.
pub fn performance_standard(
    distance: &str,
    age_group: AgeGroup,
    gender: Gender,
    level: CompetitiveLevel,
) -> Option<&'static str> {
    PERFORMANCE_STANDARDS
        .iter()
        .find(|standards| standards.distance == distance)?
        .ages
        .iter()
        .find(|ages| ages.age_group == age_group)
        .map(|ages| ages.for_gender(gender).for_level(level))
}

/// Timed-event correlation for a skill in an event group.
pub fn timed_event_for(skill: &str, event_group: EventGroup) -> Option<&'static TimedEventCorrelation> {
    TIMED_EVENT_CORRELATIONS
        .iter()
        .find(|entry| entry.skill == skill && entry.event_group == event_group)
}
