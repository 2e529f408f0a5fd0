//! Irish dancing benchmark tables.
//!
//! Competition grades (Beginner through Open Championship) are folded into
//! the four database levels. Each age group offers the grades its dancers
//! can enter, and every record note quotes the grade label.

use pdp_model::{AgeGroup, RatingLevel};

pub const SPORT_CODE: &str = "irish_dancing";

pub const OUTPUT_FILE: &str = "irish-dancing-benchmarks-IMPORT.json";

pub const AGE_GROUPS: &[AgeGroup] = &[
    AgeGroup::U6,
    AgeGroup::U8,
    AgeGroup::U10,
    AgeGroup::U12,
    AgeGroup::U14,
    AgeGroup::U16,
    AgeGroup::U18,
    AgeGroup::Adult,
];

/// A database level paired with the competition grade it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelGrade {
    pub level: RatingLevel,
    pub grade: &'static str,
}

const fn grade(level: RatingLevel, grade: &'static str) -> LevelGrade {
    LevelGrade { level, grade }
}

const BEGINNER: LevelGrade = grade(RatingLevel::Recreational, "Beginner");
const ADVANCED_BEGINNER: LevelGrade = grade(RatingLevel::Development, "Advanced Beginner");
const NOVICE_PRIZEWINNER: LevelGrade = grade(RatingLevel::Competitive, "Novice/Prizewinner");
const CHAMPIONSHIP: LevelGrade = grade(RatingLevel::Elite, "Preliminary/Open Championship");

const SENIOR_GRADES: &[LevelGrade] = &[BEGINNER, ADVANCED_BEGINNER, NOVICE_PRIZEWINNER, CHAMPIONSHIP];

pub const LEVELS_BY_AGE: &[(AgeGroup, &[LevelGrade])] = &[
    (AgeGroup::U6, &[BEGINNER, ADVANCED_BEGINNER]),
    (
        AgeGroup::U8,
        &[
            BEGINNER,
            ADVANCED_BEGINNER,
            grade(RatingLevel::Competitive, "Novice"),
        ],
    ),
    (AgeGroup::U10, &[BEGINNER, ADVANCED_BEGINNER, NOVICE_PRIZEWINNER]),
    (
        AgeGroup::U12,
        &[
            BEGINNER,
            ADVANCED_BEGINNER,
            NOVICE_PRIZEWINNER,
            grade(RatingLevel::Elite, "Preliminary Championship"),
        ],
    ),
    (AgeGroup::U14, SENIOR_GRADES),
    (AgeGroup::U16, SENIOR_GRADES),
    (AgeGroup::U18, SENIOR_GRADES),
    (AgeGroup::Adult, SENIOR_GRADES),
];

pub fn levels_for_age(age_group: AgeGroup) -> &'static [LevelGrade] {
    LEVELS_BY_AGE
        .iter()
        .find(|(age, _)| *age == age_group)
        .map_or(&[], |(_, grades)| *grades)
}

/// Expected rating with its three thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingBand {
    pub expected: f64,
    pub min_acceptable: f64,
    pub developing: f64,
    pub excellent: f64,
}

const fn band(expected: f64, min_acceptable: f64, developing: f64, excellent: f64) -> RatingBand {
    RatingBand {
        expected,
        min_acceptable,
        developing,
        excellent,
    }
}

pub const RECREATIONAL_BAND: RatingBand = band(1.5, 1.0, 1.5, 2.0);
pub const DEVELOPMENT_BAND: RatingBand = band(2.0, 1.5, 2.0, 2.5);
/// Competitive band for arm and upper-body carriage.
pub const COMPETITIVE_CARRIAGE_BAND: RatingBand = band(3.0, 2.0, 3.0, 4.0);
pub const COMPETITIVE_BAND: RatingBand = band(3.5, 2.5, 3.5, 4.5);
/// Elite band for arm and upper-body carriage.
pub const ELITE_CARRIAGE_BAND: RatingBand = band(4.0, 3.0, 4.0, 5.0);
pub const ELITE_BAND: RatingBand = band(4.5, 3.5, 4.5, 5.0);

/// Per-skill bands and descriptions.
///
/// Recreational and development bands are shared by every skill.
/// `descriptions` is in level order: recreational, development,
/// competitive, elite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillStandard {
    pub skill: &'static str,
    pub competitive: RatingBand,
    pub elite: RatingBand,
    pub descriptions: [&'static str; 4],
}

impl SkillStandard {
    pub fn band(&self, level: RatingLevel) -> RatingBand {
        match level {
            RatingLevel::Recreational => RECREATIONAL_BAND,
            RatingLevel::Development => DEVELOPMENT_BAND,
            RatingLevel::Competitive => self.competitive,
            RatingLevel::Elite => self.elite,
        }
    }

    pub fn description(&self, level: RatingLevel) -> &'static str {
        match level {
            RatingLevel::Recreational => self.descriptions[0],
            RatingLevel::Development => self.descriptions[1],
            RatingLevel::Competitive => self.descriptions[2],
            RatingLevel::Elite => self.descriptions[3],
        }
    }
}

const fn standard(skill: &'static str, descriptions: [&'static str; 4]) -> SkillStandard {
    SkillStandard {
        skill,
        competitive: COMPETITIVE_BAND,
        elite: ELITE_BAND,
        descriptions,
    }
}

/// Skills in enumeration order.
pub const SKILL_STANDARDS: &[SkillStandard] = &[
    SkillStandard {
        skill: "Upper Body Control",
        competitive: COMPETITIVE_CARRIAGE_BAND,
        elite: ELITE_CARRIAGE_BAND,
        descriptions: [
            "keeping arms at sides",
            "consistent arm control",
            "controlled stillness with choreography",
            "perfect stillness under pressure",
        ],
    },
    SkillStandard {
        skill: "Arm Placement",
        competitive: COMPETITIVE_CARRIAGE_BAND,
        elite: ELITE_CARRIAGE_BAND,
        descriptions: [
            "learning natural arm position",
            "relaxed placement at sides",
            "refined placement with flow",
            "seamless integration with movement",
        ],
    },
    SkillStandard {
        skill: "Shoulder Position",
        competitive: COMPETITIVE_CARRIAGE_BAND,
        elite: ELITE_BAND,
        descriptions: [
            "beginning to hold level shoulders",
            "mostly level shoulders",
            "consistently square shoulders",
            "perfect shoulder alignment at all speeds",
        ],
    },
    standard(
        "Head Position",
        [
            "learning to hold head up",
            "consistent upward gaze",
            "confident carriage with focus",
            "regal presence and control",
        ],
    ),
    standard(
        "Back Alignment",
        [
            "beginning postural awareness",
            "upright posture during basics",
            "strong straight back in all movements",
            "perfect alignment under high-speed demand",
        ],
    ),
    standard(
        "Turnout",
        [
            "introduction to external rotation",
            "developing turnout in basics",
            "strong turnout from hips",
            "maximum turnout with control",
        ],
    ),
    standard(
        "Toe Point",
        [
            "learning to point toes",
            "consistent point in basic steps",
            "sharp point through arch",
            "extreme extension with power",
        ],
    ),
    standard(
        "Crossing at Knees",
        [
            "introduction to leg crossing",
            "basic crossing technique",
            "tight knee crossing at speed",
            "perfect crossing under maximum demand",
        ],
    ),
    standard(
        "Weight Placement",
        [
            "learning forward weight",
            "forward balance in routines",
            "controlled weight shifts",
            "optimal weight placement at all times",
        ],
    ),
    standard(
        "Elevation on Toes",
        [
            "learning to rise on toes",
            "consistent elevation",
            "high consistent elevation",
            "maximum height with control",
        ],
    ),
    standard(
        "Lightness & Spring",
        [
            "beginning bounce in steps",
            "natural spring in movement",
            "effortless spring and bounce",
            "extraordinary lightness at high speed",
        ],
    ),
    standard(
        "Jump Height",
        [
            "learning to leave the ground",
            "moderate jump height",
            "impressive height with control",
            "maximum height with precision",
        ],
    ),
    standard(
        "Landing Control",
        [
            "learning safe landings",
            "controlled landings",
            "soft silent landings",
            "perfect landings at maximum height",
        ],
    ),
    standard(
        "Footwork Speed",
        [
            "learning basic tempo",
            "moderate speed with control",
            "fast footwork with clarity",
            "lightning speed with precision",
        ],
    ),
    standard(
        "Trebles/Toe Technique",
        [
            "introduction to trebles",
            "basic treble execution",
            "clean crisp trebles",
            "explosive trebles at speed",
        ],
    ),
    standard(
        "Rhythmic Drumming",
        [
            "learning to drum beats",
            "basic drumming patterns",
            "complex rhythms with clarity",
            "intricate drumming at maximum speed",
        ],
    ),
    standard(
        "Stamps & Heel Clicks",
        [
            "learning stamp technique",
            "consistent stamps and clicks",
            "powerful clear stamps",
            "explosive stamps with precision",
        ],
    ),
    standard(
        "Precision & Clarity",
        [
            "learning clean movements",
            "mostly clear execution",
            "sharp precise movements",
            "crystal clear at maximum speed",
        ],
    ),
    standard(
        "Rhythm & Timing",
        [
            "basic rhythm awareness",
            "consistent timing",
            "perfect timing with music",
            "impeccable rhythm at championship level",
        ],
    ),
    standard(
        "Musicality",
        [
            "beginning to hear music structure",
            "following musical phrases",
            "expressive musical interpretation",
            "exceptional musical connection",
        ],
    ),
    standard(
        "Flow & Continuity",
        [
            "learning to connect steps",
            "smooth transitions",
            "seamless flow throughout",
            "effortless continuity at peak difficulty",
        ],
    ),
    standard(
        "Performance Quality",
        [
            "building confidence",
            "comfortable performing",
            "confident engaging performance",
            "commanding championship presence",
        ],
    ),
    standard(
        "Stage Presence",
        [
            "learning to face audience",
            "comfortable on stage",
            "strong stage command",
            "magnetic championship presence",
        ],
    ),
    standard(
        "Facial Expression",
        [
            "learning to smile",
            "natural pleasant expression",
            "engaging expressive face",
            "captivating performance face",
        ],
    ),
    standard(
        "Stamina & Endurance",
        [
            "building basic fitness",
            "completing full routines",
            "strong throughout multiple dances",
            "championship endurance at peak speed",
        ],
    ),
];

pub fn skill_standard(skill: &str) -> Option<&'static SkillStandard> {
    SKILL_STANDARDS.iter().find(|standard| standard.skill == skill)
}
