//! Curated technical indicators per skill and level.
//!
//! Only skills with research-backed descriptors are listed. Every other
//! skill gets a templated fallback at synthesis time.

pub const TECHNICAL_INDICATORS: &[(&str, &[(u8, &[&str])])] = &[(
    "Posture & Alignment",
    &[
        (
            1,
            &[
                "Aware of posture but inconsistent execution",
                "Often runs with excessive forward bend or sitting back with hips",
                "Tends to look down at feet rather than ahead",
                "Shoulders frequently tense and raised toward ears",
            ],
        ),
        (
            2,
            &[
                "Maintains reasonable posture during easy running with occasional lapses",
                "Can implement coaching cues with reminders",
                "Generally keeps head position neutral during steady efforts",
                "Posture breaks down during intense efforts or late in runs",
            ],
        ),
        (
            3,
            &[
                "Consistently maintains good posture during training runs",
                "Proper ankle lean and spinal alignment visible",
                "Self-corrects when posture slips without external cueing",
                "Eyes focused forward 10-20 meters ahead, shoulders relaxed",
            ],
        ),
        (
            4,
            &[
                "Excellent posture across all training intensities and race situations",
                "Strong core stability preventing energy leaks",
                "Maintains optimal alignment throughout races and hard workouts",
                "Serves as positive example for training partners",
            ],
        ),
        (
            5,
            &[
                "Optimal biomechanics automatic across all situations",
                "Maintains perfect posture even in extreme fatigue states",
                "World-class running economy through flawless alignment",
                "Serves as biomechanical model for other athletes",
            ],
        ),
    ],
)];

/// Curated levels for a skill, or `None` when the skill is not curated.
pub fn curated_levels(skill: &str) -> Option<&'static [(u8, &'static [&'static str])]> {
    TECHNICAL_INDICATORS
        .iter()
        .find(|(name, _)| *name == skill)
        .map(|(_, levels)| *levels)
}
