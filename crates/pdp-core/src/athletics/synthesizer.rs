//! Assembles athletics benchmark records.

use pdp_model::{AthleticsBenchmark, PerformanceIndicators};
use pdp_standards::athletics::{
    MAX_LEVEL, SPORT_LABEL, curated_levels, expected_level, performance_standard,
    timed_event_for, training_volume,
};

use super::Cohort;

/// Builds the record for a skill and an eligible cohort.
pub fn synthesize(skill: &str, cohort: &Cohort) -> AthleticsBenchmark {
    let expected = expected_level(cohort.age_group, cohort.level);
    AthleticsBenchmark {
        sport: SPORT_LABEL.to_string(),
        age_group: cohort.age_group,
        gender: cohort.gender,
        competitive_level: cohort.level,
        event_group: cohort.event_group,
        skill_name: skill.to_string(),
        expected_level: expected,
        performance_indicators: PerformanceIndicators {
            technical: technical_indicators(skill, expected, cohort),
            performance: performance_indicators(skill, cohort),
            training: training_indicators(cohort),
        },
        assessment_notes: assessment_notes(skill, expected, cohort),
        progression_path: progression_path(skill, expected, cohort),
    }
}

/// Curated lines for the skill at `level`, else a templated fallback.
pub fn technical_indicators(skill: &str, level: u8, cohort: &Cohort) -> Vec<String> {
    let Some(levels) = curated_levels(skill) else {
        return vec![
            format!("Level {level} technical execution for {skill}"),
            format!("Age-appropriate mechanics for {}", cohort.age_group),
            format!("Event-specific application for {}", cohort.event_group),
        ];
    };
    levels
        .iter()
        .find(|(curated, _)| *curated == level)
        .map_or_else(
            || vec![format!("Level {level} execution")],
            |(_, lines)| lines.iter().map(|line| (*line).to_string()).collect(),
        )
}

pub fn performance_indicators(skill: &str, cohort: &Cohort) -> Vec<String> {
    if let Some(correlation) = timed_event_for(skill, cohort.event_group)
        && let Some(band) = performance_standard(
            correlation.distance,
            cohort.age_group,
            cohort.gender,
            cohort.level,
        )
    {
        return vec![format!(
            "{} time: {band} reflects {}",
            correlation.distance,
            skill.to_lowercase()
        )];
    }
    vec![
        format!(
            "Performance appropriate for {} {} {} athlete",
            cohort.level.as_lower(),
            cohort.age_group,
            cohort.gender.as_str().to_lowercase()
        ),
        format!(
            "Consistent execution in {} events",
            cohort.event_group.as_lower()
        ),
    ]
}

pub fn training_indicators(cohort: &Cohort) -> Vec<String> {
    training_volume(cohort.level, cohort.age_group)
        .iter()
        .map(|line| (*line).to_string())
        .collect()
}

fn assessment_notes(skill: &str, expected: u8, cohort: &Cohort) -> String {
    let level = cohort.level.as_lower();
    format!(
        "Assess {skill} for {} {} {level} athletes in {} events. \
         Expected level {expected} reflects {level}-level standards for this age group.",
        cohort.age_group,
        cohort.gender,
        cohort.event_group.as_lower()
    )
}

fn progression_path(skill: &str, expected: u8, cohort: &Cohort) -> String {
    let next = (expected + 1).min(MAX_LEVEL);
    format!(
        "Continue developing {skill} through {}-specific training. \
         Progress toward level {next} through consistent practice and appropriate technical coaching.",
        cohort.event_group.as_lower()
    )
}

#[cfg(test)]
mod tests {
    use pdp_model::{AgeGroup, CompetitiveLevel, EventGroup, Gender};

    use super::*;

    fn cohort(age_group: AgeGroup, level: CompetitiveLevel, event_group: EventGroup) -> Cohort {
        Cohort {
            age_group,
            gender: Gender::Female,
            level,
            event_group,
        }
    }

    #[test]
    fn curated_skill_uses_curated_lines() {
        let lines = technical_indicators(
            "Posture & Alignment",
            3,
            &cohort(AgeGroup::U16, CompetitiveLevel::Competitive, EventGroup::General),
        );
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Consistently maintains good posture during training runs");
    }

    #[test]
    fn curated_skill_missing_level_uses_short_fallback() {
        let lines = technical_indicators(
            "Posture & Alignment",
            6,
            &cohort(AgeGroup::U16, CompetitiveLevel::Competitive, EventGroup::General),
        );
        assert_eq!(lines, vec!["Level 6 execution".to_string()]);
    }

    #[test]
    fn progression_caps_at_five() {
        let path = progression_path(
            "Pacing Judgment",
            5,
            &cohort(AgeGroup::Senior, CompetitiveLevel::Elite, EventGroup::General),
        );
        assert!(path.contains("Progress toward level 5 "));
    }

    #[test]
    fn correlated_skill_without_band_falls_back_to_generic_text() {
        // No 100m standards are published for U10.
        let lines = performance_indicators(
            "Acceleration Ability",
            &cohort(AgeGroup::U10, CompetitiveLevel::Developmental, EventGroup::Sprints),
        );
        assert_eq!(
            lines,
            vec![
                "Performance appropriate for developmental U10 female athlete".to_string(),
                "Consistent execution in sprints events".to_string(),
            ]
        );
    }
}
