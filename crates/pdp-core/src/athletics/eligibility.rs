//! Athletics eligibility filter.

use pdp_model::{AgeGroup, CompetitiveLevel, EventGroup};
use pdp_standards::athletics::{EXCLUSION_RULES, ExclusionRule};

/// Returns true when no exclusion rule blocks the combination.
pub fn is_eligible(
    age_group: AgeGroup,
    level: CompetitiveLevel,
    event_group: EventGroup,
    skill: &str,
) -> bool {
    blocking_rule(age_group, level, event_group, skill).is_none()
}

/// First exclusion rule that blocks the combination, if any.
pub fn blocking_rule(
    age_group: AgeGroup,
    level: CompetitiveLevel,
    event_group: EventGroup,
    skill: &str,
) -> Option<&'static ExclusionRule> {
    EXCLUSION_RULES
        .iter()
        .find(|rule| excludes(rule, age_group, level, event_group, skill))
}

fn excludes(
    rule: &ExclusionRule,
    age_group: AgeGroup,
    level: CompetitiveLevel,
    event_group: EventGroup,
    skill: &str,
) -> bool {
    match *rule {
        ExclusionRule::LevelsOnly {
            age_group: age,
            levels,
        } => age == age_group && !levels.contains(&level),
        ExclusionRule::LevelAbsent {
            age_group: age,
            level: absent,
        } => age == age_group && absent == level,
        ExclusionRule::EventGroupNotAt {
            event_group: group,
            age_groups,
        } => group == event_group && age_groups.contains(&age_group),
        ExclusionRule::SkillsNotAt { skills, age_groups } => {
            skills.contains(&skill) && age_groups.contains(&age_group)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u10_is_developmental_only() {
        assert!(is_eligible(
            AgeGroup::U10,
            CompetitiveLevel::Developmental,
            EventGroup::General,
            "Stride Length"
        ));
        assert!(!is_eligible(
            AgeGroup::U10,
            CompetitiveLevel::Competitive,
            EventGroup::General,
            "Stride Length"
        ));
    }

    #[test]
    fn blocking_rule_reports_first_match() {
        // Both the level rule and the hurdles rule match; the level rule comes first.
        let rule = blocking_rule(
            AgeGroup::U10,
            CompetitiveLevel::Elite,
            EventGroup::Hurdles,
            "Hurdle Clearance Technique",
        )
        .unwrap();
        assert!(matches!(rule, ExclusionRule::LevelsOnly { .. }));
    }

    #[test]
    fn physiological_skills_start_at_u14() {
        for age in [AgeGroup::U10, AgeGroup::U12] {
            assert!(!is_eligible(
                age,
                CompetitiveLevel::Developmental,
                EventGroup::General,
                "Running Economy"
            ));
        }
        assert!(is_eligible(
            AgeGroup::U14,
            CompetitiveLevel::Developmental,
            EventGroup::General,
            "Running Economy"
        ));
    }
}
