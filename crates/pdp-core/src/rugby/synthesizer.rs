//! Rugby ratings, notes and record assembly.

use pdp_model::{AgeGroup, GenderScope, RatedBenchmark, RatingLevel};
use pdp_standards::rugby::{
    BILATERAL_PASSING_SKILLS, CONTACT_TRANSITION_SKILLS, INTRODUCTORY_KICKS, JACKALING,
    KICK_DISTANCE_SKILLS, KICKING_SKILLS, RIP_TAG, RugbyNote, SPORT_CODE, TACKLE_SKILLS,
    THRESHOLD_MARGIN, adjustments_for, base_rating, cohort_standard, kick_distance_target,
    render_notes,
};

/// Expected rating after every matching adjustment has been applied.
pub fn expected_rating(skill: &str, age_group: AgeGroup, level: RatingLevel) -> f64 {
    adjustments_for(skill, age_group, level)
        .fold(base_rating(age_group, level), |rating, adjustment| {
            adjustment.effect.apply(rating)
        })
}

/// Notes for a cohort: one age note (when the age has one) followed by
/// skill-specific notes.
pub fn notes_for(
    skill: &str,
    age_group: AgeGroup,
    gender: GenderScope,
    level: RatingLevel,
) -> Vec<RugbyNote> {
    let mut notes = Vec::new();
    if let Some(note) = age_note(skill, age_group, level) {
        notes.push(note);
    }

    if BILATERAL_PASSING_SKILLS.contains(&skill) {
        notes.push(RugbyNote::BilateralPassing);
    }
    if TACKLE_SKILLS.contains(&skill) && age_group != AgeGroup::U10 {
        notes.push(RugbyNote::HeadPositionSafety);
    }
    if skill == RIP_TAG {
        notes.push(if age_group == AgeGroup::U10 {
            RugbyNote::TagPrimarySkill
        } else {
            RugbyNote::StripTechnique
        });
    }
    if KICK_DISTANCE_SKILLS.contains(&skill)
        && level == RatingLevel::Elite
        && kick_distance_target(age_group, gender).is_some()
    {
        notes.push(RugbyNote::KickDistance { age_group, gender });
    }
    if skill == JACKALING {
        if matches!(age_group, AgeGroup::U10 | AgeGroup::U12) {
            notes.push(RugbyNote::JackalNotIntroduced);
        } else if level == RatingLevel::Elite {
            notes.push(RugbyNote::JackalSpecialist);
        }
    }
    notes
}

fn age_note(skill: &str, age_group: AgeGroup, level: RatingLevel) -> Option<RugbyNote> {
    match age_group {
        AgeGroup::U10 => Some(if CONTACT_TRANSITION_SKILLS.contains(&skill) {
            RugbyNote::ContactTransition
        } else if KICKING_SKILLS.contains(&skill) {
            RugbyNote::KickingNotIntroduced
        } else if skill.contains("Decision Making") || skill.contains("Tactical") {
            RugbyNote::FoundationConcepts
        } else {
            RugbyNote::FoundationTechnique
        }),
        AgeGroup::U12 => {
            if TACKLE_SKILLS.contains(&skill) {
                Some(RugbyNote::ProgressiveContact)
            } else if INTRODUCTORY_KICKS.contains(&skill) {
                Some(RugbyNote::KickingIntroduction)
            } else if level == RatingLevel::Competitive {
                Some(RugbyNote::RepresentativeDeveloping)
            } else {
                None
            }
        }
        AgeGroup::U14 if TACKLE_SKILLS.contains(&skill) => Some(RugbyNote::FullContact),
        _ => cohort_standard(age_group, level)
            .map(|_| RugbyNote::CohortStandard { age_group, level }),
    }
}

pub fn synthesize(
    skill: &str,
    age_group: AgeGroup,
    gender: GenderScope,
    level: RatingLevel,
) -> RatedBenchmark {
    let rating = expected_rating(skill, age_group, level);
    RatedBenchmark {
        sport_code: SPORT_CODE.to_string(),
        skill_name: skill.to_string(),
        age_group,
        gender,
        level,
        expected_rating: rating,
        min_acceptable: rating - THRESHOLD_MARGIN,
        developing_threshold: rating,
        excellent_threshold: rating + THRESHOLD_MARGIN,
        notes: render_notes(&notes_for(skill, age_group, gender, level)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_rules_override_earlier_ones() {
        // Contact sets 1.5 at U10, ruck entry then sets 1.0.
        assert_eq!(
            expected_rating("Ruck Entry / Cleanout", AgeGroup::U10, RatingLevel::Recreational),
            1.0
        );
        // Contact caps at 2.5, ruck entry sets recreational to 1.5.
        assert_eq!(
            expected_rating("Ruck Entry / Cleanout", AgeGroup::U12, RatingLevel::Recreational),
            1.5
        );
        assert_eq!(
            expected_rating("Ruck Entry / Cleanout", AgeGroup::U12, RatingLevel::Competitive),
            2.5
        );
    }

    #[test]
    fn tactical_u12_recreational_drops_half_a_point() {
        assert_eq!(
            expected_rating("Reading Defense", AgeGroup::U12, RatingLevel::Recreational),
            1.5
        );
        assert_eq!(
            expected_rating("Reading Defense", AgeGroup::U12, RatingLevel::Competitive),
            2.5
        );
    }

    #[test]
    fn u12_recreational_plain_skill_has_no_notes() {
        let notes = notes_for(
            "Draw and Pass",
            AgeGroup::U12,
            GenderScope::All,
            RatingLevel::Recreational,
        );
        assert!(notes.is_empty());
    }

    #[test]
    fn decision_making_is_foundation_concept_at_u10() {
        assert_eq!(
            notes_for("Decision Making", AgeGroup::U10, GenderScope::All, RatingLevel::Recreational),
            vec![RugbyNote::FoundationConcepts]
        );
    }

    #[test]
    fn u14_tackle_has_contact_and_safety_notes() {
        let notes = notes_for(
            "Tackle Completion",
            AgeGroup::U14,
            GenderScope::Male,
            RatingLevel::Elite,
        );
        assert_eq!(
            notes,
            vec![RugbyNote::FullContact, RugbyNote::HeadPositionSafety]
        );
    }
}
