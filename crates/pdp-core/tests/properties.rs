//! Property tests over arbitrary table combinations.

use std::sync::LazyLock;

use pdp_core::{athletics, rugby};
use pdp_model::{
    AgeGroup, AthleticsBenchmark, BenchmarkRecord, CompetitiveLevel, EventGroup, Gender,
    GenderScope, RatingLevel,
};
use pdp_standards::athletics::{MAX_LEVEL, MIN_LEVEL, skill_definitions};
use proptest::prelude::*;
use proptest::sample::select;

static ATHLETICS: LazyLock<Vec<AthleticsBenchmark>> = LazyLock::new(athletics::generate_all);

fn athletics_cohort() -> impl Strategy<Value = athletics::Cohort> {
    (
        select(pdp_standards::athletics::AGE_GROUPS),
        select(vec![Gender::Male, Gender::Female]),
        select(pdp_standards::athletics::COMPETITIVE_LEVELS),
        select(vec![
            EventGroup::General,
            EventGroup::Sprints,
            EventGroup::MiddleDistance,
            EventGroup::LongDistance,
            EventGroup::Hurdles,
        ]),
    )
        .prop_map(|(age_group, gender, level, event_group)| athletics::Cohort {
            age_group,
            gender,
            level,
            event_group,
        })
}

fn athletics_skill() -> impl Strategy<Value = &'static str> {
    select(skill_definitions().map(|skill| skill.name).collect::<Vec<_>>())
}

fn rugby_level() -> impl Strategy<Value = RatingLevel> {
    select(vec![
        RatingLevel::Recreational,
        RatingLevel::Development,
        RatingLevel::Competitive,
        RatingLevel::Elite,
    ])
}

fn on_grid(value: f64) -> bool {
    (value * 2.0).fract() == 0.0
}

proptest! {
    #[test]
    fn athletics_records_are_bounded(skill in athletics_skill(), cohort in athletics_cohort()) {
        let record = athletics::synthesize(skill, &cohort);
        prop_assert!((MIN_LEVEL..=MAX_LEVEL).contains(&record.expected_level));
        prop_assert!(!record.performance_indicators.technical.is_empty());
        prop_assert!(!record.performance_indicators.performance.is_empty());
        prop_assert_eq!(record.performance_indicators.training.len(), 3);
    }

    #[test]
    fn athletics_eligibility_matches_enumeration(
        skill in athletics_skill(),
        cohort in athletics_cohort(),
    ) {
        let eligible = athletics::is_eligible(
            cohort.age_group,
            cohort.level,
            cohort.event_group,
            skill,
        );
        let generated = ATHLETICS.iter().any(|record| {
            record.skill_name == skill
                && record.age_group == cohort.age_group
                && record.gender == cohort.gender
                && record.competitive_level == cohort.level
                && record.event_group == cohort.event_group
        });
        let applicable = skill_definitions()
            .find(|definition| definition.name == skill)
            .is_some_and(|definition| definition.event_groups.contains(&cohort.event_group));
        prop_assert_eq!(generated, eligible && applicable);
    }

    #[test]
    fn rugby_ratings_stay_on_the_scale(
        skill in select(rugby_skills()),
        age_group in select(pdp_standards::rugby::AGE_GROUPS),
        level in rugby_level(),
        gender in select(vec![GenderScope::All, GenderScope::Male, GenderScope::Female]),
    ) {
        let record = rugby::synthesize(skill, age_group, gender, level);
        prop_assert!((1.0..=4.5).contains(&record.expected_rating));
        prop_assert!(record.min_acceptable <= record.developing_threshold);
        prop_assert!(record.developing_threshold <= record.excellent_threshold);
        prop_assert!(on_grid(record.expected_rating));
        prop_assert!(on_grid(record.min_acceptable));
        prop_assert!(on_grid(record.excellent_threshold));
    }

    #[test]
    fn rugby_eligible_cohorts_have_notes_or_are_u12_recreational(
        skill in select(rugby_skills()),
        age_group in select(pdp_standards::rugby::AGE_GROUPS),
        level in rugby_level(),
    ) {
        prop_assume!(rugby::is_eligible(age_group, level));
        let gender = rugby::genders_for_skill(skill, age_group)[0];
        let notes = rugby::notes_for(skill, age_group, gender, level);
        if age_group != AgeGroup::U12 || level != RatingLevel::Recreational {
            prop_assert!(!notes.is_empty());
        }
    }
}

fn rugby_skills() -> Vec<&'static str> {
    pdp_standards::rugby::skills().collect()
}

#[test]
fn every_generated_set_round_trips_through_json() {
    for generator in pdp_core::default_registry().generators() {
        let records = generator.generate();
        let json = serde_json::to_string(&records).unwrap();
        let parsed: Vec<BenchmarkRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, records, "{}", generator.sport());
    }
}

#[test]
fn u10_only_offers_developmental_athletics() {
    for skill in skill_definitions() {
        for level in [CompetitiveLevel::Competitive, CompetitiveLevel::Elite] {
            assert!(!athletics::is_eligible(
                AgeGroup::U10,
                level,
                EventGroup::General,
                skill.name
            ));
        }
    }
}
