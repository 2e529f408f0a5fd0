//! Rugby generation: counts, ratings and notes.

use std::collections::BTreeMap;

use pdp_core::rugby::{self, expected_rating, generate_all, notes_for, synthesize};
use pdp_core::{BenchmarkGenerator, validate_records};
use pdp_model::{AgeGroup, BenchmarkRecord, GenderScope, RatedBenchmark, RatingLevel};

fn find(skill: &str, age: AgeGroup, gender: GenderScope, level: RatingLevel) -> RatedBenchmark {
    generate_all()
        .into_iter()
        .find(|record| {
            record.skill_name == skill
                && record.age_group == age
                && record.gender == gender
                && record.level == level
        })
        .unwrap()
}

#[test]
fn generates_expected_totals() {
    let records = generate_all();
    assert_eq!(records.len(), 1008);

    let mut by_age = BTreeMap::new();
    let mut by_gender = BTreeMap::new();
    let mut by_level = BTreeMap::new();
    for record in &records {
        *by_age.entry(record.age_group).or_insert(0) += 1;
        *by_gender.entry(record.gender).or_insert(0) += 1;
        *by_level.entry(record.level).or_insert(0) += 1;
    }
    assert_eq!(
        by_age.into_iter().collect::<Vec<_>>(),
        vec![
            (AgeGroup::U10, 44),
            (AgeGroup::U12, 88),
            (AgeGroup::U14, 219),
            (AgeGroup::U16, 219),
            (AgeGroup::U18, 219),
            (AgeGroup::Senior, 219),
        ]
    );
    assert_eq!(by_gender[&GenderScope::All], 312);
    assert_eq!(by_gender[&GenderScope::Male], 348);
    assert_eq!(by_gender[&GenderScope::Female], 348);
    assert_eq!(by_level[&RatingLevel::Recreational], 380);
    assert_eq!(by_level[&RatingLevel::Competitive], 336);
    assert_eq!(by_level[&RatingLevel::Elite], 292);
}

#[test]
fn u10_tackle_technique_is_forced_to_tag_transition() {
    assert!(rugby::is_eligible(AgeGroup::U10, RatingLevel::Recreational));
    let record = synthesize(
        "Tackle Technique",
        AgeGroup::U10,
        GenderScope::All,
        RatingLevel::Recreational,
    );
    assert_eq!(record.expected_rating, 1.5);
    assert_eq!(record.min_acceptable, 1.0);
    assert_eq!(record.excellent_threshold, 2.0);
    assert!(
        record
            .notes
            .contains("Tag to contact transition - safe technique emphasis")
    );
}

#[test]
fn first_record_matches_import_format() {
    let first = BenchmarkRecord::from(generate_all().remove(0));
    insta::assert_snapshot!(serde_json::to_string_pretty(&first).unwrap(), @r#"
    {
      "sportCode": "rugby",
      "skillName": "Pass Accuracy (Left)",
      "ageGroup": "U10",
      "gender": "all",
      "level": "recreational",
      "expectedRating": 1.5,
      "minAcceptable": 1.0,
      "developingThreshold": 1.5,
      "excellentThreshold": 2.0,
      "notes": "Foundation age - learning fundamental technique Bilateral development essential"
    }
    "#);
}

#[test]
fn elite_kick_distance_notes_split_by_gender() {
    let male = find(
        "Kicking Distance",
        AgeGroup::U16,
        GenderScope::Male,
        RatingLevel::Elite,
    );
    assert_eq!(male.expected_rating, 4.0);
    assert_eq!(
        male.notes,
        "Academy selection standard - professional potential 45m+ expected"
    );

    let female = find(
        "Kicking Distance",
        AgeGroup::Senior,
        GenderScope::Female,
        RatingLevel::Elite,
    );
    assert_eq!(
        female.notes,
        "Professional/international standard 45m+ (backs), 35m+ (forwards)"
    );
}

#[test]
fn jackaling_notes_by_age() {
    let u12 = find(
        "Jackaling / Turnovers",
        AgeGroup::U12,
        GenderScope::All,
        RatingLevel::Competitive,
    );
    assert_eq!(u12.expected_rating, 1.0);
    assert_eq!(
        u12.notes,
        "Above average for age - representative standard developing \
         Not yet introduced - complex skill for older ages"
    );

    let senior = notes_for(
        "Jackaling / Turnovers",
        AgeGroup::Senior,
        GenderScope::Male,
        RatingLevel::Competitive,
    );
    assert_eq!(senior.len(), 1);
}

#[test]
fn u12_tackle_notes_include_safety() {
    let record = find(
        "Tackle Technique",
        AgeGroup::U12,
        GenderScope::All,
        RatingLevel::Competitive,
    );
    assert_eq!(record.expected_rating, 2.5);
    assert_eq!(
        record.notes,
        "Progressive contact with safety restrictions. Walking to jogging speed. \
         Head position safety critical"
    );
}

#[test]
fn kicking_is_introduced_at_u12() {
    assert_eq!(
        expected_rating("Place Kicking", AgeGroup::U10, RatingLevel::Recreational),
        1.0
    );
    assert_eq!(
        expected_rating("Place Kicking", AgeGroup::U12, RatingLevel::Recreational),
        1.5
    );
    assert_eq!(
        expected_rating("Place Kicking", AgeGroup::U12, RatingLevel::Competitive),
        2.0
    );
    assert_eq!(
        expected_rating("Place Kicking", AgeGroup::U14, RatingLevel::Elite),
        3.5
    );
}

#[test]
fn spiral_pass_is_capped_at_u12() {
    assert_eq!(
        expected_rating("Spiral / Long Pass", AgeGroup::U12, RatingLevel::Competitive),
        2.0
    );
    assert_eq!(
        expected_rating("Spiral / Long Pass", AgeGroup::U12, RatingLevel::Recreational),
        2.0
    );
}

#[test]
fn generated_set_is_valid() {
    let records = rugby::RugbyGenerator.generate();
    let report = validate_records(&records);
    assert!(report.is_clean(), "{:?}", report.issues);
}
