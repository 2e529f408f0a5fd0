//! Irish dancing generation.

use pdp_core::irish_dancing::{IrishDancingGenerator, generate_all};
use pdp_core::{BenchmarkGenerator, validate_records};
use pdp_model::{AgeGroup, BenchmarkRecord, RatingLevel};

#[test]
fn generates_one_record_per_skill_and_grade() {
    let records = generate_all();
    assert_eq!(records.len(), 700);
    let elite = records
        .iter()
        .filter(|record| record.level == RatingLevel::Elite)
        .count();
    assert_eq!(elite, 125);
    assert!(records.iter().all(|record| record.gender.as_str() == "all"));
}

#[test]
fn first_and_last_records() {
    let records = generate_all();
    let first = BenchmarkRecord::from(records[0].clone());
    insta::assert_snapshot!(serde_json::to_string_pretty(&first).unwrap(), @r#"
    {
      "sportCode": "irish_dancing",
      "skillName": "Upper Body Control",
      "ageGroup": "U6",
      "gender": "all",
      "level": "recreational",
      "expectedRating": 1.5,
      "minAcceptable": 1.0,
      "developingThreshold": 1.5,
      "excellentThreshold": 2.0,
      "notes": "Beginner U6: keeping arms at sides"
    }
    "#);

    let last = records.last().unwrap();
    assert_eq!(last.skill_name, "Stamina & Endurance");
    assert_eq!(last.age_group, AgeGroup::Adult);
    assert_eq!(last.expected_rating, 4.5);
    assert_eq!(last.excellent_threshold, 5.0);
    assert_eq!(
        last.notes,
        "Preliminary/Open Championship Adult: championship endurance at peak speed"
    );
}

#[test]
fn u12_elite_is_preliminary_championship() {
    let record = generate_all()
        .into_iter()
        .find(|record| {
            record.skill_name == "Shoulder Position"
                && record.age_group == AgeGroup::U12
                && record.level == RatingLevel::Elite
        })
        .unwrap();
    assert_eq!(record.expected_rating, 4.5);
    assert_eq!(
        record.notes,
        "Preliminary Championship U12: perfect shoulder alignment at all speeds"
    );
}

#[test]
fn generated_set_is_valid() {
    let records = IrishDancingGenerator.generate();
    assert!(validate_records(&records).is_clean());
}
