use broadcast_schedule::{
    PersistenceError, ProcessingConfig, ValidationErrorKind, load_config_from_json,
    load_raw_records_from_csv, load_raw_records_from_json, load_schedule_from_csv,
    load_schedule_from_json, load_snapshot_from_json, process_schedule, save_snapshot_to_json,
    validate_snapshot,
};
use serde_json::json;
use std::fs;
use tempfile::tempdir;

const CSV_HEADER: &str = "date,start,end,sport,event,channel,isFinal,hasSweden\n";

fn sample_records() -> serde_json::Value {
    json!([
        {"date": "2026-02-07", "start": "10:00", "end": "11:00", "sport": "Alpine",
         "event": "Downhill", "channel": "SVT", "isFinal": true, "hasSweden": true},
        {"date": "2026-02-07", "start": "10:30", "end": "11:30", "sport": "Curling",
         "event": "Round Robin", "channel": "TV4", "isFinal": false, "hasSweden": true},
        {"date": "2026-02-08", "start": "20:00", "end": "22:00", "sport": "Ceremony",
         "event": "Medal Ceremony", "channel": "SVT", "isFinal": false, "hasSweden": false}
    ])
}

#[test]
fn json_data_file_loads_and_processes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    fs::write(&path, sample_records().to_string()).unwrap();

    let records = load_raw_records_from_json(&path).unwrap();
    assert_eq!(records.len(), 3);

    let schedule = load_schedule_from_json(&path, &ProcessingConfig::default()).unwrap();
    assert_eq!(schedule.dates, vec!["2026-02-07", "2026-02-08"]);
    assert_eq!(schedule.days[0].lane_count, 2);
    assert_eq!(schedule.sports, vec!["Alpine", "Curling"]);
}

#[test]
fn json_data_file_must_be_an_array() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    fs::write(&path, r#"{"entries": []}"#).unwrap();

    match load_raw_records_from_json(&path) {
        Err(PersistenceError::InvalidData(msg)) => assert!(msg.contains("an object")),
        other => panic!("expected invalid data, got {other:?}"),
    }
}

#[test]
fn invalid_record_in_json_file_reports_index() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.json");
    let mut records = sample_records();
    records[2]["channel"] = json!("BBC");
    fs::write(&path, records.to_string()).unwrap();

    match load_schedule_from_json(&path, &ProcessingConfig::default()) {
        Err(PersistenceError::Validation(err)) => {
            assert_eq!(err.index(), 2);
            assert_eq!(err.kind(), &ValidationErrorKind::InvalidChannel("\"BBC\"".into()));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn csv_data_file_loads_with_boolean_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    fs::write(
        &path,
        format!(
            "{CSV_HEADER}2026-02-07,10:00,11:00,Alpine,Downhill,SVT,TRUE,false\n\
             2026-02-07,10:30,11:30,Curling,\"Round Robin, Session 2\",TV4,false,true\n"
        ),
    )
    .unwrap();

    let records = load_raw_records_from_csv(&path).unwrap();
    assert_eq!(records[0]["isFinal"], json!(true));
    assert_eq!(records[1]["event"], json!("Round Robin, Session 2"));

    let schedule = load_schedule_from_csv(&path, &ProcessingConfig::default()).unwrap();
    let day = &schedule.days[0];
    assert!(day.entries[0].is_final);
    assert!(day.entries[1].has_sweden);
    assert_eq!(day.entries[1].id, "2026-02-07-10:30-curling-round-robin-session-2");
}

#[test]
fn csv_bad_flag_is_rejected_with_row_index() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    fs::write(
        &path,
        format!(
            "{CSV_HEADER}2026-02-07,10:00,11:00,Alpine,Downhill,SVT,false,false\n\
             2026-02-07,10:30,11:30,Curling,Round Robin,TV4,yes,false\n"
        ),
    )
    .unwrap();

    match load_schedule_from_csv(&path, &ProcessingConfig::default()) {
        Err(PersistenceError::Validation(err)) => {
            assert_eq!(err.index(), 1);
            assert_eq!(err.kind(), &ValidationErrorKind::InvalidIsFinal);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn csv_empty_cell_counts_as_missing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("schedule.csv");
    fs::write(
        &path,
        format!("{CSV_HEADER}2026-02-07,10:00,11:00,Alpine,Downhill,SVT,false,\n"),
    )
    .unwrap();

    match load_schedule_from_csv(&path, &ProcessingConfig::default()) {
        Err(PersistenceError::Validation(err)) => {
            assert_eq!(err.kind(), &ValidationErrorKind::InvalidHasSweden);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn snapshot_round_trips_through_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("processed.json");
    let schedule = process_schedule(sample_records().as_array().unwrap()).unwrap();

    save_snapshot_to_json(&schedule, &path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"timeRangeStart\""));

    let loaded = load_snapshot_from_json(&path).unwrap();
    assert_eq!(loaded, schedule);
}

#[test]
fn snapshot_validation_catches_inconsistencies() {
    let schedule = process_schedule(sample_records().as_array().unwrap()).unwrap();
    assert!(validate_snapshot(&schedule).is_ok());

    let mut misfiled = schedule.clone();
    misfiled.days[0].entries[0].date = "2026-02-08".into();
    assert!(matches!(
        validate_snapshot(&misfiled),
        Err(PersistenceError::InvalidData(_))
    ));

    let mut duplicated = schedule.clone();
    let copy = duplicated.days[0].entries[0].clone();
    duplicated.days[0].entries.push(copy);
    assert!(matches!(
        validate_snapshot(&duplicated),
        Err(PersistenceError::InvalidData(msg)) if msg.contains("duplicate")
    ));

    let mut unordered = schedule;
    unordered.days.reverse();
    unordered.dates.reverse();
    assert!(validate_snapshot(&unordered).is_err());
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"general_sports": ["Studio"]}"#).unwrap();

    let config = load_config_from_json(&path).unwrap();
    assert_eq!(config.general_sports, vec!["Studio".to_string()]);
    assert_eq!(config.earliest_range_start, 480);

    fs::write(&path, r#"{"earliest_range_start": 1500}"#).unwrap();
    assert!(matches!(
        load_config_from_json(&path),
        Err(PersistenceError::InvalidData(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let result = load_raw_records_from_json(dir.path().join("absent.json"));
    assert!(matches!(result, Err(PersistenceError::Io(_))));
}
