use super::{PersistenceError, PersistenceResult};
use crate::config::ProcessingConfig;
use crate::schedule::{self, ProcessedSchedule};
use crate::time::MINUTES_PER_DAY;
use serde::Deserialize;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Reads a JSON data file holding a top-level array of raw schedule records.
/// Records are returned untouched; validation happens during processing.
pub fn load_raw_records_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Value>> {
    let file = File::open(path)?;
    let value: Value = serde_json::from_reader(BufReader::new(file))?;
    match value {
        Value::Array(records) => Ok(records),
        other => Err(PersistenceError::InvalidData(format!(
            "expected a JSON array of schedule records, found {}",
            json_kind(&other)
        ))),
    }
}

/// CSV row with the raw field names as headers. Every column is read as text
/// so that malformed values reach the validator with their row index.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawEntryCsvRecord {
    date: String,
    start: String,
    end: String,
    sport: String,
    event: String,
    channel: String,
    is_final: String,
    has_sweden: String,
}

impl RawEntryCsvRecord {
    fn into_record(self) -> Value {
        serde_json::json!({
            "date": self.date,
            "start": self.start,
            "end": self.end,
            "sport": self.sport,
            "event": self.event,
            "channel": self.channel,
            "isFinal": parse_flag(&self.is_final),
            "hasSweden": parse_flag(&self.has_sweden),
        })
    }
}

pub fn load_raw_records_from_csv<P: AsRef<Path>>(path: P) -> PersistenceResult<Vec<Value>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let mut records = Vec::new();
    for row in reader.deserialize::<RawEntryCsvRecord>() {
        records.push(row?.into_record());
    }
    Ok(records)
}

pub fn load_schedule_from_json<P: AsRef<Path>>(
    path: P,
    config: &ProcessingConfig,
) -> PersistenceResult<ProcessedSchedule> {
    let records = load_raw_records_from_json(path)?;
    Ok(schedule::process_schedule_with(&records, config)?)
}

pub fn load_schedule_from_csv<P: AsRef<Path>>(
    path: P,
    config: &ProcessingConfig,
) -> PersistenceResult<ProcessedSchedule> {
    let records = load_raw_records_from_csv(path)?;
    Ok(schedule::process_schedule_with(&records, config)?)
}

/// Writes the processed output as pretty JSON in the camelCase shape the
/// timeline front end reads.
pub fn save_snapshot_to_json<P: AsRef<Path>>(
    schedule: &ProcessedSchedule,
    path: P,
) -> PersistenceResult<()> {
    super::validate_snapshot(schedule)?;
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, schedule)?;
    Ok(())
}

pub fn load_snapshot_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<ProcessedSchedule> {
    let file = File::open(path)?;
    let schedule: ProcessedSchedule = serde_json::from_reader(BufReader::new(file))?;
    super::validate_snapshot(&schedule)?;
    Ok(schedule)
}

/// Missing keys fall back to [`ProcessingConfig::default`].
pub fn load_config_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<ProcessingConfig> {
    let file = File::open(path)?;
    let config: ProcessingConfig = serde_json::from_reader(BufReader::new(file))?;
    if !(0..MINUTES_PER_DAY).contains(&config.earliest_range_start) {
        return Err(PersistenceError::InvalidData(format!(
            "earliest_range_start {} is outside 0..{}",
            config.earliest_range_start, MINUTES_PER_DAY
        )));
    }
    Ok(config)
}

/// `true`/`false` in any case become JSON booleans, an empty cell becomes
/// null, anything else stays text and is rejected by validation.
fn parse_flag(input: &str) -> Value {
    match input.trim().to_ascii_lowercase().as_str() {
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        "" => Value::Null,
        _ => Value::String(input.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
