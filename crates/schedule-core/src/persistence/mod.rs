use crate::ProcessedSchedule;
use crate::validation::ValidationError;
use serde_json::Error as SerdeJsonError;
use std::collections::HashSet;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum PersistenceError {
    Serialization(SerdeJsonError),
    Io(io::Error),
    Csv(csv::Error),
    Validation(ValidationError),
    InvalidData(String),
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::Serialization(err) => write!(f, "serialization error: {err}"),
            PersistenceError::Io(err) => write!(f, "io error: {err}"),
            PersistenceError::Csv(err) => write!(f, "csv error: {err}"),
            PersistenceError::Validation(err) => write!(f, "validation error: {err}"),
            PersistenceError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Serialization(err) => Some(err),
            PersistenceError::Io(err) => Some(err),
            PersistenceError::Csv(err) => Some(err),
            PersistenceError::Validation(err) => Some(err),
            PersistenceError::InvalidData(_) => None,
        }
    }
}

impl From<SerdeJsonError> for PersistenceError {
    fn from(value: SerdeJsonError) -> Self {
        Self::Serialization(value)
    }
}

impl From<io::Error> for PersistenceError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for PersistenceError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<ValidationError> for PersistenceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Structural checks on a processed schedule read back from disk: days in
/// ascending date order matching `dates`, every entry filed under its own
/// date, ids unique, spans positive.
pub fn validate_snapshot(schedule: &ProcessedSchedule) -> PersistenceResult<()> {
    let day_dates: Vec<&str> = schedule.days.iter().map(|d| d.date.as_str()).collect();
    let listed: Vec<&str> = schedule.dates.iter().map(String::as_str).collect();
    if day_dates != listed {
        return Err(PersistenceError::InvalidData(
            "dates list does not match the stored days".into(),
        ));
    }
    if day_dates.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(PersistenceError::InvalidData(
            "days are not in strictly ascending date order".into(),
        ));
    }

    let mut seen_ids = HashSet::with_capacity(schedule.entry_count());
    for day in &schedule.days {
        for entry in &day.entries {
            if entry.date != day.date {
                return Err(PersistenceError::InvalidData(format!(
                    "entry {} dated {} is filed under {}",
                    entry.id, entry.date, day.date
                )));
            }
            if entry.end_minutes <= entry.start_minutes
                || entry.duration_minutes != entry.end_minutes - entry.start_minutes
            {
                return Err(PersistenceError::InvalidData(format!(
                    "entry {} has an inconsistent time span",
                    entry.id
                )));
            }
            if !seen_ids.insert(entry.id.as_str()) {
                return Err(PersistenceError::InvalidData(format!(
                    "duplicate entry id {}",
                    entry.id
                )));
            }
        }
    }
    Ok(())
}

pub mod file;

pub use file::{
    load_config_from_json, load_raw_records_from_csv, load_raw_records_from_json,
    load_schedule_from_csv, load_schedule_from_json, load_snapshot_from_json,
    save_snapshot_to_json,
};
