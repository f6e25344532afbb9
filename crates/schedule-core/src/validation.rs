use crate::calendar;
use crate::entry::{Channel, RawEntry};
use crate::time::{self, TimeSpan};
use serde_json::{Map, Value};
use std::fmt;

pub const REQUIRED_TEXT_FIELDS: [&str; 5] = ["date", "start", "end", "sport", "event"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    NotAnObject,
    MissingField(&'static str),
    InvalidChannel(String),
    InvalidIsFinal,
    InvalidHasSweden,
    InvalidTime { field: &'static str, value: String },
    InvalidDate(String),
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::NotAnObject => write!(f, "record is not an object"),
            ValidationErrorKind::MissingField(field) => {
                write!(f, "missing required field `{field}`")
            }
            ValidationErrorKind::InvalidChannel(value) => write!(f, "invalid channel {value}"),
            ValidationErrorKind::InvalidIsFinal => write!(f, "invalid isFinal"),
            ValidationErrorKind::InvalidHasSweden => write!(f, "invalid hasSweden"),
            ValidationErrorKind::InvalidTime { field, value } => {
                write!(f, "invalid time \"{value}\" in `{field}`")
            }
            ValidationErrorKind::InvalidDate(value) => write!(f, "invalid date \"{value}\""),
        }
    }
}

/// A raw record that failed validation. Fatal to the whole ingestion batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    index: usize,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(index: usize, kind: ValidationErrorKind) -> Self {
        Self { index, kind }
    }

    /// Position of the offending record in the input batch.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid entry at index {}: {}", self.index, self.kind)
    }
}

impl std::error::Error for ValidationError {}

/// A record that passed validation, with its wall-clock span already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedEntry {
    pub raw: RawEntry,
    pub span: TimeSpan,
}

/// Type and domain gate for one raw record. Values are taken verbatim: no
/// trimming and no case-folding.
pub fn validate_entry(record: &Value, index: usize) -> Result<CheckedEntry, ValidationError> {
    let fail = |kind| ValidationError::new(index, kind);
    let fields = record
        .as_object()
        .ok_or_else(|| fail(ValidationErrorKind::NotAnObject))?;

    for field in REQUIRED_TEXT_FIELDS {
        if text_field(fields, field).is_none() {
            return Err(fail(ValidationErrorKind::MissingField(field)));
        }
    }

    let channel = match fields.get("channel") {
        Some(Value::String(token)) => Channel::from_token(token),
        _ => None,
    }
    .ok_or_else(|| {
        let shown = fields
            .get("channel")
            .map(Value::to_string)
            .unwrap_or_else(|| "undefined".to_string());
        fail(ValidationErrorKind::InvalidChannel(shown))
    })?;

    let is_final = fields
        .get("isFinal")
        .and_then(Value::as_bool)
        .ok_or_else(|| fail(ValidationErrorKind::InvalidIsFinal))?;
    let has_sweden = fields
        .get("hasSweden")
        .and_then(Value::as_bool)
        .ok_or_else(|| fail(ValidationErrorKind::InvalidHasSweden))?;

    // Presence of all five text fields was checked above.
    let [date, start, end, sport, event] =
        REQUIRED_TEXT_FIELDS.map(|field| text_field(fields, field).unwrap_or_default().to_string());

    if date.len() != 10 || calendar::parse_date(&date).is_none() {
        return Err(fail(ValidationErrorKind::InvalidDate(date)));
    }
    let minutes_of = |field: &'static str, value: &str| {
        time::parse_time(value).map_err(|_| {
            fail(ValidationErrorKind::InvalidTime {
                field,
                value: value.to_string(),
            })
        })
    };
    let span = TimeSpan::rolled(minutes_of("start", &start)?, minutes_of("end", &end)?);

    let raw = RawEntry {
        date,
        start,
        end,
        sport,
        event,
        channel,
        is_final,
        has_sweden,
    };
    Ok(CheckedEntry { raw, span })
}

fn text_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    match fields.get(name) {
        Some(Value::String(value)) if !value.is_empty() => Some(value.as_str()),
        _ => None,
    }
}

/// Validates a whole batch, stopping at the first bad record.
pub fn validate_entries(records: &[Value]) -> Result<Vec<CheckedEntry>, ValidationError> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_entry(record, index))
        .collect()
}
