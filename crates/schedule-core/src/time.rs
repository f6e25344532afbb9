use chrono::{NaiveTime, Timelike};
use std::fmt;

pub const MINUTES_PER_HOUR: i32 = 60;
pub const MINUTES_PER_DAY: i32 = 24 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeParseError {
    input: String,
}

impl TimeParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for TimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid wall-clock time '{}' (expected HH:MM)", self.input)
    }
}

impl std::error::Error for TimeParseError {}

/// Start and end of an entry in minutes since local midnight of its date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSpan {
    pub start_minutes: i32,
    pub end_minutes: i32,
}

impl TimeSpan {
    /// Span from already-parsed wall-clock minutes. An end that does not come
    /// after the start rolls past midnight, so equal times span a full day.
    pub fn rolled(start_minutes: i32, end_minutes: i32) -> Self {
        let end_minutes = if end_minutes <= start_minutes {
            end_minutes + MINUTES_PER_DAY
        } else {
            end_minutes
        };
        Self {
            start_minutes,
            end_minutes,
        }
    }

    pub fn duration_minutes(&self) -> i32 {
        self.end_minutes - self.start_minutes
    }

    pub fn overlaps(&self, other: &TimeSpan) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }
}

/// Parses `H:MM` or `HH:MM` into minutes since midnight.
pub fn parse_time(input: &str) -> Result<i32, TimeParseError> {
    // chrono accepts a single-digit minute and leading blanks; both are rejected here.
    let (_, minutes) = input.split_once(':').ok_or_else(|| TimeParseError::new(input))?;
    if minutes.len() != 2 || !input.bytes().all(|b| b.is_ascii_digit() || b == b':') {
        return Err(TimeParseError::new(input));
    }
    let time = NaiveTime::parse_from_str(input, "%H:%M").map_err(|_| TimeParseError::new(input))?;
    Ok((time.num_seconds_from_midnight() / 60) as i32)
}

/// Renders a minute offset as `HH:MM`, wrapping offsets past midnight.
pub fn format_minutes(minutes: i32) -> String {
    let wrapped = minutes.rem_euclid(MINUTES_PER_DAY);
    format!(
        "{:02}:{:02}",
        wrapped / MINUTES_PER_HOUR,
        wrapped % MINUTES_PER_HOUR
    )
}

pub fn floor_to_hour(minutes: i32) -> i32 {
    minutes.div_euclid(MINUTES_PER_HOUR) * MINUTES_PER_HOUR
}

pub fn ceil_to_hour(minutes: i32) -> i32 {
    (minutes + MINUTES_PER_HOUR - 1).div_euclid(MINUTES_PER_HOUR) * MINUTES_PER_HOUR
}
