use crate::time::TimeSpan;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broadcaster carrying an event. Declared in token order so the derived
/// ordering matches a lexicographic sort of the tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Channel {
    #[serde(rename = "SVT")]
    Svt,
    #[serde(rename = "TV4")]
    Tv4,
}

impl Channel {
    pub const ALL: [Channel; 2] = [Channel::Svt, Channel::Tv4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Svt => "SVT",
            Channel::Tv4 => "TV4",
        }
    }

    /// Exact, case-sensitive token match.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|channel| channel.as_str() == token)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw schedule record after it has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub date: String,
    pub start: String,
    pub end: String,
    pub sport: String,
    pub event: String,
    pub channel: Channel,
    pub is_final: bool,
    pub has_sweden: bool,
}

/// Normalized schedule entry.
///
/// `lane` is only meaningful relative to the collection it was packed in;
/// moving an entry into another collection requires a repack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub date: String,
    pub start_minutes: i32,
    pub end_minutes: i32,
    pub duration_minutes: i32,
    pub sport: String,
    pub event: String,
    pub channel: Channel,
    pub is_final: bool,
    pub is_general: bool,
    pub has_sweden: bool,
    pub lane: usize,
}

impl Entry {
    pub(crate) fn from_raw(raw: RawEntry, id: String, span: TimeSpan, is_general: bool) -> Self {
        Self {
            id,
            date: raw.date,
            start_minutes: span.start_minutes,
            end_minutes: span.end_minutes,
            duration_minutes: span.duration_minutes(),
            sport: raw.sport,
            event: raw.event,
            channel: raw.channel,
            is_final: raw.is_final,
            is_general,
            has_sweden: raw.has_sweden,
            lane: 0,
        }
    }

    /// Copy of this entry placed on `lane`.
    pub fn with_lane(&self, lane: usize) -> Self {
        Self {
            lane,
            ..self.clone()
        }
    }

    pub fn span(&self) -> TimeSpan {
        TimeSpan {
            start_minutes: self.start_minutes,
            end_minutes: self.end_minutes,
        }
    }

    /// Half-open interval intersection: an entry ending at 11:00 does not
    /// overlap one starting at 11:00.
    pub fn overlaps(&self, other: &Entry) -> bool {
        self.span().overlaps(&other.span())
    }
}
