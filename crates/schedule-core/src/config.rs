use crate::sports::DEFAULT_GENERAL_SPORTS;
use crate::time::MINUTES_PER_HOUR;
use serde::{Deserialize, Serialize};

/// Tunables for one processing run. The default reproduces the standard
/// broadcast layout: `General`/`Ceremony` rows on top, timelines starting no
/// earlier than 08:00.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Sport names treated as general rows (exact, case-sensitive match).
    pub general_sports: Vec<String>,
    /// Floor for a day's `time_range_start`, in minutes since midnight.
    pub earliest_range_start: i32,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            general_sports: DEFAULT_GENERAL_SPORTS.iter().map(|s| s.to_string()).collect(),
            earliest_range_start: 8 * MINUTES_PER_HOUR,
        }
    }
}

impl ProcessingConfig {
    pub fn is_general(&self, sport: &str) -> bool {
        self.general_sports.iter().any(|name| name == sport)
    }
}
