use crate::entry::{Channel, Entry};
use crate::schedule::DaySchedule;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Active filter selection. Empty sets mean "no restriction".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActiveFilters {
    pub sports: BTreeSet<String>,
    pub channels: BTreeSet<Channel>,
    pub finals_only: bool,
}

impl ActiveFilters {
    pub fn is_empty(&self) -> bool {
        self.sports.is_empty() && self.channels.is_empty() && !self.finals_only
    }

    /// General rows always pass.
    pub fn passes(&self, entry: &Entry) -> bool {
        if entry.is_general {
            return true;
        }
        if self.finals_only && !entry.is_final {
            return false;
        }
        if !self.sports.is_empty() && !self.sports.contains(&entry.sport) {
            return false;
        }
        if !self.channels.is_empty() && !self.channels.contains(&entry.channel) {
            return false;
        }
        true
    }

    /// Flips a sport in or out of the selection; returns whether it is now
    /// selected.
    pub fn toggle_sport(&mut self, sport: &str) -> bool {
        if self.sports.remove(sport) {
            false
        } else {
            self.sports.insert(sport.to_string());
            true
        }
    }

    pub fn toggle_channel(&mut self, channel: Channel) -> bool {
        if self.channels.remove(&channel) {
            false
        } else {
            self.channels.insert(channel);
            true
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl DaySchedule {
    /// Entries passing `filters`, in display order. Lanes stay as packed for
    /// the whole day.
    pub fn visible_entries<'a>(
        &'a self,
        filters: &'a ActiveFilters,
    ) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |entry| filters.passes(entry))
    }
}
