use crate::calendar;
use crate::config::ProcessingConfig;
use crate::entry::{Channel, Entry};
use crate::identity::IdAssigner;
use crate::lanes::{self, LaneInterval};
use crate::time;
use crate::validation::{self, CheckedEntry, ValidationError};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

/// All entries sharing one calendar date, lane-packed and in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    pub date: String,
    pub label: String,
    pub entries: Vec<Entry>,
    pub lane_count: usize,
    pub time_range_start: i32,
    pub time_range_end: i32,
}

impl DaySchedule {
    /// Packs `entries` (which must all share `date`) and derives the day's
    /// lane count and visible time window.
    pub fn build(date: impl Into<String>, entries: Vec<Entry>, config: &ProcessingConfig) -> Self {
        let date = date.into();
        let intervals: Vec<LaneInterval> = entries.iter().map(LaneInterval::from).collect();
        let assignment = lanes::assign_lanes(&intervals);

        let mut entries: Vec<Entry> = entries
            .into_iter()
            .zip(assignment.lanes())
            .map(|(entry, &lane)| Entry { lane, ..entry })
            .collect();
        entries.sort_by(|a, b| {
            a.start_minutes
                .cmp(&b.start_minutes)
                .then_with(|| a.lane.cmp(&b.lane))
        });

        let (time_range_start, time_range_end) = Self::time_range(&entries, config);
        debug!(
            "day {date}: {} entries, {} lanes, range {}..{}",
            entries.len(),
            assignment.lane_count(),
            time_range_start,
            time_range_end
        );

        Self {
            label: calendar::day_label(&date),
            date,
            entries,
            lane_count: assignment.lane_count(),
            time_range_start,
            time_range_end,
        }
    }

    /// Hour-aligned window covering every entry, never starting before the
    /// configured floor. An empty day collapses to `[floor, floor]`.
    fn time_range(entries: &[Entry], config: &ProcessingConfig) -> (i32, i32) {
        let floor = config.earliest_range_start;
        let min_start = entries.iter().map(|e| e.start_minutes).min();
        let max_end = entries.iter().map(|e| e.end_minutes).max();
        match (min_start, max_end) {
            (Some(min_start), Some(max_end)) => (
                time::floor_to_hour(min_start).max(floor),
                time::ceil_to_hour(max_end),
            ),
            _ => (floor, floor),
        }
    }

    /// Same entries with lanes recomputed from scratch. The day itself is not
    /// modified.
    pub fn repacked_entries(&self) -> Vec<Entry> {
        lanes::repack(&self.entries)
    }

    pub fn find_entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn finals_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_final).count()
    }

    /// Number of top lanes reserved for general rows.
    pub fn general_lane_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.is_general)
            .map(|entry| entry.lane + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Facet sets exposed to filter and navigation components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub sports: Vec<String>,
    pub channels: Vec<Channel>,
    pub dates: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessedSchedule {
    pub days: Vec<DaySchedule>,
    pub sports: Vec<String>,
    pub dates: Vec<String>,
    pub channels: Vec<Channel>,
}

impl ProcessedSchedule {
    pub fn day(&self, date: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Day a viewer lands on first: the second date when there is more than
    /// one, otherwise the only date.
    pub fn default_date(&self) -> Option<&str> {
        self.dates
            .get(1)
            .or_else(|| self.dates.first())
            .map(String::as_str)
    }

    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|day| day.entries.len()).sum()
    }

    pub fn find_entry(&self, id: &str) -> Option<&Entry> {
        self.days.iter().find_map(|day| day.find_entry(id))
    }

    pub fn facets(&self) -> Facets {
        Facets {
            sports: self.sports.clone(),
            channels: self.channels.clone(),
            dates: self.dates.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Validates, normalizes and identifies every record. Fails on the first
/// malformed record; entries come back in input order with lane 0.
pub fn parse_entries(
    records: &[Value],
    config: &ProcessingConfig,
) -> Result<Vec<Entry>, ValidationError> {
    let checked = validation::validate_entries(records)?;
    let mut ids = IdAssigner::new();
    let entries = checked
        .into_iter()
        .map(|CheckedEntry { raw, span }| {
            let id = ids.assign(&raw);
            let is_general = config.is_general(&raw.sport);
            Entry::from_raw(raw, id, span, is_general)
        })
        .collect();
    Ok(entries)
}

/// Groups already-normalized entries by date and packs every day.
pub fn build_schedule(entries: Vec<Entry>, config: &ProcessingConfig) -> ProcessedSchedule {
    let mut grouped: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
    for entry in entries {
        grouped.entry(entry.date.clone()).or_default().push(entry);
    }

    let mut sports = BTreeSet::new();
    let mut channels = BTreeSet::new();
    let mut days = Vec::with_capacity(grouped.len());
    for (date, day_entries) in grouped {
        for entry in &day_entries {
            if !entry.is_general {
                sports.insert(entry.sport.clone());
            }
            channels.insert(entry.channel);
        }
        days.push(DaySchedule::build(date, day_entries, config));
    }

    ProcessedSchedule {
        dates: days.iter().map(|day| day.date.clone()).collect(),
        days,
        sports: sports.into_iter().collect(),
        channels: channels.into_iter().collect(),
    }
}

pub fn process_schedule(records: &[Value]) -> Result<ProcessedSchedule, ValidationError> {
    process_schedule_with(records, &ProcessingConfig::default())
}

/// Full batch transform from raw records to the processed schedule.
pub fn process_schedule_with(
    records: &[Value],
    config: &ProcessingConfig,
) -> Result<ProcessedSchedule, ValidationError> {
    let entries = parse_entries(records, config).inspect_err(|err| {
        warn!("rejected schedule batch of {} records: {err}", records.len());
    })?;
    let schedule = build_schedule(entries, config);
    info!(
        "processed {} records into {} days ({} sports, {} channels)",
        records.len(),
        schedule.days.len(),
        schedule.sports.len(),
        schedule.channels.len()
    );
    Ok(schedule)
}
