use crate::schedule::{DaySchedule, ProcessedSchedule};
use crate::time::format_minutes;
use polars::prelude::PlSmallStr;
use polars::prelude::*;

impl DaySchedule {
    /// Tabular view of the day in display order, one row per entry.
    pub fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(10);

        let ids: Vec<&str> = self.entries.iter().map(|e| e.id.as_str()).collect();
        columns.push(Series::new(PlSmallStr::from_static("id"), ids).into_column());

        let starts: Vec<String> = self
            .entries
            .iter()
            .map(|e| format_minutes(e.start_minutes))
            .collect();
        columns.push(Series::new(PlSmallStr::from_static("start"), starts).into_column());

        let ends: Vec<String> = self
            .entries
            .iter()
            .map(|e| format_minutes(e.end_minutes))
            .collect();
        columns.push(Series::new(PlSmallStr::from_static("end"), ends).into_column());

        let durations: Vec<i32> = self.entries.iter().map(|e| e.duration_minutes).collect();
        columns.push(Series::new(PlSmallStr::from_static("duration"), durations).into_column());

        let lanes: Vec<u32> = self.entries.iter().map(|e| e.lane as u32).collect();
        columns.push(Series::new(PlSmallStr::from_static("lane"), lanes).into_column());

        let sports: Vec<&str> = self.entries.iter().map(|e| e.sport.as_str()).collect();
        columns.push(Series::new(PlSmallStr::from_static("sport"), sports).into_column());

        let events: Vec<&str> = self.entries.iter().map(|e| e.event.as_str()).collect();
        columns.push(Series::new(PlSmallStr::from_static("event"), events).into_column());

        let channels: Vec<&str> = self.entries.iter().map(|e| e.channel.as_str()).collect();
        columns.push(Series::new(PlSmallStr::from_static("channel"), channels).into_column());

        let finals: Vec<bool> = self.entries.iter().map(|e| e.is_final).collect();
        columns.push(Series::new(PlSmallStr::from_static("final"), finals).into_column());

        let sweden: Vec<bool> = self.entries.iter().map(|e| e.has_sweden).collect();
        columns.push(Series::new(PlSmallStr::from_static("sweden"), sweden).into_column());

        DataFrame::new(columns)
    }
}

impl ProcessedSchedule {
    /// One row per day: date, label, entry/lane/final counts and time window.
    pub fn days_dataframe(&self) -> PolarsResult<DataFrame> {
        let dates: Vec<&str> = self.days.iter().map(|d| d.date.as_str()).collect();
        let labels: Vec<&str> = self.days.iter().map(|d| d.label.as_str()).collect();
        let entries: Vec<u32> = self.days.iter().map(|d| d.entries.len() as u32).collect();
        let lanes: Vec<u32> = self.days.iter().map(|d| d.lane_count as u32).collect();
        let finals: Vec<u32> = self.days.iter().map(|d| d.finals_count() as u32).collect();
        let ranges: Vec<String> = self
            .days
            .iter()
            .map(|d| {
                format!(
                    "{}-{}",
                    format_minutes(d.time_range_start),
                    format_minutes(d.time_range_end)
                )
            })
            .collect();

        DataFrame::new(vec![
            Series::new(PlSmallStr::from_static("date"), dates).into_column(),
            Series::new(PlSmallStr::from_static("label"), labels).into_column(),
            Series::new(PlSmallStr::from_static("entries"), entries).into_column(),
            Series::new(PlSmallStr::from_static("lanes"), lanes).into_column(),
            Series::new(PlSmallStr::from_static("finals"), finals).into_column(),
            Series::new(PlSmallStr::from_static("range"), ranges).into_column(),
        ])
    }
}
