pub mod calendar;
pub mod config;
pub mod entry;
pub mod filters;
pub mod frame;
pub mod graph;
#[cfg(feature = "http_api")]
pub mod http_api;
pub mod identity;
pub mod lanes;
pub mod persistence;
pub mod schedule;
pub mod sports;
pub mod time;
pub mod validation;

pub use calendar::day_label;
pub use config::ProcessingConfig;
pub use entry::{Channel, Entry, RawEntry};
pub use filters::ActiveFilters;
pub use graph::OverlapGraph;
pub use identity::{IdAssigner, slugify};
pub use lanes::{LaneAssignment, LaneInterval, assign_lanes, repack};
pub use persistence::{
    PersistenceError, PersistenceResult, load_config_from_json, load_raw_records_from_csv,
    load_raw_records_from_json, load_schedule_from_csv, load_schedule_from_json,
    load_snapshot_from_json, save_snapshot_to_json, validate_snapshot,
};
pub use schedule::{
    DaySchedule, Facets, ProcessedSchedule, build_schedule, parse_entries, process_schedule,
    process_schedule_with,
};
pub use sports::sport_display_name;
pub use time::{TimeParseError, TimeSpan, format_minutes, parse_time};
pub use validation::{
    CheckedEntry, ValidationError, ValidationErrorKind, validate_entries, validate_entry,
};
