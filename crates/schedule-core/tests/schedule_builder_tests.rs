use broadcast_schedule::{
    ActiveFilters, Channel, DaySchedule, ProcessedSchedule, ProcessingConfig, day_label,
    process_schedule, process_schedule_with, sport_display_name,
};
use serde_json::{Value, json};

fn rec(date: &str, start: &str, end: &str, sport: &str, event: &str) -> Value {
    json!({
        "date": date, "start": start, "end": end,
        "sport": sport, "event": event, "channel": "SVT",
        "isFinal": false, "hasSweden": false
    })
}

fn flagged(mut record: Value, channel: &str, is_final: bool) -> Value {
    record["channel"] = json!(channel);
    record["isFinal"] = json!(is_final);
    record
}

fn lanes_by_sport(day: &DaySchedule) -> Vec<(&str, usize)> {
    day.entries
        .iter()
        .map(|e| (e.sport.as_str(), e.lane))
        .collect()
}

#[test]
fn two_overlapping_entries_scenario() {
    let schedule = process_schedule(&[
        rec("2026-02-07", "10:00", "11:00", "Alpine", "Downhill"),
        rec("2026-02-07", "10:30", "11:30", "Curling", "Round Robin"),
    ])
    .unwrap();

    assert_eq!(schedule.days.len(), 1);
    let day = &schedule.days[0];
    assert_eq!(lanes_by_sport(day), vec![("Alpine", 0), ("Curling", 1)]);
    assert_eq!(day.lane_count, 2);
    assert_eq!(day.time_range_start, 600);
    assert_eq!(day.time_range_end, 720);
}

#[test]
fn touching_entry_reuses_lane_zero() {
    let schedule = process_schedule(&[
        rec("2026-02-07", "10:00", "11:00", "Alpine", "Downhill"),
        rec("2026-02-07", "10:30", "11:30", "Curling", "Round Robin"),
        rec("2026-02-07", "11:00", "12:00", "Luge", "Run 1"),
    ])
    .unwrap();
    let day = &schedule.days[0];
    assert_eq!(
        lanes_by_sport(day),
        vec![("Alpine", 0), ("Curling", 1), ("Luge", 0)]
    );
    assert_eq!(day.lane_count, 2);
    assert_eq!(day.time_range_end, 720);
}

#[test]
fn rollover_entry_extends_range_past_midnight() {
    let schedule = process_schedule(&[rec(
        "2026-02-07",
        "23:30",
        "00:15",
        "Ice Hockey",
        "Late Game",
    )])
    .unwrap();
    let entry = &schedule.days[0].entries[0];
    assert_eq!(entry.start_minutes, 1410);
    assert_eq!(entry.end_minutes, 1455);
    assert_eq!(entry.duration_minutes, 45);
    assert_eq!(schedule.days[0].time_range_start, 1380);
    assert_eq!(schedule.days[0].time_range_end, 1500);
}

#[test]
fn early_start_is_clamped_to_eight() {
    let schedule = process_schedule(&[
        rec("2026-02-07", "06:15", "07:00", "Alpine", "Training"),
        rec("2026-02-07", "09:10", "10:20", "Alpine", "Race"),
    ])
    .unwrap();
    assert_eq!(schedule.days[0].time_range_start, 480);
    assert_eq!(schedule.days[0].time_range_end, 660);
}

#[test]
fn config_changes_range_floor_and_general_sports() {
    let config = ProcessingConfig {
        general_sports: vec!["Studio".into()],
        earliest_range_start: 360,
    };
    let schedule = process_schedule_with(
        &[
            rec("2026-02-07", "06:15", "07:00", "Studio", "Morning Show"),
            rec("2026-02-07", "06:30", "07:30", "Ceremony", "Rehearsal"),
        ],
        &config,
    )
    .unwrap();
    let day = &schedule.days[0];
    assert_eq!(day.time_range_start, 360);
    assert!(day.entries[0].is_general);
    assert!(!day.entries[1].is_general);
    assert_eq!(schedule.sports, vec!["Ceremony".to_string()]);
}

#[test]
fn generals_sit_above_packed_regulars() {
    let schedule = process_schedule(&[
        rec("2026-02-06", "10:00", "11:00", "Alpine", "Downhill"),
        rec("2026-02-06", "20:00", "23:00", "Ceremony", "Opening Ceremony"),
        rec("2026-02-06", "08:00", "22:00", "General", "Studio"),
        rec("2026-02-06", "10:30", "11:30", "Curling", "Round Robin"),
    ])
    .unwrap();
    let day = &schedule.days[0];
    let lane_of = |sport: &str| day.entries.iter().find(|e| e.sport == sport).unwrap().lane;
    assert_eq!(lane_of("Ceremony"), 0);
    assert_eq!(lane_of("General"), 1);
    assert_eq!(lane_of("Alpine"), 2);
    assert_eq!(lane_of("Curling"), 3);
    assert_eq!(day.lane_count, 4);
    assert_eq!(day.general_lane_count(), 2);
    assert_eq!(day.time_range_end, 1380);
}

#[test]
fn entries_are_in_display_order() {
    let schedule = process_schedule(&[
        rec("2026-02-07", "12:00", "13:00", "Luge", "Run"),
        rec("2026-02-07", "10:00", "10:30", "Curling", "Short"),
        rec("2026-02-07", "10:00", "12:00", "Alpine", "Long"),
    ])
    .unwrap();
    let order: Vec<(&str, usize)> = schedule.days[0]
        .entries
        .iter()
        .map(|e| (e.event.as_str(), e.lane))
        .collect();
    assert_eq!(order, vec![("Long", 0), ("Short", 1), ("Run", 0)]);
}

#[test]
fn days_and_facets_are_sorted_and_distinct() {
    let schedule = process_schedule(&[
        flagged(rec("2026-02-08", "10:00", "11:00", "Luge", "Run"), "TV4", false),
        rec("2026-02-07", "10:00", "11:00", "Alpine", "Downhill"),
        rec("2026-02-08", "12:00", "13:00", "Alpine", "Slalom"),
        rec("2026-02-06", "20:00", "22:00", "Ceremony", "Opening"),
        rec("2026-02-07", "14:00", "15:00", "General", "Studio"),
    ])
    .unwrap();
    assert_eq!(schedule.dates, vec!["2026-02-06", "2026-02-07", "2026-02-08"]);
    assert_eq!(
        schedule.days.iter().map(|d| d.date.as_str()).collect::<Vec<_>>(),
        schedule.dates
    );
    assert_eq!(schedule.sports, vec!["Alpine", "Luge"]);
    assert_eq!(schedule.channels, vec![Channel::Svt, Channel::Tv4]);
    assert_eq!(schedule.entry_count(), 5);
    assert_eq!(schedule.default_date(), Some("2026-02-07"));
    assert_eq!(schedule.days[0].label, "Fre 6 feb");
    assert_eq!(schedule.days[1].label, "Lör 7 feb");
}

#[test]
fn processing_is_deterministic() {
    let records = vec![
        rec("2026-02-07", "10:00", "11:00", "Alpine", "Downhill"),
        rec("2026-02-07", "10:00", "11:00", "Alpine", "Downhill"),
        rec("2026-02-07", "10:30", "11:30", "Curling", "Round Robin"),
        rec("2026-02-08", "23:00", "01:00", "Ice Hockey", "Game"),
    ];
    let first = process_schedule(&records).unwrap();
    let second = process_schedule(&records).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
    let ids: Vec<&str> = first.days[0].entries.iter().map(|e| e.id.as_str()).collect();
    assert!(ids.contains(&"2026-02-07-10:00-alpine-downhill"));
    assert!(ids.contains(&"2026-02-07-10:00-alpine-downhill-1"));
}

#[test]
fn empty_input_yields_empty_schedule() {
    let schedule = process_schedule(&[]).unwrap();
    assert_eq!(schedule, ProcessedSchedule::default());
    assert_eq!(schedule.default_date(), None);
}

#[test]
fn empty_day_does_not_panic() {
    let day = DaySchedule::build("2026-02-07", Vec::new(), &ProcessingConfig::default());
    assert_eq!(day.lane_count, 0);
    assert_eq!(day.time_range_start, 480);
    assert_eq!(day.time_range_end, 480);
    assert_eq!(day.general_lane_count(), 0);
    assert!(day.is_empty());
}

#[test]
fn serialized_shape_uses_camel_case() {
    let schedule = process_schedule(&[rec("2026-02-07", "10:00", "11:00", "Alpine", "Downhill")])
        .unwrap();
    let value = serde_json::to_value(&schedule).unwrap();
    let day = &value["days"][0];
    assert_eq!(day["laneCount"], json!(1));
    assert_eq!(day["timeRangeStart"], json!(600));
    let entry = &day["entries"][0];
    assert_eq!(entry["startMinutes"], json!(600));
    assert_eq!(entry["durationMinutes"], json!(60));
    assert_eq!(entry["isGeneral"], json!(false));
    assert_eq!(entry["channel"], json!("SVT"));
}

#[test]
fn filters_keep_generals_and_match_all_active_sets() {
    let schedule = process_schedule(&[
        flagged(rec("2026-02-07", "10:00", "11:00", "Alpine", "Downhill"), "SVT", true),
        flagged(rec("2026-02-07", "10:00", "11:00", "Curling", "Round Robin"), "TV4", false),
        flagged(rec("2026-02-07", "12:00", "13:00", "Curling", "Final"), "TV4", true),
        rec("2026-02-07", "08:00", "22:00", "General", "Studio"),
    ])
    .unwrap();
    let day = &schedule.days[0];
    assert_eq!(day.finals_count(), 2);

    let mut filters = ActiveFilters::default();
    assert!(filters.is_empty());
    assert_eq!(day.visible_entries(&filters).count(), 4);

    filters.finals_only = true;
    let events: Vec<&str> = day.visible_entries(&filters).map(|e| e.event.as_str()).collect();
    assert_eq!(events, vec!["Studio", "Downhill", "Final"]);

    assert!(filters.toggle_sport("Curling"));
    assert!(filters.toggle_channel(Channel::Tv4));
    let events: Vec<&str> = day.visible_entries(&filters).map(|e| e.event.as_str()).collect();
    assert_eq!(events, vec!["Studio", "Final"]);

    assert!(!filters.toggle_sport("Curling"));
    filters.clear();
    assert!(filters.is_empty());
}

#[test]
fn labels_and_display_names() {
    assert_eq!(day_label("2026-02-07"), "Lör 7 feb");
    assert_eq!(day_label("2026-02-22"), "Sön 22 feb");
    assert_eq!(day_label("2026-03-02"), "Mån 2 mar");
    assert_eq!(day_label("not-a-date"), "not-a-date");
    assert_eq!(sport_display_name("Ice Hockey"), "Ishockey");
    assert_eq!(sport_display_name("Ceremony"), "Ceremoni");
    assert_eq!(sport_display_name("Padel"), "Padel");
}

#[test]
fn entries_are_found_by_id_across_days() {
    let schedule = process_schedule(&[
        rec("2026-02-07", "10:00", "11:00", "Alpine", "Downhill"),
        rec("2026-02-07", "10:30", "11:30", "Curling", "Round Robin"),
        rec("2026-02-08", "10:00", "11:00", "Luge", "Run 1"),
    ])
    .unwrap();

    let luge = schedule.find_entry("2026-02-08-10:00-luge-run-1").unwrap();
    assert_eq!(luge.date, "2026-02-08");
    assert!(schedule.find_entry("2026-02-09-10:00-luge-run-1").is_none());

    let alpine = schedule.find_entry("2026-02-07-10:00-alpine-downhill").unwrap();
    let curling = schedule.find_entry("2026-02-07-10:30-curling-round-robin").unwrap();
    assert!(alpine.overlaps(curling));
    assert!(curling.overlaps(alpine));
}
