use broadcast_schedule::{
    ActiveFilters, Channel, DaySchedule, OverlapGraph, ProcessedSchedule, ProcessingConfig,
    format_minutes, load_config_from_json, load_schedule_from_csv, load_schedule_from_json,
    save_snapshot_to_json, sport_display_name,
};
use polars::prelude::{AnyValue, DataFrame, PolarsResult};
use std::io::{self, Write};

fn cell_text(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Boolean(true) => "yes".to_string(),
        AnyValue::Boolean(false) => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

fn render_df_as_text_table(df: &DataFrame) -> String {
    let columns = df.get_columns();
    let col_names: Vec<String> = columns.iter().map(|c| c.name().to_string()).collect();

    let mut cells: Vec<Vec<String>> = Vec::with_capacity(df.height());
    for row_idx in 0..df.height() {
        let row = columns
            .iter()
            .map(|col| col.get(row_idx).map(|av| cell_text(&av)).unwrap_or_default())
            .collect();
        cells.push(row);
    }

    let mut widths: Vec<usize> = col_names.iter().map(|n| n.chars().count()).collect();
    for row in &cells {
        for (ci, cell) in row.iter().enumerate() {
            widths[ci] = widths[ci].max(cell.chars().count());
        }
    }

    let mut sep = String::from("+");
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let render_row = |values: &[String]| {
        let mut line = String::from("|");
        for (ci, value) in values.iter().enumerate() {
            line.push(' ');
            line.push_str(value);
            line.push_str(&" ".repeat(widths[ci] - value.chars().count()));
            line.push_str(" |");
        }
        line
    };

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&col_names));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in &cells {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  load <json|csv> <path>             Process a raw schedule data file\n  config <json_path>                 Load processing config (applies to next load)\n  dates                              List days with lane and final counts\n  show [date]                        Show a day's entries (default day if omitted)\n  conflicts <id>                     List entries overlapping an entry\n  facets                             Show sports, channels and dates\n  filter sport <name...>             Toggle a sport filter\n  filter channel <SVT|TV4>           Toggle a channel filter\n  filter finals <on|off>             Only show finals\n  filter clear                       Remove all filters\n  filter show                        Show active filters\n  export <path>                      Save the processed schedule as JSON\n  quit|exit                          Exit"
    );
}

fn day_table(day: &DaySchedule, filters: &ActiveFilters) -> PolarsResult<String> {
    let visible = DaySchedule {
        entries: day.visible_entries(filters).cloned().collect(),
        ..day.clone()
    };
    Ok(render_df_as_text_table(&visible.to_dataframe()?))
}

fn print_day(day: &DaySchedule, filters: &ActiveFilters) {
    println!(
        "{} ({}) lanes={} general_lanes={} range={}-{} finals={}",
        day.label,
        day.date,
        day.lane_count,
        day.general_lane_count(),
        format_minutes(day.time_range_start),
        format_minutes(day.time_range_end),
        day.finals_count()
    );
    match day_table(day, filters) {
        Ok(table) => println!("{table}"),
        Err(e) => println!("Error rendering day: {e}"),
    }
}

fn print_facets(schedule: &ProcessedSchedule) {
    let sports = schedule
        .sports
        .iter()
        .map(|s| format!("{s} ({})", sport_display_name(s)))
        .collect::<Vec<_>>()
        .join(", ");
    let channels = schedule
        .channels
        .iter()
        .map(Channel::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Sports   : {sports}");
    println!("Channels : {channels}");
    println!("Dates    : {}", schedule.dates.join(", "));
}

fn print_filters(filters: &ActiveFilters) {
    let sports = filters.sports.iter().cloned().collect::<Vec<_>>().join(", ");
    let channels = filters
        .channels
        .iter()
        .map(Channel::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    println!("Sport filter   : {sports}");
    println!("Channel filter : {channels}");
    println!("Finals only    : {}", filters.finals_only);
}

fn main() {
    let mut schedule = ProcessedSchedule::default();
    let mut config = ProcessingConfig::default();
    let mut filters = ActiveFilters::default();

    println!("Broadcast Schedule (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "load" => {
                let format = parts.next();
                let path = parts.next();
                match (format, path) {
                    (Some(format @ ("json" | "csv")), Some(path)) => {
                        let res = if format == "json" {
                            load_schedule_from_json(path, &config)
                        } else {
                            load_schedule_from_csv(path, &config)
                        };
                        match res {
                            Ok(loaded) => {
                                schedule = loaded;
                                println!(
                                    "Loaded {} entries across {} days from {path}.",
                                    schedule.entry_count(),
                                    schedule.days.len()
                                );
                            }
                            Err(e) => println!("Error loading schedule: {e}"),
                        }
                    }
                    _ => println!("Usage: load <json|csv> <path>"),
                }
            }
            "config" => match parts.next() {
                Some(path) => match load_config_from_json(path) {
                    Ok(loaded) => {
                        config = loaded;
                        println!(
                            "Config loaded (general sports: {}). Reload data to apply.",
                            config.general_sports.join(", ")
                        );
                    }
                    Err(e) => println!("Error loading config: {e}"),
                },
                None => println!("Usage: config <json_path>"),
            },
            "dates" => {
                if schedule.is_empty() {
                    println!("No schedule loaded.");
                    continue;
                }
                match schedule.days_dataframe() {
                    Ok(df) => println!("{}", render_df_as_text_table(&df)),
                    Err(e) => println!("Error rendering days: {e}"),
                }
            }
            "show" => {
                let date = parts.next().or_else(|| schedule.default_date());
                match date.and_then(|date| schedule.day(date)) {
                    Some(day) => print_day(day, &filters),
                    None => match date {
                        Some(date) => println!("No schedule for {date}."),
                        None => println!("No schedule loaded."),
                    },
                }
            }
            "conflicts" => match parts.next() {
                Some(id) => {
                    let day = schedule
                        .days
                        .iter()
                        .find(|day| day.find_entry(id).is_some());
                    match day {
                        Some(day) => {
                            let graph = OverlapGraph::build(&day.entries);
                            match graph.conflicts_of(id) {
                                Some(ids) if ids.is_empty() => {
                                    println!("{id} overlaps nothing.")
                                }
                                Some(ids) => println!("{id} overlaps: {}", ids.join(", ")),
                                None => println!("{id} is a general row."),
                            }
                        }
                        None => println!("Entry {id} not found."),
                    }
                }
                None => println!("Usage: conflicts <id>"),
            },
            "facets" => print_facets(&schedule),
            "filter" => {
                let sub = parts.next().unwrap_or("");
                match sub {
                    "sport" => {
                        let name = parts.collect::<Vec<_>>().join(" ");
                        if name.is_empty() {
                            println!("Usage: filter sport <name...>");
                        } else if filters.toggle_sport(&name) {
                            println!("Sport filter added: {name}");
                        } else {
                            println!("Sport filter removed: {name}");
                        }
                    }
                    "channel" => match parts.next().and_then(Channel::from_token) {
                        Some(channel) => {
                            if filters.toggle_channel(channel) {
                                println!("Channel filter added: {channel}");
                            } else {
                                println!("Channel filter removed: {channel}");
                            }
                        }
                        None => println!("Usage: filter channel <SVT|TV4>"),
                    },
                    "finals" => match parts.next() {
                        Some("on") => {
                            filters.finals_only = true;
                            println!("Showing finals only.");
                        }
                        Some("off") => {
                            filters.finals_only = false;
                            println!("Showing all events.");
                        }
                        _ => println!("Usage: filter finals <on|off>"),
                    },
                    "clear" => {
                        filters.clear();
                        println!("Filters cleared.");
                    }
                    "show" => print_filters(&filters),
                    _ => println!("Usage: filter <sport|channel|finals|clear|show> ..."),
                }
            }
            "export" => match parts.next() {
                Some(path) => match save_snapshot_to_json(&schedule, path) {
                    Ok(()) => println!("Schedule exported to {path}."),
                    Err(e) => println!("Error exporting schedule: {e}"),
                },
                None => println!("Usage: export <path>"),
            },
            _ => println!("Unknown command '{cmd}'. Type 'help' for commands."),
        }
    }
}
