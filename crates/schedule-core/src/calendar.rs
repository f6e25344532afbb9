use chrono::{Datelike, NaiveDate};

/// Weekday abbreviations indexed from Sunday.
const WEEKDAY_NAMES: [&str; 7] = ["Sön", "Mån", "Tis", "Ons", "Tor", "Fre", "Lör"];

const MONTH_NAMES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "maj", "jun", "jul", "aug", "sep", "okt", "nov", "dec",
];

pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Display label such as `Lör 7 feb`. Dates that do not parse are returned
/// as-is.
pub fn day_label(date: &str) -> String {
    match parse_date(date) {
        Some(day) => format!(
            "{} {} {}",
            WEEKDAY_NAMES[day.weekday().num_days_from_sunday() as usize],
            day.day(),
            MONTH_NAMES[day.month0() as usize]
        ),
        None => date.to_string(),
    }
}
