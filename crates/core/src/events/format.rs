//! Localized (de_CH) display strings for calendar instants

use chrono::{DateTime, Datelike, Locale, Utc};
use chrono_tz::Tz;
use seesturm_domain::constants::ALL_DAY_LABEL;

const LOCALE: Locale = Locale::de_CH;

/// Relative phrasing for instants on yesterday, today or tomorrow (in the
/// instant's own zone), otherwise `"1. Jun, 14:30 Uhr"`.
pub fn relative_date_time(instant: &DateTime<Tz>, now: DateTime<Utc>) -> String {
    let today = now.with_timezone(&instant.timezone()).date_naive();
    let day = instant.date_naive();
    let time = instant.format("%H:%M");

    let prefix = match (day - today).num_days() {
        0 => Some("Heute"),
        -1 => Some("Gestern"),
        1 => Some("Morgen"),
        _ => None,
    };

    match prefix {
        Some(prefix) => format!("{prefix}, {time} Uhr"),
        None => format!("{}, {time} Uhr", short_date(instant)),
    }
}

pub fn day_of_month(start: &DateTime<Tz>) -> String {
    start.format("%-d").to_string()
}

pub fn month_abbreviation(start: &DateTime<Tz>) -> String {
    start.format_localized("%b", LOCALE).to_string()
}

/// `"Juni 2025"`
pub fn month_label(instant: &DateTime<Tz>) -> String {
    instant.format_localized("%B %Y", LOCALE).to_string()
}

/// Weekday and date for single-day events, a date range otherwise.
pub fn full_date_string(start: &DateTime<Tz>, end: &DateTime<Tz>) -> String {
    if same_day(start, end) {
        start.format_localized("%A, %-d. %B %Y", LOCALE).to_string()
    } else {
        format!("{} - {}", long_date(start), long_date(end))
    }
}

pub fn time_string(start: &DateTime<Tz>, end: &DateTime<Tz>, is_all_day: bool) -> String {
    if is_all_day {
        ALL_DAY_LABEL.to_string()
    } else if same_day(start, end) {
        format!("{} bis {} Uhr", start.format("%H:%M"), end.format("%H:%M"))
    } else {
        format!(
            "{}, {} Uhr bis {}, {} Uhr",
            short_date(start),
            start.format("%H:%M"),
            short_date(end),
            end.format("%H:%M")
        )
    }
}

/// Date and time combined into one line.
///
/// Multi-day timed events already carry both dates in their time string.
pub fn date_time_string(start: &DateTime<Tz>, end: &DateTime<Tz>, is_all_day: bool) -> String {
    match (same_day(start, end), is_all_day) {
        (true, _) => {
            format!("{}, {}", full_date_string(start, end), time_string(start, end, is_all_day))
        }
        (false, true) => full_date_string(start, end),
        (false, false) => time_string(start, end, is_all_day),
    }
}

fn same_day(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    a.year() == b.year() && a.ordinal() == b.ordinal()
}

fn short_date(instant: &DateTime<Tz>) -> String {
    instant.format_localized("%-d. %b", LOCALE).to_string()
}

fn long_date(instant: &DateTime<Tz>) -> String {
    instant.format_localized("%-d. %B %Y", LOCALE).to_string()
}
