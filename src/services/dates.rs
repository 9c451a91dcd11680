//! Loose date handling for conversational input. Nothing here feeds validation; a
//! date picked from free text is still checked like any other request.

use chrono::{DateTime, Datelike, Duration, NaiveDate};
use chrono_tz::Tz;

const WEEKDAY_NAMES: [&str; 5] = ["monday", "tuesday", "wednesday", "thursday", "friday"];
const ORDINALS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];

/// Best-effort guess at the date a customer means. Understands "today", "tomorrow",
/// weekday names (always the next such day after today), and picking from `options` by
/// number ("2") or ordinal ("second").
pub fn parse_natural_date(text: &str, now: DateTime<Tz>, options: &[NaiveDate]) -> Option<NaiveDate> {
    let lower = text.to_lowercase();
    let today = now.date_naive();

    if lower.contains("today") {
        return Some(today);
    }
    if lower.contains("tomorrow") {
        return Some(today + Duration::days(1));
    }

    if let Some(index) = WEEKDAY_NAMES.iter().position(|day| lower.contains(day)) {
        let mut days_ahead = index as i64 - i64::from(today.weekday().num_days_from_monday());
        if days_ahead <= 0 {
            days_ahead += 7;
        }
        return Some(today + Duration::days(days_ahead));
    }

    options.iter().enumerate().find_map(|(i, date)| {
        let by_number = lower.contains(&(i + 1).to_string());
        let by_ordinal = ORDINALS.get(i).is_some_and(|word| lower.contains(word));
        (by_number || by_ordinal).then_some(*date)
    })
}

/// Numbered list for presenting choices, e.g. "1. Tuesday, December 02".
pub fn format_date_options(dates: &[NaiveDate]) -> Vec<String> {
    dates
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{}. {}", i + 1, d.format("%A, %B %d")))
        .collect()
}
