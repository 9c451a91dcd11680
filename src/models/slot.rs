use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotParseError {
    #[error("invalid time: {0}")]
    Invalid(String),

    #[error("hour out of range: {0}")]
    OutOfRange(String),
}

/// An appointment window identified by its start hour (0-23).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct TimeSlot(u32);

impl TimeSlot {
    pub fn new(hour: u32) -> Self {
        Self(hour)
    }

    pub fn hour(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_slot(self.0))
    }
}

impl FromStr for TimeSlot {
    type Err = SlotParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_slot(s).map(TimeSlot)
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = SlotParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Renders an hour as "9:00 AM" / "12:00 PM" / "4:00 PM".
pub fn format_slot(hour: u32) -> String {
    match hour {
        0 => "12:00 AM".to_string(),
        12 => "12:00 PM".to_string(),
        h if h > 12 => format!("{}:00 PM", h - 12),
        h => format!("{h}:00 AM"),
    }
}

/// Parses "9:00 AM", "4 pm", "14:00" into a 24h hour. Minutes are ignored.
pub fn parse_slot(text: &str) -> Result<u32, SlotParseError> {
    let upper = text.trim().to_uppercase();
    let is_pm = upper.contains("PM");
    let is_am = upper.contains("AM");

    let time_part = upper.replace("AM", "").replace("PM", "");
    let hour_part = time_part.trim().split(':').next().unwrap_or("").trim();

    let mut hour: u32 = hour_part
        .parse()
        .map_err(|_| SlotParseError::Invalid(text.to_string()))?;

    // Bound before adjusting; a 12h clock never reads past 12.
    let limit = if is_am || is_pm { 12 } else { 23 };
    if hour > limit {
        return Err(SlotParseError::OutOfRange(text.to_string()));
    }

    if is_pm && hour != 12 {
        hour += 12;
    } else if is_am && hour == 12 {
        hour = 0;
    }
    Ok(hour)
}
