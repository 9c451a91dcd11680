pub mod composio;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Half-open time range searched for conflicting events.
#[derive(Debug, Clone, PartialEq)]
pub struct EventWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    /// Local wall-clock start in `timezone`.
    pub start: NaiveDateTime,
    pub timezone: Tz,
    pub duration_hours: u32,
    pub duration_minutes: u32,
    pub summary: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct CreatedEvent {
    pub id: Option<String>,
}

#[async_trait]
pub trait CalendarProvider: Send + Sync {
    async fn find_events(&self, window: &EventWindow) -> anyhow::Result<Vec<CalendarEvent>>;
    async fn create_event(&self, event: &NewEvent) -> anyhow::Result<CreatedEvent>;
}
