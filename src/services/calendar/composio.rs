use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde_json::{json, Value};

use super::{CalendarEvent, CalendarProvider, CreatedEvent, EventWindow, NewEvent};

const FIND_EVENT_ACTION: &str = "GOOGLECALENDAR_FIND_EVENT";
const CREATE_EVENT_ACTION: &str = "GOOGLECALENDAR_CREATE_EVENT";

/// Google Calendar reached through Composio's action-execution API.
pub struct ComposioCalendar {
    api_key: String,
    base_url: String,
    calendar_id: String,
    client: reqwest::Client,
}

impl ComposioCalendar {
    pub fn new(
        api_key: String,
        base_url: String,
        calendar_id: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build calendar HTTP client")?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            calendar_id,
            client,
        })
    }

    fn action_url(&self, action: &str) -> String {
        format!("{}/api/v2/actions/{action}/execute", self.base_url)
    }

    async fn execute(&self, action: &str, input: Value) -> anyhow::Result<reqwest::Response> {
        self.client
            .post(self.action_url(action))
            .header("X-API-Key", &self.api_key)
            .json(&json!({ "input": input }))
            .send()
            .await
            .with_context(|| format!("failed to call Composio action {action}"))
    }
}

#[async_trait]
impl CalendarProvider for ComposioCalendar {
    async fn find_events(&self, window: &EventWindow) -> anyhow::Result<Vec<CalendarEvent>> {
        let input = json!({
            "calendar_id": self.calendar_id,
            "timeMin": window.start.to_rfc3339(),
            "timeMax": window.end.to_rfc3339(),
            "single_events": true,
        });

        let data: Value = self
            .execute(FIND_EVENT_ACTION, input)
            .await?
            .error_for_status()
            .context("Composio find-event returned error")?
            .json()
            .await
            .context("failed to parse Composio find-event response")?;

        let items = data
            .pointer("/data/data/items")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));

        serde_json::from_value(items).context("unexpected event list in Composio response")
    }

    async fn create_event(&self, event: &NewEvent) -> anyhow::Result<CreatedEvent> {
        let input = json!({
            "calendar_id": self.calendar_id,
            "start_datetime": event.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            "timezone": event.timezone.name(),
            "event_duration_hour": event.duration_hours,
            "event_duration_minutes": event.duration_minutes,
            "summary": event.summary,
            "description": event.description,
        });

        let resp = self.execute(CREATE_EVENT_ACTION, input).await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("Composio create-event error ({status}): {text}");
        }

        let data: Value = resp
            .json()
            .await
            .context("failed to parse Composio create-event response")?;

        Ok(CreatedEvent {
            id: extract_event_id(&data),
        })
    }
}

fn extract_event_id(data: &Value) -> Option<String> {
    ["/data/response_data/id", "/data/id", "/response_data/id", "/id"]
        .iter()
        .find_map(|path| data.pointer(path).and_then(Value::as_str))
        .map(str::to_string)
}
