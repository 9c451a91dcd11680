use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_name: String,
    pub phone: String,
    pub zip_code: String,
    pub appliance_type: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time_slot: Option<String>,
}

impl BookingRequest {
    /// The requested time, ignoring blank input.
    pub fn requested_time(&self) -> Option<&str> {
        self.time_slot
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl BookingOutcome {
    pub fn booked(message: String, event_id: Option<String>) -> Self {
        Self {
            success: true,
            message,
            event_id,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            event_id: None,
        }
    }
}
