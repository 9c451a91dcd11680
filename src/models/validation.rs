use serde::{Deserialize, Serialize};

use super::{TimeSlot, Zone};

/// A business rule that turned a request down. `Display` is the customer-facing reason.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Rejection {
    #[error("Sorry, we don't service {appliance}. We only service major appliances.")]
    ExcludedAppliance { appliance: String },

    #[error("Sorry, ZIP code {zip} is outside our service area.")]
    OutsideServiceArea { zip: String },

    #[error("We only schedule appointments Monday through Friday.")]
    Weekend,

    #[error("Cannot schedule appointments in the past.")]
    PastDate,

    #[error("We service the {} zone on different days.", .zone.title())]
    WrongDay { zone: Zone },

    #[error("Time {requested} not available. Options: {}", join_slots(.options))]
    TimeUnavailable {
        requested: String,
        options: Vec<TimeSlot>,
    },

    #[error("Please choose an appointment time. Options: {}", join_slots(.options))]
    MissingTime { options: Vec<TimeSlot> },
}

fn join_slots(slots: &[TimeSlot]) -> String {
    slots
        .iter()
        .map(TimeSlot::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    pub accepted: bool,
    pub reason: Option<String>,
    pub zone: Option<Zone>,
    pub available_slots: Vec<TimeSlot>,
}

impl ValidationResult {
    pub fn accepted(zone: Zone, available_slots: Vec<TimeSlot>) -> Self {
        Self {
            accepted: true,
            reason: None,
            zone: Some(zone),
            available_slots,
        }
    }

    pub fn rejected(rejection: &Rejection, zone: Option<Zone>, available_slots: Vec<TimeSlot>) -> Self {
        Self {
            accepted: false,
            reason: Some(rejection.to_string()),
            zone,
            available_slots,
        }
    }
}
