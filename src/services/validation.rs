use chrono::NaiveDate;

use crate::config::ServiceArea;
use crate::models::{format_slot, parse_slot, Coverage, Rejection, ValidationResult};
use crate::services::rotation::{is_business_day, zone_for_date};
use crate::services::slots::slots_for;
use crate::services::zones::classify;

/// Checks a request against the booking rules in a fixed order; the first rule that fails
/// decides the reason. `today` is the current date in shop time.
pub fn validate_request(
    area: &ServiceArea,
    zip: &str,
    date: NaiveDate,
    requested_time: Option<&str>,
    appliance_type: &str,
    today: NaiveDate,
) -> ValidationResult {
    let appliance_lower = appliance_type.to_lowercase();
    if area
        .excluded_appliances
        .iter()
        .any(|excluded| appliance_lower.contains(excluded.as_str()))
    {
        let rejection = Rejection::ExcludedAppliance {
            appliance: appliance_type.to_string(),
        };
        return ValidationResult::rejected(&rejection, None, Vec::new());
    }

    let zone = match classify(area, zip) {
        Coverage::Serviced(zone) => zone,
        Coverage::Unserviced => {
            let rejection = Rejection::OutsideServiceArea {
                zip: zip.to_string(),
            };
            return ValidationResult::rejected(&rejection, None, Vec::new());
        }
    };

    if !is_business_day(date) {
        return ValidationResult::rejected(&Rejection::Weekend, Some(zone), Vec::new());
    }

    // Only the calendar day matters; a slot earlier today is still accepted.
    if date < today {
        return ValidationResult::rejected(&Rejection::PastDate, Some(zone), Vec::new());
    }

    if zone.is_rotating() && zone_for_date(&area.anchor, date) != zone {
        return ValidationResult::rejected(&Rejection::WrongDay { zone }, Some(zone), Vec::new());
    }

    let available_slots = slots_for(area, zone);
    if let Some(requested) = requested_time.map(str::trim).filter(|t| !t.is_empty()) {
        let matches_slot = parse_slot(requested)
            .map(|hour| {
                let formatted = format_slot(hour);
                available_slots.iter().any(|slot| slot.to_string() == formatted)
            })
            .unwrap_or(false);

        if !matches_slot {
            let rejection = Rejection::TimeUnavailable {
                requested: requested.to_string(),
                options: available_slots.clone(),
            };
            return ValidationResult::rejected(&rejection, Some(zone), available_slots);
        }
    }

    ValidationResult::accepted(zone, available_slots)
}
