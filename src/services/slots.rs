use chrono::{DateTime, Duration, NaiveDate, Timelike};
use chrono_tz::Tz;

use crate::config::ServiceArea;
use crate::models::{TimeSlot, Zone};
use crate::services::rotation::{is_business_day, zone_for_date};

/// Bookable start times for a zone, earliest first.
pub fn slots_for(area: &ServiceArea, zone: Zone) -> Vec<TimeSlot> {
    match zone {
        Zone::Home => area.home_slots.iter().copied().map(TimeSlot::new).collect(),
        Zone::Pueblo | Zone::Valley => (area.hours.start..area.hours.end)
            .step_by(area.hours.slot_hours as usize)
            .map(TimeSlot::new)
            .collect(),
    }
}

/// Whether `zone` is worked on `date`. Home runs every business day.
pub fn serves_on(area: &ServiceArea, zone: Zone, date: NaiveDate) -> bool {
    if !is_business_day(date) {
        return false;
    }
    match zone {
        Zone::Home => true,
        _ => zone_for_date(&area.anchor, date) == zone,
    }
}

/// The next `count` dates on which `zone` is serviced, starting today (or tomorrow once
/// the working day is over).
pub fn next_available_dates(
    area: &ServiceArea,
    zone: Zone,
    count: usize,
    now: DateTime<Tz>,
) -> Vec<NaiveDate> {
    let mut current = now.date_naive();
    if now.hour() >= area.hours.end {
        current += Duration::days(1);
    }

    let mut dates = Vec::with_capacity(count);
    while dates.len() < count {
        if serves_on(area, zone, current) {
            dates.push(current);
        }
        current += Duration::days(1);
    }
    dates
}
