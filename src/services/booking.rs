use chrono::{DateTime, Duration, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::config::{ServiceArea, TIMEZONE};
use crate::models::{format_slot, parse_slot, BookingOutcome, BookingRequest, Rejection};
use crate::services::calendar::{CalendarProvider, EventWindow, NewEvent};
use crate::services::validation::validate_request;

/// Every appointment blocks a two-hour arrival window.
pub const APPOINTMENT_HOURS: u32 = 2;

const ALREADY_BOOKED: &str = "That time slot is already booked. Please choose another time.";

/// Validates the request, checks the calendar for a conflicting event in the slot's window
/// and creates the appointment. Never fails outright: every path ends in a `BookingOutcome`.
///
/// A calendar that cannot be reached during the conflict check counts as free. No SMS
/// confirmation is sent.
pub async fn book_appointment(
    area: &ServiceArea,
    calendar: &dyn CalendarProvider,
    request: &BookingRequest,
    now: DateTime<Tz>,
) -> BookingOutcome {
    let validation = validate_request(
        area,
        &request.zip_code,
        request.date,
        request.requested_time(),
        &request.appliance_type,
        now.date_naive(),
    );
    if !validation.accepted {
        let reason = validation.reason.unwrap_or_default();
        tracing::info!(zip = %request.zip_code, date = %request.date, reason = %reason, "booking rejected");
        return BookingOutcome::failed(reason);
    }

    let Some(requested_time) = request.requested_time() else {
        let rejection = Rejection::MissingTime {
            options: validation.available_slots,
        };
        return BookingOutcome::failed(rejection.to_string());
    };
    // Validation already matched the time against a slot.
    let Ok(hour) = parse_slot(requested_time) else {
        return BookingOutcome::failed(format!("Invalid time: {requested_time}"));
    };

    let Some(local_start) = NaiveTime::from_hms_opt(hour, 0, 0).map(|t| request.date.and_time(t))
    else {
        return BookingOutcome::failed(format!("Invalid time: {requested_time}"));
    };
    let Some(start) = TIMEZONE.from_local_datetime(&local_start).earliest() else {
        return BookingOutcome::failed(format!(
            "{requested_time} does not exist on {} in local time.",
            request.date
        ));
    };

    let window = EventWindow {
        start,
        end: start + Duration::hours(i64::from(APPOINTMENT_HOURS)),
    };

    match calendar.find_events(&window).await {
        Ok(events) if !events.is_empty() => {
            tracing::info!(start = %window.start, conflicts = events.len(), "slot already booked");
            return BookingOutcome::failed(ALREADY_BOOKED);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(error = %e, start = %window.start, "calendar check failed, treating slot as free");
        }
    }

    let event = new_event(request, requested_time, local_start, hour);
    match calendar.create_event(&event).await {
        Ok(created) => {
            tracing::info!(
                customer = %request.customer_name,
                zone = ?validation.zone,
                start = %window.start,
                event_id = ?created.id,
                "appointment booked"
            );
            BookingOutcome::booked(
                format!(
                    "Appointment booked for {}! Calendar event created. SMS confirmation will be available once text messaging is verified.",
                    request.customer_name
                ),
                created.id,
            )
        }
        Err(e) => {
            tracing::error!(error = %e, customer = %request.customer_name, "failed to create calendar event");
            BookingOutcome::failed(format!("Failed to create appointment: {e}"))
        }
    }
}

fn new_event(
    request: &BookingRequest,
    requested_time: &str,
    local_start: NaiveDateTime,
    hour: u32,
) -> NewEvent {
    let description = format!(
        "Appliance: {}\n\
         Customer: {}\n\
         Phone: {}\n\
         ZIP: {}\n\
         Arrival Window: {} - {}\n\
         \n\
         NOTE: SMS confirmation not sent (text messaging not yet verified)\n",
        request.appliance_type,
        request.customer_name,
        request.phone,
        request.zip_code,
        requested_time,
        format_slot(hour + APPOINTMENT_HOURS),
    );

    NewEvent {
        start: local_start,
        timezone: TIMEZONE,
        duration_hours: APPOINTMENT_HOURS,
        duration_minutes: 0,
        summary: format!("Repair: {} - {}", request.appliance_type, request.customer_name),
        description,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::services::calendar::{CalendarEvent, CreatedEvent};

    #[derive(Default)]
    struct FakeCalendar {
        events: Vec<CalendarEvent>,
        find_fails: bool,
        create_error: Option<String>,
        windows: Mutex<Vec<EventWindow>>,
        created: Mutex<Vec<NewEvent>>,
    }

    #[async_trait]
    impl CalendarProvider for FakeCalendar {
        async fn find_events(&self, window: &EventWindow) -> anyhow::Result<Vec<CalendarEvent>> {
            self.windows.lock().unwrap().push(window.clone());
            if self.find_fails {
                anyhow::bail!("connection refused");
            }
            Ok(self.events.clone())
        }

        async fn create_event(&self, event: &NewEvent) -> anyhow::Result<CreatedEvent> {
            self.created.lock().unwrap().push(event.clone());
            match &self.create_error {
                Some(err) => anyhow::bail!("{err}"),
                None => Ok(CreatedEvent {
                    id: Some("evt-123".to_string()),
                }),
            }
        }
    }

    fn area() -> ServiceArea {
        ServiceArea::malones().unwrap()
    }

    fn now() -> DateTime<Tz> {
        TIMEZONE.with_ymd_and_hms(2025, 12, 1, 8, 0, 0).unwrap()
    }

    fn request(zip: &str, date: NaiveDate, time: Option<&str>) -> BookingRequest {
        BookingRequest {
            customer_name: "Dana Ruiz".to_string(),
            phone: "719-555-0142".to_string(),
            zip_code: zip.to_string(),
            appliance_type: "Washer".to_string(),
            date,
            time_slot: time.map(str::to_string),
        }
    }

    fn tuesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 2).unwrap()
    }

    #[tokio::test]
    async fn test_home_booking_succeeds() {
        let calendar = FakeCalendar::default();
        let outcome = book_appointment(&area(), &calendar, &request("81039", tuesday(), Some("9:00 AM")), now()).await;

        assert!(outcome.success);
        assert_eq!(outcome.event_id.as_deref(), Some("evt-123"));
        assert!(outcome.message.starts_with("Appointment booked for Dana Ruiz!"));
        assert!(outcome.message.contains("SMS confirmation will be available"));

        let windows = calendar.windows.lock().unwrap();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].start.to_rfc3339(), "2025-12-02T09:00:00-07:00");
        assert_eq!(windows[0].end.to_rfc3339(), "2025-12-02T11:00:00-07:00");

        let created = calendar.created.lock().unwrap();
        assert_eq!(created[0].summary, "Repair: Washer - Dana Ruiz");
        assert!(created[0].description.contains("Arrival Window: 9:00 AM - 11:00 AM"));
        assert!(created[0].description.contains("ZIP: 81039"));
        assert_eq!(created[0].start.format("%Y-%m-%dT%H:%M:%S").to_string(), "2025-12-02T09:00:00");
    }

    #[tokio::test]
    async fn test_validation_failure_skips_calendar() {
        let calendar = FakeCalendar::default();
        let outcome = book_appointment(&area(), &calendar, &request("99999", tuesday(), Some("9:00 AM")), now()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "Sorry, ZIP code 99999 is outside our service area.");
        assert!(calendar.windows.lock().unwrap().is_empty());
        assert!(calendar.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_conflict_reports_already_booked() {
        let calendar = FakeCalendar {
            events: vec![CalendarEvent {
                id: Some("existing".to_string()),
                summary: Some("Repair: Dryer - Lee".to_string()),
            }],
            ..Default::default()
        };
        let outcome = book_appointment(&area(), &calendar, &request("81001", tuesday(), Some("1:00 PM")), now()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, ALREADY_BOOKED);
        assert!(calendar.created.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_calendar_fails_open() {
        let calendar = FakeCalendar {
            find_fails: true,
            ..Default::default()
        };
        let outcome = book_appointment(&area(), &calendar, &request("81001", tuesday(), Some("3:00 PM")), now()).await;

        assert!(outcome.success);
        assert_eq!(calendar.created.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_failure_surfaces_error_text() {
        let calendar = FakeCalendar {
            create_error: Some("quota exceeded".to_string()),
            ..Default::default()
        };
        let outcome = book_appointment(&area(), &calendar, &request("81039", tuesday(), Some("4:00 PM")), now()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "Failed to create appointment: quota exceeded");
        assert_eq!(outcome.event_id, None);
    }

    #[tokio::test]
    async fn test_missing_time_lists_slots() {
        let calendar = FakeCalendar::default();
        let outcome = book_appointment(&area(), &calendar, &request("81039", tuesday(), None), now()).await;

        assert!(!outcome.success);
        assert_eq!(
            outcome.message,
            "Please choose an appointment time. Options: 9:00 AM, 4:00 PM"
        );
        assert!(calendar.windows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_arrival_window_crosses_noon() {
        let calendar = FakeCalendar::default();
        let outcome = book_appointment(&area(), &calendar, &request("81001", tuesday(), Some("11:00 am")), now()).await;

        assert!(outcome.success);
        let created = calendar.created.lock().unwrap();
        assert!(created[0].description.contains("Arrival Window: 11:00 am - 1:00 PM"));
    }
}
