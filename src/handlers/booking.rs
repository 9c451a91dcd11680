use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::shop_now;
use crate::models::{BookingOutcome, BookingRequest, ValidationResult, Zone};
use crate::services::booking::book_appointment;
use crate::services::dates::{format_date_options, parse_natural_date};
use crate::services::slots::next_available_dates;
use crate::services::validation::validate_request;
use crate::state::AppState;

const DATE_OPTION_COUNT: usize = 5;

// POST /api/validate
#[derive(Deserialize)]
pub struct ValidateRequest {
    pub zip_code: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time_slot: Option<String>,
    pub appliance_type: String,
}

pub async fn validate(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ValidateRequest>,
) -> Json<ValidationResult> {
    let result = validate_request(
        &state.area,
        &payload.zip_code,
        payload.date,
        payload.time_slot.as_deref(),
        &payload.appliance_type,
        shop_now().date_naive(),
    );
    Json(result)
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingRequest>,
) -> Json<BookingOutcome> {
    tracing::info!(
        zip = %payload.zip_code,
        date = %payload.date,
        time = ?payload.time_slot,
        "booking request"
    );
    let outcome =
        book_appointment(&state.area, state.calendar.as_ref(), &payload, shop_now()).await;
    Json(outcome)
}

// POST /api/dates/parse
#[derive(Deserialize)]
pub struct ParseDateRequest {
    pub text: String,
    #[serde(default)]
    pub zone: Option<Zone>,
}

#[derive(Serialize)]
pub struct ParseDateResponse {
    date: Option<NaiveDate>,
    options: Vec<String>,
}

pub async fn parse_date(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ParseDateRequest>,
) -> Json<ParseDateResponse> {
    let now = shop_now();
    let choices = payload
        .zone
        .map(|zone| next_available_dates(&state.area, zone, DATE_OPTION_COUNT, now))
        .unwrap_or_default();

    Json(ParseDateResponse {
        date: parse_natural_date(&payload.text, now, &choices),
        options: format_date_options(&choices),
    })
}
