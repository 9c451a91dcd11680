use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::shop_now;
use crate::errors::AppError;
use crate::models::{TimeSlot, Zone};
use crate::services::dates::format_date_options;
use crate::services::rotation::{is_business_day, zone_for_date};
use crate::services::slots::{next_available_dates, slots_for};
use crate::services::zones::classify;
use crate::state::AppState;

const DEFAULT_DATE_COUNT: usize = 5;
const MAX_DATE_COUNT: usize = 30;

fn parse_zone(raw: &str) -> Result<Zone, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("zone {raw}")))
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date {raw}, expected YYYY-MM-DD")))
}

// GET /api/coverage/:zip
#[derive(Serialize)]
pub struct CoverageResponse {
    zip: String,
    serviced: bool,
    zone: Option<Zone>,
}

pub async fn get_coverage(
    State(state): State<Arc<AppState>>,
    Path(zip): Path<String>,
) -> Json<CoverageResponse> {
    let zone = classify(&state.area, &zip).zone();
    Json(CoverageResponse {
        zip: zip.trim().to_string(),
        serviced: zone.is_some(),
        zone,
    })
}

// GET /api/zones/:zone/slots
#[derive(Serialize)]
pub struct SlotsResponse {
    zone: Zone,
    slots: Vec<TimeSlot>,
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Path(zone): Path<String>,
) -> Result<Json<SlotsResponse>, AppError> {
    let zone = parse_zone(&zone)?;
    Ok(Json(SlotsResponse {
        zone,
        slots: slots_for(&state.area, zone),
    }))
}

// GET /api/zones/:zone/dates
#[derive(Deserialize)]
pub struct DatesQuery {
    pub count: Option<usize>,
}

#[derive(Serialize)]
pub struct DatesResponse {
    zone: Zone,
    dates: Vec<NaiveDate>,
    options: Vec<String>,
}

pub async fn get_available_dates(
    State(state): State<Arc<AppState>>,
    Path(zone): Path<String>,
    Query(query): Query<DatesQuery>,
) -> Result<Json<DatesResponse>, AppError> {
    let zone = parse_zone(&zone)?;
    let count = query.count.unwrap_or(DEFAULT_DATE_COUNT).min(MAX_DATE_COUNT);

    let dates = next_available_dates(&state.area, zone, count, shop_now());
    let options = format_date_options(&dates);
    Ok(Json(DatesResponse {
        zone,
        dates,
        options,
    }))
}

// GET /api/rotation/:date
#[derive(Serialize)]
pub struct RotationResponse {
    date: NaiveDate,
    weekday: String,
    business_day: bool,
    zone: Zone,
}

pub async fn get_rotation(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<RotationResponse>, AppError> {
    let date = parse_date(&date)?;
    Ok(Json(RotationResponse {
        date,
        weekday: date.weekday().to_string(),
        business_day: is_business_day(date),
        zone: zone_for_date(&state.area.anchor, date),
    }))
}
