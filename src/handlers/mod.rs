pub mod booking;
pub mod health;
pub mod zones;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/coverage/:zip", get(zones::get_coverage))
        .route("/api/zones/:zone/slots", get(zones::get_slots))
        .route("/api/zones/:zone/dates", get(zones::get_available_dates))
        .route("/api/rotation/:date", get(zones::get_rotation))
        .route("/api/validate", post(booking::validate))
        .route("/api/bookings", post(booking::create_booking))
        .route("/api/dates/parse", post(booking::parse_date))
        .with_state(state)
}
