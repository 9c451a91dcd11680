use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "calendar_id": state.config.calendar_id,
        "calendar_timeout_secs": state.config.calendar_timeout_secs,
    }))
}
