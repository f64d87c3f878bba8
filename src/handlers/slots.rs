use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::BookingError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: Option<String>,
}

#[derive(Serialize)]
pub struct SlotResponse {
    date: String,
    time: String,
    available: bool,
}

#[derive(Serialize)]
pub struct SlotsResponse {
    success: bool,
    total_slots: usize,
    slots: Vec<SlotResponse>,
}

// GET /api/slots
pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<SlotsResponse>, BookingError> {
    let slots = state.service.available_slots(query.date.as_deref())?;
    tracing::debug!(total = slots.len(), date = ?query.date, "listing slots");

    let slots: Vec<SlotResponse> = slots
        .into_iter()
        .map(|s| SlotResponse {
            date: s.date.format("%Y-%m-%d").to_string(),
            time: s.time.display().to_string(),
            available: s.available,
        })
        .collect();

    Ok(Json(SlotsResponse {
        success: true,
        total_slots: slots.len(),
        slots,
    }))
}
