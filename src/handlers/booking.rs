use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::errors::BookingError;
use crate::models::BookSlotRequest;
use crate::state::AppState;

#[derive(Serialize)]
pub struct BookingResponse {
    success: bool,
    ticket_id: String,
    customer_name: String,
    phone: String,
    car_model: String,
    service_type: String,
    date: String,
    time: String,
    message: String,
}

// POST /api/book
pub async fn book_slot(
    State(state): State<Arc<AppState>>,
    Json(req): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, BookingError> {
    let booking = state.service.book_slot(&req)?;

    Ok(Json(BookingResponse {
        success: true,
        message: format!("Booking confirmed! Ticket: {}", booking.ticket_id),
        ticket_id: booking.ticket_id,
        customer_name: booking.customer_name,
        phone: booking.phone,
        car_model: booking.car_model,
        service_type: booking.service_type,
        date: booking.date.format("%Y-%m-%d").to_string(),
        time: booking.time.display().to_string(),
    }))
}
