use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;

use crate::models::SlotTime;

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("{0:?} is not a valid date, expected YYYY-MM-DD")]
    InvalidDateFormat(String),

    #[error("{0:?} is not one of the bookable times")]
    InvalidTimeSlot(String),

    #[error("{0} is in the past and can no longer be booked")]
    PastDateNotBookable(NaiveDate),

    #[error("required field {0:?} is missing or empty")]
    MissingField(&'static str),

    #[error("the {time} slot on {date} is already booked")]
    SlotAlreadyBooked { date: NaiveDate, time: SlotTime },

    #[error("could not generate a unique ticket id")]
    TicketGenerationExhausted,

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl BookingError {
    /// Stable error identifier used in the response envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            BookingError::InvalidDateFormat(_) => "InvalidDateFormat",
            BookingError::InvalidTimeSlot(_) => "InvalidTimeSlot",
            BookingError::PastDateNotBookable(_) => "PastDateNotBookable",
            BookingError::MissingField(_) => "MissingField",
            BookingError::SlotAlreadyBooked { .. } => "SlotAlreadyBooked",
            BookingError::TicketGenerationExhausted => "TicketGenerationExhausted",
            BookingError::Internal(_) => "InternalError",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            BookingError::SlotAlreadyBooked { .. } => StatusCode::CONFLICT,
            BookingError::TicketGenerationExhausted | BookingError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Server-side failures are logged in full but surfaced generically.
        let message = match &self {
            BookingError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                "internal server error".to_string()
            }
            BookingError::TicketGenerationExhausted => {
                tracing::error!("ticket id generation exhausted its retries");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };

        let body = serde_json::json!({
            "success": false,
            "error": self.kind(),
            "message": message,
        });
        (status, axum::Json(body)).into_response()
    }
}
