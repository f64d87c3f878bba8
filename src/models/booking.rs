use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::SlotTime;

/// A confirmed reservation of exactly one slot. Created once by a successful
/// reserve; never updated or deleted afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub ticket_id: String,
    pub customer_name: String,
    pub phone: String,
    pub car_model: String,
    pub service_type: String,
    pub date: NaiveDate,
    pub time: SlotTime,
    pub created_at: NaiveDateTime,
}

/// Incoming booking request. All fields required; `date` and `time` are kept
/// as raw strings here and validated by the booking service, so an absent or
/// empty field surfaces as `MissingField` rather than a deserializer error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BookSlotRequest {
    pub customer_name: String,
    pub phone: String,
    pub car_model: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
}
