use chrono::{NaiveDate, Utc};
use rusqlite::Connection;
use uuid::Uuid;

use crate::db::queries;
use crate::errors::BookingError;
use crate::models::{BookSlotRequest, Booking, SlotTime};

const TICKET_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const TICKET_LEN: usize = 8;
const MAX_TICKET_ATTEMPTS: u32 = 5;

/// Check-and-insert of a booking. The caller holds the connection lock for
/// the whole call, so the occupancy check and the insert form one critical
/// section; on any error no mutation has happened.
pub fn reserve(
    conn: &Connection,
    req: &BookSlotRequest,
    date: NaiveDate,
    time: SlotTime,
) -> Result<Booking, BookingError> {
    if queries::is_occupied(conn, date, time)? {
        return Err(BookingError::SlotAlreadyBooked { date, time });
    }

    let ticket_id = next_ticket_id(conn)?;
    let booking = Booking {
        ticket_id,
        customer_name: req.customer_name.clone(),
        phone: req.phone.clone(),
        car_model: req.car_model.clone(),
        service_type: req.service_type.clone(),
        date,
        time,
        created_at: Utc::now().naive_utc(),
    };
    queries::insert_booking(conn, &booking)?;

    tracing::info!(
        ticket = %booking.ticket_id,
        %date,
        time = time.display(),
        "booking confirmed"
    );
    Ok(booking)
}

pub fn is_occupied(conn: &Connection, date: NaiveDate, time: SlotTime) -> anyhow::Result<bool> {
    queries::is_occupied(conn, date, time)
}

/// Bookings for one date, ascending by time-of-day.
pub fn bookings_for_date(conn: &Connection, date: NaiveDate) -> Result<Vec<Booking>, BookingError> {
    Ok(queries::get_bookings_for_date(conn, date)?)
}

pub fn booked_dates(conn: &Connection) -> anyhow::Result<Vec<NaiveDate>> {
    queries::get_booked_dates(conn)
}

fn next_ticket_id(conn: &Connection) -> Result<String, BookingError> {
    for attempt in 0..MAX_TICKET_ATTEMPTS {
        let candidate = generate_ticket_id();
        if !queries::ticket_exists(conn, &candidate)? {
            return Ok(candidate);
        }
        tracing::warn!(attempt, ticket = %candidate, "ticket id collision, retrying");
    }
    Err(BookingError::TicketGenerationExhausted)
}

/// 8 uppercase alphanumeric characters, drawn from v4 UUID random bytes.
fn generate_ticket_id() -> String {
    Uuid::new_v4().into_bytes()[..TICKET_LEN]
        .iter()
        .map(|b| TICKET_CHARSET[*b as usize % TICKET_CHARSET.len()] as char)
        .collect()
}
