use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Row};

use crate::models::{Booking, SlotTime};

pub fn insert_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    let date = booking.date.format("%Y-%m-%d").to_string();
    let created_at = booking.created_at.format("%Y-%m-%d %H:%M:%S").to_string();

    conn.execute(
        "INSERT INTO bookings (ticket_id, customer_name, phone, car_model, service_type, date, time, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            booking.ticket_id,
            booking.customer_name,
            booking.phone,
            booking.car_model,
            booking.service_type,
            date,
            booking.time.as_24h(),
            created_at,
        ],
    )?;
    Ok(())
}

pub fn is_occupied(conn: &Connection, date: NaiveDate, time: SlotTime) -> anyhow::Result<bool> {
    let occupied: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM bookings WHERE date = ?1 AND time = ?2",
        params![date.format("%Y-%m-%d").to_string(), time.as_24h()],
        |row| row.get(0),
    )?;
    Ok(occupied)
}

pub fn ticket_exists(conn: &Connection, ticket_id: &str) -> anyhow::Result<bool> {
    let exists: bool = conn.query_row(
        "SELECT COUNT(*) > 0 FROM bookings WHERE ticket_id = ?1",
        params![ticket_id],
        |row| row.get(0),
    )?;
    Ok(exists)
}

pub fn get_bookings_for_date(conn: &Connection, date: NaiveDate) -> anyhow::Result<Vec<Booking>> {
    let mut stmt = conn.prepare(
        "SELECT ticket_id, customer_name, phone, car_model, service_type, date, time, created_at
         FROM bookings WHERE date = ?1 ORDER BY time ASC",
    )?;

    let rows = stmt.query_map(params![date.format("%Y-%m-%d").to_string()], |row| {
        Ok(parse_booking_row(row))
    })?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

/// Distinct dates that hold at least one booking, ascending.
pub fn get_booked_dates(conn: &Connection) -> anyhow::Result<Vec<NaiveDate>> {
    let mut stmt = conn.prepare("SELECT DISTINCT date FROM bookings ORDER BY date ASC")?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut dates = vec![];
    for row in rows {
        let raw = row?;
        let date = NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| anyhow::anyhow!("unparseable date in ledger: {raw}: {e}"))?;
        dates.push(date);
    }
    Ok(dates)
}

fn parse_booking_row(row: &Row) -> anyhow::Result<Booking> {
    let date_str: String = row.get(5)?;
    let time_str: String = row.get(6)?;
    let created_at_str: String = row.get(7)?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("unparseable date in ledger: {date_str}: {e}"))?;
    let time = SlotTime::from_24h(&time_str)
        .ok_or_else(|| anyhow::anyhow!("unknown slot time in ledger: {time_str}"))?;
    let created_at = NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
        .map_err(|e| anyhow::anyhow!("unparseable timestamp in ledger: {created_at_str}: {e}"))?;

    Ok(Booking {
        ticket_id: row.get(0)?,
        customer_name: row.get(1)?,
        phone: row.get(2)?,
        car_model: row.get(3)?,
        service_type: row.get(4)?,
        date,
        time,
        created_at,
    })
}
