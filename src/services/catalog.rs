use chrono::NaiveDate;
use rusqlite::Connection;

use crate::models::{Slot, SlotTime};
use crate::services::ledger;

/// The fixed time set for `date`, each slot annotated with its current
/// availability, ascending by time-of-day. Read-only.
pub fn slots_for_date(conn: &Connection, date: NaiveDate) -> anyhow::Result<Vec<Slot>> {
    let mut slots = Vec::with_capacity(SlotTime::ALL.len());
    for time in SlotTime::ALL {
        let occupied = ledger::is_occupied(conn, date, time)?;
        slots.push(Slot {
            date,
            time,
            available: !occupied,
        });
    }
    Ok(slots)
}

/// Listing when no date was given: every date that already holds a booking,
/// plus `today`. Dates ascending, times ascending within each date.
pub fn slots_all(conn: &Connection, today: NaiveDate) -> anyhow::Result<Vec<Slot>> {
    let mut dates = ledger::booked_dates(conn)?;
    if !dates.contains(&today) {
        dates.push(today);
        dates.sort();
    }

    let mut slots = vec![];
    for date in dates {
        slots.extend(slots_for_date(conn, date)?);
    }
    Ok(slots)
}
