pub mod queries;

use anyhow::Context;
use rusqlite::Connection;

// The UNIQUE(date, time) constraint backs the one-booking-per-slot invariant
// at the storage layer; the service additionally serializes check-and-insert
// behind a mutex.
const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS bookings (
    ticket_id     TEXT PRIMARY KEY,
    customer_name TEXT NOT NULL,
    phone         TEXT NOT NULL,
    car_model     TEXT NOT NULL,
    service_type  TEXT NOT NULL,
    date          TEXT NOT NULL,
    time          TEXT NOT NULL,
    created_at    TEXT NOT NULL,
    UNIQUE (date, time)
);";

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open ledger database")?;

    conn.execute_batch(SCHEMA)
        .context("failed to create ledger schema")?;

    Ok(conn)
}
