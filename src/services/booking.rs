use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDate};
use rusqlite::Connection;

use crate::errors::BookingError;
use crate::models::{BookSlotRequest, Booking, Slot, SlotTime};
use crate::services::{catalog, ledger};

/// Façade over the slot catalog and the booking ledger. Owns the connection
/// handle; [`BookingService::book_slot`] is the only write path into the
/// ledger.
#[derive(Clone)]
pub struct BookingService {
    db: Arc<Mutex<Connection>>,
}

impl BookingService {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    /// Full slot list for `date`, unavailable slots included and marked.
    /// When `date` is omitted, lists every date that already holds a booking
    /// plus the current date.
    pub fn available_slots(&self, date: Option<&str>) -> Result<Vec<Slot>, BookingError> {
        let conn = self.db.lock().unwrap();
        match date {
            Some(raw) => {
                let date = parse_date(raw)?;
                catalog::slots_for_date(&conn, date).map_err(BookingError::from)
            }
            None => catalog::slots_all(&conn, Local::now().date_naive())
                .map_err(BookingError::from),
        }
    }

    pub fn book_slot(&self, req: &BookSlotRequest) -> Result<Booking, BookingError> {
        self.book_slot_on(req, Local::now().date_naive())
    }

    /// `today` is passed explicitly so the past-date rule does not depend on
    /// the wall clock in tests.
    pub fn book_slot_on(
        &self,
        req: &BookSlotRequest,
        today: NaiveDate,
    ) -> Result<Booking, BookingError> {
        require_field("customer_name", &req.customer_name)?;
        require_field("phone", &req.phone)?;
        require_field("car_model", &req.car_model)?;
        require_field("service_type", &req.service_type)?;
        require_field("date", &req.date)?;
        require_field("time", &req.time)?;

        let date = parse_date(&req.date)?;
        let time = SlotTime::parse(&req.time)
            .ok_or_else(|| BookingError::InvalidTimeSlot(req.time.trim().to_string()))?;

        if date < today {
            return Err(BookingError::PastDateNotBookable(date));
        }

        // Lock held across the occupancy check and the insert: concurrent
        // requests for the same slot serialize here.
        let conn = self.db.lock().unwrap();
        ledger::reserve(&conn, req, date, time)
    }

    /// Confirmed bookings for one date, ascending by time-of-day.
    pub fn bookings_for_date(&self, date: NaiveDate) -> Result<Vec<Booking>, BookingError> {
        let conn = self.db.lock().unwrap();
        ledger::bookings_for_date(&conn, date)
    }
}

fn require_field(name: &'static str, value: &str) -> Result<(), BookingError> {
    if value.trim().is_empty() {
        return Err(BookingError::MissingField(name));
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| BookingError::InvalidDateFormat(raw.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_service() -> BookingService {
        BookingService::new(db::init_db(":memory:").unwrap())
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sample_request() -> BookSlotRequest {
        BookSlotRequest {
            customer_name: "John Doe".to_string(),
            phone: "923001234567".to_string(),
            car_model: "Honda Civic 2024".to_string(),
            service_type: "Oil Change".to_string(),
            date: "2026-01-02".to_string(),
            time: "03:00 PM".to_string(),
        }
    }

    // Bookings in these tests run against a fixed "today" of 2026-01-01.
    const TODAY: &str = "2026-01-01";

    fn book(service: &BookingService, req: &BookSlotRequest) -> Result<Booking, BookingError> {
        service.book_slot_on(req, date(TODAY))
    }

    #[test]
    fn test_successful_booking() {
        let service = setup_service();
        let booking = book(&service, &sample_request()).unwrap();
        assert_eq!(booking.ticket_id.len(), 8);
        assert_eq!(booking.time, SlotTime::ThreePm);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let service = setup_service();

        for field in [
            "customer_name",
            "phone",
            "car_model",
            "service_type",
            "date",
            "time",
        ] {
            let mut req = sample_request();
            match field {
                "customer_name" => req.customer_name = "  ".to_string(),
                "phone" => req.phone = String::new(),
                "car_model" => req.car_model = String::new(),
                "service_type" => req.service_type = String::new(),
                "date" => req.date = String::new(),
                _ => req.time = String::new(),
            }
            let err = book(&service, &req).unwrap_err();
            match err {
                BookingError::MissingField(name) => assert_eq!(name, field),
                other => panic!("expected MissingField for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_invalid_date_rejected() {
        let service = setup_service();
        let mut req = sample_request();
        req.date = "02/01/2026".to_string();
        let err = book(&service, &req).unwrap_err();
        assert!(matches!(err, BookingError::InvalidDateFormat(_)));
    }

    #[test]
    fn test_invalid_time_rejected() {
        let service = setup_service();
        let mut req = sample_request();
        req.time = "10:30 AM".to_string();
        let err = book(&service, &req).unwrap_err();
        assert!(matches!(err, BookingError::InvalidTimeSlot(_)));
    }

    #[test]
    fn test_past_date_rejected() {
        let service = setup_service();
        let mut req = sample_request();
        req.date = "2020-01-01".to_string();
        let err = book(&service, &req).unwrap_err();
        assert!(matches!(err, BookingError::PastDateNotBookable(_)));
    }

    #[test]
    fn test_today_is_bookable() {
        let service = setup_service();
        let mut req = sample_request();
        req.date = TODAY.to_string();
        assert!(book(&service, &req).is_ok());
    }

    #[test]
    fn test_booking_flips_availability() {
        let service = setup_service();
        book(&service, &sample_request()).unwrap();

        let slots = service.available_slots(Some("2026-01-02")).unwrap();
        for slot in &slots {
            assert_eq!(slot.available, slot.time != SlotTime::ThreePm);
        }
    }

    #[test]
    fn test_double_booking_rejected() {
        let service = setup_service();
        book(&service, &sample_request()).unwrap();

        let err = book(&service, &sample_request()).unwrap_err();
        assert!(matches!(err, BookingError::SlotAlreadyBooked { .. }));

        let bookings = service.bookings_for_date(date("2026-01-02")).unwrap();
        assert_eq!(bookings.len(), 1);
    }

    #[test]
    fn test_rejected_booking_leaves_ledger_unchanged() {
        let service = setup_service();

        let mut bad = sample_request();
        bad.time = "08:00 AM".to_string();
        assert!(book(&service, &bad).is_err());

        let mut past = sample_request();
        past.date = "2020-01-01".to_string();
        assert!(book(&service, &past).is_err());

        assert!(service.bookings_for_date(date("2026-01-02")).unwrap().is_empty());
        assert!(service.bookings_for_date(date("2020-01-01")).unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_bookings_one_winner() {
        let service = setup_service();
        let threads = 8;
        let barrier = Arc::new(std::sync::Barrier::new(threads));

        let handles: Vec<_> = (0..threads)
            .map(|i| {
                let service = service.clone();
                let barrier = Arc::clone(&barrier);
                std::thread::spawn(move || {
                    let mut req = sample_request();
                    req.customer_name = format!("Customer {i}");
                    barrier.wait();
                    service.book_slot_on(&req, date(TODAY))
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1);
        for result in &results {
            if let Err(err) = result {
                assert!(matches!(err, BookingError::SlotAlreadyBooked { .. }));
            }
        }

        let bookings = service.bookings_for_date(date("2026-01-02")).unwrap();
        assert_eq!(bookings.len(), 1);
    }
}
