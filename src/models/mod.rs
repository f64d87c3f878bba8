pub mod booking;
pub mod slot;

pub use booking::{BookSlotRequest, Booking};
pub use slot::{Slot, SlotTime};
