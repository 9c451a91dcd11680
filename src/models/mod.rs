pub mod booking;
pub mod slot;
pub mod validation;
pub mod zone;

pub use booking::{BookingOutcome, BookingRequest};
pub use slot::{format_slot, parse_slot, SlotParseError, TimeSlot};
pub use validation::{Rejection, ValidationResult};
pub use zone::{Coverage, Zone};
