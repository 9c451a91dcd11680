pub mod booking;
pub mod calendar;
pub mod dates;
pub mod rotation;
pub mod slots;
pub mod validation;
pub mod zones;
