pub mod booking;

pub use booking::{BookingService, MockBookingService};
