pub mod booking;
pub mod ticket;

pub use booking::{Booking, BookingStatus, CreateBooking, UpdateBooking};
pub use ticket::{CreateTicket, Ticket};
