pub mod booking_repo;
pub mod ticket_repo;

pub use booking_repo::BookingRepo;
pub use ticket_repo::TicketRepo;
