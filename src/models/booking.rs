use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a booking. Bookings start `confirmed`; the only
/// transition is `confirmed -> cancelled`, and `cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A customer's reservation of some quantity of a ticket.
///
/// `ticket_name` and `unit_price` are denormalized at booking time;
/// `total_price` is always `quantity * unit_price` and is recomputed from
/// the stored unit price on quantity changes, never from the ticket's
/// current price.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub ticket_name: String,
    pub customer_name: String,
    pub customer_email: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a booking.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBooking {
    pub ticket_id: Uuid,
    pub customer_name: String,
    pub customer_email: String,
    pub quantity: i32,
}

/// Payload for updating a booking. All fields optional; only supplied
/// fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateBooking {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub quantity: Option<i32>,
}
