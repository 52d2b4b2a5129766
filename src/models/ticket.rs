use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A purchasable event offering. `available` is the single source of truth
/// for remaining inventory and is only mutated through
/// `TicketRepo::reserve` / `TicketRepo::release`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub total_quantity: i32,
    pub available: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for the admin create-ticket endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTicket {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub event_date: NaiveDate,
    pub event_time: NaiveTime,
    pub total_quantity: i32,
    /// Defaults to `total_quantity` if omitted.
    pub available: Option<i32>,
}
