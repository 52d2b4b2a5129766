use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus, CreateBooking, UpdateBooking};
use crate::repositories::ticket_repo::TicketRepo;
use crate::utils::error::AppError;

const COLUMNS: &str = "id, ticket_id, ticket_name, customer_name, customer_email, \
    quantity, unit_price, total_price, status, booking_date, updated_at";

/// Booking lifecycle manager.
///
/// Every lifecycle operation that touches inventory runs the availability
/// adjustment and the booking write inside a single transaction, so a
/// failure on either side leaves both stores untouched.
pub struct BookingRepo;

impl BookingRepo {
    /// Create a confirmed booking, reserving inventory first.
    ///
    /// The unit price is captured from the ticket at booking time and
    /// stored on the booking; `total_price = quantity * unit_price`.
    pub async fn create(pool: &PgPool, input: &CreateBooking) -> Result<Booking, AppError> {
        if input.quantity < 1 {
            return Err(AppError::ValidationError(
                "Quantity must be at least 1".to_string(),
            ));
        }
        if input.customer_email.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Customer email is required".to_string(),
            ));
        }
        if input.customer_name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Customer name is required".to_string(),
            ));
        }

        let mut tx = pool.begin().await?;

        let ticket = TicketRepo::reserve(&mut *tx, input.ticket_id, input.quantity).await?;
        let total_price = ticket.price * Decimal::from(input.quantity);

        let query = format!(
            "INSERT INTO bookings
                (ticket_id, ticket_name, customer_name, customer_email,
                 quantity, unit_price, total_price)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(ticket.id)
            .bind(&ticket.name)
            .bind(input.customer_name.trim())
            .bind(input.customer_email.trim())
            .bind(input.quantity)
            .bind(ticket.price)
            .bind(total_price)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(booking)
    }

    /// List all bookings for a customer email, newest first.
    pub async fn list_by_email(pool: &PgPool, email: &str) -> Result<Vec<Booking>, AppError> {
        let query = format!(
            "SELECT {COLUMNS} FROM bookings
             WHERE customer_email = $1
             ORDER BY booking_date DESC"
        );
        let bookings = sqlx::query_as::<_, Booking>(&query)
            .bind(email)
            .fetch_all(pool)
            .await?;
        Ok(bookings)
    }

    /// Fetch a single booking by id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Booking>, AppError> {
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1");
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(booking)
    }

    /// Update a confirmed booking's customer details and/or quantity.
    ///
    /// A quantity increase reserves the delta (and fails without applying
    /// any change if availability is insufficient); a decrease releases it.
    /// `total_price` is recomputed from the stored unit price, never from
    /// the ticket's current price.
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        input: &UpdateBooking,
    ) -> Result<Booking, AppError> {
        if let Some(quantity) = input.quantity {
            if quantity < 1 {
                return Err(AppError::ValidationError(
                    "Quantity must be at least 1".to_string(),
                ));
            }
        }

        let mut tx = pool.begin().await?;

        // Row lock so concurrent updates of the same booking serialize.
        let query = format!("SELECT {COLUMNS} FROM bookings WHERE id = $1 FOR UPDATE");
        let booking = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::Conflict(
                "Cannot modify a cancelled booking".to_string(),
            ));
        }

        let new_quantity = input.quantity.unwrap_or(booking.quantity);
        let delta = new_quantity - booking.quantity;
        if delta > 0 {
            TicketRepo::reserve(&mut *tx, booking.ticket_id, delta).await?;
        } else if delta < 0 {
            TicketRepo::release(&mut *tx, booking.ticket_id, -delta).await?;
        }

        let total_price = booking.unit_price * Decimal::from(new_quantity);

        let query = format!(
            "UPDATE bookings
             SET customer_name = COALESCE($2, customer_name),
                 customer_email = COALESCE($3, customer_email),
                 quantity = $4,
                 total_price = $5,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .bind(input.customer_name.as_deref())
            .bind(input.customer_email.as_deref())
            .bind(new_quantity)
            .bind(total_price)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Cancel a confirmed booking and release its inventory.
    ///
    /// The status transition is the guard: inventory is released only if
    /// this call actually flipped the row from confirmed to cancelled, so
    /// a repeated cancel fails with a conflict and releases nothing.
    pub async fn cancel(pool: &PgPool, id: Uuid) -> Result<Booking, AppError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE bookings
             SET status = 'cancelled', updated_at = NOW()
             WHERE id = $1 AND status = 'confirmed'
             RETURNING {COLUMNS}"
        );
        let cancelled = sqlx::query_as::<_, Booking>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;

        let booking = match cancelled {
            Some(booking) => booking,
            None => {
                let exists: bool =
                    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM bookings WHERE id = $1)")
                        .bind(id)
                        .fetch_one(&mut *tx)
                        .await?;
                if exists {
                    return Err(AppError::Conflict(
                        "Booking is already cancelled".to_string(),
                    ));
                }
                return Err(AppError::NotFound("Booking not found".to_string()));
            }
        };

        TicketRepo::release(&mut *tx, booking.ticket_id, booking.quantity).await?;

        tx.commit().await?;
        Ok(booking)
    }
}
