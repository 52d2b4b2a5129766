use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::ticket::{CreateTicket, Ticket};
use crate::utils::error::AppError;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, price, event_date, event_time, \
    total_quantity, available, created_at, updated_at";

/// Ticket store access plus the availability adjuster.
///
/// `reserve` and `release` take a `&mut PgConnection` so the booking
/// lifecycle can run them inside the same transaction as the booking write.
pub struct TicketRepo;

impl TicketRepo {
    /// List all tickets, ordered by event date ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Ticket>, AppError> {
        let query = format!(
            "SELECT {COLUMNS} FROM tickets ORDER BY event_date ASC, event_time ASC"
        );
        let tickets = sqlx::query_as::<_, Ticket>(&query).fetch_all(pool).await?;
        Ok(tickets)
    }

    /// Fetch a single ticket by id.
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Ticket>, AppError> {
        let query = format!("SELECT {COLUMNS} FROM tickets WHERE id = $1");
        let ticket = sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(ticket)
    }

    /// Insert a new ticket, returning the created row.
    ///
    /// If `available` is omitted it defaults to `total_quantity`.
    pub async fn create(pool: &PgPool, input: &CreateTicket) -> Result<Ticket, AppError> {
        let query = format!(
            "INSERT INTO tickets
                (name, description, price, event_date, event_time, total_quantity, available)
             VALUES ($1, COALESCE($2, ''), $3, $4, $5, $6, COALESCE($7, $6))
             RETURNING {COLUMNS}"
        );
        let ticket = sqlx::query_as::<_, Ticket>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.event_date)
            .bind(input.event_time)
            .bind(input.total_quantity)
            .bind(input.available)
            .fetch_one(pool)
            .await?;
        Ok(ticket)
    }

    /// Reserve `amount` units of a ticket.
    ///
    /// The decrement is a single conditional UPDATE, so the availability
    /// check and the write cannot be separated by a concurrent reservation:
    /// two requests racing on the same ticket serialize on the row and the
    /// loser sees the already-decremented count.
    pub async fn reserve(
        conn: &mut PgConnection,
        id: Uuid,
        amount: i32,
    ) -> Result<Ticket, AppError> {
        if amount < 1 {
            return Err(AppError::ValidationError(
                "Reservation amount must be at least 1".to_string(),
            ));
        }

        let query = format!(
            "UPDATE tickets
             SET available = available - $2, updated_at = NOW()
             WHERE id = $1 AND available >= $2
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .bind(amount)
            .fetch_optional(&mut *conn)
            .await?;

        match updated {
            Some(ticket) => Ok(ticket),
            None => {
                // Distinguish a missing ticket from an insufficient count.
                let exists: bool =
                    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tickets WHERE id = $1)")
                        .bind(id)
                        .fetch_one(conn)
                        .await?;
                if exists {
                    Err(AppError::InsufficientAvailability(
                        "Not enough tickets available".to_string(),
                    ))
                } else {
                    Err(AppError::NotFound("Ticket not found".to_string()))
                }
            }
        }
    }

    /// Release `amount` units back to a ticket's available pool.
    ///
    /// The counter is capped at `total_quantity` as a backstop against
    /// erroneous releases; a correct reserve/release sequence never reaches
    /// the cap.
    pub async fn release(
        conn: &mut PgConnection,
        id: Uuid,
        amount: i32,
    ) -> Result<Ticket, AppError> {
        if amount < 1 {
            return Err(AppError::ValidationError(
                "Release amount must be at least 1".to_string(),
            ));
        }

        let query = format!(
            "UPDATE tickets
             SET available = LEAST(available + $2, total_quantity), updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let ticket = sqlx::query_as::<_, Ticket>(&query)
            .bind(id)
            .bind(amount)
            .fetch_optional(conn)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;
        Ok(ticket)
    }

    /// Seed the five sample tickets. Idempotent: returns `None` without
    /// writing anything if any ticket already exists.
    pub async fn seed_sample(pool: &PgPool) -> Result<Option<Vec<Ticket>>, AppError> {
        let mut tx = pool.begin().await?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tickets")
            .fetch_one(&mut *tx)
            .await?;
        if count > 0 {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO tickets
                (name, description, price, event_date, event_time, total_quantity, available)
             VALUES
                ('Concert: Rock Band', 'Live performance by the famous Rock Band',
                 50, '2025-06-15', '19:00', 100, 100),
                ('Movie Premiere', 'Exclusive premiere of the new blockbuster movie',
                 25, '2025-06-20', '20:00', 150, 150),
                ('Theater Play', 'Award-winning theater performance',
                 35, '2025-06-25', '18:30', 80, 80),
                ('Sports Game', 'Championship finals',
                 45, '2025-07-01', '15:00', 200, 200),
                ('Comedy Show', 'Stand-up comedy night with top comedians',
                 30, '2025-07-05', '21:00', 120, 120)
             RETURNING {COLUMNS}"
        );
        let tickets = sqlx::query_as::<_, Ticket>(&query)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(tickets))
    }
}
