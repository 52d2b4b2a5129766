use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::models::ticket::CreateTicket;
use crate::repositories::TicketRepo;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};

/// GET /tickets
///
/// All tickets, ordered by event date ascending.
pub async fn list_tickets(State(state): State<AppState>) -> Result<Response, AppError> {
    let tickets = TicketRepo::list(&state.pool).await?;
    Ok(success(tickets, "Tickets fetched").into_response())
}

/// GET /tickets/{id}
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let ticket = TicketRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;
    Ok(success(ticket, "Ticket fetched").into_response())
}

/// POST /tickets
///
/// Admin create. Availability defaults to the total quantity.
pub async fn create_ticket(
    State(state): State<AppState>,
    Json(input): Json<CreateTicket>,
) -> Result<Response, AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Ticket name is required".to_string(),
        ));
    }
    if input.price.is_sign_negative() {
        return Err(AppError::ValidationError(
            "Price must not be negative".to_string(),
        ));
    }
    if input.total_quantity < 1 {
        return Err(AppError::ValidationError(
            "Total quantity must be at least 1".to_string(),
        ));
    }
    if let Some(available) = input.available {
        if available < 0 || available > input.total_quantity {
            return Err(AppError::ValidationError(
                "Available count must be between 0 and the total quantity".to_string(),
            ));
        }
    }

    let ticket = TicketRepo::create(&state.pool, &input).await?;

    tracing::info!(ticket_id = %ticket.id, name = %ticket.name, "Ticket created");

    Ok(created(ticket, "Ticket created").into_response())
}

/// POST /tickets/seed
///
/// Idempotent sample seeding: a no-op when any ticket already exists.
pub async fn seed_tickets(State(state): State<AppState>) -> Result<Response, AppError> {
    match TicketRepo::seed_sample(&state.pool).await? {
        Some(tickets) => {
            tracing::info!(count = tickets.len(), "Sample tickets seeded");
            Ok(success(tickets, "Database seeded").into_response())
        }
        None => Ok(empty_success("Database already seeded").into_response()),
    }
}
