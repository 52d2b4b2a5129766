use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::models::booking::{CreateBooking, UpdateBooking};
use crate::repositories::BookingRepo;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

/// Query parameters for listing bookings.
#[derive(Debug, Deserialize)]
pub struct BookingListParams {
    pub email: String,
}

/// POST /bookings
///
/// Reserves inventory and writes the booking in one transaction; on any
/// failure nothing is written and the ticket counter is unchanged.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> Result<Response, AppError> {
    let booking = BookingRepo::create(&state.pool, &input).await?;

    tracing::info!(
        booking_id = %booking.id,
        ticket_id = %booking.ticket_id,
        quantity = booking.quantity,
        "Booking created"
    );

    Ok(created(booking, "Booking created").into_response())
}

/// GET /bookings?email=
///
/// Bookings for a customer email, newest first. An unknown email yields an
/// empty list, not an error.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(params): Query<BookingListParams>,
) -> Result<Response, AppError> {
    if params.email.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Customer email is required".to_string(),
        ));
    }

    let bookings = BookingRepo::list_by_email(&state.pool, params.email.trim()).await?;
    Ok(success(bookings, "Bookings fetched").into_response())
}

/// PUT /bookings/{id}
pub async fn update_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdateBooking>,
) -> Result<Response, AppError> {
    let booking = BookingRepo::update(&state.pool, id, &input).await?;

    tracing::info!(
        booking_id = %booking.id,
        quantity = booking.quantity,
        "Booking updated"
    );

    Ok(success(booking, "Booking updated").into_response())
}

/// POST /bookings/{id}/cancel
pub async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let booking = BookingRepo::cancel(&state.pool, id).await?;

    tracing::info!(
        booking_id = %booking.id,
        ticket_id = %booking.ticket_id,
        quantity = booking.quantity,
        "Booking cancelled"
    );

    Ok(success(booking, "Booking cancelled").into_response())
}
