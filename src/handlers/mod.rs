use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;
use crate::utils::response::success;

pub mod bookings;
pub mod tickets;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
    db_healthy: bool,
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    let db_healthy = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.pool)
        .await
        .is_ok();

    let payload = HealthPayload {
        status: "ok",
        service: "ticketbooth-api",
        db_healthy,
    };

    success(payload, "Health check successful").into_response()
}
