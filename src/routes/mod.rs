use axum::routing::{get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::{apply_security_headers, create_cors_layer};
use crate::handlers::{bookings, health_check, tickets};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health_check))
        .route(
            "/tickets",
            get(tickets::list_tickets).post(tickets::create_ticket),
        )
        .route("/tickets/seed", post(tickets::seed_tickets))
        .route("/tickets/:id", get(tickets::get_ticket))
        .route(
            "/bookings",
            post(bookings::create_booking).get(bookings::list_bookings),
        )
        .route("/bookings/:id", put(bookings::update_booking))
        .route("/bookings/:id/cancel", post(bookings::cancel_booking))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    apply_security_headers(router).layer(create_cors_layer())
}
