//! Repository-level tests for the availability adjuster: the conditional
//! decrement, the capped release, and the error distinction between a
//! missing ticket and an insufficient count.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use ticketbooth_server::models::ticket::{CreateTicket, Ticket};
use ticketbooth_server::repositories::TicketRepo;
use ticketbooth_server::utils::error::AppError;

async fn seed_ticket(pool: &PgPool, total: i32, available: i32) -> Ticket {
    let input = CreateTicket {
        name: "Test Event".to_string(),
        description: None,
        price: Decimal::from(10),
        event_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        event_time: NaiveTime::from_hms_opt(19, 0, 0).unwrap(),
        total_quantity: total,
        available: Some(available),
    };
    TicketRepo::create(pool, &input).await.unwrap()
}

#[sqlx::test]
async fn reserve_decrements_down_to_zero(pool: PgPool) {
    let ticket = seed_ticket(&pool, 5, 5).await;
    let mut conn = pool.acquire().await.unwrap();

    let ticket = TicketRepo::reserve(&mut conn, ticket.id, 3).await.unwrap();
    assert_eq!(ticket.available, 2);

    let ticket = TicketRepo::reserve(&mut conn, ticket.id, 2).await.unwrap();
    assert_eq!(ticket.available, 0);

    // Nothing left.
    let err = TicketRepo::reserve(&mut conn, ticket.id, 1).await.unwrap_err();
    assert!(matches!(err, AppError::InsufficientAvailability(_)));
}

#[sqlx::test]
async fn reserve_more_than_available_fails_without_side_effect(pool: PgPool) {
    let ticket = seed_ticket(&pool, 5, 5).await;
    let mut conn = pool.acquire().await.unwrap();

    let err = TicketRepo::reserve(&mut conn, ticket.id, 6).await.unwrap_err();
    assert!(matches!(err, AppError::InsufficientAvailability(_)));

    let unchanged = TicketRepo::find_by_id(&pool, ticket.id).await.unwrap().unwrap();
    assert_eq!(unchanged.available, 5);
}

#[sqlx::test]
async fn reserve_unknown_ticket_is_not_found(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let err = TicketRepo::reserve(&mut conn, Uuid::nil(), 1).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[sqlx::test]
async fn reserve_rejects_non_positive_amount(pool: PgPool) {
    let ticket = seed_ticket(&pool, 5, 5).await;
    let mut conn = pool.acquire().await.unwrap();

    let err = TicketRepo::reserve(&mut conn, ticket.id, 0).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    let err = TicketRepo::release(&mut conn, ticket.id, -1).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[sqlx::test]
async fn release_restores_reserved_units(pool: PgPool) {
    let ticket = seed_ticket(&pool, 10, 10).await;
    let mut conn = pool.acquire().await.unwrap();

    TicketRepo::reserve(&mut conn, ticket.id, 7).await.unwrap();
    let ticket = TicketRepo::release(&mut conn, ticket.id, 4).await.unwrap();
    assert_eq!(ticket.available, 7);
}

#[sqlx::test]
async fn release_is_capped_at_total_quantity(pool: PgPool) {
    let ticket = seed_ticket(&pool, 10, 8).await;
    let mut conn = pool.acquire().await.unwrap();

    // Releasing more than was ever reserved cannot overshoot the capacity.
    let ticket = TicketRepo::release(&mut conn, ticket.id, 5).await.unwrap();
    assert_eq!(ticket.available, 10);
}

#[sqlx::test]
async fn release_unknown_ticket_is_not_found(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();

    let err = TicketRepo::release(&mut conn, Uuid::nil(), 1).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}
