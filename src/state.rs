use sqlx::PgPool;

/// Shared application state passed to every handler via `State<AppState>`.
///
/// The pool is the single persistence context: acquired once per process
/// and handed to each operation explicitly.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}
