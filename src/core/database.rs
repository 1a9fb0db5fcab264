use crate::core::config::DatabaseConfig;
use crate::core::error::AppError;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

/// Postgres SQLSTATE for foreign_key_violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .connect(&config.url)
        .await
}

/// Map an insert/update failure into an `AppError`.
///
/// Dangling references (unknown city, person, ...) become `NotFound` so the
/// caller gets a 404 instead of a generic database failure.
pub fn write_error(e: sqlx::Error, entity: &str) -> AppError {
    let is_fk_violation = e
        .as_database_error()
        .and_then(|db| db.code())
        .is_some_and(|code| code == FOREIGN_KEY_VIOLATION);

    if is_fk_violation {
        tracing::warn!("Failed to write {}: dangling reference: {:?}", entity, e);
        return AppError::NotFound(format!(
            "{} references a record that does not exist",
            entity
        ));
    }

    tracing::error!("Failed to write {}: {:?}", entity, e);
    AppError::Database(e)
}

/// Pool that never connects until a query runs, for router tests whose
/// requests are rejected before reaching the database.
#[cfg(test)]
pub(crate) fn unconnected_pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_millis(100))
        .connect_lazy("postgres://firestarter@localhost:1/firestarter")
        .unwrap()
}
