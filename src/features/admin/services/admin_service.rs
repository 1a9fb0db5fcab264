use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::admin::dtos::AdminEntityDto;
use crate::features::admin::registry::ADMIN_ENTITIES;

/// Service for the admin registry
pub struct AdminService {
    pool: PgPool,
}

impl AdminService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registered entities with their record counts
    pub async fn list_entities(&self) -> Result<Vec<AdminEntityDto>> {
        let mut items = Vec::with_capacity(ADMIN_ENTITIES.len());

        for entity in ADMIN_ENTITIES {
            // Table names come from the static registry, never from input
            let sql = format!("SELECT COUNT(*) FROM {}", entity.table);
            let count = sqlx::query_scalar::<_, i64>(&sql)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    tracing::error!("Failed to count {}: {:?}", entity.table, e);
                    AppError::Database(e)
                })?;

            items.push(AdminEntityDto::new(entity, count));
        }

        Ok(items)
    }
}
