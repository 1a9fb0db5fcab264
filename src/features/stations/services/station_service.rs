use sqlx::PgPool;

use crate::core::database::write_error;
use crate::core::error::Result;
use crate::features::stations::dtos::{CreateStationDto, StationResponseDto};
use crate::features::stations::models::StationDetail;
use crate::shared::validation::required_slug;

/// Service for station operations
pub struct StationService {
    pool: PgPool,
}

impl StationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, dto: CreateStationDto) -> Result<StationResponseDto> {
        let name_slug = required_slug(&dto.name, "name")?;

        let station = sqlx::query_as::<_, StationDetail>(
            r#"
            WITH inserted AS (
                INSERT INTO stations (name, name_slug, department_id, address_id)
                VALUES ($1, $2, $3, $4)
                RETURNING id, name, name_slug, department_id, address_id
            )
            SELECT
                i.id, i.name, i.name_slug,
                i.department_id, d.name AS department_name,
                i.address_id, a.street
            FROM inserted i
            JOIN departments d ON d.id = i.department_id
            JOIN addresses a ON a.id = i.address_id
            "#,
        )
        .bind(&dto.name)
        .bind(&name_slug)
        .bind(dto.department_id)
        .bind(dto.address_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "station"))?;

        tracing::info!("Created station {} ({})", station.id, station);

        Ok(station.into())
    }
}
