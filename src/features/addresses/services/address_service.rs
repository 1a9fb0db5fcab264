use sqlx::{PgExecutor, PgPool};

use crate::core::database::write_error;
use crate::core::error::{AppError, Result};
use crate::features::addresses::dtos::{AddressResponseDto, CreateAddressDto};
use crate::features::addresses::models::{Address, AddressDetail};
use crate::shared::validation::required_slug;

/// Load an address together with its city and state.
pub async fn fetch_address_detail<'e, E>(
    executor: E,
    id: i64,
) -> std::result::Result<Option<AddressDetail>, sqlx::Error>
where
    E: PgExecutor<'e>,
{
    sqlx::query_as::<_, AddressDetail>(
        r#"
        SELECT
            a.id, a.street, a.street_slug, a.property_value,
            c.id AS city_id, c.name AS city_name,
            s.id AS state_id, s.name AS state_name, s.short_name AS state_short_name
        FROM addresses a
        JOIN cities c ON c.id = a.city_id
        JOIN states s ON s.id = c.state_id
        WHERE a.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Service for address operations
pub struct AddressService {
    pool: PgPool,
}

impl AddressService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create an address and its owner associations in one transaction
    pub async fn create(&self, dto: CreateAddressDto) -> Result<AddressResponseDto> {
        let street_slug = required_slug(&dto.street, "street")?;

        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        let address = sqlx::query_as::<_, Address>(
            r#"
            INSERT INTO addresses (street, street_slug, city_id, property_value)
            VALUES ($1, $2, $3, $4)
            RETURNING id, street, street_slug, city_id, property_value, created_at
            "#,
        )
        .bind(&dto.street)
        .bind(&street_slug)
        .bind(dto.city_id)
        .bind(dto.property_value)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| write_error(e, "address"))?;

        let mut owner_ids = dto.owner_ids;
        owner_ids.sort_unstable();
        owner_ids.dedup();

        for person_id in &owner_ids {
            sqlx::query("INSERT INTO address_owners (address_id, person_id) VALUES ($1, $2)")
                .bind(address.id)
                .bind(person_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| write_error(e, "address owner"))?;
        }

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit address: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Created address {} ({}) with {} owner(s)",
            address.id,
            address.street,
            owner_ids.len()
        );

        Ok(AddressResponseDto::from_address(address, owner_ids))
    }

    /// Get address with city and state
    pub async fn get_detail(&self, id: i64) -> Result<AddressDetail> {
        fetch_address_detail(&self.pool, id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get address: {:?}", e);
                AppError::Database(e)
            })?
            .ok_or_else(|| AppError::NotFound(format!("Address {} not found", id)))
    }
}
