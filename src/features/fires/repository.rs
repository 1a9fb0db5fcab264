use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::core::database::write_error;
use crate::core::error::{AppError, Result};
use crate::features::addresses::models::AddressDetail;
use crate::features::addresses::services::fetch_address_detail;
use crate::features::fires::models::{Fire, FireDetail, FireRecord, FireSummary};
use crate::features::geocodes::models::{Geocode, NewGeocode};
use crate::features::people::models::{Person, VictimDetail};
use crate::features::reference::models::{Cause, StoryLink};
use crate::features::stations::models::StationDetail;

/// Join tables of the fire aggregate: (table, member column)
const RESPONDINGS: (&str, &str) = ("fire_respondings", "station_id");
const STORY_LINKS: (&str, &str) = ("fire_story_links", "story_link_id");
const VICTIMS: (&str, &str) = ("fire_victims", "victim_id");

/// Storage for the fire aggregate
#[async_trait]
pub trait FireRepository: Send + Sync {
    /// Address with city and state, used as geocoding input
    async fn find_location(&self, address_id: i64) -> Result<Option<AddressDetail>>;

    async fn find_fire(&self, id: i64) -> Result<Option<Fire>>;

    /// Write `geocode` (if any), attach it to `fire`, then insert or update
    /// the fire and replace its associations. All writes are atomic.
    async fn save_fire(&self, fire: Fire, geocode: Option<NewGeocode>) -> Result<Fire>;

    async fn find_detail(&self, id: i64) -> Result<Option<FireDetail>>;

    /// Most recent fires first, with the total count
    async fn list_recent(&self, offset: i64, limit: i64) -> Result<(Vec<FireSummary>, i64)>;
}

/// Postgres-backed fire repository
pub struct PgFireRepository {
    pool: PgPool,
}

impl PgFireRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn member_ids(&self, (table, column): (&str, &str), fire_id: i64) -> Result<Vec<i64>> {
        let sql = format!(
            "SELECT {column} FROM {table} WHERE fire_id = $1 ORDER BY {column}",
            column = column,
            table = table
        );

        sqlx::query_scalar::<_, i64>(&sql)
            .bind(fire_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load {} for fire {}: {:?}", table, fire_id, e);
                AppError::Database(e)
            })
    }
}

async fn insert_geocode(tx: &mut Transaction<'_, Postgres>, geocode: &NewGeocode) -> Result<i64> {
    sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO geocodes (address_id, computed_address, latitude, longitude, geocode_error)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(geocode.address_id)
    .bind(&geocode.computed_address)
    .bind(geocode.latitude)
    .bind(geocode.longitude)
    .bind(geocode.geocode_error)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| write_error(e, "geocode"))
}

async fn replace_members(
    tx: &mut Transaction<'_, Postgres>,
    (table, column): (&str, &str),
    fire_id: i64,
    member_ids: &[i64],
) -> Result<()> {
    let delete = format!("DELETE FROM {} WHERE fire_id = $1", table);
    sqlx::query(&delete)
        .bind(fire_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| write_error(e, table))?;

    if member_ids.is_empty() {
        return Ok(());
    }

    let insert = format!(
        "INSERT INTO {table} (fire_id, {column}) SELECT $1, UNNEST($2::BIGINT[]) ON CONFLICT DO NOTHING",
        table = table,
        column = column
    );
    sqlx::query(&insert)
        .bind(fire_id)
        .bind(member_ids)
        .execute(&mut **tx)
        .await
        .map_err(|e| write_error(e, table))?;

    Ok(())
}

#[async_trait]
impl FireRepository for PgFireRepository {
    async fn find_location(&self, address_id: i64) -> Result<Option<AddressDetail>> {
        fetch_address_detail(&self.pool, address_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to load address {}: {:?}", address_id, e);
                AppError::Database(e)
            })
    }

    async fn find_fire(&self, id: i64) -> Result<Option<Fire>> {
        let record = sqlx::query_as::<_, FireRecord>(
            r#"
            SELECT id, location_id, geocode_id, cause_id, date, monetary_damage,
                   response_time, extinguish_time, source_id, created_at
            FROM fires
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get fire {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        let Some(record) = record else {
            return Ok(None);
        };

        let responding_ids = self.member_ids(RESPONDINGS, id).await?;
        let story_link_ids = self.member_ids(STORY_LINKS, id).await?;
        let victim_ids = self.member_ids(VICTIMS, id).await?;

        Ok(Some(Fire::from_record(
            record,
            responding_ids,
            story_link_ids,
            victim_ids,
        )))
    }

    async fn save_fire(&self, mut fire: Fire, geocode: Option<NewGeocode>) -> Result<Fire> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            tracing::error!("Failed to begin transaction: {:?}", e);
            AppError::Database(e)
        })?;

        if let Some(geocode) = geocode {
            fire.geocode_id = Some(insert_geocode(&mut tx, &geocode).await?);
        }

        let id = match fire.id {
            None => sqlx::query_scalar::<_, i64>(
                r#"
                INSERT INTO fires (
                    location_id, geocode_id, cause_id, date, monetary_damage,
                    response_time, extinguish_time, source_id
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
                RETURNING id
                "#,
            )
            .bind(fire.location_id)
            .bind(fire.geocode_id)
            .bind(fire.cause_id)
            .bind(fire.date)
            .bind(fire.monetary_damage)
            .bind(fire.response_time)
            .bind(fire.extinguish_time)
            .bind(fire.source_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| write_error(e, "fire"))?,
            Some(id) => sqlx::query_scalar::<_, i64>(
                r#"
                UPDATE fires SET
                    location_id = $2, geocode_id = $3, cause_id = $4, date = $5,
                    monetary_damage = $6, response_time = $7, extinguish_time = $8,
                    source_id = $9
                WHERE id = $1
                RETURNING id
                "#,
            )
            .bind(id)
            .bind(fire.location_id)
            .bind(fire.geocode_id)
            .bind(fire.cause_id)
            .bind(fire.date)
            .bind(fire.monetary_damage)
            .bind(fire.response_time)
            .bind(fire.extinguish_time)
            .bind(fire.source_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| write_error(e, "fire"))?
            .ok_or_else(|| AppError::NotFound(format!("Fire {} not found", id)))?,
        };
        fire.id = Some(id);

        replace_members(&mut tx, RESPONDINGS, id, &fire.responding_ids).await?;
        replace_members(&mut tx, STORY_LINKS, id, &fire.story_link_ids).await?;
        replace_members(&mut tx, VICTIMS, id, &fire.victim_ids).await?;

        tx.commit().await.map_err(|e| {
            tracing::error!("Failed to commit fire {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        Ok(fire)
    }

    async fn find_detail(&self, id: i64) -> Result<Option<FireDetail>> {
        let db_err = move |what: &'static str| {
            move |e: sqlx::Error| {
                tracing::error!("Failed to load {} of fire {}: {:?}", what, id, e);
                AppError::Database(e)
            }
        };

        let record = sqlx::query_as::<_, FireRecord>(
            r#"
            SELECT id, location_id, geocode_id, cause_id, date, monetary_damage,
                   response_time, extinguish_time, source_id, created_at
            FROM fires
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("record"))?;

        let Some(record) = record else {
            return Ok(None);
        };

        let location = fetch_address_detail(&self.pool, record.location_id)
            .await
            .map_err(db_err("location"))?
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "Fire {} points at missing address {}",
                    id, record.location_id
                ))
            })?;

        let geocode = match record.geocode_id {
            Some(geocode_id) => sqlx::query_as::<_, Geocode>(
                r#"
                SELECT id, address_id, computed_address, latitude, longitude, geocode_error, created_at
                FROM geocodes
                WHERE id = $1
                "#,
            )
            .bind(geocode_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("geocode"))?,
            None => None,
        };

        let cause = match record.cause_id {
            Some(cause_id) => sqlx::query_as::<_, Cause>(
                "SELECT id, cause_type, type_slug, created_at FROM causes WHERE id = $1",
            )
            .bind(cause_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("cause"))?,
            None => None,
        };

        let source = match record.source_id {
            Some(person_id) => sqlx::query_as::<_, Person>(
                r#"
                SELECT id, first_name, last_name, name_slug, dob, title_id, experience, created_at
                FROM people
                WHERE id = $1
                "#,
            )
            .bind(person_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("source"))?,
            None => None,
        };

        let respondings = sqlx::query_as::<_, StationDetail>(
            r#"
            SELECT
                s.id, s.name, s.name_slug,
                s.department_id, d.name AS department_name,
                s.address_id, a.street
            FROM fire_respondings fr
            JOIN stations s ON s.id = fr.station_id
            JOIN departments d ON d.id = s.department_id
            JOIN addresses a ON a.id = s.address_id
            WHERE fr.fire_id = $1
            ORDER BY s.name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("respondings"))?;

        let story_links = sqlx::query_as::<_, StoryLink>(
            r#"
            SELECT sl.id, sl.link, sl.headline, sl.date, sl.created_at
            FROM fire_story_links fsl
            JOIN story_links sl ON sl.id = fsl.story_link_id
            WHERE fsl.fire_id = $1
            ORDER BY sl.date DESC NULLS LAST, sl.id
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("story links"))?;

        let victims = sqlx::query_as::<_, VictimDetail>(
            r#"
            SELECT
                v.id, v.person_id, p.first_name, p.last_name, p.name_slug,
                v.injury_id, i.injury
            FROM fire_victims fv
            JOIN victims v ON v.id = fv.victim_id
            JOIN people p ON p.id = v.person_id
            JOIN injuries i ON i.id = v.injury_id
            WHERE fv.fire_id = $1
            ORDER BY p.last_name, p.first_name
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("victims"))?;

        Ok(Some(FireDetail {
            record,
            location,
            geocode,
            cause,
            source,
            respondings,
            story_links,
            victims,
        }))
    }

    async fn list_recent(&self, offset: i64, limit: i64) -> Result<(Vec<FireSummary>, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM fires")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count fires: {:?}", e);
                AppError::Database(e)
            })?;

        let fires = sqlx::query_as::<_, FireSummary>(
            r#"
            SELECT
                f.id, f.date, a.street, a.street_slug,
                c.name AS city_name, s.short_name AS state_short_name,
                ca.cause_type,
                g.latitude, g.longitude, g.geocode_error
            FROM fires f
            JOIN addresses a ON a.id = f.location_id
            JOIN cities c ON c.id = a.city_id
            JOIN states s ON s.id = c.state_id
            LEFT JOIN causes ca ON ca.id = f.cause_id
            LEFT JOIN geocodes g ON g.id = f.geocode_id
            ORDER BY f.date DESC NULLS LAST, f.id DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list fires: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((fires, total))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use chrono::Utc;

    use super::*;

    #[derive(Default)]
    struct Tables {
        addresses: HashMap<i64, AddressDetail>,
        geocodes: HashMap<i64, NewGeocode>,
        fires: HashMap<i64, Fire>,
        next_geocode_id: i64,
        next_fire_id: i64,
    }

    /// In-memory stand-in for the fire tables
    #[derive(Default)]
    pub struct InMemoryFireRepository {
        tables: Mutex<Tables>,
    }

    impl InMemoryFireRepository {
        pub fn with_address(self, address: AddressDetail) -> Self {
            self.tables
                .lock()
                .unwrap()
                .addresses
                .insert(address.id, address);
            self
        }

        /// Seed an existing geocode and return its id
        pub fn insert_geocode(&self, geocode: NewGeocode) -> i64 {
            let mut tables = self.tables.lock().unwrap();
            tables.next_geocode_id += 1;
            let id = tables.next_geocode_id;
            tables.geocodes.insert(id, geocode);
            id
        }

        pub fn geocode_count(&self) -> usize {
            self.tables.lock().unwrap().geocodes.len()
        }

        pub fn geocode(&self, id: i64) -> Option<NewGeocode> {
            self.tables.lock().unwrap().geocodes.get(&id).cloned()
        }

        pub fn fire_count(&self) -> usize {
            self.tables.lock().unwrap().fires.len()
        }
    }

    #[async_trait]
    impl FireRepository for InMemoryFireRepository {
        async fn find_location(&self, address_id: i64) -> Result<Option<AddressDetail>> {
            Ok(self.tables.lock().unwrap().addresses.get(&address_id).cloned())
        }

        async fn find_fire(&self, id: i64) -> Result<Option<Fire>> {
            Ok(self.tables.lock().unwrap().fires.get(&id).cloned())
        }

        async fn save_fire(&self, mut fire: Fire, geocode: Option<NewGeocode>) -> Result<Fire> {
            let mut tables = self.tables.lock().unwrap();

            if !tables.addresses.contains_key(&fire.location_id) {
                return Err(AppError::NotFound(
                    "fire references a record that does not exist".to_string(),
                ));
            }
            if let Some(id) = fire.id {
                if !tables.fires.contains_key(&id) {
                    return Err(AppError::NotFound(format!("Fire {} not found", id)));
                }
            }

            if let Some(geocode) = geocode {
                tables.next_geocode_id += 1;
                let geocode_id = tables.next_geocode_id;
                tables.geocodes.insert(geocode_id, geocode);
                fire.geocode_id = Some(geocode_id);
            }

            let id = match fire.id {
                Some(id) => id,
                None => {
                    tables.next_fire_id += 1;
                    tables.next_fire_id
                }
            };
            fire.id = Some(id);
            tables.fires.insert(id, fire.clone());

            Ok(fire)
        }

        async fn find_detail(&self, id: i64) -> Result<Option<FireDetail>> {
            let tables = self.tables.lock().unwrap();
            let Some(fire) = tables.fires.get(&id) else {
                return Ok(None);
            };

            let location = tables
                .addresses
                .get(&fire.location_id)
                .cloned()
                .ok_or_else(|| AppError::Internal("dangling location".to_string()))?;

            let geocode = fire.geocode_id.and_then(|geocode_id| {
                tables.geocodes.get(&geocode_id).map(|g| Geocode {
                    id: geocode_id,
                    address_id: g.address_id,
                    computed_address: g.computed_address.clone(),
                    latitude: g.latitude,
                    longitude: g.longitude,
                    geocode_error: g.geocode_error,
                    created_at: Utc::now(),
                })
            });

            Ok(Some(FireDetail {
                record: FireRecord {
                    id,
                    location_id: fire.location_id,
                    geocode_id: fire.geocode_id,
                    cause_id: fire.cause_id,
                    date: fire.date,
                    monetary_damage: fire.monetary_damage,
                    response_time: fire.response_time,
                    extinguish_time: fire.extinguish_time,
                    source_id: fire.source_id,
                    created_at: Utc::now(),
                },
                location,
                geocode,
                cause: None,
                source: None,
                respondings: Vec::new(),
                story_links: Vec::new(),
                victims: Vec::new(),
            }))
        }

        async fn list_recent(&self, offset: i64, limit: i64) -> Result<(Vec<FireSummary>, i64)> {
            let tables = self.tables.lock().unwrap();

            let mut fires: Vec<&Fire> = tables.fires.values().collect();
            fires.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

            let summaries = fires
                .into_iter()
                .skip(offset.max(0) as usize)
                .take(limit as usize)
                .filter_map(|fire| {
                    let address = tables.addresses.get(&fire.location_id)?;
                    let geocode = fire.geocode_id.and_then(|g| tables.geocodes.get(&g));
                    Some(FireSummary {
                        id: fire.id?,
                        date: fire.date,
                        street: address.street.clone(),
                        street_slug: address.street_slug.clone(),
                        city_name: address.city_name.clone(),
                        state_short_name: address.state_short_name.clone(),
                        cause_type: None,
                        latitude: geocode.and_then(|g| g.latitude),
                        longitude: geocode.and_then(|g| g.longitude),
                        geocode_error: geocode.map(|g| g.geocode_error),
                    })
                })
                .collect();

            Ok((summaries, tables.fires.len() as i64))
        }
    }
}
