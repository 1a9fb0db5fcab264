use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::database::write_error;
use crate::core::error::{AppError, Result};
use crate::features::addresses::models::AddressDetail;
use crate::features::fires::models::FireLink;
use crate::features::people::dtos::{CreatePersonDto, CreateSourceDto, CreateVictimDto};
use crate::features::people::models::{
    Person, PersonDetail, SourceDetail, VictimDetail, VictimRecord,
};
use crate::features::reference::models::Title;

/// Storage for people and their victim/source roles
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn insert_person(&self, dto: &CreatePersonDto, name_slug: &str) -> Result<Person>;

    async fn insert_victim(&self, dto: &CreateVictimDto) -> Result<VictimDetail>;

    async fn insert_source(&self, dto: &CreateSourceDto) -> Result<SourceDetail>;

    /// Person with title, owned addresses and the fires they appear in
    async fn find_detail(&self, id: i64) -> Result<Option<PersonDetail>>;
}

/// Postgres-backed person repository
pub struct PgPersonRepository {
    pool: PgPool,
}

impl PgPersonRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PersonRepository for PgPersonRepository {
    async fn insert_person(&self, dto: &CreatePersonDto, name_slug: &str) -> Result<Person> {
        sqlx::query_as::<_, Person>(
            r#"
            INSERT INTO people (first_name, last_name, name_slug, dob, title_id, experience)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, name_slug, dob, title_id, experience, created_at
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(name_slug)
        .bind(dto.dob)
        .bind(dto.title_id)
        .bind(dto.experience)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "person"))
    }

    async fn insert_victim(&self, dto: &CreateVictimDto) -> Result<VictimDetail> {
        sqlx::query_as::<_, VictimDetail>(
            r#"
            WITH inserted AS (
                INSERT INTO victims (person_id, injury_id)
                VALUES ($1, $2)
                RETURNING id, person_id, injury_id
            )
            SELECT
                i.id, i.person_id, p.first_name, p.last_name, p.name_slug,
                i.injury_id, inj.injury
            FROM inserted i
            JOIN people p ON p.id = i.person_id
            JOIN injuries inj ON inj.id = i.injury_id
            "#,
        )
        .bind(dto.person_id)
        .bind(dto.injury_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "victim"))
    }

    async fn insert_source(&self, dto: &CreateSourceDto) -> Result<SourceDetail> {
        sqlx::query_as::<_, SourceDetail>(
            r#"
            WITH inserted AS (
                INSERT INTO sources (person_id)
                VALUES ($1)
                RETURNING id, person_id
            )
            SELECT i.id, i.person_id, p.name_slug
            FROM inserted i
            JOIN people p ON p.id = i.person_id
            "#,
        )
        .bind(dto.person_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "source"))
    }

    async fn find_detail(&self, id: i64) -> Result<Option<PersonDetail>> {
        let db_err = move |what: &'static str| {
            move |e: sqlx::Error| {
                tracing::error!("Failed to load {} of person {}: {:?}", what, id, e);
                AppError::Database(e)
            }
        };

        let Some(person) = sqlx::query_as::<_, Person>(
            r#"
            SELECT id, first_name, last_name, name_slug, dob, title_id, experience, created_at
            FROM people
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_err("record"))?
        else {
            return Ok(None);
        };

        let title = match person.title_id {
            Some(title_id) => sqlx::query_as::<_, Title>(
                r#"
                SELECT id, title, title_short, title_slug, employer_id, created_at
                FROM titles
                WHERE id = $1
                "#,
            )
            .bind(title_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_err("title"))?,
            None => None,
        };

        let owned_addresses = sqlx::query_as::<_, AddressDetail>(
            r#"
            SELECT
                a.id, a.street, a.street_slug, a.property_value,
                c.id AS city_id, c.name AS city_name,
                s.id AS state_id, s.name AS state_name, s.short_name AS state_short_name
            FROM address_owners ao
            JOIN addresses a ON a.id = ao.address_id
            JOIN cities c ON c.id = a.city_id
            JOIN states s ON s.id = c.state_id
            WHERE ao.person_id = $1
            ORDER BY a.street
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("addresses"))?;

        let sourced_fires = sqlx::query_as::<_, FireLink>(
            r#"
            SELECT f.id, f.date, a.street, a.street_slug
            FROM fires f
            JOIN addresses a ON a.id = f.location_id
            WHERE f.source_id = $1
            ORDER BY f.date DESC NULLS LAST, f.id DESC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("sourced fires"))?;

        let victim_of = sqlx::query_as::<_, VictimRecord>(
            r#"
            SELECT f.id, f.date, a.street, a.street_slug, inj.injury
            FROM victims v
            JOIN fire_victims fv ON fv.victim_id = v.id
            JOIN fires f ON f.id = fv.fire_id
            JOIN addresses a ON a.id = f.location_id
            JOIN injuries inj ON inj.id = v.injury_id
            WHERE v.person_id = $1
            ORDER BY f.date DESC NULLS LAST, f.id DESC
            "#,
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_err("victim records"))?;

        Ok(Some(PersonDetail {
            person,
            title,
            owned_addresses,
            sourced_fires,
            victim_of,
        }))
    }
}
