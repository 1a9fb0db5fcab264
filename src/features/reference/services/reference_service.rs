use sqlx::PgPool;

use crate::core::database::write_error;
use crate::core::error::Result;
use crate::features::reference::dtos::{
    CreateCauseDto, CreateCityDto, CreateDepartmentDto, CreateInjuryDto, CreateStateDto,
    CreateStoryLinkDto, CreateTitleDto,
};
use crate::features::reference::models::{
    Cause, City, Department, Injury, State, StoryLink, Title,
};
use crate::shared::validation::required_slug;

/// Service for reference (lookup) data
pub struct ReferenceService {
    pool: PgPool,
}

impl ReferenceService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_state(&self, dto: CreateStateDto) -> Result<State> {
        let name_slug = required_slug(&dto.name, "name")?;

        sqlx::query_as::<_, State>(
            r#"
            INSERT INTO states (name, name_slug, short_name)
            VALUES ($1, $2, $3)
            RETURNING id, name, name_slug, short_name, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&name_slug)
        .bind(&dto.short_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "state"))
    }

    pub async fn create_city(&self, dto: CreateCityDto) -> Result<City> {
        let name_slug = required_slug(&dto.name, "name")?;

        sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (name, name_slug, state_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, name_slug, state_id, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&name_slug)
        .bind(dto.state_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "city"))
    }

    pub async fn create_department(&self, dto: CreateDepartmentDto) -> Result<Department> {
        let name_slug = required_slug(&dto.name, "name")?;

        sqlx::query_as::<_, Department>(
            r#"
            INSERT INTO departments (name, name_slug, short_name)
            VALUES ($1, $2, $3)
            RETURNING id, name, name_slug, short_name, created_at
            "#,
        )
        .bind(&dto.name)
        .bind(&name_slug)
        .bind(&dto.short_name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "department"))
    }

    pub async fn create_title(&self, dto: CreateTitleDto) -> Result<Title> {
        let title_slug = required_slug(&dto.title, "title")?;

        sqlx::query_as::<_, Title>(
            r#"
            INSERT INTO titles (title, title_short, title_slug, employer_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, title_short, title_slug, employer_id, created_at
            "#,
        )
        .bind(&dto.title)
        .bind(&dto.title_short)
        .bind(&title_slug)
        .bind(dto.employer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "title"))
    }

    pub async fn create_cause(&self, dto: CreateCauseDto) -> Result<Cause> {
        let type_slug = required_slug(&dto.cause_type, "causeType")?;

        sqlx::query_as::<_, Cause>(
            r#"
            INSERT INTO causes (cause_type, type_slug)
            VALUES ($1, $2)
            RETURNING id, cause_type, type_slug, created_at
            "#,
        )
        .bind(&dto.cause_type)
        .bind(&type_slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "cause"))
    }

    pub async fn create_injury(&self, dto: CreateInjuryDto) -> Result<Injury> {
        let injury_slug = required_slug(&dto.injury, "injury")?;

        sqlx::query_as::<_, Injury>(
            r#"
            INSERT INTO injuries (injury, injury_slug)
            VALUES ($1, $2)
            RETURNING id, injury, injury_slug, created_at
            "#,
        )
        .bind(&dto.injury)
        .bind(&injury_slug)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "injury"))
    }

    pub async fn create_story_link(&self, dto: CreateStoryLinkDto) -> Result<StoryLink> {
        sqlx::query_as::<_, StoryLink>(
            r#"
            INSERT INTO story_links (link, headline, date)
            VALUES ($1, $2, $3)
            RETURNING id, link, headline, date, created_at
            "#,
        )
        .bind(&dto.link)
        .bind(&dto.headline)
        .bind(dto.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "story link"))
    }
}
