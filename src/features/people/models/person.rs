use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::shared::constants::ROUTE_PREFIX;

/// Database model for person
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub name_slug: String,
    pub dob: Option<NaiveDate>,
    pub title_id: Option<i64>,
    /// Years of experience
    pub experience: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Person {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Canonical detail page, e.g. `/firestarter/person/7/jane-doe/`
    pub fn absolute_url(&self) -> String {
        person_url(self.id, &self.name_slug)
    }
}

pub fn person_url(id: i64, name_slug: &str) -> String {
    format!("{}/person/{}/{}/", ROUTE_PREFIX, id, name_slug)
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
