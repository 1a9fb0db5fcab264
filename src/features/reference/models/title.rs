use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A job title, optionally tied to the department that employs it
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Title {
    pub id: i64,
    pub title: String,
    pub title_short: Option<String>,
    pub title_slug: String,
    pub employer_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
