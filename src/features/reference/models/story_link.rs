use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A news story covering a fire
#[derive(Debug, Clone, FromRow, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoryLink {
    pub id: i64,
    pub link: String,
    pub headline: Option<String>,
    pub date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for StoryLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.headline.as_deref().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_uses_headline_or_empty() {
        let mut story = StoryLink {
            id: 1,
            link: "https://news.example.test/fire".to_string(),
            headline: Some("Warehouse blaze on Main".to_string()),
            date: None,
            created_at: Utc::now(),
        };
        assert_eq!(story.to_string(), "Warehouse blaze on Main");

        story.headline = None;
        assert_eq!(story.to_string(), "");
    }
}
