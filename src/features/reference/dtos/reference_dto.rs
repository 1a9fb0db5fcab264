use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Request DTO for creating a state
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStateDto {
    #[validate(length(min = 1, max = 50, message = "Name must be 1-50 characters"))]
    pub name: String,

    /// Postal abbreviation, e.g. "IL"
    #[validate(length(min = 1, max = 8, message = "Short name must be 1-8 characters"))]
    pub short_name: String,
}

/// Request DTO for creating a city
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCityDto {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,

    pub state_id: i64,
}

/// Request DTO for creating a department
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartmentDto {
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,

    #[validate(length(min = 1, max = 15, message = "Short name must be 1-15 characters"))]
    pub short_name: String,
}

/// Request DTO for creating a title
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTitleDto {
    #[validate(length(min = 1, max = 50, message = "Title must be 1-50 characters"))]
    pub title: String,

    #[validate(length(max = 10, message = "Short title must not exceed 10 characters"))]
    pub title_short: Option<String>,

    /// Department employing people with this title
    pub employer_id: Option<i64>,
}

/// Request DTO for creating a cause
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCauseDto {
    #[validate(length(min = 1, max = 150, message = "Cause type must be 1-150 characters"))]
    pub cause_type: String,
}

/// Request DTO for creating an injury
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateInjuryDto {
    #[validate(length(min = 1, max = 150, message = "Injury must be 1-150 characters"))]
    pub injury: String,
}

/// Request DTO for creating a story link
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoryLinkDto {
    #[validate(length(min = 1, max = 250, message = "Link must be 1-250 characters"))]
    pub link: String,

    #[validate(length(max = 250, message = "Headline must not exceed 250 characters"))]
    pub headline: Option<String>,

    pub date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_short_name_limit() {
        let dto = CreateStateDto {
            name: "Illinois".to_string(),
            short_name: "ILLINOIS-X".to_string(),
        };
        assert!(dto.validate().is_err());

        let dto = CreateStateDto {
            name: "Illinois".to_string(),
            short_name: "IL".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_title_short_is_optional() {
        let dto = CreateTitleDto {
            title: "Battalion Chief".to_string(),
            title_short: None,
            employer_id: None,
        };
        assert!(dto.validate().is_ok());

        let dto = CreateTitleDto {
            title: "Battalion Chief".to_string(),
            title_short: Some("Batt. Chief X".to_string()),
            employer_id: None,
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_story_link_deserializes_camel_case() {
        let dto: CreateStoryLinkDto = serde_json::from_value(serde_json::json!({
            "link": "https://news.example.test/a",
            "headline": "Fire on Main",
            "date": "2011-03-04"
        }))
        .unwrap();
        assert_eq!(dto.date, NaiveDate::from_ymd_opt(2011, 3, 4));
        assert!(dto.validate().is_ok());
    }
}
