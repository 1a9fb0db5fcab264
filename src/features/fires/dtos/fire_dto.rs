use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::addresses::dtos::AddressSummaryDto;
use crate::features::fires::models::{fire_url, Fire, FireDetail, FireLink, FireSummary};
use crate::features::geocodes::models::Geocode;
use crate::features::people::dtos::VictimResponseDto;
use crate::features::people::models::Person;
use crate::features::reference::models::StoryLink;
use crate::features::stations::dtos::StationResponseDto;

/// Request DTO for creating or updating a fire.
///
/// Leave `geocodeId` empty to have the location geocoded on save.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveFireDto {
    pub location_id: i64,

    /// Existing geocode to keep; no lookup happens when set
    pub geocode_id: Option<i64>,

    pub cause_id: Option<i64>,

    /// When the fire was reported
    pub date: Option<DateTime<Utc>>,

    #[validate(range(min = 0, message = "Monetary damage must not be negative"))]
    pub monetary_damage: Option<i64>,

    pub response_time: Option<DateTime<Utc>>,

    pub extinguish_time: Option<DateTime<Utc>>,

    /// Person who supplied the information
    pub source_id: Option<i64>,

    /// Responding stations
    #[serde(default)]
    pub responding_ids: Vec<i64>,

    #[serde(default)]
    pub story_link_ids: Vec<i64>,

    #[serde(default)]
    pub victim_ids: Vec<i64>,
}

impl SaveFireDto {
    pub fn into_fire(self, id: Option<i64>) -> Fire {
        Fire {
            id,
            location_id: self.location_id,
            geocode_id: self.geocode_id,
            cause_id: self.cause_id,
            date: self.date,
            monetary_damage: self.monetary_damage,
            response_time: self.response_time,
            extinguish_time: self.extinguish_time,
            source_id: self.source_id,
            responding_ids: self.responding_ids,
            story_link_ids: self.story_link_ids,
            victim_ids: self.victim_ids,
        }
    }
}

fn seconds(duration: Option<Duration>) -> Option<i64> {
    duration.map(|d| d.num_seconds())
}

/// Response DTO for a saved fire
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FireResponseDto {
    pub id: i64,
    pub location_id: i64,
    pub geocode_id: Option<i64>,
    pub cause_id: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    pub monetary_damage: Option<i64>,
    pub response_time: Option<DateTime<Utc>>,
    pub extinguish_time: Option<DateTime<Utc>>,
    pub source_id: Option<i64>,
    pub responding_ids: Vec<i64>,
    pub story_link_ids: Vec<i64>,
    pub victim_ids: Vec<i64>,
    /// Seconds from report to response; null when either is unknown
    pub time_took_seconds: Option<i64>,
    /// Seconds from response to extinguishment; null when either is unknown
    pub extinguish_time_took_seconds: Option<i64>,
}

impl FireResponseDto {
    pub fn from_saved(fire: Fire) -> Result<Self> {
        let id = fire
            .id
            .ok_or_else(|| AppError::Internal("Saved fire has no id".to_string()))?;
        let time_took_seconds = seconds(fire.time_took());
        let extinguish_time_took_seconds = seconds(fire.extinguish_time_took());

        Ok(Self {
            id,
            location_id: fire.location_id,
            geocode_id: fire.geocode_id,
            cause_id: fire.cause_id,
            date: fire.date,
            monetary_damage: fire.monetary_damage,
            response_time: fire.response_time,
            extinguish_time: fire.extinguish_time,
            source_id: fire.source_id,
            responding_ids: fire.responding_ids,
            story_link_ids: fire.story_link_ids,
            victim_ids: fire.victim_ids,
            time_took_seconds,
            extinguish_time_took_seconds,
        })
    }
}

/// Link to a fire detail page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FireLinkDto {
    pub id: i64,
    pub label: String,
    pub url: String,
    pub date: Option<DateTime<Utc>>,
}

impl From<FireLink> for FireLinkDto {
    fn from(link: FireLink) -> Self {
        Self {
            id: link.id,
            label: link.to_string(),
            url: link.absolute_url(),
            date: link.date,
        }
    }
}

/// Index entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FireSummaryDto {
    pub id: i64,
    pub url: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub cause: Option<String>,
    pub date: Option<DateTime<Utc>>,
    /// Null when the location could not be geocoded
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<FireSummary> for FireSummaryDto {
    fn from(s: FireSummary) -> Self {
        let resolved = s.geocode_error == Some(false);
        Self {
            id: s.id,
            url: fire_url(s.id, &s.street_slug),
            street: s.street,
            city: s.city_name,
            state: s.state_short_name,
            cause: s.cause_type,
            date: s.date,
            latitude: s.latitude.filter(|_| resolved),
            longitude: s.longitude.filter(|_| resolved),
        }
    }
}

/// Link to a person detail page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonLinkDto {
    pub id: i64,
    pub name: String,
    pub url: String,
}

impl From<Person> for PersonLinkDto {
    fn from(p: Person) -> Self {
        Self {
            id: p.id,
            name: p.full_name(),
            url: p.absolute_url(),
        }
    }
}

/// Fire detail page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FireDetailDto {
    pub id: i64,
    pub url: String,
    pub label: String,
    pub location: AddressSummaryDto,
    pub geocode: Option<Geocode>,
    /// Null when the location could not be geocoded
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub cause: Option<String>,
    pub source: Option<PersonLinkDto>,
    pub date: Option<DateTime<Utc>>,
    pub monetary_damage: Option<i64>,
    pub response_time: Option<DateTime<Utc>>,
    pub extinguish_time: Option<DateTime<Utc>>,
    pub time_took_seconds: Option<i64>,
    pub extinguish_time_took_seconds: Option<i64>,
    pub respondings: Vec<StationResponseDto>,
    pub story_links: Vec<StoryLink>,
    pub victims: Vec<VictimResponseDto>,
}

impl From<FireDetail> for FireDetailDto {
    fn from(detail: FireDetail) -> Self {
        let url = detail.absolute_url();
        let label = detail.to_string();
        let coordinates = detail.coordinates();
        let time_took_seconds = seconds(detail.time_took());
        let extinguish_time_took_seconds = seconds(detail.extinguish_time_took());

        Self {
            id: detail.record.id,
            url,
            label,
            location: detail.location.into(),
            geocode: detail.geocode,
            latitude: coordinates.map(|(lat, _)| lat),
            longitude: coordinates.map(|(_, lon)| lon),
            cause: detail.cause.map(|c| c.to_string()),
            source: detail.source.map(PersonLinkDto::from),
            date: detail.record.date,
            monetary_damage: detail.record.monetary_damage,
            response_time: detail.record.response_time,
            extinguish_time: detail.record.extinguish_time,
            time_took_seconds,
            extinguish_time_took_seconds,
            respondings: detail.respondings.into_iter().map(Into::into).collect(),
            story_links: detail.story_links,
            victims: detail.victims.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_dto_defaults_associations() {
        let dto: SaveFireDto = serde_json::from_value(serde_json::json!({
            "locationId": 4,
            "date": "2011-03-04T10:00:00Z",
            "responseTime": "2011-03-04T10:30:00Z"
        }))
        .unwrap();
        assert!(dto.validate().is_ok());

        let fire = dto.into_fire(None);
        assert_eq!(fire.location_id, 4);
        assert_eq!(fire.geocode_id, None);
        assert!(fire.responding_ids.is_empty());
        assert_eq!(fire.time_took(), Some(Duration::minutes(30)));
    }

    #[test]
    fn test_response_requires_saved_fire() {
        assert!(FireResponseDto::from_saved(Fire::new(1)).is_err());

        let mut fire = Fire::new(1);
        fire.id = Some(9);
        fire.geocode_id = Some(2);
        let dto = FireResponseDto::from_saved(fire).unwrap();
        assert_eq!(dto.id, 9);
        assert_eq!(dto.time_took_seconds, None);
    }

    #[test]
    fn test_summary_hides_coordinates_of_failed_geocode() {
        let summary = FireSummary {
            id: 3,
            date: None,
            street: "100 Main St".to_string(),
            street_slug: "100-main-st".to_string(),
            city_name: "Springfield".to_string(),
            state_short_name: "IL".to_string(),
            cause_type: None,
            latitude: Some(1.0),
            longitude: Some(2.0),
            geocode_error: Some(true),
        };

        let dto = FireSummaryDto::from(summary.clone());
        assert_eq!(dto.url, "/firestarter/fire/3/100-main-st/");
        assert_eq!(dto.latitude, None);
        assert_eq!(dto.longitude, None);

        let dto = FireSummaryDto::from(FireSummary {
            geocode_error: Some(false),
            ..summary
        });
        assert_eq!(dto.latitude, Some(1.0));
        assert_eq!(dto.longitude, Some(2.0));
    }
}
