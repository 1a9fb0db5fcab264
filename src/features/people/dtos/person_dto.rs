use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::addresses::dtos::AddressSummaryDto;
use crate::features::fires::dtos::FireLinkDto;
use crate::features::people::models::{
    person_url, Person, PersonDetail, SourceDetail, VictimDetail, VictimRecord,
};
use crate::features::reference::models::Title;

/// Request DTO for creating a person
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonDto {
    #[validate(length(min = 1, max = 150, message = "First name must be 1-150 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 150, message = "Last name must be 1-150 characters"))]
    pub last_name: String,

    /// Date of birth
    pub dob: Option<NaiveDate>,

    pub title_id: Option<i64>,

    /// Years of experience
    #[validate(range(min = 0, message = "Experience must not be negative"))]
    pub experience: Option<i32>,
}

/// Request DTO for recording a victim (person + injury)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateVictimDto {
    pub person_id: i64,
    pub injury_id: i64,
}

/// Request DTO for recording a source
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSourceDto {
    pub person_id: i64,
}

/// Response DTO for victim
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VictimResponseDto {
    pub id: i64,
    pub person_id: i64,
    pub name: String,
    pub person_url: String,
    pub injury_id: i64,
    pub injury: String,
    pub label: String,
}

impl From<VictimDetail> for VictimResponseDto {
    fn from(v: VictimDetail) -> Self {
        let label = v.to_string();
        Self {
            id: v.id,
            person_id: v.person_id,
            name: format!("{} {}", v.first_name, v.last_name),
            person_url: person_url(v.person_id, &v.name_slug),
            injury_id: v.injury_id,
            injury: v.injury,
            label,
        }
    }
}

/// Response DTO for source
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceResponseDto {
    pub id: i64,
    pub person_id: i64,
    pub label: String,
}

impl From<SourceDetail> for SourceResponseDto {
    fn from(s: SourceDetail) -> Self {
        let label = s.to_string();
        Self {
            id: s.id,
            person_id: s.person_id,
            label,
        }
    }
}

/// A fire in which the person was a victim
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VictimOfDto {
    pub fire: FireLinkDto,
    pub injury: String,
}

impl From<VictimRecord> for VictimOfDto {
    fn from(record: VictimRecord) -> Self {
        Self {
            fire: record.fire_link().into(),
            injury: record.injury,
        }
    }
}

/// Person detail page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonDetailDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub name_slug: String,
    pub url: String,
    pub dob: Option<NaiveDate>,
    pub experience: Option<i32>,
    pub title: Option<Title>,
    /// Properties this person owns
    pub owned_addresses: Vec<AddressSummaryDto>,
    /// Fires this person reported on
    pub sourced_fires: Vec<FireLinkDto>,
    pub victim_of: Vec<VictimOfDto>,
}

impl PersonDetailDto {
    pub fn new(
        person: Person,
        title: Option<Title>,
        owned_addresses: Vec<AddressSummaryDto>,
        sourced_fires: Vec<FireLinkDto>,
        victim_of: Vec<VictimOfDto>,
    ) -> Self {
        let full_name = person.full_name();
        let url = person.absolute_url();
        Self {
            id: person.id,
            first_name: person.first_name,
            last_name: person.last_name,
            full_name,
            name_slug: person.name_slug,
            url,
            dob: person.dob,
            experience: person.experience,
            title,
            owned_addresses,
            sourced_fires,
            victim_of,
        }
    }
}

impl From<PersonDetail> for PersonDetailDto {
    fn from(detail: PersonDetail) -> Self {
        Self::new(
            detail.person,
            detail.title,
            detail
                .owned_addresses
                .into_iter()
                .map(AddressSummaryDto::from)
                .collect(),
            detail
                .sourced_fires
                .into_iter()
                .map(FireLinkDto::from)
                .collect(),
            detail.victim_of.into_iter().map(VictimOfDto::from).collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn test_victim_response_from_detail() {
        let dto = VictimResponseDto::from(VictimDetail {
            id: 5,
            person_id: 7,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            name_slug: "jane-doe".to_string(),
            injury_id: 2,
            injury: "Burns".to_string(),
        });

        assert_eq!(dto.name, "Jane Doe");
        assert_eq!(dto.label, "Doe Burns");
        assert_eq!(dto.person_url, "/firestarter/person/7/jane-doe/");
    }

    #[test]
    fn test_person_detail_carries_url_and_name() {
        let person = Person {
            id: 7,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            name_slug: "jane-doe".to_string(),
            dob: None,
            title_id: None,
            experience: Some(4),
            created_at: Utc::now(),
        };

        let dto = PersonDetailDto::new(person, None, vec![], vec![], vec![]);
        assert_eq!(dto.full_name, "Jane Doe");
        assert_eq!(dto.url, "/firestarter/person/7/jane-doe/");
        assert_eq!(dto.experience, Some(4));

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["victimOf"].as_array().unwrap().is_empty());
        assert!(json["ownedAddresses"].is_array());
    }

    #[test]
    fn test_victim_record_links_to_fire() {
        let dto = VictimOfDto::from(VictimRecord {
            id: 12,
            date: Some(Utc.with_ymd_and_hms(2011, 3, 4, 10, 0, 0).unwrap()),
            street: "100 Main St".to_string(),
            street_slug: "100-main-st".to_string(),
            injury: "Burns".to_string(),
        });

        assert_eq!(dto.fire.url, "/firestarter/fire/12/100-main-st/");
        assert_eq!(dto.fire.label, "100 Main St on 2011-03-04 10:00");
        assert_eq!(dto.injury, "Burns");
    }

    #[test]
    fn test_negative_experience_rejected() {
        let dto = CreatePersonDto {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            dob: None,
            title_id: None,
            experience: Some(-3),
        };
        assert!(dto.validate().is_err());
    }
}
