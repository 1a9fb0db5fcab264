use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::people::dtos::{
    CreatePersonDto, CreateSourceDto, CreateVictimDto, PersonDetailDto, SourceResponseDto,
    VictimResponseDto,
};
use crate::features::people::models::Person;
use crate::features::people::repository::PersonRepository;
use crate::shared::validation::required_slug;

/// Service for people, victims and sources
pub struct PeopleService {
    repository: Arc<dyn PersonRepository>,
}

impl PeopleService {
    pub fn new(repository: Arc<dyn PersonRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_person(&self, dto: CreatePersonDto) -> Result<Person> {
        let name_slug = required_slug(&format!("{} {}", dto.first_name, dto.last_name), "name")?;

        let person = self.repository.insert_person(&dto, &name_slug).await?;

        tracing::info!("Created person {} ({})", person.id, person);

        Ok(person)
    }

    pub async fn create_victim(&self, dto: CreateVictimDto) -> Result<VictimResponseDto> {
        let victim = self.repository.insert_victim(&dto).await?;
        Ok(victim.into())
    }

    pub async fn create_source(&self, dto: CreateSourceDto) -> Result<SourceResponseDto> {
        let source = self.repository.insert_source(&dto).await?;
        Ok(source.into())
    }

    /// Person with title, owned properties and the fires they appear in
    pub async fn get_detail(&self, id: i64) -> Result<PersonDetailDto> {
        self.repository
            .find_detail(id)
            .await?
            .map(PersonDetailDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Person {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::people::repository::test_support::InMemoryPersonRepository;

    fn jane() -> CreatePersonDto {
        CreatePersonDto {
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            dob: None,
            title_id: None,
            experience: None,
        }
    }

    #[tokio::test]
    async fn test_create_person_derives_slug() {
        let service = PeopleService::new(Arc::new(InMemoryPersonRepository::default()));

        let person = service.create_person(jane()).await.unwrap();

        assert_eq!(person.name_slug, "jane-doe");
        assert_eq!(person.absolute_url(), format!("/firestarter/person/{}/jane-doe/", person.id));
    }

    #[tokio::test]
    async fn test_name_without_alphanumerics_is_rejected() {
        let service = PeopleService::new(Arc::new(InMemoryPersonRepository::default()));

        let err = service
            .create_person(CreatePersonDto {
                first_name: "!!".to_string(),
                last_name: "--".to_string(),
                ..jane()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_victim_for_unknown_person_is_not_found() {
        let service = PeopleService::new(Arc::new(
            InMemoryPersonRepository::default().with_injury(1, "Burns"),
        ));

        let err = service
            .create_victim(CreateVictimDto {
                person_id: 9,
                injury_id: 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_unknown_person_detail_is_not_found() {
        let service = PeopleService::new(Arc::new(InMemoryPersonRepository::default()));

        let err = service.get_detail(3).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }
}
