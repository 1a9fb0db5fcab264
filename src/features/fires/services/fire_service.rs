use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::fires::dtos::{
    FireDetailDto, FireResponseDto, FireSummaryDto, SaveFireDto,
};
use crate::features::fires::models::Fire;
use crate::features::fires::repository::FireRepository;
use crate::features::geocodes::GeocodingService;
use crate::shared::types::PaginationQuery;

fn normalize_ids(ids: &mut Vec<i64>) {
    ids.sort_unstable();
    ids.dedup();
}

/// Service for fire incidents
pub struct FireService {
    repository: Arc<dyn FireRepository>,
    geocoding: Arc<GeocodingService>,
}

impl FireService {
    pub fn new(repository: Arc<dyn FireRepository>, geocoding: Arc<GeocodingService>) -> Self {
        Self {
            repository,
            geocoding,
        }
    }

    /// Persist a fire, geocoding its location first when no geocode is attached.
    ///
    /// A failed lookup is stored as a geocode with the error flag set and does
    /// not block the save. An attached geocode is kept as-is.
    pub async fn save(&self, mut fire: Fire) -> Result<Fire> {
        normalize_ids(&mut fire.responding_ids);
        normalize_ids(&mut fire.story_link_ids);
        normalize_ids(&mut fire.victim_ids);

        let geocode = match fire.geocode_id {
            Some(_) => None,
            None => {
                let location = self
                    .repository
                    .find_location(fire.location_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::NotFound(format!("Address {} not found", fire.location_id))
                    })?;

                Some(self.geocoding.resolve_new_geocode(Some(&location)).await)
            }
        };

        let geocoded = geocode.as_ref().map(|g| !g.geocode_error);
        let saved = self.repository.save_fire(fire, geocode).await?;

        match geocoded {
            Some(true) => tracing::info!(
                "Saved fire {:?} with new geocode {:?}",
                saved.id,
                saved.geocode_id
            ),
            Some(false) => tracing::warn!(
                "Saved fire {:?} with unresolved geocode {:?}",
                saved.id,
                saved.geocode_id
            ),
            None => tracing::info!(
                "Saved fire {:?} keeping geocode {:?}",
                saved.id,
                saved.geocode_id
            ),
        }

        Ok(saved)
    }

    pub async fn create(&self, dto: SaveFireDto) -> Result<FireResponseDto> {
        let saved = self.save(dto.into_fire(None)).await?;
        FireResponseDto::from_saved(saved)
    }

    /// Update an existing fire. Without an explicit `geocodeId` the fire keeps
    /// the geocode it already has.
    pub async fn update(&self, id: i64, dto: SaveFireDto) -> Result<FireResponseDto> {
        let existing = self
            .repository
            .find_fire(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Fire {} not found", id)))?;

        let mut fire = dto.into_fire(Some(id));
        if fire.geocode_id.is_none() {
            fire.geocode_id = existing.geocode_id;
        }

        let saved = self.save(fire).await?;
        FireResponseDto::from_saved(saved)
    }

    /// Get fire detail by id
    pub async fn get_detail(&self, id: i64) -> Result<FireDetailDto> {
        self.repository
            .find_detail(id)
            .await?
            .map(FireDetailDto::from)
            .ok_or_else(|| AppError::NotFound(format!("Fire {} not found", id)))
    }

    /// List fires, most recent first
    pub async fn list_recent(
        &self,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<FireSummaryDto>, i64)> {
        let (fires, total) = self
            .repository
            .list_recent(pagination.offset(), pagination.limit())
            .await?;

        Ok((fires.into_iter().map(FireSummaryDto::from).collect(), total))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;
    use crate::features::addresses::models::AddressDetail;
    use crate::features::fires::repository::test_support::InMemoryFireRepository;
    use crate::features::geocodes::models::NewGeocode;
    use crate::features::geocodes::services::test_support::ScriptedGeocoder;

    const QUERY: &str = "100 Main St, Springfield, IL";

    fn springfield() -> AddressDetail {
        AddressDetail {
            id: 1,
            street: "100 Main St".to_string(),
            street_slug: "100-main-st".to_string(),
            property_value: Some(250_000),
            city_id: 2,
            city_name: "Springfield".to_string(),
            state_id: 3,
            state_name: "IL".to_string(),
            state_short_name: "IL".to_string(),
        }
    }

    struct Harness {
        repository: Arc<InMemoryFireRepository>,
        geocoder: Arc<ScriptedGeocoder>,
        service: FireService,
    }

    fn harness(geocoder: ScriptedGeocoder) -> Harness {
        let repository = Arc::new(InMemoryFireRepository::default().with_address(springfield()));
        let geocoder = Arc::new(geocoder);
        let service = FireService::new(
            repository.clone(),
            Arc::new(GeocodingService::new(geocoder.clone())),
        );
        Harness {
            repository,
            geocoder,
            service,
        }
    }

    #[tokio::test]
    async fn test_save_without_geocode_creates_one() {
        let h = harness(ScriptedGeocoder::default().with_place(QUERY, 39.78, -89.65));

        let saved = h.service.save(Fire::new(1)).await.unwrap();

        assert!(saved.id.is_some());
        let geocode_id = saved.geocode_id.expect("geocode attached");
        assert_eq!(h.repository.geocode_count(), 1);

        let geocode = h.repository.geocode(geocode_id).unwrap();
        assert!(!geocode.geocode_error);
        assert_eq!(geocode.address_id, Some(1));
        assert_eq!(geocode.latitude, Some(39.78));
        assert_eq!(geocode.longitude, Some(-89.65));
    }

    #[tokio::test]
    async fn test_failed_lookup_does_not_block_save() {
        let h = harness(ScriptedGeocoder::default());

        let saved = h.service.save(Fire::new(1)).await.unwrap();

        let geocode = h.repository.geocode(saved.geocode_id.unwrap()).unwrap();
        assert!(geocode.geocode_error);
        assert_eq!(geocode.latitude, None);
        assert_eq!(geocode.longitude, None);
        assert_eq!(h.repository.fire_count(), 1);
    }

    #[tokio::test]
    async fn test_provider_outage_does_not_block_save() {
        let h = harness(ScriptedGeocoder::failing());

        let saved = h.service.save(Fire::new(1)).await.unwrap();

        let geocode = h.repository.geocode(saved.geocode_id.unwrap()).unwrap();
        assert!(geocode.geocode_error);
    }

    #[tokio::test]
    async fn test_existing_geocode_is_trusted() {
        let h = harness(ScriptedGeocoder::default().with_place(QUERY, 39.78, -89.65));
        let existing = h.repository.insert_geocode(NewGeocode {
            address_id: Some(1),
            computed_address: Some("stale".to_string()),
            latitude: Some(1.0),
            longitude: Some(2.0),
            geocode_error: false,
        });

        let mut fire = Fire::new(1);
        fire.geocode_id = Some(existing);
        let saved = h.service.save(fire).await.unwrap();

        assert_eq!(saved.geocode_id, Some(existing));
        assert_eq!(h.repository.geocode_count(), 1);
        assert_eq!(h.geocoder.query_count(), 0);
    }

    #[tokio::test]
    async fn test_saving_twice_creates_one_geocode() {
        let h = harness(ScriptedGeocoder::default().with_place(QUERY, 39.78, -89.65));

        let first = h.service.save(Fire::new(1)).await.unwrap();
        let second = h.service.save(first.clone()).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.geocode_id, second.geocode_id);
        assert_eq!(h.repository.geocode_count(), 1);
        assert_eq!(h.repository.fire_count(), 1);
        assert_eq!(h.geocoder.query_count(), 1);
    }

    #[tokio::test]
    async fn test_unknown_location_is_not_found() {
        let h = harness(ScriptedGeocoder::default());

        let err = h.service.save(Fire::new(99)).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(h.repository.geocode_count(), 0);
        assert_eq!(h.geocoder.query_count(), 0);
    }

    #[tokio::test]
    async fn test_save_deduplicates_associations() {
        let h = harness(ScriptedGeocoder::default());

        let mut fire = Fire::new(1);
        fire.responding_ids = vec![3, 1, 3];
        fire.victim_ids = vec![2, 2];
        let saved = h.service.save(fire).await.unwrap();

        assert_eq!(saved.responding_ids, vec![1, 3]);
        assert_eq!(saved.victim_ids, vec![2]);
    }

    #[tokio::test]
    async fn test_update_keeps_existing_geocode() {
        let h = harness(ScriptedGeocoder::default().with_place(QUERY, 39.78, -89.65));
        let created = h
            .service
            .create(SaveFireDto {
                location_id: 1,
                geocode_id: None,
                cause_id: None,
                date: None,
                monetary_damage: None,
                response_time: None,
                extinguish_time: None,
                source_id: None,
                responding_ids: vec![],
                story_link_ids: vec![],
                victim_ids: vec![],
            })
            .await
            .unwrap();

        let reported = Utc.with_ymd_and_hms(2011, 3, 4, 10, 0, 0).unwrap();
        let updated = h
            .service
            .update(
                created.id,
                SaveFireDto {
                    location_id: 1,
                    geocode_id: None,
                    cause_id: None,
                    date: Some(reported),
                    monetary_damage: Some(50_000),
                    response_time: Some(reported + Duration::minutes(30)),
                    extinguish_time: None,
                    source_id: None,
                    responding_ids: vec![],
                    story_link_ids: vec![],
                    victim_ids: vec![],
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.geocode_id, created.geocode_id);
        assert_eq!(updated.time_took_seconds, Some(30 * 60));
        assert_eq!(h.repository.geocode_count(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_fire_is_not_found() {
        let h = harness(ScriptedGeocoder::default());

        let err = h
            .service
            .update(
                42,
                SaveFireDto {
                    location_id: 1,
                    geocode_id: None,
                    cause_id: None,
                    date: None,
                    monetary_damage: None,
                    response_time: None,
                    extinguish_time: None,
                    source_id: None,
                    responding_ids: vec![],
                    story_link_ids: vec![],
                    victim_ids: vec![],
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_detail_exposes_coordinates_and_url() {
        let h = harness(ScriptedGeocoder::default().with_place(QUERY, 39.78, -89.65));
        let saved = h.service.save(Fire::new(1)).await.unwrap();

        let detail = h.service.get_detail(saved.id.unwrap()).await.unwrap();

        assert_eq!(detail.url, format!("/firestarter/fire/{}/100-main-st/", detail.id));
        assert_eq!(detail.location.full_address, "IL, Springfield, 100 Main St");
        assert_eq!(detail.latitude, Some(39.78));
        assert_eq!(detail.longitude, Some(-89.65));
        assert_eq!(detail.label, "100 Main St on unknown date");
    }

    #[tokio::test]
    async fn test_list_recent_orders_by_date() {
        let h = harness(ScriptedGeocoder::default());
        let early = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
        let late = Utc.with_ymd_and_hms(2012, 1, 1, 0, 0, 0).unwrap();

        for date in [early, late] {
            let mut fire = Fire::new(1);
            fire.date = Some(date);
            h.service.save(fire).await.unwrap();
        }

        let (fires, total) = h
            .service
            .list_recent(&PaginationQuery::default())
            .await
            .unwrap();

        assert_eq!(total, 2);
        assert_eq!(fires[0].date, Some(late));
        assert_eq!(fires[1].date, Some(early));
        assert_eq!(fires[0].latitude, None);
    }
}
