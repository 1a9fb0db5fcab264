use utoipa::{Modify, OpenApi};

use crate::core::config::DocsConfig;
use crate::features::addresses::{dtos as addresses_dtos, handlers as addresses_handlers};
use crate::features::admin::{dtos as admin_dtos, handlers as admin_handlers};
use crate::features::fires::{dtos as fires_dtos, handlers as fires_handlers};
use crate::features::geocodes::models as geocodes_models;
use crate::features::people::{
    dtos as people_dtos, handlers as people_handlers, models as people_models,
};
use crate::features::reference::{
    dtos as reference_dtos, handlers as reference_handlers, models as reference_models,
};
use crate::features::stations::{dtos as stations_dtos, handlers as stations_handlers};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Fires
        fires_handlers::index,
        fires_handlers::fire_detail,
        fires_handlers::create_fire,
        fires_handlers::update_fire,
        // People
        people_handlers::person_detail,
        people_handlers::create_person,
        people_handlers::create_victim,
        people_handlers::create_source,
        // Admin registry
        admin_handlers::list_entities,
        // Reference data
        reference_handlers::create_state,
        reference_handlers::create_city,
        reference_handlers::create_department,
        reference_handlers::create_title,
        reference_handlers::create_cause,
        reference_handlers::create_injury,
        reference_handlers::create_story_link,
        // Addresses
        addresses_handlers::create_address,
        addresses_handlers::get_address,
        // Stations
        stations_handlers::create_station,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Fires
            fires_dtos::SaveFireDto,
            fires_dtos::FireResponseDto,
            fires_dtos::FireSummaryDto,
            fires_dtos::FireDetailDto,
            fires_dtos::FireLinkDto,
            fires_dtos::PersonLinkDto,
            geocodes_models::Geocode,
            ApiResponse<fires_dtos::FireResponseDto>,
            ApiResponse<Vec<fires_dtos::FireSummaryDto>>,
            ApiResponse<fires_dtos::FireDetailDto>,
            // People
            people_models::Person,
            people_dtos::CreatePersonDto,
            people_dtos::CreateVictimDto,
            people_dtos::CreateSourceDto,
            people_dtos::VictimResponseDto,
            people_dtos::SourceResponseDto,
            people_dtos::VictimOfDto,
            people_dtos::PersonDetailDto,
            ApiResponse<people_models::Person>,
            ApiResponse<people_dtos::VictimResponseDto>,
            ApiResponse<people_dtos::SourceResponseDto>,
            ApiResponse<people_dtos::PersonDetailDto>,
            // Admin registry
            admin_dtos::AdminEntityDto,
            ApiResponse<Vec<admin_dtos::AdminEntityDto>>,
            // Reference data
            reference_models::State,
            reference_models::City,
            reference_models::Department,
            reference_models::Title,
            reference_models::Cause,
            reference_models::Injury,
            reference_models::StoryLink,
            reference_dtos::CreateStateDto,
            reference_dtos::CreateCityDto,
            reference_dtos::CreateDepartmentDto,
            reference_dtos::CreateTitleDto,
            reference_dtos::CreateCauseDto,
            reference_dtos::CreateInjuryDto,
            reference_dtos::CreateStoryLinkDto,
            ApiResponse<reference_models::State>,
            ApiResponse<reference_models::City>,
            ApiResponse<reference_models::Department>,
            ApiResponse<reference_models::Title>,
            ApiResponse<reference_models::Cause>,
            ApiResponse<reference_models::Injury>,
            ApiResponse<reference_models::StoryLink>,
            // Addresses
            addresses_dtos::CreateAddressDto,
            addresses_dtos::AddressResponseDto,
            addresses_dtos::AddressSummaryDto,
            ApiResponse<addresses_dtos::AddressResponseDto>,
            ApiResponse<addresses_dtos::AddressSummaryDto>,
            // Stations
            stations_dtos::CreateStationDto,
            stations_dtos::StationResponseDto,
            ApiResponse<stations_dtos::StationResponseDto>,
        )
    ),
    tags(
        (name = "fires", description = "Fire index and detail pages"),
        (name = "people", description = "Person detail pages"),
        (name = "admin", description = "Record management"),
    ),
    info(
        title = "Firestarter API",
        version = "0.1.0",
        description = "API documentation for Firestarter",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl From<&DocsConfig> for SwaggerInfoModifier {
    fn from(docs: &DocsConfig) -> Self {
        Self {
            title: docs.title.clone(),
            version: docs.version.clone(),
            description: docs.description.clone(),
        }
    }
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
