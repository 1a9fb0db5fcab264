use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::admin::registry::AdminEntity;

/// One row of the admin registry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminEntityDto {
    pub name: String,
    /// Null for entities that have no create route of their own
    pub path: Option<String>,
    /// Number of records currently stored
    pub count: i64,
}

impl AdminEntityDto {
    pub fn new(entity: &AdminEntity, count: i64) -> Self {
        Self {
            name: entity.name.to_string(),
            path: entity.path.map(str::to_string),
            count,
        }
    }
}
