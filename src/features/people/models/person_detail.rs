use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::addresses::models::AddressDetail;
use crate::features::fires::models::FireLink;
use crate::features::people::models::Person;
use crate::features::reference::models::Title;

/// A fire the person was injured in, with the injury text
#[derive(Debug, Clone, FromRow)]
pub struct VictimRecord {
    pub id: i64,
    pub date: Option<DateTime<Utc>>,
    pub street: String,
    pub street_slug: String,
    pub injury: String,
}

impl VictimRecord {
    pub fn fire_link(&self) -> FireLink {
        FireLink {
            id: self.id,
            date: self.date,
            street: self.street.clone(),
            street_slug: self.street_slug.clone(),
        }
    }
}

/// Everything shown on a person's page
#[derive(Debug, Clone)]
pub struct PersonDetail {
    pub person: Person,
    pub title: Option<Title>,
    pub owned_addresses: Vec<AddressDetail>,
    pub sourced_fires: Vec<FireLink>,
    pub victim_of: Vec<VictimRecord>,
}
