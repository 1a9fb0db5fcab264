use chrono::{DateTime, Duration, Utc};
use sqlx::FromRow;

use crate::features::addresses::models::AddressDetail;
use crate::features::geocodes::models::Geocode;
use crate::features::people::models::{Person, VictimDetail};
use crate::features::reference::models::{Cause, StoryLink};
use crate::features::stations::models::StationDetail;
use crate::shared::constants::ROUTE_PREFIX;

/// Time between two optional instants; `None` when either is unknown.
pub fn elapsed(from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> Option<Duration> {
    Some(to? - from?)
}

/// Canonical detail page, e.g. `/firestarter/fire/3/100-main-st/`
pub fn fire_url(id: i64, street_slug: &str) -> String {
    format!("{}/fire/{}/{}/", ROUTE_PREFIX, id, street_slug)
}

fn fire_label(street: &str, date: Option<DateTime<Utc>>) -> String {
    match date {
        Some(date) => format!("{} on {}", street, date.format("%Y-%m-%d %H:%M")),
        None => format!("{} on unknown date", street),
    }
}

/// Database row of the `fires` table
#[derive(Debug, Clone, FromRow)]
pub struct FireRecord {
    pub id: i64,
    pub location_id: i64,
    pub geocode_id: Option<i64>,
    pub cause_id: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    pub monetary_damage: Option<i64>,
    pub response_time: Option<DateTime<Utc>>,
    pub extinguish_time: Option<DateTime<Utc>>,
    pub source_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

/// A fire incident as written through the save path.
///
/// `id == None` means the fire has not been persisted yet. After a save both
/// `id` and `geocode_id` are set.
#[derive(Debug, Clone, PartialEq)]
pub struct Fire {
    pub id: Option<i64>,
    pub location_id: i64,
    pub geocode_id: Option<i64>,
    pub cause_id: Option<i64>,
    /// When the fire was reported
    pub date: Option<DateTime<Utc>>,
    pub monetary_damage: Option<i64>,
    pub response_time: Option<DateTime<Utc>>,
    pub extinguish_time: Option<DateTime<Utc>>,
    /// Person who supplied the information
    pub source_id: Option<i64>,
    /// Responding stations
    pub responding_ids: Vec<i64>,
    pub story_link_ids: Vec<i64>,
    pub victim_ids: Vec<i64>,
}

impl Fire {
    /// An unsaved fire at the given address with everything else unset
    pub fn new(location_id: i64) -> Self {
        Self {
            id: None,
            location_id,
            geocode_id: None,
            cause_id: None,
            date: None,
            monetary_damage: None,
            response_time: None,
            extinguish_time: None,
            source_id: None,
            responding_ids: Vec::new(),
            story_link_ids: Vec::new(),
            victim_ids: Vec::new(),
        }
    }

    pub fn from_record(
        record: FireRecord,
        responding_ids: Vec<i64>,
        story_link_ids: Vec<i64>,
        victim_ids: Vec<i64>,
    ) -> Self {
        Self {
            id: Some(record.id),
            location_id: record.location_id,
            geocode_id: record.geocode_id,
            cause_id: record.cause_id,
            date: record.date,
            monetary_damage: record.monetary_damage,
            response_time: record.response_time,
            extinguish_time: record.extinguish_time,
            source_id: record.source_id,
            responding_ids,
            story_link_ids,
            victim_ids,
        }
    }

    /// Time from report to response
    pub fn time_took(&self) -> Option<Duration> {
        elapsed(self.date, self.response_time)
    }

    /// Time from response to extinguishment
    pub fn extinguish_time_took(&self) -> Option<Duration> {
        elapsed(self.response_time, self.extinguish_time)
    }
}

/// A fire with every relation loaded, for the detail page
#[derive(Debug, Clone)]
pub struct FireDetail {
    pub record: FireRecord,
    pub location: AddressDetail,
    pub geocode: Option<Geocode>,
    pub cause: Option<Cause>,
    pub source: Option<Person>,
    pub respondings: Vec<StationDetail>,
    pub story_links: Vec<StoryLink>,
    pub victims: Vec<VictimDetail>,
}

impl FireDetail {
    pub fn time_took(&self) -> Option<Duration> {
        elapsed(self.record.date, self.record.response_time)
    }

    pub fn extinguish_time_took(&self) -> Option<Duration> {
        elapsed(self.record.response_time, self.record.extinguish_time)
    }

    /// Coordinates of this fire's own geocode; `None` if it failed to resolve
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.geocode.as_ref().and_then(Geocode::coordinates)
    }

    pub fn absolute_url(&self) -> String {
        fire_url(self.record.id, &self.location.street_slug)
    }
}

impl std::fmt::Display for FireDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", fire_label(&self.location.street, self.record.date))
    }
}

/// Minimal fire reference used for links from other pages
#[derive(Debug, Clone, FromRow)]
pub struct FireLink {
    pub id: i64,
    pub date: Option<DateTime<Utc>>,
    pub street: String,
    pub street_slug: String,
}

impl FireLink {
    pub fn absolute_url(&self) -> String {
        fire_url(self.id, &self.street_slug)
    }
}

impl std::fmt::Display for FireLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", fire_label(&self.street, self.date))
    }
}

/// Row for the index listing
#[derive(Debug, Clone, FromRow)]
pub struct FireSummary {
    pub id: i64,
    pub date: Option<DateTime<Utc>>,
    pub street: String,
    pub street_slug: String,
    pub city_name: String,
    pub state_short_name: String,
    pub cause_type: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub geocode_error: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2011, 3, 4, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_time_took_is_response_minus_report() {
        let mut fire = Fire::new(1);
        fire.date = Some(at(10, 0));
        fire.response_time = Some(at(10, 30));

        assert_eq!(fire.time_took(), Some(Duration::minutes(30)));
    }

    #[test]
    fn test_extinguish_time_took() {
        let mut fire = Fire::new(1);
        fire.response_time = Some(at(10, 30));
        fire.extinguish_time = Some(at(12, 0));

        assert_eq!(fire.extinguish_time_took(), Some(Duration::minutes(90)));
    }

    #[test]
    fn test_durations_unavailable_without_timestamps() {
        let mut fire = Fire::new(1);
        assert_eq!(fire.time_took(), None);
        assert_eq!(fire.extinguish_time_took(), None);

        fire.date = Some(at(10, 0));
        assert_eq!(fire.time_took(), None);

        fire.extinguish_time = Some(at(12, 0));
        assert_eq!(fire.extinguish_time_took(), None);
    }

    #[test]
    fn test_fire_link_label_and_url() {
        let link = FireLink {
            id: 3,
            date: Some(at(10, 5)),
            street: "100 Main St".to_string(),
            street_slug: "100-main-st".to_string(),
        };
        assert_eq!(link.to_string(), "100 Main St on 2011-03-04 10:05");
        assert_eq!(link.absolute_url(), "/firestarter/fire/3/100-main-st/");

        let undated = FireLink { date: None, ..link };
        assert_eq!(undated.to_string(), "100 Main St on unknown date");
    }
}
