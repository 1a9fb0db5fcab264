/// An entity managed through the admin routes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminEntity {
    pub name: &'static str,
    pub table: &'static str,
    /// Admin route where records are created; `None` when records are only
    /// written as a side effect of saving another entity
    pub path: Option<&'static str>,
}

const fn entity(name: &'static str, table: &'static str, path: &'static str) -> AdminEntity {
    AdminEntity {
        name,
        table,
        path: Some(path),
    }
}

const fn derived(name: &'static str, table: &'static str) -> AdminEntity {
    AdminEntity {
        name,
        table,
        path: None,
    }
}

/// Every entity editable through the admin surface, in display order
pub const ADMIN_ENTITIES: &[AdminEntity] = &[
    entity("State", "states", "/firestarter/admin/states"),
    entity("City", "cities", "/firestarter/admin/cities"),
    entity("Department", "departments", "/firestarter/admin/departments"),
    entity("Title", "titles", "/firestarter/admin/titles"),
    entity("Person", "people", "/firestarter/admin/people"),
    entity("Address", "addresses", "/firestarter/admin/addresses"),
    derived("Geocode", "geocodes"),
    entity("Station", "stations", "/firestarter/admin/stations"),
    entity("StoryLink", "story_links", "/firestarter/admin/story-links"),
    entity("Injury", "injuries", "/firestarter/admin/injuries"),
    entity("Victim", "victims", "/firestarter/admin/victims"),
    entity("Source", "sources", "/firestarter/admin/sources"),
    entity("Cause", "causes", "/firestarter/admin/causes"),
    entity("Fire", "fires", "/firestarter/admin/fires"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_registry_covers_every_entity_once() {
        assert_eq!(ADMIN_ENTITIES.len(), 14);

        let names: HashSet<_> = ADMIN_ENTITIES.iter().map(|e| e.name).collect();
        let tables: HashSet<_> = ADMIN_ENTITIES.iter().map(|e| e.table).collect();
        assert_eq!(names.len(), ADMIN_ENTITIES.len());
        assert_eq!(tables.len(), ADMIN_ENTITIES.len());
    }

    #[test]
    fn test_registry_paths_live_under_admin() {
        for entity in ADMIN_ENTITIES {
            if let Some(path) = entity.path {
                assert!(path.starts_with("/firestarter/admin/"), "{}", entity.name);
            }
        }
    }

    #[test]
    fn test_geocodes_have_no_create_route() {
        let geocode = ADMIN_ENTITIES.iter().find(|e| e.name == "Geocode").unwrap();
        assert_eq!(geocode.path, None);

        let without_route: Vec<_> = ADMIN_ENTITIES
            .iter()
            .filter(|e| e.path.is_none())
            .map(|e| e.name)
            .collect();
        assert_eq!(without_route, vec!["Geocode"]);
    }
}
