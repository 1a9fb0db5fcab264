use sqlx::FromRow;

/// A person recorded as an information source, joined with the person's slug
#[derive(Debug, Clone, FromRow)]
pub struct SourceDetail {
    pub id: i64,
    pub person_id: i64,
    pub name_slug: String,
}

impl std::fmt::Display for SourceDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_slug)
    }
}
