use sqlx::FromRow;

/// Fire station joined with its department name and street
#[derive(Debug, Clone, FromRow)]
pub struct StationDetail {
    pub id: i64,
    pub name: String,
    pub name_slug: String,
    pub department_id: i64,
    pub department_name: String,
    pub address_id: i64,
    pub street: String,
}

impl std::fmt::Display for StationDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
