use sqlx::FromRow;

/// A person injured in a fire, joined with the person's name and the injury text
#[derive(Debug, Clone, FromRow)]
pub struct VictimDetail {
    pub id: i64,
    pub person_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub name_slug: String,
    pub injury_id: i64,
    pub injury: String,
}

impl std::fmt::Display for VictimDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.last_name, self.injury)
    }
}
