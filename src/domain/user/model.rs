//! User domain entity

use chrono::{DateTime, Utc};

use crate::domain::Resource;

/// A registered user. Immutable once created; the identifier is
/// assigned exactly once at creation and never reused.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }
}
