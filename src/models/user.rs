//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Entity;

/// User record (students, organizers, staff)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the store, ignored on create
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Free text, e.g. "Participant" or "Organizer"
    pub role: Option<String>,
    pub roll_number: Option<String>,
}

impl Entity for User {
    const NAME: &'static str = "User";

    fn id(&self) -> Option<i64> {
        self.user_id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.user_id = id;
    }

    fn merge_from(&mut self, incoming: Self) {
        self.name = incoming.name;
        self.email = incoming.email;
        self.phone = incoming.phone;
        self.role = incoming.role;
        self.roll_number = incoming.roll_number;
    }
}
