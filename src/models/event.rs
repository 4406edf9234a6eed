//! Event model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Entity;

/// Event record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub event_id: Option<i64>,
    pub event_name: Option<String>,
    /// Event date (YYYY-MM-DD), stored as given
    pub event_date: Option<String>,
    pub venue: Option<String>,
    pub description: Option<String>,
    /// Organizing user, not checked for existence
    pub organizer_id: Option<i64>,
}

impl Entity for Event {
    const NAME: &'static str = "Event";

    fn id(&self) -> Option<i64> {
        self.event_id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.event_id = id;
    }

    fn merge_from(&mut self, incoming: Self) {
        self.event_name = incoming.event_name;
        self.event_date = incoming.event_date;
        self.venue = incoming.venue;
        self.description = incoming.description;
        self.organizer_id = incoming.organizer_id;
    }
}
