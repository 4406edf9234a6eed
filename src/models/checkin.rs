//! Check-in model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Entity;

/// Attendance record of a user at an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub checkin_id: Option<i64>,
    pub user_id: Option<i64>,
    pub event_id: Option<i64>,
    /// ISO-8601 timestamp
    pub checkin_time: Option<String>,
    /// ISO-8601 timestamp, null until the user leaves
    pub checkout_time: Option<String>,
    pub status: Option<String>,
}

impl Entity for CheckIn {
    const NAME: &'static str = "CheckIn";

    fn id(&self) -> Option<i64> {
        self.checkin_id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.checkin_id = id;
    }

    fn merge_from(&mut self, incoming: Self) {
        self.user_id = incoming.user_id;
        self.event_id = incoming.event_id;
        self.checkin_time = incoming.checkin_time;
        self.checkout_time = incoming.checkout_time;
        self.status = incoming.status;
    }
}
