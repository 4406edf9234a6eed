//! Equipment model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Entity;

/// Equipment record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub equip_id: Option<i64>,
    pub equip_name: Option<String>,
    pub category: Option<String>,
    /// Free text, e.g. "Available" or "Borrowed"
    pub status: Option<String>,
    pub location: Option<String>,
    /// Purchase date (YYYY-MM-DD)
    pub purchase_date: Option<String>,
}

impl Entity for Equipment {
    const NAME: &'static str = "Equipment";

    fn id(&self) -> Option<i64> {
        self.equip_id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.equip_id = id;
    }

    fn merge_from(&mut self, incoming: Self) {
        self.equip_name = incoming.equip_name;
        self.category = incoming.category;
        self.status = incoming.status;
        self.location = incoming.location;
        self.purchase_date = incoming.purchase_date;
    }
}
