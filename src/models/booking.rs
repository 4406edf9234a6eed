//! Booking model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::Entity;

/// Equipment booking for an event.
///
/// Overlapping bookings of the same equipment are accepted as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: Option<i64>,
    pub event_id: Option<i64>,
    pub equip_id: Option<i64>,
    /// User holding the equipment
    pub assigned_to: Option<i64>,
    /// Borrow date (YYYY-MM-DD)
    pub borrow_date: Option<String>,
    /// Return date (YYYY-MM-DD), null while borrowed
    pub return_date: Option<String>,
    pub remarks: Option<String>,
}

impl Entity for Booking {
    const NAME: &'static str = "Booking";

    fn id(&self) -> Option<i64> {
        self.booking_id
    }

    fn set_id(&mut self, id: Option<i64>) {
        self.booking_id = id;
    }

    fn merge_from(&mut self, incoming: Self) {
        self.event_id = incoming.event_id;
        self.equip_id = incoming.equip_id;
        self.assigned_to = incoming.assigned_to;
        self.borrow_date = incoming.borrow_date;
        self.return_date = incoming.return_date;
        self.remarks = incoming.remarks;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_return_date_is_serialized() {
        let booking = Booking {
            booking_id: Some(42),
            remarks: Some("demo".into()),
            ..Booking::default()
        };
        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["bookingId"], 42);
        assert!(value.get("returnDate").is_some());
        assert!(value["returnDate"].is_null());
    }
}
