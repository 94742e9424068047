//! Booking records as served by the booking backend.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::court::CourtRef;
use crate::user::User;

/// A confirmed booking.
///
/// `start_time < end_time` holds for anything the server hands back; the
/// server is authoritative for overlap and opening-hours rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub court: CourtRef,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub description: String,
    pub user: User,
}

/// The partial booking shape returned by the per-user listing: enough to
/// draw the slot on a grid, without the description or user echo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSlot {
    pub court: CourtRef,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_decodes_wire_shape() {
        let raw = serde_json::json!({
            "id": "17",
            "court": {"id": "1", "name": "Court One"},
            "date": "2025-03-20",
            "startTime": "09:00:00",
            "endTime": "10:30:00",
            "description": "Club night",
            "user": {
                "id": "3",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com"
            }
        });

        let booking: Booking = serde_json::from_value(raw).unwrap();
        assert_eq!(booking.court.name, "Court One");
        assert_eq!(booking.date, NaiveDate::from_ymd_opt(2025, 3, 20).unwrap());
        assert!(booking.start_time < booking.end_time);
        assert_eq!(booking.user.full_name(), "Ada Lovelace");
    }

    #[test]
    fn booking_court_without_name() {
        // The create mutation echoes court { id } only
        let raw = serde_json::json!({
            "id": "18",
            "court": {"id": "2"},
            "date": "2025-03-21",
            "startTime": "18:00:00",
            "endTime": "19:00:00",
            "description": "",
            "user": {
                "id": "3",
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com"
            }
        });

        let booking: Booking = serde_json::from_value(raw).unwrap();
        assert_eq!(booking.court.id, "2");
        assert_eq!(booking.court.name, "");
    }

    #[test]
    fn booking_slot_decodes_partial_shape() {
        let raw = serde_json::json!({
            "court": {"id": "1", "name": "Court One"},
            "date": "2025-03-20",
            "startTime": "09:00:00",
            "endTime": "10:00:00"
        });

        let slot: BookingSlot = serde_json::from_value(raw).unwrap();
        assert_eq!(slot.court.id, "1");
    }
}
