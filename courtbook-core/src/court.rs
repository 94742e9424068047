//! Court records as served by the booking backend.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// A bookable court with its opening hours and booking limits.
///
/// Owned by the server and cached read-only by the client. Limits with
/// `None` are unbounded; the server enforces all of them, the client
/// only uses them for display and for the obvious pre-submit checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Court {
    pub id: String,
    pub name: String,
    pub opening_time: NaiveTime,
    pub closing_time: NaiveTime,
    pub min_booking_length_minutes: u32,
    pub max_booking_length_minutes: Option<u32>,
    pub max_booking_days_in_advance: Option<u32>,
}

/// The court subset echoed inside bookings.
///
/// `name` is absent in some responses (the create mutation only returns
/// the id), so it defaults to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourtRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl From<&Court> for CourtRef {
    fn from(court: &Court) -> Self {
        CourtRef {
            id: court.id.clone(),
            name: court.name.clone(),
        }
    }
}
