//! Fetch the full booking snapshot for calendar rendering.

use courtbook_core::Booking;
use serde_json::json;

use crate::error::ClientResult;
use crate::graphql::GraphqlClient;

const ALL_BOOKINGS: &str = "\
query {
    allBookings {
        id
        court {
            id
            name
        }
        date
        startTime
        endTime
        description
        user {
            id
            firstName
            lastName
            email
        }
    }
}";

pub async fn run(client: &GraphqlClient) -> ClientResult<Vec<Booking>> {
    client.execute(ALL_BOOKINGS, json!({}), "allBookings").await
}
