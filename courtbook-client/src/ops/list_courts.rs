//! Fetch all courts with opening hours and booking limits.

use courtbook_core::Court;
use serde_json::json;

use crate::error::ClientResult;
use crate::graphql::GraphqlClient;

const ALL_COURTS: &str = "\
query {
    allCourts {
        id
        name
        openingTime
        closingTime
        minBookingLengthMinutes
        maxBookingLengthMinutes
        maxBookingDaysInAdvance
    }
}";

pub async fn run(client: &GraphqlClient) -> ClientResult<Vec<Court>> {
    client.execute(ALL_COURTS, json!({}), "allCourts").await
}
