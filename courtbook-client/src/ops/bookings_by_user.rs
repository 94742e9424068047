//! Fetch the slots booked by one user.
//!
//! Returns partial bookings (no description or user echo), enough to
//! draw them on the grid.

use courtbook_core::BookingSlot;
use serde_json::json;

use crate::error::ClientResult;
use crate::graphql::GraphqlClient;

const BOOKINGS_BY_USER: &str = "\
query ($userId: ID) {
    bookingsByUser(userId: $userId) {
        startTime
        endTime
        court {
            id
            name
        }
        date
    }
}";

pub async fn run(
    client: &GraphqlClient,
    user_id: Option<&str>,
) -> ClientResult<Vec<BookingSlot>> {
    let variables = json!({ "userId": user_id });
    client
        .execute(BOOKINGS_BY_USER, variables, "bookingsByUser")
        .await
}
