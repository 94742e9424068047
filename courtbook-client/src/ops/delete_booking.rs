//! Delete a booking by id.

use serde_json::json;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::graphql::GraphqlClient;

const DELETE_BOOKING: &str = "\
mutation ($bookingID: ID!) {
    deleteBooking(bookingId: $bookingID) {
        ok
    }
}";

#[derive(serde::Deserialize)]
struct DeleteBookingPayload {
    ok: bool,
}

/// Returns the server's `ok` flag. Deleting a booking that is already
/// gone is treated as already satisfied (`Ok(false)`), so callers can
/// retry a delete without special-casing.
pub async fn run(client: &GraphqlClient, booking_id: &str) -> ClientResult<bool> {
    let variables = json!({ "bookingID": booking_id });

    match client
        .execute::<DeleteBookingPayload>(DELETE_BOOKING, variables, "deleteBooking")
        .await
    {
        Ok(payload) => Ok(payload.ok),
        Err(ClientError::NotFound(message)) => {
            debug!(booking_id, %message, "booking already gone");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}
