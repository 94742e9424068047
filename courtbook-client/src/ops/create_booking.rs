//! Submit a new booking.

use chrono::{NaiveDate, NaiveTime};
use courtbook_core::Booking;
use serde_json::json;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::graphql::GraphqlClient;

const CREATE_BOOKING: &str = "\
mutation ($courtID: ID!, $date: Date!, $startTime: Time!, $endTime: Time!, $description: String!) {
    createBooking(courtId: $courtID, date: $date, startTime: $startTime, endTime: $endTime, description: $description) {
        booking {
            id
            date
            startTime
            endTime
            court {
                id
            }
            description
            user {
                id
                firstName
                lastName
                email
            }
        }
    }
}";

#[derive(serde::Deserialize)]
struct CreateBookingPayload {
    booking: Booking,
}

pub async fn run(
    client: &GraphqlClient,
    court_id: &str,
    date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    description: &str,
) -> ClientResult<Booking> {
    // The server re-validates everything (overlaps, opening hours,
    // length and advance limits); the one check owed locally is that
    // the slot spans forward in time. Checked before any I/O.
    if end_time <= start_time {
        return Err(ClientError::LocalValidation(format!(
            "booking must end after it starts (start {start_time}, end {end_time})"
        )));
    }

    let variables = json!({
        "courtID": court_id,
        "date": date.to_string(),
        "startTime": start_time.format("%H:%M:%S").to_string(),
        "endTime": end_time.format("%H:%M:%S").to_string(),
        "description": description,
    });

    debug!(court_id, %date, "creating booking");

    let payload: CreateBookingPayload = client
        .execute(CREATE_BOOKING, variables, "createBooking")
        .await?;
    Ok(payload.booking)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenHolder;
    use serde_json::Value;
    use std::sync::Arc;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 20).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[tokio::test]
    async fn reversed_slot_is_rejected_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = GraphqlClient::new(server.uri(), Arc::new(TokenHolder::new()));
        let err = run(&client, "1", date(), time(10, 0), time(9, 0), "")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::LocalValidation(_)));
        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn zero_length_slot_is_rejected_before_any_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = GraphqlClient::new(server.uri(), Arc::new(TokenHolder::new()));
        let err = run(&client, "1", date(), time(9, 0), time(9, 0), "")
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::LocalValidation(_)));
        assert_eq!(server.received_requests().await.unwrap().len(), 0);
    }

    #[tokio::test]
    async fn serializes_iso_dates_and_times() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {
                    "createBooking": {
                        "booking": {
                            "id": "9",
                            "date": "2025-03-20",
                            "startTime": "09:00:00",
                            "endTime": "10:00:00",
                            "court": {"id": "1"},
                            "description": "club night",
                            "user": {
                                "id": "3",
                                "firstName": "Ada",
                                "lastName": "Lovelace",
                                "email": "ada@example.com"
                            }
                        }
                    }
                }
            })))
            .mount(&server)
            .await;

        let client = GraphqlClient::new(server.uri(), Arc::new(TokenHolder::new()));
        let booking = run(&client, "1", date(), time(9, 0), time(10, 0), "club night")
            .await
            .unwrap();

        assert_eq!(booking.id, "9");
        assert_eq!(booking.court.id, "1");

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["variables"]["date"], "2025-03-20");
        assert_eq!(body["variables"]["startTime"], "09:00:00");
        assert_eq!(body["variables"]["endTime"], "10:00:00");
        assert_eq!(body["variables"]["courtID"], "1");
    }
}
