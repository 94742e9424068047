//! Typed request/response contracts for the booking service.
//!
//! One module per operation. Each takes the shared [`GraphqlClient`]
//! and returns decoded domain types; the documents match the server
//! schema verbatim, field for field.
//!
//! [`GraphqlClient`]: crate::graphql::GraphqlClient

pub mod bookings_by_user;
pub mod create_booking;
pub mod delete_booking;
pub mod list_bookings;
pub mod list_courts;
pub mod session_info;
pub mod site_info;
