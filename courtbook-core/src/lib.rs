//! Core types for the courtbook client.
//!
//! This crate is the pure, I/O-free half of the client:
//! - domain records (`Court`, `Booking`, `User`, ...)
//! - calendar grid math in `timegrid`
//! - the `BookingDraft` selection state machine in `draft`
//!
//! Everything here runs synchronously on whatever thread handles input
//! events; network concerns live in `courtbook-client`.

pub mod booking;
pub mod court;
pub mod draft;
pub mod error;
pub mod site;
pub mod timegrid;
pub mod user;

pub use booking::{Booking, BookingSlot};
pub use court::{Court, CourtRef};
pub use draft::{BookingDraft, Slot};
pub use error::{DraftError, DraftResult};
pub use site::Site;
pub use user::{SessionInfo, User};
