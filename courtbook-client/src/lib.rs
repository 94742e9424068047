//! Network client for the courtbook booking service.
//!
//! Everything that touches the wire lives here:
//! - `token`: the process-wide holder of the session credential
//! - `graphql`: the transport, which stamps the auth header per request
//! - `ops`: typed request/response contracts for each server operation
//! - `session`: on-disk persistence of a login across invocations
//!
//! The pure calendar/draft logic is in `courtbook-core`.

pub mod error;
pub mod graphql;
pub mod ops;
pub mod session;
pub mod token;

pub use error::{ClientError, ClientResult};
pub use graphql::GraphqlClient;
pub use token::TokenHolder;
