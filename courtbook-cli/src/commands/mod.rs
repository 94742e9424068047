pub mod book;
pub mod bookings;
pub mod cancel;
pub mod courts;
pub mod login;
pub mod logout;
pub mod site;
pub mod week;
pub mod whoami;

use std::sync::Arc;

use courtbook_client::session::StoredSession;
use courtbook_client::{GraphqlClient, TokenHolder};

use crate::config::CourtbookConfig;

/// Build the shared client, loading any stored session into the token
/// holder. Commands that work anonymously still go through this; the
/// holder simply stays empty and requests go out without a header.
pub fn connect(config: &CourtbookConfig) -> GraphqlClient {
    let tokens = Arc::new(TokenHolder::new());
    if let Ok(session) = StoredSession::load(&config.endpoint) {
        tokens.set(session.token);
    }
    GraphqlClient::new(config.endpoint.clone(), tokens)
}
