//! Ask the server who the current token belongs to.

use courtbook_core::SessionInfo;
use serde_json::json;

use crate::error::ClientResult;
use crate::graphql::GraphqlClient;

const SESSION_INFO: &str = "\
query {
    sessionInfo {
        isAuthenticated
        user {
            id
            firstName
            lastName
            email
        }
        groups
    }
}";

pub async fn run(client: &GraphqlClient) -> ClientResult<SessionInfo> {
    client.execute(SESSION_INFO, json!({}), "sessionInfo").await
}
