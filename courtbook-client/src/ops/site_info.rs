//! Fetch site branding.

use courtbook_core::Site;
use serde_json::json;

use crate::error::ClientResult;
use crate::graphql::GraphqlClient;

const SITE_INFO: &str = "\
query {
    site {
        name
        description
        logo
    }
}";

pub async fn run(client: &GraphqlClient) -> ClientResult<Site> {
    client.execute(SITE_INFO, json!({}), "site").await
}
