//! GraphQL transport.
//!
//! A thin executor around reqwest: POST `{query, variables}` to a single
//! endpoint and unwrap the `{data, errors}` envelope. The token holder
//! is consulted per request at send time, not captured when the client
//! is built, so a token acquired later is honored on the next request
//! and two requests bracketing a login/logout legitimately carry
//! different headers.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, ClientResult};
use crate::token::TokenHolder;

pub struct GraphqlClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: Arc<TokenHolder>,
}

#[derive(serde::Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(serde::Deserialize)]
struct GraphqlEnvelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<GraphqlError>>,
}

#[derive(serde::Deserialize)]
struct GraphqlError {
    message: String,
}

impl GraphqlClient {
    pub fn new(endpoint: impl Into<String>, tokens: Arc<TokenHolder>) -> Self {
        GraphqlClient {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            tokens,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn tokens(&self) -> &Arc<TokenHolder> {
        &self.tokens
    }

    /// Execute a GraphQL document and decode the value under
    /// `data.<field>`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
        field: &str,
    ) -> ClientResult<T> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&GraphqlRequest { query, variables });

        // Send-time read: attach whatever credential is held right now.
        let header = self.tokens.header();
        debug!(field, authorized = header.is_some(), "issuing request");
        if let Some(header) = header {
            request = request.header(AUTHORIZATION, header);
        }

        let response = request.send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Unauthorized);
        }
        let response = response.error_for_status()?;

        let envelope: GraphqlEnvelope = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        if let Some(errors) = envelope.errors.filter(|e| !e.is_empty()) {
            let message = errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            debug!(%message, "server rejected request");
            return Err(classify_rejection(message));
        }

        let data = envelope
            .data
            .ok_or_else(|| ClientError::Decode("response carried neither data nor errors".into()))?;

        let value = data
            .get(field)
            .filter(|v| !v.is_null())
            .cloned()
            .ok_or_else(|| ClientError::Decode(format!("missing `{field}` in response data")))?;

        serde_json::from_value(value).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

/// Sort a GraphQL-level rejection into the client taxonomy.
///
/// The backend surfaces everything as `errors[].message`, so the only
/// wire signals are the message texts it uses: Django reports a missing
/// row as "<Model> matching query does not exist." and an anonymous
/// write as "You must be logged in ...".
fn classify_rejection(message: String) -> ClientError {
    if message.contains("matching query does not exist") {
        ClientError::NotFound(message)
    } else if message.contains("must be logged in") {
        ClientError::Unauthorized
    } else {
        ClientError::Rejected(message)
    }
}
