//! Types for the authorization-code flow

use serde::{Deserialize, Serialize};

/// Static inputs of the authorization request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizeRequest {
    /// Authorization endpoint, e.g. `https://unsplash.com/oauth/authorize`.
    pub endpoint: String,
    pub client_id: String,
    pub redirect_uri: String,
    /// Space separated scopes.
    pub scope: String,
}

impl AuthorizeRequest {
    pub fn new(
        endpoint: impl Into<String>,
        client_id: impl Into<String>,
        redirect_uri: impl Into<String>,
        scope: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            client_id: client_id.into(),
            redirect_uri: redirect_uri.into(),
            scope: scope.into(),
        }
    }
}

/// What a redirect URL tells us about the authorization attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum RedirectOutcome {
    /// The user granted access; carries the authorization code.
    Code(String),
    /// The server reported an error, e.g. `access_denied`.
    Denied(String),
    /// Not the callback, or the callback without a result. Keep waiting.
    None,
}

impl RedirectOutcome {
    /// Whether the flow is finished (either way).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::None)
    }
}
