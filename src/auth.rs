//! OAuth token exchange for the GigaChat API.
//!
//! The API issues short-lived bearer tokens against a static Base64 API key.
//! One form-encoded POST, one JSON response; nothing is cached or refreshed
//! here. Expiry is carried through for observability but never enforced: an
//! expired token surfaces as an authorization error on the next call.

use base64::Engine as _;
use serde::Deserialize;
use thiserror::Error;

/// Default token endpoint of the Sberbank authorization gateway.
pub const DEFAULT_AUTH_URL: &str = "https://ngw.devices.sberbank.ru:9443/api/v2/oauth";

/// Default OAuth scope (personal API access).
pub const DEFAULT_SCOPE: &str = "GIGACHAT_API_PERS";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token endpoint request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("token endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid token response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("token response did not contain an access_token")]
    MissingToken,
}

/// Short-lived bearer credential returned by the token endpoint.
#[derive(Debug, Clone)]
pub struct AccessToken {
    token: String,
    expires_at: Option<i64>,
}

impl AccessToken {
    /// Wrap an already-issued token (useful for tests and token injection).
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    /// The opaque token value.
    pub fn secret(&self) -> &str {
        &self.token
    }

    /// Expiry reported by the authorization server, in unix milliseconds.
    /// Informational only.
    pub fn expires_at(&self) -> Option<i64> {
        self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    #[serde(default)]
    expires_at: Option<i64>,
}

/// Exchange the static API key for a bearer token.
///
/// Sends `Authorization: Basic <api_key>` with the request-tracking `RqUID`
/// header and a urlencoded `scope=<scope>` body. Any transport, HTTP status
/// or parse failure propagates to the caller; there is no retry.
pub async fn fetch_token(
    client: &reqwest::Client,
    auth_url: &str,
    api_key: &str,
    rq_uid: &str,
    scope: &str,
) -> Result<AccessToken, AuthError> {
    let response = client
        .post(auth_url)
        .header("RqUID", rq_uid)
        .header(reqwest::header::ACCEPT, "application/json")
        .header(reqwest::header::AUTHORIZATION, format!("Basic {api_key}"))
        .form(&[("scope", scope)])
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(AuthError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let parsed: TokenResponse = serde_json::from_str(&body)?;
    let token = parsed.access_token.ok_or(AuthError::MissingToken)?;
    tracing::debug!(expires_at = ?parsed.expires_at, "access token received");

    Ok(AccessToken {
        token,
        expires_at: parsed.expires_at,
    })
}

/// Encode a `client_id:client_secret` pair into the Basic credential the
/// token endpoint expects. GigaChat consoles usually hand out the encoded
/// form directly; this helper covers the raw pair.
pub fn basic_credential(client_id: &str, client_secret: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(format!("{client_id}:{client_secret}"))
}

/// Generate a fresh request-tracking identifier.
pub fn new_rq_uid() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_credential_encodes_pair() {
        assert_eq!(basic_credential("id", "secret"), "aWQ6c2VjcmV0");
    }

    #[test]
    fn rq_uid_is_uuid_shaped() {
        let id = new_rq_uid();
        assert_eq!(id.len(), 36);
        assert_eq!(id.matches('-').count(), 4);
    }
}
