//! Process configuration for the client and the demo binary.
//!
//! All values come from the environment. Required settings fail fast with a
//! configuration error naming the missing key, before any network call is
//! attempted.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::auth::{DEFAULT_AUTH_URL, DEFAULT_SCOPE};
use crate::{Error, ErrorContext, Result};

/// Environment keys read by [`GigaChatConfig::from_env`].
pub const ENV_API_HOST: &str = "API_HOST";
pub const ENV_API_KEY: &str = "GIGA_API_KEY";
pub const ENV_RQ_UID: &str = "RQ_UID";
pub const ENV_CERT_PATH: &str = "CERT_PATH";
pub const ENV_SCOPE: &str = "GIGACHAT_SCOPE";
pub const ENV_AUTH_URL: &str = "GIGACHAT_AUTH_URL";
pub const ENV_TIMEOUT_SECS: &str = "GIGACHAT_TIMEOUT_SECS";

const DEFAULT_CERT_PATH: &str = "cert.pem";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything needed to mint a token and open the channel.
#[derive(Debug, Clone)]
pub struct GigaChatConfig {
    /// gRPC host of the model-serving API, `host[:port]`.
    pub api_host: String,
    /// PEM trust anchor for the API host.
    pub cert_path: PathBuf,
    /// Base64 API key presented to the token endpoint as a Basic credential.
    pub api_key: String,
    /// Request-tracking identifier sent with the token request.
    pub rq_uid: String,
    /// OAuth scope, defaults to personal API access.
    pub scope: String,
    /// Token endpoint URL.
    pub auth_url: String,
    /// Connect and per-request deadline.
    pub request_timeout: Duration,
}

impl GigaChatConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary lookup. `from_env` is a thin
    /// wrapper over this; tests inject a map instead of mutating the process
    /// environment.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| -> Result<String> {
            lookup(key).filter(|v| !v.is_empty()).ok_or_else(|| {
                Error::configuration_with_context(
                    format!("required setting {key} is not set"),
                    ErrorContext::new().with_field_path(key).with_source("config"),
                )
            })
        };

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                Error::configuration_with_context(
                    format!("{ENV_TIMEOUT_SECS} must be an integer number of seconds"),
                    ErrorContext::new()
                        .with_field_path(ENV_TIMEOUT_SECS)
                        .with_details(format!("got {raw:?}"))
                        .with_source("config"),
                )
            })?,
        };

        Ok(Self {
            api_host: required(ENV_API_HOST)?,
            cert_path: PathBuf::from(
                lookup(ENV_CERT_PATH).unwrap_or_else(|| DEFAULT_CERT_PATH.to_string()),
            ),
            api_key: required(ENV_API_KEY)?,
            rq_uid: required(ENV_RQ_UID)?,
            scope: lookup(ENV_SCOPE).unwrap_or_else(|| DEFAULT_SCOPE.to_string()),
            auth_url: lookup(ENV_AUTH_URL).unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
