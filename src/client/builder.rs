use std::time::Duration;

use crate::auth::AccessToken;
use crate::client::core::GigaChatClient;
use crate::transport::{self, ChannelOptions, TrustAnchor};
use crate::{Error, ErrorContext, Result};

/// Builder for creating clients from explicit parts.
///
/// Keep this surface small and predictable: host, trust anchor and token are
/// required, everything else has defaults. Use
/// [`GigaChatClient::from_config`] when the parts come from the environment.
pub struct GigaChatClientBuilder {
    api_host: Option<String>,
    trust_anchor: Option<TrustAnchor>,
    token: Option<AccessToken>,
    domain_name: Option<String>,
    timeout: Option<Duration>,
}

impl GigaChatClientBuilder {
    pub fn new() -> Self {
        Self {
            api_host: None,
            trust_anchor: None,
            token: None,
            domain_name: None,
            timeout: None,
        }
    }

    /// gRPC host of the API, `host[:port]`.
    pub fn api_host(mut self, host: impl Into<String>) -> Self {
        self.api_host = Some(host.into());
        self
    }

    /// TLS trust root for the API host.
    pub fn trust_anchor(mut self, trust: TrustAnchor) -> Self {
        self.trust_anchor = Some(trust);
        self
    }

    /// Bearer token obtained from [`crate::auth::fetch_token`].
    pub fn token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Inject an already-issued token string.
    pub fn bearer_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(AccessToken::new(token));
        self
    }

    /// Expected TLS server name when it differs from the dialed host.
    pub fn domain_name(mut self, domain: impl Into<String>) -> Self {
        self.domain_name = Some(domain.into());
        self
    }

    /// Connect and per-request deadline.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Establish the channel and build the client.
    pub async fn connect(self) -> Result<GigaChatClient> {
        let missing = |field: &str| {
            Error::configuration_with_context(
                format!("{field} is required to build a client"),
                ErrorContext::new()
                    .with_field_path(field)
                    .with_source("client_builder"),
            )
        };

        let api_host = self.api_host.ok_or_else(|| missing("api_host"))?;
        let trust = self.trust_anchor.ok_or_else(|| missing("trust_anchor"))?;
        let token = self.token.ok_or_else(|| missing("token"))?;

        let options = ChannelOptions {
            domain_name: self.domain_name,
            timeout: self.timeout,
        };
        let channel = transport::connect(&api_host, &trust, &options).await?;
        GigaChatClient::new(channel, &token)
    }
}

impl Default for GigaChatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
