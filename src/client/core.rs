use tonic::metadata::{Ascii, MetadataValue};
use tonic::transport::Channel;

use crate::auth::{self, AccessToken, AuthError};
use crate::client::builder::GigaChatClientBuilder;
use crate::client::chat::ChatRequestBuilder;
use crate::config::GigaChatConfig;
use crate::proto::chat_service_client::ChatServiceClient;
use crate::proto::models_service_client::ModelsServiceClient;
use crate::proto::{ChatResponse, ListModelsRequest, Message, Model};
use crate::transport::TrustAnchor;
use crate::types::ChatOptions;
use crate::{streaming, Error, ErrorContext, Result};

/// Client for the GigaChat gRPC API.
///
/// Holds the TLS channel and the bearer metadata; every call attaches
/// `authorization: Bearer <token>` and runs on a fresh stub cloned from the
/// shared channel. The token is fetched once and never refreshed here: an
/// expired token surfaces as an authorization error from the remote side.
pub struct GigaChatClient {
    channel: Channel,
    bearer: MetadataValue<Ascii>,
}

impl GigaChatClient {
    pub fn builder() -> GigaChatClientBuilder {
        GigaChatClientBuilder::new()
    }

    /// Token exchange plus channel establishment, wired from configuration.
    pub async fn from_config(config: &GigaChatConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(AuthError::Http)?;
        let token = auth::fetch_token(
            &http,
            &config.auth_url,
            &config.api_key,
            &config.rq_uid,
            &config.scope,
        )
        .await?;
        tracing::info!("access token obtained");

        let trust = TrustAnchor::from_pem_file(&config.cert_path)?;
        Self::builder()
            .api_host(config.api_host.clone())
            .trust_anchor(trust)
            .token(token)
            .timeout(config.request_timeout)
            .connect()
            .await
    }

    /// [`from_config`](Self::from_config) over the process environment.
    pub async fn from_env() -> Result<Self> {
        Self::from_config(&GigaChatConfig::from_env()?).await
    }

    pub(crate) fn new(channel: Channel, token: &AccessToken) -> Result<Self> {
        let bearer = format!("Bearer {}", token.secret())
            .parse::<MetadataValue<Ascii>>()
            .map_err(|_| {
                Error::configuration_with_context(
                    "bearer token contains characters not valid in gRPC metadata",
                    ErrorContext::new().with_source("client_builder"),
                )
            })?;
        Ok(Self { channel, bearer })
    }

    fn authorized<M>(&self, message: M) -> tonic::Request<M> {
        let mut request = tonic::Request::new(message);
        request
            .metadata_mut()
            .insert("authorization", self.bearer.clone());
        request
    }

    /// List the models the service exposes.
    pub async fn list_models(&self) -> Result<Vec<Model>> {
        let mut stub = ModelsServiceClient::new(self.channel.clone());
        let response = stub.list_models(self.authorized(ListModelsRequest {})).await?;
        Ok(response.into_inner().models)
    }

    /// Send a conversation and wait for the full response (unary call).
    ///
    /// The model defaults to [`crate::types::DEFAULT_MODEL`] when unset.
    pub async fn send_message(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
    ) -> Result<ChatResponse> {
        let request = options.to_request(messages, options.unary_stream_flag());
        let mut stub = ChatServiceClient::new(self.channel.clone());
        let response = stub.chat(self.authorized(request)).await?;
        Ok(response.into_inner())
    }

    /// Streaming chat with the default console policy: chunks are printed to
    /// stdout as they arrive, followed by a completion marker. Resolves with
    /// the concatenated text.
    pub async fn send_message_stream(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
    ) -> Result<String> {
        let events = self.open_stream(messages, &options).await?;
        streaming::accumulate(events, None).await
    }

    /// Streaming chat delivering every chunk to `on_chunk`, in arrival
    /// order, with nothing written to the console. Resolves with the
    /// concatenated text.
    pub async fn send_message_stream_with(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
        mut on_chunk: impl FnMut(&str),
    ) -> Result<String> {
        let events = self.open_stream(messages, &options).await?;
        streaming::accumulate(events, Some(&mut on_chunk)).await
    }

    /// Start building a chat request.
    pub fn chat(&self) -> ChatRequestBuilder<'_> {
        ChatRequestBuilder::new(self)
    }

    /// Open the server-streaming call. `stream` is forced on regardless of
    /// the caller's options.
    pub(crate) async fn open_stream(
        &self,
        messages: Vec<Message>,
        options: &ChatOptions,
    ) -> Result<tonic::Streaming<ChatResponse>> {
        let request = options.to_request(messages, true);
        let mut stub = ChatServiceClient::new(self.channel.clone());
        let response = stub.chat_stream(self.authorized(request)).await?;
        Ok(response.into_inner())
    }
}
