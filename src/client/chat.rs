use crate::client::core::GigaChatClient;
use crate::proto::{ChatResponse, Message};
use crate::types::ChatOptions;
use crate::{streaming, ChunkStream, Result};

/// Builder for chat requests.
///
/// Terminal methods decide the call shape: [`execute`](Self::execute) runs
/// the unary call, [`execute_stream`](Self::execute_stream) opens the
/// server-streaming call and hands back the chunk stream.
pub struct ChatRequestBuilder<'a> {
    client: &'a GigaChatClient,
    messages: Vec<Message>,
    options: ChatOptions,
}

impl<'a> ChatRequestBuilder<'a> {
    pub(crate) fn new(client: &'a GigaChatClient) -> Self {
        Self {
            client,
            messages: Vec::new(),
            options: ChatOptions::default(),
        }
    }

    /// Replace the conversation. Ordering is preserved as given.
    pub fn messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    /// Append one message.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Select the model. Defaults to [`crate::types::DEFAULT_MODEL`].
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.options.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.options.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.options.top_p = Some(top_p);
        self
    }

    pub fn max_tokens(mut self, max_tokens: i64) -> Self {
        self.options.max_tokens = Some(max_tokens);
        self
    }

    pub fn repetition_penalty(mut self, penalty: f32) -> Self {
        self.options.repetition_penalty = Some(penalty);
        self
    }

    /// Set the stream flag sent on the unary path. The streaming path
    /// ignores this and always requests a stream.
    pub fn stream(mut self, stream: bool) -> Self {
        self.options.stream = Some(stream);
        self
    }

    /// Execute as a unary call and return the full response.
    pub async fn execute(self) -> Result<ChatResponse> {
        self.client.send_message(self.messages, self.options).await
    }

    /// Execute as a server-streaming call and return the chunk stream.
    /// Dropping the stream cancels the call.
    pub async fn execute_stream(self) -> Result<ChunkStream> {
        let events = self.client.open_stream(self.messages, &self.options).await?;
        Ok(Box::pin(streaming::chunks(events)))
    }
}
