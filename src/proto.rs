//! Wire types and client stubs for the `gigachat.v1` gRPC services.
//!
//! The message shapes and method paths are owned by the GigaChat interface
//! definition; this module declares them as strongly-typed prost messages and
//! tonic client stubs instead of binding them dynamically at runtime. The
//! stubs follow the shape tonic codegen emits, so swapping in a
//! `tonic-build`-generated module later is a drop-in change.

/// A single conversation message.
///
/// Roles are the wire strings `system`, `user` and `assistant`; see
/// [`crate::types::Role`] for the typed constructors.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Message {
    #[prost(string, tag = "1")]
    pub role: String,
    #[prost(string, tag = "2")]
    pub content: String,
    /// Raw model output before post-processing, when the service returns it.
    #[prost(string, optional, tag = "3")]
    pub unprocessed_content: Option<String>,
}

/// Chat completion request for both the unary and the streaming call.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChatRequest {
    #[prost(string, tag = "1")]
    pub model: String,
    #[prost(message, repeated, tag = "2")]
    pub messages: Vec<Message>,
    #[prost(float, optional, tag = "3")]
    pub temperature: Option<f32>,
    #[prost(float, optional, tag = "4")]
    pub top_p: Option<f32>,
    #[prost(int64, optional, tag = "5")]
    pub max_tokens: Option<i64>,
    #[prost(float, optional, tag = "6")]
    pub repetition_penalty: Option<f32>,
    #[prost(bool, optional, tag = "7")]
    pub stream: Option<bool>,
}

/// One response candidate.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Alternative {
    #[prost(message, optional, tag = "1")]
    pub message: Option<Message>,
    #[prost(string, tag = "2")]
    pub finish_reason: String,
    #[prost(int32, tag = "3")]
    pub index: i32,
}

/// Token accounting reported by the service.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Usage {
    #[prost(int32, tag = "1")]
    pub prompt_tokens: i32,
    #[prost(int32, tag = "2")]
    pub completion_tokens: i32,
    #[prost(int32, tag = "3")]
    pub total_tokens: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ModelInfo {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(string, tag = "2")]
    pub version: String,
}

/// Chat completion response.
///
/// Unary calls receive one terminal `ChatResponse`; the streaming call
/// delivers a sequence of partial responses whose alternatives carry content
/// deltas.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChatResponse {
    #[prost(message, repeated, tag = "1")]
    pub alternatives: Vec<Alternative>,
    #[prost(message, optional, tag = "2")]
    pub usage: Option<Usage>,
    #[prost(message, optional, tag = "3")]
    pub model_info: Option<ModelInfo>,
    #[prost(int64, tag = "4")]
    pub timestamp: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListModelsRequest {}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Model {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub object: String,
    #[prost(string, tag = "3")]
    pub owned_by: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListModelsResponse {
    #[prost(message, repeated, tag = "1")]
    pub models: Vec<Model>,
}

pub mod models_service_client {
    use tonic::codegen::http::uri::PathAndQuery;
    use tonic::codegen::*;

    /// Client stub for `gigachat.v1.ModelsService`.
    #[derive(Debug, Clone)]
    pub struct ModelsServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl<T> ModelsServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            Self {
                inner: tonic::client::Grpc::new(inner),
            }
        }

        pub async fn list_models(
            &mut self,
            request: impl tonic::IntoRequest<super::ListModelsRequest>,
        ) -> Result<tonic::Response<super::ListModelsResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/gigachat.v1.ModelsService/ListModels");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gigachat.v1.ModelsService", "ListModels"));
            self.inner.unary(req, path, codec).await
        }
    }
}

pub mod chat_service_client {
    use tonic::codegen::http::uri::PathAndQuery;
    use tonic::codegen::*;

    /// Client stub for `gigachat.v1.ChatService`.
    #[derive(Debug, Clone)]
    pub struct ChatServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl<T> ChatServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::Error: Into<StdError>,
        T::ResponseBody: Body<Data = Bytes> + Send + 'static,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
    {
        pub fn new(inner: T) -> Self {
            Self {
                inner: tonic::client::Grpc::new(inner),
            }
        }

        /// One request, one terminal response.
        pub async fn chat(
            &mut self,
            request: impl tonic::IntoRequest<super::ChatRequest>,
        ) -> Result<tonic::Response<super::ChatResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/gigachat.v1.ChatService/Chat");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gigachat.v1.ChatService", "Chat"));
            self.inner.unary(req, path, codec).await
        }

        /// One request, a server stream of partial responses.
        pub async fn chat_stream(
            &mut self,
            request: impl tonic::IntoRequest<super::ChatRequest>,
        ) -> Result<tonic::Response<tonic::codec::Streaming<super::ChatResponse>>, tonic::Status>
        {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::unknown(format!("Service was not ready: {}", e.into()))
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = PathAndQuery::from_static("/gigachat.v1.ChatService/ChatStream");
            let mut req = request.into_request();
            req.extensions_mut()
                .insert(GrpcMethod::new("gigachat.v1.ChatService", "ChatStream"));
            self.inner.server_streaming(req, path, codec).await
        }
    }
}
