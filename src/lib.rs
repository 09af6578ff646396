//! # gigachat-client
//!
//! A gRPC client for the GigaChat conversational API: OAuth token exchange,
//! a TLS channel with an explicit trust anchor, and typed chat operations
//! with first-class streaming.
//!
//! ## Overview
//!
//! The crate does three things:
//!
//! - exchanges a static API key for a short-lived bearer token at the
//!   GigaChat OAuth endpoint ([`auth`]),
//! - opens a secure channel to the model-serving host using a
//!   caller-supplied certificate trust anchor ([`transport`]),
//! - invokes list-models, unary chat and server-streaming chat, delivering
//!   streamed text chunks to a handler or stdout and returning the
//!   concatenated text ([`client`], [`streaming`]).
//!
//! There is no retry, caching or token refresh: every failure propagates to
//! the caller, and an expired token surfaces as an authorization error from
//! the remote side.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gigachat_client::{GigaChatClient, Message};
//!
//! #[tokio::main]
//! async fn main() -> gigachat_client::Result<()> {
//!     // Reads API_HOST, GIGA_API_KEY, RQ_UID and CERT_PATH, fetches a
//!     // token and connects.
//!     let client = GigaChatClient::from_env().await?;
//!
//!     let messages = vec![Message::user("Hello! Tell me about yourself.")];
//!
//!     // Streaming response, printed to stdout as it arrives.
//!     let full_text = client
//!         .send_message_stream(messages, Default::default())
//!         .await?;
//!     println!("total {} chars", full_text.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`auth`] | OAuth token exchange against the authorization gateway |
//! | [`transport`] | TLS trust anchor and channel establishment |
//! | [`proto`] | Wire types and client stubs for the `gigachat.v1` services |
//! | [`types`] | Roles, message constructors and per-call options |
//! | [`client`] | The client, its builder and the chat request builder |
//! | [`streaming`] | Chunk extraction and stream accumulation |
//! | [`config`] | Environment-backed configuration surface |

pub mod auth;
pub mod client;
pub mod config;
pub mod proto;
pub mod streaming;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use auth::{fetch_token, AccessToken};
pub use client::{ChatRequestBuilder, GigaChatClient, GigaChatClientBuilder};
pub use config::GigaChatConfig;
pub use proto::{ChatResponse, Message, Model};
pub use transport::TrustAnchor;
pub use types::{ChatOptions, Role, DEFAULT_MODEL};

use futures::Stream;
use std::pin::Pin;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// A pinned, boxed stream of text chunks from a streaming chat call
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
