//! GigaChat client: a connected channel, bearer metadata and the typed
//! operations on top of them.
//!
//! Implementation is split into submodules under `src/client/`; the public
//! surface is re-exported here.

pub mod builder;
pub mod chat;
pub mod core;

pub use builder::GigaChatClientBuilder;
pub use chat::ChatRequestBuilder;
pub use core::GigaChatClient;
