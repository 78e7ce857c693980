//! # Chat-completion adapter
//!
//! Everything that talks to the hosted language model lives here:
//! - `types`: the request/response wire shapes of the chat-completion API
//! - `client`: the [`ChatClient`] seam and its HTTP implementation, [`OpenAiClient`]
//!
//! ## Architecture
//!
//! ```text
//! Prompt (system + user) → ChatRequest → ChatClient::complete → raw text
//! ```
//!
//! One call is one network round trip. Nothing is retried or cached at this
//! layer; failures surface to the caller unchanged.

pub mod client;
pub mod types;

pub use client::{ChatClient, LlmError, OpenAiClient};
pub use types::*;
