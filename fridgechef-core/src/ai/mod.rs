//! Provider-agnostic chat client for the generative capability.
//!
//! The pipeline depends only on the `AiClient` trait. `OpenRouterClient` is
//! the production implementation; `FakeClient` serves tests and keyless
//! local runs.

mod client;
mod config;
mod fake;
mod types;

pub use client::{AiClient, OpenRouterClient};
pub use config::{AiConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use fake::FakeClient;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Role, Usage};
