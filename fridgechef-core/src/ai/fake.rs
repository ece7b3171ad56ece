//! Fake AI client for testing and keyless local runs.
//!
//! Returns deterministic responses based on prompt matching, so tests run
//! without network access or API costs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::client::AiClient;
use super::types::{ChatRequest, ChatResponse, Usage};
use crate::error::UpstreamError;

/// A fake AI client.
///
/// Responses are matched by checking if any message in the request contains
/// a registered substring (case-insensitive). If no match is found, the
/// default response is returned, or an error if none is set.
#[derive(Debug)]
pub struct FakeClient {
    /// Map of prompt substring -> response
    responses: RwLock<HashMap<String, String>>,
    /// Default response if no match found
    default_response: Option<String>,
}

impl Default for FakeClient {
    fn default() -> Self {
        // An empty suggestion list parses cleanly, so the keyless demo path
        // returns a valid (empty) result instead of an error.
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: Some(r#"{"recipes": []}"#.to_string()),
        }
    }
}

impl FakeClient {
    /// Create a new FakeClient with no registered responses.
    pub fn new() -> Self {
        Self {
            responses: RwLock::new(HashMap::new()),
            default_response: None,
        }
    }

    /// Create a FakeClient that returns a specific response for prompts
    /// containing a substring.
    pub fn with_response(prompt_contains: &str, response: &str) -> Self {
        let mut client = Self::new();
        client.add_response(prompt_contains, response);
        client
    }

    /// Add a response for prompts containing a specific substring.
    pub fn add_response(&mut self, prompt_contains: &str, response: &str) {
        self.responses
            .write()
            .unwrap()
            .insert(prompt_contains.to_string(), response.to_string());
    }

    /// Set the default response when no pattern matches.
    pub fn with_default_response(mut self, response: &str) -> Self {
        self.default_response = Some(response.to_string());
        self
    }
}

#[async_trait]
impl AiClient for FakeClient {
    async fn complete(
        &self,
        _prompt_name: &str,
        request: ChatRequest,
    ) -> Result<ChatResponse, UpstreamError> {
        let prompt_lower = request
            .messages
            .iter()
            .map(|m| m.content.to_lowercase())
            .collect::<Vec<_>>()
            .join("\n");

        let responses = self.responses.read().unwrap();
        for (pattern, response) in responses.iter() {
            if prompt_lower.contains(&pattern.to_lowercase()) {
                return Ok(ChatResponse {
                    content: response.clone(),
                    usage: Usage::default(),
                });
            }
        }

        match &self.default_response {
            Some(response) => Ok(ChatResponse {
                content: response.clone(),
                usage: Usage::default(),
            }),
            None => Err(UpstreamError::Api(format!(
                "FakeClient: no response configured for prompt (first 100 chars): {}",
                &prompt_lower[..prompt_lower.len().min(100)]
            ))),
        }
    }
}
