//! Groq Provider Implementation
//!
//! Issues simplification requests against Groq's OpenAI-compatible chat
//! completions API.
//!
//! # Features
//!
//! - Async HTTP communication, one outbound request per call
//! - Bearer-token authentication with a caller-supplied credential
//! - Outcome classification for the dispatch engine (429 rate limit,
//!   401 invalid credential, other non-2xx provider errors)
//! - Degraded success when a 2xx response carries no usable content
//!
//! No retries happen at this layer; the dispatch engine owns all retry
//! and backoff policy.

use crate::prompt::build_prompt;
use async_trait::async_trait;
use limpid_domain::{ChunkRewriter, RewriteError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Default chat completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model used for simplification
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Default timeout for rewrite requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_MAX_TOKENS: u32 = 4000;

/// Chat-completions provider for remote text simplification
///
/// Each [`rewrite`](ChunkRewriter::rewrite) call issues one authenticated
/// POST and classifies the outcome. A well-formed response with no usable
/// content is handed back as the original input text rather than an error.
pub struct GroqProvider {
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

/// Request body for the chat completions API
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

/// Response from the chat completions API
#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatResponseMessage>,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl GroqProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: chat completions URL
    /// - `model`: model to request (e.g., "llama3-8b-8192")
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            client,
        }
    }

    /// Create a provider against the default Groq endpoint and model
    pub fn default_api() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the completion token budget
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

#[async_trait]
impl ChunkRewriter for GroqProvider {
    async fn rewrite(&self, text: &str, credential: &str) -> Result<String, RewriteError> {
        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(text),
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| RewriteError::Transport(format!("request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RewriteError::RateLimited);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(RewriteError::AuthInvalid);
        }
        if !status.is_success() {
            return Err(RewriteError::Provider(status.as_u16()));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| RewriteError::Transport(format!("failed to read response body: {}", e)))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .filter(|content| !content.is_empty());

        match content {
            Some(content) => Ok(content),
            None => {
                warn!("response contained no usable content, keeping original text");
                Ok(text.to_string())
            }
        }
    }
}
