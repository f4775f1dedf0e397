//! Generative-text backend trait and implementations
//!
//! The dispatcher only ever needs one thing from a backend: turn a prompt
//! into text.

use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;
pub use gemini::GeminiClient;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("GEMINI_API_KEY not configured")]
    MissingApiKey,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse backend response: {0}")]
    Parse(String),

    #[error("Empty response from backend")]
    EmptyResponse,
}

/// Trait for text generation
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError>;
}

/// Echo backend for development & testing
/// Returns the prompt unchanged, which makes rendered prompts observable.
pub struct EchoBackend;

#[async_trait]
impl GenerativeBackend for EchoBackend {
    async fn generate(&self, prompt: &str) -> Result<String, BackendError> {
        Ok(prompt.to_string())
    }
}
