//! Text-generation provider abstraction
//!
//! The recommendation engine treats the generative model as an untrusted,
//! failable collaborator. Providers only need to turn a prompt into text; any
//! failure is reported through [`GenerationError`] and never reaches the client.
pub mod gemini;

pub use gemini::GeminiClient;

/// Failure reasons of a text-generation call
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    #[error("request timed out")]
    Timeout,

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Trait for generative text providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for the given prompt
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
