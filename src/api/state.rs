use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        providers::{GeminiClient, GenerationError, TextGenerator},
        RecommendationEngine, UniformSampler,
    },
};

/// Shared application state
///
/// Read-only after startup, so requests never contend on it.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<RecommendationEngine>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RecommendationEngine::new(None, Arc::new(UniformSampler)))
    }
}

impl AppState {
    pub fn new(engine: RecommendationEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Builds the state, wiring in Gemini only when an API key is configured
    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        let generator: Option<Arc<dyn TextGenerator>> = match config.api_key() {
            Some(api_key) => {
                let client = GeminiClient::new(
                    api_key.to_string(),
                    config.gemini_api_url.clone(),
                    config.gemini_model.clone(),
                    config.gemini_timeout(),
                )?;
                tracing::info!(model = %config.gemini_model, "Gemini enrichment enabled");
                Some(Arc::new(client))
            }
            None => {
                tracing::warn!("GEMINI_API_KEY not found, using catalog recommendations");
                None
            }
        };

        Ok(Self::new(RecommendationEngine::new(
            generator,
            Arc::new(UniformSampler),
        )))
    }
}
