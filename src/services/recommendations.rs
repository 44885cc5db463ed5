use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Problem, Recommendation, RecommendationRequest},
    services::{
        catalog::CATALOG,
        confidence::{ConfidenceSampler, AI_CONFIDENCE, CATALOG_CONFIDENCE},
        prompt::recommendation_prompt,
        providers::{GenerationError, TextGenerator},
    },
};

/// Upper bound on the number of problems returned per request
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Which wording and confidence range a recommendation gets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReasoningPath {
    /// The text generator answered for this request
    AiEnhanced,
    /// Plain catalog filtering
    Catalog,
}

/// Why the text generator could not be used for a request
#[derive(thiserror::Error, Debug)]
pub enum CollaboratorUnavailable {
    #[error("no text generator configured")]
    NotConfigured,

    #[error(transparent)]
    Failed(#[from] GenerationError),
}

/// Outcome of consulting the text generator
#[derive(Debug)]
pub enum Enrichment {
    /// Generated text. Not parsed into recommendations yet; only its presence
    /// selects the AI-enhanced path.
    Enriched(String),
    Unavailable(CollaboratorUnavailable),
}

/// Produces problem recommendations from the catalog
///
/// Optionally consults a [`TextGenerator`]; any failure of the generator
/// degrades to the plain catalog path and is never surfaced to the caller.
pub struct RecommendationEngine {
    catalog: &'static [Problem],
    generator: Option<Arc<dyn TextGenerator>>,
    sampler: Arc<dyn ConfidenceSampler>,
}

impl RecommendationEngine {
    pub fn new(
        generator: Option<Arc<dyn TextGenerator>>,
        sampler: Arc<dyn ConfidenceSampler>,
    ) -> Self {
        Self {
            catalog: CATALOG,
            generator,
            sampler,
        }
    }

    /// Replaces the built-in catalog
    pub fn with_catalog(mut self, catalog: &'static [Problem]) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn is_ai_enabled(&self) -> bool {
        self.generator.is_some()
    }

    /// Filters the catalog and annotates the first matches
    ///
    /// Never fails: unknown topics or difficulties just yield an empty list.
    pub fn recommend(
        &self,
        request: &RecommendationRequest,
        path: ReasoningPath,
    ) -> Vec<Recommendation> {
        let range = match path {
            ReasoningPath::AiEnhanced => AI_CONFIDENCE,
            ReasoningPath::Catalog => CATALOG_CONFIDENCE,
        };

        self.catalog
            .iter()
            .filter(|problem| request.matches(problem))
            .take(MAX_RECOMMENDATIONS)
            .map(|problem| {
                Recommendation::from_problem(
                    problem,
                    reason_for(problem, request, path),
                    self.sampler.sample(range.clone()),
                )
            })
            .collect()
    }

    /// Asks the text generator about this request
    pub async fn enrich(&self, request: &RecommendationRequest) -> Enrichment {
        let Some(generator) = self.generator.as_ref() else {
            return Enrichment::Unavailable(CollaboratorUnavailable::NotConfigured);
        };

        let prompt = recommendation_prompt(request);
        tracing::debug!(provider = generator.name(), "Requesting AI enrichment");

        match generator.generate(&prompt).await {
            Ok(text) => Enrichment::Enriched(text),
            Err(e) => Enrichment::Unavailable(e.into()),
        }
    }

    /// Catalog recommendations, worded as AI-enhanced when the generator answers
    pub async fn recommend_with_ai_enrichment(
        &self,
        request: &RecommendationRequest,
    ) -> Vec<Recommendation> {
        match self.enrich(request).await {
            Enrichment::Enriched(text) => {
                tracing::debug!(
                    username = %request.username,
                    generated_chars = text.len(),
                    "AI enrichment succeeded"
                );
                self.recommend(request, ReasoningPath::AiEnhanced)
            }
            Enrichment::Unavailable(reason) => {
                tracing::warn!(
                    username = %request.username,
                    error = %reason,
                    "AI recommendation failed, falling back to catalog"
                );
                self.recommend(request, ReasoningPath::Catalog)
            }
        }
    }

    /// Entry point used by the HTTP layer
    pub async fn dispatch(
        &self,
        request: &RecommendationRequest,
    ) -> AppResult<Vec<Recommendation>> {
        let recommendations = if self.is_ai_enabled() {
            self.recommend_with_ai_enrichment(request).await
        } else {
            self.recommend(request, ReasoningPath::Catalog)
        };

        if let Some(bad) = recommendations
            .iter()
            .find(|r| !(0.0..1.0).contains(&r.confidence))
        {
            return Err(AppError::Internal(format!(
                "confidence {} for {} is outside [0, 1)",
                bad.confidence, bad.slug
            )));
        }

        Ok(recommendations)
    }
}

fn reason_for(problem: &Problem, request: &RecommendationRequest, path: ReasoningPath) -> String {
    if let Some(topic) = request.topic_filter() {
        return format!("Great for practicing {topic}");
    }

    match path {
        ReasoningPath::AiEnhanced => {
            let focus: Vec<&str> = problem.tags.iter().take(2).copied().collect();
            format!(
                "AI suggests this problem helps strengthen {} skills",
                focus.join(", ")
            )
        }
        ReasoningPath::Catalog => {
            format!("Recommended based on your profile for {}", request.username)
        }
    }
}
