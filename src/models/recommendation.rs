use serde::{Deserialize, Serialize};

use super::{Difficulty, Problem};

/// Body of `POST /recommendations`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RecommendationRequest {
    pub username: String,
    #[serde(default)]
    pub topic: Option<String>,
    /// Kept as raw text so that an unknown level simply matches nothing
    #[serde(default)]
    pub difficulty: Option<String>,
}

impl RecommendationRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            topic: None,
            difficulty: None,
        }
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = Some(difficulty.into());
        self
    }

    /// Topic filter, with an empty string treated as absent
    pub fn topic_filter(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.is_empty())
    }

    /// Difficulty filter, with an empty string treated as absent
    pub fn difficulty_filter(&self) -> Option<&str> {
        self.difficulty.as_deref().filter(|d| !d.is_empty())
    }

    /// Whether a catalog problem satisfies both filters
    pub fn matches(&self, problem: &Problem) -> bool {
        let difficulty_ok = match self.difficulty_filter() {
            None => true,
            Some(d) => d.parse::<Difficulty>().ok() == Some(problem.difficulty),
        };
        let topic_ok = match self.topic_filter() {
            None => true,
            Some(topic) => problem.has_tag(topic),
        };
        difficulty_ok && topic_ok
    }
}

/// A recommended problem returned to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub slug: String,
    pub difficulty: Difficulty,
    pub tags: Vec<String>,
    pub reason: String,
    /// Always in `[0, 1)`
    pub confidence: f64,
}

impl Recommendation {
    pub fn from_problem(problem: &Problem, reason: String, confidence: f64) -> Self {
        Self {
            title: problem.title.to_string(),
            slug: problem.slug.to_string(),
            difficulty: problem.difficulty,
            tags: problem.tags.iter().map(|t| t.to_string()).collect(),
            reason,
            confidence,
        }
    }
}
