pub mod catalog;
pub mod confidence;
pub mod prompt;
pub mod providers;
pub mod recommendations;

pub use confidence::{ConfidenceSampler, UniformSampler};
pub use recommendations::{RecommendationEngine, ReasoningPath};
