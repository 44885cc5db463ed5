mod problem;
mod recommendation;

pub use problem::{Difficulty, Problem, UnknownDifficulty};
pub use recommendation::{Recommendation, RecommendationRequest};
