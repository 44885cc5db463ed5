use rand::Rng;
use std::ops::Range;

/// Confidence range for recommendations backed by a successful model call
pub const AI_CONFIDENCE: Range<f64> = 0.8..0.95;

/// Confidence range for plain catalog recommendations
pub const CATALOG_CONFIDENCE: Range<f64> = 0.7..0.85;

/// Source of confidence scores
///
/// Injected into the engine so that tests can pin exact values.
pub trait ConfidenceSampler: Send + Sync {
    /// Draws a value from the half-open `range`
    fn sample(&self, range: Range<f64>) -> f64;
}

/// Uniform sampling from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformSampler;

impl ConfidenceSampler for UniformSampler {
    fn sample(&self, range: Range<f64>) -> f64 {
        rand::thread_rng().gen_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_sampler_stays_in_range() {
        let sampler = UniformSampler;
        for _ in 0..1000 {
            let value = sampler.sample(AI_CONFIDENCE);
            assert!(AI_CONFIDENCE.contains(&value), "{value} out of range");

            let value = sampler.sample(CATALOG_CONFIDENCE);
            assert!(CATALOG_CONFIDENCE.contains(&value), "{value} out of range");
        }
    }
}
