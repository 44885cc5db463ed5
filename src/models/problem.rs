use serde::Serialize;
use std::{fmt::Display, str::FromStr};

/// Difficulty level of a coding problem
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = UnknownDifficulty;

    /// Exact, case-sensitive match against the catalog spelling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(UnknownDifficulty(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty: {0}")]
pub struct UnknownDifficulty(pub String);

/// A catalog entry that can be recommended
///
/// Catalog problems are defined once at startup and never mutated, so they
/// borrow `'static` data instead of owning strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub title: &'static str,
    /// URL-safe identifier (e.g., "two-sum")
    pub slug: &'static str,
    pub difficulty: Difficulty,
    /// Ordered topic tags, never empty
    pub tags: &'static [&'static str],
}

impl Problem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }
}
