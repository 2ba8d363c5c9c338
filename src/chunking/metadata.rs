//! Descriptive strategy metadata for presentation layers.

use crate::chunking::traits::Parameters;
use serde::{Deserialize, Serialize};

/// What a strategy is, what it is good and bad at, and how it is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyMetadata {
    /// Canonical strategy name.
    pub name: String,
    /// Human-readable strategy name.
    pub display_name: String,
    /// One-sentence description.
    pub description: String,
    /// Advantages.
    pub pros: Vec<String>,
    /// Disadvantages.
    pub cons: Vec<String>,
    /// Recommended use cases.
    pub use_cases: Vec<String>,
    /// Active parameter values.
    pub parameters: Parameters,
}
