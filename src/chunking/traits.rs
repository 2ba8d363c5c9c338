//! Chunker trait definition.
//!
//! Defines the interface shared by all chunking strategies, enabling
//! pluggable text segmentation approaches.

use crate::chunking::metadata::StrategyMetadata;
use crate::core::Chunk;
use std::collections::BTreeMap;

/// Active parameter set of a strategy, keyed by parameter name.
pub type Parameters = BTreeMap<String, usize>;

/// Trait for chunking text into segments.
///
/// Implementations hold only their construction-time parameters, so one
/// instance can chunk any number of documents, from any number of threads.
/// Output must be deterministic for the same input (chunk ids aside) and
/// returned in document order.
///
/// # Examples
///
/// ```
/// use chunkwise::chunking::{Chunker, FixedSizeChunker};
///
/// let chunker = FixedSizeChunker::with_size_and_overlap(100, 10).unwrap();
/// let text = "Hello, world! ".repeat(20);
/// let chunks = chunker.chunk_text(&text);
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[1].overlap_prev(), 10);
/// ```
pub trait Chunker: Send + Sync {
    /// Splits `text` into chunks.
    ///
    /// Never fails: configuration problems are rejected when the strategy
    /// is constructed.
    fn chunk_text(&self, text: &str) -> Vec<Chunk>;

    /// Canonical strategy name, as accepted by the registry.
    fn name(&self) -> &'static str;

    /// Human-readable strategy name.
    fn display_name(&self) -> &'static str {
        self.name()
    }

    /// Returns a description of the chunking strategy.
    fn description(&self) -> &'static str {
        "No description available"
    }

    /// Advantages of the strategy.
    fn pros(&self) -> &'static [&'static str] {
        &[]
    }

    /// Disadvantages of the strategy.
    fn cons(&self) -> &'static [&'static str] {
        &[]
    }

    /// Recommended use cases.
    fn use_cases(&self) -> &'static [&'static str] {
        &[]
    }

    /// The parameters this instance was constructed with.
    fn parameters(&self) -> Parameters;

    /// Collects the descriptive metadata for presentation layers.
    fn describe(&self) -> StrategyMetadata {
        StrategyMetadata {
            name: self.name().to_string(),
            display_name: self.display_name().to_string(),
            description: self.description().to_string(),
            pros: to_strings(self.pros()),
            cons: to_strings(self.cons()),
            use_cases: to_strings(self.use_cases()),
            parameters: self.parameters(),
        }
    }
}

impl<C: Chunker + ?Sized> Chunker for Box<C> {
    fn chunk_text(&self, text: &str) -> Vec<Chunk> {
        (**self).chunk_text(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn display_name(&self) -> &'static str {
        (**self).display_name()
    }

    fn description(&self) -> &'static str {
        (**self).description()
    }

    fn pros(&self) -> &'static [&'static str] {
        (**self).pros()
    }

    fn cons(&self) -> &'static [&'static str] {
        (**self).cons()
    }

    fn use_cases(&self) -> &'static [&'static str] {
        (**self).use_cases()
    }

    fn parameters(&self) -> Parameters {
        (**self).parameters()
    }

    fn describe(&self) -> StrategyMetadata {
        (**self).describe()
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal chunker that uses all default trait implementations
    struct MinimalChunker;

    impl Chunker for MinimalChunker {
        fn chunk_text(&self, _text: &str) -> Vec<Chunk> {
            vec![]
        }

        fn name(&self) -> &'static str {
            "minimal"
        }

        fn parameters(&self) -> Parameters {
            Parameters::new()
        }
    }

    #[test]
    fn test_chunker_default_description() {
        let chunker = MinimalChunker;
        assert_eq!(chunker.description(), "No description available");
        assert_eq!(chunker.display_name(), "minimal");
    }

    #[test]
    fn test_chunker_default_describe() {
        let meta = MinimalChunker.describe();
        assert_eq!(meta.name, "minimal");
        assert!(meta.pros.is_empty());
        assert!(meta.cons.is_empty());
        assert!(meta.use_cases.is_empty());
        assert!(meta.parameters.is_empty());
    }

    #[test]
    fn test_boxed_chunker_forwards() {
        let boxed: Box<dyn Chunker> = Box::new(MinimalChunker);
        assert_eq!(boxed.name(), "minimal");
        assert!(boxed.chunk_text("anything").is_empty());
        assert_eq!(boxed.describe().name, "minimal");
    }
}
