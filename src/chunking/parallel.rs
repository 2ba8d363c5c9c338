//! Parallel batch chunking.
//!
//! Strategies hold no mutable state, so one instance can chunk many
//! documents at once. [`ParallelChunker`] fans a batch out over rayon's
//! thread pool and returns results in input order.

use crate::chunking::traits::Chunker;
use crate::core::Chunk;
use rayon::prelude::*;
use tracing::debug;

/// Default minimum batch size before work is spread across threads.
pub const DEFAULT_MIN_PARALLEL_DOCUMENTS: usize = 2;

/// Chunks batches of documents in parallel with a shared strategy.
///
/// # Examples
///
/// ```
/// use chunkwise::chunking::{Chunker, FixedSizeChunker, ParallelChunker};
///
/// let chunker = ParallelChunker::new(FixedSizeChunker::with_size(10).unwrap());
/// let docs = ["first document text", "second one", ""];
/// let results = chunker.chunk_documents(&docs);
/// assert_eq!(results.len(), 3);
/// assert_eq!(results[0].len(), 2);
/// assert!(results[2].is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct ParallelChunker<C: Chunker> {
    /// The strategy applied to every document.
    inner: C,
    /// Batches smaller than this are processed on the calling thread.
    min_parallel_documents: usize,
}

impl<C: Chunker> ParallelChunker<C> {
    /// Wraps a strategy for batch use.
    #[must_use]
    pub const fn new(inner: C) -> Self {
        Self {
            inner,
            min_parallel_documents: DEFAULT_MIN_PARALLEL_DOCUMENTS,
        }
    }

    /// Sets the minimum batch size for parallel processing.
    #[must_use]
    pub fn min_parallel_documents(mut self, n: usize) -> Self {
        self.min_parallel_documents = n.max(1);
        self
    }

    /// The wrapped strategy.
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Chunks every document, returning one chunk list per document in input order.
    pub fn chunk_documents<S: AsRef<str> + Sync>(&self, documents: &[S]) -> Vec<Vec<Chunk>> {
        if documents.len() < self.min_parallel_documents {
            return documents
                .iter()
                .map(|doc| self.inner.chunk_text(doc.as_ref()))
                .collect();
        }

        debug!(
            strategy = self.inner.name(),
            documents = documents.len(),
            "chunking batch in parallel"
        );
        documents
            .par_iter()
            .map(|doc| self.inner.chunk_text(doc.as_ref()))
            .collect()
    }
}
