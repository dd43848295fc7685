use thiserror::Error;

/// Errors reported by the sort entry points and the task pool.
///
/// Range errors are raised before any element is touched.
#[derive(Debug, Error)]
pub enum SortError {
    /// The requested range starts after it ends.
    #[error("invalid range: start ({start}) > end ({end})")]
    InvalidRange { start: usize, end: usize },

    /// The requested range reaches past the end of the sequence.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// A dedicated worker pool could not be spawned.
    #[error("failed to build task pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    /// The global pool was configured after it had already been created.
    #[error("global task pool is already initialized")]
    PoolAlreadyInitialized,
}

impl SortError {
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            SortError::InvalidRange { .. } | SortError::IndexOutOfBounds { .. }
        )
    }
}
