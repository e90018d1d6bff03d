use thiserror::Error;

/// Everything that can go wrong when fitting or querying an estimator.
/// Shared by every crate of the workspace, so harness failures such as `FoldFailed`
/// travel through the same `Result` as the estimator's own errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RseError {
    /// Two matrices disagree along an axis that has to line up
    #[error("shape mismatch in {context}: expected {expected}, found {found}")]
    ShapeMismatch {
        /// Which check failed
        context: &'static str,
        /// The dimension that was required
        expected: usize,
        /// The dimension that was supplied
        found: usize,
    },

    /// `predict` was called before a successful `fit`
    #[error("estimator is not fitted yet, call `fit` before `predict`")]
    NotFitted,

    /// The input can not be used as a numeric 2D matrix
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A cross-validation fold ended without reporting a result
    #[error("fold {fold} did not report a result, its worker panicked")]
    FoldFailed {
        /// Index of the fold
        fold: usize,
    },
}

/// Result type used throughout the workspace
pub type Result<T> = std::result::Result<T, RseError>;
