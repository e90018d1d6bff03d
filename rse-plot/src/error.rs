use thiserror::Error;

/// Failures while writing reports to disk
#[derive(Debug, Error)]
pub enum PlotError {
    /// The drawing backend failed
    #[error("drawing failed: {0}")]
    Drawing(String),

    /// Writing the score table failed
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Flushing the output file failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Nothing to draw
    #[error("score table is empty")]
    Empty,
}
