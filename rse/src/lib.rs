//! Representational Similarity Encoding.
//!
//! Predicts a target matrix (e.g. neural activity) from a feature matrix (e.g. stimulus
//! features) without learning any weights: a new sample's prediction is the combination of
//! all training targets, weighted by how strongly the new sample correlates with each
//! training sample.
//!
//! Anderson, A. J., Zinszer, B. D., & Raizada, R. D. S. (2016).
//! Representational similarity encoding for fMRI: Pattern-based synthesis to predict
//! brain activity using stimulus-model-similarities. NeuroImage, 128, 44–53.

#[macro_use]
extern crate log;

mod correlation;
mod similarity_encoder;

pub use common::{Regressor, Result, RseError};
pub use correlation::corrcoef;
pub use similarity_encoder::SimilarityEncoder;
