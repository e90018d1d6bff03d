//! Evaluating regressors on held-out data

#[macro_use]
extern crate log;

use common::Result;
use nalgebra::DMatrix;

mod cross_validate;
mod kfold;
mod metrics;

pub use cross_validate::{cross_validate, CvResults};
pub use kfold::{Fold, KFold};
pub use metrics::mean_absolute_error;

/// Scores a prediction against the true targets
///
/// # Arguments:
/// y_true: the held-out targets
/// y_pred: what the regressor predicted for them
pub type Scorer = fn(&DMatrix<f64>, &DMatrix<f64>) -> Result<f64>;
