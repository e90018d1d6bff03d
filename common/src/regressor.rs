use nalgebra::DMatrix;

use crate::Result;

/// The Regressor trait.
/// Any estimator that can be handed to a generic evaluation harness implements this.
/// `Default` plays the role of the argument-less constructor, so a harness can
/// create a fresh instance per split.
pub trait Regressor: Default {
    /// Fit the estimator to the given training data
    ///
    /// # Arguments:
    /// x: A Matrix where there are N rows corresponding to the samples and P feature columns
    /// y: A Matrix with the same N rows and Q target columns
    ///
    /// # Returns:
    /// The estimator itself, now fitted. A failed fit leaves the previous state untouched.
    fn fit(&mut self, x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<&mut Self>;

    /// Predict the targets of new samples
    ///
    /// # Arguments:
    /// x: A Matrix with M rows and the same P feature columns as seen in `fit`
    ///
    /// # Returns:
    /// A Matrix with M rows and Q target columns
    fn predict(&self, x: &DMatrix<f64>) -> Result<DMatrix<f64>>;
}
