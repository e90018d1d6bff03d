use common::{check_array, check_x_y, Regressor, Result, RseError};
use nalgebra::DMatrix;

use crate::corrcoef;

/// The samples seen during `fit`, rows aligned index for index
#[derive(Debug, Clone)]
struct TrainingSet {
    x: DMatrix<f64>,
    y: DMatrix<f64>,
}

/// Representational similarity encoding regressor.
/// Holds on to its training data and predicts new samples as a weighted combination
/// of the training targets, where the weights are the Pearson correlations between the
/// new sample and each training sample, scaled so their absolute values sum to 1.
#[derive(Debug, Clone, Default)]
pub struct SimilarityEncoder {
    training_set: Option<TrainingSet>,
}

impl SimilarityEncoder {
    /// Create a new, unfitted encoder
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a training set has been stored
    #[inline(always)]
    pub fn is_fitted(&self) -> bool {
        self.training_set.is_some()
    }

    /// Number of training samples, if fitted
    #[inline(always)]
    pub fn n_samples(&self) -> Option<usize> {
        self.training_set.as_ref().map(|t| t.x.nrows())
    }

    /// Number of features per sample, if fitted
    #[inline(always)]
    pub fn n_features(&self) -> Option<usize> {
        self.training_set.as_ref().map(|t| t.x.ncols())
    }

    /// Number of target columns, if fitted
    #[inline(always)]
    pub fn n_targets(&self) -> Option<usize> {
        self.training_set.as_ref().map(|t| t.y.ncols())
    }

    /// Compute the combination weights, one row per query sample and one column per
    /// training sample. Every row's absolute values sum to 1, unless the row is
    /// degenerate, in which case it holds NaN or inf.
    ///
    /// # Arguments:
    /// x: The query samples, having the same number of columns as the training features
    pub fn similarity_weights(&self, x: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        let training_set = self.training_set.as_ref().ok_or(RseError::NotFitted)?;
        check_array(x, "query")?;
        if x.ncols() != training_set.x.ncols() {
            return Err(RseError::ShapeMismatch {
                context: "number of query features compared to training features",
                expected: training_set.x.ncols(),
                found: x.ncols(),
            });
        }

        let n_train = training_set.x.nrows();
        let n_query = x.nrows();

        let stacked: DMatrix<f64> = DMatrix::from_fn(n_train + n_query, x.ncols(), |i, j| {
            if i < n_train {
                training_set.x[(i, j)]
            } else {
                x[(i - n_train, j)]
            }
        });
        let full = corrcoef(&stacked);
        debug!(
            "correlation dims: ({}, {}), similarity block: ({}, {})",
            full.nrows(),
            full.ncols(),
            n_query,
            n_train
        );

        // query rows against training columns
        let mut weights = full.view((n_train, 0), (n_query, n_train)).into_owned();
        for i in 0..n_query {
            let mut row = weights.row_mut(i);
            let scale = 1.0 / row.iter().map(|c| c.abs()).sum::<f64>();
            row *= scale;
        }

        let n_degenerate = weights.iter().filter(|w| !w.is_finite()).count();
        if n_degenerate > 0 {
            warn!(
                "{} of {} similarity weights are not finite, a query or training sample has zero variance",
                n_degenerate,
                weights.len()
            );
        }

        Ok(weights)
    }
}

impl Regressor for SimilarityEncoder {
    fn fit(&mut self, x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<&mut Self> {
        check_x_y(x, y)?;

        self.training_set = Some(TrainingSet {
            x: x.clone(),
            y: y.clone(),
        });
        info!(
            "fitted on {} samples with {} features and {} targets",
            x.nrows(),
            x.ncols(),
            y.ncols()
        );

        Ok(self)
    }

    fn predict(&self, x: &DMatrix<f64>) -> Result<DMatrix<f64>> {
        let weights = self.similarity_weights(x)?;
        let training_set = self.training_set.as_ref().ok_or(RseError::NotFitted)?;

        Ok(weights * &training_set.y)
    }
}
