use common::{Result, RseError};
use nalgebra::DMatrix;

/// Mean absolute error over all entries, which equals the uniform average of the
/// per target column errors. Non-finite predictions propagate into the score.
pub fn mean_absolute_error(y_true: &DMatrix<f64>, y_pred: &DMatrix<f64>) -> Result<f64> {
    if y_true.nrows() != y_pred.nrows() {
        return Err(RseError::ShapeMismatch {
            context: "number of predicted samples compared to true samples",
            expected: y_true.nrows(),
            found: y_pred.nrows(),
        });
    }
    if y_true.ncols() != y_pred.ncols() {
        return Err(RseError::ShapeMismatch {
            context: "number of predicted targets compared to true targets",
            expected: y_true.ncols(),
            found: y_pred.ncols(),
        });
    }
    if y_true.is_empty() {
        return Err(RseError::InvalidInput("can not score an empty prediction".to_string()));
    }

    let abs_sum: f64 = y_true.iter().zip(y_pred.iter()).map(|(t, p)| (t - p).abs()).sum();

    Ok(abs_sum / y_true.len() as f64)
}
