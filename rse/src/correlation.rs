use nalgebra::DMatrix;

/// Pearson correlation coefficients between all rows of a matrix.
/// Each row is treated as one variable, observed across the columns.
///
/// # Parameters
/// observations: K rows of variables having P observations each
///
/// # Returns
/// The symmetric K x K matrix of coefficients, clipped to [-1, 1].
/// Rows with zero variance yield NaN, as 0 / 0 does.
pub fn corrcoef(observations: &DMatrix<f64>) -> DMatrix<f64> {
    let n_vars = observations.nrows();
    let n_obs = observations.ncols();

    let means: Vec<f64> = observations.row_iter().map(|row| row.mean()).collect();
    let centered: DMatrix<f64> =
        DMatrix::from_fn(n_vars, n_obs, |i, j| observations[(i, j)] - means[i]);

    let mut cov = &centered * centered.transpose();
    cov /= n_obs as f64 - 1.0;
    trace!("cov dims: ({}, {})", cov.nrows(), cov.ncols());

    let stddev: Vec<f64> = cov.diagonal().iter().map(|v| v.sqrt()).collect();

    DMatrix::from_fn(n_vars, n_vars, |i, j| {
        // NaN passes through clamp unchanged
        (cov[(i, j)] / stddev[i] / stddev[j]).clamp(-1.0, 1.0)
    })
}

#[cfg(test)]
mod tests {
    use common::matrix_from_rows;
    use round::round;

    use super::*;

    #[test]
    fn corrcoef_of_linear_rows() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let obs = matrix_from_rows(&[
            vec![1.0, 2.0, 3.0, 4.0],
            vec![2.0, 4.0, 6.0, 8.0],
            vec![4.0, 3.0, 2.0, 1.0],
        ])
        .unwrap();
        let c = corrcoef(&obs);
        info!("c: {}", c);

        assert_eq!(c.nrows(), 3);
        assert_eq!(c.ncols(), 3);
        assert_eq!(round(c[(0, 1)], 6), 1.0);
        assert_eq!(round(c[(0, 2)], 6), -1.0);
        assert_eq!(round(c[(1, 2)], 6), -1.0);
        for i in 0..3 {
            assert_eq!(round(c[(i, i)], 6), 1.0);
        }
    }

    #[test]
    fn corrcoef_is_symmetric_and_bounded() {
        let obs = matrix_from_rows(&[
            vec![0.3, -1.2, 4.0, 2.2, 0.0],
            vec![1.0, 0.5, -0.5, 3.0, 2.0],
            vec![-2.0, 0.1, 0.7, 0.2, -1.0],
        ])
        .unwrap();
        let c = corrcoef(&obs);

        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(c[(i, j)], c[(j, i)]);
                assert!(c[(i, j)] >= -1.0 && c[(i, j)] <= 1.0);
            }
        }
    }

    #[test]
    fn corrcoef_known_value() {
        // centered rows: [-1, 0, 1], [1, -1, 0]
        let obs = matrix_from_rows(&[vec![1.0, 2.0, 3.0], vec![3.0, 1.0, 2.0]]).unwrap();
        let c = corrcoef(&obs);

        assert_eq!(c[(0, 1)], -0.5);
    }

    #[test]
    fn corrcoef_constant_row_is_nan() {
        let obs = matrix_from_rows(&[vec![1.0, 2.0, 3.0], vec![5.0, 5.0, 5.0]]).unwrap();
        let c = corrcoef(&obs);

        assert!(c[(0, 1)].is_nan());
        assert!(c[(1, 0)].is_nan());
        assert!(c[(1, 1)].is_nan());
        assert_eq!(round(c[(0, 0)], 6), 1.0);
    }
}
