use std::f64::consts::PI;

use common::{Result, RseError};
use nalgebra::DMatrix;
use nanorand::{Rng, WyRand};

/// The parameters of a random linear regression problem
#[derive(Debug, Clone)]
pub struct RegressionParams {
    /// Number of samples (rows)
    pub n_samples: usize,
    /// Number of input features (columns of `x`)
    pub n_features: usize,
    /// Number of features that actually contribute to the targets
    pub n_informative: usize,
    /// Number of target columns
    pub n_targets: usize,
    /// Constant offset added to every target
    pub bias: f64,
    /// Standard deviation of the gaussian noise added to the targets
    pub noise: f64,
    /// Permute samples and features after generation
    pub shuffle: bool,
    /// Optional seed for Rng
    pub seed: Option<u64>,
}

impl Default for RegressionParams {
    fn default() -> Self {
        Self {
            n_samples: 100,
            n_features: 100,
            n_informative: 10,
            n_targets: 1,
            bias: 0.0,
            noise: 0.0,
            shuffle: true,
            seed: None,
        }
    }
}

/// A generated regression problem
#[derive(Debug, Clone)]
pub struct RegressionData {
    /// Input samples, n_samples x n_features
    pub x: DMatrix<f64>,
    /// Targets, n_samples x n_targets
    pub y: DMatrix<f64>,
    /// The ground truth coefficients, n_features x n_targets
    pub coef: DMatrix<f64>,
}

/// Generate a random regression problem.
/// The inputs are standard normal, the targets a sparse random linear map of them.
/// Only the first `n_informative` features carry weight, before shuffling.
pub fn make_regression(params: &RegressionParams) -> Result<RegressionData> {
    if params.n_samples == 0 || params.n_features == 0 || params.n_targets == 0 {
        return Err(RseError::InvalidInput(format!(
            "n_samples, n_features and n_targets have to be positive, got ({}, {}, {})",
            params.n_samples, params.n_features, params.n_targets
        )));
    }
    if !(params.noise >= 0.0) || !params.bias.is_finite() {
        return Err(RseError::InvalidInput(format!(
            "noise has to be non-negative and bias finite, got noise: {}, bias: {}",
            params.noise, params.bias
        )));
    }

    let mut rng = match params.seed {
        Some(seed) => WyRand::new_seed(seed),
        None => WyRand::new(),
    };
    let n_informative = params.n_informative.min(params.n_features);

    let mut x: DMatrix<f64> = DMatrix::from_fn(params.n_samples, params.n_features, |_, _| {
        standard_normal(&mut rng)
    });
    let mut coef: DMatrix<f64> = DMatrix::from_fn(params.n_features, params.n_targets, |i, _| {
        if i < n_informative {
            100.0 * rng.generate::<f64>()
        } else {
            0.0
        }
    });

    let mut y = &x * &coef;
    y.add_scalar_mut(params.bias);
    if params.noise > 0.0 {
        y.iter_mut()
            .for_each(|v| *v += params.noise * standard_normal(&mut rng));
    }

    if params.shuffle {
        let mut sample_perm: Vec<usize> = (0..params.n_samples).collect();
        rng.shuffle(&mut sample_perm[..]);
        x = x.select_rows(sample_perm.iter());
        y = y.select_rows(sample_perm.iter());

        let mut feature_perm: Vec<usize> = (0..params.n_features).collect();
        rng.shuffle(&mut feature_perm[..]);
        x = x.select_columns(feature_perm.iter());
        coef = coef.select_rows(feature_perm.iter());
    }

    info!(
        "generated regression problem: x: ({}, {}), y: ({}, {}), {} informative features",
        x.nrows(),
        x.ncols(),
        y.nrows(),
        y.ncols(),
        n_informative
    );

    Ok(RegressionData { x, y, coef })
}

/// Box-Muller transform of two uniform draws
fn standard_normal(rng: &mut WyRand) -> f64 {
    // in (0, 1] so the log stays finite
    let u1 = 1.0 - rng.generate::<f64>();
    let u2 = rng.generate::<f64>();

    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

#[cfg(test)]
mod tests {
    use round::round;

    use super::*;

    #[test]
    fn shapes() {
        if let Err(_) = pretty_env_logger::try_init() {}

        let params = RegressionParams {
            n_samples: 30,
            n_features: 12,
            n_targets: 4,
            seed: Some(0),
            ..Default::default()
        };
        let data = make_regression(&params).unwrap();

        assert_eq!((data.x.nrows(), data.x.ncols()), (30, 12));
        assert_eq!((data.y.nrows(), data.y.ncols()), (30, 4));
        assert_eq!((data.coef.nrows(), data.coef.ncols()), (12, 4));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let params = RegressionParams {
            n_samples: 20,
            n_features: 8,
            n_targets: 3,
            noise: 0.5,
            seed: Some(42),
            ..Default::default()
        };
        let a = make_regression(&params).unwrap();
        let b = make_regression(&params).unwrap();
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
        assert_eq!(a.coef, b.coef);

        let c = make_regression(&RegressionParams {
            seed: Some(43),
            ..params
        })
        .unwrap();
        assert_ne!(a.x, c.x);
    }

    #[test]
    fn targets_are_linear_in_inputs_without_noise() {
        let params = RegressionParams {
            n_samples: 25,
            n_features: 6,
            n_informative: 3,
            n_targets: 2,
            bias: 5.0,
            seed: Some(1),
            ..Default::default()
        };
        let data = make_regression(&params).unwrap();

        let expected = &data.x * &data.coef;
        for i in 0..data.y.nrows() {
            for j in 0..data.y.ncols() {
                assert_eq!(round(data.y[(i, j)] - expected[(i, j)], 9), 5.0);
            }
        }
    }

    #[test]
    fn only_informative_features_carry_weight() {
        let params = RegressionParams {
            n_samples: 10,
            n_features: 20,
            n_informative: 4,
            n_targets: 3,
            seed: Some(2),
            ..Default::default()
        };
        let data = make_regression(&params).unwrap();

        let nonzero_rows = data.coef.row_iter().filter(|r| r.iter().any(|v| *v != 0.0)).count();
        assert!(nonzero_rows <= 4);
        assert!(data.coef.iter().all(|v| *v >= 0.0 && *v < 100.0));
    }

    #[test]
    fn informative_count_is_capped_by_features() {
        let params = RegressionParams {
            n_samples: 5,
            n_features: 3,
            n_informative: 10,
            shuffle: false,
            seed: Some(3),
            ..Default::default()
        };
        let data = make_regression(&params).unwrap();
        assert_eq!(data.coef.nrows(), 3);
    }

    #[test]
    fn unshuffled_informative_features_come_first() {
        let params = RegressionParams {
            n_samples: 5,
            n_features: 6,
            n_informative: 2,
            n_targets: 2,
            shuffle: false,
            seed: Some(4),
            ..Default::default()
        };
        let data = make_regression(&params).unwrap();
        for i in 2..6 {
            assert!(data.coef.row(i).iter().all(|v| *v == 0.0));
        }
    }

    #[test]
    fn rejects_empty_problems_and_negative_noise() {
        let params = RegressionParams {
            n_samples: 0,
            ..Default::default()
        };
        assert!(matches!(make_regression(&params), Err(RseError::InvalidInput(_))));

        let params = RegressionParams {
            noise: -1.0,
            ..Default::default()
        };
        assert!(matches!(make_regression(&params), Err(RseError::InvalidInput(_))));
    }

    #[test]
    fn standard_normal_moments() {
        let mut rng = WyRand::new_seed(0);
        let n = 20_000;
        let draws: Vec<f64> = (0..n).map(|_| standard_normal(&mut rng)).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let var = draws.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.05, "mean: {}", mean);
        assert!((var - 1.0).abs() < 0.05, "var: {}", var);
    }
}
