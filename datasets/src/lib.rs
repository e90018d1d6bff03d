//! Synthetic datasets for exercising regressors

#[macro_use]
extern crate log;

mod regression;

pub use regression::{make_regression, RegressionData, RegressionParams};
