//! This crate provides the functionality shared by estimators and the harnesses driving them

#![warn(unused_imports, unused_crate_dependencies, missing_docs)]

mod error;
mod regressor;
mod validation;

pub use error::{Result, RseError};
pub use regressor::Regressor;
pub use validation::{check_array, check_x_y, matrix_from_rows};
