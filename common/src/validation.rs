use nalgebra::DMatrix;

use crate::{Result, RseError};

/// Ensure a matrix has at least one row and one column and only finite entries
///
/// # Arguments:
/// x: The matrix to check
/// name: How the matrix is referred to in error messages
pub fn check_array(x: &DMatrix<f64>, name: &str) -> Result<()> {
    if x.nrows() == 0 {
        return Err(RseError::InvalidInput(format!(
            "{} has 0 samples, at least 1 is required",
            name
        )));
    }
    if x.ncols() == 0 {
        return Err(RseError::InvalidInput(format!(
            "{} has 0 columns, at least 1 is required",
            name
        )));
    }
    if let Some(pos) = x.iter().position(|v| !v.is_finite()) {
        // storage is column major
        let (row, col) = (pos % x.nrows(), pos / x.nrows());
        return Err(RseError::InvalidInput(format!(
            "{} contains a non-finite value at ({}, {})",
            name, row, col
        )));
    }

    Ok(())
}

/// Validate a pair of training matrices, whose rows have to correspond sample by sample
pub fn check_x_y(x: &DMatrix<f64>, y: &DMatrix<f64>) -> Result<()> {
    if x.nrows() != y.nrows() {
        return Err(RseError::ShapeMismatch {
            context: "number of samples in y compared to x",
            expected: x.nrows(),
            found: y.nrows(),
        });
    }
    check_array(x, "x")?;
    check_array(y, "y")
}

/// Build a matrix out of row vectors, rejecting ragged input
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> Result<DMatrix<f64>> {
    let ncols = rows.first().map(|r| r.len()).unwrap_or(0);
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
        return Err(RseError::InvalidInput(format!(
            "row {} has {} values while row 0 has {}, input is not a 2D array",
            i,
            row.len(),
            ncols
        )));
    }

    Ok(DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i][j]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_from_rows_keeps_row_order() {
        let m = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(2, 0)], 5.0);
    }

    #[test]
    fn matrix_from_rows_rejects_ragged() {
        let res = matrix_from_rows(&[vec![1.0, 2.0], vec![3.0]]);
        assert!(matches!(res, Err(RseError::InvalidInput(_))));
    }

    #[test]
    fn check_array_rejects_empty_axes() {
        let no_rows: DMatrix<f64> = DMatrix::zeros(0, 3);
        let no_cols: DMatrix<f64> = DMatrix::zeros(3, 0);
        assert!(matches!(check_array(&no_rows, "x"), Err(RseError::InvalidInput(_))));
        assert!(matches!(check_array(&no_cols, "x"), Err(RseError::InvalidInput(_))));
    }

    #[test]
    fn check_array_reports_non_finite_position() {
        let mut x: DMatrix<f64> = DMatrix::from_element(3, 2, 1.0);
        x[(2, 1)] = f64::NAN;
        match check_array(&x, "x") {
            Err(RseError::InvalidInput(msg)) => assert!(msg.contains("(2, 1)"), "{}", msg),
            other => panic!("unexpected result: {:?}", other),
        }

        x[(2, 1)] = f64::INFINITY;
        assert!(check_array(&x, "x").is_err());
    }

    #[test]
    fn check_x_y_requires_equal_rows() {
        let x: DMatrix<f64> = DMatrix::from_element(10, 2, 1.0);
        let y: DMatrix<f64> = DMatrix::from_element(9, 1, 1.0);
        assert_eq!(
            check_x_y(&x, &y),
            Err(RseError::ShapeMismatch {
                context: "number of samples in y compared to x",
                expected: 10,
                found: 9,
            })
        );
    }
}
