use common::{Result, RseError};
use nanorand::{Rng, WyRand};

/// One train / test split, as sample indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    /// Indices used for fitting, ascending
    pub train: Vec<usize>,
    /// Held-out indices used for scoring
    pub test: Vec<usize>,
}

/// K-fold splitting of samples.
/// Every sample lands in exactly one test fold. Without shuffling the folds are
/// consecutive blocks, with the first `n_samples % n_splits` folds one sample larger.
#[derive(Debug, Clone)]
pub struct KFold {
    /// Number of folds, at least 2
    pub n_splits: usize,
    /// Shuffle the sample order before cutting it into folds
    pub shuffle: bool,
    /// Optional seed for Rng, only used when shuffling
    pub seed: Option<u64>,
}

impl Default for KFold {
    fn default() -> Self {
        Self {
            n_splits: 5,
            shuffle: false,
            seed: None,
        }
    }
}

impl KFold {
    /// Create a new splitter with `n_splits` consecutive folds
    #[inline(always)]
    pub fn new(n_splits: usize) -> Self {
        Self {
            n_splits,
            ..Default::default()
        }
    }

    /// Compute the folds for `n_samples` samples
    pub fn split(&self, n_samples: usize) -> Result<Vec<Fold>> {
        if self.n_splits < 2 {
            return Err(RseError::InvalidInput(format!(
                "k-fold cross-validation needs at least 2 splits, got {}",
                self.n_splits
            )));
        }
        if self.n_splits > n_samples {
            return Err(RseError::InvalidInput(format!(
                "can not have n_splits = {} greater than the number of samples: {}",
                self.n_splits, n_samples
            )));
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            let mut rng = match self.seed {
                Some(seed) => WyRand::new_seed(seed),
                None => WyRand::new(),
            };
            rng.shuffle(&mut indices[..]);
        }

        let base = n_samples / self.n_splits;
        let n_larger = n_samples % self.n_splits;

        let mut folds = Vec::with_capacity(self.n_splits);
        let mut start = 0;
        for k in 0..self.n_splits {
            let size = if k < n_larger { base + 1 } else { base };
            let test = indices[start..start + size].to_vec();

            let mut train: Vec<usize> =
                indices[..start].iter().chain(indices[start + size..].iter()).copied().collect();
            train.sort_unstable();

            folds.push(Fold { train, test });
            start += size;
        }
        debug!("split {} samples into {} folds", n_samples, folds.len());

        Ok(folds)
    }
}
