//! Parallel k-fold cross-validation

use std::{
    cmp::max,
    sync::Arc,
    time::{Duration, Instant},
};

use common::{Regressor, Result, RseError};
use crossbeam::channel::unbounded;
use nalgebra::DMatrix;
use threadpool::ThreadPool;

use crate::{Fold, KFold, Scorer};

/// The outcome of cross-validating a regressor, ordered by fold
#[derive(Debug, Clone, Default)]
pub struct CvResults {
    /// Score of each fold on its held-out samples
    pub test_scores: Vec<f64>,
    /// Time spent fitting in each fold
    pub fit_times: Vec<Duration>,
    /// Time spent predicting and scoring in each fold
    pub score_times: Vec<Duration>,
}

impl CvResults {
    /// The average score over all folds
    pub fn mean_score(&self) -> f64 {
        self.test_scores.iter().sum::<f64>() / self.test_scores.len() as f64
    }
}

#[derive(Debug, Clone)]
struct FoldOutcome {
    score: f64,
    fit_time: Duration,
    score_time: Duration,
}

/// Evaluate a regressor with k-fold cross-validation.
/// Every fold gets a freshly constructed regressor, so folds share no state and run
/// concurrently on a thread pool.
///
/// # Arguments:
/// x: The samples, one per row
/// y: The targets, rows aligned with `x`
/// cv: How to split the samples
/// scorer: Scores the held-out predictions of a fold
///
/// # Returns:
/// The per fold scores or the error of the first fold that failed
pub fn cross_validate<R>(
    x: Arc<DMatrix<f64>>,
    y: Arc<DMatrix<f64>>,
    cv: &KFold,
    scorer: Scorer,
) -> Result<CvResults>
where
    R: Regressor + Send + 'static,
{
    if x.nrows() != y.nrows() {
        return Err(RseError::ShapeMismatch {
            context: "number of samples in y compared to x",
            expected: x.nrows(),
            found: y.nrows(),
        });
    }
    let folds = cv.split(x.nrows())?;
    let n_folds = folds.len();

    let pool = ThreadPool::new(max(num_cpus::get().saturating_sub(2), 1));

    let (ch_fold_s, ch_fold_r) = unbounded();
    for (i, fold) in folds.into_iter().enumerate() {
        let ch_fold_s = ch_fold_s.clone();
        let x = x.clone();
        let y = y.clone();
        pool.execute(move || {
            let outcome = evaluate_fold::<R>(&x, &y, &fold, scorer);
            // the receiver outlives every job
            let _ = ch_fold_s.send((i, outcome));
        });
    }
    drop(ch_fold_s);

    let mut outcomes: Vec<Option<Result<FoldOutcome>>> = (0..n_folds).map(|_| None).collect();
    while let Ok((i, outcome)) = ch_fold_r.recv() {
        outcomes[i] = Some(outcome);
    }

    let mut results = CvResults::default();
    for (i, outcome) in outcomes.into_iter().enumerate() {
        let outcome = outcome.ok_or(RseError::FoldFailed { fold: i })??;
        info!("fold {}: score: {}, fit took {}ms", i, outcome.score, outcome.fit_time.as_millis());

        results.test_scores.push(outcome.score);
        results.fit_times.push(outcome.fit_time);
        results.score_times.push(outcome.score_time);
    }

    Ok(results)
}

fn evaluate_fold<R>(
    x: &DMatrix<f64>,
    y: &DMatrix<f64>,
    fold: &Fold,
    scorer: Scorer,
) -> Result<FoldOutcome>
where
    R: Regressor,
{
    let x_train = x.select_rows(fold.train.iter());
    let y_train = y.select_rows(fold.train.iter());
    let x_test = x.select_rows(fold.test.iter());
    let y_test = y.select_rows(fold.test.iter());

    let t0 = Instant::now();
    let mut regressor = R::default();
    regressor.fit(&x_train, &y_train)?;
    let fit_time = t0.elapsed();

    let t1 = Instant::now();
    let y_pred = regressor.predict(&x_test)?;
    let score = scorer(&y_test, &y_pred)?;
    let score_time = t1.elapsed();

    Ok(FoldOutcome {
        score,
        fit_time,
        score_time,
    })
}
