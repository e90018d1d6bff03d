#[macro_use]
extern crate log;

use std::{error::Error, sync::Arc, time::Instant};

use common::Result;
use datasets::{make_regression, RegressionParams};
use dialoguer::{theme::ColorfulTheme, Select};
use model_selection::{cross_validate, mean_absolute_error, CvResults, KFold};
use nalgebra::DMatrix;
use rse::SimilarityEncoder;
use rse_plot::{plot_scores, ScoreTable};

const N_SAMPLES: usize = 100;
const N_FEATURES: usize = 500;
const N_TARGETS: usize = 500;
const N_SPLITS: usize = 5;
const OUT_DIR: &str = "img";

pub(crate) fn main() -> std::result::Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    let experiments = vec!["Single stimulus", "Stimulus comparison", "Both"];
    let e = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select experiment")
        .items(&experiments)
        .default(0)
        .interact()?;
    match e {
        0 => single_stimulus()?,
        1 => stimulus_comparison()?,
        _ => {
            single_stimulus()?;
            stimulus_comparison()?;
        }
    }

    Ok(())
}

/// Stimulus features and neural activity generated with the same seed
fn single_stimulus() -> Result<()> {
    let data = make_regression(&params(0))?;
    info!(
        "shape of stimulus features: ({}, {}), shape of neural activity: ({}, {})",
        data.x.nrows(),
        data.x.ncols(),
        data.y.nrows(),
        data.y.ncols()
    );

    let results = evaluate(Arc::new(data.x), Arc::new(data.y))?;
    info!("MAE scores: {:?}", results.test_scores);

    Ok(())
}

/// The same neural activity encoded from the matching stimulus features and from two
/// unrelated ones
fn stimulus_comparison() -> std::result::Result<(), Box<dyn Error>> {
    let activity = Arc::new(make_regression(&params(0))?.y);

    let mut table = ScoreTable::new("MAE");
    for (label, seed) in [("S1", 0), ("S2", 1), ("S3", 2)] {
        let stimuli = make_regression(&params(seed))?.x;
        let results = evaluate(Arc::new(stimuli), activity.clone())?;
        info!("{}: MAE scores: {:?}, mean: {}", label, results.test_scores, results.mean_score());
        table.extend(label, &results.test_scores);
    }

    std::fs::create_dir_all(OUT_DIR)?;
    table.write_csv(format!("{}/simulation.csv", OUT_DIR))?;
    plot_scores(&table, "Simulation of RSE", &format!("{}/simulation.png", OUT_DIR), (1080, 810))?;

    Ok(())
}

fn evaluate(stimuli: Arc<DMatrix<f64>>, activity: Arc<DMatrix<f64>>) -> Result<CvResults> {
    let t0 = Instant::now();
    let results = cross_validate::<SimilarityEncoder>(
        stimuli,
        activity,
        &KFold::new(N_SPLITS),
        mean_absolute_error,
    )?;
    info!("cross-validation done in: {}ms", t0.elapsed().as_millis());

    Ok(results)
}

fn params(seed: u64) -> RegressionParams {
    RegressionParams {
        n_samples: N_SAMPLES,
        n_features: N_FEATURES,
        n_targets: N_TARGETS,
        seed: Some(seed),
        ..Default::default()
    }
}
