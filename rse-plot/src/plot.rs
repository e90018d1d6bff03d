use plotters::prelude::*;

use crate::{PlotError, ScoreTable};

fn drawing<E: std::fmt::Display>(err: E) -> PlotError {
    PlotError::Drawing(err.to_string())
}

/// Render a bar per label at its mean score, with an error bar spanning the fold scores
/// and every fold score as a dot.
/// Non-finite scores are left out of the chart.
pub fn plot_scores(
    table: &ScoreTable,
    title: &str,
    filename: &str,
    dims: (u32, u32),
) -> Result<(), PlotError> {
    let labels = table.labels();
    if labels.is_empty() {
        return Err(PlotError::Empty);
    }
    let n_labels = labels.len() as u32;

    let finite_max = table
        .rows()
        .iter()
        .map(|(_, s)| *s)
        .filter(|s| s.is_finite())
        .fold(0.0_f64, f64::max);
    let y_max = if finite_max > 0.0 { finite_max * 1.1 } else { 1.0 };
    info!("n_labels: {}, n_scores: {}, y_max: {}", n_labels, table.len(), y_max);

    let root_area = BitMapBackend::new(filename, dims).into_drawing_area();
    root_area.fill(&WHITE).map_err(drawing)?;

    let mut cc = ChartBuilder::on(&root_area)
        .margin(5)
        .set_all_label_area_size(50)
        .caption(title, ("sans-serif", 30).into_font().with_color(&BLACK))
        .build_cartesian_2d((0u32..n_labels).into_segmented(), 0.0..y_max)
        .map_err(drawing)?;
    cc.configure_mesh()
        .disable_x_mesh()
        .x_desc("Model")
        .y_desc(table.metric())
        .x_labels(labels.len())
        .x_label_formatter(&|v| match v {
            SegmentValue::Exact(i) | SegmentValue::CenterOf(i) => {
                labels.get(*i as usize).map(|l| l.to_string()).unwrap_or_default()
            }
            SegmentValue::Last => String::new(),
        })
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()
        .map_err(drawing)?;

    let means: Vec<(u32, f64)> = labels
        .iter()
        .enumerate()
        .filter_map(|(i, l)| table.mean_for(l).filter(|m| m.is_finite()).map(|m| (i as u32, m)))
        .collect();
    cc.draw_series(
        Histogram::vertical(&cc)
            .style(BLUE.mix(0.5).filled())
            .margin(20)
            .data(means.iter().copied()),
    )
    .map_err(drawing)?;

    cc.draw_series(labels.iter().enumerate().filter_map(|(i, l)| {
        let scores: Vec<f64> = table.scores_for(l).into_iter().filter(|s| s.is_finite()).collect();
        if scores.is_empty() {
            return None;
        }
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg = scores.iter().sum::<f64>() / scores.len() as f64;
        Some(ErrorBar::new_vertical(SegmentValue::CenterOf(i as u32), min, avg, max, BLACK.filled(), 10))
    }))
    .map_err(drawing)?;

    cc.draw_series(table.rows().iter().filter(|(_, s)| s.is_finite()).filter_map(|(l, s)| {
        let i = labels.iter().position(|label| *label == l.as_str())?;
        Some(Circle::new((SegmentValue::CenterOf(i as u32), *s), 3, RED.filled()))
    }))
    .map_err(drawing)?;

    root_area.present().map_err(drawing)?;
    info!("successfully plotted to {}", filename);

    Ok(())
}
