use std::path::Path;

use crate::PlotError;

/// Scores gathered from several experiments, each tagged with the label of its experiment
#[derive(Debug, Clone)]
pub struct ScoreTable {
    metric: String,
    rows: Vec<(String, f64)>,
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::new("score")
    }
}

impl ScoreTable {
    /// Create an empty table of scores named `metric`
    pub fn new(metric: &str) -> Self {
        Self {
            metric: metric.to_string(),
            rows: Vec::new(),
        }
    }

    #[inline(always)]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    #[inline(always)]
    pub fn push(&mut self, label: &str, score: f64) {
        self.rows.push((label.to_string(), score))
    }

    /// Add all the fold scores of one experiment
    pub fn extend(&mut self, label: &str, scores: &[f64]) {
        self.rows.extend(scores.iter().map(|s| (label.to_string(), *s)))
    }

    #[inline(always)]
    pub fn rows(&self) -> &[(String, f64)] {
        &self.rows
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The distinct labels, in the order they were first pushed
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for (label, _) in self.rows.iter() {
            if !labels.contains(&label.as_str()) {
                labels.push(label);
            }
        }
        labels
    }

    pub fn scores_for(&self, label: &str) -> Vec<f64> {
        self.rows.iter().filter(|(l, _)| l == label).map(|(_, s)| *s).collect()
    }

    /// Average score of a label, None if the label is unknown
    pub fn mean_for(&self, label: &str) -> Option<f64> {
        let scores = self.scores_for(label);
        if scores.is_empty() {
            return None;
        }
        Some(scores.iter().sum::<f64>() / scores.len() as f64)
    }

    /// Write one `Model,<metric>` record per score
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), PlotError> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;
        writer.write_record(["Model", self.metric.as_str()])?;
        for (label, score) in self.rows.iter() {
            writer.write_record([label.as_str(), score.to_string().as_str()])?;
        }
        writer.flush()?;
        info!("wrote {} scores to {}", self.rows.len(), path.as_ref().display());

        Ok(())
    }
}
