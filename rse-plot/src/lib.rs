#[macro_use]
extern crate log;

mod error;
pub mod plot;
mod score_table;

pub use error::PlotError;
pub use plot::plot_scores;
pub use score_table::ScoreTable;
