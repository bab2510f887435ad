//! BetaLab Plot — terminal figure for the regression.
//!
//! Draws the (index, equity) scatter with the fitted line on top, then blocks
//! until the user dismisses it. Nothing is written to disk.

pub mod figure;
pub mod window;

pub use figure::{FigureData, FitPlot, PlotLabels};
pub use window::{show_fit_plot, PlotError};
