//! Scatter + fitted line widget.
//!
//! Axis titles are shown; tick labels and the legend are not.

use betalab_core::AnalysisReport;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Widget},
};

/// Title and axis titles of the figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLabels {
    pub title: String,
    pub x_axis: String,
    pub y_axis: String,
}

impl PlotLabels {
    pub fn for_report(report: &AnalysisReport) -> Self {
        let equity = report.config.equity_label();
        let index = &report.config.index_label;
        Self {
            title: format!("Linear Regression: {index} and {equity} Close Prices"),
            x_axis: format!("{index} Close"),
            y_axis: format!("{equity} Close"),
        }
    }
}

/// Points and bounds ready for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureData {
    pub scatter: Vec<(f64, f64)>,
    /// Fitted line, sorted by x so it draws left to right.
    pub fit_line: Vec<(f64, f64)>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
}

impl FigureData {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let obs = &report.observations;
        let scatter: Vec<(f64, f64)> = obs.x.iter().copied().zip(obs.y.iter().copied()).collect();

        let mut fit_line: Vec<(f64, f64)> = obs
            .x
            .iter()
            .copied()
            .zip(report.regression.fitted.iter().copied())
            .collect();
        fit_line.sort_by(|a, b| a.0.total_cmp(&b.0));

        let x_bounds = padded_bounds(scatter.iter().map(|p| p.0));
        let y_bounds = padded_bounds(scatter.iter().chain(&fit_line).map(|p| p.1));

        Self {
            scatter,
            fit_line,
            x_bounds,
            y_bounds,
        }
    }
}

/// Min/max with 5% padding; a zero range gets ±1.
fn padded_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }

    let range = max - min;
    let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
    [min - pad, max + pad]
}

/// The regression figure widget.
pub struct FitPlot<'a> {
    data: &'a FigureData,
    labels: &'a PlotLabels,
}

impl<'a> FitPlot<'a> {
    pub fn new(data: &'a FigureData, labels: &'a PlotLabels) -> Self {
        Self { data, labels }
    }
}

impl<'a> Widget for FitPlot<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let datasets = vec![
            Dataset::default()
                .name("Observed")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::White))
                .data(&self.data.scatter),
            Dataset::default()
                .name("Fitted")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Blue))
                .data(&self.data.fit_line),
        ];

        let chart = Chart::new(datasets)
            .legend_position(None)
            .block(
                Block::default()
                    .title(format!(" {} ", self.labels.title))
                    .title_bottom(" press q to close ")
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .title(Span::raw(self.labels.x_axis.as_str()))
                    .bounds(self.data.x_bounds),
            )
            .y_axis(
                Axis::default()
                    .title(Span::raw(self.labels.y_axis.as_str()))
                    .bounds(self.data.y_bounds),
            );

        chart.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use betalab_core::data::StaticProvider;
    use betalab_core::{run_analysis, AnalysisConfig};
    use chrono::NaiveDate;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn report() -> AnalysisReport {
        let first = NaiveDate::from_ymd_opt(2015, 4, 1).unwrap();
        let provider = StaticProvider::new()
            .with_closes("JPM", first, &[100.0, 101.0, 102.0, 101.0, 103.0])
            .with_closes("^GSPC", first, &[2000.0, 2010.0, 2005.0, 2015.0, 2020.0]);
        run_analysis(&provider, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn labels_name_both_series() {
        let labels = PlotLabels::for_report(&report());
        assert_eq!(labels.title, "Linear Regression: SnP500 and JPM Close Prices");
        assert_eq!(labels.x_axis, "SnP500 Close");
        assert_eq!(labels.y_axis, "JPM Close");
    }

    #[test]
    fn fit_line_is_sorted_and_bounds_cover_points() {
        let data = FigureData::from_report(&report());

        assert_eq!(data.scatter.len(), 5);
        assert!(data.fit_line.windows(2).all(|w| w[0].0 <= w[1].0));
        for &(x, y) in data.scatter.iter().chain(&data.fit_line) {
            assert!(x > data.x_bounds[0] && x < data.x_bounds[1]);
            assert!(y > data.y_bounds[0] && y < data.y_bounds[1]);
        }
    }

    #[test]
    fn flat_values_get_unit_padding() {
        assert_eq!(padded_bounds([5.0, 5.0].into_iter()), [4.0, 6.0]);
        assert_eq!(padded_bounds(std::iter::empty()), [0.0, 1.0]);
    }

    #[test]
    fn renders_title_and_axis_titles() {
        let report = report();
        let data = FigureData::from_report(&report);
        let labels = PlotLabels::for_report(&report);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| f.render_widget(FitPlot::new(&data, &labels), f.area()))
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(rendered.contains("Linear Regression: SnP500 and JPM Close Prices"));
        assert!(rendered.contains("SnP500 Close"));
        assert!(rendered.contains("JPM Close"));
        // Tick labels are suppressed: no axis bound values appear
        assert!(!rendered.contains("2000"));
    }

    #[test]
    fn legend_is_not_drawn() {
        let report = report();
        let data = FigureData::from_report(&report);
        let labels = PlotLabels::for_report(&report);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| f.render_widget(FitPlot::new(&data, &labels), f.area()))
            .unwrap();

        let rendered: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(!rendered.contains("Observed"));
        assert!(!rendered.contains("Fitted"));
    }
}
