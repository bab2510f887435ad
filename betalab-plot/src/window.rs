//! Interactive display of the regression figure.
//!
//! Takes over the terminal (raw mode, alternate screen), redraws on resize,
//! and returns once the user presses q, Esc, or Enter. The terminal is
//! restored on every exit path, including errors and panics.

use std::io::{self, stdout, Stdout};
use std::panic;

use betalab_core::AnalysisReport;
use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use thiserror::Error;

use crate::figure::{FigureData, FitPlot, PlotLabels};

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("nothing to plot: no observations")]
    NoObservations,
}

/// Show the figure and block until it is dismissed.
pub fn show_fit_plot(report: &AnalysisReport) -> Result<(), PlotError> {
    if report.observations.is_empty() {
        return Err(PlotError::NoObservations);
    }

    let data = FigureData::from_report(report);
    let labels = PlotLabels::for_report(report);

    // Declared before the terminal so it is dropped after it.
    let _session = TerminalSession::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;

    log::debug!("plot window open ({} points)", data.scatter.len());
    run_until_dismissed(&mut terminal, &data, &labels)
}

/// Raw mode and the alternate screen, held for the lifetime of the value.
///
/// Dropping it leaves both and removes the restoring panic hook, whether
/// setup finished or failed halfway.
struct TerminalSession;

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        Self::enter_then(|| execute!(stdout(), EnterAlternateScreen))
    }

    fn enter_then(setup: impl FnOnce() -> io::Result<()>) -> io::Result<Self> {
        let default_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            default_hook(info);
        }));

        let session = Self;
        enable_raw_mode()?;
        setup()?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        // take_hook panics on a panicking thread; the hook has already run then
        if !std::thread::panicking() {
            let _ = panic::take_hook();
        }
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

fn run_until_dismissed(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    data: &FigureData,
    labels: &PlotLabels,
) -> Result<(), PlotError> {
    loop {
        terminal.draw(|f| f.render_widget(FitPlot::new(data, labels), f.area()))?;

        // Blocks until the next event; resizes fall through to a redraw
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && is_dismiss_key(key.code) {
                return Ok(());
            }
        }
    }
}

fn is_dismiss_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc | KeyCode::Enter
    )
}
