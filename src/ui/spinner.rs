use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use super::style::{Style, parse_color};
use crate::output;

/// Frames of the "grenade" spinner.
const FRAMES: &[&str] = &[
    "،  ", "′  ", " ´ ", " ‾ ", "  ⸌", "  ⸊", "  |", "  ⁎", "  ⁕", " ෴ ", "  ⁓", "   ", "   ",
    "   ",
];
const FRAME_INTERVAL: Duration = Duration::from_millis(80);
const COLOR_INTERVAL: Duration = Duration::from_millis(100);

/// Colors the spinner cycles through while a translation is pending.
pub const PALETTE: &[&str] = &["red", "yellow", "green", "cyan", "blue", "magenta"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorState {
    Active,
    Succeeded,
    Failed,
}

/// Snapshot of an indicator's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorSummary {
    pub state: IndicatorState,
    /// How many times the color tick was cancelled.
    pub cycle_cancellations: usize,
    /// Whether the color tick is still scheduled.
    pub cycling: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("progress indicator is no longer active (state: {0:?})")]
    NotActive(IndicatorState),
}

/// Background task advancing the spinner color. Aborted when dropped.
struct ColorCycle {
    handle: JoinHandle<()>,
}

impl ColorCycle {
    fn spawn(bar: ProgressBar, styles: Vec<ProgressStyle>, ticks: Arc<AtomicUsize>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(COLOR_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                let tick = ticks.fetch_add(1, Ordering::Relaxed) + 1;
                if let Some(style) = styles.get(tick % styles.len()) {
                    bar.set_style(style.clone());
                }
            }
        });
        Self { handle }
    }
}

impl Drop for ColorCycle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A terminal spinner whose color cycles through a palette.
///
/// The color tick is owned by the indicator: it stops on [`succeed`],
/// [`fail`], or when the indicator is dropped, whichever comes first.
///
/// [`succeed`]: ProgressIndicator::succeed
/// [`fail`]: ProgressIndicator::fail
pub struct ProgressIndicator {
    bar: ProgressBar,
    palette: Vec<&'static str>,
    ticks: Arc<AtomicUsize>,
    cycle: Option<ColorCycle>,
    cycle_cancellations: usize,
    state: IndicatorState,
}

impl ProgressIndicator {
    /// Creates and starts the indicator. Must be called inside a tokio runtime.
    ///
    /// Palette entries that are not known color names are skipped; with no
    /// usable colors the spinner is drawn uncolored.
    pub fn start(text: &str, palette: &[&'static str]) -> anyhow::Result<Self> {
        let palette: Vec<&'static str> = palette
            .iter()
            .copied()
            .filter(|name| parse_color(name).is_some())
            .collect();

        let styles = if palette.is_empty() || output::is_no_color() {
            vec![spinner_style(None)?]
        } else {
            palette
                .iter()
                .map(|color| spinner_style(Some(color)))
                .collect::<anyhow::Result<Vec<_>>>()?
        };

        let bar = if output::is_quiet() {
            ProgressBar::hidden()
        } else {
            ProgressBar::new_spinner()
        };
        bar.set_style(styles[0].clone());
        bar.set_message(text.to_string());
        bar.enable_steady_tick(FRAME_INTERVAL);

        let ticks = Arc::new(AtomicUsize::new(0));
        let cycle = ColorCycle::spawn(bar.clone(), styles, Arc::clone(&ticks));

        Ok(Self {
            bar,
            palette,
            ticks,
            cycle: Some(cycle),
            cycle_cancellations: 0,
            state: IndicatorState::Active,
        })
    }

    pub const fn state(&self) -> IndicatorState {
        self.state
    }

    /// Returns `true` while the color tick is scheduled.
    pub const fn is_cycling(&self) -> bool {
        self.cycle.is_some()
    }

    pub const fn summary(&self) -> IndicatorSummary {
        IndicatorSummary {
            state: self.state,
            cycle_cancellations: self.cycle_cancellations,
            cycling: self.cycle.is_some(),
        }
    }

    /// Number of color ticks so far.
    pub fn ticks(&self) -> usize {
        self.ticks.load(Ordering::Relaxed)
    }

    /// Name of the color currently shown, if any.
    pub fn current_color(&self) -> Option<&'static str> {
        if self.palette.is_empty() {
            return None;
        }
        self.palette.get(self.ticks() % self.palette.len()).copied()
    }

    /// Replaces the text next to the spinner.
    pub fn set_text(&self, text: &str) -> Result<(), IndicatorError> {
        self.ensure_active()?;
        self.bar.set_message(text.to_string());
        Ok(())
    }

    /// Stops the spinner and writes a success mark with `message` to `out`.
    pub fn succeed<W: Write>(&mut self, message: &str, out: &mut W) -> Result<(), IndicatorError> {
        self.finish(IndicatorState::Succeeded)?;
        write_mark(out, &Style::success("✔"), message);
        Ok(())
    }

    /// Stops the spinner and writes a failure mark with `message` to `out`.
    pub fn fail<W: Write>(&mut self, message: &str, out: &mut W) -> Result<(), IndicatorError> {
        self.finish(IndicatorState::Failed)?;
        write_mark(out, &Style::error("✖"), message);
        Ok(())
    }

    const fn ensure_active(&self) -> Result<(), IndicatorError> {
        match self.state {
            IndicatorState::Active => Ok(()),
            state => Err(IndicatorError::NotActive(state)),
        }
    }

    fn finish(&mut self, state: IndicatorState) -> Result<(), IndicatorError> {
        self.ensure_active()?;
        self.stop();
        self.state = state;
        Ok(())
    }

    fn stop(&mut self) {
        // Dropping the cycle aborts its task.
        if let Some(cycle) = self.cycle.take() {
            drop(cycle);
            self.cycle_cancellations += 1;
        }
        self.bar.finish_and_clear();
    }
}

/// Status marks are cosmetic: hidden in quiet mode, write failures ignored.
fn write_mark<W: Write>(out: &mut W, mark: &str, message: &str) {
    if !output::is_quiet() {
        let _ = writeln!(out, "{mark} {message}");
        let _ = out.flush();
    }
}

impl Drop for ProgressIndicator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn spinner_style(color: Option<&str>) -> anyhow::Result<ProgressStyle> {
    let template = color.map_or_else(
        || "{spinner} {msg}".to_string(),
        |color| format!("{{spinner:.{color}}} {{msg}}"),
    );
    Ok(ProgressStyle::default_spinner()
        .tick_strings(FRAMES)
        .template(&template)?)
}
