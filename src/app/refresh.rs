use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use tracing::{info, warn};

use super::interrupt::Interrupt;
use crate::data::ProcessSource;
use crate::error::Result;
use crate::ui::{Paint, Theme, write_list_view};

/// Longest uninterrupted sleep; bounds how late a cancellation is noticed.
const SLEEP_SLICE: Duration = Duration::from_millis(100);

#[derive(Clone, Copy, Debug)]
pub struct RefreshSettings {
    pub interval: Duration,
    pub limit: usize,
    pub show_legend: bool,
}

/// Redraws the process list every `interval` until `interrupt` fires.
///
/// Returns the number of completed ticks. A fetch failure ends the loop with
/// that error.
pub fn run_refresh<S, W>(
    source: &mut S,
    out: &mut W,
    settings: &RefreshSettings,
    theme: &Theme,
    interrupt: &Interrupt,
) -> Result<usize>
where
    S: ProcessSource + ?Sized,
    W: Write,
{
    let _armed = interrupt.arm();
    info!(
        interval_ms = settings.interval.as_millis() as u64,
        "auto-refresh started"
    );
    writeln!(
        out,
        "{}",
        theme.paint(Paint::Info, "Auto-refresh mode (Press Ctrl+C to stop)")
    )?;

    let mut ticks = 0;
    while !interrupt.is_triggered() {
        let samples = source.fetch().inspect_err(|err| {
            warn!(%err, ticks, "auto-refresh aborted");
        })?;

        write_list_view(out, &samples, settings.limit, settings.show_legend, theme)?;
        writeln!(
            out,
            "\n{} {}",
            theme.paint(Paint::Info, "Last updated:"),
            Local::now().format("%H:%M:%S")
        )?;
        writeln!(
            out,
            "{}",
            theme.paint(Paint::Info, "Press Ctrl+C to stop auto-refresh")
        )?;
        out.flush()?;
        ticks += 1;

        sleep_unless_triggered(settings.interval, interrupt);
    }

    info!(ticks, "auto-refresh stopped");
    Ok(ticks)
}

fn sleep_unless_triggered(interval: Duration, interrupt: &Interrupt) {
    let deadline = Instant::now() + interval;
    while !interrupt.is_triggered() {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return;
        }
        thread::sleep(remaining.min(SLEEP_SLICE));
    }
}
