use std::io::{BufRead, Write};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::command::{Command, is_confirmation, parse_pid};
use super::config::{Config, DisplaySettings};
use super::interrupt::Interrupt;
use super::refresh::{RefreshSettings, run_refresh};
use super::status::{Flow, StatusLevel};
use crate::data::{ProcessSource, ProcessTerminator};
use crate::error::{KtopError, Result};
use crate::ui::{
    Paint, Theme, clear_screen, write_banner, write_goodbye, write_help, write_list_view,
    write_top_view,
};

pub const PROMPT: &str = "ktop ⚡ > ";

/// The interactive command loop.
///
/// Reads one command per line from `input` and draws to `out`. Command
/// failures are printed and the loop carries on; only I/O errors on the
/// terminal itself end the session early.
pub struct Session<S, T, R, W> {
    source: S,
    terminator: T,
    input: R,
    out: W,
    display: DisplaySettings,
    refresh_interval: Duration,
    theme: Theme,
    interrupt: Interrupt,
}

impl<S, T, R, W> Session<S, T, R, W>
where
    S: ProcessSource,
    T: ProcessTerminator,
    R: BufRead,
    W: Write,
{
    pub fn new(source: S, terminator: T, input: R, out: W, config: &Config) -> Self {
        Self {
            source,
            terminator,
            input,
            out,
            display: config.display,
            refresh_interval: config.refresh_interval,
            theme: Theme::new(config.display.color),
            interrupt: Interrupt::new(),
        }
    }

    /// Shares `interrupt` with whoever delivers cancellation (a signal handler).
    pub fn with_interrupt(mut self, interrupt: Interrupt) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Prints the banner, then handles commands until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        write_banner(&mut self.out, &self.theme)?;
        loop {
            write!(
                self.out,
                "\n{}",
                self.theme.paint(Paint::Prompt, PROMPT)
            )?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("input closed");
                writeln!(self.out)?;
                write_goodbye(&mut self.out, &self.theme)?;
                self.out.flush()?;
                return Ok(());
            };

            let command = Command::parse(&line, self.display.top_default);
            if self.dispatch(command)?.should_exit() {
                return Ok(());
            }
        }
    }

    /// Runs one command, converting command-level failures into messages.
    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        debug!(command = command.label(), "dispatch");
        let flow = match self.execute(command) {
            Ok(flow) => flow,
            Err(err) if err.is_recoverable() => {
                self.report(&err)?;
                Flow::Continue
            }
            Err(err) => return Err(err),
        };
        self.out.flush()?;
        Ok(flow)
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Empty => {}
            Command::List => {
                let samples = self.source.fetch()?;
                write_list_view(
                    &mut self.out,
                    &samples,
                    self.display.list_limit,
                    self.display.show_legend,
                    &self.theme,
                )?;
            }
            Command::Kill(target) => self.kill(target.as_deref())?,
            Command::Refresh => {
                let settings = RefreshSettings {
                    interval: self.refresh_interval,
                    limit: self.display.list_limit,
                    show_legend: self.display.show_legend,
                };
                run_refresh(
                    &mut self.source,
                    &mut self.out,
                    &settings,
                    &self.theme,
                    &self.interrupt,
                )?;
                writeln!(self.out)?;
                self.status(StatusLevel::Info, "Auto-refresh stopped")?;
            }
            Command::Top(count) => {
                let samples = self.source.fetch()?;
                write_top_view(&mut self.out, &samples, count, &self.theme)?;
            }
            Command::Help => write_help(&mut self.out, &self.theme)?,
            Command::Clear => clear_screen(&mut self.out)?,
            Command::Exit => {
                write_goodbye(&mut self.out, &self.theme)?;
                return Ok(Flow::Exit);
            }
            Command::Unknown(name) => {
                self.status(StatusLevel::Error, &format!("ERROR: Unknown command: {name}"))?;
                self.status(StatusLevel::Info, "INFO: Type 'help' to see available commands")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn kill(&mut self, target: Option<&str>) -> Result<()> {
        let pid = parse_pid(target)?;

        write!(
            self.out,
            "{} {pid}? (y/N): ",
            self.theme
                .paint(Paint::Info, "WARNING: Are you sure you want to kill process")
        )?;
        self.out.flush()?;

        let answer = self.read_line()?.unwrap_or_default();
        if !is_confirmation(&answer) {
            info!(pid, "kill cancelled");
            return self.status(StatusLevel::Info, "CANCELLED: Kill operation cancelled");
        }

        info!(pid, "terminating process");
        self.terminator.terminate(pid)?;
        self.status(
            StatusLevel::Success,
            &format!("SUCCESS: Successfully killed process {pid}"),
        )
    }

    fn report(&mut self, err: &KtopError) -> Result<()> {
        warn!(%err, "command failed");
        self.status(StatusLevel::Error, &format!("ERROR: {err}"))
    }

    fn status(&mut self, level: StatusLevel, text: &str) -> Result<()> {
        writeln!(self.out, "{}", self.theme.paint(level.paint(), text))?;
        Ok(())
    }

    /// Next line without its line terminator, or `None` at end of input.
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).trim().to_string()))
    }
}
