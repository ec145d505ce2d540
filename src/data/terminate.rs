use sysinfo::{Pid, ProcessesToUpdate, Signal, System};
use tracing::info;

use crate::error::{KtopError, Result};

/// Signals a process to stop. Does not wait for it to exit.
pub trait ProcessTerminator {
    fn terminate(&mut self, pid: u32) -> Result<()>;
}

impl<T: ProcessTerminator + ?Sized> ProcessTerminator for &mut T {
    fn terminate(&mut self, pid: u32) -> Result<()> {
        (**self).terminate(pid)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KillSignal {
    /// SIGKILL; the process cannot ignore it
    #[default]
    Kill,
    /// SIGTERM; lets the process clean up
    Term,
}

impl KillSignal {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "kill" | "sigkill" | "9" => Some(KillSignal::Kill),
            "term" | "sigterm" | "15" => Some(KillSignal::Term),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KillSignal::Kill => "SIGKILL",
            KillSignal::Term => "SIGTERM",
        }
    }

    fn as_signal(self) -> Signal {
        match self {
            KillSignal::Kill => Signal::Kill,
            KillSignal::Term => Signal::Term,
        }
    }
}

/// Terminator that delivers a signal through the OS process table.
pub struct SignalTerminator {
    system: System,
    signal: KillSignal,
}

impl SignalTerminator {
    pub fn new(signal: KillSignal) -> Self {
        Self {
            system: System::new(),
            signal,
        }
    }
}

impl ProcessTerminator for SignalTerminator {
    fn terminate(&mut self, pid: u32) -> Result<()> {
        let target = Pid::from_u32(pid);
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[target]), true);
        let Some(process) = self.system.process(target) else {
            return Err(KtopError::termination(pid, "no such process"));
        };

        match process.kill_with(self.signal.as_signal()) {
            Some(true) => {
                info!(pid, signal = self.signal.label(), "signal delivered");
                Ok(())
            }
            Some(false) => Err(KtopError::termination(
                pid,
                format!("could not send {} (permission denied?)", self.signal.label()),
            )),
            None => Err(KtopError::termination(
                pid,
                format!("{} is not supported on this platform", self.signal.label()),
            )),
        }
    }
}
