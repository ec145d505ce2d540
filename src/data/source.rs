use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind, Users};
use tracing::debug;

use super::{ProcessSample, sort_by_cpu_desc};
use crate::error::{KtopError, Result};

/// Produces a fresh process snapshot, ordered by descending CPU usage.
pub trait ProcessSource {
    fn fetch(&mut self) -> Result<Vec<ProcessSample>>;
}

impl<S: ProcessSource + ?Sized> ProcessSource for &mut S {
    fn fetch(&mut self) -> Result<Vec<ProcessSample>> {
        (**self).fetch()
    }
}

/// CPU, memory and owner of whole processes; threads are not listed.
fn refresh_kind() -> ProcessRefreshKind {
    ProcessRefreshKind::nothing()
        .with_cpu()
        .with_memory()
        .with_user(UpdateKind::OnlyIfNotSet)
        .without_tasks()
}

/// Process source backed by the OS process table.
pub struct SystemProcessSource {
    system: System,
    users: Users,
}

impl SystemProcessSource {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_memory();
        // Prime CPU accounting so the first fetch has a baseline to diff against.
        system.refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind());
        Self {
            system,
            users: Users::new_with_refreshed_list(),
        }
    }
}

impl Default for SystemProcessSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSource for SystemProcessSource {
    fn fetch(&mut self) -> Result<Vec<ProcessSample>> {
        self.system.refresh_memory();
        self.system
            .refresh_processes_specifics(ProcessesToUpdate::All, true, refresh_kind());
        self.users.refresh();

        let processes = self.system.processes();
        if processes.is_empty() {
            return Err(KtopError::fetch("process table is empty"));
        }
        let total_memory = self.system.total_memory();
        if total_memory == 0 {
            return Err(KtopError::fetch("total memory size is unavailable"));
        }

        let mut samples = processes
            .iter()
            .filter(|(_, process)| process.thread_kind().is_none())
            .map(|(pid, process)| ProcessSample {
                pid: pid.as_u32(),
                user: process
                    .user_id()
                    .and_then(|id| self.users.get_user_by_id(id))
                    .map(|user| user.name().to_string()),
                cpu: process.cpu_usage(),
                mem: (process.memory() as f64 / total_memory as f64 * 100.0) as f32,
                command: process.name().to_string_lossy().into_owned(),
            })
            .collect::<Vec<_>>();
        sort_by_cpu_desc(&mut samples);
        debug!(count = samples.len(), "fetched process snapshot");
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_source_sees_current_process() {
        let mut source = SystemProcessSource::new();
        let samples = source.fetch().unwrap();
        let me = std::process::id();
        let own = samples.iter().find(|sample| sample.pid == me);
        assert!(own.is_some());
        assert!(own.unwrap().user.is_some(), "owner name was not resolved");
        assert!(
            samples
                .windows(2)
                .all(|pair| pair[0].cpu >= pair[1].cpu || pair[0].cpu.is_nan())
        );
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn system_source_skips_threads() {
        use std::sync::mpsc;

        let (tx, rx) = mpsc::channel::<()>();
        let worker = std::thread::spawn(move || {
            let _ = rx.recv();
        });

        let me = std::process::id();
        let mut source = SystemProcessSource::new();
        let samples = source.fetch().unwrap();

        let thread_ids: Vec<u32> = std::fs::read_dir("/proc/self/task")
            .unwrap()
            .filter_map(|entry| entry.ok()?.file_name().to_str()?.parse().ok())
            .filter(|&tid| tid != me)
            .collect();
        assert!(!thread_ids.is_empty());
        for tid in thread_ids {
            assert!(
                samples.iter().all(|sample| sample.pid != tid),
                "thread {tid} listed as a process"
            );
        }

        tx.send(()).unwrap();
        worker.join().unwrap();
    }
}
