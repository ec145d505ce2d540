mod process;
mod sorting;
mod source;
mod terminate;

pub use process::ProcessSample;
pub use sorting::sort_by_cpu_desc;
pub use source::{ProcessSource, SystemProcessSource};
pub use terminate::{KillSignal, ProcessTerminator, SignalTerminator};
