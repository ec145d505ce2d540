mod command;
mod config;
mod interrupt;
mod refresh;
mod session;
mod status;

pub use command::{Command, is_confirmation, parse_pid};
pub use config::{Cli, Config, DisplaySettings, config_path};
pub use interrupt::{ArmGuard, Interrupt};
pub use refresh::{RefreshSettings, run_refresh};
pub use session::{PROMPT, Session};
pub use status::{Flow, StatusLevel};
