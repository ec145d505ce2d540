use crate::error::{KtopError, Result};

/// One line of user input, parsed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    List,
    /// Raw target; validated by [`parse_pid`] when the command runs
    Kill(Option<String>),
    Refresh,
    Top(usize),
    Help,
    Clear,
    Exit,
    Unknown(String),
    Empty,
}

impl Command {
    /// `top_default` is used when `top` has no count or an unusable one.
    pub fn parse(line: &str, top_default: usize) -> Self {
        let mut args = line.split_whitespace();
        let Some(name) = args.next() else {
            return Command::Empty;
        };

        match name {
            "list" | "ls" => Command::List,
            "kill" => Command::Kill(args.next().map(str::to_string)),
            "refresh" | "r" => Command::Refresh,
            "top" => Command::Top(args.next().and_then(parse_count).unwrap_or(top_default)),
            "help" | "h" | "?" => Command::Help,
            "clear" | "cls" => Command::Clear,
            "exit" | "quit" | "q" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Kill(_) => "kill",
            Command::Refresh => "refresh",
            Command::Top(_) => "top",
            Command::Help => "help",
            Command::Clear => "clear",
            Command::Exit => "exit",
            Command::Unknown(_) => "unknown",
            Command::Empty => "empty",
        }
    }
}

fn parse_count(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().filter(|&count| count > 0)
}

/// Accepts decimal digits only; no sign, no whitespace.
pub fn parse_pid(arg: Option<&str>) -> Result<u32> {
    let arg = arg.ok_or_else(|| KtopError::validation("Usage: kill <pid>"))?;
    if arg.is_empty() || !arg.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(KtopError::validation(format!(
            "Invalid PID '{arg}' - must be a number"
        )));
    }
    arg.parse::<u32>()
        .map_err(|_| KtopError::validation(format!("Invalid PID '{arg}' - out of range")))
}

/// Only "y" or "yes", in any case, confirms.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
