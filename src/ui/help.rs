use std::io::{self, Write};

use super::theme::{Paint, Theme};
use super::views::clear_screen;

const COMMANDS: [(&str, &str); 7] = [
    ("list", "Show running processes"),
    ("kill <pid>", "Terminate process by PID"),
    ("refresh", "Auto-refresh process list"),
    ("top [n]", "Show top N processes (default: 15)"),
    ("help", "Show this help menu"),
    ("clear", "Clear the screen"),
    ("exit", "Exit ktop"),
];

const USAGE_COLUMN: usize = 24;
const DESCRIPTION_COLUMN: usize = 48;

const BANNER: &str = r"
  ██╗  ██╗████████╗ ██████╗ ██████╗
  ██║ ██╔╝╚══██╔══╝██╔═══██╗██╔══██╗
  █████╔╝    ██║   ██║   ██║██████╔╝
  ██╔═██╗    ██║   ██║   ██║██╔═══╝
  ██║  ██╗   ██║   ╚██████╔╝██║
  ╚═╝  ╚═╝   ╚═╝    ╚═════╝ ╚═╝
";

pub fn help_lines() -> Vec<String> {
    let inner = USAGE_COLUMN + DESCRIPTION_COLUMN + 6;
    let title = "COMMANDS";
    let left = (inner - title.len()) / 2;

    let mut lines = Vec::with_capacity(COMMANDS.len() + 4);
    lines.push(format!("╔{}╗", "═".repeat(inner)));
    lines.push(format!(
        "║{}{title}{}║",
        " ".repeat(left),
        " ".repeat(inner - left - title.len())
    ));
    lines.push(format!("╠{}╣", "═".repeat(inner)));
    for (usage, description) in COMMANDS {
        lines.push(format!(
            "║  {usage:<USAGE_COLUMN$}│  {description:<DESCRIPTION_COLUMN$} ║"
        ));
    }
    lines.push(format!("╚{}╝", "═".repeat(inner)));
    lines
}

pub fn write_help<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out)?;
    for line in help_lines() {
        writeln!(out, "{}", theme.paint(Paint::Info, line))?;
    }
    Ok(())
}

pub fn write_banner<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    clear_screen(out)?;
    for line in BANNER.lines() {
        writeln!(out, "{}", theme.paint(Paint::Header, line))?;
    }
    writeln!(
        out,
        "\n{}",
        theme.paint(
            Paint::Info,
            "Ready to monitor your system! Type 'help' for commands or 'list' to start."
        )
    )
}

pub fn write_goodbye<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        theme.paint(Paint::Success, "Thanks for using ktop! Goodbye!")
    )
}
