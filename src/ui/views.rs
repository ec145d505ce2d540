use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use super::render::render_table;
use super::table::Table;
use super::theme::{Paint, Theme};
use crate::data::ProcessSample;
use crate::utils::{format_command, format_cpu_value, format_memory_value};

pub const LIST_HEADERS: [&str; 5] = ["PID", "USER", "CPU%", "MEM%", "COMMAND"];
pub const TOP_HEADERS: [&str; 6] = ["RANK", "PID", "USER", "CPU%", "MEM%", "COMMAND"];

pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

fn sample_cells(sample: &ProcessSample, theme: &Theme) -> [String; 5] {
    [
        theme.paint(Paint::Pid, sample.pid),
        theme.paint(Paint::User, sample.user_label()),
        theme.cpu(&format_cpu_value(f64::from(sample.cpu))),
        theme.memory(&format_memory_value(f64::from(sample.mem))),
        theme.paint(Paint::Command, format_command(&sample.command)),
    ]
}

/// The first `limit` samples, in source order.
pub fn process_table(samples: &[ProcessSample], limit: usize, theme: &Theme) -> Table {
    let mut table = Table::new(LIST_HEADERS);
    for sample in samples.iter().take(limit) {
        table.add_row(sample_cells(sample, theme));
    }
    table
}

/// Podium ranks are bracketed, the rest are numbered.
pub fn rank_label(rank: usize) -> String {
    if rank <= 3 {
        format!("[{rank}]")
    } else {
        format!("#{rank}")
    }
}

pub fn top_table(samples: &[ProcessSample], count: usize, theme: &Theme) -> Table {
    let mut table = Table::new(TOP_HEADERS);
    for (idx, sample) in samples.iter().take(count).enumerate() {
        let [pid, user, cpu, mem, command] = sample_cells(sample, theme);
        table.add_row([rank_label(idx + 1), pid, user, cpu, mem, command]);
    }
    table
}

/// Clears the screen and prints the process count, table and legend.
pub fn write_list_view<W: Write>(
    out: &mut W,
    samples: &[ProcessSample],
    limit: usize,
    show_legend: bool,
    theme: &Theme,
) -> io::Result<()> {
    clear_screen(out)?;
    writeln!(
        out,
        "\n{} {}\n",
        theme.paint(Paint::Info, "Total Processes:"),
        theme.paint(Paint::Success, samples.len())
    )?;
    render_table(out, &process_table(samples, limit, theme), theme)?;
    if show_legend {
        write_legend(out, theme)?;
    }
    Ok(())
}

/// Clears the screen and prints the ranked table. Returns the number of rows
/// shown, which is `count` capped at the number of samples.
pub fn write_top_view<W: Write>(
    out: &mut W,
    samples: &[ProcessSample],
    count: usize,
    theme: &Theme,
) -> io::Result<usize> {
    let table = top_table(samples, count, theme);
    clear_screen(out)?;
    writeln!(
        out,
        "{} {}\n",
        theme.paint(Paint::Info, "Top"),
        theme.paint(Paint::Success, table.len())
    )?;
    render_table(out, &table, theme)?;
    Ok(table.len())
}

pub fn write_legend<W: Write>(out: &mut W, theme: &Theme) -> io::Result<()> {
    writeln!(out, "\n{}", theme.paint(Paint::Info, "Legend:"))?;
    writeln!(
        out,
        "  {} High CPU (>50%)  {} Medium CPU (>20%)  {} Low CPU",
        theme.paint(Paint::CpuCritical, "RED"),
        theme.paint(Paint::CpuWarning, "YELLOW"),
        theme.paint(Paint::CpuNormal, "GREEN")
    )?;
    writeln!(
        out,
        "  {} High Memory (>10%)  {} Process terminated successfully",
        theme.paint(Paint::MemCritical, "PURPLE"),
        theme.paint(Paint::Success, "SUCCESS")
    )
}
