use std::io::{self, Write};

use super::table::Table;
use super::theme::{Paint, Theme};
use crate::utils::visible_len;

struct BorderGlyphs {
    left: &'static str,
    joint: &'static str,
    right: &'static str,
}

const TOP: BorderGlyphs = BorderGlyphs {
    left: "┌",
    joint: "┬",
    right: "┐",
};
const SEPARATOR: BorderGlyphs = BorderGlyphs {
    left: "├",
    joint: "┼",
    right: "┤",
};
const BOTTOM: BorderGlyphs = BorderGlyphs {
    left: "└",
    joint: "┴",
    right: "┘",
};
const HORIZONTAL: &str = "─";
const VERTICAL: &str = "│";

/// Draws the table as a box-drawn grid: top border, header row, separator,
/// data rows and bottom border.
///
/// Rows shorter than the header are padded with blank cells so the right
/// border stays aligned.
pub fn render_table<W: Write>(out: &mut W, table: &Table, theme: &Theme) -> io::Result<()> {
    let widths = table.widths();

    write_border(out, widths, &TOP, theme)?;
    let header_cells = table
        .headers()
        .iter()
        .zip(widths)
        .map(|(header, &width)| theme.paint(Paint::Header, pad_visible(header, width)));
    write_cells(out, header_cells, theme)?;
    write_border(out, widths, &SEPARATOR, theme)?;

    for row in table.rows() {
        let cells = widths.iter().enumerate().map(|(idx, &width)| {
            let cell = row.get(idx).map(String::as_str).unwrap_or("");
            pad_visible(cell, width)
        });
        write_cells(out, cells, theme)?;
    }

    write_border(out, widths, &BOTTOM, theme)
}

/// Right-pads `cell` with spaces up to `width` visible columns. Styling
/// markers are kept and do not count toward the width.
pub fn pad_visible(cell: &str, width: usize) -> String {
    let padding = width.saturating_sub(visible_len(cell));
    let mut padded = String::with_capacity(cell.len() + padding);
    padded.push_str(cell);
    padded.extend(std::iter::repeat_n(' ', padding));
    padded
}

fn write_cells<W, I>(out: &mut W, cells: I, theme: &Theme) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = String>,
{
    let bar = theme.paint(Paint::Border, VERTICAL);
    let mut line = String::new();
    for cell in cells {
        line.push_str(&bar);
        line.push(' ');
        line.push_str(&cell);
        line.push(' ');
    }
    line.push_str(&bar);
    writeln!(out, "{line}")
}

fn write_border<W: Write>(
    out: &mut W,
    widths: &[usize],
    glyphs: &BorderGlyphs,
    theme: &Theme,
) -> io::Result<()> {
    let fill = widths
        .iter()
        .map(|width| HORIZONTAL.repeat(width + 2))
        .collect::<Vec<_>>()
        .join(glyphs.joint);
    let line = format!("{}{fill}{}", glyphs.left, glyphs.right);
    writeln!(out, "{}", theme.paint(Paint::Border, line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::strip_markers;

    fn render_to_string(table: &Table, theme: &Theme) -> String {
        let mut out = Vec::new();
        render_table(&mut out, table, theme).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_plain_grid() {
        let mut table = Table::new(["PID", "COMMAND"]);
        table.add_row(["1", "init"]);
        table.add_row(["4242", "sh"]);

        let expected = [
            "┌──────┬─────────┐",
            "│ PID  │ COMMAND │",
            "├──────┼─────────┤",
            "│ 1    │ init    │",
            "│ 4242 │ sh      │",
            "└──────┴─────────┘",
            "",
        ]
        .join("\n");
        assert_eq!(render_to_string(&table, &Theme::plain()), expected);
    }

    #[test]
    fn styled_cells_stay_aligned() {
        let theme = Theme::new(true);
        let mut table = Table::new(["PID", "CPU%"]);
        table.add_row([theme.paint(Paint::Pid, "7"), theme.paint(Paint::CpuCritical, "88.0%")]);
        table.add_row(["12".to_string(), "1.0%".to_string()]);

        let rendered = render_to_string(&table, &theme);
        let widths: Vec<usize> = rendered.lines().map(visible_len).collect();
        assert_eq!(widths.len(), 6);
        assert!(widths.iter().all(|&width| width == widths[0]));

        let plain = strip_markers(&rendered).into_owned();
        assert!(plain.contains("│ 7   │ 88.0% │"));
    }

    #[test]
    fn pad_visible_ignores_markers() {
        let red = "\x1b[31mabc\x1b[0m";
        let blue = "\x1b[38;5;12m\x1b[1mabc\x1b[0m";
        let padded_red = pad_visible(red, 6);
        let padded_blue = pad_visible(blue, 6);
        assert!(padded_red.ends_with("abc\x1b[0m   "));
        assert_eq!(
            padded_red.len() - red.len(),
            padded_blue.len() - blue.len()
        );
    }

    #[test]
    fn short_row_is_blank_padded() {
        let mut table = Table::new(["A", "B"]);
        table.add_row(["x"]);
        let rendered = render_to_string(&table, &Theme::plain());
        assert_eq!(rendered.lines().nth(3), Some("│ x │   │"));
    }
}
