use crate::utils::visible_len;

/// Column headers, rows of styled cells and per-column display widths.
///
/// A column is as wide as its header or its widest cell, measured without
/// styling markers. Rows are append-only; build a new table per render.
#[derive(Clone, Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        debug_assert!(!headers.is_empty(), "table needs at least one column");
        let widths = headers.iter().map(|header| visible_len(header)).collect();
        Self {
            headers,
            rows: Vec::new(),
            widths,
        }
    }

    /// Appends a row. Cells past the last column are dropped; short rows are
    /// kept as they are.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(Into::into)
            .collect();
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(visible_len(cell));
        }
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_start_at_header_length() {
        let table = Table::new(["PID", "COMMAND"]);
        assert_eq!(table.widths(), &[3, 7]);
        assert!(table.is_empty());
    }

    #[test]
    fn widths_track_widest_visible_cell() {
        let mut table = Table::new(["PID", "CPU%"]);
        table.add_row(["123456", "\x1b[38;5;9m\x1b[1m99.0%\x1b[0m"]);
        assert_eq!(table.widths(), &[6, 5]);

        table.add_row(["1", "1.0%"]);
        assert_eq!(table.widths(), &[6, 5]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn widths_never_shrink() {
        let mut table = Table::new(["A", "B", "C"]);
        let rows = [
            vec!["xx", "y", "zzzz"],
            vec!["x", "yyyyy", "z"],
            vec!["", "", ""],
        ];
        let mut previous = table.widths().to_vec();
        for row in rows {
            table.add_row(row);
            let current = table.widths().to_vec();
            assert!(current.iter().zip(&previous).all(|(now, before)| now >= before));
            previous = current;
        }
        assert_eq!(table.widths(), &[2, 5, 4]);
    }

    #[test]
    fn width_is_max_of_header_and_cells() {
        let headers = ["RANK", "PID", "COMMAND"];
        let rows = [["[1]", "42", "sh"], ["#10", "123456789", "a-long-command"]];
        let mut table = Table::new(headers);
        for row in &rows {
            table.add_row(row.iter().copied());
        }
        for (idx, header) in headers.iter().enumerate() {
            let expected = rows
                .iter()
                .map(|row| row[idx].len())
                .chain(std::iter::once(header.len()))
                .max()
                .unwrap();
            assert_eq!(table.widths()[idx], expected);
        }
    }

    #[test]
    fn widths_count_characters_not_bytes() {
        let mut table = Table::new(["USER"]);
        table.add_row(["\x1b[38;5;14mпользователь\x1b[39m"]);
        assert_eq!(table.widths(), &[12]);
    }

    #[test]
    fn extra_cells_are_clipped() {
        let mut table = Table::new(["A", "B"]);
        table.add_row(["1", "2", "three-three"]);
        assert_eq!(table.rows()[0], vec!["1", "2"]);
        assert_eq!(table.widths(), &[1, 1]);
    }

    #[test]
    fn short_rows_are_kept() {
        let mut table = Table::new(["A", "B", "C"]);
        table.add_row(["wide"]);
        assert_eq!(table.rows()[0].len(), 1);
        assert_eq!(table.widths(), &[4, 1, 1]);
    }
}
