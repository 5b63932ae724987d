//! In-memory tabular input.
//!
//! `RawTable` is the source-agnostic row contract produced by every
//! `TableSource`: a header row plus rows of optional text cells. An empty
//! cell is a null value, and rows shorter than the header read as null in
//! their missing positions.

use crate::types::ColumnName;

/// Header row plus rows of optional text cells.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<ColumnName>,
    rows: Vec<Vec<Option<String>>>,
}

/// Borrowed view of one table row.
#[derive(Clone, Copy, Debug)]
pub struct RowView<'a> {
    /// Zero-based position of the row in its table (header excluded).
    pub index: usize,
    cells: &'a [Option<String>],
}

impl RawTable {
    /// Build a table from headers and rows.
    pub fn new(headers: Vec<ColumnName>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    /// Build a table from string cells, treating empty strings as null.
    pub fn from_text_rows<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<ColumnName>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        let headers = headers.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell_value(cell.as_ref())).collect())
            .collect();
        Self { headers, rows }
    }

    /// Header names in column order.
    pub fn headers(&self) -> &[ColumnName] {
        &self.headers
    }

    /// Position of the first column named exactly `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over row views in table order.
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, cells)| RowView { index, cells })
    }
}

impl<'a> RowView<'a> {
    /// Cell at column `idx`, or `None` when null or beyond the row's width.
    pub fn get(&self, idx: usize) -> Option<&'a str> {
        self.cells.get(idx).and_then(|cell| cell.as_deref())
    }
}

/// Map a raw CSV cell to a table value; only the empty string is null.
pub(crate) fn cell_value(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RawTable {
        RawTable::from_text_rows(
            ["Order ID", "Commodity"],
            vec![vec!["A", "Rice"], vec!["B", ""], vec!["C"]],
        )
    }

    #[test]
    fn empty_cells_read_as_null() {
        let table = sample();
        let rows: Vec<_> = table.rows().collect();
        assert_eq!(rows[0].get(1), Some("Rice"));
        assert_eq!(rows[1].get(1), None);
    }

    #[test]
    fn short_rows_pad_with_null() {
        let table = sample();
        let last = table.rows().last().unwrap();
        assert_eq!(last.index, 2);
        assert_eq!(last.get(0), Some("C"));
        assert_eq!(last.get(1), None);
        assert_eq!(last.get(9), None);
    }

    #[test]
    fn column_index_is_exact() {
        let table = sample();
        assert_eq!(table.column_index("Commodity"), Some(1));
        assert_eq!(table.column_index("commodity"), None);
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
    }

    #[test]
    fn whitespace_cells_are_not_null() {
        let table = RawTable::from_text_rows(["Commodity"], vec![vec!["  "]]);
        assert_eq!(table.rows().next().unwrap().get(0), Some("  "));
    }
}
