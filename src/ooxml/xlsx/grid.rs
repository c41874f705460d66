//! Rectangular grid of worksheet display values.

use crate::html::writer::HtmlWriter;
use crate::html::{HtmlOptions, ToHtml};

/// Largest area, in cells, a parsed worksheet grid may cover.
///
/// Cells are addressed by reference and stored densely, so a single cell at
/// `XFD1048576` would otherwise claim the whole sheet. Cells that would push
/// the grid past this area are left out of the preview.
pub const MAX_GRID_CELLS: usize = 1 << 20;

/// Display values of a worksheet laid out by row and column.
///
/// The grid is always rectangular: every row has [`column_count`] values,
/// and positions no cell was written to hold empty strings. Values are the
/// text shown to the user, unescaped.
///
/// [`column_count`]: SheetGrid::column_count
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetGrid {
    rows: Vec<Vec<String>>,
    columns: usize,
}

impl SheetGrid {
    /// Create an empty grid.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` at (`row`, `column`), growing the grid as needed.
    ///
    /// A later write to the same position replaces the earlier value.
    pub fn set(&mut self, row: usize, column: usize, value: impl Into<String>) {
        self.ensure_columns(column + 1);
        self.ensure_rows(row + 1);
        self.rows[row][column] = value.into();
    }

    /// Grow the grid to at least `count` rows.
    pub fn ensure_rows(&mut self, count: usize) {
        let columns = self.columns;
        if self.rows.len() < count {
            self.rows.resize_with(count, || vec![String::new(); columns]);
        }
    }

    /// Grow every row to at least `count` columns.
    pub fn ensure_columns(&mut self, count: usize) {
        if count > self.columns {
            self.columns = count;
            for row in &mut self.rows {
                row.resize(count, String::new());
            }
        }
    }

    /// Whether growing the grid to cover `rows` x `columns` stays within
    /// [`MAX_GRID_CELLS`].
    pub(crate) fn fits(&self, rows: usize, columns: usize) -> bool {
        rows.max(self.rows.len())
            .saturating_mul(columns.max(self.columns).max(1))
            <= MAX_GRID_CELLS
    }

    /// Give an empty grid one row and one column.
    pub(crate) fn ensure_not_empty(&mut self) {
        self.ensure_columns(1);
        self.ensure_rows(1);
    }

    /// The rows of the grid.
    #[inline]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Value at (`row`, `column`), or `None` outside the grid.
    pub fn get(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}

impl ToHtml for SheetGrid {
    /// Render the grid as a table without a caption.
    fn to_html_with_options(&self, options: &HtmlOptions) -> String {
        let mut writer = HtmlWriter::new(options);
        writer.write_sheet(self, None);
        writer.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_set_pads_rows_and_columns() {
        let mut grid = SheetGrid::new();
        grid.set(1, 2, "x");
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.get(1, 2), Some("x"));
        assert_eq!(grid.get(0, 0), Some(""));
        assert_eq!(grid.get(2, 0), None);
    }

    #[test]
    fn test_ensure_not_empty() {
        let mut grid = SheetGrid::new();
        grid.ensure_not_empty();
        assert_eq!(grid.rows(), &[vec![String::new()]]);

        let mut grid = SheetGrid::new();
        grid.ensure_rows(2);
        grid.ensure_not_empty();
        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 1);
    }

    #[test]
    fn test_fits_bounds_the_area() {
        let mut grid = SheetGrid::new();
        assert!(grid.fits(1024, 1024));
        assert!(!grid.fits(1024, 1025));
        assert!(grid.fits(MAX_GRID_CELLS, 0));
        assert!(!grid.fits(1_048_576, 16_384));

        grid.set(0, 2047, "wide");
        assert!(grid.fits(512, 1));
        assert!(!grid.fits(513, 1));
    }

    proptest! {
        #[test]
        fn prop_grid_stays_rectangular(
            writes in prop::collection::vec((0usize..40, 0usize..40, "[a-z]{0,3}"), 0..60)
        ) {
            let mut grid = SheetGrid::new();
            for (row, column, value) in &writes {
                grid.set(*row, *column, value.clone());
            }

            let max_row = writes.iter().map(|w| w.0 + 1).max().unwrap_or(0);
            let max_column = writes.iter().map(|w| w.1 + 1).max().unwrap_or(0);
            prop_assert_eq!(grid.row_count(), max_row);
            prop_assert_eq!(grid.column_count(), max_column);
            for row in grid.rows() {
                prop_assert_eq!(row.len(), grid.column_count());
            }
            if let Some((row, column, value)) = writes.last() {
                prop_assert_eq!(grid.get(*row, *column), Some(value.as_str()));
            }
        }
    }
}
