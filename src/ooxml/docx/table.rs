/// Table, Row, and Cell structures for Word documents.
use crate::ooxml::docx::paragraph::Paragraph;
use smallvec::SmallVec;

/// A table in a Word document.
///
/// Represents a `<w:tbl>` element. Tables contain rows, which contain cells,
/// which contain paragraphs. Rows without cells are never stored.
///
/// # Example
///
/// ```rust
/// use longan::ooxml::docx::{Cell, Paragraph, Row, Run, Table};
///
/// let mut para = Paragraph::new();
/// para.push_run(Run::new("A1"));
/// let mut row = Row::new();
/// row.push_cell(Cell::from_paragraphs(vec![para]));
/// let mut table = Table::new();
/// table.push_row(row);
/// assert_eq!(table.row_count(), 1);
/// assert_eq!(table.rows()[0].cells()[0].text(), "A1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    rows: Vec<Row>,
}

impl Table {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row. Rows without cells are dropped.
    pub fn push_row(&mut self, row: Row) {
        if !row.cells.is_empty() {
            self.rows.push(row);
        }
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows left to render.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A row in a table (`<w:tr>`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: SmallVec<[Cell; 8]>,
}

impl Row {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

/// A cell in a table row (`<w:tc>`).
///
/// Holds every paragraph inside the cell in document order, including the
/// paragraphs of tables nested in it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    paragraphs: Vec<Paragraph>,
}

impl Cell {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn from_paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    #[inline]
    pub fn push_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    #[inline]
    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    /// Get the text of the cell, one line per paragraph.
    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
