//! Excel (.xlsx) spreadsheet support.
//!
//! Reads the first worksheet of a spreadsheet package into a rectangular
//! grid of display values and renders it as an HTML table captioned with the
//! sheet name.
//!
//! The path from package to grid is: workbook part (first `<sheet>`), its
//! relationships part (the sheet's `r:id`), the worksheet part, and the
//! optional shared strings part.
//!
//! # Example
//!
//! ```rust,no_run
//! use longan::ooxml::xlsx::Worksheet;
//!
//! let bytes = std::fs::read("workbook.xlsx")?;
//! let sheet = Worksheet::first_from_bytes(&bytes)?;
//! for row in sheet.grid().rows() {
//!     println!("{}", row.join("\t"));
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cell;
pub mod grid;
pub mod shared_strings;
pub mod workbook;
pub mod worksheet;

pub use cell::{column_index, column_letters, parse_cell_reference};
pub use grid::{MAX_GRID_CELLS, SheetGrid};
pub use shared_strings::SharedStringTable;
pub use workbook::SheetEntry;
pub use worksheet::{SheetHtml, Worksheet, convert_sheet_to_html, convert_sheet_to_html_with_options};
