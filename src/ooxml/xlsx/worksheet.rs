//! Worksheet parsing and the spreadsheet conversion entry points.

use quick_xml::events::{BytesStart, Event};
use soapberry_zip::office::{ArchiveOptions, ArchiveReader};

use crate::common::xml::reader::{PartReader, attribute, is_local, is_local_end};
use crate::common::{Error, Result};
use crate::html::writer::HtmlWriter;
use crate::html::{HtmlOptions, ToHtml};
use crate::ooxml::opc::constants::part_name;
use crate::ooxml::xlsx::cell::{column_letters, parse_cell_reference, parse_row_number};
use crate::ooxml::xlsx::grid::{MAX_GRID_CELLS, SheetGrid};
use crate::ooxml::xlsx::shared_strings::SharedStringTable;
use crate::ooxml::xlsx::workbook::locate_first_worksheet;

/// The first worksheet of a workbook: its name and its display grid.
///
/// # Examples
///
/// ```rust,no_run
/// use longan::ooxml::xlsx::Worksheet;
///
/// let bytes = std::fs::read("budget.xlsx")?;
/// let sheet = Worksheet::first_from_bytes(&bytes)?;
/// println!("{}: {}x{}", sheet.name(), sheet.grid().row_count(), sheet.grid().column_count());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worksheet {
    name: String,
    grid: SheetGrid,
}

impl Worksheet {
    /// Read the first worksheet of a spreadsheet package.
    pub fn first_from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::first_from_bytes_with_options(bytes, ArchiveOptions::default())
    }

    /// Read the first worksheet, reading the container with `archive_options`.
    pub fn first_from_bytes_with_options(
        bytes: &[u8],
        archive_options: ArchiveOptions,
    ) -> Result<Self> {
        let archive = ArchiveReader::with_options(bytes, archive_options)?;
        Self::first_from_archive(&archive)
    }

    /// Read the first worksheet of an opened package.
    ///
    /// Sheets after the first are never read.
    pub fn first_from_archive(archive: &ArchiveReader<'_>) -> Result<Self> {
        let (name, part) = locate_first_worksheet(archive)?;
        let sheet_xml = archive
            .read_string(&part)?
            .ok_or_else(|| Error::MissingPart(part.clone()))?;

        let shared_strings = match archive.read_string(part_name::SHARED_STRINGS)? {
            Some(xml) => SharedStringTable::parse(part_name::SHARED_STRINGS, &xml)?,
            None => SharedStringTable::new(),
        };

        let grid = parse_grid(&part, &sheet_xml, &shared_strings)?;
        log::debug!(
            "{}: {} rows x {} columns",
            part,
            grid.row_count(),
            grid.column_count()
        );
        Ok(Self { name, grid })
    }

    /// The sheet's declared name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn grid(&self) -> &SheetGrid {
        &self.grid
    }
}

impl ToHtml for Worksheet {
    fn to_html_with_options(&self, options: &HtmlOptions) -> String {
        let mut writer = HtmlWriter::new(options);
        writer.write_sheet(&self.grid, Some(&self.name));
        writer.finish()
    }
}

/// Result of converting a spreadsheet package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetHtml {
    /// Name of the converted sheet, unescaped
    pub sheet_name: String,
    /// HTML table with the sheet name as caption
    pub html: String,
}

/// Convert the first worksheet of a spreadsheet package to an HTML table.
///
/// # Examples
///
/// ```rust,no_run
/// let bytes = std::fs::read("budget.xlsx")?;
/// let preview = longan::convert_sheet_to_html(&bytes)?;
/// println!("{}", preview.sheet_name);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert_sheet_to_html(bytes: &[u8]) -> Result<SheetHtml> {
    convert_sheet_to_html_with_options(bytes, &HtmlOptions::default())
}

/// Convert the first worksheet to an HTML table with custom options.
///
/// The container is read with the default [`ArchiveOptions`]; use
/// [`Worksheet::first_from_bytes_with_options`] and
/// [`ToHtml::to_html_with_options`] to read it leniently.
pub fn convert_sheet_to_html_with_options(bytes: &[u8], options: &HtmlOptions) -> Result<SheetHtml> {
    let sheet = Worksheet::first_from_bytes(bytes)?;
    let html = sheet.to_html_with_options(options);
    Ok(SheetHtml {
        sheet_name: sheet.name,
        html,
    })
}

/// How a cell's value is stored, from its `t` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    SharedString,
    InlineString,
    Raw,
}

/// A `<c>` element being read.
struct PendingCell {
    position: Option<(usize, usize)>,
    kind: CellKind,
    value: Option<String>,
    inline: String,
}

/// Parse a worksheet part into a grid of display values.
///
/// Cells are placed by their reference. A cell without one follows the
/// previous cell of its row; a row without `r` follows the previous row.
pub(crate) fn parse_grid(part: &str, xml: &str, shared: &SharedStringTable) -> Result<SheetGrid> {
    let mut reader = PartReader::new(part, xml);
    let mut grid = SheetGrid::new();

    let mut row: Option<usize> = None;
    let mut next_column = 0usize;
    let mut cell: Option<PendingCell> = None;
    let mut in_value = false;
    let mut in_text = false;
    let mut phonetic_depth = 0usize;

    loop {
        let event = reader.next_event()?;
        match &event {
            Event::Start(e) | Event::Empty(e) => {
                let empty = matches!(event, Event::Empty(_));
                if is_local(e, b"row") {
                    let index = match attribute(e, b"r") {
                        Some(r) => parse_row_number(&r).map(|n| n as usize),
                        None => None,
                    }
                    .unwrap_or_else(|| row.map_or(0, |r| r + 1));
                    if grid.fits(index + 1, 0) {
                        grid.ensure_rows(index + 1);
                    }
                    row = Some(index);
                    next_column = 0;
                } else if is_local(e, b"c") {
                    let pending = begin_cell(part, e, row.unwrap_or(0), next_column);
                    if let Some((_, column)) = pending.position {
                        next_column = column + 1;
                    }
                    if empty {
                        place_cell(&mut grid, pending, shared);
                    } else {
                        cell = Some(pending);
                    }
                } else if let Some(pending) = cell.as_ref() {
                    if empty {
                        continue;
                    }
                    if is_local(e, b"rPh") {
                        phonetic_depth += 1;
                    } else if is_local(e, b"v") && pending.value.is_none() {
                        in_value = true;
                    } else if is_local(e, b"t") && phonetic_depth == 0 {
                        in_text = true;
                    }
                }
            },
            Event::End(e) => {
                let name = e.name();
                if is_local_end(name, b"c") {
                    if let Some(pending) = cell.take() {
                        place_cell(&mut grid, pending, shared);
                    }
                    in_value = false;
                    in_text = false;
                    phonetic_depth = 0;
                } else if is_local_end(name, b"v") && in_value {
                    in_value = false;
                    if let Some(pending) = cell.as_mut() {
                        pending.value.get_or_insert_with(String::new);
                    }
                } else if is_local_end(name, b"t") {
                    in_text = false;
                } else if is_local_end(name, b"rPh") {
                    phonetic_depth = phonetic_depth.saturating_sub(1);
                }
            },
            Event::Eof => break,
            _ => {
                if let (Some(pending), Some(text)) = (cell.as_mut(), reader.text_of(&event)) {
                    if in_value {
                        pending.value.get_or_insert_with(String::new).push_str(&text);
                    } else if in_text {
                        pending.inline.push_str(&text);
                    }
                }
            },
        }
    }

    grid.ensure_not_empty();
    Ok(grid)
}

fn begin_cell(part: &str, e: &BytesStart<'_>, row: usize, next_column: usize) -> PendingCell {
    let position = match attribute(e, b"r") {
        Some(reference) => match parse_cell_reference(&reference) {
            Some((column, row)) => Some((row as usize, column as usize)),
            None => {
                log::warn!("{}: skipping cell with invalid reference {:?}", part, reference);
                None
            },
        },
        None => Some((row, next_column)),
    };
    let kind = match attribute(e, b"t").as_deref() {
        Some("s") => CellKind::SharedString,
        Some("inlineStr") => CellKind::InlineString,
        _ => CellKind::Raw,
    };
    PendingCell {
        position,
        kind,
        value: None,
        inline: String::new(),
    }
}

fn place_cell(grid: &mut SheetGrid, cell: PendingCell, shared: &SharedStringTable) {
    let Some((row, column)) = cell.position else {
        return;
    };
    if !grid.fits(row + 1, column + 1) {
        log::warn!(
            "skipping cell at row {}, column {}: grid would exceed {} cells",
            row + 1,
            column_letters(column as u32),
            MAX_GRID_CELLS
        );
        return;
    }
    let value = match cell.kind {
        CellKind::SharedString => {
            let raw = cell.value.unwrap_or_default();
            let index = atoi_simd::parse::<usize, false, false>(raw.trim().as_bytes()).ok();
            match index.and_then(|i| shared.get(i)) {
                Some(text) => text.to_string(),
                None => {
                    log::warn!("shared string {:?} not found, using empty text", raw);
                    String::new()
                },
            }
        },
        CellKind::InlineString => cell.inline,
        CellKind::Raw => cell.value.unwrap_or_default(),
    };
    grid.set(row, column, value);
}
