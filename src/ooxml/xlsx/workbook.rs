//! Workbook part: locating the first worksheet.

use quick_xml::events::Event;
use soapberry_zip::office::ArchiveReader;

use crate::common::xml::reader::{PartReader, attribute, is_local, prefixed_attribute};
use crate::common::{Error, Result};
use crate::ooxml::opc::constants::{part_name, relationship_type};
use crate::ooxml::opc::rel::{Relationships, resolve_target};

/// Name used when the first sheet declares none.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// The first `<sheet>` declared by a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetEntry {
    /// Display name of the sheet
    pub name: String,
    /// Relationship id (`r:id`) pointing at the worksheet part
    pub relationship_id: Option<String>,
}

/// Find the first declared sheet in the workbook part.
///
/// The whole part is read, so later syntax errors still fail the parse.
pub fn first_sheet(part: &str, xml: &str) -> Result<SheetEntry> {
    let mut reader = PartReader::new(part, xml);
    let mut first = None;

    loop {
        match reader.next_event()? {
            Event::Start(e) | Event::Empty(e) if first.is_none() && is_local(&e, b"sheet") => {
                first = Some(SheetEntry {
                    name: attribute(&e, b"name").unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
                    relationship_id: prefixed_attribute(&e, b"id"),
                });
            },
            Event::Eof => break,
            _ => {},
        }
    }

    first.ok_or(Error::NoWorksheets)
}

/// Locate the first worksheet of an opened package.
///
/// Returns the sheet's name and the ZIP entry name of its worksheet part.
pub fn locate_first_worksheet(archive: &ArchiveReader<'_>) -> Result<(String, String)> {
    let workbook_xml = archive
        .read_string(part_name::WORKBOOK)?
        .ok_or_else(|| Error::MissingPart(part_name::WORKBOOK.to_string()))?;
    let sheet = first_sheet(part_name::WORKBOOK, &workbook_xml)?;

    let r_id = sheet.relationship_id.ok_or_else(|| {
        Error::MissingRelationship(format!("sheet '{}' has no relationship id", sheet.name))
    })?;

    let rels_xml = archive
        .read_string(part_name::WORKBOOK_RELS)?
        .ok_or_else(|| Error::MissingPart(part_name::WORKBOOK_RELS.to_string()))?;
    let rels = Relationships::parse(part_name::WORKBOOK_RELS, &rels_xml)?;
    let rel = rels
        .get(&r_id)
        .ok_or_else(|| Error::MissingRelationship(r_id.clone()))?;

    if rel.is_external() {
        return Err(Error::MissingRelationship(format!(
            "{} targets {} outside the package",
            r_id,
            rel.target_ref()
        )));
    }

    if !rel.reltype().is_empty() && rel.reltype() != relationship_type::WORKSHEET {
        log::warn!(
            "{}: {} has type {}, reading it as a worksheet",
            part_name::WORKBOOK_RELS,
            r_id,
            rel.reltype()
        );
    }

    let part = worksheet_part_name(archive, rel.target_ref());
    log::debug!("sheet '{}' ({}) resolves to {}", sheet.name, r_id, part);
    Ok((sheet.name, part))
}

/// Resolve a worksheet relationship target to a ZIP entry name.
///
/// Targets are placed under `xl/`, whether or not they carry a leading
/// slash. A slash-prefixed target that already names a package part (for
/// example `/xl/worksheets/sheet1.xml`) is used as-is when only that entry
/// exists.
fn worksheet_part_name(archive: &ArchiveReader<'_>, target: &str) -> String {
    let resolved = resolve_target(part_name::WORKSHEET_ROOT, target);
    if !archive.contains(resolved.membername()) {
        if let Some(rooted) = target.strip_prefix('/') {
            if archive.contains(rooted) {
                return rooted.to_string();
            }
        }
    }
    resolved.membername().to_string()
}
