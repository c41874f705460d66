//! Fixture packages for unit tests, built with the `zip` crate's writer.

use std::io::{Cursor, Write};

use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::common::xml::escape_html;

pub(crate) const WML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Build a deflated package holding `parts` in order.
pub(crate) fn build_package(parts: &[(&str, &str)]) -> Vec<u8> {
    build_package_with(parts, CompressionMethod::Deflated)
}

pub(crate) fn build_package_with(parts: &[(&str, &str)], method: CompressionMethod) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(method);
    for (name, content) in parts {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// A word-processing package whose body holds `body`.
pub(crate) fn docx(body: &str) -> Vec<u8> {
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
        WML_NS, body
    );
    build_package(&[
        ("[Content_Types].xml", "<Types/>"),
        ("word/document.xml", &document),
    ])
}

/// A spreadsheet package with one sheet named `sheet_name`.
///
/// `sheet_data` is placed inside `<sheetData>`; `shared` becomes the shared
/// strings part when given.
pub(crate) fn xlsx(sheet_name: &str, sheet_data: &str, shared: Option<&[&str]>) -> Vec<u8> {
    let workbook = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/><sheet name="Second" sheetId="2" r:id="rId2"/></sheets></workbook>"#,
        escape_html(sheet_name)
    );
    let rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet2.xml"/><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;
    let sheet = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
        sheet_data
    );
    let second = r#"<worksheet><sheetData><row r="1"><c r="A1"><v>second</v></c></row></sheetData></worksheet>"#;

    let mut parts = vec![
        ("xl/workbook.xml", workbook.as_str()),
        ("xl/_rels/workbook.xml.rels", rels),
        ("xl/worksheets/sheet1.xml", sheet.as_str()),
        ("xl/worksheets/sheet2.xml", second),
    ];
    let shared_xml = shared.map(|strings| {
        let items: String = strings
            .iter()
            .map(|s| format!("<si><t>{}</t></si>", escape_html(s)))
            .collect();
        format!(r#"<sst count="{0}" uniqueCount="{0}">{1}</sst>"#, strings.len(), items)
    });
    if let Some(xml) = shared_xml.as_deref() {
        parts.push(("xl/sharedStrings.xml", xml));
    }
    build_package(&parts)
}

/// Declare a central directory one byte shorter than the records written,
/// so the directory walk ends past the recorded directory end.
pub(crate) fn shorten_directory(mut bytes: Vec<u8>) -> Vec<u8> {
    let eocd = bytes.len() - 22;
    let size = u32::from_le_bytes(bytes[eocd + 12..eocd + 16].try_into().unwrap());
    bytes[eocd + 12..eocd + 16].copy_from_slice(&(size - 1).to_le_bytes());
    bytes
}
