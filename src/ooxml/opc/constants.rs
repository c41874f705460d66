/// Constant values related to the Open Packaging Convention.
///
/// This module contains the fixed part names the converters fetch, the
/// content types used to recognize packages, and relationship types.

/// Well-known part names, as stored in the ZIP central directory (no leading slash)
pub mod part_name {
    /// Main document part of a word-processing package
    pub const WORD_DOCUMENT: &str = "word/document.xml";
    /// Workbook part of a spreadsheet package
    pub const WORKBOOK: &str = "xl/workbook.xml";
    /// Relationships of the workbook part
    pub const WORKBOOK_RELS: &str = "xl/_rels/workbook.xml.rels";
    /// Shared string table of a spreadsheet package
    pub const SHARED_STRINGS: &str = "xl/sharedStrings.xml";
    /// Directory worksheet relationship targets are resolved against
    pub const WORKSHEET_ROOT: &str = "xl";
}

/// Content type fragments that identify a package's main part
pub mod content_type {
    pub const WML_FRAGMENT: &str = "wordprocessingml";
    pub const SML_FRAGMENT: &str = "spreadsheetml";
}

/// Relationship types used between workbook and worksheet parts
pub mod relationship_type {
    pub const WORKSHEET: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";
}

/// Relationship target modes (`Internal` is the default when absent)
pub mod target_mode {
    pub const EXTERNAL: &str = "External";
}
