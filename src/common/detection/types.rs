//! Package kind enumeration.

use crate::ooxml::opc::constants::content_type;

/// The ZIP-based Office package kinds that can be previewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    /// Word-processing package (.docx)
    WordProcessing,
    /// Spreadsheet package (.xlsx)
    Spreadsheet,
}

impl PackageKind {
    /// Returns the canonical file extension for this kind.
    #[inline]
    pub fn extension(&self) -> &'static str {
        match self {
            PackageKind::WordProcessing => "docx",
            PackageKind::Spreadsheet => "xlsx",
        }
    }

    /// Maps a file extension (without the dot, any case) to a kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "docx" => Some(PackageKind::WordProcessing),
            "xlsx" => Some(PackageKind::Spreadsheet),
            _ => None,
        }
    }

    /// Maps a MIME content type to a kind by its OOXML markup family.
    pub fn from_content_type(mime: &str) -> Option<Self> {
        let mime = mime.to_ascii_lowercase();
        if mime.contains(content_type::WML_FRAGMENT) {
            Some(PackageKind::WordProcessing)
        } else if mime.contains(content_type::SML_FRAGMENT) {
            Some(PackageKind::Spreadsheet)
        } else {
            None
        }
    }

    /// Chooses a kind from a download's file name, falling back to its content type.
    ///
    /// The file name decides whenever it carries an extension (text after the
    /// last dot, ignoring any query string); the content type is consulted
    /// only for names without one.
    pub fn from_file_name(name: &str, content_type: Option<&str>) -> Option<Self> {
        let name = name.trim();
        let path = name.split('?').next().unwrap_or(name);
        match path.rfind('.') {
            Some(dot) if dot > 0 && dot < path.len() - 1 => Self::from_extension(&path[dot + 1..]),
            _ => content_type.and_then(Self::from_content_type),
        }
    }
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
