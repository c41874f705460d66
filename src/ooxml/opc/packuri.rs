/// Package URIs and their mapping to ZIP entry names.
///
/// A PackURI is a part name within an OPC package. It always begins with a
/// forward slash; the ZIP entry name (the "membername") drops that slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackURI {
    /// The full pack URI string (e.g., "/xl/worksheets/sheet1.xml")
    uri: String,
}

impl PackURI {
    /// Resolve a relationship target against a base directory.
    ///
    /// `"worksheets/sheet1.xml"` against `"/xl"` gives
    /// `"/xl/worksheets/sheet1.xml"`; `..` and `.` segments are collapsed and
    /// never climb above the package root.
    pub fn from_rel_ref(base_uri: &str, relative_ref: &str) -> Self {
        let joined = Self::join_paths(base_uri, relative_ref);
        PackURI {
            uri: Self::normalize_path(&joined),
        }
    }

    /// The ZIP entry name for this part (leading slash stripped).
    #[inline]
    pub fn membername(&self) -> &str {
        &self.uri[1..]
    }

    fn join_paths(base: &str, relative: &str) -> String {
        let base = base.trim_end_matches('/');
        if base.is_empty() {
            format!("/{}", relative.trim_start_matches('/'))
        } else {
            format!("{}/{}", base, relative.trim_start_matches('/'))
        }
    }

    fn normalize_path(path: &str) -> String {
        let mut segments: Vec<&str> = Vec::new();
        for segment in path.split('/') {
            match segment {
                "" | "." => {},
                ".." => {
                    segments.pop();
                },
                s => segments.push(s),
            }
        }
        format!("/{}", segments.join("/"))
    }
}

impl std::fmt::Display for PackURI {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rel_ref() {
        let uri = PackURI::from_rel_ref("/xl", "worksheets/sheet1.xml");
        assert_eq!(uri.to_string(), "/xl/worksheets/sheet1.xml");
        assert_eq!(uri.membername(), "xl/worksheets/sheet1.xml");

        let uri = PackURI::from_rel_ref("/xl", "./worksheets/../worksheets/sheet2.xml");
        assert_eq!(uri.membername(), "xl/worksheets/sheet2.xml");

        let uri = PackURI::from_rel_ref("/xl", "../../../escape.xml");
        assert_eq!(uri.membername(), "escape.xml");
    }
}
