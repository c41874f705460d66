/// Paragraph and Run structures for Word documents.
use smallvec::SmallVec;

/// A paragraph in a Word document.
///
/// Represents a `<w:p>` element as the ordered list of its runs.
///
/// # Example
///
/// ```rust
/// use longan::ooxml::docx::{Paragraph, Run};
///
/// let mut para = Paragraph::new();
/// para.push_run(Run::new("Hello, ").with_bold(true));
/// para.push_run(Run::new("world"));
/// assert_eq!(para.text(), "Hello, world");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    runs: SmallVec<[Run; 4]>,
}

impl Paragraph {
    /// Create an empty paragraph.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run.
    #[inline]
    pub fn push_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// The runs of this paragraph in document order.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Get the text content of this paragraph.
    ///
    /// Concatenates the text of all runs; line breaks become `\n`.
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.runs.iter().map(|r| r.text.len() + 1).sum());
        for run in &self.runs {
            text.push_str(&run.text);
            if run.line_break {
                text.push('\n');
            }
        }
        text
    }

    /// Whether any run produces output.
    ///
    /// A paragraph with nothing to render is written as a non-breaking space.
    #[inline]
    pub fn has_content(&self) -> bool {
        self.runs.iter().any(Run::has_content)
    }
}

/// A run within a paragraph.
///
/// Represents a `<w:r>` element: a stretch of text sharing one set of
/// character formatting, optionally followed by a line break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    text: String,
    bold: bool,
    italic: bool,
    underline: bool,
    line_break: bool,
}

impl Run {
    /// Create an unformatted run with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    #[inline]
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[inline]
    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    #[inline]
    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }

    #[inline]
    pub fn with_line_break(mut self, line_break: bool) -> Self {
        self.line_break = line_break;
        self
    }

    /// Get the text content of this run, exactly as stored.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn bold(&self) -> bool {
        self.bold
    }

    #[inline]
    pub fn italic(&self) -> bool {
        self.italic
    }

    #[inline]
    pub fn underline(&self) -> bool {
        self.underline
    }

    /// Whether the run contains a `<w:br>` or `<w:cr>` break.
    #[inline]
    pub fn line_break(&self) -> bool {
        self.line_break
    }

    /// Whether the run renders any text or a break.
    #[inline]
    pub fn has_content(&self) -> bool {
        !self.text.is_empty() || self.line_break
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn set_bold(&mut self, on: bool) {
        self.bold = on;
    }

    pub(crate) fn set_italic(&mut self, on: bool) {
        self.italic = on;
    }

    pub(crate) fn set_underline(&mut self, on: bool) {
        self.underline = on;
    }

    pub(crate) fn set_line_break(&mut self) {
        self.line_break = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_text() {
        let mut para = Paragraph::new();
        para.push_run(Run::new("one").with_line_break(true));
        para.push_run(Run::new(" two "));
        assert_eq!(para.text(), "one\n two ");
        assert!(para.has_content());
    }

    #[test]
    fn test_empty_runs_have_no_content() {
        let mut para = Paragraph::new();
        para.push_run(Run::new("").with_bold(true));
        assert!(!para.has_content());

        para.push_run(Run::new("").with_line_break(true));
        assert!(para.has_content());
    }
}
