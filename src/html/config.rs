/// Configuration options for HTML conversion.
///
/// Controls the class attributes placed on generated elements and the text
/// of the empty-document placeholder. The defaults match the utility classes
/// used by the preview pane the fragments are injected into; an empty class
/// string omits the `class` attribute altogether.
///
/// # Examples
///
/// ```rust
/// use longan::html::HtmlOptions;
///
/// // Create with defaults
/// let options = HtmlOptions::default();
/// assert_eq!(options.paragraph_class, "mb-2 text-sm text-slate-800");
///
/// // Or customize
/// let options = HtmlOptions::plain()
///     .with_sheet_caption_class("caption")
///     .with_empty_document_text("Nothing to show");
/// assert!(options.paragraph_class.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Class of a top-level document paragraph
    pub paragraph_class: String,
    /// Class of a paragraph inside a table cell
    pub compact_paragraph_class: String,
    /// Class of a document table
    pub table_class: String,
    /// Class of a document table cell
    pub table_cell_class: String,
    /// Class of the worksheet table
    pub sheet_table_class: String,
    /// Class of the worksheet caption
    pub sheet_caption_class: String,
    /// Class of a worksheet cell
    pub sheet_cell_class: String,
    /// Class of the empty-document placeholder paragraph
    pub placeholder_class: String,
    /// Text of the empty-document placeholder paragraph
    pub empty_document_text: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            paragraph_class: "mb-2 text-sm text-slate-800".to_string(),
            compact_paragraph_class: "m-0 text-sm text-slate-800".to_string(),
            table_class: "mb-4 w-full border-collapse border border-slate-300 text-left".to_string(),
            table_cell_class: "border border-slate-300 px-2 py-1 align-top".to_string(),
            sheet_table_class: "w-full border-collapse text-left".to_string(),
            sheet_caption_class: "caption-top mb-2 text-left text-sm font-semibold text-slate-700"
                .to_string(),
            sheet_cell_class: "border border-slate-200 px-2 py-1 text-xs text-slate-700".to_string(),
            placeholder_class: "text-sm text-slate-600".to_string(),
            empty_document_text: "(Document contained no visible text)".to_string(),
        }
    }
}

impl HtmlOptions {
    /// Create a new `HtmlOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that produce the same markup without any class attributes.
    pub fn plain() -> Self {
        Self {
            paragraph_class: String::new(),
            compact_paragraph_class: String::new(),
            table_class: String::new(),
            table_cell_class: String::new(),
            sheet_table_class: String::new(),
            sheet_caption_class: String::new(),
            sheet_cell_class: String::new(),
            placeholder_class: String::new(),
            ..Self::default()
        }
    }

    /// Set the class of top-level paragraphs.
    #[inline]
    pub fn with_paragraph_class(mut self, class: impl Into<String>) -> Self {
        self.paragraph_class = class.into();
        self
    }

    /// Set the class of paragraphs inside table cells.
    #[inline]
    pub fn with_compact_paragraph_class(mut self, class: impl Into<String>) -> Self {
        self.compact_paragraph_class = class.into();
        self
    }

    /// Set the class of document tables.
    #[inline]
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    /// Set the class of document table cells.
    #[inline]
    pub fn with_table_cell_class(mut self, class: impl Into<String>) -> Self {
        self.table_cell_class = class.into();
        self
    }

    /// Set the class of the worksheet table.
    #[inline]
    pub fn with_sheet_table_class(mut self, class: impl Into<String>) -> Self {
        self.sheet_table_class = class.into();
        self
    }

    /// Set the class of the worksheet caption.
    #[inline]
    pub fn with_sheet_caption_class(mut self, class: impl Into<String>) -> Self {
        self.sheet_caption_class = class.into();
        self
    }

    /// Set the class of worksheet cells.
    #[inline]
    pub fn with_sheet_cell_class(mut self, class: impl Into<String>) -> Self {
        self.sheet_cell_class = class.into();
        self
    }

    /// Set the class of the empty-document placeholder.
    #[inline]
    pub fn with_placeholder_class(mut self, class: impl Into<String>) -> Self {
        self.placeholder_class = class.into();
        self
    }

    /// Set the text shown when a document has nothing to render.
    ///
    /// The text is HTML-escaped when written.
    #[inline]
    pub fn with_empty_document_text(mut self, text: impl Into<String>) -> Self {
        self.empty_document_text = text.into();
        self
    }
}
