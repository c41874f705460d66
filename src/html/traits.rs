//! Core trait for HTML conversion.

use super::config::HtmlOptions;

/// Types that render to an HTML fragment.
///
/// Implemented by the parsed document and worksheet models. Rendering never
/// fails: every model value has a fragment.
///
/// # Examples
///
/// ```rust
/// use longan::html::{HtmlOptions, ToHtml};
/// use longan::ooxml::xlsx::SheetGrid;
///
/// let mut grid = SheetGrid::new();
/// grid.set(0, 0, "a < b");
/// assert_eq!(
///     grid.to_html_with_options(&HtmlOptions::plain()),
///     "<table><tbody><tr><td>a &lt; b</td></tr></tbody></table>"
/// );
/// ```
pub trait ToHtml {
    /// Convert this item to HTML with default options.
    fn to_html(&self) -> String {
        self.to_html_with_options(&HtmlOptions::default())
    }

    /// Convert this item to HTML with custom options.
    fn to_html_with_options(&self, options: &HtmlOptions) -> String;
}
