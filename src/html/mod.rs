//! HTML fragment generation for previews.
//!
//! The converters build a small model of the package (paragraphs and tables,
//! or a cell grid) and then write it through [`writer::HtmlWriter`]. All text
//! taken from the package is escaped before it reaches the output; the only
//! markup in a fragment is the markup written here.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use longan::html::HtmlOptions;
//! use longan::convert_word_to_html_with_options;
//!
//! let bytes = std::fs::read("report.docx")?;
//! let result = convert_word_to_html_with_options(&bytes, &HtmlOptions::plain())?;
//! println!("{}", result.html);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod traits;
pub(crate) mod writer;

pub use config::HtmlOptions;
pub use traits::ToHtml;
