//! XML reading and HTML escaping helpers shared by the converters.

pub mod escape;
pub mod reader;

pub use escape::{escape_html, resolve_entity};
pub use reader::PartReader;
