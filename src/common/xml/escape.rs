use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;

// Static initialization: automaton is built only once, thread-safe
static HTML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">", "\"", "'"]).expect("Failed to build HTML escaper")
});

const HTML_REPLACEMENTS: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&#39;"];

/// Escape text for use in HTML element content or attribute values.
///
/// # Examples
///
/// ```
/// use longan::common::xml::escape_html;
/// assert_eq!(escape_html("a & b"), "a &amp; b");
/// assert_eq!(escape_html("<b>'hi'</b>"), "&lt;b&gt;&#39;hi&#39;&lt;/b&gt;");
/// ```
#[inline]
pub fn escape_html(s: &str) -> String {
    HTML_ESCAPER.replace_all(s, &HTML_REPLACEMENTS)
}

/// Resolve a predefined XML entity or character reference by name.
///
/// `name` is the text between `&` and `;`. Returns `None` for unknown
/// entities and invalid code points.
pub fn resolve_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        _ => {
            let reference = name.strip_prefix('#')?;
            let code = match reference.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => reference.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_all_specials() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
        assert_eq!(escape_html("  keeps  spacing "), "  keeps  spacing ");
    }

    #[test]
    fn test_resolve_entity() {
        assert_eq!(resolve_entity("amp"), Some('&'));
        assert_eq!(resolve_entity("apos"), Some('\''));
        assert_eq!(resolve_entity("#65"), Some('A'));
        assert_eq!(resolve_entity("#x263A"), Some('\u{263A}'));
        assert_eq!(resolve_entity("#xD800"), None);
        assert_eq!(resolve_entity("nbsp"), None);
    }
}
