//! XML text escaping for generated WordprocessingML parts.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use std::borrow::Cow;

static XML_ESCAPER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::new(["&", "<", ">", "\"", "'"]).expect("static escape patterns are valid")
});

const REPLACEMENTS: [&str; 5] = ["&amp;", "&lt;", "&gt;", "&quot;", "&apos;"];

/// Characters XML 1.0 cannot carry at all, even escaped.
#[inline]
fn is_forbidden(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{B}' | '\u{C}' | '\u{E}'..='\u{1F}' | '\u{FFFE}' | '\u{FFFF}')
}

/// Escape XML special characters and drop characters XML cannot represent.
///
/// Form text is pasted from arbitrary sources, so stray control characters
/// are removed rather than producing a package Word refuses to open.
///
/// # Examples
///
/// ```
/// use usecase_docgen::common::xml::escape_xml;
/// assert_eq!(escape_xml("a & b"), "a &amp; b");
/// assert_eq!(escape_xml("<tag>\"hi\"</tag>"), "&lt;tag&gt;&quot;hi&quot;&lt;/tag&gt;");
/// assert_eq!(escape_xml("bell\u{7}"), "bell");
/// ```
#[inline]
pub fn escape_xml(s: &str) -> String {
    let cleaned: Cow<'_, str> = if s.chars().any(is_forbidden) {
        Cow::Owned(s.chars().filter(|c| !is_forbidden(*c)).collect())
    } else {
        Cow::Borrowed(s)
    };
    XML_ESCAPER.replace_all(&cleaned, &REPLACEMENTS)
}
