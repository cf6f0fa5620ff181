//! List marker detection and literal marker generation.
//!
//! User text often arrives pre-numbered (`1. rule`, `a) detail`). Numbered
//! paragraphs must not repeat such markers, and test-case preconditions use
//! them to infer nesting.

/// Kind of leading list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `1.`, `12)`
    Numeric,
    /// `a.`, `B)`
    Letter,
    /// `iv.`, `ii)`
    Roman,
    /// `-`, `*`, `•`
    Glyph,
}

const GLYPHS: [char; 4] = ['-', '*', '\u{2022}', '\u{2013}'];

fn is_roman(s: &str) -> bool {
    !s.is_empty()
        && (s.chars().all(|c| "ivxlcdm".contains(c)) || s.chars().all(|c| "IVXLCDM".contains(c)))
}

/// Detect a leading list marker, returning its kind and the remaining text.
///
/// Single `i`, `v` and `x` leaders are read as roman numerals.
pub fn detect(text: &str) -> Option<(MarkerKind, &str)> {
    let trimmed = text.trim_start();

    for glyph in GLYPHS {
        if let Some(rest) = trimmed.strip_prefix(glyph)
            && rest.starts_with(char::is_whitespace)
        {
            return Some((MarkerKind::Glyph, rest.trim_start()));
        }
    }

    // ASCII only, so the char count is also the byte length
    let leader_len = trimmed
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .count();
    if leader_len == 0 || leader_len > 4 {
        return None;
    }
    let leader = &trimmed[..leader_len];

    let kind = if leader.chars().all(|c| c.is_ascii_digit()) {
        MarkerKind::Numeric
    } else if (leader_len > 1 || "ivxIVX".contains(leader)) && is_roman(leader) {
        MarkerKind::Roman
    } else if leader_len == 1 {
        MarkerKind::Letter
    } else {
        return None;
    };

    let rest = &trimmed[leader_len..];
    let rest = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')'))?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some((kind, rest.trim_start()))
    } else {
        None
    }
}

/// Remove a leading list marker, if any.
pub fn strip_list_marker(text: &str) -> &str {
    match detect(text) {
        Some((_, rest)) => rest,
        None => text,
    }
}

/// Lowercase letter label: 1 → `a`, 26 → `z`, 27 → `aa`.
pub fn letter_label(mut n: u32) -> String {
    let mut label = Vec::new();
    while n > 0 {
        n -= 1;
        label.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// Lowercase roman numeral: 4 → `iv`.
pub fn roman_label(mut n: u32) -> String {
    const TABLE: [(u32, &str); 13] = [
        (1000, "m"),
        (900, "cm"),
        (500, "d"),
        (400, "cd"),
        (100, "c"),
        (90, "xc"),
        (50, "l"),
        (40, "xl"),
        (10, "x"),
        (9, "ix"),
        (5, "v"),
        (4, "iv"),
        (1, "i"),
    ];
    let mut out = String::new();
    for (value, numeral) in TABLE {
        while n >= value {
            out.push_str(numeral);
            n -= value;
        }
    }
    out
}
