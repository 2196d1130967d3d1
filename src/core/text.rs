//! String helpers shared by the comment generators.
//!
//! Everything here measures text in `char`s, not bytes, so operands such as
//! `offset Ärger` line up the same way they would in an editor.

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Split `text` on every line boundary (`\n`, `\r`, form feeds, unicode
/// line/paragraph separators, ...). `\r\n` yields an extra empty piece, which
/// callers skip along with other blank lines.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Append a period unless `text` already ends with one.
pub fn with_period(mut text: String) -> String {
    if !text.ends_with('.') {
        text.push('.');
    }
    text
}

/// Center `text` in a field of `width` characters.
///
/// When the margin is odd the extra space goes left only if `width` is odd
/// too, so `"x"` in 8 columns is `"   x    "`.
pub fn center(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;

    let mut out = String::with_capacity(text.len() + margin);
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(right));
    out
}

/// A `; ` comment line filled with `fill` so that it is `width` characters long.
pub fn border(fill: char, width: usize) -> String {
    let mut line = String::from("; ");
    line.extend(std::iter::repeat(fill).take(width.saturating_sub(2)));
    line
}
