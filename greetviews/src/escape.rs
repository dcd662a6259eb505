//! Minimal HTML escaping used by the rendered views
//!
//! This module provides `escape`, which replaces the HTML-significant
//! characters of a value before it is placed inside a page. It covers
//! text content and quoted attribute values; it is NOT a general-purpose
//! sanitizer and should not be used for script or style contexts.
//!
/// Replace HTML-significant characters with character references
///
/// Escapes `&`, `<`, `>`, `"` and `'` so caller-supplied values render
/// as text instead of markup.
///
/// # Arguments
/// * `input` - Raw value destined for a page body or attribute
pub fn escape(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
