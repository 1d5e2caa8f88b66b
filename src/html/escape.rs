//! Pure HTML escaping and whitespace visualization.
//!
//! Both transforms return [`Cow::Borrowed`] when the input has nothing to
//! replace, which is the common case for long unchanged spans.

use std::borrow::Cow;

use memchr::{memchr, memchr3};

/// Markup for a visualized newline.
pub const NEWLINE_HTML: &str = "<span class=\"wikEdDiffNewline\">\n</span>";

/// Markup for a visualized tab.
pub const TAB_HTML: &str =
    "<span class=\"wikEdDiffTab\"><span class=\"wikEdDiffTabSymbol\"></span>\t</span>";

/// Markup for a visualized space.
pub const SPACE_HTML: &str =
    "<span class=\"wikEdDiffSpace\"><span class=\"wikEdDiffSpaceSymbol\"></span> </span>";

/// Replace HTML-sensitive characters with character entities.
///
/// Handles `&`, `<`, `>` and `"`. Ampersands are always escaped, so escaping
/// already-escaped text turns `&lt;` into `&amp;lt;`.
///
/// # Examples
///
/// ```
/// use wikeddiff::html::escape_html;
///
/// assert_eq!(escape_html("a < b && \"c\""), "a &lt; b &amp;&amp; &quot;c&quot;");
/// assert_eq!(escape_html("plain"), "plain");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let first = match (memchr3(b'&', b'<', b'>', bytes), memchr(b'"', bytes)) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) | (None, Some(a)) => a,
        (None, None) => return Cow::Borrowed(text),
    };

    let mut result = String::with_capacity(text.len() + text.len() / 8 + 8);
    result.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Mark up tabs, and optionally spaces and newlines, for display.
///
/// Tabs are always wrapped in [`TAB_HTML`]. With `highlight` set (changed or
/// moved text), spaces become [`SPACE_HTML`] and newlines [`NEWLINE_HTML`];
/// ordinary unchanged text keeps them literal.
pub fn markup_blanks(text: &str, highlight: bool) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let first = if highlight {
        memchr3(b' ', b'\n', b'\t', bytes)
    } else {
        memchr(b'\t', bytes)
    };
    let Some(first) = first else {
        return Cow::Borrowed(text);
    };

    let mut result = String::with_capacity(text.len() * 2);
    result.push_str(&text[..first]);
    for c in text[first..].chars() {
        match c {
            '\t' => result.push_str(TAB_HTML),
            ' ' if highlight => result.push_str(SPACE_HTML),
            '\n' if highlight => result.push_str(NEWLINE_HTML),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
