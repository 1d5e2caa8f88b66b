//! Display strings used by the renderer.

use std::borrow::Cow;

/// Message table: notices and glyphs shown in the rendered diff.
///
/// Replace the table to localize the output; the templates built from it
/// pick up the new strings without code changes.
///
/// With the `serde` feature the table deserializes from JSON, and missing
/// keys fall back to [`Messages::ENGLISH`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Messages {
    /// Notice shown when the two versions are identical (default: "(No difference)")
    pub empty: Cow<'static, str>,

    /// Title of unchanged sections (default: "=")
    pub same: Cow<'static, str>,

    /// Title of insertions (default: "+")
    pub insert: Cow<'static, str>,

    /// Title of deletions (default: "-")
    pub delete: Cow<'static, str>,

    /// Title of blocks moved to the left (default: "◀")
    pub block_left: Cow<'static, str>,

    /// Title of blocks moved to the right (default: "▶")
    pub block_right: Cow<'static, str>,

    /// ASCII fallback for [`Messages::block_left`] (default: "<")
    pub block_left_nounicode: Cow<'static, str>,

    /// ASCII fallback for [`Messages::block_right`] (default: ">")
    pub block_right_nounicode: Cow<'static, str>,

    /// Title of the inconsistency indicator
    pub error: Cow<'static, str>,
}

impl Default for Messages {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl Messages {
    /// English messages.
    pub const ENGLISH: Self = Self {
        empty: Cow::Borrowed("(No difference)"),
        same: Cow::Borrowed("="),
        insert: Cow::Borrowed("+"),
        delete: Cow::Borrowed("-"),
        block_left: Cow::Borrowed("\u{25C0}"),  // ◀
        block_right: Cow::Borrowed("\u{25B6}"), // ▶
        block_left_nounicode: Cow::Borrowed("<"),
        block_right_nounicode: Cow::Borrowed(">"),
        error: Cow::Borrowed("Error: diff not consistent with versions!"),
    };

    /// Popup title of a left-pointing block start.
    pub fn block_left_title(&self, no_unicode_symbols: bool) -> &str {
        if no_unicode_symbols {
            &self.block_left_nounicode
        } else {
            &self.block_left
        }
    }

    /// Popup title of a right-pointing block start.
    pub fn block_right_title(&self, no_unicode_symbols: bool) -> &str {
        if no_unicode_symbols {
            &self.block_right_nounicode
        } else {
            &self.block_right
        }
    }
}
