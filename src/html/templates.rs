//! HTML fragments the renderer assembles its output from.
//!
//! Block and mark templates carry placeholders filled in by
//! [`customize`](super::customize):
//!
//! - `{number}`: block/mark number, used in ids and colored class names
//! - `{title}`: popup title
//! - `{nounicode}`: ASCII fallback class for the move marks

use super::escape::escape_html;
use super::messages::Messages;

const BLOCK_HANDLER: &str = "onmouseover=\"wikEdDiffBlockHandler(undefined, this, 'mouseover');\"";

/// Template table.
///
/// Built once from a [`Messages`] table, since several templates show a
/// message in their `title` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub no_change_start: String,
    pub no_change_end: String,

    pub container_start: String,
    pub container_end: String,

    pub fragment_start: String,
    pub fragment_end: String,
    pub separator: String,

    pub insert_start: String,
    pub insert_start_blank: String,
    pub insert_end: String,

    pub delete_start: String,
    pub delete_start_blank: String,
    pub delete_end: String,

    pub block_start: String,
    pub block_colored_start: String,
    pub block_end: String,

    pub mark_left: String,
    pub mark_left_colored: String,
    pub mark_right: String,
    pub mark_right_colored: String,

    pub omitted_chars: String,

    pub error_start: String,
    pub error_end: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self::new(&Messages::ENGLISH)
    }
}

impl Templates {
    /// Build the template table for a message table.
    pub fn new(messages: &Messages) -> Self {
        let same = escape_html(&messages.same);
        let insert = escape_html(&messages.insert);
        let delete = escape_html(&messages.delete);
        let error = escape_html(&messages.error);

        let mark = |class: &str| {
            format!(
                "<span class=\"{class}\" title=\"{{title}}\" id=\"wikEdDiffMark{{number}}\" {BLOCK_HANDLER}></span>"
            )
        };
        let block = |class: &str| {
            format!(
                "<span class=\"{class}\" title=\"{{title}}\" id=\"wikEdDiffBlock{{number}}\" {BLOCK_HANDLER}>"
            )
        };

        Self {
            no_change_start: format!("<div class=\"wikEdDiffNoChange\" title=\"{same}\">"),
            no_change_end: "</div>".to_string(),

            container_start: "<div class=\"wikEdDiffContainer\" id=\"wikEdDiffContainer\">"
                .to_string(),
            container_end: "</div>".to_string(),

            fragment_start: "<pre class=\"wikEdDiffFragment\" style=\"white-space: pre-wrap;\">"
                .to_string(),
            fragment_end: "</pre>".to_string(),
            separator: "<div class=\"wikEdDiffSeparator\"></div>".to_string(),

            insert_start: format!("<span class=\"wikEdDiffInsert\" title=\"{insert}\">"),
            insert_start_blank: format!(
                "<span class=\"wikEdDiffInsert wikEdDiffInsertBlank\" title=\"{insert}\">"
            ),
            insert_end: "</span>".to_string(),

            delete_start: format!("<span class=\"wikEdDiffDelete\" title=\"{delete}\">"),
            delete_start_blank: format!(
                "<span class=\"wikEdDiffDelete wikEdDiffDeleteBlank\" title=\"{delete}\">"
            ),
            delete_end: "</span>".to_string(),

            block_start: block("wikEdDiffBlock"),
            block_colored_start: block("wikEdDiffBlock wikEdDiffBlock{number}"),
            block_end: "</span>".to_string(),

            mark_left: mark("wikEdDiffMarkLeft{nounicode}"),
            mark_left_colored: mark(
                "wikEdDiffMarkLeft{nounicode} wikEdDiffMark wikEdDiffMark{number}",
            ),
            mark_right: mark("wikEdDiffMarkRight{nounicode}"),
            mark_right_colored: mark(
                "wikEdDiffMarkRight{nounicode} wikEdDiffMark wikEdDiffMark{number}",
            ),

            omitted_chars: "<span class=\"wikEdDiffOmittedChars\">…</span>".to_string(),

            error_start: format!("<div class=\"wikEdDiffError\" title=\"{error}\">"),
            error_end: "</div>".to_string(),
        }
    }
}
