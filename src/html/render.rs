//! Fragment list → HTML rendering.
//!
//! A single left-to-right pass maps every fragment to its markup and
//! concatenates the results. No I/O is performed here.

use std::sync::LazyLock;

use log::{debug, trace};

use crate::fragment::{Fragment, FragmentKind};

use super::customize::customize;
use super::escape::{escape_html, markup_blanks};
use super::messages::Messages;
use super::templates::Templates;

/// Render settings.
///
/// # Examples
///
/// ```
/// use wikeddiff::RenderOptions;
///
/// let options = RenderOptions::new()
///     .with_colored_blocks(true)
///     .with_no_unicode_symbols(true);
/// assert!(options.show_block_moves);
/// assert!(options.colored_blocks);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Show moved blocks highlighted, with marks at their original positions.
    /// When off, moved text is shown as a deletion at its original position.
    pub show_block_moves: bool,
    /// Give every moved block its own color.
    pub colored_blocks: bool,
    /// Use ASCII instead of Unicode arrows for block moves.
    pub no_unicode_symbols: bool,
    /// Wrap the output in the inconsistency indicator.
    pub error: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_block_moves: true,
            colored_blocks: false,
            no_unicode_symbols: false,
            error: false,
        }
    }
}

impl RenderOptions {
    /// Default options: block moves shown, uniform block color, Unicode
    /// symbols, no error indicator.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_block_moves(mut self, show: bool) -> Self {
        self.show_block_moves = show;
        self
    }

    pub fn with_colored_blocks(mut self, colored: bool) -> Self {
        self.colored_blocks = colored;
        self
    }

    pub fn with_no_unicode_symbols(mut self, no_unicode: bool) -> Self {
        self.no_unicode_symbols = no_unicode;
        self
    }

    pub fn with_error(mut self, error: bool) -> Self {
        self.error = error;
        self
    }
}

/// Renders fragment lists with a fixed message and template table.
///
/// The formatter is immutable once built, so one instance can serve any
/// number of concurrent renders.
#[derive(Debug, Clone, Default)]
pub struct HtmlFormatter {
    messages: Messages,
    templates: Templates,
}

static ENGLISH: LazyLock<HtmlFormatter> = LazyLock::new(HtmlFormatter::new);

/// Render a fragment list with the English message table.
///
/// # Examples
///
/// ```
/// use wikeddiff::{Fragment, FragmentKind, RenderOptions, render_html};
///
/// let fragments = vec![
///     Fragment::marker(FragmentKind::ContainerStart),
///     Fragment::marker(FragmentKind::FragmentStart),
///     Fragment::new(FragmentKind::Same, "a ", 0),
///     Fragment::new(FragmentKind::Insert, "b", 0),
///     Fragment::marker(FragmentKind::FragmentEnd),
///     Fragment::marker(FragmentKind::ContainerEnd),
/// ];
/// let html = render_html(&fragments, &RenderOptions::default());
/// assert!(html.contains("a <span class=\"wikEdDiffInsert wikEdDiffInsertBlank\" title=\"+\">b</span>"));
/// ```
pub fn render_html(fragments: &[Fragment], options: &RenderOptions) -> String {
    ENGLISH.format(fragments, options)
}

impl HtmlFormatter {
    /// Formatter with the English message table.
    pub fn new() -> Self {
        Self::with_messages(Messages::ENGLISH)
    }

    /// Formatter with a custom (e.g. localized) message table.
    pub fn with_messages(messages: Messages) -> Self {
        let templates = Templates::new(&messages);
        Self {
            messages,
            templates,
        }
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn templates(&self) -> &Templates {
        &self.templates
    }

    /// Render a fragment list to HTML.
    ///
    /// The canonical "no difference" list (container, group, one unchanged
    /// fragment, group end, container end) renders as the no-change notice
    /// whatever its text.
    pub fn format(&self, fragments: &[Fragment], options: &RenderOptions) -> String {
        debug!(
            "rendering {} fragments (block moves: {}, colored: {}, no unicode: {}, error: {})",
            fragments.len(),
            options.show_block_moves,
            options.colored_blocks,
            options.no_unicode_symbols,
            options.error
        );

        if is_unchanged(fragments) {
            debug!("no difference, rendering notice");
            return self.no_change_html();
        }

        let t = &self.templates;
        let mut html = String::with_capacity(fragments.iter().map(|f| f.text.len() + 64).sum());

        if options.error {
            html.push_str(&t.error_start);
        }
        for fragment in fragments {
            trace!("{fragment}");
            self.write_fragment(&mut html, fragment, options);
        }
        if options.error {
            html.push_str(&t.error_end);
        }

        html
    }

    fn no_change_html(&self) -> String {
        let t = &self.templates;
        format!(
            "{}{}{}{}{}",
            t.container_start,
            t.no_change_start,
            escape_html(&self.messages.empty),
            t.no_change_end,
            t.container_end
        )
    }

    fn write_fragment(&self, out: &mut String, fragment: &Fragment, options: &RenderOptions) {
        let t = &self.templates;
        let text = fragment.text.as_str();
        let color = fragment.color;
        let no_unicode = options.no_unicode_symbols;

        match fragment.kind {
            FragmentKind::ContainerStart => out.push_str(&t.container_start),
            FragmentKind::ContainerEnd => out.push_str(&t.container_end),
            FragmentKind::FragmentStart => out.push_str(&t.fragment_start),
            FragmentKind::FragmentEnd => out.push_str(&t.fragment_end),
            FragmentKind::Separator => out.push_str(&t.separator),
            FragmentKind::Omission => out.push_str(&t.omitted_chars),
            FragmentKind::OmissionSpaceBefore => {
                out.push(' ');
                out.push_str(&t.omitted_chars);
            }
            FragmentKind::OmissionSpaceAfter => {
                out.push_str(&t.omitted_chars);
                out.push(' ');
            }
            FragmentKind::Same => {
                out.push_str(&markup_blanks(&escape_html(text), fragment.is_in_block()));
            }
            FragmentKind::Delete => self.write_deletion(out, text),
            FragmentKind::Insert => {
                let start = if is_blank(text) {
                    &t.insert_start_blank
                } else {
                    &t.insert_start
                };
                write_change(out, start, text, &t.insert_end);
            }
            FragmentKind::MarkLeft | FragmentKind::MarkRight if !options.show_block_moves => {
                self.write_deletion(out, text);
            }
            FragmentKind::MarkLeft => {
                let template = if options.colored_blocks {
                    &t.mark_left_colored
                } else {
                    &t.mark_left
                };
                out.push_str(&customize(template, color, Some(text), no_unicode));
            }
            FragmentKind::MarkRight => {
                let template = if options.colored_blocks {
                    &t.mark_right_colored
                } else {
                    &t.mark_right
                };
                out.push_str(&customize(template, color, Some(text), no_unicode));
            }
            FragmentKind::BlockStartLeft => {
                let title = self.messages.block_left_title(no_unicode);
                let template = self.block_start(options);
                out.push_str(&customize(template, color, Some(title), no_unicode));
            }
            FragmentKind::BlockStartRight => {
                let title = self.messages.block_right_title(no_unicode);
                let template = self.block_start(options);
                out.push_str(&customize(template, color, Some(title), no_unicode));
            }
            FragmentKind::BlockEnd => out.push_str(&t.block_end),
        }
    }

    fn write_deletion(&self, out: &mut String, text: &str) {
        let t = &self.templates;
        let start = if is_blank(text) {
            &t.delete_start_blank
        } else {
            &t.delete_start
        };
        write_change(out, start, text, &t.delete_end);
    }

    fn block_start(&self, options: &RenderOptions) -> &str {
        if options.colored_blocks {
            &self.templates.block_colored_start
        } else {
            &self.templates.block_start
        }
    }
}

/// Write inserted or deleted text with all blanks visualized.
fn write_change(out: &mut String, start: &str, text: &str, end: &str) {
    out.push_str(start);
    out.push_str(&markup_blanks(&escape_html(text), true));
    out.push_str(end);
}

/// Whether a changed text needs the "blank" markup to stay visible: a single
/// character of any kind, or whitespace only. Empty text is not blank.
pub fn is_blank(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (None, _) => false,
        (Some(_), None) => true,
        _ => text.chars().all(char::is_whitespace),
    }
}

/// Whether the list has the exact shape the diff engine emits for two
/// identical texts.
fn is_unchanged(fragments: &[Fragment]) -> bool {
    matches!(
        fragments,
        [open, group, same, group_end, close]
            if open.kind == FragmentKind::ContainerStart
                && group.kind == FragmentKind::FragmentStart
                && same.kind == FragmentKind::Same
                && group_end.kind == FragmentKind::FragmentEnd
                && close.kind == FragmentKind::ContainerEnd
    )
}
