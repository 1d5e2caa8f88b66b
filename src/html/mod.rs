//! HTML rendering of diff fragments.
//!
//! The renderer is split into pure, layered pieces:
//!
//! - [`escape`]: character entity escaping and whitespace visualization
//! - [`customize`]: `{number}` / `{title}` / `{nounicode}` placeholder substitution
//! - [`render`]: the fragment dispatcher that assembles the final HTML
//!
//! [`messages`] and [`templates`] hold the fixed strings the output is built
//! from. Both are plain values, so a localized [`Messages`] table can be
//! passed to [`HtmlFormatter::with_messages`] without touching the renderer.
//!
//! ## Output
//!
//! Moved blocks and the marks at their original positions share a number:
//! blocks get `id="wikEdDiffBlock{n}"`, marks `id="wikEdDiffMark{n}"`. The
//! page script (`wikEdDiffBlockHandler`) uses these ids to highlight a
//! block together with its mark and to scroll between them. Styling hooks
//! are the `wikEdDiff*` class names.

mod customize;
mod escape;
mod messages;
mod render;
mod templates;

pub use customize::{
    NOUNICODE_CLASS, NOUNICODE_PLACEHOLDER, NUMBER_PLACEHOLDER, TITLE_GAP_MARK, TITLE_MAX,
    TITLE_PLACEHOLDER, TITLE_TAIL, customize, shorten_title,
};
pub use escape::{NEWLINE_HTML, SPACE_HTML, TAB_HTML, escape_html, markup_blanks};
pub use messages::Messages;
pub use render::{HtmlFormatter, RenderOptions, is_blank, render_html};
pub use templates::Templates;
