//! # wikeddiff
//!
//! HTML rendering for inline text diffs with block move detection.
//!
//! A diff engine turns two versions of a text into an ordered list of
//! [`Fragment`]s: unchanged spans, insertions, deletions, moved blocks and
//! the marks left at their original positions. This crate renders such a
//! list into annotated HTML; it does not compute diffs itself.
//!
//! ## Features
//!
//! - Insertions and deletions with visualized spaces, tabs and newlines
//! - Moved blocks paired with their origin marks by number, for client-side
//!   highlighting and navigation
//! - Optional per-block colors and ASCII fallbacks for the move arrows
//! - Replaceable message table for localization
//!
//! ## Quick Start
//!
//! ```
//! use wikeddiff::{Fragment, FragmentKind, RenderOptions, render_html};
//!
//! let fragments = vec![
//!     Fragment::marker(FragmentKind::ContainerStart),
//!     Fragment::marker(FragmentKind::FragmentStart),
//!     Fragment::new(FragmentKind::Same, "The ", 0),
//!     Fragment::new(FragmentKind::Delete, "old", 0),
//!     Fragment::new(FragmentKind::Insert, "new", 0),
//!     Fragment::new(FragmentKind::Same, " text", 0),
//!     Fragment::marker(FragmentKind::FragmentEnd),
//!     Fragment::marker(FragmentKind::ContainerEnd),
//! ];
//!
//! let html = render_html(&fragments, &RenderOptions::default());
//! assert!(html.contains("<span class=\"wikEdDiffDelete\" title=\"-\">old</span>"));
//! assert!(html.contains("<span class=\"wikEdDiffInsert\" title=\"+\">new</span>"));
//! ```
//!
//! ## Localization
//!
//! ```
//! use wikeddiff::{Fragment, FragmentKind, HtmlFormatter, Messages, RenderOptions};
//!
//! let formatter = HtmlFormatter::with_messages(Messages {
//!     empty: "(Kein Unterschied)".into(),
//!     ..Messages::ENGLISH
//! });
//!
//! let unchanged = [
//!     Fragment::marker(FragmentKind::ContainerStart),
//!     Fragment::marker(FragmentKind::FragmentStart),
//!     Fragment::new(FragmentKind::Same, "same text", 0),
//!     Fragment::marker(FragmentKind::FragmentEnd),
//!     Fragment::marker(FragmentKind::ContainerEnd),
//! ];
//! let html = formatter.format(&unchanged, &RenderOptions::default());
//! assert!(html.contains("(Kein Unterschied)"));
//! ```

pub mod error;
pub mod fragment;
pub mod html;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use fragment::{Fragment, FragmentKind, debug_fragments};
#[cfg(feature = "serde")]
pub use fragment::{fragments_from_json, read_fragments};
pub use html::{HtmlFormatter, Messages, RenderOptions, Templates, render_html};
