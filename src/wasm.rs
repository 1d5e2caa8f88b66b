//! WASM bindings for rendering diffs in the browser.
//!
//! This module exposes the renderer to JavaScript via wasm-bindgen. Fragment
//! lists cross the boundary as JSON, in the same shape the CLI reads.

use wasm_bindgen::prelude::*;

use crate::fragment::fragments_from_json;
use crate::html::{RenderOptions, render_html};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Render a JSON fragment list to HTML.
///
/// Takes `[{"text": .., "type": .., "color": ..}, ...]` and returns the diff
/// markup, ready to be inserted into a page that carries the wikEdDiff
/// stylesheet and block handler script.
#[wasm_bindgen]
pub fn render_fragments(
    json: &str,
    show_block_moves: bool,
    colored_blocks: bool,
    no_unicode_symbols: bool,
    error: bool,
) -> Result<String, JsValue> {
    let fragments = fragments_from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let options = RenderOptions::new()
        .with_block_moves(show_block_moves)
        .with_colored_blocks(colored_blocks)
        .with_no_unicode_symbols(no_unicode_symbols)
        .with_error(error);

    Ok(render_html(&fragments, &options))
}
