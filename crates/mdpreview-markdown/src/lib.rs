//! Markdown to HTML conversion.
//!
//! Wraps `pulldown-cmark` with the fixed option set used for preview pages:
//! the CommonMark baseline (which already covers fenced code blocks) plus
//! pipe tables.

pub mod render;

pub use render::{markdown_options, render_markdown};
