//! Preview page generation for mdpreview.
//!
//! Renders one Markdown document into a standalone HTML page and keeps a
//! minimal index page next to it.

pub mod previewer;
pub mod templates;

pub use previewer::{
    page_title, render, IndexStatus, PreviewConfig, PreviewError, PreviewResult, Previewer,
};
pub use templates::{PageContext, TemplateEngine};
