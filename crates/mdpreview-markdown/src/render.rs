//! Markdown renderer.

use pulldown_cmark::{html, Options, Parser};

/// Options passed to the Markdown parser.
///
/// Fenced code blocks are always recognised by `pulldown-cmark`, so tables
/// are the only extension that has to be switched on.
pub fn markdown_options() -> Options {
    Options::ENABLE_TABLES
}

/// Render a Markdown document to an HTML fragment.
///
/// Never fails: every input produces some fragment.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, markdown_options());

    // HTML output is usually a bit larger than its source
    let mut html_output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut html_output, parser);

    tracing::debug!(
        input_bytes = source.len(),
        output_bytes = html_output.len(),
        "Rendered markdown"
    );

    html_output
}
