//! Fixed templates for the preview page and the index page.

use minijinja::{context, Environment};

/// Context for rendering the preview page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PageContext {
    /// Document title (source file stem)
    pub title: String,
    /// Rendered Markdown
    pub body: String,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a template engine with the page and index templates loaded.
    ///
    /// Template names carry no `.html` suffix, so minijinja leaves
    /// auto-escaping off and every value is inserted exactly as given.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();

        env.add_template("page", PAGE_TEMPLATE)?;
        env.add_template("index", INDEX_TEMPLATE)?;

        Ok(Self { env })
    }

    /// Render a full preview page.
    pub fn render_page(&self, context: &PageContext) -> Result<String, minijinja::Error> {
        self.env.get_template("page")?.render(context)
    }

    /// Render the index fragment linking to a single page by file name.
    pub fn render_index(&self, file_name: &str) -> Result<String, minijinja::Error> {
        self.env
            .get_template("index")?
            .render(context! { file_name => file_name })
    }
}

const PAGE_TEMPLATE: &str = r##"<!doctype html>
<html lang="zh-Hant">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{{ title }} - Preview</title>
  <style>
    body { font-family: system-ui, -apple-system, 'Segoe UI', Roboto, 'Noto Sans TC', 'PingFang TC', 'Microsoft JhengHei', sans-serif; max-width: 900px; margin: 2rem auto; padding: 0 1rem; line-height:1.6; }
    pre { background:#f6f8fa; padding:0.8rem; overflow:auto }
    code { background:#f6f8fa; padding:0.2rem 0.4rem; border-radius:4px }
    h1,h2,h3 { margin-top:1.2rem }
  </style>
</head>
<body>
<article>
{{ body }}
</article>
</body>
</html>"##;

// Not a full document on purpose: no <html> or <body> wrapper.
const INDEX_TEMPLATE: &str = r##"<meta charset="utf-8"><title>Preview index</title><ul><li><a href="{{ file_name }}">{{ file_name }}</a></li></ul>"##;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(title: &str, body: &str) -> String {
        TemplateEngine::new()
            .unwrap()
            .render_page(&PageContext {
                title: title.to_string(),
                body: body.to_string(),
            })
            .unwrap()
    }

    #[test]
    fn renders_page_shell() {
        let html = page("patient", "<p>Hello world</p>\n");

        assert!(html.starts_with("<!doctype html>\n<html lang=\"zh-Hant\">"));
        assert!(html.contains("<meta charset=\"utf-8\" />"));
        assert!(html.contains(
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />"
        ));
        assert!(html.contains("<title>patient - Preview</title>"));
        assert!(html.contains("max-width: 900px"));
        assert!(html.contains("line-height:1.6"));
        assert!(html.contains("<article>\n<p>Hello world</p>\n\n</article>"));
        assert!(html.ends_with("</html>"));
    }

    #[test]
    fn inserts_body_without_escaping() {
        let html = page("doc", "<pre><code class=\"language-python\">print(1)\n</code></pre>");

        assert!(html.contains("<pre><code class=\"language-python\">print(1)\n</code></pre>"));
    }

    #[test]
    fn inserts_title_verbatim() {
        let html = page("R&D patient's notes", "");

        assert!(html.contains("<title>R&D patient's notes - Preview</title>"));
    }

    #[test]
    fn renders_index_fragment() {
        let engine = TemplateEngine::new().unwrap();

        let html = engine.render_index("patient.html").unwrap();

        assert_eq!(
            html,
            "<meta charset=\"utf-8\"><title>Preview index</title><ul><li><a href=\"patient.html\">patient.html</a></li></ul>"
        );
        assert!(!html.contains("<html"));
        assert!(!html.contains("<body"));
    }

    #[test]
    fn inserts_index_file_name_verbatim() {
        let engine = TemplateEngine::new().unwrap();

        let html = engine.render_index("R&D patient's notes.html").unwrap();

        assert!(html.contains(
            "<a href=\"R&D patient's notes.html\">R&D patient's notes.html</a>"
        ));
    }
}
