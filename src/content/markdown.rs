//! Markup rendering with a fixed set of element components

use pulldown_cmark::{html, CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Components that replace the default rendering of a markup element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// `a`: external links open in a new tab
    Link,
    /// `pre`: fenced code with syntax highlighting
    Pre,
    /// ```` ```mermaid ```` fences, left for the client-side diagram renderer
    Mermaid,
}

const COMPONENTS: [(&str, Component); 3] = [
    ("a", Component::Link),
    ("pre", Component::Pre),
    ("mermaid", Component::Mermaid),
];

impl Component {
    /// Look up the component registered for an element name
    pub fn for_element(name: &str) -> Option<Component> {
        COMPONENTS
            .iter()
            .find(|(element, _)| *element == name)
            .map(|(_, component)| *component)
    }
}

/// Markdown renderer with syntax highlighting
pub struct MarkdownRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    theme_name: String,
}

impl MarkdownRenderer {
    pub fn new(theme: &str) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            theme_name: theme.to_string(),
        }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        let mut code: Option<(Option<String>, String)> = None;
        let mut external_link = false;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => info
                            .split_whitespace()
                            .next()
                            .map(|lang| lang.to_string()),
                        CodeBlockKind::Indented => None,
                    };
                    code = Some((lang, String::new()));
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((lang, text)) = code.take() {
                        events.push(Event::Html(CowStr::from(
                            self.render_code(&text, lang.as_deref()),
                        )));
                    }
                }
                Event::Text(text) if code.is_some() => {
                    if let Some((_, buf)) = code.as_mut() {
                        buf.push_str(&text);
                    }
                }
                Event::Start(Tag::Link {
                    dest_url, title, ..
                }) if is_external(&dest_url) => {
                    external_link = true;
                    let mut open = format!(
                        r#"<a href="{}" target="_blank" rel="noopener noreferrer""#,
                        html_escape(&dest_url)
                    );
                    if !title.is_empty() {
                        open.push_str(&format!(r#" title="{}""#, html_escape(&title)));
                    }
                    open.push('>');
                    events.push(Event::Html(CowStr::from(open)));
                }
                Event::End(TagEnd::Link) if external_link => {
                    external_link = false;
                    events.push(Event::Html(CowStr::from("</a>")));
                }
                other => events.push(other),
            }
        }

        let mut html_output = String::new();
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }

    fn render_code(&self, code: &str, lang: Option<&str>) -> String {
        let component = lang
            .and_then(Component::for_element)
            .or_else(|| Component::for_element("pre"));

        match component {
            Some(Component::Mermaid) => {
                format!(r#"<div class="mermaid">{}</div>"#, html_escape(code))
            }
            Some(Component::Pre) => self.highlight_code(code, lang),
            _ => plain_code(code, lang.unwrap_or("text")),
        }
    }

    /// Highlight a code block
    fn highlight_code(&self, code: &str, lang: Option<&str>) -> String {
        let lang = lang.unwrap_or("text");

        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let Some(theme) = self.theme_set.themes.get(&self.theme_name) else {
            tracing::debug!("Unknown highlight theme {}, not highlighting", self.theme_name);
            return plain_code(code, lang);
        };

        match highlighted_html_for_string(code, &self.syntax_set, syntax, theme) {
            Ok(highlighted) => format!(
                r#"<figure class="highlight {}">{}</figure>"#,
                html_escape(lang),
                highlighted
            ),
            Err(_) => plain_code(code, lang),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new("base16-ocean.dark")
    }
}

fn plain_code(code: &str, lang: &str) -> String {
    format!(
        r#"<pre><code class="language-{}">{}</code></pre>"#,
        html_escape(lang),
        html_escape(code)
    )
}

fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

/// Simple HTML escaping
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("# Hello World\n\nThis is a test.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a test.</p>"));
    }

    #[test]
    fn test_external_link_opens_in_new_tab() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("See [docs](https://example.com/a?b=1&c=2).");
        assert!(html.contains(
            r#"<a href="https://example.com/a?b=1&amp;c=2" target="_blank" rel="noopener noreferrer">docs</a>"#
        ));
    }

    #[test]
    fn test_internal_link_untouched() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("[tags](/tags) and [mail](mailto:me@example.com)");
        assert!(html.contains(r#"<a href="/tags">tags</a>"#));
        assert!(html.contains(r#"<a href="mailto:me@example.com">mail</a>"#));
        assert!(!html.contains("_blank"));
    }

    #[test]
    fn test_render_code_block() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"<figure class="highlight rust">"#));
    }

    #[test]
    fn test_mermaid_block() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("```mermaid\ngraph TD; A-->B\n```");
        assert!(html.contains(r#"<div class="mermaid">graph TD; A--&gt;B"#));
        assert!(!html.contains("highlight"));
    }

    #[test]
    fn test_fence_language_is_escaped() {
        let markdown = "```\"><script>x</script>\nlet a = 1;\n```\n";
        for renderer in [MarkdownRenderer::default(), MarkdownRenderer::new("no-such-theme")] {
            let html = renderer.render(markdown);
            assert!(!html.contains("<script>"), "unescaped: {}", html);
            assert!(html.contains("&quot;&gt;&lt;script&gt;x&lt;/script&gt;"));
        }
    }

    #[test]
    fn test_component_table() {
        assert_eq!(Component::for_element("a"), Some(Component::Link));
        assert_eq!(Component::for_element("pre"), Some(Component::Pre));
        assert_eq!(Component::for_element("mermaid"), Some(Component::Mermaid));
        assert_eq!(Component::for_element("img"), None);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_plain() {
        let renderer = MarkdownRenderer::new("no-such-theme");
        let html = renderer.render("```go\na < b\n```");
        assert!(html.contains(r#"<pre><code class="language-go">a &lt; b"#));
    }
}
