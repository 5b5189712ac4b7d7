//! Markdown rendering for message text.
//!
//! Bundle text is plain Markdown plus two block directives used by the site:
//! - `::arrow-item[...]`: a highlighted bullet
//! - `::small[...]`: a fine-print note
//!
//! A directive must sit alone on its line. Its content is rendered as inline
//! Markdown and wrapped in a `<p>` carrying the directive name as class.

use pulldown_cmark::{html, Options, Parser};
use serde::Serialize;

use crate::eligibility::messages::MessageBundle;

const DIRECTIVES: &[&str] = &["arrow-item", "small"];

fn markdown_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options
}

fn push_markdown(out: &mut String, text: &str) {
    if text.trim().is_empty() {
        return;
    }
    let parser = Parser::new_ext(text, markdown_options());
    html::push_html(out, parser);
}

/// Render Markdown content without its wrapping paragraph.
fn render_inline(text: &str) -> String {
    let mut out = String::new();
    push_markdown(&mut out, text);
    let trimmed = out.trim_end();
    trimmed
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .unwrap_or(trimmed)
        .to_string()
}

/// Split a directive line into (name, content).
fn parse_directive(line: &str) -> Option<(&'static str, &str)> {
    let rest = line.trim().strip_prefix("::")?;
    DIRECTIVES.iter().find_map(|name| {
        rest.strip_prefix(name)
            .and_then(|r| r.strip_prefix('['))
            .and_then(|r| r.strip_suffix(']'))
            .map(|content| (*name, content))
    })
}

/// Render message text (Markdown + directives) to HTML.
pub fn render_markdown(text: &str) -> String {
    let mut out = String::new();
    let mut pending = String::new();

    for line in text.lines() {
        match parse_directive(line) {
            Some((name, content)) => {
                push_markdown(&mut out, &pending);
                pending.clear();
                out.push_str(&format!("<p class=\"{}\">{}</p>\n", name, render_inline(content)));
            }
            None => {
                pending.push_str(line);
                pending.push('\n');
            }
        }
    }
    push_markdown(&mut out, &pending);

    out
}

/// HTML rendering of a message bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedBundle {
    pub header: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_light: Option<String>,
}

impl RenderedBundle {
    pub fn from_bundle(bundle: &MessageBundle) -> Self {
        Self {
            header: render_markdown(bundle.header),
            body: render_markdown(bundle.body),
            body_light: bundle.body_light.map(render_markdown),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::{contact_message, DistanceBand, HeatingType};

    #[test]
    fn test_plain_markdown() {
        let html = render_markdown("**Bonne nouvelle !**");
        assert_eq!(html.trim(), "<p><strong>Bonne nouvelle !</strong></p>");
    }

    #[test]
    fn test_arrow_item_directive() {
        let html = render_markdown("::arrow-item[Le réseau passe **ici**.]");
        assert_eq!(html, "<p class=\"arrow-item\">Le réseau passe <strong>ici</strong>.</p>\n");
    }

    #[test]
    fn test_directive_with_nested_link() {
        let html = render_markdown(
            "::arrow-item[rendez-vous sur [**France Rénov’**](https://france-renov.gouv.fr/).]",
        );
        assert!(html.starts_with("<p class=\"arrow-item\">"));
        assert!(html.contains("<a href=\"https://france-renov.gouv.fr/\"><strong>France Rénov’</strong></a>"));
    }

    #[test]
    fn test_mixed_content_keeps_order() {
        let html = render_markdown("### Titre\n::small[note]\nfin");
        let title = html.find("<h3>").unwrap();
        let small = html.find("class=\"small\"").unwrap();
        let end = html.find("<p>fin</p>").unwrap();
        assert!(title < small && small < end);
    }

    #[test]
    fn test_unknown_directive_is_plain_text() {
        assert_eq!(parse_directive("::video[x]"), None);
        assert_eq!(parse_directive("::small[x]"), Some(("small", "x")));
    }

    #[test]
    fn test_rendered_bundle() {
        let rendered = RenderedBundle::from_bundle(contact_message(DistanceBand::Near, HeatingType::Individuel));
        assert!(rendered.header.contains("<strong>"));
        assert!(rendered.body.contains("<a href=\"https://france-renov.gouv.fr/\">"));
        assert!(rendered.body_light.is_some());
    }
}
