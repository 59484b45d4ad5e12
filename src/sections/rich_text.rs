//! Markdown prose block. The CMS authors `body` as markdown; it is
//! converted to HTML here and inlined pre-escaped — the only place the
//! engine bypasses maud's auto-escaping, and only for content that went
//! through the markdown parser.

use super::{RenderFault, payload};
use crate::types::Section;
use maud::{Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RichTextPayload {
    #[serde(default)]
    heading: Option<String>,
    body: String,
}

pub(super) fn render(section: &Section) -> Result<Markup, RenderFault> {
    let text: RichTextPayload = payload(section)?;

    let parser = Parser::new(&text.body);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);

    Ok(html! {
        @if let Some(heading) = &text.heading {
            h2 { (heading) }
        }
        article.prose {
            (PreEscaped(body_html))
        }
    })
}
