//! Customer quotes.

use super::{RenderFault, payload};
use crate::types::Section;
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestimonialsPayload {
    #[serde(default)]
    heading: Option<String>,
    quotes: Vec<Quote>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Quote {
    quote: String,
    #[serde(default)]
    author: Option<String>,
    #[serde(default)]
    role: Option<String>,
}

pub(super) fn render(section: &Section) -> Result<Markup, RenderFault> {
    let testimonials: TestimonialsPayload = payload(section)?;

    Ok(html! {
        @if let Some(heading) = &testimonials.heading {
            h2 { (heading) }
        }
        div.quote-list {
            @for quote in &testimonials.quotes {
                figure.quote {
                    blockquote { (quote.quote) }
                    @if let Some(author) = &quote.author {
                        figcaption {
                            (author)
                            @if let Some(role) = &quote.role {
                                span.quote-role { ", " (role) }
                            }
                        }
                    }
                }
            }
        }
    })
}
