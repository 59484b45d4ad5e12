//! FAQ accordion, rendered as native details/summary — no JavaScript
//! needed for the expand/collapse toggle.

use super::{RenderFault, payload};
use crate::types::Section;
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaqPayload {
    #[serde(default)]
    heading: Option<String>,
    items: Vec<FaqItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaqItem {
    question: String,
    answer: String,
}

pub(super) fn render(section: &Section) -> Result<Markup, RenderFault> {
    let faq: FaqPayload = payload(section)?;

    Ok(html! {
        @if let Some(heading) = &faq.heading {
            h2 { (heading) }
        }
        @for item in &faq.items {
            details.faq-item {
                summary { (item.question) }
                p { (item.answer) }
            }
        }
    })
}
