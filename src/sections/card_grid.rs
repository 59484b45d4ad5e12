//! Grid of feature/content cards. A card with an `href` becomes a link
//! card; without one it is plain display.

use super::{RenderFault, payload};
use crate::types::Section;
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardGridPayload {
    #[serde(default)]
    heading: Option<String>,
    cards: Vec<Card>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Card {
    title: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    href: Option<String>,
}

pub(super) fn render(section: &Section) -> Result<Markup, RenderFault> {
    let grid: CardGridPayload = payload(section)?;

    Ok(html! {
        @if let Some(heading) = &grid.heading {
            h2 { (heading) }
        }
        div.card-grid {
            @for card in &grid.cards {
                @if let Some(href) = &card.href {
                    a.card href=(href) { (card_body(card)) }
                } @else {
                    div.card { (card_body(card)) }
                }
            }
        }
    })
}

fn card_body(card: &Card) -> Markup {
    html! {
        @if let Some(image) = &card.image {
            img src=(image) alt=(card.title) loading="lazy";
        }
        h3 { (card.title) }
        @if let Some(body) = &card.body {
            p { (body) }
        }
    }
}
