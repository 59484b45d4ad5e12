//! Full-width page opener: heading, optional subheading, image, and CTA.

use super::{CtaLink, RenderFault, payload};
use crate::types::Section;
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeroPayload {
    heading: String,
    #[serde(default)]
    subheading: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    image_alt: Option<String>,
    #[serde(default)]
    cta: Option<CtaLink>,
}

pub(super) fn render(section: &Section) -> Result<Markup, RenderFault> {
    let hero: HeroPayload = payload(section)?;
    let image_alt = hero.image_alt.as_deref().unwrap_or(&hero.heading);

    Ok(html! {
        div.hero-copy {
            h1 { (hero.heading) }
            @if let Some(sub) = &hero.subheading {
                p.hero-subheading { (sub) }
            }
            @if let Some(cta) = &hero.cta {
                a.button.hero-cta href=(cta.href) { (cta.label) }
            }
        }
        @if let Some(image) = &hero.image {
            img.hero-image src=(image) alt=(image_alt) loading="eager";
        }
    })
}
