//! Call-to-action banner.

use super::{CtaLink, RenderFault, payload};
use crate::types::Section;
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CtaBannerPayload {
    heading: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    button: Option<CtaLink>,
}

pub(super) fn render(section: &Section) -> Result<Markup, RenderFault> {
    let banner: CtaBannerPayload = payload(section)?;

    Ok(html! {
        h2 { (banner.heading) }
        @if let Some(body) = &banner.body {
            p { (body) }
        }
        @if let Some(button) = &banner.button {
            a.button href=(button.href) { (button.label) }
        }
    })
}
