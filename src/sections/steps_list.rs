//! Numbered walkthrough of a process ("how it works"). The step number
//! comes from list position, so content edits cannot skip or repeat
//! numbers.

use super::{RenderFault, payload};
use crate::types::Section;
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StepsListPayload {
    #[serde(default)]
    heading: Option<String>,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Step {
    title: String,
    #[serde(default)]
    description: Option<String>,
}

pub(super) fn render(section: &Section) -> Result<Markup, RenderFault> {
    let list: StepsListPayload = payload(section)?;

    Ok(html! {
        @if let Some(heading) = &list.heading {
            h2 { (heading) }
        }
        ol.steps {
            @for step in &list.steps {
                li {
                    h3 { (step.title) }
                    @if let Some(description) = &step.description {
                        p { (description) }
                    }
                }
            }
        }
    })
}
