//! Eligibility verdict display.
//!
//! The verdict comes from an external rule evaluator; this renderer reads
//! only the pass/fail flag and the display message. The `criteria` payload
//! is carried through opaque — serialized into a data attribute for any
//! downstream widget — and never interpreted here.

use super::{CtaLink, RenderFault, payload};
use crate::types::{EligibilityVerdict, Section};
use maud::{Markup, html};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EligibilityPayload {
    verdict: EligibilityVerdict,
    #[serde(default)]
    eligible_heading: Option<String>,
    #[serde(default)]
    ineligible_heading: Option<String>,
    #[serde(default)]
    next_step: Option<CtaLink>,
}

pub(super) fn render(section: &Section) -> Result<Markup, RenderFault> {
    let result: EligibilityPayload = payload(section)?;
    let verdict = &result.verdict;

    let heading = if verdict.eligible {
        result.eligible_heading.as_deref().unwrap_or("You're eligible")
    } else {
        result
            .ineligible_heading
            .as_deref()
            .unwrap_or("You're not eligible right now")
    };
    let state = if verdict.eligible { "eligible" } else { "ineligible" };
    let criteria = (!verdict.criteria.is_null()).then(|| verdict.criteria.to_string());

    Ok(html! {
        div class={ "verdict verdict--" (state) } data-criteria=[criteria] {
            h2 { (heading) }
            @if let Some(message) = &verdict.message {
                p.verdict-message { (message) }
            }
            @if let Some(next_step) = &result.next_step {
                @if verdict.eligible {
                    a.button href=(next_step.href) { (next_step.label) }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::section;
    use serde_json::json;

    #[test]
    fn eligible_verdict_shows_pass_state_and_next_step() {
        let s = section(
            "eligibilityResult",
            None,
            json!({
                "verdict": { "eligible": true, "criteria": null },
                "nextStep": { "label": "Order your kit", "href": "/order" }
            }),
        );
        let html = render(&s).unwrap().into_string();
        assert!(html.contains("verdict--eligible"));
        assert!(html.contains("You're eligible"));
        assert!(html.contains("/order"));
    }

    #[test]
    fn ineligible_verdict_shows_message_and_hides_next_step() {
        let s = section(
            "eligibilityResult",
            None,
            json!({
                "verdict": {
                    "eligible": false,
                    "message": "This program is not available in your state yet.",
                    "criteria": null
                },
                "nextStep": { "label": "Order", "href": "/order" }
            }),
        );
        let html = render(&s).unwrap().into_string();
        assert!(html.contains("verdict--ineligible"));
        assert!(html.contains("not available in your state"));
        assert!(!html.contains("/order"));
    }

    #[test]
    fn criteria_is_embedded_opaque() {
        let s = section(
            "eligibilityResult",
            None,
            json!({
                "verdict": {
                    "eligible": true,
                    "criteria": { "minAge": 18 }
                }
            }),
        );
        let html = render(&s).unwrap().into_string();
        assert!(html.contains("data-criteria"));
        assert!(html.contains("minAge"));
    }

    #[test]
    fn missing_verdict_is_a_payload_fault() {
        let s = section("eligibilityResult", None, json!({}));
        assert!(matches!(render(&s), Err(RenderFault::Payload(_))));
    }
}
