//! Section registry and dispatcher.
//!
//! Pages declare an ordered list of typed sections; this module maps each
//! declared `type` string to its renderer and guarantees the central
//! failure-isolation contract: **every section yields exactly one node** —
//! a normal render or an inline error placeholder — so a fault in section
//! N never affects sections 0..N-1 or N+1..end, and section count in
//! equals node count out.
//!
//! The registry is a closed sum type ([`SectionKind`]) checked at compile
//! time, with a single default branch for unregistered type strings. No
//! runtime registration: the set of renderable kinds is code-reviewed, not
//! CMS-driven, which bounds the attack surface of rendering arbitrary
//! payloads.
//!
//! Renderers return `Result<Markup, RenderFault>`; the dispatcher converts
//! every fault into a renderable placeholder before returning, so the
//! composition loop needs no error handling of its own.

mod card_grid;
mod cta_banner;
mod eligibility_result;
mod faq;
mod hero;
mod rich_text;
mod steps_list;
mod testimonials;

use crate::types::Section;
use maud::{Markup, html};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a single section failed to render. Always contained to that
/// section.
#[derive(Error, Debug)]
pub enum RenderFault {
    #[error("no renderer registered for this section type")]
    UnknownType,
    #[error("invalid section payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The closed set of renderable section kinds.
///
/// Wire `type` strings come from the CMS; anything not listed here falls
/// through to the placeholder path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    RichText,
    Faq,
    CardGrid,
    CtaBanner,
    StepsList,
    Testimonials,
    EligibilityResult,
}

impl SectionKind {
    /// Parse a wire `type` string. `None` means renderer-not-found.
    pub fn from_type(type_str: &str) -> Option<Self> {
        match type_str {
            "hero" => Some(Self::Hero),
            "richText" => Some(Self::RichText),
            "faq" => Some(Self::Faq),
            "cardGrid" => Some(Self::CardGrid),
            "ctaBanner" => Some(Self::CtaBanner),
            "stepsList" => Some(Self::StepsList),
            "testimonials" => Some(Self::Testimonials),
            "eligibilityResult" => Some(Self::EligibilityResult),
            _ => None,
        }
    }

    /// Kebab-case slug used in CSS class names.
    fn slug(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::RichText => "rich-text",
            Self::Faq => "faq",
            Self::CardGrid => "card-grid",
            Self::CtaBanner => "cta-banner",
            Self::StepsList => "steps-list",
            Self::Testimonials => "testimonials",
            Self::EligibilityResult => "eligibility-result",
        }
    }
}

/// A labeled link, shared by every section kind that carries a
/// call-to-action.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaLink {
    pub label: String,
    pub href: String,
}

/// Deserialize a section's opaque payload into a renderer's typed shape.
fn payload<T: DeserializeOwned>(section: &Section) -> Result<T, RenderFault> {
    Ok(serde_json::from_value(section.payload_value())?)
}

/// Render every section of a page, in order. Total: the output always has
/// exactly one node per input section.
pub fn render_sections(sections: &[Section]) -> Vec<Markup> {
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| render_section(section, index))
        .collect()
}

/// Dispatch one section to its renderer, isolating failures.
///
/// A fault — unknown type or bad payload — is logged and converted into a
/// visible but non-fatal placeholder carrying the section type and its
/// identifying key (`sectionId` else index).
pub fn render_section(section: &Section, index: usize) -> Markup {
    match dispatch(section) {
        Ok((kind, body)) => html! {
            section id=(anchor_id(section, index)) class={ "section section--" (kind.slug()) } {
                (body)
            }
        },
        Err(fault) => {
            log::warn!(
                "section render fault: type={} index={} key={}: {fault}",
                section.section_type,
                index,
                section.key(index),
            );
            placeholder(section, index)
        }
    }
}

/// Registry lookup + renderer invocation.
fn dispatch(section: &Section) -> Result<(SectionKind, Markup), RenderFault> {
    let kind = SectionKind::from_type(&section.section_type).ok_or(RenderFault::UnknownType)?;
    let body = match kind {
        SectionKind::Hero => hero::render(section)?,
        SectionKind::RichText => rich_text::render(section)?,
        SectionKind::Faq => faq::render(section)?,
        SectionKind::CardGrid => card_grid::render(section)?,
        SectionKind::CtaBanner => cta_banner::render(section)?,
        SectionKind::StepsList => steps_list::render(section)?,
        SectionKind::Testimonials => testimonials::render(section)?,
        SectionKind::EligibilityResult => eligibility_result::render(section)?,
    };
    Ok((kind, body))
}

/// Stable DOM anchor: `sectionId` else a positional fallback.
fn anchor_id(section: &Section, index: usize) -> String {
    match &section.section_id {
        Some(id) if !id.is_empty() => id.clone(),
        _ => format!("section-{index}"),
    }
}

/// Inline error node for a faulted section. Clearly marked, non-alarming,
/// and carries enough identity to trace the fault back to content.
fn placeholder(section: &Section, index: usize) -> Markup {
    html! {
        div.section-error
            id=(anchor_id(section, index))
            data-section-type=(section.section_type)
            data-section-key=(section.key(index)) {
            p { "This part of the page could not be displayed." }
        }
    }
}
