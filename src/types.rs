//! Shared types for the CMS wire contract.
//!
//! These mirror the JSON documents the content origin serves. Field names
//! follow the origin's camelCase convention; everything the engine does not
//! interpret stays optional or opaque so that upstream schema additions
//! never break deserialization.

use serde::{Deserialize, Serialize};

/// One routable page, as authored in the CMS.
///
/// A `Page` is fetched fresh per composition and never mutated by the
/// engine. Section order is display order — rendering preserves it exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Canonical path-like identifier, e.g. `"eligibility/register"`.
    pub slug: String,
    /// Per-page SEO overrides. Absent fields fall back to generic page
    /// fields and finally to the site defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    /// Rendering hints for the shared layout. Travels with the composed
    /// output instead of living in ambient mutable state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Ordered content blocks. Renders top to bottom.
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Per-page SEO block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_graph: Option<OpenGraphSeo>,
}

/// Open Graph overrides within a page's SEO block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphSeo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Layout hints consumed by the document shell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navbar: Option<NavbarConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarConfig {
    #[serde(default)]
    pub sticky: bool,
}

/// Site-wide announcement bar, toggled per page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerConfig {
    #[serde(default)]
    pub show: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(default)]
    pub is_sticky: bool,
}

/// One content block within a page.
///
/// The `type` discriminator selects a renderer; everything else is the
/// renderer's own payload, opaque to the dispatcher. Unrecognized types are
/// a defined fault (inline placeholder), never a crash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub section_type: String,
    /// Stable identifier used for DOM anchoring and as the placeholder key.
    /// Falls back to the positional index when absent.
    #[serde(
        rename = "sectionId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub section_id: Option<String>,
    /// Renderer-specific fields, untyped from the engine's perspective.
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl Section {
    /// The section's identifying key: `sectionId` else positional index.
    pub fn key(&self, index: usize) -> String {
        match &self.section_id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => index.to_string(),
        }
    }

    /// The payload reassembled as a JSON value for typed deserialization.
    pub fn payload_value(&self) -> serde_json::Value {
        serde_json::Value::Object(self.payload.clone())
    }
}

/// Verdict produced by the external eligibility rule evaluator.
///
/// The engine treats this as an opaque pass/fail plus display payload —
/// `criteria` is carried through unread.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityVerdict {
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default)]
    pub criteria: serde_json::Value,
}
