//! SEO metadata derivation.
//!
//! Every composed page carries a fully populated metadata payload: document
//! title, description, Open Graph tags, and a Twitter card. The CMS may
//! supply any subset of these per page; each field is resolved
//! independently through its own fallback chain:
//!
//! - **title**: `seo.title` → page slug
//! - **description**: `seo.description` → empty (description alone may be
//!   empty — there is no meaningful generic fallback for it)
//! - **og:title / og:description**: `seo.openGraph.*` → the resolved
//!   top-level title/description
//! - **og:url**: `seo.openGraph.url` → site URL + public path
//! - **og:image**: `seo.openGraph.image` → the site default image, always
//!   with fixed 1200×630 dimensions; alt text is `seo.title` → default alt
//! - **twitter**: mirrors the resolved Open Graph values, card always
//!   `summary_large_image` — a single source of truth, never re-derived
//!
//! Each chain is an ordered list of optional accessors reduced to the first
//! present value ([`first_non_empty`]), terminating in a constant from
//! [`SiteDefaults`]. That makes derivation total: it never fails, and for
//! a missing page it returns a fixed not-found payload.

use crate::config::SiteDefaults;
use crate::routes;
use crate::types::Page;
use serde::Serialize;

/// Open Graph images are emitted at the canonical large-card size.
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

const TWITTER_CARD: &str = "summary_large_image";
const NOT_FOUND_TITLE: &str = "Page Not Found";
const NOT_FOUND_DESCRIPTION: &str = "The page you are looking for does not exist.";

/// Derived metadata for one page. Always fully populated — every field has
/// a fallback terminus, so rendering the `<head>` needs no conditionals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoMetadata {
    pub title: String,
    pub description: String,
    pub open_graph: OpenGraphMetadata,
    pub twitter: TwitterMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenGraphMetadata {
    pub title: String,
    pub description: String,
    pub url: String,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterMetadata {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value. This is the core merge operation behind every
/// fallback chain in this module.
pub fn first_non_empty(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Derive the full metadata payload for a page, or the fixed not-found
/// payload when the page is absent. Never panics; deterministic for a
/// given input.
pub fn derive_metadata(page: Option<&Page>, site: &SiteDefaults) -> SeoMetadata {
    let Some(page) = page else {
        return not_found_metadata(site);
    };

    let seo = page.seo.as_ref();
    let og = seo.and_then(|s| s.open_graph.as_ref());

    let title = first_non_empty(&[seo.and_then(|s| s.title.as_deref()), Some(&page.slug)])
        .unwrap_or_else(|| site.name.clone());
    let description =
        first_non_empty(&[seo.and_then(|s| s.description.as_deref())]).unwrap_or_default();

    let og_title = first_non_empty(&[og.and_then(|o| o.title.as_deref()), Some(&title)])
        .unwrap_or_else(|| title.clone());
    let og_description =
        first_non_empty(&[og.and_then(|o| o.description.as_deref()), Some(&description)])
            .unwrap_or_default();
    let og_url = first_non_empty(&[og.and_then(|o| o.url.as_deref())])
        .unwrap_or_else(|| page_url(site, &page.slug));

    let image_url = first_non_empty(&[
        og.and_then(|o| o.image.as_deref()),
        Some(&site.default_image.url),
    ])
    .unwrap_or_else(|| site.default_image.url.clone());
    let image_alt = first_non_empty(&[
        seo.and_then(|s| s.title.as_deref()),
        Some(&site.default_image.alt),
    ])
    .unwrap_or_else(|| site.default_image.alt.clone());

    assemble(title, description, og_title, og_description, og_url, image_url, image_alt)
}

/// The fixed payload served for missing pages. Generic title/description,
/// site default image, not-found path.
fn not_found_metadata(site: &SiteDefaults) -> SeoMetadata {
    assemble(
        NOT_FOUND_TITLE.to_string(),
        NOT_FOUND_DESCRIPTION.to_string(),
        NOT_FOUND_TITLE.to_string(),
        NOT_FOUND_DESCRIPTION.to_string(),
        site.url.trim_end_matches('/').to_string(),
        site.default_image.url.clone(),
        site.default_image.alt.clone(),
    )
}

/// Build the final payload from fully resolved values. Twitter mirrors the
/// Open Graph side here, in exactly one place.
fn assemble(
    title: String,
    description: String,
    og_title: String,
    og_description: String,
    og_url: String,
    image_url: String,
    image_alt: String,
) -> SeoMetadata {
    SeoMetadata {
        title,
        description,
        twitter: TwitterMetadata {
            card: TWITTER_CARD.to_string(),
            title: og_title.clone(),
            description: og_description.clone(),
            images: vec![image_url.clone()],
        },
        open_graph: OpenGraphMetadata {
            title: og_title,
            description: og_description,
            url: og_url,
            images: vec![OgImage {
                url: image_url,
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: image_alt,
            }],
        },
    }
}

/// Public URL for a slug: site root for the home document, `/{slug}`
/// otherwise.
fn page_url(site: &SiteDefaults, slug: &str) -> String {
    let base = site.url.trim_end_matches('/');
    match routes::public_path(slug).as_str() {
        "/" => base.to_string(),
        path => format!("{base}{path}"),
    }
}
