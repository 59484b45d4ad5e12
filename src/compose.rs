//! Page composition.
//!
//! Orchestrates one page resolution end to end: resolve the request path,
//! fetch the document, derive metadata, render sections in order, and wrap
//! everything in the document shell. The flow per request is
//!
//! ```text
//! resolve → { Redirect | NotFound | fetch → { absent → NotFound
//!                                           | present → head + sections } }
//! ```
//!
//! Layout hints travel with the page document and are consumed right here
//! in the shell — there is no ambient mutable UI-configuration store, so
//! there is nothing to race on.
//!
//! A transport failure is the only error this module propagates; the
//! caller owns logging it and presenting a generic error page. Not-found
//! and redirects are expected outcomes, returned as values.

use crate::config::SiteConfig;
use crate::content::{ContentClient, ContentError};
use crate::metadata::{self, SeoMetadata};
use crate::routes::{self, Resolution};
use crate::sections;
use crate::types::{Layout, Page};
use maud::{DOCTYPE, Markup, html};

/// Terminal outcome of composing one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Composed {
    /// The full HTML document for a resolved page.
    Document(String),
    /// Controlled short-circuit to another path; no content was fetched.
    Redirect(String),
    /// The standard not-found document.
    NotFound(String),
}

/// Compose the response for a raw request path.
pub fn compose(
    client: &ContentClient,
    config: &SiteConfig,
    raw_path: &str,
) -> Result<Composed, ContentError> {
    match routes::resolve(raw_path) {
        Resolution::Redirect { to } => Ok(Composed::Redirect(to)),
        Resolution::NotFound => Ok(Composed::NotFound(not_found_document(config))),
        Resolution::Content { slug } => match client.page_by_slug(&slug)? {
            Some(page) => Ok(Composed::Document(compose_page(&page, config))),
            None => Ok(Composed::NotFound(not_found_document(config))),
        },
    }
}

/// Render a fetched page into a full HTML document.
///
/// Metadata derivation and section rendering are independent — neither
/// reads the other's output; both consume the same immutable `Page`.
pub fn compose_page(page: &Page, config: &SiteConfig) -> String {
    let meta = metadata::derive_metadata(Some(page), &config.site);
    let nodes = sections::render_sections(&page.sections);

    let content = html! {
        @for node in &nodes {
            (node)
        }
    };
    document(&meta, page.layout.as_ref(), config, content).into_string()
}

/// The standard not-found document, with the fixed not-found metadata.
pub fn not_found_document(config: &SiteConfig) -> String {
    let meta = metadata::derive_metadata(None, &config.site);
    let content = html! {
        div.not-found {
            h1 { "Page not found" }
            p { "The page you are looking for does not exist or has moved." }
            a href="/" { "Back to the home page" }
        }
    };
    document(&meta, None, config, content).into_string()
}

// ============================================================================
// Document shell
// ============================================================================

/// Renders the base HTML document structure around composed content.
fn document(
    meta: &SeoMetadata,
    layout: Option<&Layout>,
    config: &SiteConfig,
    content: Markup,
) -> Markup {
    let navbar_class = if layout
        .and_then(|l| l.navbar.as_ref())
        .is_some_and(|n| n.sticky)
    {
        "site-nav site-nav--sticky"
    } else {
        "site-nav"
    };
    let banner = layout.and_then(|l| l.banner.as_ref()).filter(|b| b.show);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                (head_meta(meta))
            }
            body class=[layout.and_then(|l| l.class_name.as_deref())] {
                @if let Some(banner) = banner {
                    @let banner_class = if banner.is_sticky { "banner banner--sticky" } else { "banner" };
                    div class=(banner_class) style=[banner_style(banner)] {
                        (banner.text.as_deref().unwrap_or_default())
                    }
                }
                header class=(navbar_class) {
                    a.site-name href="/" { (config.site.name) }
                }
                main style=[main_style(layout)] {
                    (content)
                }
                footer.site-footer {
                    p { (config.site.name) }
                }
            }
        }
    }
}

/// All title/description/Open Graph/Twitter meta tags. `meta` is fully
/// populated by derivation, so nothing here is conditional except the
/// image lists.
fn head_meta(meta: &SeoMetadata) -> Markup {
    html! {
        meta charset="UTF-8";
        meta name="viewport" content="width=device-width, initial-scale=1.0";
        title { (meta.title) }
        meta name="description" content=(meta.description);
        meta property="og:title" content=(meta.open_graph.title);
        meta property="og:description" content=(meta.open_graph.description);
        meta property="og:url" content=(meta.open_graph.url);
        @for image in &meta.open_graph.images {
            meta property="og:image" content=(image.url);
            meta property="og:image:width" content=(image.width);
            meta property="og:image:height" content=(image.height);
            meta property="og:image:alt" content=(image.alt);
        }
        meta name="twitter:card" content=(meta.twitter.card);
        meta name="twitter:title" content=(meta.twitter.title);
        meta name="twitter:description" content=(meta.twitter.description);
        @for image in &meta.twitter.images {
            meta name="twitter:image" content=(image);
        }
    }
}

/// Inline style for the main element from layout hints, if any are set.
fn main_style(layout: Option<&Layout>) -> Option<String> {
    let layout = layout?;
    let mut parts = Vec::new();
    if let Some(background) = &layout.background_color {
        parts.push(format!("background-color:{background}"));
    }
    if let Some(max_width) = &layout.max_width {
        parts.push(format!("max-width:{max_width}"));
    }
    if let Some(padding) = &layout.padding {
        parts.push(format!("padding:{padding}"));
    }
    (!parts.is_empty()).then(|| parts.join(";"))
}

fn banner_style(banner: &crate::types::BannerConfig) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(background) = &banner.background_color {
        parts.push(format!("background-color:{background}"));
    }
    if let Some(color) = &banner.text_color {
        parts.push(format!("color:{color}"));
    }
    (!parts.is_empty()).then(|| parts.join(";"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OriginConfig;
    use crate::content::tests::{MockOrigin, SharedOrigin};
    use crate::test_helpers::{page, page_with_sections, section};
    use serde_json::json;
    use std::sync::Arc;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    fn client_with(pages: Vec<crate::types::Page>) -> (Arc<MockOrigin>, ContentClient) {
        let shared = Arc::new(MockOrigin::with_pages(pages));
        let client = ContentClient::new(
            Box::new(SharedOrigin(shared.clone())),
            &OriginConfig::default(),
        );
        (shared, client)
    }

    #[test]
    fn home_alias_redirects_before_any_fetch() {
        let (origin, client) = client_with(vec![page("home")]);
        let outcome = compose(&client, &config(), "/home?utm_source=ad").unwrap();
        assert_eq!(outcome, Composed::Redirect("/".to_string()));
        assert_eq!(origin.call_count(), 0);
    }

    #[test]
    fn root_path_composes_home_document() {
        let home = page_with_sections(
            "home",
            vec![section("hero", None, json!({ "heading": "Welcome home" }))],
        );
        let (_, client) = client_with(vec![home]);
        let Composed::Document(html) = compose(&client, &config(), "/").unwrap() else {
            panic!("expected a composed document");
        };
        assert!(html.contains("Welcome home"));
    }

    #[test]
    fn off_allow_list_sub_slug_skips_origin_entirely() {
        let (origin, client) = client_with(vec![page("steps-to-test/secret-page")]);
        let outcome = compose(&client, &config(), "/steps-to-test/secret-page").unwrap();
        assert!(matches!(outcome, Composed::NotFound(_)));
        assert_eq!(origin.call_count(), 0);
    }

    #[test]
    fn missing_document_yields_not_found_page() {
        let (_, client) = client_with(vec![]);
        let Composed::NotFound(html) = compose(&client, &config(), "/nope").unwrap() else {
            panic!("expected not-found");
        };
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("Back to the home page"));
    }

    #[test]
    fn transport_failure_propagates_to_caller() {
        let origin = MockOrigin::failing(crate::content::ContentError::Http(500));
        let client = ContentClient::new(Box::new(origin), &OriginConfig::default());
        assert!(compose(&client, &config(), "/pricing").is_err());
    }

    #[test]
    fn section_count_in_equals_node_count_out() {
        let page = page_with_sections(
            "services",
            vec![
                section("hero", None, json!({ "heading": "One" })),
                section("does-not-exist", Some("x"), json!({})),
                section("richText", None, json!({ "body": "Three" })),
            ],
        );
        let html = compose_page(&page, &config());

        let normal = html.matches("<section").count();
        let placeholders = html.matches("section-error").count();
        assert_eq!(normal + placeholders, 3);
        assert!(html.contains("data-section-type=\"does-not-exist\""));
        assert!(html.contains("One"));
        assert!(html.contains("Three"));
    }

    #[test]
    fn head_carries_full_og_and_twitter_vocabulary() {
        let html = compose_page(&page("about"), &config());
        for tag in [
            "og:title",
            "og:description",
            "og:url",
            "og:image",
            "og:image:width",
            "og:image:height",
            "og:image:alt",
            "twitter:card",
            "twitter:image",
        ] {
            assert!(html.contains(tag), "missing {tag}");
        }
        assert!(html.contains("content=\"1200\""));
        assert!(html.contains("content=\"630\""));
        assert!(html.contains("summary_large_image"));
    }

    #[test]
    fn layout_hints_shape_the_shell() {
        let mut page = page("styled");
        page.layout = Some(crate::types::Layout {
            class_name: Some("landing".to_string()),
            background_color: Some("#f7f7f7".to_string()),
            max_width: Some("960px".to_string()),
            padding: None,
            navbar: Some(crate::types::NavbarConfig { sticky: true }),
            banner: Some(crate::types::BannerConfig {
                show: true,
                text: Some("Free shipping this week".to_string()),
                background_color: Some("#003366".to_string()),
                text_color: Some("#ffffff".to_string()),
                is_sticky: false,
            }),
        });
        let html = compose_page(&page, &config());

        assert!(html.contains("<body class=\"landing\""));
        assert!(html.contains("site-nav--sticky"));
        assert!(html.contains("Free shipping this week"));
        assert!(html.contains("background-color:#003366"));
        assert!(html.contains("max-width:960px"));
    }

    #[test]
    fn hidden_banner_is_not_rendered() {
        let mut page = page("quiet");
        page.layout = Some(crate::types::Layout {
            banner: Some(crate::types::BannerConfig {
                show: false,
                text: Some("Should not appear".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        });
        let html = compose_page(&page, &config());
        assert!(!html.contains("Should not appear"));
    }

    #[test]
    fn composition_is_deterministic() {
        let page = page_with_sections(
            "about",
            vec![section("richText", None, json!({ "body": "Stable" }))],
        );
        assert_eq!(compose_page(&page, &config()), compose_page(&page, &config()));
    }
}
