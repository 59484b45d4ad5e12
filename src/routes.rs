//! Request-path resolution and static route enumeration.
//!
//! All URL handling lives here so the rest of the engine only ever sees
//! canonical slugs. A resolution is always one of three things: a canonical
//! slug to look up, an explicit redirect, or NotFound — never a raw
//! passthrough of unvalidated input.
//!
//! ## Rules
//!
//! - The root path serves the home document, identified by the
//!   [`HOME_SLUG`] sentinel.
//! - A request for the sentinel itself (`/home`) redirects to `/`, so the
//!   home document is never addressable at two URLs. Query parameters do
//!   not affect this.
//! - Namespaced sections (`eligibility/...`, `steps-to-test/...`) prefix
//!   the incoming sub-slug with the namespace before lookup. The
//!   `steps-to-test` namespace enumerates its own valid children: a
//!   sub-slug outside [`STEPS_SUBPAGES`] is NotFound regardless of what
//!   the origin holds (fail-closed).

use crate::content::ContentClient;

/// Sentinel slug under which the CMS stores the home document.
pub const HOME_SLUG: &str = "home";

/// Namespace for eligibility-flow pages. Sub-slugs are prefixed, not
/// allow-listed — the flow's page set is CMS-driven.
pub const ELIGIBILITY_NAMESPACE: &str = "eligibility";

/// Namespace for the "steps to test" walkthrough pages.
pub const STEPS_NAMESPACE: &str = "steps-to-test";

/// Valid children of the steps namespace. The list is authoritative: the
/// origin is never queried for a sub-slug outside it.
pub const STEPS_SUBPAGES: &[&str] = &[
    "before-you-test",
    "collect-your-sample",
    "ship-your-sample",
    "get-your-results",
];

/// Outcome of resolving a raw request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Look this canonical slug up at the content origin.
    Content { slug: String },
    /// Controlled short-circuit; terminates resolution before any fetch.
    Redirect { to: String },
    NotFound,
}

/// Resolve a raw request path to a canonical slug, redirect, or NotFound.
///
/// Accepts the dynamic route parameter as supplied by the routing layer:
/// leading/trailing slashes, a query string, or a fragment may be present
/// and are stripped during normalization.
pub fn resolve(raw_path: &str) -> Resolution {
    let Some(segments) = normalize(raw_path) else {
        return Resolution::NotFound;
    };

    match segments.as_slice() {
        [] => Resolution::Content {
            slug: HOME_SLUG.to_string(),
        },
        [single] if *single == HOME_SLUG => Resolution::Redirect {
            to: "/".to_string(),
        },
        [ns, rest @ ..] if *ns == ELIGIBILITY_NAMESPACE && !rest.is_empty() => {
            resolve_in_namespace(ELIGIBILITY_NAMESPACE, &rest.join("/"))
        }
        [ns, rest @ ..] if *ns == STEPS_NAMESPACE && !rest.is_empty() => {
            resolve_in_namespace(STEPS_NAMESPACE, &rest.join("/"))
        }
        segments => Resolution::Content {
            slug: segments.join("/"),
        },
    }
}

/// Resolve a sub-slug within a fixed namespace, as used by routing layers
/// that mount a namespace at a fixed prefix and pass only the tail.
///
/// The namespace is prefixed onto the sub-slug before lookup. Namespaces
/// with an allow-list reject off-list sub-slugs without consulting the
/// origin.
pub fn resolve_in_namespace(namespace: &str, sub_slug: &str) -> Resolution {
    let Some(segments) = normalize(sub_slug) else {
        return Resolution::NotFound;
    };
    if segments.is_empty() {
        return Resolution::NotFound;
    }
    let sub = segments.join("/");

    if namespace == STEPS_NAMESPACE && !STEPS_SUBPAGES.contains(&sub.as_str()) {
        return Resolution::NotFound;
    }

    Resolution::Content {
        slug: format!("{namespace}/{sub}"),
    }
}

/// Public URL path for a canonical slug: `/` for the home document,
/// `/{slug}` otherwise.
pub fn public_path(slug: &str) -> String {
    if slug == HOME_SLUG {
        "/".to_string()
    } else {
        format!("/{slug}")
    }
}

/// Enumerate every slug that should be pre-rendered as a dynamic path.
///
/// The home document is excluded — it is served at the root, not as a
/// dynamic path. Enumeration failure degrades to an empty set: fewer pages
/// get pre-rendered, but the build does not fail.
pub fn static_paths(client: &ContentClient) -> Vec<String> {
    match client.all_slugs() {
        Ok(slugs) => slugs
            .into_iter()
            .filter(|s| s.as_str() != HOME_SLUG)
            .collect(),
        Err(err) => {
            log::warn!("slug enumeration failed, pre-rendering no dynamic routes: {err}");
            Vec::new()
        }
    }
}

/// Split a raw path into validated segments.
///
/// Strips any query string or fragment, drops empty segments from
/// leading/trailing/doubled slashes, and rejects the whole path when a
/// segment contains characters outside `[A-Za-z0-9_-]` (this also covers
/// `.` and `..` traversal segments). Returns `None` on rejection.
fn normalize(raw: &str) -> Option<Vec<&str>> {
    let path = raw
        .split(['?', '#'])
        .next()
        .unwrap_or_default();

    let mut segments = Vec::new();
    for segment in path.split('/') {
        if segment.is_empty() {
            continue;
        }
        if !segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        segments.push(segment);
    }
    Some(segments)
}
