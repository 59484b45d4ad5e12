//! # pageforge
//!
//! A content-driven page composition engine. The CMS is the data source:
//! pages are JSON documents naming an ordered list of typed sections, and
//! pageforge turns a request path into a complete HTML document — or
//! pre-renders the whole site ahead of time.
//!
//! # Architecture: Resolve → Fetch → Compose
//!
//! Every page goes through the same three phases:
//!
//! ```text
//! 1. Resolve   raw path   →  canonical slug | redirect | not-found
//! 2. Fetch     slug       →  Page document (bounded-staleness cache)
//! 3. Compose   Page       →  <head> metadata + one node per section
//! ```
//!
//! The phases are independently testable: resolution never touches the
//! network, fetching never inspects content, and composition consumes an
//! already-fetched immutable `Page`.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`routes`] | Path resolution (home alias, namespaces, allow-lists) and static route enumeration |
//! | [`content`] | Content origin client: HTTP transport behind a trait, TTL revalidation cache |
//! | [`metadata`] | SEO metadata derivation with layered fallbacks terminating in site defaults |
//! | [`sections`] | Closed section registry, per-kind renderers, per-section fault isolation |
//! | [`compose`] | Page orchestration and the HTML document shell |
//! | [`build`] | Pre-render every published route, 404 page, sitemap |
//! | [`config`] | `config.toml` loading, validation, stock defaults |
//! | [`types`] | Serde types for the CMS wire contract |
//! | [`output`] | CLI output formatting — route listings and build reports |
//!
//! # Design Decisions
//!
//! ## Closed Registry Over Dynamic Dispatch
//!
//! Section `type` strings come from CMS content, which makes them
//! attacker-adjacent input. The registry is a compile-time-checked sum
//! type ([`sections::SectionKind`]) with one default branch for unknown
//! strings, so the set of renderable kinds is code-reviewed and bounded
//! while unknown future content degrades gracefully.
//!
//! ## Faults Stay Inside Their Section
//!
//! A renderer returns `Result<Markup, RenderFault>`, and the dispatcher
//! converts every fault into an inline placeholder before returning. The
//! composition loop is fault-free by construction: a page with N sections
//! always produces N nodes, and one malformed payload cannot take down
//! its siblings.
//!
//! ## Fallback Chains As Data
//!
//! Every metadata field resolves through an ordered list of optional
//! accessors reduced to the first present value, terminating in a site
//! default. No nested conditionals; each chain is testable on its own.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a
//! compile-time HTML macro system. Malformed markup is a build error,
//! template variables are Rust expressions, and all interpolation is
//! auto-escaped — which matters when the interpolated values are CMS
//! content.
//!
//! ## Absence Is Not An Error
//!
//! The content client maps origin 404s to `Ok(None)`; a missing document
//! is an expected outcome with its own page. Transport failures are real
//! errors, logged and surfaced as the generic error page — never a stack
//! trace, and never silently substituted content.

pub mod build;
pub mod compose;
pub mod config;
pub mod content;
pub mod metadata;
pub mod output;
pub mod routes;
pub mod sections;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
