//! Site pre-rendering.
//!
//! Composes every enumerated route into the output directory:
//!
//! ```text
//! dist/
//! ├── index.html                     # home document, served at /
//! ├── about/index.html               # one directory per slug
//! ├── eligibility/register/index.html
//! ├── 404.html                       # standard not-found document
//! └── sitemap.xml                    # from the same route set
//! ```
//!
//! Failure policy mirrors the per-section isolation story one level up:
//! a route that fails with a transport error is logged and counted, and
//! the build moves on. Only filesystem problems abort — if we cannot
//! write the output directory there is nothing useful to continue with.

use crate::compose::{self, Composed};
use crate::config::SiteConfig;
use crate::content::{ContentClient, ContentError};
use crate::routes;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of one build run.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Routes written to disk, in render order.
    pub rendered: Vec<RenderedRoute>,
    /// Routes skipped by design (redirects, listed-but-absent documents).
    pub skipped: Vec<String>,
    /// Routes that failed with a transport error.
    pub failed: Vec<FailedRoute>,
}

#[derive(Debug)]
pub struct RenderedRoute {
    /// Public path, e.g. `/about`.
    pub path: String,
    /// Output file relative to the output directory.
    pub file: String,
}

#[derive(Debug)]
pub struct FailedRoute {
    pub path: String,
    pub error: ContentError,
}

/// Pre-render the whole site into `out_dir`.
pub fn build_site(
    client: &ContentClient,
    config: &SiteConfig,
    out_dir: &Path,
) -> Result<BuildReport, BuildError> {
    fs::create_dir_all(out_dir)?;
    let mut report = BuildReport::default();

    // Home first, then every enumerated dynamic route. Enumeration
    // failure already degraded to an empty set inside static_paths.
    let mut paths = vec!["/".to_string()];
    paths.extend(
        routes::static_paths(client)
            .into_iter()
            .map(|slug| format!("/{slug}")),
    );

    for path in paths {
        match compose::compose(client, config, &path) {
            Ok(Composed::Document(html)) => {
                let file = output_file(&path);
                let target = out_dir.join(&file);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(&target, html)?;
                report.rendered.push(RenderedRoute { path, file });
            }
            Ok(Composed::Redirect(to)) => {
                log::info!("skipping {path}: redirects to {to}");
                report.skipped.push(path);
            }
            Ok(Composed::NotFound(_)) => {
                // The origin listed a slug it cannot serve, or a listed
                // slug fails a namespace allow-list.
                log::warn!("skipping {path}: listed by origin but not resolvable");
                report.skipped.push(path);
            }
            Err(err) => {
                log::error!("failed to render {path}: {err}");
                report.failed.push(FailedRoute { path, error: err });
            }
        }
    }

    fs::write(out_dir.join("404.html"), compose::not_found_document(config))?;
    fs::write(out_dir.join("sitemap.xml"), sitemap(config, &report))?;
    Ok(report)
}

/// Output file for a public path: `index.html` at the root, one directory
/// per slug otherwise.
fn output_file(path: &str) -> String {
    if path == "/" {
        "index.html".to_string()
    } else {
        format!("{}/index.html", path.trim_start_matches('/'))
    }
}

/// Minimal sitemap over the routes that actually rendered.
fn sitemap(config: &SiteConfig, report: &BuildReport) -> String {
    let base = config.site.url.trim_end_matches('/');
    let mut xml = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for route in &report.rendered {
        let loc = if route.path == "/" {
            base.to_string()
        } else {
            format!("{base}{}", route.path)
        };
        xml.push_str(&format!("  <url><loc>{loc}</loc></url>\n"));
    }
    xml.push_str("</urlset>\n");
    xml
}
