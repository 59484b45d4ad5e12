//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! Route listings are information-first: the public path is the identity,
//! the output file is secondary context.
//!
//! ```text
//! 001 /            → index.html
//! 002 /about       → about/index.html
//! 003 /pricing     → pricing/index.html
//!
//! Rendered 3 pages, skipped 1, 0 failures
//! ```

use crate::build::BuildReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// One line per rendered route, plus skip/failure context and a summary.
pub fn format_build_report(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    let width = report
        .rendered
        .iter()
        .map(|r| r.path.len())
        .max()
        .unwrap_or(0);
    for (pos, route) in report.rendered.iter().enumerate() {
        lines.push(format!(
            "{} {:width$} → {}",
            format_index(pos + 1),
            route.path,
            route.file,
        ));
    }

    for path in &report.skipped {
        lines.push(format!("    skipped {path}"));
    }
    for failed in &report.failed {
        lines.push(format!("    failed  {} ({})", failed.path, failed.error));
    }

    lines.push(String::new());
    lines.push(format!(
        "Rendered {} pages, skipped {}, {} failures",
        report.rendered.len(),
        report.skipped.len(),
        report.failed.len(),
    ));
    lines
}

pub fn print_build_report(report: &BuildReport) {
    for line in format_build_report(report) {
        println!("{line}");
    }
}

/// One line per static route that would be pre-rendered.
pub fn format_routes(paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .enumerate()
        .map(|(pos, path)| format!("{} {path}", format_index(pos + 1)))
        .collect()
}

pub fn print_routes(paths: &[String]) {
    for line in format_routes(paths) {
        println!("{line}");
    }
}
