//! CLI output formatting.
//!
//! Each pipeline phase has a `format_*` function that returns display lines
//! (pure, testable) and a `print_*` wrapper that writes them to stdout.
//!
//! ## Scan
//!
//! ```text
//! Modules (2)
//!     a
//!         Source: a.d
//!     pkg.b
//!         Source: pkg/b.dd
//! ```
//!
//! ## Build report
//!
//! ```text
//! index.dd → index.html
//! a.d → a.html
//! pkg/b.dd → pkg.b.html (renderer exited with code 1)
//! Generated 3 pages, 1 failed
//! ```

use crate::generate::{BuildReport, RenderStatus};
use crate::naming;

/// Format the discovered source list: module name first, source path as
/// indented context.
pub fn format_scan_output(sources: &[String]) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!("Modules ({})", sources.len()));
    for source in sources {
        lines.push(format!("    {}", naming::module_name(source)));
        lines.push(format!("        Source: {}", source));
    }
    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(sources: &[String]) {
    for line in format_scan_output(sources) {
        println!("{}", line);
    }
}

/// Format the per-page build report with a trailing summary line.
pub fn format_build_report(report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();
    for unit in &report.units {
        let line = match &unit.status {
            RenderStatus::Success => {
                format!("{} \u{2192} {}", unit.input, unit.page)
            }
            RenderStatus::ExitCode(code) => format!(
                "{} \u{2192} {} (renderer exited with code {})",
                unit.input, unit.page, code
            ),
            RenderStatus::Killed => format!(
                "{} \u{2192} {} (renderer killed by signal)",
                unit.input, unit.page
            ),
            RenderStatus::SpawnFailed(err) => format!(
                "{} \u{2192} {} (renderer failed to start: {})",
                unit.input, unit.page, err
            ),
        };
        lines.push(line);
    }

    let failed = report.failed_units().count();
    if failed == 0 {
        lines.push(format!("Generated {} pages", report.units.len()));
    } else {
        lines.push(format!(
            "Generated {} pages, {} failed",
            report.units.len(),
            failed
        ));
    }
    lines
}

/// Print the build report to stdout.
pub fn print_build_report(report: &BuildReport) {
    for line in format_build_report(report) {
        println!("{}", line);
    }
}
