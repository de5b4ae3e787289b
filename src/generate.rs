//! Renderer orchestration.
//!
//! The final stage of the build: drive the external DDoc renderer over the
//! landing page and every discovered source unit, one blocking invocation at
//! a time, in source order. The renderer is an opaque collaborator invoked
//! as:
//!
//! ```text
//! <command...> -Df<absolute output path> <template> <input>
//! ```
//!
//! with stdout/stderr inherited and the exit code captured.
//!
//! ## Best-effort batching
//!
//! One broken source unit must not block documentation for the rest of the
//! project, so per-unit renderer failures are recorded in a [`BuildReport`]
//! instead of raised; the batch always runs to completion and failures are
//! reported afterwards. There are no retries. Only filesystem failures of
//! the orchestrator itself (removing transient inputs, resolving output
//! paths) abort the run.
//!
//! ## Cleanup
//!
//! The landing-page source is removed right after its page is rendered, and
//! the shared template is removed after the last invocation. If the run
//! aborts before that point the template can be left behind; cleanup on
//! abort is best-effort only.

use crate::assets::INDEX_SOURCE_FILE;
use crate::config::ConfigError;
use crate::naming;
use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Outcome of one renderer invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderStatus {
    Success,
    /// Renderer exited with a non-zero code.
    ExitCode(i32),
    /// Renderer was terminated by a signal.
    Killed,
    /// Renderer process could not be started.
    SpawnFailed(String),
}

impl RenderStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, RenderStatus::Success)
    }
}

/// Outcome of rendering one page.
#[derive(Debug)]
pub struct UnitReport {
    /// Output file name, relative to the output directory.
    pub page: String,
    /// Renderer input: the landing-page source or a source unit.
    pub input: String,
    pub status: RenderStatus,
}

/// Aggregated per-page outcomes of one build run.
#[derive(Debug, Default)]
pub struct BuildReport {
    pub units: Vec<UnitReport>,
}

impl BuildReport {
    pub fn failed_units(&self) -> impl Iterator<Item = &UnitReport> {
        self.units.iter().filter(|unit| !unit.status.is_success())
    }
}

/// Parsed renderer command line: program plus its leading arguments.
#[derive(Debug, Clone)]
pub struct Renderer {
    program: String,
    args: Vec<String>,
}

impl Renderer {
    /// Split a configured command line such as `dmd -d -c -o-` into the
    /// program and its leading arguments.
    pub fn from_command(command: &str) -> Result<Self, ConfigError> {
        let mut parts = command.split_whitespace().map(String::from);
        let program = parts
            .next()
            .ok_or_else(|| ConfigError::Validation("ddoc.command must not be empty".into()))?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Arguments for rendering `input` through `template` into `output`.
    fn invocation_args(&self, template: &Path, input: &Path, output: &Path) -> Vec<String> {
        let mut argv = Vec::with_capacity(self.args.len() + 3);
        argv.extend(self.args.iter().cloned());
        argv.push(format!("-Df{}", output.display()));
        argv.push(template.display().to_string());
        argv.push(input.display().to_string());
        argv
    }

    /// Invoke the renderer synchronously for one page, echoing the command
    /// line first. The child inherits stdout/stderr; there is no timeout.
    fn render(&self, template: &Path, input: &Path, output: &Path) -> RenderStatus {
        let argv = self.invocation_args(template, input, output);
        println!("{} {}", self.program, argv.join(" "));
        match Command::new(&self.program).args(&argv).status() {
            Ok(status) if status.success() => RenderStatus::Success,
            Ok(status) => match status.code() {
                Some(code) => RenderStatus::ExitCode(code),
                None => RenderStatus::Killed,
            },
            Err(err) => RenderStatus::SpawnFailed(err.to_string()),
        }
    }
}

/// Render the landing page and every source unit, in order, then remove the
/// transient template.
///
/// The template and assets must already be in place. `sources` paths are
/// root-relative; each is rendered to `{out_dir}/{module}.html` with the
/// module name derived from its path.
pub fn run(
    sources: &[String],
    root: &Path,
    out_dir: &Path,
    template_path: &Path,
    renderer: &Renderer,
) -> Result<BuildReport, GenerateError> {
    let mut report = BuildReport::default();

    // Landing page first. Its source is a transient input, removed once the
    // page is rendered.
    let index_source = out_dir.join(INDEX_SOURCE_FILE);
    let index_html = std::path::absolute(out_dir.join("index.html"))?;
    let status = renderer.render(template_path, &index_source, &index_html);
    report.units.push(UnitReport {
        page: "index.html".to_string(),
        input: INDEX_SOURCE_FILE.to_string(),
        status,
    });
    fs::remove_file(&index_source)?;

    for source in sources {
        let page = format!("{}.html", naming::module_name(source));
        let output = std::path::absolute(out_dir.join(&page))?;
        let input = root.join(source);
        let status = renderer.render(template_path, &input, &output);
        report.units.push(UnitReport {
            page,
            input: source.clone(),
            status,
        });
    }

    fs::remove_file(template_path)?;
    Ok(report)
}
