//! # AutoDDoc
//!
//! Documentation generator for D projects using DDoc. AutoDDoc scans a
//! project tree for D and DDoc sources, synthesizes a shared macro template
//! wiring every discovered module into one cross-linked site, and drives the
//! DDoc renderer (the D compiler) once per module plus once for a landing
//! page.
//!
//! # Architecture: Sequential Pipeline
//!
//! A build runs through four strictly ordered phases:
//!
//! ```text
//! 1. Scan       project root  →  ordered source list
//! 2. Template   source list   →  AUTODDOC_TEMPLATE.ddoc  (transient)
//! 3. Assets     defaults/overrides → css/style.css, images/logo.png, index.dd
//! 4. Generate   one renderer invocation per page → {module}.html, index.html
//! ```
//!
//! The source list is sorted before the template is assembled, and the
//! template is frozen before the first renderer invocation. Navigation
//! order, rendering order and output file names all derive from the same
//! list, so every generated page is reachable from every other page's
//! sidebar.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `autoddoc.toml` loading, validation, and the stock config text |
//! | [`exclude`] | compiled `ignore` patterns, prefix-anchored path matching |
//! | [`scan`] | phase 1: recursive source discovery with deterministic ordering |
//! | [`naming`] | dotted module names derived from relative paths |
//! | [`template`] | phase 2: DDoc macro/template document synthesis |
//! | [`assets`] | phase 3: stylesheet, logo and landing-page installation |
//! | [`generate`] | phase 4: sequential renderer invocations, cleanup, batch report |
//! | [`output`] | CLI output formatting for scan results and build reports |
//!
//! # Design Decisions
//!
//! ## External Renderer, Not a DDoc Implementation
//!
//! AutoDDoc never parses D source. Rendering is delegated entirely to the
//! configured compiler command (`dmd -d -c -o-` by default, GDC/LDC work
//! too) through a narrow command-line contract:
//! `<command> -Df<output> <template> <source>`. Module names are a pure path
//! transformation, which is why the package hierarchy must match the
//! directory hierarchy.
//!
//! ## Best-Effort Batch Rendering
//!
//! A project with one broken module should still get documentation for the
//! other hundred. Renderer failures are collected per unit in a
//! [`generate::BuildReport`] and summarized after the batch; they never
//! abort it. Configuration and filesystem errors, by contrast, abort the
//! run before or during setup.
//!
//! ## Full Regeneration
//!
//! Every run rewrites the whole output tree. No manifests, no caching, no
//! incremental diffing. The renderer dominates the cost, and idempotent
//! overwrites keep the pipeline free of state to invalidate.

pub mod assets;
pub mod config;
pub mod exclude;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod template;
