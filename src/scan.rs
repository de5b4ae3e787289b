//! Source discovery.
//!
//! Stage 1 of the build: walk the project root for D and DDoc sources
//! (`.d`, `.dd` or `.ddoc`), drop everything the configured exclusion
//! patterns match, and return root-relative paths in a deterministic order.
//!
//! ## Ordering
//!
//! Directory-entry order varies across platforms and filesystems, so the
//! walk order is irrelevant: the final list is always sorted
//! case-insensitively by path string (raw string as tie-break). Navigation
//! and rendering both iterate this list, which keeps the generated site
//! reproducible across runs.
//!
//! ## Module-name collisions
//!
//! Two sources that derive the same dotted module name (e.g. `pkg/util.d`
//! and `pkg.util.d`) would silently fight over one navigation entry and one
//! output file, so the scan rejects them instead.

use crate::exclude::ExcludeSet;
use crate::naming;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] walkdir::Error),
    #[error("sources {first} and {second} both document module {module}")]
    DuplicateModuleName {
        module: String,
        first: String,
        second: String,
    },
}

const SOURCE_EXTENSIONS: &[&str] = &["d", "dd", "ddoc"];

/// Collect every eligible source under `root`, sorted case-insensitively.
///
/// Files without a source extension are skipped silently; most files in a
/// project tree are not source units. An unreadable or missing root is
/// fatal.
pub fn scan(root: &Path, excludes: &ExcludeSet) -> Result<Vec<String>, ScanError> {
    let mut sources = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let ext = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if !SOURCE_EXTENSIONS.contains(&ext) {
            continue;
        }
        let rel = relative_path(entry.path(), root);
        if excludes.is_excluded(&rel) {
            continue;
        }
        sources.push(rel);
    }

    sources.sort_by(|a, b| {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    });

    check_collisions(&sources)?;
    Ok(sources)
}

/// Root-relative path with `/` separators and no leading `./`.
fn relative_path(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn check_collisions(sources: &[String]) -> Result<(), ScanError> {
    let mut seen: HashMap<String, &String> = HashMap::new();
    for source in sources {
        let module = naming::module_name(source);
        if let Some(first) = seen.insert(module.clone(), source) {
            return Err(ScanError::DuplicateModuleName {
                module,
                first: first.clone(),
                second: source.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "module placeholder;\n").unwrap();
    }

    fn compile(patterns: &[&str]) -> ExcludeSet {
        let owned: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
        ExcludeSet::compile(&owned).unwrap()
    }

    #[test]
    fn finds_sources_by_extension() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.d");
        touch(tmp.path(), "pkg/b.dd");
        touch(tmp.path(), "pkg/sub/c.ddoc");
        touch(tmp.path(), "README.md");
        touch(tmp.path(), "notes.txt");

        let sources = scan(tmp.path(), &ExcludeSet::default()).unwrap();
        assert_eq!(sources, vec!["a.d", "pkg/b.dd", "pkg/sub/c.ddoc"]);
    }

    #[test]
    fn exclusion_patterns_filter_sources() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.d");
        touch(tmp.path(), "test/b.d");
        touch(tmp.path(), "pkg/c.dd");

        let sources = scan(tmp.path(), &compile(&["test/.*"])).unwrap();
        assert_eq!(sources, vec!["a.d", "pkg/c.dd"]);
    }

    #[test]
    fn ordering_is_case_insensitive() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "Zeta.d");
        touch(tmp.path(), "alpha.d");
        touch(tmp.path(), "Beta.d");

        let sources = scan(tmp.path(), &ExcludeSet::default()).unwrap();
        assert_eq!(sources, vec!["alpha.d", "Beta.d", "Zeta.d"]);
    }

    #[test]
    fn scan_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.d");
        touch(tmp.path(), "pkg/b.dd");
        touch(tmp.path(), "pkg/sub/c.d");

        let first = scan(tmp.path(), &ExcludeSet::default()).unwrap();
        let second = scan(tmp.path(), &ExcludeSet::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn paths_are_root_relative() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "pkg/b.d");

        let sources = scan(tmp.path(), &ExcludeSet::default()).unwrap();
        assert_eq!(sources, vec!["pkg/b.d"]);
        assert!(!sources[0].starts_with('/'));
        assert!(!sources[0].starts_with("./"));
    }

    #[test]
    fn extension_match_is_exact() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.d");
        touch(tmp.path(), "b.D");
        touch(tmp.path(), "c.dddoc");

        let sources = scan(tmp.path(), &ExcludeSet::default()).unwrap();
        assert_eq!(sources, vec!["a.d"]);
    }

    #[test]
    fn duplicate_module_name_is_error() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "pkg/util.d");
        touch(tmp.path(), "pkg.util.d");

        let result = scan(tmp.path(), &ExcludeSet::default());
        match result {
            Err(ScanError::DuplicateModuleName { module, .. }) => {
                assert_eq!(module, "pkg.util");
            }
            other => panic!("expected DuplicateModuleName, got {other:?}"),
        }
    }

    #[test]
    fn missing_root_is_error() {
        let tmp = TempDir::new().unwrap();
        let result = scan(&tmp.path().join("nope"), &ExcludeSet::default());
        assert!(matches!(result, Err(ScanError::Io(_))));
    }

    #[test]
    fn empty_tree_yields_empty_list() {
        let tmp = TempDir::new().unwrap();
        let sources = scan(tmp.path(), &ExcludeSet::default()).unwrap();
        assert!(sources.is_empty());
    }
}
