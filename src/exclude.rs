//! Exclusion-pattern matching for the source scanner.
//!
//! The `output.ignore` configuration key supplies regular expressions; a
//! discovered source is skipped when any of them matches its root-relative
//! path. Matching is prefix-anchored: a pattern must match starting at the
//! first character of the path, but does not need to consume all of it, so
//! `test/.*` excludes everything under `test/` without touching
//! `src/test/helper.d`.

use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("ignore pattern is not a valid regex: \"{pattern}\": {source}")]
pub struct PatternError {
    /// The offending pattern, as configured (after trimming).
    pub pattern: String,
    #[source]
    source: regex::Error,
}

/// Compiled set of exclusion patterns.
#[derive(Debug, Default)]
pub struct ExcludeSet {
    patterns: Vec<Regex>,
}

impl ExcludeSet {
    /// Compile every pattern, failing fast on the first malformed one.
    ///
    /// Patterns are whitespace-trimmed before compilation. Compilation
    /// happens before any scanning, so a bad pattern aborts the build before
    /// filesystem work starts.
    pub fn compile(patterns: &[String]) -> Result<Self, PatternError> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let trimmed = pattern.trim();
            let regex = Regex::new(trimmed).map_err(|source| PatternError {
                pattern: trimmed.to_string(),
                source,
            })?;
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }

    /// True when any pattern matches at the start of `path`.
    pub fn is_excluded(&self, path: &str) -> bool {
        // The regex engine returns the leftmost match, so a match that can
        // start at byte 0 is always the one reported.
        self.patterns
            .iter()
            .any(|regex| regex.find(path).is_some_and(|m| m.start() == 0))
    }
}
