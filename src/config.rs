//! Build configuration module.
//!
//! Handles loading and validating the `autoddoc.toml` file that drives a
//! documentation build. Configuration is flat: stock defaults are overridden
//! by whatever keys the user's file supplies.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [project]
//! name = ""                    # Project name shown in page headers
//! version = ""                 # Version string shown next to the name
//! copyright = ""               # Holder, without the "Copyright (c)" part
//! logo = ""                    # PNG logo to install as images/logo.png
//!
//! [output]
//! directory = "autoddoc"       # Where the documentation is written
//! style = ""                   # Stylesheet override (empty = default)
//! index = ""                   # Landing-page override (empty = default)
//! links = ""                   # Comma-separated "URL label" nav links
//! ignore = ""                  # Comma-separated regex patterns to skip
//!
//! [ddoc]
//! command = "dmd -d -c -o-"    # Renderer command-line prefix
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: set just the keys you want. Unknown keys are
//! rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("can't find configuration file {0} (run `autoddoc --gen-config` to create one)")]
    Missing(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration loaded from `autoddoc.toml`.
///
/// All fields have defaults. User config files need only specify the values
/// they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Project identity shown in generated pages.
    pub project: ProjectInfo,
    /// Output locations, overrides, links, and exclusion patterns.
    pub output: OutputConfig,
    /// External renderer settings.
    pub ddoc: DdocConfig,
}

impl Config {
    /// Validate config values before any filesystem work starts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ddoc.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "ddoc.command must not be empty".into(),
            ));
        }
        self.output.links()?;
        Ok(())
    }
}

/// Project identity, interpolated into page headers and the footer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectInfo {
    /// Project name, e.g. `"AutoDDoc Documentation Generator"`.
    pub name: String,
    /// Version string, e.g. `"0.1 alpha"`.
    pub version: String,
    /// Copyright holder without the `"Copyright (c)"` part. Empty means no
    /// copyright line.
    pub copyright: String,
    /// Path to a PNG logo. Empty means no logo.
    pub logo: String,
}

/// Output tree settings: destination, asset overrides, navigation links,
/// and exclusion patterns.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory the documentation is written to.
    pub directory: String,
    /// Stylesheet override path. Empty means the default style is generated.
    pub style: String,
    /// Landing-page override path. Empty means the default page is generated.
    pub index: String,
    /// Comma-separated `"URL label"` pairs for the navigation sidebar.
    pub links: String,
    /// Comma-separated regex patterns for sources to skip.
    pub ignore: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: "autoddoc".to_string(),
            style: String::new(),
            index: String::new(),
            links: String::new(),
            ignore: String::new(),
        }
    }
}

impl OutputConfig {
    /// Output directory, with an empty value falling back to `autoddoc`.
    pub fn directory(&self) -> &str {
        if self.directory.is_empty() {
            "autoddoc"
        } else {
            &self.directory
        }
    }

    /// Exclusion patterns as a list, trimmed, with empty entries dropped.
    pub fn ignore_patterns(&self) -> Vec<String> {
        split_list(&self.ignore)
    }

    /// Parsed navigation links, in configuration order.
    pub fn links(&self) -> Result<Vec<ExternalLink>, ConfigError> {
        parse_links(&self.links)
    }
}

/// External renderer settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DdocConfig {
    /// Command-line prefix used to invoke the renderer, e.g. `dmd -d -c -o-`.
    /// Can be changed to use GDC or LDC.
    pub command: String,
}

impl Default for DdocConfig {
    fn default() -> Self {
        Self {
            command: "dmd -d -c -o-".to_string(),
        }
    }
}

/// A user-supplied navigation link.
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLink {
    pub url: String,
    pub label: String,
}

/// Parse the comma-separated `"URL label"` link list.
///
/// The label is everything after the first space, so multi-word labels work:
/// `"http://dlang.org The D site"` links to `http://dlang.org` with label
/// `The D site`. An entry without a label is a configuration error.
pub fn parse_links(raw: &str) -> Result<Vec<ExternalLink>, ConfigError> {
    let mut links = Vec::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let (url, label) = entry.split_once(' ').ok_or_else(|| {
            ConfigError::Validation(format!(
                "link entry \"{entry}\" must be a \"URL label\" pair"
            ))
        })?;
        let label = label.trim();
        if label.is_empty() {
            return Err(ConfigError::Validation(format!(
                "link entry \"{entry}\" must be a \"URL label\" pair"
            )));
        }
        links.push(ExternalLink {
            url: url.to_string(),
            label: label.to_string(),
        });
    }
    Ok(links)
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

/// Load config from the given file, rejecting unknown keys and validating
/// the result.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.is_file() {
        return Err(ConfigError::Missing(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `autoddoc.toml` with all keys explained.
///
/// Used by the `--gen-config` CLI flag.
pub fn stock_config_toml() -> &'static str {
    r##"# AutoDDoc configuration
# ======================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

[project]
# Name of the project. E.g. "AutoDDoc Documentation Generator".
name = ""

# Project version string. E.g. "0.1 alpha".
version = ""

# Copyright without the "Copyright (c)" part. E.g. "Joe Coder 2001-2042".
copyright = ""

# File name of the logo of the project, if any.
# Should be a PNG image. E.g. "logo.png".
logo = ""

[output]
# Directory to write the documentation to. Empty means "autoddoc".
directory = "autoddoc"

# Stylesheet to use. If empty, the default style is generated.
# You can create a custom style by generating the default style with
# `autoddoc --gen-style` and modifying it.
style = ""

# Landing page to use. If empty, the default landing page is generated.
# You can create a custom landing page by generating the default with
# `autoddoc --gen-index` and modifying it.
index = ""

# Any extra links to add to the sidebar of the documentation, as
# comma-separated "URL label" pairs. E.g. to add links to Google and the
# D language site:
# "http://www.google.com Google, http://dlang.org DLang"
links = ""

# Source files or patterns to ignore, as comma-separated regular
# expressions. E.g. to ignore main.d and all sources in the test/
# directory: "main.d, test/.*"
ignore = ""

[ddoc]
# Command used to render the documentation.
# Can be modified e.g. to use GDC or LDC.
command = "dmd -d -c -o-"
"##
}
