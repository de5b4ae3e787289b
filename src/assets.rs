//! Static asset installation.
//!
//! Places the stylesheet, the optional project logo, and the landing-page
//! source into the output tree. Defaults for the stylesheet and landing
//! page are embedded at compile time; overrides are copied byte-for-byte.
//!
//! Failures here are fatal for the build. Partial installation is not
//! rolled back; the next run overwrites the output tree.

use crate::config::ProjectInfo;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default stylesheet, written when no `output.style` override is set.
pub const DEFAULT_STYLE: &str = include_str!("../static/style.css");

/// Default landing-page source, written when no `output.index` override is
/// set. A title-only Ddoc page built from the project macros.
pub const DEFAULT_INDEX: &str = include_str!("../static/index.dd");

/// File name of the transient landing-page source inside the output
/// directory.
pub const INDEX_SOURCE_FILE: &str = "index.dd";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

/// Install stylesheet, logo and landing-page source into `out_dir`.
///
/// `style` and `index` are override paths from the configuration; empty
/// means "generate the default". The logo is copied as-is to
/// `images/logo.png`: no format check or conversion, just a rename.
pub fn install(
    project: &ProjectInfo,
    style: &str,
    index: &str,
    out_dir: &Path,
) -> Result<(), AssetError> {
    install_style(style, out_dir)?;
    install_logo(project, out_dir)?;
    install_index(index, out_dir)?;
    Ok(())
}

fn install_style(style: &str, out_dir: &Path) -> Result<(), AssetError> {
    let css_dir = out_dir.join("css");
    create_dir(&css_dir)?;
    let css_path = css_dir.join("style.css");
    if style.is_empty() {
        write_text(&css_path, DEFAULT_STYLE)
    } else {
        copy_file(Path::new(style), &css_path)
    }
}

fn install_logo(project: &ProjectInfo, out_dir: &Path) -> Result<(), AssetError> {
    if project.logo.is_empty() {
        return Ok(());
    }
    let images_dir = out_dir.join("images");
    create_dir(&images_dir)?;
    copy_file(Path::new(&project.logo), &images_dir.join("logo.png"))
}

fn install_index(index: &str, out_dir: &Path) -> Result<(), AssetError> {
    let index_path = out_dir.join(INDEX_SOURCE_FILE);
    if index.is_empty() {
        write_text(&index_path, DEFAULT_INDEX)
    } else {
        copy_file(Path::new(index), &index_path)
    }
}

fn create_dir(path: &Path) -> Result<(), AssetError> {
    fs::create_dir_all(path).map_err(|source| AssetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_text(path: &Path, content: &str) -> Result<(), AssetError> {
    fs::write(path, content).map_err(|source| AssetError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn copy_file(from: &Path, to: &Path) -> Result<(), AssetError> {
    fs::copy(from, to).map(|_| ()).map_err(|source| AssetError::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}
