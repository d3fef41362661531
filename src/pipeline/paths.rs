//! Path resolution: absolute input/output locations and stem-derived names.
//!
//! The engine runs with its working directory set to the document's parent,
//! so every path we hand it must be absolute or it would be reinterpreted
//! relative to that directory.

use crate::error::Tex2PdfError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Absolute locations for one compilation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Canonical path of the LaTeX source.
    pub input: PathBuf,
    /// Canonical output directory (exists once resolved).
    pub output_dir: PathBuf,
    /// Directory the engine runs in: the input's parent.
    pub work_dir: PathBuf,
    /// Input base name with its final extension removed.
    pub stem: OsString,
}

impl ResolvedPaths {
    /// `<output_dir>/<stem>.pdf`
    pub fn artifact_path(&self) -> PathBuf {
        sibling(&self.output_dir, &self.stem, ".pdf")
    }

    /// `<output_dir>/<stem><suffix>` for a suffix such as `.synctex.gz`.
    pub fn output_file(&self, suffix: &str) -> PathBuf {
        sibling(&self.output_dir, &self.stem, suffix)
    }
}

/// Resolve both paths and make sure the output directory exists.
///
/// The output directory is created with all missing ancestors; an existing
/// directory is fine. The input is checked first, so a missing input leaves
/// the output directory untouched.
pub fn resolve(input: &Path, output_dir: &Path) -> Result<ResolvedPaths, Tex2PdfError> {
    let input = resolve_input(input)?;

    let output_dir = std::path::absolute(output_dir).map_err(|e| Tex2PdfError::OutputDir {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    std::fs::create_dir_all(&output_dir).map_err(|e| Tex2PdfError::OutputDir {
        path: output_dir.clone(),
        source: e,
    })?;
    let output_dir = output_dir
        .canonicalize()
        .map_err(|e| Tex2PdfError::OutputDir {
            path: output_dir.clone(),
            source: e,
        })?;

    let work_dir = input
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Tex2PdfError::InvalidInput(format!("'{}' has no parent", input.display())))?;
    let stem = input
        .file_stem()
        .map(|s| s.to_os_string())
        .ok_or_else(|| Tex2PdfError::InvalidInput(format!("'{}' has no file name", input.display())))?;

    debug!(
        "Resolved input {} → output dir {}",
        input.display(),
        output_dir.display()
    );

    Ok(ResolvedPaths {
        input,
        output_dir,
        work_dir,
        stem,
    })
}

fn resolve_input(input: &Path) -> Result<PathBuf, Tex2PdfError> {
    match input.canonicalize() {
        Ok(p) if p.is_file() => Ok(p),
        Ok(p) => Err(Tex2PdfError::InvalidInput(format!(
            "'{}' is not a file",
            p.display()
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Tex2PdfError::InputNotFound {
            path: input.to_path_buf(),
        }),
        Err(e) => Err(Tex2PdfError::Io {
            path: input.to_path_buf(),
            source: e,
        }),
    }
}

/// `<dir>/<stem><suffix>`. Built by string append rather than
/// `with_extension` so multi-dot suffixes like `.synctex.gz` stay intact.
pub fn sibling(dir: &Path, stem: &std::ffi::OsStr, suffix: &str) -> PathBuf {
    let mut name = stem.to_os_string();
    name.push(suffix);
    dir.join(name)
}
