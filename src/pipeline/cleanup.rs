//! Auxiliary-file removal.
//!
//! Two flavours:
//!
//! * [`remove_aux_files`]: after a run, delete `<stem><ext>` for the
//!   configured suffixes. Only files belonging to the compiled document are
//!   touched.
//! * [`sweep_artifacts`]: delete every build artifact directly inside a
//!   directory regardless of stem, for hosts that compile into a shared
//!   scratch directory.
//!
//! Both are best-effort. A missing file is skipped; any other failure is
//! logged and the remaining files are still attempted.

use crate::pipeline::paths::ResolvedPaths;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Suffixes treated as build artifacts by [`sweep_artifacts`].
pub const SWEEP_EXTENSIONS: [&str; 6] = [".pdf", ".log", ".aux", ".out", ".toc", ".synctex.gz"];

/// Delete `<output_dir>/<stem><ext>` for each suffix. Returns the files that
/// were actually removed.
pub fn remove_aux_files(paths: &ResolvedPaths, extensions: &[String]) -> Vec<PathBuf> {
    extensions
        .iter()
        .map(|ext| paths.output_file(ext))
        .filter(|candidate| remove_quietly(candidate))
        .collect()
}

/// Delete every regular file in `dir` whose lowercased name ends with one of
/// [`SWEEP_EXTENSIONS`]. Not recursive. A missing directory yields an empty
/// list.
pub fn sweep_artifacts(dir: impl AsRef<Path>) -> Vec<PathBuf> {
    let dir = dir.as_ref();
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Vec::new(),
        Err(e) => {
            warn!("Failed to list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .filter(|path| is_artifact_name(path))
        .filter(|path| remove_quietly(path))
        .collect()
}

fn is_artifact_name(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.to_string_lossy().to_lowercase();
    SWEEP_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// `true` if the file existed and is now gone.
fn remove_quietly(path: &Path) -> bool {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!("Removed {}", path.display());
            true
        }
        Err(e) if e.kind() == ErrorKind::NotFound => false,
        Err(e) => {
            warn!("Could not remove {}: {}", path.display(), e);
            false
        }
    }
}
