//! File-to-file compilation entry points.
//!
//! [`compile`] is the whole job: resolve paths, run the engine once, check
//! the PDF landed where expected, optionally clean up. It blocks until the
//! engine exits and has no timeout; a hung engine hangs the caller.
//! [`compile_async`] moves that blocking call onto tokio's blocking pool for
//! async hosts.

use crate::config::CompileConfig;
use crate::diagnostics;
use crate::error::Tex2PdfError;
use crate::output::CompileOutput;
use crate::pipeline::{cleanup, engine, paths};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Compile a LaTeX file to `<output_dir>/<stem>.pdf`.
///
/// # Arguments
/// * `input`      — the `.tex` file; must exist
/// * `output_dir` — created with all missing parents if absent
/// * `config`     — engine, extra args, cleanup switch
///
/// # Errors
/// - [`Tex2PdfError::InputNotFound`] — `input` does not exist
/// - [`Tex2PdfError::OutputDir`] — the output directory could not be created
/// - [`Tex2PdfError::EngineLaunch`] — the engine could not be started
/// - [`Tex2PdfError::CompilationFailed`] — the engine exited non-zero; the
///   error carries both captured streams and nothing is cleaned up
/// - [`Tex2PdfError::ArtifactMissing`] — exit 0 but no PDF
///
/// A zero exit with a PDF present counts as success even when the document
/// still needs another pass for references.
pub fn compile(
    input: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &CompileConfig,
) -> Result<CompileOutput, Tex2PdfError> {
    let start = Instant::now();
    let input = input.as_ref();
    info!("Compiling {} with {}", input.display(), config.engine);

    // ── Step 1: Resolve paths, create output dir ─────────────────────────
    let resolved = paths::resolve(input, output_dir.as_ref())?;

    // ── Step 2: Run the engine once ──────────────────────────────────────
    let run = engine::run(config, &resolved)?;
    if !run.success() {
        let summary = diagnostics::summarize(&run.stdout, &run.stderr);
        debug!("{} failed: {:?}", config.engine, summary);
        return Err(Tex2PdfError::CompilationFailed {
            engine: config.engine.clone(),
            code: run.status.code(),
            summary,
            stdout: run.stdout,
            stderr: run.stderr,
        });
    }

    // ── Step 3: Check the artifact ───────────────────────────────────────
    let pdf_path = resolved.artifact_path();
    if !pdf_path.is_file() {
        return Err(Tex2PdfError::ArtifactMissing { path: pdf_path });
    }

    // ── Step 4: Optional cleanup ─────────────────────────────────────────
    let removed_artifacts = if config.cleanup {
        cleanup::remove_aux_files(&resolved, &config.aux_extensions)
    } else {
        Vec::new()
    };

    let duration_ms = start.elapsed().as_millis() as u64;
    info!(
        "Wrote {} in {}ms ({} auxiliary files removed)",
        pdf_path.display(),
        duration_ms,
        removed_artifacts.len()
    );

    Ok(CompileOutput {
        pdf_path,
        removed_artifacts,
        duration_ms,
    })
}

/// Async wrapper around [`compile`].
///
/// The engine run is blocking I/O, so it is moved to
/// [`tokio::task::spawn_blocking`] rather than run on the executor.
/// Requires a running tokio runtime.
pub async fn compile_async(
    input: impl Into<PathBuf>,
    output_dir: impl Into<PathBuf>,
    config: &CompileConfig,
) -> Result<CompileOutput, Tex2PdfError> {
    let input = input.into();
    let output_dir = output_dir.into();
    let config = config.clone();

    tokio::task::spawn_blocking(move || compile(&input, &output_dir, &config))
        .await
        .map_err(|e| Tex2PdfError::Internal(format!("compile task failed: {e}")))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_input_fails_before_engine_runs() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out");
        let config = CompileConfig::builder()
            .engine("tex2pdf-no-such-engine-9f3c")
            .build()
            .unwrap();

        let err = compile(tmp.path().join("missing.tex"), &out, &config).unwrap_err();
        assert!(matches!(err, Tex2PdfError::InputNotFound { .. }));
        assert!(!out.exists());
    }

    #[test]
    fn launch_failure_propagates() {
        let tmp = TempDir::new().unwrap();
        let tex = tmp.path().join("paper.tex");
        std::fs::write(&tex, "\\documentclass{article}").unwrap();
        let config = CompileConfig::builder()
            .engine("tex2pdf-no-such-engine-9f3c")
            .build()
            .unwrap();

        let err = compile(&tex, tmp.path().join("out"), &config).unwrap_err();
        assert!(matches!(err, Tex2PdfError::EngineLaunch { .. }));
        // The directory is created before the engine is launched.
        assert!(tmp.path().join("out").is_dir());
    }

    #[test]
    fn async_wrapper_reports_same_error() {
        let tmp = TempDir::new().unwrap();
        let config = CompileConfig::default();
        let err = tokio_test::block_on(compile_async(
            tmp.path().join("none.tex"),
            tmp.path(),
            &config,
        ))
        .unwrap_err();
        assert!(matches!(err, Tex2PdfError::InputNotFound { .. }));
    }
}
