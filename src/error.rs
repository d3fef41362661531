//! Error types for the edgequake-tex2pdf library.
//!
//! Every failure is fatal for the call that produced it: a compilation is a
//! single engine run, so there is no partial result to hand back. Messages
//! are kept to a single line because the CLI prints exactly one error line
//! on standard error.
//!
//! The raw engine streams travel inside [`Tex2PdfError::CompilationFailed`]
//! rather than in its message, so callers decide where the (often long)
//! pdflatex transcript goes.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the edgequake-tex2pdf library.
#[derive(Debug, Error)]
pub enum Tex2PdfError {
    // ── Input errors ──────────────────────────────────────────────────────
    /// The LaTeX source file does not exist.
    #[error("LaTeX source not found: '{path}'")]
    InputNotFound { path: PathBuf },

    /// The caller handed us something we cannot compile at all.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // ── Engine errors ─────────────────────────────────────────────────────
    /// The engine binary could not be started (not on PATH, not executable).
    #[error("Failed to launch '{engine}': {source}")]
    EngineLaunch {
        engine: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran and exited with a non-zero status.
    ///
    /// `stdout` and `stderr` hold the complete captured streams.
    #[error("{engine} failed with {}{}", exit_label(.code), summary_suffix(.summary))]
    CompilationFailed {
        engine: String,
        code: Option<i32>,
        summary: Option<String>,
        stdout: String,
        stderr: String,
    },

    /// The engine exited with status 0 but did not write the expected PDF.
    #[error("Expected PDF was not created: '{path}'")]
    ArtifactMissing { path: PathBuf },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// The output directory could not be created.
    #[error("Failed to create output directory '{path}': {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Any other filesystem failure on a known path.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Report errors ─────────────────────────────────────────────────────
    /// The `{"pdf": ...}` line printed by the CLI could not be parsed.
    #[error("Unable to parse compiler output: {0}")]
    ReportParse(String),

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Catch-all ─────────────────────────────────────────────────────────
    /// Unexpected internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Tex2PdfError {
    /// Captured `(stdout, stderr)` of a failed engine run, if any.
    pub fn engine_streams(&self) -> Option<(&str, &str)> {
        match self {
            Tex2PdfError::CompilationFailed { stdout, stderr, .. } => Some((stdout, stderr)),
            _ => None,
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("exit code {c}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn summary_suffix(summary: &Option<String>) -> String {
    summary
        .as_deref()
        .map(|s| format!(": {s}"))
        .unwrap_or_default()
}
