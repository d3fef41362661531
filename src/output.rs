//! Result types for a compilation and the CLI's one-line report.
//!
//! The CLI prints exactly one JSON object on success:
//!
//! ```text
//! {"pdf":"/abs/out/paper.pdf"}
//! ```
//!
//! [`CompileReport`] is both the writer and the reader of that line, so a
//! host that spawns `tex2pdf` parses it with the same type that produced it.

use crate::error::Tex2PdfError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of a successful [`crate::compile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileOutput {
    /// Absolute path of the produced PDF: `<output_dir>/<stem>.pdf`.
    pub pdf_path: PathBuf,
    /// Auxiliary files deleted by cleanup (empty when cleanup is off).
    pub removed_artifacts: Vec<PathBuf>,
    /// Wall-clock time of the whole call, engine run included.
    pub duration_ms: u64,
}

impl CompileOutput {
    pub fn report(&self) -> CompileReport {
        CompileReport {
            pdf: self.pdf_path.clone(),
        }
    }
}

/// Outcome of a [`crate::compile_source`] run. The build directory is
/// already gone, so the PDF travels by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDocument {
    pub pdf_bytes: Vec<u8>,
    /// `<sanitised base name>.pdf`
    pub filename: String,
}

/// The JSON payload printed on stdout by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileReport {
    pub pdf: PathBuf,
}

impl CompileReport {
    /// Serialise to a single line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, Tex2PdfError> {
        serde_json::to_string(self).map_err(|e| Tex2PdfError::Internal(format!("report: {e}")))
    }

    /// Parse the report from a captured stdout.
    ///
    /// Only the last non-empty line counts, so anything the engine or a
    /// wrapper script printed earlier is ignored.
    pub fn from_stdout(stdout: &str) -> Result<Self, Tex2PdfError> {
        let tail = stdout
            .lines()
            .map(str::trim)
            .rev()
            .find(|l| !l.is_empty())
            .ok_or_else(|| Tex2PdfError::ReportParse("no output received".into()))?;

        let report: CompileReport = serde_json::from_str(tail)
            .map_err(|e| Tex2PdfError::ReportParse(format!("{e} in {tail:?}")))?;

        if report.pdf.as_os_str().is_empty() {
            return Err(Tex2PdfError::ReportParse("report has an empty pdf path".into()));
        }
        Ok(report)
    }
}
