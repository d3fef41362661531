//! In-memory compilation: LaTeX text in, PDF bytes out.
//!
//! Backends usually hold generated LaTeX as a string, not a file. This
//! module writes it into a private temp directory, compiles there with
//! cleanup forced on, reads the PDF back and lets the directory drop. The
//! caller never sees a path, so concurrent calls cannot collide on output
//! files the way two [`crate::compile`] runs into one directory can.

use crate::compile::compile;
use crate::config::CompileConfig;
use crate::error::Tex2PdfError;
use crate::output::CompiledDocument;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static RE_UNSAFE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// Reduce `value` to `[a-z0-9_]`: lowercase, runs of anything else become a
/// single `_`, leading/trailing `_` trimmed. `None` when nothing survives.
pub fn sanitize_base_name(value: &str) -> Option<String> {
    let lowered = value.to_lowercase();
    let replaced = RE_UNSAFE_RUN.replace_all(&lowered, "_");
    let safe = replaced.trim_matches('_');
    (!safe.is_empty()).then(|| safe.to_string())
}

/// Compile LaTeX source held in memory.
///
/// `base_name` only names the files (`<name>.tex`, `<name>.pdf`); it is
/// sanitised first and replaced by `paper_<random>` when nothing usable is
/// left. `config.cleanup` is ignored: the build directory is removed
/// entirely on return, success or failure.
pub fn compile_source(
    latex: &str,
    base_name: &str,
    config: &CompileConfig,
) -> Result<CompiledDocument, Tex2PdfError> {
    if latex.trim().is_empty() {
        return Err(Tex2PdfError::InvalidInput(
            "No LaTeX content provided".into(),
        ));
    }

    let work_dir = tempfile::Builder::new()
        .prefix("latex-")
        .tempdir()
        .map_err(|e| Tex2PdfError::Internal(format!("tempdir: {e}")))?;

    let name = sanitize_base_name(base_name).unwrap_or_else(|| {
        let random = work_dir
            .path()
            .file_name()
            .map(|n| n.to_string_lossy().trim_start_matches("latex-").to_string())
            .unwrap_or_default();
        format!("paper_{}", sanitize_base_name(&random).unwrap_or_default())
    });

    let tex_path = work_dir.path().join(format!("{name}.tex"));
    std::fs::write(&tex_path, latex).map_err(|e| Tex2PdfError::Io {
        path: tex_path.clone(),
        source: e,
    })?;
    debug!("Wrote {} bytes to {}", latex.len(), tex_path.display());

    let mut config = config.clone();
    config.cleanup = true;
    let output = compile(&tex_path, work_dir.path(), &config)?;

    let pdf_bytes = std::fs::read(&output.pdf_path).map_err(|e| Tex2PdfError::Io {
        path: output.pdf_path.clone(),
        source: e,
    })?;

    Ok(CompiledDocument {
        pdf_bytes,
        filename: format!("{name}.pdf"),
    })
}
