//! Configuration types for LaTeX-to-PDF compilation.
//!
//! All compilation behaviour is controlled through [`CompileConfig`], built
//! via its [`CompileConfigBuilder`]. The defaults reproduce a plain
//! `pdflatex -interaction=nonstopmode -output-directory=<out> <file>` run
//! with no cleanup.

use crate::error::Tex2PdfError;
use serde::{Deserialize, Serialize};

/// Engine used when nothing else is configured.
pub const DEFAULT_ENGINE: &str = "pdflatex";

/// Auxiliary files removed by cleanup, as suffixes of the input stem.
pub const AUX_EXTENSIONS: [&str; 5] = [".aux", ".log", ".out", ".toc", ".synctex.gz"];

/// Configuration for a single compilation.
///
/// # Example
/// ```rust
/// use edgequake_tex2pdf::CompileConfig;
///
/// let config = CompileConfig::builder()
///     .engine("pdflatex")
///     .cleanup(true)
///     .build()
///     .unwrap();
/// assert!(config.cleanup);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    /// Program to run. Looked up on `PATH` unless it contains a separator.
    /// Default: `pdflatex`.
    pub engine: String,

    /// Arguments passed to the engine before the fixed batch-mode,
    /// output-directory and input arguments. Default: empty.
    pub engine_args: Vec<String>,

    /// Delete auxiliary files after a successful run. Default: false.
    pub cleanup: bool,

    /// Suffixes removed by cleanup, each appended to the input stem.
    /// Default: [`AUX_EXTENSIONS`].
    pub aux_extensions: Vec<String>,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            engine: DEFAULT_ENGINE.to_string(),
            engine_args: Vec::new(),
            cleanup: false,
            aux_extensions: AUX_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl CompileConfig {
    /// Create a new builder for `CompileConfig`.
    pub fn builder() -> CompileConfigBuilder {
        CompileConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`CompileConfig`].
#[derive(Debug)]
pub struct CompileConfigBuilder {
    config: CompileConfig,
}

impl CompileConfigBuilder {
    pub fn engine(mut self, engine: impl Into<String>) -> Self {
        self.config.engine = engine.into();
        self
    }

    pub fn engine_arg(mut self, arg: impl Into<String>) -> Self {
        self.config.engine_args.push(arg.into());
        self
    }

    pub fn engine_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.engine_args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn cleanup(mut self, v: bool) -> Self {
        self.config.cleanup = v;
        self
    }

    /// Replace the cleanup suffix list.
    pub fn aux_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.aux_extensions = exts.into_iter().map(Into::into).collect();
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<CompileConfig, Tex2PdfError> {
        let c = &self.config;
        if c.engine.trim().is_empty() {
            return Err(Tex2PdfError::InvalidConfig(
                "Engine must not be empty".into(),
            ));
        }
        if let Some(bad) = c
            .aux_extensions
            .iter()
            .find(|e| !e.starts_with('.') || e.len() < 2 || e.contains(['/', '\\']))
        {
            return Err(Tex2PdfError::InvalidConfig(format!(
                "Auxiliary extension must look like '.aux', got '{bad}'"
            )));
        }
        Ok(self.config)
    }
}
