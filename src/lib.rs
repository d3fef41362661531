//! # edgequake-tex2pdf
//!
//! Compile LaTeX documents to PDF by driving an external pdflatex-compatible
//! engine.
//!
//! The crate does not understand LaTeX. It builds one engine command line,
//! runs it to completion, checks that `<output_dir>/<stem>.pdf` exists and
//! optionally deletes the auxiliary files the engine left next to it. There
//! is no multi-pass handling: documents that need a second run for
//! references come out as the engine wrote them after one.
//!
//! ## Pipeline Overview
//!
//! ```text
//! .tex
//!  │
//!  ├─ 1. Paths    absolute input, output dir created (mkdir -p)
//!  ├─ 2. Engine   pdflatex -interaction=nonstopmode -output-directory=…
//!  ├─ 3. Check    <output_dir>/<stem>.pdf must exist
//!  └─ 4. Cleanup  .aux .log .out .toc .synctex.gz (optional)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use edgequake_tex2pdf::{compile, CompileConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = CompileConfig::builder().cleanup(true).build()?;
//!     let output = compile("paper.tex", "build", &config)?;
//!     println!("{}", output.pdf_path.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `tex2pdf` binary (clap + anyhow + tracing-subscriber) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! edgequake-tex2pdf = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod compile;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod source;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use compile::{compile, compile_async};
pub use config::{CompileConfig, CompileConfigBuilder, AUX_EXTENSIONS, DEFAULT_ENGINE};
pub use error::Tex2PdfError;
pub use output::{CompileOutput, CompileReport, CompiledDocument};
pub use pipeline::cleanup::sweep_artifacts;
pub use source::{compile_source, sanitize_base_name};
