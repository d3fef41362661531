//! CLI binary for edgequake-tex2pdf.
//!
//! A thin shim over the library crate that maps CLI flags to
//! `CompileConfig` and turns the result into the process contract:
//! one JSON line on stdout and exit 0, or diagnostics on stderr and exit 1.

use anyhow::{Context, Result};
use clap::Parser;
use edgequake_tex2pdf::{compile, CompileConfig, CompileOutput, Tex2PdfError};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const AFTER_HELP: &str = r#"EXAMPLES:
  # Compile into ./build, keep auxiliary files
  tex2pdf --tex paper.tex --out build

  # Compile and delete .aux .log .out .toc .synctex.gz afterwards
  tex2pdf --tex paper.tex --out build --cleanup

  # Use another pdflatex-compatible engine
  tex2pdf --engine xelatex --tex paper.tex --out build

  # Pass extra flags to the engine
  tex2pdf --engine-arg=-shell-escape --tex paper.tex --out build

OUTPUT:
  On success a single JSON line is printed on stdout:
    {"pdf":"/abs/path/build/paper.pdf"}
  On failure the engine's output is copied to stderr, followed by one error
  line, and the exit code is 1.

ENVIRONMENT VARIABLES:
  TEX2PDF_ENGINE    Engine program (default: pdflatex)
  TEX2PDF_VERBOSE   Enable debug logs on stderr
  RUST_LOG          Full tracing filter override
"#;

/// Compile a LaTeX document to PDF with pdflatex.
#[derive(Parser, Debug)]
#[command(
    name = "tex2pdf",
    version,
    about = "Compile a LaTeX document to PDF with pdflatex",
    arg_required_else_help = true,
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Path to the LaTeX .tex file.
    #[arg(long, value_name = "PATH")]
    tex: PathBuf,

    /// Directory where the compiled PDF should be written.
    #[arg(long, value_name = "DIR")]
    out: PathBuf,

    /// Remove auxiliary files generated during compilation.
    #[arg(long)]
    cleanup: bool,

    /// Typesetting engine to run.
    #[arg(long, env = "TEX2PDF_ENGINE", default_value = edgequake_tex2pdf::DEFAULT_ENGINE)]
    engine: String,

    /// Extra argument for the engine (repeatable).
    #[arg(long = "engine-arg", value_name = "ARG", allow_hyphen_values = true)]
    engine_args: Vec<String>,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "TEX2PDF_VERBOSE")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Errors only by default: a successful run must leave stderr empty.
    let filter = if cli.verbose { "debug" } else { "error" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli).and_then(|line| emit(&line)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&err);
            ExitCode::FAILURE
        }
    }
}

/// Compile and render the success line.
fn run(cli: &Cli) -> Result<String> {
    let config = build_config(cli)?;
    let output: CompileOutput = compile(&cli.tex, &cli.out, &config)?;
    Ok(output.report().to_json_line()?)
}

/// Print the success line. Nothing reaches stdout before this point.
fn emit(line: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{line}")
        .and_then(|_| handle.flush())
        .context("Failed to write to stdout")
}

/// Map CLI args to `CompileConfig`.
fn build_config(cli: &Cli) -> Result<CompileConfig> {
    let config = CompileConfig::builder()
        .engine(cli.engine.clone())
        .engine_args(cli.engine_args.iter().cloned())
        .cleanup(cli.cleanup)
        .build()?;
    Ok(config)
}

/// Forward the engine transcript (if any), then print one error line.
fn report_failure(err: &anyhow::Error) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();

    let lib_err = err.downcast_ref::<Tex2PdfError>();

    if let Some((out, err_stream)) = lib_err.and_then(Tex2PdfError::engine_streams) {
        let _ = handle.write_all(out.as_bytes());
        let _ = handle.write_all(err_stream.as_bytes());
        let tail = if err_stream.is_empty() { out } else { err_stream };
        if !tail.is_empty() && !tail.ends_with('\n') {
            let _ = handle.write_all(b"\n");
        }
    }

    // Library messages already name their cause; anything else gets the chain.
    let message = match lib_err {
        Some(e) => e.to_string(),
        None => format!("{err:#}"),
    };
    let _ = writeln!(handle, "{}", one_line(&message));
}

fn one_line(msg: &str) -> String {
    msg.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
