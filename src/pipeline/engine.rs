//! Engine invocation: one blocking run of the typesetting engine.
//!
//! Both streams are captured in full rather than streamed: a failed run's
//! transcript is only useful as a whole, and pdflatex output for a single
//! document is small. Stdin is closed so that `nonstopmode` is never
//! undermined by a prompt waiting on a terminal.

use crate::config::CompileConfig;
use crate::error::Tex2PdfError;
use crate::pipeline::paths::ResolvedPaths;
use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};
use tracing::debug;

/// Fixed batch-mode flag; a malformed document must not stall on input.
pub const INTERACTION_FLAG: &str = "-interaction=nonstopmode";

/// Captured result of one engine run.
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl EngineOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// The argument vector passed to the engine (program name excluded).
///
/// Order: configured extra args, batch mode, output directory, input.
pub fn engine_args(config: &CompileConfig, paths: &ResolvedPaths) -> Vec<OsString> {
    let mut args: Vec<OsString> = config.engine_args.iter().map(OsString::from).collect();
    args.push(INTERACTION_FLAG.into());

    let mut out_flag = OsString::from("-output-directory=");
    out_flag.push(&paths.output_dir);
    args.push(out_flag);

    args.push(paths.input.clone().into_os_string());
    args
}

/// Run the engine once and wait for it to exit.
///
/// A non-zero exit is *not* an error here; the caller decides what it means.
/// Only a failure to start the process is.
pub fn run(config: &CompileConfig, paths: &ResolvedPaths) -> Result<EngineOutput, Tex2PdfError> {
    let args = engine_args(config, paths);
    debug!(
        "Running {} {:?} in {}",
        config.engine,
        args,
        paths.work_dir.display()
    );

    let output = Command::new(&config.engine)
        .args(&args)
        .current_dir(&paths.work_dir)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| Tex2PdfError::EngineLaunch {
            engine: config.engine.clone(),
            source: e,
        })?;

    debug!(
        "{} exited with {} ({} bytes stdout, {} bytes stderr)",
        config.engine,
        output.status,
        output.stdout.len(),
        output.stderr.len()
    );

    Ok(EngineOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
