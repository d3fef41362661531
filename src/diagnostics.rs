//! One-line summaries of failed engine runs.
//!
//! pdflatex reports errors on stdout in a fixed shape:
//!
//! ```text
//! ! Undefined control sequence.
//! l.5 \foo
//! ```
//!
//! The `!` line carries the message and the following `l.<n>` line the
//! source line. We pick the first such pair so the CLI's single error line
//! says *what* went wrong; the full transcript is still forwarded verbatim.

use once_cell::sync::Lazy;
use regex::Regex;

static RE_ERROR_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^!\s*(.+?)\.?\s*$").unwrap());

static RE_SOURCE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^l\.(\d+)\b").unwrap());

/// The first error reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineError {
    pub message: String,
    pub line: Option<u32>,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(n) => write!(f, "{} (line {})", self.message, n),
            None => f.write_str(&self.message),
        }
    }
}

/// Find the first `! …` error in an engine transcript, with its line number
/// when a matching `l.<n>` marker follows.
pub fn first_error(transcript: &str) -> Option<EngineError> {
    let mut lines = transcript.lines().map(|l| l.trim_end_matches('\r'));

    let message = lines.by_ref().find_map(|l| {
        RE_ERROR_LINE
            .captures(l)
            .map(|c| c[1].trim().to_string())
            .filter(|m| !m.is_empty())
    })?;

    // The source marker follows after a few context lines, before any
    // further error.
    let line = lines
        .take_while(|l| !l.starts_with('!'))
        .find_map(|l| RE_SOURCE_LINE.captures(l).and_then(|c| c[1].parse().ok()));

    Some(EngineError { message, line })
}

/// Summary for a failed run: the first engine error on stdout, else the
/// first non-empty stderr line.
pub fn summarize(stdout: &str, stderr: &str) -> Option<String> {
    first_error(stdout)
        .map(|e| e.to_string())
        .or_else(|| {
            stderr
                .lines()
                .map(str::trim)
                .find(|l| !l.is_empty())
                .map(str::to_string)
        })
}
