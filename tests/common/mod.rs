//! Shared helpers for the integration suites.
//!
//! The fake engine is a POSIX `sh` script run as `sh <script> <args…>`, so
//! it needs no executable bit. Its prelude parses the same command line
//! pdflatex receives and exposes `$out`, `$tex` and `$stem` to the body.

#![allow(dead_code)]

use edgequake_tex2pdf::CompileConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PRELUDE: &str = r#"out=""
tex=""
for a in "$@"; do
  case "$a" in
    -output-directory=*) out="${a#-output-directory=}" ;;
    -*) ;;
    *) tex="$a" ;;
  esac
done
name=$(basename "$tex")
stem="${name%.*}"
"#;

/// Writes `<stem>.pdf` plus `.aux` and `.log`, like a clean pdflatex run.
pub const WRITES_PDF_AUX_LOG: &str = r#"printf '%%PDF-1.5 fake\n' > "$out/$stem.pdf"
echo aux > "$out/$stem.aux"
echo log > "$out/$stem.log"
echo "Output written on $stem.pdf"
"#;

/// Writes `<stem>.pdf` and `.log` only.
pub const WRITES_PDF_AND_LOG: &str = r#"printf '%%PDF-1.5 fake\n' > "$out/$stem.pdf"
echo log > "$out/$stem.log"
"#;

/// Writes the PDF, all five auxiliary files and two unrelated files.
pub const WRITES_EVERYTHING: &str = r#"printf '%%PDF-1.5 fake\n' > "$out/$stem.pdf"
for e in aux log out toc synctex.gz bbl; do echo x > "$out/$stem.$e"; done
echo notes > "$out/notes.txt"
"#;

/// Fails the way pdflatex does on an unknown macro, after writing a log.
pub const FAILS_UNDEFINED_CS: &str = r#"echo log > "$out/$stem.log"
echo "This is pdfTeX, Version 3.141592653"
echo "! Undefined control sequence."
printf '%s\n' 'l.5 \foo'
echo "Undefined control sequence" >&2
exit 1
"#;

/// Exits 0 without producing a PDF.
pub const WRITES_NOTHING: &str = r#"echo "No pages of output."
exit 0
"#;

/// Records its working directory and arguments next to the PDF.
pub const RECORDS_INVOCATION: &str = r#"pwd -P > "$out/cwd.txt"
printf '%s\n' "$@" > "$out/args.txt"
printf '%%PDF-1.5 fake\n' > "$out/$stem.pdf"
"#;

/// Succeeds only when stdin is already at EOF.
pub const REQUIRES_CLOSED_STDIN: &str = r#"if read -r line; then exit 3; fi
printf '%%PDF-1.5 fake\n' > "$out/$stem.pdf"
"#;

/// Layout for one test: `src/`, `out/` and the engine script live apart so
/// the script never shows up in directory listings of `out/`.
pub struct Workspace {
    pub root: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self::with_root(TempDir::new().expect("tempdir"))
    }

    /// Like [`Workspace::new`], but rooted under `parent`.
    pub fn new_in(parent: &Path) -> Self {
        let root = tempfile::Builder::new()
            .prefix(".tex2pdf-test-")
            .tempdir_in(parent)
            .expect("tempdir");
        Self::with_root(root)
    }

    fn with_root(root: TempDir) -> Self {
        std::fs::create_dir_all(root.path().join("src")).expect("src dir");
        std::fs::create_dir_all(root.path().join("tools")).expect("tools dir");
        Self { root }
    }

    pub fn src(&self) -> PathBuf {
        self.root.path().join("src")
    }

    pub fn out(&self) -> PathBuf {
        self.root.path().join("out")
    }

    /// Write `src/<name>` with a minimal document.
    pub fn tex(&self, name: &str) -> PathBuf {
        let p = self.src().join(name);
        std::fs::write(
            &p,
            "\\documentclass{article}\n\\begin{document}\nHi\n\\end{document}\n",
        )
        .expect("write tex");
        p
    }

    /// Install a fake engine with `body` and return its script path.
    pub fn engine_script(&self, body: &str) -> PathBuf {
        let p = self.root.path().join("tools").join("fake-pdflatex.sh");
        std::fs::write(&p, format!("{PRELUDE}{body}")).expect("write engine");
        p
    }

    /// Config that runs `sh <script>` as the engine.
    pub fn config(&self, body: &str, cleanup: bool) -> CompileConfig {
        let script = self.engine_script(body);
        CompileConfig::builder()
            .engine("sh")
            .engine_arg(script.to_string_lossy())
            .cleanup(cleanup)
            .build()
            .expect("valid config")
    }
}

/// Sorted file names directly inside `dir`.
pub fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("read_dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
