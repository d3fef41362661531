//! Pipeline stages for LaTeX-to-PDF compilation.
//!
//! Each submodule implements exactly one step of the run so it can be
//! tested on its own.
//!
//! ## Data Flow
//!
//! ```text
//! paths ──▶ engine ──▶ (artifact check) ──▶ cleanup
//! (resolve)  (spawn)    <out>/<stem>.pdf     (aux files)
//! ```
//!
//! 1. [`paths`]: make the input and output locations absolute, create the
//!    output directory, and derive the `<stem>.*` names
//! 2. [`engine`]: run the typesetting engine once, blocking, with both
//!    streams captured in full
//! 3. [`cleanup`]: best-effort removal of auxiliary files; also the broader
//!    directory sweep used by long-running hosts

pub mod cleanup;
pub mod engine;
pub mod paths;
