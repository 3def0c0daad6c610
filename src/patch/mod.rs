//! Patch installers for the runner's two result stages.
//!
//! Each installer resolves the postprocessor collaborator, captures the
//! stage's current binding, and swaps in a decorating wrapper. A resolution
//! failure is a soft failure: the binding is left untouched and conversion
//! runs without heading correction.
//!
//! ## Data Flow (after installation)
//!
//! ```text
//! runner ──▶ HookPoint::call
//!             │
//!             ├─ materialise the result sequence into a Vec
//!             ├─ for each Success result: bind a postprocessor and fix the
//!             │  document's headings in place (per-document failures are
//!             │  logged and the batch continues)
//!             └─ delegate to the captured original, return its value
//! ```
//!
//! 1. [`export`] — the export-results stage; warns when the collaborator is
//!    missing and logs a per-batch summary count
//! 2. [`chunk`]  — the chunk-results stage; skips silently when the
//!    collaborator is missing, no summary count
//!
//! Installing on the same hook point twice wraps the already-wrapped
//! binding, so every successful result is post-processed once per install.
//! Neither installer guards against this; install once at startup.

pub mod chunk;
pub mod export;
