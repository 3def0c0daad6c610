//! Error types for the hierarchy-hook library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`HookError`] — the postprocessor collaborator could not be resolved at
//!   install time. The installers recover from this locally (the hook is
//!   simply not installed and conversion proceeds without heading
//!   correction), so this type never reaches an installer's caller; it is
//!   the `Err` contract of [`crate::postprocess::PostprocessorResolver`].
//!
//! * [`PostprocessError`] — a single document failed heading correction.
//!   Logged with the offending input's file name and the batch continues;
//!   one malformed document never blocks the rest.
//!
//! Failures of the wrapped original stage are neither of these: whatever the
//! original returns — including an `Err` — passes through the wrapper
//! unmodified.

use thiserror::Error;

/// Install-time resolution failure.
#[derive(Debug, Error)]
pub enum HookError {
    /// The optional post-processing collaborator is not available in this
    /// deployment.
    #[error("hierarchy postprocessor unavailable: {reason}")]
    PostprocessorUnavailable { reason: String },
}

/// A non-fatal, per-document post-processing failure.
///
/// Produced by [`crate::postprocess::HierarchyPostprocessor`] implementations.
/// The failed result's document is left in whatever partial state the
/// collaborator produced; the result itself is still forwarded.
#[derive(Debug, Clone, Error, serde::Serialize, serde::Deserialize)]
pub enum PostprocessError {
    /// The document violates an assumption of the heading model.
    #[error("malformed document structure: {detail}")]
    MalformedDocument { detail: String },

    /// The document has no content to normalise.
    #[error("document '{name}' has no items")]
    EmptyDocument { name: String },

    /// Collaborator-specific failure with no dedicated variant.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_display() {
        let e = HookError::PostprocessorUnavailable {
            reason: "support crate not linked".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("unavailable"), "got: {msg}");
        assert!(msg.contains("not linked"), "got: {msg}");
    }

    #[test]
    fn malformed_display() {
        let e = PostprocessError::MalformedDocument {
            detail: "heading level 0".into(),
        };
        assert!(e.to_string().contains("heading level 0"));
    }

    #[test]
    fn empty_document_display() {
        let e = PostprocessError::EmptyDocument {
            name: "report".into(),
        };
        assert!(e.to_string().contains("'report'"));
    }
}
