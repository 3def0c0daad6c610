//! Data model shared with the conversion task runner.
//!
//! These types mirror what the runner hands to its result stages. The hook
//! never creates, drops, or reorders [`ConversionResult`]s — it only mutates
//! the `document` field of successful ones, in place, and forwards the batch
//! in its original order. [`TaskContext`] and the work directory are carried
//! through untouched.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Terminal status of one converted document.
///
/// Only [`Success`](ConversionStatus::Success) results are post-processed;
/// every other status passes through the hook unexamined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConversionStatus {
    /// Conversion completed and produced a full document.
    Success,
    /// Conversion produced a document but some content was lost.
    PartialSuccess,
    /// Conversion failed; the document is empty or unusable.
    Failure,
    /// The input was skipped (unsupported format, filtered out, …).
    Skipped,
}

/// The input a conversion result was produced from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSource {
    /// Path of the source document as the runner saw it.
    pub file: PathBuf,
}

impl InputSource {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self { file: file.into() }
    }

    /// File name used in log lines.
    ///
    /// Falls back to the full path for inputs without a final component
    /// (e.g. `/` or an empty path).
    pub fn file_name(&self) -> String {
        self.file
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string())
    }
}

/// One block of an in-memory document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocItem {
    /// A heading with its level (1 = H1) and text.
    Heading { level: u8, text: String },
    /// A run of body text.
    Paragraph(String),
}

/// In-memory document carried inside a [`ConversionResult`].
///
/// Opaque to the hook itself: only the bound postprocessor reads or mutates
/// it. The representation is the minimal ordered block list the heading
/// model needs — anything richer lives on the runner's side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document name, usually derived from the input file stem.
    pub name: String,
    /// Ordered content blocks.
    pub items: Vec<DocItem>,
}

/// Record emitted by the conversion pipeline for one input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    /// How the conversion ended.
    pub status: ConversionStatus,
    /// Where the document came from.
    pub input: InputSource,
    /// The converted document, mutated in place by post-processing.
    pub document: Document,
}

impl ConversionResult {
    pub fn new(status: ConversionStatus, input: InputSource, document: Document) -> Self {
        Self {
            status,
            input,
            document,
        }
    }

    /// Whether this result is eligible for post-processing.
    pub fn is_success(&self) -> bool {
        self.status == ConversionStatus::Success
    }
}

/// Opaque per-job context the runner threads through its result stages.
///
/// The hook forwards it verbatim; the untyped payload exists so runners can
/// attach whatever job state they need without this crate knowing its shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskContext {
    /// Runner-assigned job identifier.
    pub task_id: String,
    /// Runner-defined job state; never inspected here.
    pub payload: serde_json::Value,
}

impl TaskContext {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            payload: serde_json::Value::Null,
        }
    }

    pub fn with_payload(task_id: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            task_id: task_id.into(),
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_from_path() {
        let input = InputSource::new("/data/in/report.pdf");
        assert_eq!(input.file_name(), "report.pdf");
    }

    #[test]
    fn file_name_falls_back_to_display() {
        let input = InputSource::new("/");
        assert_eq!(input.file_name(), "/");
    }

    #[test]
    fn only_success_is_eligible() {
        let doc = Document::default();
        for (status, eligible) in [
            (ConversionStatus::Success, true),
            (ConversionStatus::PartialSuccess, false),
            (ConversionStatus::Failure, false),
            (ConversionStatus::Skipped, false),
        ] {
            let res = ConversionResult::new(status, InputSource::new("a.pdf"), doc.clone());
            assert_eq!(res.is_success(), eligible, "status {status:?}");
        }
    }

    #[test]
    fn task_context_defaults_to_null_payload() {
        let task = TaskContext::new("job-7");
        assert_eq!(task.task_id, "job-7");
        assert!(task.payload.is_null());
    }
}
