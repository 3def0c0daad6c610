//! # hierarchy-hook
//!
//! Inject heading-hierarchy correction into a document-conversion task
//! runner's result handling, without forking the runner.
//!
//! ## Why this crate?
//!
//! Converted documents routinely come out with a flat or inconsistent
//! heading ladder — every heading an H1, or an H3 sitting directly under an
//! H1. The runner that writes results out offers no extension point of its
//! own, so this crate models its two result stages (export-results and
//! chunk-results) as rebindable [`HookPoint`]s and installs decorating
//! wrappers that normalise each successful document's headings before
//! delegating to the original stage. The normalisation algorithm itself is
//! an external collaborator reached through the
//! [`PostprocessorFactory`] seam; deployments without it degrade cleanly to
//! "no correction".
//!
//! ## Interception Overview
//!
//! ```text
//! runner ──▶ HookPoint::call
//!             │
//!             ├─ 1. Buffer   materialise the (single-pass) result sequence
//!             ├─ 2. Correct  for each Success result, bind a postprocessor
//!             │              and fix the document's headings in place;
//!             │              per-document failures are logged, the batch
//!             │              continues
//!             └─ 3. Delegate call the captured original stage and return
//!                            its value unmodified
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use hierarchy_hook::{
//!     apply_hierarchy_patch, ConversionResult, DocItem, HierarchyPostprocessor, HookPoint,
//!     PostprocessError, PostprocessorFactory, ResultIter, StaticResolver, TaskContext,
//! };
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! // The external collaborator: binds to one result, fixes its headings.
//! struct Leveller;
//!
//! struct BoundLeveller<'a>(&'a mut ConversionResult);
//!
//! impl HierarchyPostprocessor for BoundLeveller<'_> {
//!     fn process(&mut self) -> Result<(), PostprocessError> {
//!         for item in &mut self.0.document.items {
//!             if let DocItem::Heading { level, .. } = item {
//!                 *level = (*level).min(3);
//!             }
//!         }
//!         Ok(())
//!     }
//! }
//!
//! impl PostprocessorFactory for Leveller {
//!     fn bind<'a>(
//!         &self,
//!         result: &'a mut ConversionResult,
//!     ) -> Box<dyn HierarchyPostprocessor + 'a> {
//!         Box::new(BoundLeveller(result))
//!     }
//! }
//!
//! // The runner's export stage, modelled as a hook point.
//! let mut export: HookPoint<usize> = HookPoint::new(Arc::new(
//!     |_task: &TaskContext, results: ResultIter, _work_dir: &Path| results.count(),
//! ));
//!
//! // Install once at startup, before conversion traffic is served.
//! apply_hierarchy_patch(&mut export, &StaticResolver::new(Arc::new(Leveller)));
//!
//! let task = TaskContext::new("job-1");
//! let exported = export.call(
//!     &task,
//!     Box::new(Vec::<ConversionResult>::new().into_iter()),
//!     Path::new("/var/run/convert"),
//! );
//! assert_eq!(exported, 0);
//! ```
//!
//! ## Failure behaviour
//!
//! | Failure | Handling |
//! |---------|----------|
//! | Collaborator unavailable at install | Binding left untouched; warnings on the export path, silence on the chunk path |
//! | One document fails correction | Warning with the input's file name; batch continues |
//! | Wrapped original stage fails | Propagates unmodified — the wrapper is return-transparent |

// ── Modules ──────────────────────────────────────────────────────────────

pub mod bindings;
pub mod error;
pub mod model;
pub mod patch;
pub mod postprocess;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use bindings::{HookPoint, ResultIter, StageFn};
pub use error::{HookError, PostprocessError};
pub use model::{ConversionResult, ConversionStatus, DocItem, Document, InputSource, TaskContext};
pub use patch::chunk::apply_chunking_patch;
pub use patch::export::apply_hierarchy_patch;
pub use postprocess::{
    HierarchyPostprocessor, PostprocessorFactory, PostprocessorResolver, StaticResolver,
};
