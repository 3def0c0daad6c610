//! Chunk-stage patch: heading correction ahead of chunk assembly.
//!
//! Same wrapper shape as the export-stage patch with two differences:
//! a missing collaborator is skipped silently (chunking is itself an
//! optional endpoint, so there is nothing to warn about when neither piece
//! is deployed), and no per-batch summary count is logged.

use crate::bindings::{HookPoint, ResultIter, StageFn};
use crate::model::TaskContext;
use crate::postprocess::{HierarchyPostprocessor, PostprocessorFactory, PostprocessorResolver};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Install the hierarchy wrapper on the runner's chunk-results stage.
///
/// Behaves like [`crate::patch::export::apply_hierarchy_patch`] — same
/// per-result correct-or-log-and-continue loop, same delegation to the
/// captured original, same unguarded re-wrap on a second call — except that
/// an unresolved collaborator returns without logging.
pub fn apply_chunking_patch<R: 'static>(
    slot: &mut HookPoint<R>,
    resolver: &dyn PostprocessorResolver,
) {
    let factory = match resolver.resolve() {
        Ok(factory) => factory,
        Err(_) => return,
    };

    let original = slot.get();

    let wrapper: StageFn<R> = Arc::new(
        move |task: &TaskContext, results: ResultIter, work_dir: &Path| {
            let mut batch: Vec<_> = results.collect();

            for result in batch.iter_mut() {
                if !result.is_success() {
                    continue;
                }
                let file = result.input.file_name();
                if let Err(e) = factory.bind(result).process() {
                    warn!("Hierarchy correction failed for chunked result {file}: {e}");
                }
            }

            original(task, Box::new(batch.into_iter()), work_dir)
        },
    );
    slot.replace(wrapper);

    info!("Hierarchy patch also installed on the chunk-results stage");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HookError;
    use crate::postprocess::PostprocessorFactory;

    struct Unavailable;

    impl PostprocessorResolver for Unavailable {
        fn resolve(&self) -> Result<Arc<dyn PostprocessorFactory>, HookError> {
            Err(HookError::PostprocessorUnavailable {
                reason: "not linked".into(),
            })
        }
    }

    #[test]
    fn unresolved_collaborator_is_a_silent_no_op() {
        let mut slot: HookPoint<usize> = HookPoint::new(Arc::new(
            |_task: &TaskContext, results: ResultIter, _dir: &Path| results.count(),
        ));
        let before = slot.get();

        apply_chunking_patch(&mut slot, &Unavailable);

        assert!(Arc::ptr_eq(&before, &slot.get()));
    }
}
