//! Export-stage patch: heading correction before results are written out.

use crate::bindings::{HookPoint, ResultIter, StageFn};
use crate::model::TaskContext;
use crate::postprocess::{HierarchyPostprocessor, PostprocessorFactory, PostprocessorResolver};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Install the hierarchy wrapper on the runner's export-results stage.
///
/// Resolves the postprocessor collaborator through `resolver`; if it is
/// unavailable, two warnings are logged and the stage binding is left
/// exactly as it was — conversion proceeds, just without heading correction.
///
/// On success the current binding is captured and replaced with a wrapper
/// that, per call:
///
/// 1. materialises the incoming result sequence (it may be single-pass, and
///    the results are inspected, mutated, and then forwarded);
/// 2. runs a freshly bound postprocessor over each `Success` result,
///    logging and skipping past per-document failures;
/// 3. logs a summary count when at least one document was corrected;
/// 4. delegates to the captured original with the materialised batch and
///    returns its value unmodified.
///
/// Calling this twice wraps the wrapper: successful results are then
/// corrected twice per export. There is no guard; this is meant to run once
/// during startup.
pub fn apply_hierarchy_patch<R: 'static>(
    slot: &mut HookPoint<R>,
    resolver: &dyn PostprocessorResolver,
) {
    let factory = match resolver.resolve() {
        Ok(factory) => factory,
        Err(e) => {
            warn!("Could not resolve the hierarchy postprocessor: {e}");
            warn!("Heading hierarchy will NOT be corrected. Install hierarchical post-processing support.");
            return;
        }
    };

    let original = slot.get();

    let wrapper: StageFn<R> = Arc::new(
        move |task: &TaskContext, results: ResultIter, work_dir: &Path| {
            // The incoming sequence may only be iterable once; the documents
            // have to be fixed in place and then handed on, so buffer it.
            let mut batch: Vec<_> = results.collect();
            debug!("materialised {} conversion result(s)", batch.len());

            let mut corrected = 0usize;
            for result in batch.iter_mut() {
                if !result.is_success() {
                    continue;
                }
                let file = result.input.file_name();
                match factory.bind(result).process() {
                    Ok(()) => corrected += 1,
                    Err(e) => {
                        warn!("Failed to apply hierarchical post-processing to {file}: {e}");
                    }
                }
            }

            if corrected > 0 {
                info!("Hierarchical structure applied to {corrected} document(s)");
            }

            original(task, Box::new(batch.into_iter()), work_dir)
        },
    );
    slot.replace(wrapper);

    info!("Hierarchy patch installed: exported results now get corrected heading levels");
}
