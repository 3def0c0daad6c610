//! Rebindable stage bindings of the conversion task runner.
//!
//! The runner's export-results and chunk-results stages are plain functions
//! of `(task, results, work_dir)`. To let behaviour be injected without
//! forking the runner, each stage is held behind a [`HookPoint`]: callers
//! always dispatch through [`HookPoint::call`], which looks the binding up
//! at call time, so a replacement installed after a caller obtained its
//! reference to the hook point is still observed by that caller's next call.
//!
//! Replacement follows "capture the original, then overwrite". The swap
//! needs `&mut`, so the borrow checker serialises installation against
//! dispatch — install once at startup, before conversion traffic is served,
//! then share the hook point.

use crate::model::{ConversionResult, TaskContext};
use std::path::Path;
use std::sync::Arc;

/// The (possibly single-pass) result sequence a runner stage receives.
pub type ResultIter = Box<dyn Iterator<Item = ConversionResult> + Send>;

/// Signature shared by both interceptable runner stages.
///
/// `R` is whatever the stage returns; wrappers forward it unmodified.
pub type StageFn<R> = Arc<dyn Fn(&TaskContext, ResultIter, &Path) -> R + Send + Sync>;

/// One rebindable stage binding.
pub struct HookPoint<R> {
    current: StageFn<R>,
}

impl<R> HookPoint<R> {
    /// Create a hook point around the runner's own stage implementation.
    pub fn new(stage: StageFn<R>) -> Self {
        Self { current: stage }
    }

    /// The current binding. Installers capture this before overwriting;
    /// callers can compare it by identity to detect a swap.
    pub fn get(&self) -> StageFn<R> {
        Arc::clone(&self.current)
    }

    /// Overwrite the binding. Every subsequent [`call`](Self::call)
    /// dispatches to `stage`.
    pub fn replace(&mut self, stage: StageFn<R>) {
        self.current = stage;
    }

    /// Dispatch through the current binding.
    pub fn call(&self, task: &TaskContext, results: ResultIter, work_dir: &Path) -> R {
        (self.current)(task, results, work_dir)
    }
}
