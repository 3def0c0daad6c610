//! Collaborator seams for the heading-hierarchy postprocessor.
//!
//! The normalisation algorithm itself lives outside this crate. What lives
//! here is the contract the hook consumes: a factory that binds a processor
//! to exactly one [`ConversionResult`], and a resolver that answers whether
//! that factory is available in the current deployment at all.
//!
//! ## Why a resolver?
//!
//! Heading correction is an optional capability. A deployment without it
//! must degrade to "no correction", never to a hard failure, so the
//! installers probe availability through [`PostprocessorResolver`] and back
//! off on `Err` instead of assuming the collaborator exists. Callers that
//! already hold a factory wrap it in [`StaticResolver`].

use crate::error::{HookError, PostprocessError};
use crate::model::ConversionResult;
use std::sync::Arc;

/// A postprocessor bound to one conversion result.
///
/// `process` normalises the heading levels of the bound result's document in
/// place. It runs at most once per binding; implementations may keep
/// per-document state between construction and the call.
pub trait HierarchyPostprocessor {
    fn process(&mut self) -> Result<(), PostprocessError>;
}

/// Constructs a [`HierarchyPostprocessor`] for each result it is handed.
///
/// `Send + Sync` because the factory is captured once and shared by the
/// installed wrapper for the lifetime of the process.
pub trait PostprocessorFactory: Send + Sync {
    /// Bind a fresh postprocessor to `result`.
    ///
    /// The returned processor borrows the result mutably, so the document
    /// can only be touched through it until the processor is dropped.
    fn bind<'a>(&self, result: &'a mut ConversionResult) -> Box<dyn HierarchyPostprocessor + 'a>;
}

/// Answers whether the post-processing collaborator is available.
pub trait PostprocessorResolver {
    /// Resolve the factory, or explain why it is missing.
    fn resolve(&self) -> Result<Arc<dyn PostprocessorFactory>, HookError>;
}

/// Resolver for an already-constructed factory.
///
/// The trivial happy-path resolver: availability was decided by whoever
/// built the factory, so `resolve` always succeeds.
pub struct StaticResolver {
    factory: Arc<dyn PostprocessorFactory>,
}

impl StaticResolver {
    pub fn new(factory: Arc<dyn PostprocessorFactory>) -> Self {
        Self { factory }
    }
}

impl PostprocessorResolver for StaticResolver {
    fn resolve(&self) -> Result<Arc<dyn PostprocessorFactory>, HookError> {
        Ok(Arc::clone(&self.factory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConversionStatus, DocItem, Document, InputSource};

    struct Demoter;

    struct BoundDemoter<'a> {
        result: &'a mut ConversionResult,
    }

    impl HierarchyPostprocessor for BoundDemoter<'_> {
        fn process(&mut self) -> Result<(), PostprocessError> {
            if self.result.document.items.is_empty() {
                return Err(PostprocessError::EmptyDocument {
                    name: self.result.document.name.clone(),
                });
            }
            for item in &mut self.result.document.items {
                if let DocItem::Heading { level, .. } = item {
                    *level = level.saturating_add(1);
                }
            }
            Ok(())
        }
    }

    impl PostprocessorFactory for Demoter {
        fn bind<'a>(
            &self,
            result: &'a mut ConversionResult,
        ) -> Box<dyn HierarchyPostprocessor + 'a> {
            Box::new(BoundDemoter { result })
        }
    }

    #[test]
    fn bound_processor_mutates_document_in_place() {
        let mut result = ConversionResult::new(
            ConversionStatus::Success,
            InputSource::new("guide.pdf"),
            Document {
                name: "guide".into(),
                items: vec![DocItem::Heading {
                    level: 1,
                    text: "Intro".into(),
                }],
            },
        );

        Demoter.bind(&mut result).process().unwrap();

        assert_eq!(
            result.document.items,
            vec![DocItem::Heading {
                level: 2,
                text: "Intro".into()
            }]
        );
    }

    #[test]
    fn bound_processor_can_fail() {
        let mut result = ConversionResult::new(
            ConversionStatus::Success,
            InputSource::new("empty.pdf"),
            Document::default(),
        );

        let err = Demoter.bind(&mut result).process().unwrap_err();
        assert!(matches!(err, PostprocessError::EmptyDocument { .. }));
    }

    #[test]
    fn static_resolver_hands_back_the_same_factory() {
        let factory: Arc<dyn PostprocessorFactory> = Arc::new(Demoter);
        let resolver = StaticResolver::new(Arc::clone(&factory));
        let resolved = resolver.resolve().unwrap();
        assert!(Arc::ptr_eq(&factory, &resolved));
    }
}
