//! Inspector registration and selector resolution.

use std::collections::HashMap;
use std::sync::Arc;

use crate::Result;
use crate::SweepError;

use super::Inspector;
use super::NativeLibInspector;
use super::SuffixInspector;

/// Delimiter joining selector tokens with OR semantics.
pub const SELECTOR_DELIMITER: char = '|';

/// Maps inspector tags to ready instances.
///
/// Registration is an explicit call list at process start, so the inspector
/// set is statically auditable. [`InspectorRegistry::resolve`] turns a
/// user-supplied selector such as `react|jsfile` into an ordered chain; the
/// chain order decides which tag is reported when several inspectors would
/// match (first one wins).
#[derive(Default)]
pub struct InspectorRegistry {
    inspectors: HashMap<&'static str, Arc<dyn Inspector>>,
}

impl InspectorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the built-in inspectors
    /// (`jsfile`, `react`).
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        // Built-in tags are distinct literals and cannot collide.
        registry.insert(Arc::new(SuffixInspector::js()));
        registry.insert(Arc::new(NativeLibInspector::react_native()));
        registry
    }

    fn insert(&mut self, inspector: Arc<dyn Inspector>) {
        self.inspectors.insert(inspector.tag(), inspector);
    }

    /// Registers an inspector under its tag.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::DuplicateInspector`] if the tag is already
    /// taken; tag collisions are a configuration error, not a silent
    /// override.
    pub fn register<I>(&mut self, inspector: I) -> Result<()>
    where
        I: Inspector + 'static,
    {
        let tag = inspector.tag();
        if self.inspectors.contains_key(tag) {
            return Err(SweepError::DuplicateInspector { tag });
        }
        self.insert(Arc::new(inspector));
        Ok(())
    }

    /// Resolves a selector into an ordered inspector chain.
    ///
    /// The selector is split on [`SELECTOR_DELIMITER`] and each token is
    /// looked up verbatim; the returned chain preserves token order.
    ///
    /// # Errors
    ///
    /// Returns [`SweepError::UnknownInspector`] naming the first token no
    /// registered inspector carries.
    pub fn resolve(&self, selector: &str) -> Result<Vec<Arc<dyn Inspector>>> {
        selector
            .split(SELECTOR_DELIMITER)
            .map(|token| {
                self.inspectors.get(token).cloned().ok_or_else(|| {
                    SweepError::UnknownInspector {
                        tag: token.to_string(),
                    }
                })
            })
            .collect()
    }

    /// Registered tags with their descriptions, sorted by tag.
    #[must_use]
    pub fn descriptions(&self) -> Vec<(&'static str, &'static str)> {
        let mut list: Vec<_> = self
            .inspectors
            .values()
            .map(|inspector| (inspector.tag(), inspector.description()))
            .collect();
        list.sort_unstable_by_key(|(tag, _)| *tag);
        list
    }

    /// Number of registered inspectors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inspectors.len()
    }

    /// Returns `true` if no inspectors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inspectors.is_empty()
    }
}
