//! Stub registry indexed by capability identity
//!
//! Replaces "construct a mock from a type-name string" with an explicit
//! registry: capability identity → stub constructor. Every instantiation
//! yields a fresh allocation, so two stubs for the same capability are
//! never identity-equal.

use crate::value::CapabilityStub;
use ctorcheck_schema::CapabilityId;
use indexmap::IndexMap;
use std::sync::Arc;

/// Constructor producing a fresh stub instance per call
pub type StubCtor = Box<dyn Fn() -> Arc<dyn CapabilityStub> + Send + Sync>;

/// A no-behavior stub carrying only its capability identity
#[derive(Debug)]
pub struct GenericStub {
    capability: CapabilityId,
}

impl GenericStub {
    /// Create a stub for the given capability
    #[must_use]
    pub fn new(capability: CapabilityId) -> Self {
        Self { capability }
    }
}

impl CapabilityStub for GenericStub {
    fn capability(&self) -> &CapabilityId {
        &self.capability
    }
}

/// Registry of stub constructors, keyed by capability identity
///
/// Insertion order is preserved so diagnostics and iteration are
/// deterministic.
pub struct StubRegistry {
    stubs: IndexMap<CapabilityId, StubCtor>,
}

impl StubRegistry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            stubs: IndexMap::new(),
        }
    }

    /// Registry pre-populated with the capabilities the wiki-parser
    /// fixtures rely on
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for name in [
            "magic-word-factory",
            "language",
            "special-page-factory",
            "site-config",
            "link-renderer-factory",
            "namespace-info",
        ] {
            registry.register_generic(CapabilityId::new(name));
        }
        registry
    }

    /// Register a custom stub constructor for a capability
    pub fn register(&mut self, id: CapabilityId, ctor: StubCtor) {
        self.stubs.insert(id, ctor);
    }

    /// Register a [`GenericStub`] constructor for a capability
    pub fn register_generic(&mut self, id: CapabilityId) {
        let stub_id = id.clone();
        self.register(
            id,
            Box::new(move || Arc::new(GenericStub::new(stub_id.clone()))),
        );
    }

    /// Whether a capability has a registered stub
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &CapabilityId) -> bool {
        self.stubs.contains_key(id)
    }

    /// Construct a fresh stub instance for the capability
    ///
    /// Returns `None` for unregistered capabilities. Each call allocates a
    /// new instance; successive stubs for the same capability are
    /// reference-distinct.
    #[must_use]
    pub fn instantiate(&self, id: &CapabilityId) -> Option<Arc<dyn CapabilityStub>> {
        self.stubs.get(id).map(|ctor| ctor())
    }

    /// Registered capability identities, in registration order
    #[must_use]
    pub fn capabilities(&self) -> Vec<&CapabilityId> {
        self.stubs.keys().collect()
    }

    /// Number of registered capabilities
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    /// Whether the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }
}

impl Default for StubRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StubRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StubRegistry")
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_new_empty() {
        let registry = StubRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registry_with_defaults_covers_fixture_capabilities() {
        let registry = StubRegistry::with_defaults();
        assert_eq!(registry.len(), 6);
        assert!(registry.contains(&CapabilityId::new("language")));
        assert!(registry.contains(&CapabilityId::new("namespace-info")));
        assert!(!registry.contains(&CapabilityId::new("unknown")));
    }

    #[test]
    fn instantiate_returns_fresh_instances() {
        let registry = StubRegistry::with_defaults();
        let id = CapabilityId::new("language");

        let a = registry.instantiate(&id).unwrap();
        let b = registry.instantiate(&id).unwrap();

        assert_eq!(a.capability(), &id);
        assert_eq!(b.capability(), &id);
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn instantiate_unknown_capability_is_none() {
        let registry = StubRegistry::with_defaults();
        assert!(registry.instantiate(&CapabilityId::new("unknown")).is_none());
    }

    #[test]
    fn register_generic_preserves_order() {
        let mut registry = StubRegistry::new();
        registry.register_generic(CapabilityId::new("b"));
        registry.register_generic(CapabilityId::new("a"));

        let names: Vec<&str> = registry.capabilities().iter().map(|c| c.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
