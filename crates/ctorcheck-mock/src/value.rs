//! Mock values and argument sets
//!
//! Every value is held behind an `Arc`; cloning preserves identity, and
//! [`MockValue::same_instance`] compares by pointer, never by content.
//! Two placeholder strings with identical text are still distinct values.

use ctorcheck_schema::{CapabilityId, ParamKind};
use std::sync::Arc;

/// Contract fulfilled by a capability stub
///
/// Stubs carry only their capability identity; they have no behavior. The
/// checker cares about where the stub instance ends up, not what it does.
pub trait CapabilityStub: std::fmt::Debug + Send + Sync {
    /// Capability this stub fulfills
    fn capability(&self) -> &CapabilityId;
}

/// Stub standing in for a structured configuration/options object
#[derive(Debug)]
pub struct OptionsStub {
    tag: String,
}

impl OptionsStub {
    /// Create an options stub with a distinguishing tag
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    /// Distinguishing tag, used in diagnostics
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

/// A single synthesized (or literal) argument value
#[derive(Debug, Clone)]
pub enum MockValue {
    /// Configuration/options stub
    Options(Arc<OptionsStub>),

    /// One-element string sequence
    Sequence(Arc<[String]>),

    /// Capability stub instance
    Capability(Arc<dyn CapabilityStub>),

    /// Plain tagged placeholder string
    Text(Arc<str>),
}

impl MockValue {
    /// Reference-identity comparison
    ///
    /// True only when both values share the same underlying allocation.
    /// Content equality is deliberately not considered.
    #[must_use]
    pub fn same_instance(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Options(a), Self::Options(b)) => Arc::ptr_eq(a, b),
            (Self::Sequence(a), Self::Sequence(b)) => Arc::ptr_eq(a, b),
            (Self::Capability(a), Self::Capability(b)) => Arc::ptr_eq(a, b),
            (Self::Text(a), Self::Text(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Variant name, used in diagnostics
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Options(_) => "options",
            Self::Sequence(_) => "sequence",
            Self::Capability(_) => "capability",
            Self::Text(_) => "text",
        }
    }
}

/// A mock value tagged with its parameter position and declared kind
#[derive(Debug, Clone)]
pub struct MockArg {
    /// Position in the factory constructor's parameter list
    pub position: usize,

    /// Declared kind of the parameter this argument satisfies
    pub kind: ParamKind,

    /// The value itself
    pub value: MockValue,
}

/// Ordered set of arguments for one factory invocation
#[derive(Debug, Clone, Default)]
pub struct MockArgumentSet {
    args: Vec<MockArg>,
}

impl MockArgumentSet {
    /// Create an empty argument set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value; its position is the current length
    pub fn push(&mut self, kind: ParamKind, value: MockValue) {
        let position = self.args.len();
        self.args.push(MockArg {
            position,
            kind,
            value,
        });
    }

    /// Number of arguments
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Whether the set is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Argument at the given position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&MockArg> {
        self.args.get(position)
    }

    /// Iterate arguments in position order
    pub fn iter(&self) -> impl Iterator<Item = &MockArg> {
        self.args.iter()
    }

    /// Whether every value is reference-distinct from every other
    #[must_use]
    pub fn pairwise_distinct(&self) -> bool {
        for i in 0..self.args.len() {
            for j in (i + 1)..self.args.len() {
                if self.args[i].value.same_instance(&self.args[j].value) {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct TestStub(CapabilityId);

    impl CapabilityStub for TestStub {
        fn capability(&self) -> &CapabilityId {
            &self.0
        }
    }

    #[test]
    fn same_instance_true_only_for_clones() {
        let a = MockValue::Text(Arc::from("placeholder #0"));
        let b = a.clone();
        let c = MockValue::Text(Arc::from("placeholder #0"));

        assert!(a.same_instance(&b));
        // Identical content, different allocation.
        assert!(!a.same_instance(&c));
    }

    #[test]
    fn same_instance_is_false_across_variants() {
        let text = MockValue::Text(Arc::from("x"));
        let seq = MockValue::Sequence(Arc::from(vec!["x".to_string()]));
        assert!(!text.same_instance(&seq));
    }

    #[test]
    fn capability_identity_survives_clone() {
        let stub: Arc<dyn CapabilityStub> = Arc::new(TestStub(CapabilityId::new("language")));
        let a = MockValue::Capability(Arc::clone(&stub));
        let b = MockValue::Capability(stub);
        assert!(a.same_instance(&b));
    }

    #[test]
    fn distinct_capability_stubs_differ() {
        let a = MockValue::Capability(Arc::new(TestStub(CapabilityId::new("language"))));
        let b = MockValue::Capability(Arc::new(TestStub(CapabilityId::new("language"))));
        assert!(!a.same_instance(&b));
    }

    #[test]
    fn argument_set_positions_follow_insertion_order() {
        let mut set = MockArgumentSet::new();
        set.push(ParamKind::Options, MockValue::Options(Arc::new(OptionsStub::new("opts"))));
        set.push(ParamKind::Untyped, MockValue::Text(Arc::from("t")));

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().position, 0);
        assert_eq!(set.get(1).unwrap().position, 1);
        assert!(set.pairwise_distinct());
    }

    #[test]
    fn pairwise_distinct_detects_shared_value() {
        let shared = MockValue::Text(Arc::from("shared"));
        let mut set = MockArgumentSet::new();
        set.push(ParamKind::Untyped, shared.clone());
        set.push(ParamKind::Untyped, shared);
        assert!(!set.pairwise_distinct());
    }
}
