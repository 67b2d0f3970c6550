//! The factory seam and construction results
//!
//! [`ProductFactory`] is the boundary to the collaborator under test: it
//! exposes the two declared schemas and a creation entry point. The
//! product reports its state as an explicit [`FieldSnapshot`] rather than
//! being reflected over.

use ctorcheck_mock::{MockArgumentSet, MockValue};
use ctorcheck_schema::ConstructorSchema;

/// Named field values held by a produced object
///
/// Field order follows insertion; values are clones of the `Arc`-backed
/// arguments, so identity comparison against the original mocks works.
#[derive(Debug, Clone, Default)]
pub struct FieldSnapshot {
    fields: Vec<(String, MockValue)>,
}

impl FieldSnapshot {
    /// Create an empty snapshot
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a field value
    pub fn insert(&mut self, name: impl Into<String>, value: MockValue) {
        self.fields.push((name.into(), value));
    }

    /// Number of recorded fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the snapshot holds no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Value of the named field, if present
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&MockValue> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Iterate `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MockValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

/// Result of one factory invocation
#[derive(Debug)]
pub struct Construction {
    /// Field values of the produced object
    pub fields: FieldSnapshot,

    /// Deprecation notices emitted while constructing
    pub deprecations: Vec<String>,
}

impl Construction {
    /// Construction with the given fields and no deprecation notices
    #[must_use]
    pub fn new(fields: FieldSnapshot) -> Self {
        Self {
            fields,
            deprecations: Vec::new(),
        }
    }

    /// Record a deprecation notice, builder-style
    #[must_use]
    pub fn with_deprecation(mut self, notice: impl Into<String>) -> Self {
        self.deprecations.push(notice.into());
        self
    }
}

/// Errors raised by a factory's creation entry point
///
/// These indicate a genuine defect in the collaborator under test; the
/// checker propagates them without retrying.
#[derive(Debug, thiserror::Error)]
pub enum ConstructionError {
    /// Argument count does not match the declared schema
    #[error("wrong argument count for {owner}: expected {expected}, got {actual}")]
    ArgumentCount {
        /// Type whose constructor was invoked
        owner: String,
        /// Declared parameter count
        expected: usize,
        /// Supplied argument count
        actual: usize,
    },

    /// An argument was rejected during construction
    #[error("{owner} constructor rejected argument at position {position}: {message}")]
    Rejected {
        /// Type whose constructor was invoked
        owner: String,
        /// Position of the rejected argument
        position: usize,
        /// Why it was rejected
        message: String,
    },
}

/// The collaborator under test: a factory and the product it constructs
pub trait ProductFactory {
    /// Declared schema of the factory's own constructor
    fn factory_schema(&self) -> &ConstructorSchema;

    /// Declared schema of the product's constructor
    ///
    /// Its leading parameter is the factory handle the product receives
    /// implicitly, which the factory never exposes to callers.
    fn product_schema(&self) -> &ConstructorSchema;

    /// Invoke the creation entry point with the given arguments
    ///
    /// # Errors
    /// Any [`ConstructionError`] is a hard failure for the check.
    fn create(&self, args: &MockArgumentSet) -> Result<Construction, ConstructionError>;

    /// Invoke construction using a historical call shape
    ///
    /// Factories with no legacy shape fall through to [`Self::create`].
    ///
    /// # Errors
    /// As for [`Self::create`].
    fn create_legacy(&self, args: &MockArgumentSet) -> Result<Construction, ConstructionError> {
        self.create(args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn snapshot_lookup_by_name() {
        let value = MockValue::Text(Arc::from("stored"));
        let mut snapshot = FieldSnapshot::new();
        snapshot.insert("url_protocols", value.clone());

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.get("url_protocols").unwrap().same_instance(&value));
        assert!(snapshot.get("missing").is_none());
    }

    #[test]
    fn construction_collects_deprecations() {
        let construction = Construction::new(FieldSnapshot::new())
            .with_deprecation("constructed with raw site config");
        assert_eq!(construction.deprecations.len(), 1);
    }

    #[test]
    fn construction_error_display() {
        let err = ConstructionError::ArgumentCount {
            owner: "WikitextParser".to_string(),
            expected: 8,
            actual: 7,
        };
        assert_eq!(
            err.to_string(),
            "wrong argument count for WikitextParser: expected 8, got 7"
        );
    }
}
