//! Parameter kinds and capability identities

use serde::{Deserialize, Serialize};

/// Identity of a capability contract
///
/// A capability is a named interface a value fulfills, independent of its
/// concrete type. Stubs are registered and looked up by this identity, not
/// by a type-name string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityId(String);

impl CapabilityId {
    /// Create a capability identity from a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name of the capability
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CapabilityId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Declared kind of a single constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    /// Structured configuration/options object (by convention, position 0)
    Options,

    /// Ordered sequence of strings
    Sequence,

    /// Named interface contract, satisfiable by a registered stub
    Capability(CapabilityId),

    /// No declared type; a plain string is acceptable
    Untyped,

    /// A declared type the synthesizer has no rule for
    Other(String),
}

impl ParamKind {
    /// Short human-readable description, used in diagnostics
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Options => "options".to_string(),
            Self::Sequence => "sequence".to_string(),
            Self::Capability(id) => format!("capability '{id}'"),
            Self::Untyped => "untyped".to_string(),
            Self::Other(name) => format!("'{name}'"),
        }
    }
}

/// One declared parameter: name plus kind; position is its index in the
/// owning [`ConstructorSchema`](crate::ConstructorSchema)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamSpec {
    /// Declared parameter name
    pub name: String,

    /// Declared parameter kind
    pub kind: ParamKind,
}

impl ParamSpec {
    /// Create a parameter spec
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}
