//! Ordered constructor parameter schemas

use crate::param::{ParamKind, ParamSpec};
use serde::{Deserialize, Serialize};

/// Declared parameter list of one constructor
///
/// Parameters are ordered; position is the index. The `owner` names the
/// constructor's type for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorSchema {
    owner: String,
    params: Vec<ParamSpec>,
}

impl ConstructorSchema {
    /// Create an empty schema for the named owner type
    #[must_use]
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter, builder-style
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, kind: ParamKind) -> Self {
        self.params.push(ParamSpec::new(name, kind));
        self
    }

    /// Append a parameter in place
    pub fn push(&mut self, name: impl Into<String>, kind: ParamKind) {
        self.params.push(ParamSpec::new(name, kind));
    }

    /// Type that owns this constructor
    #[inline]
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Number of declared parameters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether the constructor takes no parameters
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter at the given position
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&ParamSpec> {
        self.params.get(position)
    }

    /// Iterate declared parameters in order
    pub fn params(&self) -> impl Iterator<Item = &ParamSpec> {
        self.params.iter()
    }

    /// Declared parameter names, in order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }
}
