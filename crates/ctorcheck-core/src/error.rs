//! Error taxonomy for parity checks
//!
//! Every variant is terminal for the check that raised it; there is no
//! retry or partial-success path.

use crate::factory::ConstructionError;
use ctorcheck_mock::SynthesisError;
use ctorcheck_schema::SchemaError;

/// One factory argument that never appeared among product fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UncoveredMock {
    /// Position of the argument in the factory parameter list
    pub position: usize,

    /// Description of its declared kind
    pub kind: String,
}

impl std::fmt::Display for UncoveredMock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "position {} ({})", self.position, self.kind)
    }
}

/// Combined parity-check error
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// Factory/product parameter counts disagree
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A declared parameter type could not be synthesized
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    /// The factory raised during invocation
    #[error(transparent)]
    Construction(#[from] ConstructionError),

    /// Synthesized arguments never appeared among product fields
    #[error("{count} factory argument(s) not found among product member fields: {}",
        uncovered.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    UncoveredMocks {
        /// How many arguments went unmatched
        count: usize,
        /// Which arguments went unmatched
        uncovered: Vec<UncoveredMock>,
    },

    /// A legacy call shape failed to emit its deprecation notice
    #[error("legacy construction '{scenario}' did not emit the expected deprecation notice")]
    MissingDeprecationNotice {
        /// Name of the legacy argument set
        scenario: String,
    },
}

/// Result type alias for parity-check operations
pub type CheckResult<T> = Result<T, CheckError>;
