//! Constructor parity checking
//!
//! Verifies that a factory constructor and the constructor of the object
//! it produces stay parameter-consistent:
//!
//! - the product declares exactly one parameter more than the factory (its
//!   leading parameter is the factory handle itself);
//! - every argument handed to the factory is discoverable, by reference
//!   identity, among the produced object's fields, apart from the options
//!   parameter (consumed, never stored verbatim) and, for legacy call
//!   shapes, one additional deprecated slot.
//!
//! Each check is a single stateless, synchronous pass over in-memory
//! schemas and values.
//!
//! # Example
//!
//! ```rust,ignore
//! use ctorcheck_core::ParityChecker;
//! use ctorcheck_mock::StubRegistry;
//!
//! let registry = StubRegistry::with_defaults();
//! let checker = ParityChecker::new();
//! let report = checker.run(&factory, &registry)?;
//! println!("covered {} arguments", report.covered);
//! ```

#![warn(unreachable_pub)]

mod checker;
mod error;
mod factory;

pub mod coverage;

pub use checker::{CheckReport, CheckerConfig, LegacyArgSet, ParityChecker};
pub use error::{CheckError, CheckResult, UncoveredMock};
pub use factory::{Construction, ConstructionError, FieldSnapshot, ProductFactory};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
