//! Declarative constructor schemas
//!
//! Replaces runtime reflection over constructor signatures with an explicit
//! schema: an ordered list of `(name, kind)` pairs per constructor, plus a
//! small diff routine for the factory/product parameter-count invariant.
//!
//! # Core Concepts
//!
//! - [`ParamKind`]: declared kind of a single constructor parameter
//! - [`CapabilityId`]: named contract a parameter (or stub) fulfills
//! - [`ConstructorSchema`]: ordered parameter list for one constructor
//! - [`diff::check_count_parity`]: the factory/product count invariant

#![warn(unreachable_pub)]

mod param;
mod schema;

pub mod diff;

pub use diff::SchemaError;
pub use param::{CapabilityId, ParamKind, ParamSpec};
pub use schema::ConstructorSchema;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
