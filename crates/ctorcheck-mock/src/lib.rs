//! Mock argument synthesis with reference identity
//!
//! Produces one synthesized value per declared factory parameter, each
//! pairwise reference-distinct, so that "is this exact argument stored in
//! the product" can be answered by pointer identity rather than content
//! equality.
//!
//! # Core Concepts
//!
//! - [`MockValue`]: an `Arc`-backed value; identity is `Arc::ptr_eq`
//! - [`MockArgumentSet`]: ordered synthesized arguments, position-tagged
//! - [`StubRegistry`]: capability identity → stub constructor
//! - [`MockSynthesizer`]: the ordered first-match synthesis policy

#![warn(unreachable_pub)]

mod registry;
mod synth;
mod value;

pub use registry::{GenericStub, StubCtor, StubRegistry};
pub use synth::{MockSynthesizer, SynthesisError};
pub use value::{CapabilityStub, MockArg, MockArgumentSet, MockValue, OptionsStub};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
