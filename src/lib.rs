//! Fixture override resolution.
//!
//! Takes a base list of fixture identifiers plus override directives declared
//! at class, method and data-set level, and produces the final fixture order.

pub mod applier;
pub mod fixtures;
pub mod render;
pub mod spec;

pub use applier::{FixtureApplier, Outcome, Step};
pub use spec::{Directive, OverrideConfig, Tier};

pub type Result<T> = anyhow::Result<T>;
