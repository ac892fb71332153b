//! Spec layer: override directives and the tiered document that carries them.
//!
//! This module knows nothing about fixture lists or how directives are applied.
//! It owns:
//! - Directive (one override instruction) and its classification
//! - Tier + OverrideConfig (JSON shape, strict validation)

pub mod directive;
pub mod tiers;

pub use directive::{Action, Anchor, Directive, WILDCARD};
pub use tiers::{OverrideConfig, Tier};
