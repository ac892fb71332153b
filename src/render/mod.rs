//! Output rendering for the final fixture list and the apply trace.

pub mod text;

pub use text::{render_fixtures, render_trace};

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One fixture per line.
    #[default]
    Text,
    /// JSON array of fixture identifiers.
    Json,
}
