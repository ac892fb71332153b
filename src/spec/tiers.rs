//! Override document: directives grouped by the tier that declared them.
//!
//! JSON shape:
//! {
//!   "class":   [ { "path": "...", "before": "-" } ],
//!   "method":  [ { "path": "...", "remove": true } ],
//!   "dataSet": [ { "path": "...", "newPath": "..." } ]
//! }
//!
//! Any tier may be omitted. Tiers are applied class, then method, then data set.

use crate::Result;
use crate::spec::Directive;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Class,
    Method,
    DataSet,
}

impl Tier {
    /// Tiers in the order their directives are applied.
    pub const PRIORITY: [Tier; 3] = [Tier::Class, Tier::Method, Tier::DataSet];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Class => "class",
            Tier::Method => "method",
            Tier::DataSet => "dataSet",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OverrideConfig {
    #[serde(default)]
    pub class: Vec<Directive>,

    #[serde(default)]
    pub method: Vec<Directive>,

    #[serde(default)]
    pub data_set: Vec<Directive>,
}

impl OverrideConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parse override document")
    }

    pub fn tier(&self, tier: Tier) -> &[Directive] {
        match tier {
            Tier::Class => &self.class,
            Tier::Method => &self.method,
            Tier::DataSet => &self.data_set,
        }
    }

    /// Run [`Directive::validate`] over every tier, stopping at the first
    /// malformed directive.
    pub fn validate(&self) -> Result<()> {
        for tier in Tier::PRIORITY {
            for (idx, directive) in self.tier(tier).iter().enumerate() {
                directive
                    .validate()
                    .with_context(|| format!("{} directive #{}", tier, idx + 1))?;
            }
        }
        Ok(())
    }
}
