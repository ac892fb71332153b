//! Override applier: fold class, method and data-set directives over a base
//! fixture list.
//!
//! Directives are applied one at a time in priority order. Each one sees the
//! list exactly as the previous directive left it; nothing is batched and
//! nothing is deduplicated.

pub mod ops;

use crate::spec::{Action, Directive, OverrideConfig, Tier};

use log::{debug, trace};
use serde::Serialize;

#[derive(Debug, Clone, Default)]
pub struct FixtureApplier {
    class: Vec<Directive>,
    method: Vec<Directive>,
    data_set: Vec<Directive>,
}

/// Result of one directive against the working list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Inserted { at: usize },
    Removed { at: usize },
    Replaced { count: usize },
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub tier: Tier,
    /// Zero-based position of the directive within its tier.
    pub index: usize,
    pub path: String,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl FixtureApplier {
    pub fn new(class: Vec<Directive>, method: Vec<Directive>, data_set: Vec<Directive>) -> Self {
        Self {
            class,
            method,
            data_set,
        }
    }

    pub fn set_class_config(&mut self, directives: Vec<Directive>) {
        self.class = directives;
    }

    pub fn set_method_config(&mut self, directives: Vec<Directive>) {
        self.method = directives;
    }

    pub fn set_data_set_config(&mut self, directives: Vec<Directive>) {
        self.data_set = directives;
    }

    /// The three tiers in application order: class, method, data set.
    /// Empty tiers keep their slot.
    pub fn prioritized_config(&self) -> [(Tier, &[Directive]); 3] {
        [
            (Tier::Class, self.class.as_slice()),
            (Tier::Method, self.method.as_slice()),
            (Tier::DataSet, self.data_set.as_slice()),
        ]
    }

    /// Every directive in application order, tagged with its tier and its
    /// index inside that tier.
    pub fn directives(&self) -> impl Iterator<Item = (Tier, usize, &Directive)> {
        self.prioritized_config()
            .into_iter()
            .flat_map(|(tier, directives)| {
                directives
                    .iter()
                    .enumerate()
                    .map(move |(idx, directive)| (tier, idx, directive))
            })
    }

    pub fn apply(&self, fixtures: &[String]) -> Vec<String> {
        let mut out = fixtures.to_vec();
        for (_, _, directive) in self.directives() {
            apply_one(&mut out, directive);
        }
        out
    }

    /// Same result as [`FixtureApplier::apply`], plus one [`Step`] per directive.
    pub fn apply_traced(&self, fixtures: &[String]) -> (Vec<String>, Vec<Step>) {
        let mut out = fixtures.to_vec();
        let mut steps = Vec::new();
        for (tier, index, directive) in self.directives() {
            let outcome = apply_one(&mut out, directive);
            steps.push(Step {
                tier,
                index,
                path: directive.path.clone(),
                outcome,
            });
        }
        (out, steps)
    }
}

impl From<OverrideConfig> for FixtureApplier {
    fn from(config: OverrideConfig) -> Self {
        Self::new(config.class, config.method, config.data_set)
    }
}

fn apply_one(fixtures: &mut Vec<String>, directive: &Directive) -> Outcome {
    let path = directive.path.as_str();
    let outcome = match directive.action() {
        Action::Remove => match ops::remove_first(fixtures, path) {
            Some(at) => Outcome::Removed { at },
            None => Outcome::Skipped {
                reason: format!("'{}' is not in the fixture list", path),
            },
        },
        Action::Replace { new_path } => {
            let count = ops::replace_all(fixtures, path, new_path);
            if count == 0 {
                Outcome::Skipped {
                    reason: format!("'{}' is not in the fixture list", path),
                }
            } else {
                Outcome::Replaced { count }
            }
        }
        Action::Insert(anchor) => match ops::insert(fixtures, path, anchor) {
            Some(at) => Outcome::Inserted { at },
            None => Outcome::Skipped {
                reason: format!("anchor for '{}' is not in the fixture list", path),
            },
        },
        Action::Noop => Outcome::Skipped {
            reason: "directive sets no before, after, remove or newPath".to_string(),
        },
    };

    match &outcome {
        Outcome::Skipped { reason } => debug!("skip {}: {}", path, reason),
        other => debug!("{}: {:?}", path, other),
    }
    trace!("fixtures now {:?}", fixtures);

    outcome
}
