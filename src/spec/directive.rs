//! A single override directive and its classification.
//!
//! JSON shape (every field except `path` is optional):
//! {
//!   "path": "Magento/Catalog/_files/product.php",
//!   "newPath": null,        // replace every occurrence of `path`
//!   "before": "-",          // "-" = start of sequence, otherwise an anchor id
//!   "after": null,          // "-" = end of sequence, otherwise an anchor id
//!   "remove": false         // drop the first remaining occurrence of `path`
//! }

use crate::Result;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Marker for `before`/`after` meaning "start"/"end" of the sequence.
pub const WILDCARD: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Directive {
    pub path: String,

    #[serde(default)]
    pub new_path: Option<String>,

    #[serde(default)]
    pub before: Option<String>,

    #[serde(default)]
    pub after: Option<String>,

    #[serde(default)]
    pub remove: bool,
}

/// Where an inserted fixture lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor<'a> {
    Start,
    End,
    Before(&'a str),
    After(&'a str),
}

/// What a directive does once applied. Remove wins over replace, replace over insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'a> {
    Remove,
    Replace { new_path: &'a str },
    Insert(Anchor<'a>),
    Noop,
}

impl Directive {
    pub fn insert_before(path: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            before: Some(anchor.into()),
            ..Default::default()
        }
    }

    pub fn insert_after(path: impl Into<String>, anchor: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            after: Some(anchor.into()),
            ..Default::default()
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            remove: true,
            ..Default::default()
        }
    }

    pub fn replace(path: impl Into<String>, new_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            new_path: Some(new_path.into()),
            ..Default::default()
        }
    }

    /// Classify the directive. Malformed combinations degrade to the
    /// highest-precedence action they carry rather than failing.
    pub fn action(&self) -> Action<'_> {
        if self.remove {
            return Action::Remove;
        }
        if let Some(new_path) = self.new_path.as_deref() {
            return Action::Replace { new_path };
        }
        match (self.before.as_deref(), self.after.as_deref()) {
            (Some(WILDCARD), _) => Action::Insert(Anchor::Start),
            (Some(id), _) => Action::Insert(Anchor::Before(id)),
            (None, Some(WILDCARD)) => Action::Insert(Anchor::End),
            (None, Some(id)) => Action::Insert(Anchor::After(id)),
            (None, None) => Action::Noop,
        }
    }

    /// Reject shapes whose meaning depends on the precedence rules in
    /// [`Directive::action`]. Only used by the strict pre-pass.
    pub fn validate(&self) -> Result<()> {
        if self.path.trim().is_empty() {
            bail!("directive has an empty path");
        }
        if self.before.as_deref().is_some_and(|s| s.trim().is_empty())
            || self.after.as_deref().is_some_and(|s| s.trim().is_empty())
        {
            bail!("directive for '{}' has an empty before/after anchor", self.path);
        }
        if self.before.is_some() && self.after.is_some() {
            bail!(
                "directive for '{}' sets both before and after; they are mutually exclusive",
                self.path
            );
        }

        let positioned = self.before.is_some() || self.after.is_some();
        match self.new_path.as_deref() {
            Some(_) if self.remove => {
                bail!("directive for '{}' sets both remove and newPath", self.path);
            }
            Some(new_path) if new_path.trim().is_empty() => {
                bail!("directive for '{}' has an empty newPath", self.path);
            }
            Some(new_path) if new_path == self.path => {
                bail!("directive for '{}' replaces the fixture with itself", self.path);
            }
            Some(_) if positioned => {
                bail!(
                    "directive for '{}' combines newPath with before/after; replacement keeps positions",
                    self.path
                );
            }
            _ => {}
        }
        if self.remove && positioned {
            bail!("directive for '{}' combines remove with before/after", self.path);
        }
        if self.action() == Action::Noop {
            bail!(
                "directive for '{}' has no effect: set before, after, remove or newPath",
                self.path
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn remove_takes_precedence_over_replace() {
        let directive = Directive {
            remove: true,
            ..Directive::replace("fixture", "new_fixture")
        };
        assert_eq!(directive.action(), Action::Remove);
    }

    #[test]
    fn replace_takes_precedence_over_positioning() {
        let directive = Directive {
            new_path: Some("new_fixture".into()),
            ..Directive::insert_before("fixture", "-")
        };
        assert_eq!(
            directive.action(),
            Action::Replace {
                new_path: "new_fixture"
            }
        );
    }

    #[rstest]
    #[case::before_wildcard(Directive::insert_before("f", "-"), Action::Insert(Anchor::Start))]
    #[case::after_wildcard(Directive::insert_after("f", "-"), Action::Insert(Anchor::End))]
    #[case::before_id(Directive::insert_before("f", "g"), Action::Insert(Anchor::Before("g")))]
    #[case::after_id(Directive::insert_after("f", "g"), Action::Insert(Anchor::After("g")))]
    #[case::bare(Directive { path: "f".into(), ..Default::default() }, Action::Noop)]
    fn classifies_insertions(#[case] directive: Directive, #[case] expected: Action<'static>) {
        assert_eq!(directive.action(), expected);
    }

    #[test]
    fn before_wins_when_both_anchors_are_set() {
        let directive = Directive {
            after: Some("-".into()),
            ..Directive::insert_before("f", "g")
        };
        assert_eq!(directive.action(), Action::Insert(Anchor::Before("g")));
    }

    #[test]
    fn deserializes_camel_case_with_defaults() {
        let directive: Directive =
            serde_json::from_str(r#"{"path": "fixture", "newPath": "new_fixture"}"#).unwrap();
        assert_eq!(directive, Directive::replace("fixture", "new_fixture"));
    }

    #[test]
    fn rejects_misspelled_keys() {
        let err = serde_json::from_str::<Directive>(
            r#"{"path": "a", "before": "-", "new_path": "b"}"#,
        )
        .unwrap_err()
        .to_string();
        assert!(err.contains("new_path"), "unexpected error: {err}");
    }

    #[test]
    fn well_formed_directives_validate() {
        for directive in [
            Directive::insert_before("f", "-"),
            Directive::insert_after("f", "g"),
            Directive::remove("f"),
            Directive::replace("f", "g"),
        ] {
            directive.validate().unwrap();
        }
    }

    #[rstest]
    #[case::empty_path(Directive::remove(" "), "empty path")]
    #[case::empty_anchor(Directive::insert_before("f", ""), "empty before/after anchor")]
    #[case::both_anchors(
        Directive { after: Some("h".into()), ..Directive::insert_before("f", "g") },
        "mutually exclusive"
    )]
    #[case::remove_and_replace(
        Directive { remove: true, ..Directive::replace("f", "g") },
        "both remove and newPath"
    )]
    #[case::replace_with_self(Directive::replace("f", "f"), "with itself")]
    #[case::replace_positioned(
        Directive { before: Some("-".into()), ..Directive::replace("f", "g") },
        "replacement keeps positions"
    )]
    #[case::remove_positioned(
        Directive { after: Some("g".into()), ..Directive::remove("f") },
        "remove with before/after"
    )]
    #[case::no_effect(Directive { path: "f".into(), ..Default::default() }, "no effect")]
    fn rejects_ambiguous_directives(#[case] directive: Directive, #[case] needle: &str) {
        let err = directive.validate().unwrap_err().to_string();
        assert!(err.contains(needle), "unexpected error: {err}");
    }
}
