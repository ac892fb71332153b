//! Sequence edits backing each directive action. All edits are in place and
//! report where they landed so the caller can trace them.

use crate::spec::Anchor;

/// Insert `path` relative to `anchor`. Returns the insertion index, or `None`
/// when a named anchor is not in the sequence.
pub fn insert(fixtures: &mut Vec<String>, path: &str, anchor: Anchor<'_>) -> Option<usize> {
    let idx = match anchor {
        Anchor::Start => 0,
        Anchor::End => fixtures.len(),
        Anchor::Before(id) => position(fixtures, id)?,
        Anchor::After(id) => position(fixtures, id)? + 1,
    };
    fixtures.insert(idx, path.to_string());
    Some(idx)
}

/// Remove the first remaining occurrence of `path`.
pub fn remove_first(fixtures: &mut Vec<String>, path: &str) -> Option<usize> {
    let idx = position(fixtures, path)?;
    fixtures.remove(idx);
    Some(idx)
}

/// Rewrite every occurrence of `path` to `new_path`, keeping positions.
pub fn replace_all(fixtures: &mut [String], path: &str, new_path: &str) -> usize {
    let mut count = 0;
    for fixture in fixtures.iter_mut().filter(|f| f.as_str() == path) {
        *fixture = new_path.to_string();
        count += 1;
    }
    count
}

fn position(fixtures: &[String], id: &str) -> Option<usize> {
    fixtures.iter().position(|f| f == id)
}
