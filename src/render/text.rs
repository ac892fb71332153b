use crate::Result;
use crate::applier::{Outcome, Step};
use crate::render::Format;

/// Render the final fixture list in the requested format.
pub fn render_fixtures(fixtures: &[String], format: Format) -> Result<String> {
    match format {
        Format::Text => {
            let mut out = String::new();
            for fixture in fixtures {
                out.push_str(fixture);
                out.push('\n');
            }
            Ok(out)
        }
        Format::Json => {
            let mut out = serde_json::to_string_pretty(fixtures)?;
            out.push('\n');
            Ok(out)
        }
    }
}

/// One line per directive, e.g. `method#2 fixture: removed at 0`.
pub fn render_trace(steps: &[Step]) -> String {
    let mut out = String::new();
    for step in steps {
        let what = match &step.outcome {
            Outcome::Inserted { at } => format!("inserted at {}", at),
            Outcome::Removed { at } => format!("removed at {}", at),
            Outcome::Replaced { count } => format!("replaced {} occurrence(s)", count),
            Outcome::Skipped { reason } => format!("skipped ({})", reason),
        };
        out.push_str(&format!(
            "{}#{} {}: {}\n",
            step.tier,
            step.index + 1,
            step.path,
            what
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Tier;
    use pretty_assertions::assert_eq;

    fn fixtures() -> Vec<String> {
        vec!["a".to_string(), "b".to_string()]
    }

    #[test]
    fn text_is_newline_terminated() {
        assert_eq!(render_fixtures(&fixtures(), Format::Text).unwrap(), "a\nb\n");
        assert_eq!(render_fixtures(&[], Format::Text).unwrap(), "");
    }

    #[test]
    fn json_is_an_array() {
        let out = render_fixtures(&fixtures(), Format::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, fixtures());
    }

    #[test]
    fn trace_numbers_directives_from_one() {
        let steps = vec![
            Step {
                tier: Tier::Class,
                index: 0,
                path: "a".into(),
                outcome: Outcome::Inserted { at: 0 },
            },
            Step {
                tier: Tier::DataSet,
                index: 1,
                path: "b".into(),
                outcome: Outcome::Replaced { count: 2 },
            },
        ];
        assert_eq!(
            render_trace(&steps),
            "class#1 a: inserted at 0\ndataSet#2 b: replaced 2 occurrence(s)\n"
        );
    }
}
