use crate::Result;

use anyhow::{Context, bail};
use regex::Regex;
use std::fs;

/// Read a base fixture list from a text file.
pub fn parse_fixture_file(path: &str) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read fixture list {}", path))?;
    parse_fixture_list(&text).with_context(|| format!("parse fixture list {}", path))
}

/// Parse a base fixture list: one identifier per line.
///
/// Blank lines and `#` comments (whole-line or trailing) are skipped. Order
/// and duplicates are kept as written.
///
/// A `#` starts a comment only at the beginning of a line or after
/// whitespace; a `#` touching an identifier is an error.
///
/// Example:
/// ```text
/// # catalog setup
/// Magento/Catalog/_files/category.php
/// Magento/Catalog/_files/product_simple.php   # needs category
/// ```
pub fn parse_fixture_list(text: &str) -> Result<Vec<String>> {
    // Capture:
    // 1) identifier: first run of non-whitespace
    // 2) anything left before an optional trailing comment (must be empty)
    const FIXTURE_LINE_RE: &str = r#"^\s*(\S+)(.*?)(?:\s+#.*)?\s*$"#;
    let re = Regex::new(FIXTURE_LINE_RE)?;

    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let lno = lineno + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some(caps) = re.captures(line) else {
            bail!("line {}: cannot parse fixture entry: {:?}", lno, line);
        };

        let rest = caps.get(2).map_or("", |m| m.as_str());
        if !rest.trim().is_empty() {
            bail!(
                "line {}: fixture identifiers cannot contain whitespace: {:?}",
                lno,
                trimmed
            );
        }

        let Some(fixture) = caps.get(1) else {
            bail!("line {}: missing fixture identifier", lno);
        };
        if fixture.as_str().contains('#') {
            bail!(
                "line {}: '#' must be separated from the fixture identifier by whitespace: {:?}",
                lno,
                trimmed
            );
        }
        out.push(fixture.as_str().to_string());
    }

    Ok(out)
}
