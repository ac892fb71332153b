//! Base fixture lists read from line-oriented text files.

pub mod parse;

pub use parse::{parse_fixture_file, parse_fixture_list};
