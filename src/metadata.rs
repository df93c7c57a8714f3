//! Header block ("front matter") parsing.
//!
//! Only a flat `key: value` subset is understood:
//!
//! ```text
//! ---
//! title: First Post
//! date: 2024-01-05
//! ---
//! body...
//! ```
//!
//! The block must start at the very first byte. Inside it, each line is split
//! at its first `:`; both sides are trimmed and nothing else is interpreted.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

pub const DELIMITER: &str = "---";

/// Header keys mapped to their raw string values.
pub type Metadata = BTreeMap<String, String>;

static HEADER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // the empty block is tried first so the lazy body never runs into a later `---`
    Regex::new(r"\A---\r?\n(?:---|(?s:(.*?))\r?\n---)(?:\r?\n|\z)").expect("valid header pattern")
});

/// Returns the raw content between the delimiter lines, if the text starts
/// with a header block.
pub fn header_block(content: &str) -> Option<&str> {
    let caps = HEADER_PATTERN.captures(content)?;
    Some(caps.get(1).map_or("", |m| m.as_str()))
}

/// Parses the leading header block of `content`.
///
/// Documents without a block yield an empty map. Lines without a key (no `:`
/// or nothing before it) are ignored and a repeated key keeps its last value.
pub fn parse_header(content: &str) -> Metadata {
    let mut metadata = Metadata::new();
    let Some(header) = header_block(content) else {
        return metadata;
    };

    for line in header.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        metadata.insert(name.to_string(), value.trim().to_string());
    }

    metadata
}
