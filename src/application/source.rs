//! Entry sources: flat entry lists decoded from text.
//!
//! Line format, one entry per line:
//! ```text
//! # comment
//! 1 = one
//! 2 = two <- 1
//! ```
//! `KEY = PAYLOAD [<- PARENT]`. Blank lines and `#` comments are skipped.
//!
//! TOML format (`.toml` files):
//! ```toml
//! [[entry]]
//! key = "2"
//! payload = "two"
//! parent = "1"
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::Entry;

const PARENT_MARKER: &str = "<-";

static ENTRY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    // pattern is a literal
    Regex::new(r"^(?P<key>[^\s=#/]+)\s*=\s*(?P<payload>.*?)(?:\s*<-\s*(?P<parent>[^\s=#/]+))?$")
        .expect("entry line pattern compiles")
});

#[derive(Debug, Deserialize)]
struct EntryFile {
    #[serde(default)]
    entry: Vec<Entry<String>>,
}

/// Decode `content` read from `path`, choosing the format by extension.
pub fn parse_entries(content: &str, path: &Path) -> ApplicationResult<Vec<Entry<String>>> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_toml_entries(content, path),
        _ => parse_line_entries(content, path),
    }
}

/// Decode the line format. Errors carry the 1-based line number.
#[instrument(level = "debug", skip(content))]
pub fn parse_line_entries(content: &str, path: &Path) -> ApplicationResult<Vec<Entry<String>>> {
    let mut entries = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parse_error = |message: String| ApplicationError::Parse {
            path: path.to_path_buf(),
            line: i + 1,
            message,
        };

        let caps = ENTRY_LINE.captures(trimmed).ok_or_else(|| {
            parse_error(format!(
                "expected 'KEY = PAYLOAD [<- PARENT]', got '{}'",
                trimmed
            ))
        })?;

        let key = caps["key"].to_string();
        let payload = caps["payload"].to_string();
        if payload.ends_with(PARENT_MARKER) {
            return Err(parse_error(format!(
                "missing parent key after '{}'",
                PARENT_MARKER
            )));
        }
        let parent = caps.name("parent").map(|m| m.as_str().to_string());

        entries.push(Entry::new(key, payload, parent));
    }

    debug!(count = entries.len(), "parsed entries");
    Ok(entries)
}

/// Decode the TOML format (`[[entry]]` tables).
#[instrument(level = "debug", skip(content))]
pub fn parse_toml_entries(content: &str, path: &Path) -> ApplicationResult<Vec<Entry<String>>> {
    let file: EntryFile = toml::from_str(content).map_err(|e| ApplicationError::Parse {
        path: path.to_path_buf(),
        line: e
            .span()
            .and_then(|span| content.get(..span.start))
            .map(|prefix| prefix.matches('\n').count() + 1)
            .unwrap_or(0),
        message: e.message().to_string(),
    })?;
    debug!(count = file.entry.len(), "parsed entries");
    Ok(file.entry)
}
