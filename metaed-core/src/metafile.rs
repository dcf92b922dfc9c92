//! Line-oriented tokenizer for metadata blocks.
//!
//! The text format is deliberately small:
//! ```text
//! # comment
//! title: Super Metroid
//! genres:
//!   Action
//!   Adventure
//! ```
//! A `key: value` line assigns one value. Indented lines that follow a key
//! line add one value each. Blank lines and `#` comments are skipped.
//! Anything else is kept verbatim as a key so the mapper can report it.

use crate::entry::{Entry, Pair};

/// Tokenize one metadata block. Line numbers start at 1.
///
/// Never fails: malformed lines end up as pairs the mapper will flag.
pub fn tokenize(text: &str) -> Entry {
    tokenize_at(text, 1)
}

/// Tokenize one metadata block whose first line is `first_line` in the
/// enclosing document.
pub fn tokenize_at(text: &str, first_line: usize) -> Entry {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut entry = Entry::new(first_line);
    let mut current: Option<Pair> = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = first_line + idx;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if raw.starts_with(char::is_whitespace) {
            if let Some(pair) = current.as_mut() {
                pair.values.push(trimmed.to_string());
                continue;
            }
        }

        if let Some(done) = current.take() {
            entry.push(done);
        }

        match split_key_value(trimmed) {
            Some((key, value)) => {
                let values = if value.is_empty() {
                    Vec::new()
                } else {
                    vec![value.to_string()]
                };
                current = Some(Pair::new(normalize_key(key), values, line));
            }
            None => entry.push(verbatim(trimmed, line)),
        }
    }

    if let Some(done) = current {
        entry.push(done);
    }

    entry
}

/// Split `key: value` at the first colon. Returns `None` when there is no
/// colon or the key part is empty.
pub(crate) fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

pub(crate) fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Unrecognized syntax: the whole line becomes the key and its only value.
fn verbatim(line: &str, line_no: usize) -> Pair {
    Pair::new(normalize_key(line), vec![line.to_string()], line_no)
}

#[cfg(test)]
#[path = "tests/metafile_tests.rs"]
mod tests;
