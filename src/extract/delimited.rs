//! Delimiter-spanning text extraction
//!
//! Accumulates source lines from a starting point until an end marker shows
//! up, so that constructs wrapped over several lines (parameter lists,
//! docstrings) come back as one piece of text.

use thiserror::Error;

/// Text collected up to (not including) an end marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Accumulated text, truncated at the first occurrence of the marker
    pub text: String,
    /// Index of the line that contains the marker
    pub end_line: usize,
}

/// The end marker never appeared before the end of the buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{marker}` not found after line {}", .start_line + 1)]
pub struct Unterminated {
    pub marker: String,
    /// Index of the line the extraction was seeded from
    pub start_line: usize,
}

/// Extract text from `seed` onwards until `end_marker` is found.
///
/// `seed` is the already-read content of `lines[start]` (possibly with a
/// prefix removed). When the marker is not in the seed, the following lines
/// are appended verbatim, line endings included, until one contains the
/// marker. Scanning is bounded by `lines.len()`.
pub fn extract_until(
    end_marker: &str,
    seed: &str,
    lines: &[&str],
    start: usize,
) -> Result<Extracted, Unterminated> {
    debug_assert!(!end_marker.is_empty(), "end marker must not be empty");

    let mut text = seed.to_string();
    let mut end_line = start;

    if !seed.contains(end_marker) {
        let found = lines
            .iter()
            .enumerate()
            .skip(start + 1)
            .find_map(|(index, line)| {
                text.push_str(line);
                line.contains(end_marker).then_some(index)
            });

        end_line = found.ok_or_else(|| Unterminated {
            marker: end_marker.to_string(),
            start_line: start,
        })?;
    }

    if let Some(pos) = text.find(end_marker) {
        text.truncate(pos);
    }

    Ok(Extracted { text, end_line })
}
