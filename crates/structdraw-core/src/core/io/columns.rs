//! Fixed-column access helpers shared by the line-oriented readers.

/// Returns the trimmed text in `start..end`, or an empty string when the line is too short.
pub(crate) fn slice_and_trim(line: &str, start: usize, end: usize) -> &str {
    line.get(start..end).unwrap_or("").trim()
}

/// Returns the character at byte column `idx`, if the line is long enough.
pub(crate) fn char_at(line: &str, idx: usize) -> Option<char> {
    line.get(idx..).and_then(|rest| rest.chars().next())
}
