//! Filename sanitation for cross-platform safe output names

use unicode_normalization::UnicodeNormalization;

/// Maximum filename length used when no explicit limit is given
pub const MAX_FILENAME_LEN: usize = 255;

/// Fallback name when sanitation leaves nothing usable
pub const FALLBACK_NAME: &str = "unnamed_file";

/// Sanitize a filename with the default length limit
pub fn sanitize_filename(name: &str) -> String {
    sanitize_filename_limited(name, MAX_FILENAME_LEN)
}

/// Sanitizes a filename down to a portable safe character set.
///
/// The input is NFKD-decomposed first so accented characters split into a
/// base letter plus combining marks; the marks are non-ASCII and fall away,
/// which keeps "Café" as "Cafe" instead of "Caf_".
///
/// Allowed characters: ASCII letters, digits, `-`, `_`, `.` and space.
/// Runs of disallowed characters collapse to a single `_`, runs of
/// whitespace to a single space. Leading/trailing dots and spaces are
/// trimmed (hidden-file and Windows trailing-dot issues), and the result
/// is truncated to `max_length` characters.
///
/// Pure and infallible: any input, including empty or all-symbol strings,
/// yields a non-empty name (falling back to `unnamed_file`).
pub fn sanitize_filename_limited(name: &str, max_length: usize) -> String {
    let folded: String = name.nfkd().filter(char::is_ascii).collect();

    let mut out = String::with_capacity(folded.len());
    for c in folded.chars() {
        let mapped = if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
            c
        } else if c.is_ascii_whitespace() {
            ' '
        } else {
            '_'
        };

        // Collapse runs of underscores and whitespace
        if (mapped == '_' && out.ends_with('_')) || (mapped == ' ' && out.ends_with(' ')) {
            continue;
        }
        out.push(mapped);
    }

    let trimmed: String = out
        .trim_matches(|c| c == '.' || c == ' ')
        .chars()
        .take(max_length)
        .collect();

    if trimmed.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        trimmed
    }
}
