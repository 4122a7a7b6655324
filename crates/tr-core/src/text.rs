//! Sign and label text normalisation.
//!
//! Sign text may carry host formatting codes: a `§` followed by one of
//! `0-9`, `a-f`, `k-o`, `r` or the hex-colour prefix `x` (either case).
//! Labels are compared after stripping those codes, removing whitespace and
//! lower-casing, so `"§1Main Line"` and `"mainline"` name the same
//! destination.

/// Reserved label matched by every vehicle in addition to its own.
pub const DEFAULT_LABEL: &str = "default";

/// Label of an unridden storage vehicle without a preference.
pub const CHEST_LABEL: &str = "chest";

/// Label of an unridden powered vehicle without a preference.
pub const ENGINE_LABEL: &str = "engine";

/// Label of any other unridden vehicle without a preference.
pub const EMPTY_LABEL: &str = "empty";

const FORMAT_MARKER: char = '§';

#[inline]
fn is_format_code(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), '0'..='9' | 'a'..='f' | 'k'..='o' | 'r' | 'x')
}

/// Remove formatting codes, leaving all other text untouched.
pub fn strip_formatting(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == FORMAT_MARKER {
            if let Some(&code) = chars.peek() {
                if is_format_code(code) {
                    chars.next();
                    continue;
                }
            }
        }
        out.push(c);
    }
    out
}

/// Canonical form of a destination label or rule line.
pub fn normalize_label(input: &str) -> String {
    strip_formatting(input)
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// `true` if `line` equals `header` once formatting is stripped, ignoring case.
pub fn matches_header(line: &str, header: &str) -> bool {
    strip_formatting(line).eq_ignore_ascii_case(header)
}
