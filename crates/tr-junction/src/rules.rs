//! Rule lines: `<label>:<direction-code>`.

use tr_core::text::{normalize_label, DEFAULT_LABEL};
use tr_core::Direction;

/// One routing rule read from a junction sign.
///
/// The label is stored normalised (formatting, whitespace and case
/// removed) so it compares directly against a normalised destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleLine {
    pub label:     String,
    pub direction: Direction,
}

impl RuleLine {
    /// Parse one sign line.
    ///
    /// Returns `None` for blank or malformed lines: no colon, empty label,
    /// more than one colon, or an unknown direction code.  Only the first
    /// character of the code is significant, so `home:north` reads as `N`.
    pub fn parse(line: &str) -> Option<RuleLine> {
        let normalized = normalize_label(line);
        let (label, code) = normalized.split_once(':')?;
        if label.is_empty() || code.contains(':') {
            return None;
        }
        let direction = Direction::from_code(code)?;
        Some(RuleLine { label: label.to_owned(), direction })
    }

    /// `true` for the reserved `default` label every vehicle also matches.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.label == DEFAULT_LABEL
    }

    /// `true` if this rule applies to the (normalised) `destination`.
    #[inline]
    pub fn applies_to(&self, destination: &str) -> bool {
        self.label == destination || self.is_default()
    }
}
