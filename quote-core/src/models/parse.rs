//! Lenient parsing of option text typed by a user or read from a CSV cell.
//!
//! Sizes and capacities accept `10`, `10kw` or `10 KW`. Named options match
//! their display name or one of their short aliases, ignoring case and
//! punctuation, so `"growatt"`, `"Growatt / Fox"` and `"growatt-fox"` all
//! resolve to the same inverter brand.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

static KILOWATTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(\d{1,3})\s*(?:kw)?\s*$").expect("kilowatt pattern is a valid regex")
});

/// Error returned when option text does not name any known choice.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{input}'; expected one of: {}", .expected.join(", "))]
pub struct ParseSelectionError {
    kind: &'static str,
    input: String,
    expected: Vec<&'static str>,
}

impl ParseSelectionError {
    pub(crate) fn new(
        kind: &'static str,
        input: &str,
        expected: Vec<&'static str>,
    ) -> Self {
        Self {
            kind,
            input: input.to_string(),
            expected,
        }
    }

    /// Which category was being parsed (e.g. `"panel brand"`).
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Extracts the kilowatt number from text like `15`, `15kw` or `15 KW`.
pub(crate) fn parse_kilowatts(input: &str) -> Option<u32> {
    KILOWATTS
        .captures(input)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Lowercases and strips everything but ASCII letters and digits.
pub(crate) fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Finds the option whose display name or alias matches `input`.
pub(crate) fn match_named<T: Copy>(
    input: &str,
    options: &[T],
    names: impl Fn(T) -> &'static [&'static str],
) -> Option<T> {
    let wanted = normalize(input);
    if wanted.is_empty() {
        return None;
    }
    options
        .iter()
        .copied()
        .find(|option| names(*option).iter().any(|name| normalize(name) == wanted))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_kilowatts_accepts_bare_number() {
        assert_eq!(parse_kilowatts("15"), Some(15));
    }

    #[test]
    fn parse_kilowatts_accepts_unit_suffix_in_any_case() {
        assert_eq!(parse_kilowatts("15kw"), Some(15));
        assert_eq!(parse_kilowatts(" 20 KW "), Some(20));
        assert_eq!(parse_kilowatts("25Kw"), Some(25));
    }

    #[test]
    fn parse_kilowatts_rejects_other_text() {
        assert_eq!(parse_kilowatts(""), None);
        assert_eq!(parse_kilowatts("kw"), None);
        assert_eq!(parse_kilowatts("15 panels"), None);
        assert_eq!(parse_kilowatts("-10"), None);
    }

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("Growatt / Fox"), "growattfox");
        assert_eq!(normalize("growatt-fox"), "growattfox");
    }

    #[test]
    fn match_named_ignores_blank_input() {
        const NAMES: &[&str] = &["anything"];
        let options = [1_u8, 2];
        let found = match_named("  ", &options, |_| NAMES);

        assert_eq!(found, None);
    }

    #[test]
    fn error_message_lists_expected_choices() {
        let err = ParseSelectionError::new("meter type", "dual", vec!["single", "three"]);

        assert_eq!(
            err.to_string(),
            "unknown meter type 'dual'; expected one of: single, three"
        );
        assert_eq!(err.kind(), "meter type");
        assert_eq!(err.input(), "dual");
    }
}
