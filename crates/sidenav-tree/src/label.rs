//! Display labels from file and directory names.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Leading ordering prefix such as `01-`.
static NUMERIC_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+-").unwrap());

/// The product name, as a whole word in any case.
static LENS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i-u:\blens\b)").unwrap());

/// First character of every ASCII word.
static WORD_START_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?-u:\b\w)").unwrap());

/// Convert a raw name into a sidebar label.
///
/// Rules, in order:
/// 1. Strip a leading numeric-dash prefix (`02-setup` -> `setup`)
/// 2. Replace each `-` and `_` with a space
/// 3. Replace the standalone word `lens` (any case) with `LENS`
/// 4. Uppercase the first letter of every word
///
/// The caller strips document extensions first. A name that reduces to
/// nothing but whitespace (e.g. `01-`) keeps its raw form.
///
/// # Examples
///
/// ```
/// use sidenav_tree::format_label;
///
/// assert_eq!(format_label("02-getting-started"), "Getting Started");
/// assert_eq!(format_label("lens_ai_test_pilot"), "LENS Ai Test Pilot");
/// ```
#[must_use]
pub fn format_label(name: &str) -> String {
    let without_prefix = NUMERIC_PREFIX_RE.replace(name, "");
    let spaced = without_prefix.replace(['-', '_'], " ");
    let branded = LENS_RE.replace_all(&spaced, "LENS");
    let label = WORD_START_RE
        .replace_all(&branded, |caps: &Captures| caps[0].to_ascii_uppercase())
        .into_owned();

    if label.trim().is_empty() {
        name.to_owned()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_numeric_prefix() {
        assert_eq!(format_label("01-introduction"), "Introduction");
        assert_eq!(format_label("002-setup"), "Setup");
        assert_eq!(format_label("10-faq"), "Faq");
    }

    #[test]
    fn test_prefix_only_stripped_once_and_at_start() {
        assert_eq!(format_label("01-02-nested"), "02 Nested");
        assert_eq!(format_label("step-01-run"), "Step 01 Run");
        // Digits without a dash are part of the name
        assert_eq!(format_label("2fa"), "2fa");
    }

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(format_label("getting_started"), "Getting Started");
        assert_eq!(format_label("how-to_install"), "How To Install");
        assert_eq!(format_label("a--b"), "A  B");
    }

    #[test]
    fn test_lens_word_uppercased() {
        assert_eq!(format_label("lens"), "LENS");
        assert_eq!(format_label("Lens-overview"), "LENS Overview");
        assert_eq!(format_label("what_is_LeNs"), "What Is LENS");
        assert_eq!(format_label("01-lens_ai_test_pilot"), "LENS Ai Test Pilot");
    }

    #[test]
    fn test_lens_inside_longer_word_untouched() {
        assert_eq!(format_label("lenses"), "Lenses");
        assert_eq!(format_label("flens-guide"), "Flens Guide");
        assert_eq!(format_label("telensing"), "Telensing");
    }

    #[test]
    fn test_capitalizes_every_word() {
        assert_eq!(format_label("faq"), "Faq");
        assert_eq!(format_label("on load"), "On Load");
        assert_eq!(format_label("already Capital"), "Already Capital");
    }

    #[test]
    fn test_word_start_after_punctuation() {
        assert_eq!(format_label("what.is.this"), "What.Is.This");
        assert_eq!(format_label("q&a"), "Q&A");
    }

    #[test]
    fn test_non_ascii_letters_left_as_is() {
        // Only ASCII word characters start a word
        assert_eq!(format_label("über-uns"), "üBer Uns");
        assert_eq!(format_label("café"), "Café");
    }

    #[test]
    fn test_empty_result_falls_back_to_raw_name() {
        assert_eq!(format_label("01-"), "01-");
        assert_eq!(format_label("-"), "-");
        assert_eq!(format_label("__"), "__");
    }
}
