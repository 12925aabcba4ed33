//! Locale-style ordering of sibling names.
//!
//! Authors control sidebar order through filename prefixes (`01-`, `02-`, ...),
//! so siblings are sorted the way a default-locale string collator sorts them
//! rather than by raw bytes. Names are compared in three passes:
//!
//! 1. Base characters: whitespace < punctuation and symbols < digits < letters.
//!    Letters ignore case and accents, so `Ärger` sorts next to `arger`.
//! 2. Accents: an unaccented letter sorts before its accented forms.
//! 3. Case: at the first case-only difference, lowercase sorts first.
//!
//! Digits compare one at a time, so `10-x` sorts before `2-x`. Letters outside
//! the Latin script sort after Latin letters by lowercase code point.

use std::cmp::Ordering;

/// Punctuation and symbols in collator order.
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Character classes, in sort order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Whitespace,
    Symbol,
    Digit,
    Letter,
    OtherLetter,
}

/// Diacritics, in collator order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Accent {
    Plain,
    Acute,
    Grave,
    Breve,
    Circumflex,
    Caron,
    Ring,
    Diaeresis,
    DoubleAcute,
    Tilde,
    Dot,
    Stroke,
    Cedilla,
    Ogonek,
    Macron,
    Other,
}

/// One collation unit of a name.
#[derive(Clone, Copy, Debug)]
struct Element {
    primary: (Class, u32),
    accent: Accent,
    upper: bool,
}

/// Compare two names for sidebar ordering.
///
/// Total and deterministic: names that collate equal fall back to byte order.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use sidenav_tree::collate::compare;
///
/// assert_eq!(compare("01-intro", "02-setup"), Ordering::Less);
/// assert_eq!(compare("apple", "Banana"), Ordering::Less);
/// assert_eq!(compare("faq", "FAQ"), Ordering::Less);
/// assert_eq!(compare("über", "zebra"), Ordering::Less);
/// ```
#[must_use]
pub fn compare(a: &str, b: &str) -> Ordering {
    let (left, right) = (elements(a), elements(b));
    let primary = |e: &Element| e.primary;
    let accent = |e: &Element| e.accent;
    let upper = |e: &Element| e.upper;

    left.iter()
        .map(primary)
        .cmp(right.iter().map(primary))
        .then_with(|| left.iter().map(accent).cmp(right.iter().map(accent)))
        .then_with(|| left.iter().map(upper).cmp(right.iter().map(upper)))
        .then_with(|| a.cmp(b))
}

/// Split a name into collation elements.
///
/// A combining mark attaches to the preceding element, so decomposed and
/// precomposed spellings of the same name weigh the same.
fn elements(name: &str) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::with_capacity(name.len());
    for c in name.chars() {
        if let Some(mark) = combining_accent(c)
            && let Some(last) = out.last_mut()
        {
            if last.accent == Accent::Plain {
                last.accent = mark;
            }
            continue;
        }

        let upper = c.is_uppercase();
        let lower = c.to_lowercase().next().unwrap_or(c);
        if let Some((base, accent)) = latin_base(lower) {
            out.extend(base.chars().map(|b| Element {
                primary: (Class::Letter, u32::from(b)),
                accent,
                upper,
            }));
        } else {
            out.push(Element {
                primary: primary_weight(c),
                accent: Accent::Plain,
                upper,
            });
        }
    }
    out
}

fn primary_weight(c: char) -> (Class, u32) {
    if c.is_whitespace() {
        return (Class::Whitespace, u32::from(c));
    }
    if c.is_ascii_digit() {
        return (Class::Digit, u32::from(c));
    }
    if c.is_ascii_alphabetic() {
        return (Class::Letter, u32::from(c.to_ascii_lowercase()));
    }
    if c.is_alphabetic() {
        let lower = c.to_lowercase().next().unwrap_or(c);
        return (Class::OtherLetter, u32::from(lower));
    }
    // Unlisted symbols follow the listed ones.
    let rank = PUNCTUATION
        .chars()
        .zip(0u32..)
        .find_map(|(p, i)| (p == c).then_some(i))
        .unwrap_or(0x100 + u32::from(c));
    (Class::Symbol, rank)
}

/// Accent of a combining diacritical mark.
fn combining_accent(c: char) -> Option<Accent> {
    let accent = match c {
        '\u{0301}' => Accent::Acute,
        '\u{0300}' => Accent::Grave,
        '\u{0306}' => Accent::Breve,
        '\u{0302}' => Accent::Circumflex,
        '\u{030C}' => Accent::Caron,
        '\u{030A}' => Accent::Ring,
        '\u{0308}' => Accent::Diaeresis,
        '\u{030B}' => Accent::DoubleAcute,
        '\u{0303}' => Accent::Tilde,
        '\u{0307}' => Accent::Dot,
        '\u{0327}' => Accent::Cedilla,
        '\u{0328}' => Accent::Ogonek,
        '\u{0304}' => Accent::Macron,
        '\u{0300}'..='\u{036F}' => Accent::Other,
        _ => return None,
    };
    Some(accent)
}

/// Base letters and accent of a lowercase accented Latin letter.
#[allow(clippy::too_many_lines)]
fn latin_base(c: char) -> Option<(&'static str, Accent)> {
    use Accent::{
        Acute, Breve, Caron, Cedilla, Circumflex, Diaeresis, Dot, DoubleAcute, Grave, Macron,
        Ogonek, Plain, Ring, Stroke, Tilde,
    };

    let base = match c {
        'à' => ("a", Grave),
        'á' => ("a", Acute),
        'â' => ("a", Circumflex),
        'ã' => ("a", Tilde),
        'ä' => ("a", Diaeresis),
        'å' => ("a", Ring),
        'ā' => ("a", Macron),
        'ă' => ("a", Breve),
        'ą' => ("a", Ogonek),
        'æ' => ("ae", Plain),
        'ç' => ("c", Cedilla),
        'ć' => ("c", Acute),
        'ĉ' => ("c", Circumflex),
        'ċ' => ("c", Dot),
        'č' => ("c", Caron),
        'ď' => ("d", Caron),
        'đ' | 'ð' => ("d", Stroke),
        'è' => ("e", Grave),
        'é' => ("e", Acute),
        'ê' => ("e", Circumflex),
        'ë' => ("e", Diaeresis),
        'ē' => ("e", Macron),
        'ĕ' => ("e", Breve),
        'ė' => ("e", Dot),
        'ę' => ("e", Ogonek),
        'ě' => ("e", Caron),
        'ĝ' => ("g", Circumflex),
        'ğ' => ("g", Breve),
        'ġ' => ("g", Dot),
        'ģ' => ("g", Cedilla),
        'ĥ' => ("h", Circumflex),
        'ħ' => ("h", Stroke),
        'ì' => ("i", Grave),
        'í' => ("i", Acute),
        'î' => ("i", Circumflex),
        'ï' => ("i", Diaeresis),
        'ĩ' => ("i", Tilde),
        'ī' => ("i", Macron),
        'ĭ' => ("i", Breve),
        'į' => ("i", Ogonek),
        'ĵ' => ("j", Circumflex),
        'ķ' => ("k", Cedilla),
        'ĺ' => ("l", Acute),
        'ļ' => ("l", Cedilla),
        'ľ' => ("l", Caron),
        'ł' => ("l", Stroke),
        'ñ' => ("n", Tilde),
        'ń' => ("n", Acute),
        'ņ' => ("n", Cedilla),
        'ň' => ("n", Caron),
        'ò' => ("o", Grave),
        'ó' => ("o", Acute),
        'ô' => ("o", Circumflex),
        'õ' => ("o", Tilde),
        'ö' => ("o", Diaeresis),
        'ø' => ("o", Stroke),
        'ō' => ("o", Macron),
        'ŏ' => ("o", Breve),
        'ő' => ("o", DoubleAcute),
        'œ' => ("oe", Plain),
        'ŕ' => ("r", Acute),
        'ŗ' => ("r", Cedilla),
        'ř' => ("r", Caron),
        'ś' => ("s", Acute),
        'ŝ' => ("s", Circumflex),
        'ş' => ("s", Cedilla),
        'š' => ("s", Caron),
        'ß' => ("ss", Plain),
        'ţ' => ("t", Cedilla),
        'ť' => ("t", Caron),
        'ŧ' => ("t", Stroke),
        'ù' => ("u", Grave),
        'ú' => ("u", Acute),
        'û' => ("u", Circumflex),
        'ü' => ("u", Diaeresis),
        'ũ' => ("u", Tilde),
        'ū' => ("u", Macron),
        'ŭ' => ("u", Breve),
        'ů' => ("u", Ring),
        'ű' => ("u", DoubleAcute),
        'ų' => ("u", Ogonek),
        'ŵ' => ("w", Circumflex),
        'ý' => ("y", Acute),
        'ÿ' => ("y", Diaeresis),
        'ŷ' => ("y", Circumflex),
        'ź' => ("z", Acute),
        'ż' => ("z", Dot),
        'ž' => ("z", Caron),
        _ => return None,
    };
    Some(base)
}
