//! Post-processing pass over raw converter output.
//!
//! Every rule here is a repair for TeX that is technically emittable but
//! sloppy: unbraced multi-character subscripts, `\sqrt` fused to its
//! argument, function keywords that arrived as literal text. The pass is
//! idempotent: running it twice yields the same string as running it once,
//! which the property tests pin down.

use crate::convert::tables::FUNCTION_NAMES;
use once_cell::sync::Lazy;
use regex::Regex;

/// A `_` directly followed by two or more word characters: a subscript that
/// was emitted without braces by a literal pass-through.
static BARE_SUBSCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_([A-Za-z0-9]{2,})").expect("subscript pattern compiles"));

/// `\sqrt` fused directly to an alphanumeric argument (`\sqrt2`).
/// `\sqrt{…}` and `\sqrt[…]{…}` do not match.
static BARE_SQRT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\sqrt([A-Za-z0-9])").expect("sqrt pattern compiles"));

/// A known function keyword that is not already escaped and not part of a
/// longer word. Built from the converter's table, which keeps longer names
/// before their prefixes (`sinh` before `sin`): alternation is
/// leftmost-first.
static BARE_FUNCTION: Lazy<Regex> = Lazy::new(|| {
    let alternation = FUNCTION_NAMES.join("|");
    Regex::new(&format!(r"(^|[^\\A-Za-z])({alternation})\b"))
        .expect("function pattern compiles")
});

/// Normalize a raw TeX string.
///
/// Applied once after full conversion; safe to apply again.
pub fn normalize(tex: &str) -> String {
    let tex = BARE_SUBSCRIPT.replace_all(tex, "_{${1}}");
    let tex = BARE_SQRT.replace_all(&tex, "\\sqrt{${1}}");
    let tex = BARE_FUNCTION.replace_all(&tex, "${1}\\${2}");
    collapse_whitespace(&tex)
}

/// Collapse whitespace runs to single spaces and trim both ends.
fn collapse_whitespace(tex: &str) -> String {
    tex.split_whitespace().collect::<Vec<_>>().join(" ")
}
