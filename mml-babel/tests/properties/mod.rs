//! Property tests over generated MathML trees and TeX-ish strings.

use mml_babel::{convert, normalize};
use proptest::prelude::*;

/// Strategy for a single MathML token element with realistic leaf content.
fn token_element() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,3}".prop_map(|s| format!("<mi>{s}</mi>")),
        "[0-9]{1,3}".prop_map(|s| format!("<mn>{s}</mn>")),
        prop_oneof![
            Just("+"),
            Just("-"),
            Just("="),
            Just("\u{00D7}"),
            Just("\u{2264}"),
        ]
        .prop_map(|op| format!("<mo>{op}</mo>")),
    ]
}

/// Strategy for a nested MathML fragment built from the supported elements.
fn math_fragment() -> impl Strategy<Value = String> {
    token_element().prop_recursive(3, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| format!("<mfrac>{a}{b}</mfrac>")),
            inner.clone().prop_map(|a| format!("<msqrt>{a}</msqrt>")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("<msup>{a}{b}</msup>")),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| format!("<msub>{a}{b}</msub>")),
            (inner.clone(), inner.clone())
                .prop_map(|(a, b)| format!("<mover>{a}{b}</mover>")),
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|children| format!("<mrow>{}</mrow>", children.concat())),
        ]
    })
}

fn math_document() -> impl Strategy<Value = String> {
    math_fragment().prop_map(|inner| format!("<math>{inner}</math>"))
}

/// Strategy for TeX-ish strings that exercise every normalizer rule.
fn texish_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z]{1,4}".prop_map(String::from),
            "[0-9]{1,3}".prop_map(String::from),
            Just("_".to_string()),
            Just("^".to_string()),
            Just("{x}".to_string()),
            Just("\\sqrt".to_string()),
            Just("\\frac".to_string()),
            Just("sin".to_string()),
            Just("max".to_string()),
            Just(" ".to_string()),
            Just("  ".to_string()),
        ],
        0..12,
    )
    .prop_map(|tokens| tokens.concat())
}

/// Escape-aware net brace depth; `None` when the depth ever goes negative.
fn net_brace_depth(tex: &str) -> Option<i64> {
    let mut depth = 0i64;
    let mut chars = tex.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {}
        }
    }
    Some(depth)
}

proptest! {
    #[test]
    fn conversion_is_deterministic(mathml in math_document()) {
        prop_assert_eq!(convert(&mathml), convert(&mathml));
    }

    #[test]
    fn conversion_output_is_brace_balanced(mathml in math_document()) {
        let tex = convert(&mathml);
        prop_assert_eq!(net_brace_depth(&tex), Some(0), "unbalanced output: {}", tex);
    }

    #[test]
    fn normalization_is_idempotent(raw in texish_string()) {
        let once = normalize(&raw);
        let twice = normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn normalization_of_conversion_output_is_a_fixed_point(mathml in math_document()) {
        let tex = convert(&mathml);
        prop_assert_eq!(normalize(&tex), tex);
    }
}
