//! Chemistry detection for grouping nodes.
//!
//! A single-pass heuristic, evaluated once per Root/Row and deliberately
//! blind to sibling and ancestor context: the group's identifier-ish leaves
//! are concatenated and the result must read as a run of element symbols
//! (`H2SO4`, `NaCl`, `SO4-2`). Both false positives and false negatives are
//! possible; the regression suite is the guard rail.

use crate::node::MathNode;
use once_cell::sync::Lazy;
use regex::Regex;

/// A run of element-symbol tokens: one uppercase letter, optional lowercase
/// letter, optional digit count, optional signed digit run (ionic charge).
static ELEMENT_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[A-Z][a-z]?\d*(?:[+-]\d+)?)+$").expect("element pattern compiles")
});

/// Decide whether a group's children spell a chemical formula.
pub fn is_chemical_formula(children: &[MathNode]) -> bool {
    let signal = classification_signal(children);
    !signal.is_empty() && ELEMENT_RUN.is_match(&signal)
}

/// Concatenated text of the group's identifier-ish children, in order.
///
/// Besides direct `Identifier` children, the leaves of script nodes are
/// flattened in (`msub(H, 2)` contributes `H2`): a formula written entirely
/// with subscript counts has no direct identifier children at all, and
/// would otherwise never classify. Operators and standalone numbers
/// (reaction coefficients) stay out of the signal.
fn classification_signal(children: &[MathNode]) -> String {
    let mut signal = String::new();
    for child in children {
        match child {
            MathNode::Identifier(text) => signal.push_str(text),
            MathNode::Subscript { base, sub } => {
                push_leaf(&mut signal, base);
                push_leaf(&mut signal, sub);
            }
            MathNode::Superscript { base, sup } => {
                push_leaf(&mut signal, base);
                push_leaf(&mut signal, sup);
            }
            MathNode::SubSup { base, sub, sup } => {
                push_leaf(&mut signal, base);
                push_leaf(&mut signal, sub);
                push_leaf(&mut signal, sup);
            }
            _ => {}
        }
    }
    signal
}

fn push_leaf(signal: &mut String, node: &MathNode) {
    if let MathNode::Identifier(text) | MathNode::Number(text) = node {
        signal.push_str(text);
    }
}
