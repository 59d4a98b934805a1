//! MathML → TeX conversion
//!
//! The converter is a pure recursive function over the parsed tree: children
//! convert first, parents combine the results. Two properties shape the
//! implementation:
//!
//! - The math/chemistry domain is threaded through every recursive call as a
//!   parameter, never stored on an instance. A conversion in flight cannot
//!   leak its mode into another conversion running on the same thread pool.
//! - Parse failures do not escape. A malformed fragment converts to an
//!   inline `\text{[MathML Parse Error: …]}` diagnostic so batch callers
//!   (the regression suite, whole-document conversion) keep going.
//!
//! Grouping nodes add no braces of their own: `\frac{}{}`/`\sqrt{}`/script
//! emission owns the brace placement, and an mrow that braced itself would
//! stack doubled groups (`\sqrt{{…}}`).

pub mod chemistry;
pub mod normalize;
pub mod tables;

use crate::node::MathNode;
use crate::parser::parse_mathml;

pub use normalize::normalize;

/// The active output domain, decided per grouping node by the chemistry
/// classifier and passed down the recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Domain {
    Math,
    Chemistry,
}

/// Convert one MathML fragment to TeX.
///
/// Never fails: malformed input yields an inline diagnostic string instead.
/// Two calls with the same input return byte-identical output.
pub fn convert(mathml: &str) -> String {
    match parse_mathml(mathml) {
        Ok(tree) => normalize(&emit(&tree, Domain::Math)),
        Err(err) => {
            let message = match err {
                crate::error::ConvertError::ParseError(msg) => msg,
                other => other.to_string(),
            };
            format!("\\text{{[MathML Parse Error: {}]}}", tex_safe(&message))
        }
    }
}

/// Strip TeX-active characters out of a diagnostic message so the result is
/// safe to embed in `\text{…}`.
fn tex_safe(message: &str) -> String {
    message
        .chars()
        .filter(|c| !matches!(c, '\\' | '{' | '}'))
        .collect()
}

fn emit(node: &MathNode, domain: Domain) -> String {
    match node {
        MathNode::Root(children) | MathNode::Row(children) => emit_group(children, domain),
        MathNode::Identifier(text) => emit_identifier(text, domain),
        MathNode::Number(text) => text.clone(),
        MathNode::Operator(text) => emit_operator(text, domain),
        MathNode::Superscript { base, sup } => {
            let base = emit(base, domain);
            let sup = emit(sup, domain);
            match domain {
                // Ionic charges keep a bare caret: \ce{SO4^2-}.
                Domain::Chemistry => format!("{base}^{}", despace(&sup)),
                Domain::Math => format!("{base}^{}", script_group(&sup)),
            }
        }
        MathNode::Subscript { base, sub } => {
            let base = emit(base, domain);
            let sub = emit(sub, domain);
            match domain {
                // mhchem reads element counts from plain digits: H2, not H_2.
                Domain::Chemistry => format!("{base}{}", despace(&sub)),
                Domain::Math => format!("{base}_{}", script_group(&sub)),
            }
        }
        MathNode::SubSup { base, sub, sup } => {
            let base = emit(base, domain);
            let sub = emit(sub, domain);
            let sup = emit(sup, domain);
            match domain {
                Domain::Chemistry => format!("{base}{}^{}", despace(&sub), despace(&sup)),
                Domain::Math => {
                    format!("{base}_{}^{}", script_group(&sub), script_group(&sup))
                }
            }
        }
        MathNode::Fraction { num, den } => {
            format!("\\frac{{{}}}{{{}}}", emit(num, domain), emit(den, domain))
        }
        MathNode::Sqrt(content) => format!("\\sqrt{{{}}}", emit(content, domain)),
        MathNode::NthRoot { radicand, index } => {
            format!("\\sqrt[{}]{{{}}}", emit(index, domain), emit(radicand, domain))
        }
        MathNode::Over { base, over } => emit_over(base, over, domain),
        MathNode::Under { base, under } => {
            format!(
                "\\underset{{{}}}{{{}}}",
                emit(under, domain),
                emit(base, domain)
            )
        }
        MathNode::UnderOver { base, under, over } => {
            // Definite sums and integrals express their limits this way.
            format!(
                "{}_{}^{}",
                emit(base, domain),
                script_group(&emit(under, domain)),
                script_group(&emit(over, domain))
            )
        }
        MathNode::Fenced {
            open,
            close,
            children,
        } => emit_fenced(open, close, children, domain),
        MathNode::Text(text) => format!("\\text{{{text}}}"),
        MathNode::Space => "\\,".to_string(),
        MathNode::Unknown(children) => join_children(children, domain),
    }
}

/// Emit a Root/Row: classify once, then join the converted children.
fn emit_group(children: &[MathNode], domain: Domain) -> String {
    if domain == Domain::Math && chemistry::is_chemical_formula(children) {
        let body = join_children(children, Domain::Chemistry);
        format!("\\ce{{{}}}", body.trim())
    } else {
        join_children(children, domain)
    }
}

fn emit_identifier(text: &str, domain: Domain) -> String {
    if tables::is_function_name(text) {
        format!("\\{text}")
    } else if domain == Domain::Chemistry {
        text.to_string()
    } else if let Some(greek) = tables::greek_command(text) {
        greek.to_string()
    } else {
        text.to_string()
    }
}

fn emit_operator(text: &str, domain: Domain) -> String {
    match domain {
        Domain::Math => tables::operator_command(text)
            .map(str::to_string)
            .unwrap_or_else(|| text.to_string()),
        Domain::Chemistry => {
            // Reaction arrows use mhchem's ASCII spelling; everything else
            // passes through, space-padded the way \ce input is written.
            let op = match text {
                "\u{2192}" | "\u{21D2}" => "->",
                "\u{2212}" => "-",
                other => other,
            };
            format!(" {op} ")
        }
    }
}

fn emit_over(base: &MathNode, over: &MathNode, domain: Domain) -> String {
    let base_tex = emit(base, domain);
    match over.leaf_text() {
        Some(mark) if tables::is_arrow_mark(mark) => format!("\\vec{{{base_tex}}}"),
        Some(mark) if tables::is_macron_mark(mark) => format!("\\overline{{{base_tex}}}"),
        Some(mark) if tables::is_caret_mark(mark) => format!("\\hat{{{base_tex}}}"),
        Some(mark) if tables::is_tilde_mark(mark) => format!("\\tilde{{{base_tex}}}"),
        _ => format!("\\overset{{{}}}{{{base_tex}}}", emit(over, domain)),
    }
}

fn emit_fenced(open: &str, close: &str, children: &[MathNode], domain: Domain) -> String {
    let content = join_children(children, domain);
    match (open, close) {
        ("(", ")") => format!("\\left({content}\\right)"),
        ("[", "]") => format!("\\left[{content}\\right]"),
        ("{", "}") => format!("\\left\\{{{content}\\right\\}}"),
        // Unrecognized pairs are emitted literally, without auto-sizing.
        _ => format!("{open}{content}{close}"),
    }
}

/// Join converted children, inserting a space only where a trailing
/// `\command` would otherwise fuse with a following alphanumeric
/// (`\times b`, not `\timesb`).
fn join_children(children: &[MathNode], domain: Domain) -> String {
    let mut out = String::new();
    for child in children {
        push_fragment(&mut out, &emit(child, domain));
    }
    out
}

fn push_fragment(out: &mut String, fragment: &str) {
    if fragment.is_empty() {
        return;
    }
    if ends_with_command(out) && fragment.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        out.push(' ');
    }
    out.push_str(fragment);
}

/// True when the string ends in `\letters`, i.e. an unclosed control word.
fn ends_with_command(out: &str) -> bool {
    let letters = out
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    letters > 0 && out.chars().rev().nth(letters) == Some('\\')
}

/// Scripts inside `\ce{…}` read as part of the formula token: drop the
/// padding that chemistry-mode operators introduce (`2 -` → `2-`).
fn despace(script: &str) -> String {
    script.replace(' ', "")
}

/// Wrap a script in braces unless it is a single alphanumeric character.
fn script_group(script: &str) -> String {
    let mut chars = script.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphanumeric() => script.to_string(),
        _ => format!("{{{script}}}"),
    }
}
