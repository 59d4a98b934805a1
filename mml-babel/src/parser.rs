//! MathML parsing (XML source → [`MathNode`] tree)
//!
//! Built on `roxmltree`, which handles namespaces and character references
//! for us; tag dispatch only looks at the local element name, so prefixed
//! documents (`<m:math>`) parse the same as unprefixed ones.
//!
//! Arity errors are not fatal: an element with the wrong number of children
//! for its tag parses to [`MathNode::Unknown`] and keeps the children, so a
//! later conversion pass can still emit their content.

use crate::error::ConvertError;
use crate::node::MathNode;
use roxmltree::{Node, NodeType};

/// Parse a MathML fragment into a node tree.
///
/// The fragment may be a full `<math>` element or a bare inner element such
/// as `<msqrt>…</msqrt>`; both come back wrapped in [`MathNode::Root`].
pub fn parse_mathml(source: &str) -> Result<MathNode, ConvertError> {
    let doc = roxmltree::Document::parse(source)
        .map_err(|e| ConvertError::ParseError(format!("XML parsing error: {e}")))?;

    let root = doc.root_element();
    if root.tag_name().name() == "math" {
        Ok(MathNode::Root(parse_children(root)))
    } else {
        Ok(MathNode::Root(vec![parse_element(root)]))
    }
}

fn parse_children(node: Node) -> Vec<MathNode> {
    node.children()
        .filter(|n| n.node_type() == NodeType::Element)
        .map(parse_element)
        .collect()
}

fn parse_element(node: Node) -> MathNode {
    match node.tag_name().name() {
        "mrow" => MathNode::Row(parse_children(node)),
        "mi" => MathNode::Identifier(leaf_text(node)),
        "mn" => MathNode::Number(leaf_text(node)),
        "mo" => MathNode::Operator(leaf_text(node)),
        "mtext" => MathNode::Text(leaf_text(node)),
        "mspace" => MathNode::Space,
        "msup" => match two_children(node) {
            Some((base, sup)) => MathNode::Superscript {
                base: Box::new(base),
                sup: Box::new(sup),
            },
            None => MathNode::Unknown(parse_children(node)),
        },
        "msub" => match two_children(node) {
            Some((base, sub)) => MathNode::Subscript {
                base: Box::new(base),
                sub: Box::new(sub),
            },
            None => MathNode::Unknown(parse_children(node)),
        },
        "msubsup" => match three_children(node) {
            Some((base, sub, sup)) => MathNode::SubSup {
                base: Box::new(base),
                sub: Box::new(sub),
                sup: Box::new(sup),
            },
            None => MathNode::Unknown(parse_children(node)),
        },
        "mfrac" => match two_children(node) {
            Some((num, den)) => MathNode::Fraction {
                num: Box::new(num),
                den: Box::new(den),
            },
            None => MathNode::Unknown(parse_children(node)),
        },
        "msqrt" => {
            // <msqrt> wraps its children in an implied row.
            let mut children = parse_children(node);
            let content = if children.len() == 1 {
                children.remove(0)
            } else {
                MathNode::Row(children)
            };
            MathNode::Sqrt(Box::new(content))
        }
        "mroot" => match two_children(node) {
            Some((radicand, index)) => MathNode::NthRoot {
                radicand: Box::new(radicand),
                index: Box::new(index),
            },
            None => MathNode::Unknown(parse_children(node)),
        },
        "mover" => match two_children(node) {
            Some((base, over)) => MathNode::Over {
                base: Box::new(base),
                over: Box::new(over),
            },
            None => MathNode::Unknown(parse_children(node)),
        },
        "munder" => match two_children(node) {
            Some((base, under)) => MathNode::Under {
                base: Box::new(base),
                under: Box::new(under),
            },
            None => MathNode::Unknown(parse_children(node)),
        },
        "munderover" => match three_children(node) {
            Some((base, under, over)) => MathNode::UnderOver {
                base: Box::new(base),
                under: Box::new(under),
                over: Box::new(over),
            },
            None => MathNode::Unknown(parse_children(node)),
        },
        "mfenced" => MathNode::Fenced {
            open: node.attribute("open").unwrap_or("(").to_string(),
            close: node.attribute("close").unwrap_or(")").to_string(),
            children: parse_children(node),
        },
        "semantics" => {
            // The first child is the presentation tree; <annotation> children
            // carry parallel encodings that must not be emitted twice.
            node.children()
                .find(|n| n.node_type() == NodeType::Element)
                .map(parse_element)
                .unwrap_or(MathNode::Unknown(Vec::new()))
        }
        "annotation" | "annotation-xml" => MathNode::Unknown(Vec::new()),
        _ => MathNode::Unknown(parse_children(node)),
    }
}

/// Direct text content of a token element, whitespace-trimmed.
fn leaf_text(node: Node) -> String {
    node.text().unwrap_or("").trim().to_string()
}

fn two_children(node: Node) -> Option<(MathNode, MathNode)> {
    let children: [MathNode; 2] = parse_children(node).try_into().ok()?;
    let [first, second] = children;
    Some((first, second))
}

fn three_children(node: Node) -> Option<(MathNode, MathNode, MathNode)> {
    let children: [MathNode; 3] = parse_children(node).try_into().ok()?;
    let [first, second, third] = children;
    Some((first, second, third))
}
