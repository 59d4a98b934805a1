//! Locating math fragments inside a surrounding document.
//!
//! The scanner works on raw text, not a parsed DOM: documents arriving here
//! are usually HTML-ish lesson content where only the `<math>` islands are
//! well-formed XML. Matching is nesting-aware so a (pathological) nested
//! `<math>` does not terminate the span early.

use crate::convert::convert;

/// Extract every `<math>…</math>` span from a document, verbatim and in
/// order of first appearance. An empty result is a normal outcome.
pub fn extract_math_fragments(document: &str) -> Vec<String> {
    let mut fragments = Vec::new();
    let mut search_from = 0;

    while let Some(span) = next_math_span(document, search_from) {
        fragments.push(document[span.0..span.1].to_string());
        search_from = span.1;
    }

    fragments
}

/// Convert a whole document, replacing each math span with `$<tex>$`.
///
/// Spans are consumed left-to-right: each extracted fragment replaces the
/// first occurrence of itself that has not been replaced yet, so duplicate
/// fragments substitute one-for-one instead of via a blanket global
/// replace. A document without math comes back unchanged.
pub fn convert_document(document: &str) -> String {
    let fragments = extract_math_fragments(document);
    if fragments.is_empty() {
        return document.to_string();
    }

    let mut output = String::with_capacity(document.len());
    let mut rest = document;
    for fragment in &fragments {
        let Some(pos) = rest.find(fragment.as_str()) else {
            continue;
        };
        output.push_str(&rest[..pos]);
        output.push('$');
        output.push_str(&convert(fragment));
        output.push('$');
        rest = &rest[pos + fragment.len()..];
    }
    output.push_str(rest);
    output
}

/// Byte range of the next `<math>` span at or after `from`, including the
/// closing tag. Handles self-closing `<math/>` and nested openings.
fn next_math_span(document: &str, from: usize) -> Option<(usize, usize)> {
    let start = find_math_open(document, from)?;
    let first_tag_end = tag_end(document, start)?;
    if document[start..first_tag_end].ends_with("/>") {
        return Some((start, first_tag_end));
    }

    let mut depth = 1usize;
    let mut cursor = first_tag_end;

    loop {
        let open = find_math_open(document, cursor);
        let close = document[cursor..].find("</math").map(|i| cursor + i);

        match (open, close) {
            (Some(o), Some(c)) if o < c => {
                // Self-closing openings do not deepen the nesting.
                let end = tag_end(document, o)?;
                if !document[o..end].ends_with("/>") {
                    depth += 1;
                }
                cursor = end;
            }
            (_, Some(c)) => {
                let end = tag_end(document, c)?;
                depth -= 1;
                if depth == 0 {
                    return Some((start, end));
                }
                cursor = end;
            }
            // An opening with no matching close: no complete span exists.
            _ => return None,
        }
    }
}

/// Position of the next `<math` opening that is a real tag boundary
/// (followed by whitespace, `>`, or `/`), not a longer element name.
fn find_math_open(document: &str, from: usize) -> Option<usize> {
    let mut search = from;
    while let Some(rel) = document[search..].find("<math") {
        let pos = search + rel;
        let after = document[pos + "<math".len()..].chars().next();
        match after {
            Some(c) if c == '>' || c == '/' || c.is_whitespace() => return Some(pos),
            _ => search = pos + "<math".len(),
        }
    }
    None
}

/// Byte offset just past the `>` that closes the tag starting at `tag_start`.
fn tag_end(document: &str, tag_start: usize) -> Option<usize> {
    document[tag_start..].find('>').map(|i| tag_start + i + 1)
}
