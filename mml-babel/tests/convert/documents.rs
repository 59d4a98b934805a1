//! Whole-document conversion through the extractor.

use mml_babel::{convert_document, extract_math_fragments};

#[test]
fn fragments_come_back_verbatim_and_in_order() {
    let doc = "One: <math><mi>a</mi></math>, two: <math display=\"inline\"><mi>b</mi></math>.";
    let fragments = extract_math_fragments(doc);
    assert_eq!(fragments.len(), 2);
    assert_eq!(fragments[0], "<math><mi>a</mi></math>");
    assert_eq!(fragments[1], "<math display=\"inline\"><mi>b</mi></math>");
}

#[test]
fn spans_are_replaced_with_dollar_wrapped_tex() {
    let doc = "Area: <math><mrow><mi>\u{03C0}</mi><msup><mi>r</mi><mn>2</mn></msup></mrow></math>!";
    assert_eq!(convert_document(doc), "Area: $\\pi r^2$!");
}

#[test]
fn duplicate_spans_substitute_one_for_one() {
    let doc = "<math><mi>x</mi></math>, <math><mi>x</mi></math>, <math><mi>y</mi></math>";
    assert_eq!(convert_document(doc), "$x$, $x$, $y$");
}

#[test]
fn surrounding_prose_survives_untouched() {
    let doc = "before <math><mfrac><mn>1</mn><mn>2</mn></mfrac></math> after";
    assert_eq!(convert_document(doc), "before $\\frac{1}{2}$ after");
}

#[test]
fn a_document_without_math_is_identity() {
    let doc = "<p>prose only</p>";
    assert_eq!(convert_document(doc), doc);
}

#[test]
fn malformed_span_converts_to_the_diagnostic_not_a_crash() {
    // The fragment is matched as a span but is not well-formed XML content;
    // the diagnostic lands inline and the rest of the document is intact.
    let doc = "ok <math><mi>x</mi><mi></math> done";
    let converted = convert_document(doc);
    assert!(converted.starts_with("ok $"));
    assert!(converted.ends_with("$ done"));
    assert!(converted.contains("MathML Parse Error"));
}
