//! Conversion scenarios from the golden corpus.
//!
//! These are the blessed end-to-end behaviors: MathML string in, exact TeX
//! string out. The suite-level tests exercise the same material through the
//! runner; here each scenario is pinned individually so a regression names
//! the construct that moved.

use insta::assert_snapshot;
use mml_babel::convert;

#[test]
fn nested_radicals_resolve_through_recursion() {
    let tex = convert("<msqrt><mrow><mi>a</mi><mo>+</mo><msqrt><mi>b</mi></msqrt></mrow></msqrt>");
    assert_eq!(tex, "\\sqrt{a+\\sqrt{b}}");
}

#[test]
fn simple_fraction() {
    assert_snapshot!(
        convert("<math><mfrac><mi>a</mi><mi>b</mi></mfrac></math>"),
        @r"\frac{a}{b}"
    );
}

#[test]
fn single_character_subscript_elides_braces() {
    let tex = convert("<math><msub><mi>x</mi><mn>1</mn></msub></math>");
    assert_eq!(tex, "x_1");
}

#[test]
fn multi_character_subscript_is_braced() {
    let tex = convert("<math><msub><mi>x</mi><mn>12</mn></msub></math>");
    assert_eq!(tex, "x_{12}");
}

#[test]
fn quadratic_formula_composite() {
    let mathml = "<math><mrow><mi>x</mi><mo>=</mo><mfrac>\
                  <mrow><mo>-</mo><mi>b</mi><mo>\u{00B1}</mo><msqrt><mrow>\
                  <msup><mi>b</mi><mn>2</mn></msup><mo>-</mo><mn>4</mn><mi>a</mi><mi>c</mi>\
                  </mrow></msqrt></mrow>\
                  <mrow><mn>2</mn><mi>a</mi></mrow>\
                  </mfrac></mrow></math>";
    assert_eq!(convert(mathml), "x=\\frac{-b\\pm\\sqrt{b^2-4ac}}{2a}");
}

#[test]
fn sulfuric_acid_wraps_in_the_chemistry_macro() {
    let mathml = "<math><mrow><msub><mi>H</mi><mn>2</mn></msub><mi>S</mi>\
                  <msub><mi>O</mi><mn>4</mn></msub></mrow></math>";
    assert_eq!(convert(mathml), "\\ce{H2SO4}");
}

#[test]
fn combustion_reaction_keeps_mhchem_spelling() {
    let mathml = "<math><mrow><mn>2</mn><msub><mi>H</mi><mn>2</mn></msub><mo>+</mo>\
                  <msub><mi>O</mi><mn>2</mn></msub><mo>\u{2192}</mo><mn>2</mn>\
                  <msub><mi>H</mi><mn>2</mn></msub><mi>O</mi></mrow></math>";
    assert_eq!(convert(mathml), "\\ce{2H2 + O2 -> 2H2O}");
}

#[test]
fn algebraic_row_never_uses_the_chemistry_macro() {
    let mathml = "<math><mrow><mi>x</mi><mo>+</mo><mi>y</mi></mrow></math>";
    let tex = convert(mathml);
    assert_eq!(tex, "x+y");
    assert!(!tex.contains("\\ce"));
}

#[test]
fn sum_with_underover_limits() {
    let mathml = "<math><munderover><mo>\u{2211}</mo><mrow><mi>i</mi><mo>=</mo><mn>1</mn></mrow>\
                  <mi>n</mi></munderover></math>";
    assert_eq!(convert(mathml), "\\sum_{i=1}^n");
}

#[test]
fn over_marks_select_their_accent_commands() {
    assert_eq!(
        convert("<math><mover><mi>v</mi><mo>\u{2192}</mo></mover></math>"),
        "\\vec{v}"
    );
    assert_eq!(
        convert("<math><mover><mi>x</mi><mo>\u{00AF}</mo></mover></math>"),
        "\\overline{x}"
    );
    assert_eq!(
        convert("<math><mover><mi>x</mi><mo>~</mo></mover></math>"),
        "\\tilde{x}"
    );
    assert_eq!(
        convert("<math><mover><mi>x</mi><mo>*</mo></mover></math>"),
        "\\overset{*}{x}"
    );
}

#[test]
fn fenced_groups_autosize_known_pairs_only() {
    assert_eq!(
        convert("<math><mfenced><mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow></mfenced></math>"),
        "\\left(a+b\\right)"
    );
    assert_eq!(
        convert("<math><mfenced open=\"{\" close=\"}\"><mi>x</mi></mfenced></math>"),
        "\\left\\{x\\right\\}"
    );
    assert_eq!(
        convert("<math><mfenced open=\"|\" close=\"|\"><mi>x</mi></mfenced></math>"),
        "|x|"
    );
}

#[test]
fn function_names_are_escaped_and_spaced() {
    assert_eq!(
        convert("<math><mrow><mi>sin</mi><mi>x</mi></mrow></math>"),
        "\\sin x"
    );
}

#[test]
fn greek_spellings_and_codepoints_both_map() {
    assert_eq!(
        convert("<math><mrow><mi>alpha</mi><mo>+</mo><mi>beta</mi></mrow></math>"),
        "\\alpha+\\beta"
    );
    assert_eq!(
        convert("<math><mrow><mn>2</mn><mi>\u{03C0}</mi><mi>r</mi></mrow></math>"),
        "2\\pi r"
    );
}

#[test]
fn unknown_elements_fail_open_and_keep_content() {
    assert_eq!(
        convert("<math><mstyle><mi>x</mi><mo>+</mo><mn>1</mn></mstyle></math>"),
        "x+1"
    );
}

#[test]
fn malformed_markup_yields_the_inline_diagnostic() {
    let tex = convert("<math><mi>x</math>");
    assert!(tex.starts_with("\\text{[MathML Parse Error:"));
    assert!(tex.ends_with("]}"));
}

#[test]
fn conversion_is_deterministic() {
    let mathml = "<math><mrow><mi>x</mi><mo>=</mo><mfrac><mn>1</mn><mi>n</mi></mfrac></mrow></math>";
    assert_eq!(convert(mathml), convert(mathml));
}

#[test]
fn empty_math_element_converts_to_the_empty_string() {
    assert_eq!(convert("<math></math>"), "");
}
