//! The built-in regression corpus.
//!
//! Expected output strings are the blessed converter behavior, character for
//! character. When a converter change shifts one of them deliberately,
//! update the expectation in the same change; the suite exists precisely so
//! that an accidental shift fails CI.

use super::TestCase;

fn case(id: &str, category: &str, description: &str, mathml: &str, expected_tex: &str) -> TestCase {
    TestCase {
        id: id.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        mathml: mathml.to_string(),
        expected_tex: expected_tex.to_string(),
        mathspeak: None,
    }
}

fn spoken_case(
    id: &str,
    category: &str,
    description: &str,
    mathml: &str,
    expected_tex: &str,
    mathspeak: &str,
) -> TestCase {
    TestCase {
        mathspeak: Some(mathspeak.to_string()),
        ..case(id, category, description, mathml, expected_tex)
    }
}

/// Every corpus entry, grouped by category.
pub fn builtin_corpus() -> Vec<TestCase> {
    vec![
        // -- arithmetic ------------------------------------------------------
        spoken_case(
            "arith-frac-basic",
            "arithmetic",
            "Plain two-identifier fraction",
            "<math><mfrac><mi>a</mi><mi>b</mi></mfrac></math>",
            "\\frac{a}{b}",
            "StartFraction a Over b EndFraction",
        ),
        case(
            "arith-frac-nested",
            "arithmetic",
            "Fraction whose numerator is itself a fraction",
            "<math><mfrac><mfrac><mi>a</mi><mi>b</mi></mfrac><mn>2</mn></mfrac></math>",
            "\\frac{\\frac{a}{b}}{2}",
        ),
        case(
            "arith-operators",
            "arithmetic",
            "Special-character operators map to commands",
            "<math><mrow><mi>a</mi><mo>\u{00D7}</mo><mi>b</mi><mo>\u{2264}</mo><mi>c</mi></mrow></math>",
            "a\\times b\\leq c",
        ),
        case(
            "arith-scientific",
            "arithmetic",
            "Scientific notation with a center dot",
            "<math><mrow><mn>3</mn><mo>\u{00B7}</mo><msup><mn>10</mn><mn>8</mn></msup></mrow></math>",
            "3\\cdot 10^8",
        ),
        case(
            "arith-approx",
            "arithmetic",
            "Approximation with a Greek codepoint identifier",
            "<math><mrow><mi>\u{03C0}</mi><mo>\u{2248}</mo><mn>3.14</mn></mrow></math>",
            "\\pi\\approx 3.14",
        ),
        // -- scripts ---------------------------------------------------------
        spoken_case(
            "script-sub-single",
            "scripts",
            "Single-character subscript keeps no extra braces",
            "<math><msub><mi>x</mi><mn>1</mn></msub></math>",
            "x_1",
            "x sub 1",
        ),
        case(
            "script-sub-multi",
            "scripts",
            "Multi-character subscript is braced",
            "<math><msub><mi>x</mi><mn>12</mn></msub></math>",
            "x_{12}",
        ),
        case(
            "script-sup-square",
            "scripts",
            "Single-character superscript keeps no extra braces",
            "<math><msup><mi>b</mi><mn>2</mn></msup></math>",
            "b^2",
        ),
        case(
            "script-subsup",
            "scripts",
            "Combined sub- and superscript, elision applied independently",
            "<math><msubsup><mi>x</mi><mn>1</mn><mn>2</mn></msubsup></math>",
            "x_1^2",
        ),
        case(
            "script-sup-negative",
            "scripts",
            "Composite exponent is braced",
            "<math><msup><mi>e</mi><mrow><mo>-</mo><mi>x</mi></mrow></msup></math>",
            "e^{-x}",
        ),
        // -- radicals --------------------------------------------------------
        case(
            "rad-sqrt-basic",
            "radicals",
            "Square root of one identifier",
            "<math><msqrt><mi>x</mi></msqrt></math>",
            "\\sqrt{x}",
        ),
        spoken_case(
            "rad-sqrt-nested",
            "radicals",
            "Nested radicals resolve through recursion",
            "<msqrt><mrow><mi>a</mi><mo>+</mo><msqrt><mi>b</mi></msqrt></mrow></msqrt>",
            "\\sqrt{a+\\sqrt{b}}",
            "StartRoot a plus StartRoot b EndRoot EndRoot",
        ),
        case(
            "rad-cube-root",
            "radicals",
            "Indexed root",
            "<math><mroot><mi>x</mi><mn>3</mn></mroot></math>",
            "\\sqrt[3]{x}",
        ),
        // -- algebra ---------------------------------------------------------
        spoken_case(
            "alg-quadratic-formula",
            "algebra",
            "Quadratic formula composite fragment",
            "<math><mrow><mi>x</mi><mo>=</mo><mfrac>\
             <mrow><mo>-</mo><mi>b</mi><mo>\u{00B1}</mo><msqrt><mrow>\
             <msup><mi>b</mi><mn>2</mn></msup><mo>-</mo><mn>4</mn><mi>a</mi><mi>c</mi>\
             </mrow></msqrt></mrow>\
             <mrow><mn>2</mn><mi>a</mi></mrow>\
             </mfrac></mrow></math>",
            "x=\\frac{-b\\pm\\sqrt{b^2-4ac}}{2a}",
            "x equals StartFraction negative b plus or minus StartRoot b squared minus 4 a c \
             EndRoot Over 2 a EndFraction",
        ),
        case(
            "alg-grouped-sum",
            "algebra",
            "Default mfenced pair auto-sizes",
            "<math><mfenced><mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow></mfenced></math>",
            "\\left(a+b\\right)",
        ),
        case(
            "alg-absolute-value",
            "algebra",
            "Unrecognized delimiter pair is emitted literally",
            "<math><mfenced open=\"|\" close=\"|\"><mi>x</mi></mfenced></math>",
            "|x|",
        ),
        // -- calculus --------------------------------------------------------
        case(
            "calc-sum-limits",
            "calculus",
            "Sum limits written as under/over scripts",
            "<math><munderover><mo>\u{2211}</mo><mrow><mi>i</mi><mo>=</mo><mn>1</mn></mrow>\
             <mi>n</mi></munderover></math>",
            "\\sum_{i=1}^n",
        ),
        case(
            "calc-definite-integral",
            "calculus",
            "Definite integral with an infinite bound",
            "<math><mrow><munderover><mo>\u{222B}</mo><mn>0</mn><mo>\u{221E}</mo></munderover>\
             <msup><mi>x</mi><mn>2</mn></msup><mi>d</mi><mi>x</mi></mrow></math>",
            "\\int_0^{\\infty}x^2dx",
        ),
        case(
            "calc-limit",
            "calculus",
            "Limit with an under-script approach",
            "<math><mrow><munder><mi>lim</mi><mrow><mi>x</mi><mo>\u{2192}</mo><mn>0</mn></mrow>\
             </munder><mi>f</mi></mrow></math>",
            "\\underset{x\\rightarrow 0}{\\lim}f",
        ),
        // -- functions -------------------------------------------------------
        case(
            "fn-sin",
            "functions",
            "Known function names are escaped",
            "<math><mrow><mi>sin</mi><mi>x</mi></mrow></math>",
            "\\sin x",
        ),
        case(
            "fn-log",
            "functions",
            "Logarithm with a subscript base",
            "<math><mrow><msub><mi>log</mi><mn>2</mn></msub><mo>(</mo><mi>n</mi><mo>)</mo></mrow></math>",
            "\\log_2(n)",
        ),
        // -- greek -----------------------------------------------------------
        case(
            "greek-spelled",
            "greek",
            "Spelled-out Greek letter names",
            "<math><mrow><mi>alpha</mi><mo>+</mo><mi>beta</mi></mrow></math>",
            "\\alpha+\\beta",
        ),
        case(
            "greek-circumference",
            "greek",
            "Greek codepoint with following identifier",
            "<math><mrow><mn>2</mn><mi>\u{03C0}</mi><mi>r</mi></mrow></math>",
            "2\\pi r",
        ),
        // -- accents ---------------------------------------------------------
        case(
            "accent-vector",
            "accents",
            "Right arrow over a base means a vector",
            "<math><mover><mi>v</mi><mo>\u{2192}</mo></mover></math>",
            "\\vec{v}",
        ),
        case(
            "accent-mean",
            "accents",
            "Macron over a base means an overline",
            "<math><mover><mi>x</mi><mo>\u{00AF}</mo></mover></math>",
            "\\overline{x}",
        ),
        case(
            "accent-estimate",
            "accents",
            "Caret over a base means a hat",
            "<math><mover><mi>y</mi><mo>^</mo></mover></math>",
            "\\hat{y}",
        ),
        case(
            "accent-generic",
            "accents",
            "Unrecognized marks fall back to overset",
            "<math><mover><mi>x</mi><mo>*</mo></mover></math>",
            "\\overset{*}{x}",
        ),
        // -- text ------------------------------------------------------------
        case(
            "text-label",
            "text",
            "Text runs stay in text mode",
            "<math><mrow><mtext>area</mtext><mo>=</mo><msup><mi>r</mi><mn>2</mn></msup></mrow></math>",
            "\\text{area}=r^2",
        ),
        case(
            "text-thin-space",
            "text",
            "Explicit spacing element",
            "<math><mrow><mi>a</mi><mspace width=\"0.3em\"/><mi>b</mi></mrow></math>",
            "a\\,b",
        ),
        // -- chemistry -------------------------------------------------------
        spoken_case(
            "chem-water",
            "chemistry",
            "Subscript counts collapse inside a formula",
            "<math><mrow><msub><mi>H</mi><mn>2</mn></msub><mi>O</mi></mrow></math>",
            "\\ce{H2O}",
            "upper H 2 upper O",
        ),
        spoken_case(
            "chem-sulfuric-acid",
            "chemistry",
            "Multi-element formula wraps in the chemistry macro",
            "<math><mrow><msub><mi>H</mi><mn>2</mn></msub><mi>S</mi>\
             <msub><mi>O</mi><mn>4</mn></msub></mrow></math>",
            "\\ce{H2SO4}",
            "upper H 2 upper S upper O 4",
        ),
        case(
            "chem-combustion",
            "chemistry",
            "Reaction with coefficients and an arrow",
            "<math><mrow><mn>2</mn><msub><mi>H</mi><mn>2</mn></msub><mo>+</mo>\
             <msub><mi>O</mi><mn>2</mn></msub><mo>\u{2192}</mo><mn>2</mn>\
             <msub><mi>H</mi><mn>2</mn></msub><mi>O</mi></mrow></math>",
            "\\ce{2H2 + O2 -> 2H2O}",
        ),
        case(
            "chem-sulfate-ion",
            "chemistry",
            "Ionic charge keeps mhchem's caret form",
            "<math><mrow><msubsup><mi>SO</mi><mn>4</mn><mrow><mn>2</mn><mo>-</mo></mrow>\
             </msubsup></mrow></math>",
            "\\ce{SO4^2-}",
        ),
        // -- fallback --------------------------------------------------------
        case(
            "fallback-unknown-element",
            "fallback",
            "Unsupported elements convert their children",
            "<math><mstyle><mi>x</mi><mo>+</mo><mn>1</mn></mstyle></math>",
            "x+1",
        ),
        case(
            "fallback-wrong-arity",
            "fallback",
            "Wrong-arity mfrac degrades to concatenation",
            "<math><mfrac><mi>a</mi><mi>b</mi><mi>c</mi></mfrac></math>",
            "abc",
        ),
    ]
}
