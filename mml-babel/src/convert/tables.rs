//! Fixed symbol tables used by the converter.
//!
//! These are closed sets: the validator's command allow-list is derived from
//! what can be emitted here, so growing a table means growing the allow-list
//! (there is a test pinning the two together).

/// TeX command for a special-character operator, math mode only.
///
/// Unmapped operators pass through unchanged.
pub fn operator_command(op: &str) -> Option<&'static str> {
    Some(match op {
        "\u{00D7}" => "\\times",           // ×
        "\u{00B7}" | "\u{22C5}" => "\\cdot", // · and the dot operator
        "\u{00F7}" => "\\div",             // ÷
        "\u{00B1}" => "\\pm",              // ±
        "\u{2213}" => "\\mp",              // ∓
        "\u{2264}" => "\\leq",             // ≤
        "\u{2265}" => "\\geq",             // ≥
        "\u{2260}" => "\\neq",             // ≠
        "\u{2248}" => "\\approx",          // ≈
        "\u{221E}" => "\\infty",           // ∞
        "\u{222B}" => "\\int",             // ∫
        "\u{2211}" => "\\sum",             // ∑
        "\u{220F}" => "\\prod",            // ∏
        "\u{221A}" => "\\sqrt",            // √
        "\u{2202}" => "\\partial",         // ∂
        "\u{2207}" => "\\nabla",           // ∇
        "\u{2208}" => "\\in",              // ∈
        "\u{2209}" => "\\notin",           // ∉
        "\u{2282}" => "\\subset",          // ⊂
        "\u{2283}" => "\\supset",          // ⊃
        "\u{222A}" => "\\cup",             // ∪
        "\u{2229}" => "\\cap",             // ∩
        "\u{2192}" => "\\rightarrow",      // →
        "\u{21D2}" => "\\Rightarrow",      // ⇒
        "\u{21D4}" => "\\Leftrightarrow",  // ⇔
        "\u{2212}" => "-",                 // minus sign → ASCII hyphen
        _ => return None,
    })
}

/// Function names that convert to their escaped TeX operator form.
pub const FUNCTION_NAMES: &[&str] = &[
    "arcsin", "arccos", "arctan", "sinh", "cosh", "tanh", "sin", "cos", "tan", "cot", "sec",
    "csc", "log", "ln", "exp", "lim", "max", "min",
];

pub fn is_function_name(name: &str) -> bool {
    FUNCTION_NAMES.contains(&name)
}

/// TeX command for a Greek letter, given either its spelled-out name
/// (`"alpha"`) or the literal codepoint (`"α"`).
///
/// Only letters with a TeX command of their own are mapped; `omicron` has
/// none and falls through to literal output like any other identifier.
pub fn greek_command(identifier: &str) -> Option<&'static str> {
    Some(match identifier {
        "alpha" | "α" => "\\alpha",
        "beta" | "β" => "\\beta",
        "gamma" | "γ" => "\\gamma",
        "delta" | "δ" => "\\delta",
        "epsilon" | "ε" => "\\epsilon",
        "zeta" | "ζ" => "\\zeta",
        "eta" | "η" => "\\eta",
        "theta" | "θ" => "\\theta",
        "iota" | "ι" => "\\iota",
        "kappa" | "κ" => "\\kappa",
        "lambda" | "λ" => "\\lambda",
        "mu" | "μ" => "\\mu",
        "nu" | "ν" => "\\nu",
        "xi" | "ξ" => "\\xi",
        "pi" | "π" => "\\pi",
        "rho" | "ρ" => "\\rho",
        "sigma" | "σ" => "\\sigma",
        "tau" | "τ" => "\\tau",
        "upsilon" | "υ" => "\\upsilon",
        "phi" | "φ" => "\\phi",
        "chi" | "χ" => "\\chi",
        "psi" | "ψ" => "\\psi",
        "omega" | "ω" => "\\omega",
        "Gamma" | "Γ" => "\\Gamma",
        "Delta" | "Δ" => "\\Delta",
        "Theta" | "Θ" => "\\Theta",
        "Lambda" | "Λ" => "\\Lambda",
        "Xi" | "Ξ" => "\\Xi",
        "Pi" | "Π" => "\\Pi",
        "Sigma" | "Σ" => "\\Sigma",
        "Upsilon" | "Υ" => "\\Upsilon",
        "Phi" | "Φ" => "\\Phi",
        "Psi" | "Ψ" => "\\Psi",
        "Omega" | "Ω" => "\\Omega",
        _ => return None,
    })
}

/// Accent marks recognized on `<mover>` bases.
pub fn is_arrow_mark(mark: &str) -> bool {
    matches!(mark, "\u{2192}" | "\u{21C0}" | "\u{20D7}")
}

pub fn is_macron_mark(mark: &str) -> bool {
    matches!(mark, "\u{00AF}" | "\u{203E}" | "\u{02C9}")
}

pub fn is_caret_mark(mark: &str) -> bool {
    matches!(mark, "^" | "\u{02C6}")
}

pub fn is_tilde_mark(mark: &str) -> bool {
    matches!(mark, "~" | "\u{02DC}" | "\u{223C}")
}

/// Every command the tables above can emit. The validator's allow-list
/// builds on this so table growth cannot silently produce "unknown command"
/// failures.
pub fn emittable_commands() -> Vec<String> {
    let symbol_commands = [
        "\\times",
        "\\cdot",
        "\\div",
        "\\pm",
        "\\mp",
        "\\leq",
        "\\geq",
        "\\neq",
        "\\approx",
        "\\infty",
        "\\int",
        "\\sum",
        "\\prod",
        "\\sqrt",
        "\\partial",
        "\\nabla",
        "\\in",
        "\\notin",
        "\\subset",
        "\\supset",
        "\\cup",
        "\\cap",
        "\\rightarrow",
        "\\Rightarrow",
        "\\Leftrightarrow",
        "\\alpha",
        "\\beta",
        "\\gamma",
        "\\delta",
        "\\epsilon",
        "\\zeta",
        "\\eta",
        "\\theta",
        "\\iota",
        "\\kappa",
        "\\lambda",
        "\\mu",
        "\\nu",
        "\\xi",
        "\\pi",
        "\\rho",
        "\\sigma",
        "\\tau",
        "\\upsilon",
        "\\phi",
        "\\chi",
        "\\psi",
        "\\omega",
        "\\Gamma",
        "\\Delta",
        "\\Theta",
        "\\Lambda",
        "\\Xi",
        "\\Pi",
        "\\Sigma",
        "\\Upsilon",
        "\\Phi",
        "\\Psi",
        "\\Omega",
    ];
    let mut commands: Vec<String> = symbol_commands.iter().map(|s| s.to_string()).collect();
    commands.extend(FUNCTION_NAMES.iter().map(|name| format!("\\{name}")));
    commands
}
