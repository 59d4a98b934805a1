//! Validator behavior: syntax invariants, golden comparisons, degradation.

use mml_babel::{svg_content_hash, ValidationLimits, Validator};

fn scratch_validator() -> Validator {
    // Points at a path that never exists: golden-dependent checks skip.
    Validator::new("/nonexistent/golden.json")
}

#[test]
fn well_formed_tex_passes() {
    let validator = scratch_validator();
    let result = validator.validate(
        "q-ok",
        "<math><mfrac><mi>a</mi><mi>b</mi></mfrac></math>",
        "\\frac{a}{b}",
        None,
        None,
    );
    assert!(result.passed);
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
    assert_eq!(result.metrics.nesting_depth, 1);
    assert_eq!(result.metrics.tex_length, 11);
}

#[test]
fn unbalanced_braces_are_an_error() {
    let validator = scratch_validator();

    let unclosed = validator.validate("q", "<math/>", "\\frac{a}{b", None, None);
    assert!(!unclosed.passed);
    assert!(unclosed.errors.iter().any(|e| e == "unbalanced braces"));

    let negative = validator.validate("q", "<math/>", "a}b{", None, None);
    assert!(!negative.passed);
    assert!(negative.errors.iter().any(|e| e == "unbalanced braces"));
}

#[test]
fn escaped_braces_do_not_count_toward_balance() {
    let validator = scratch_validator();
    let result = validator.validate("q", "<math/>", "\\left\\{x\\right\\}", None, None);
    assert!(result.passed, "errors: {:?}", result.errors);
}

#[test]
fn unknown_commands_are_flagged_and_capped_at_five() {
    let validator = scratch_validator();
    let tex = "\\aaa\\bbb\\ccc\\ddd\\eee\\fff\\frac{1}{2}";
    let result = validator.validate("q", "<math/>", tex, None, None);
    assert!(!result.passed);

    let unknown_error = result
        .errors
        .iter()
        .find(|e| e.contains("unknown TeX commands"))
        .expect("expected an unknown-command error");
    for name in ["aaa", "bbb", "ccc", "ddd", "eee"] {
        assert!(unknown_error.contains(name));
    }
    // Capped: the sixth offender is not listed.
    assert!(!unknown_error.contains("fff"));
    // The allow-listed command is not an offender.
    assert!(!unknown_error.contains("frac"));
}

#[test]
fn chemistry_macro_is_allowlisted() {
    let validator = scratch_validator();
    let result = validator.validate("q", "<math/>", "\\ce{H2O}", None, None);
    assert!(result.passed, "errors: {:?}", result.errors);
}

#[test]
fn empty_group_is_an_error() {
    let validator = scratch_validator();
    let result = validator.validate("q", "<math/>", "x^{}", None, None);
    assert!(!result.passed);
    assert!(result.errors.iter().any(|e| e == "empty group"));
}

#[test]
fn deep_nesting_is_a_warning_not_an_error() {
    let validator = scratch_validator();
    let tex = format!("{}x{}", "{".repeat(11), "}".repeat(11));
    let result = validator.validate("q", "<math/>", &tex, None, None);
    assert!(result.passed);
    assert_eq!(result.metrics.nesting_depth, 11);
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("brace nesting depth 11")));
}

#[test]
fn oversized_output_is_a_warning_not_an_error() {
    let validator = scratch_validator();
    let tex = "x".repeat(5001);
    let result = validator.validate("q", "<math/>", &tex, None, None);
    assert!(result.passed);
    assert!(result.warnings.iter().any(|w| w.contains("output length")));
}

#[test]
fn custom_limits_are_respected() {
    let validator = Validator::with_limits(
        "/nonexistent/golden.json",
        ValidationLimits {
            mathspeak_error_threshold: 0.90,
            nesting_warn_depth: 1,
            length_warn_chars: 5,
        },
    );
    let result = validator.validate("q", "<math/>", "\\frac{a}{\\sqrt{b}}", None, None);
    assert!(result.passed);
    assert_eq!(result.warnings.len(), 2);
}

#[test]
fn golden_svg_hash_mismatch_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let golden_path = dir.path().join("golden.json");

    let mut validator = Validator::new(&golden_path);
    validator
        .save_golden_entry(
            "q-svg",
            "<math><mi>x</mi></math>",
            "x",
            Some(svg_content_hash("<svg>blessed render</svg>")),
            None,
        )
        .unwrap();

    let matching = validator.validate(
        "q-svg",
        "<math><mi>x</mi></math>",
        "x",
        Some("<svg>blessed render</svg>"),
        None,
    );
    assert!(matching.passed, "errors: {:?}", matching.errors);

    let drifted = validator.validate(
        "q-svg",
        "<math><mi>x</mi></math>",
        "x",
        Some("<svg>different render</svg>"),
        None,
    );
    assert!(!drifted.passed);
    assert!(drifted.errors.iter().any(|e| e == "SVG layout mismatch"));
    assert!(drifted.metrics.svg_hash.is_some());
}

#[test]
fn mathspeak_drift_warns_and_mismatch_fails() {
    let dir = tempfile::tempdir().unwrap();
    let golden_path = dir.path().join("golden.json");

    let mut validator = Validator::new(&golden_path);
    validator
        .save_golden_entry(
            "q-speak",
            "<math><mi>x</mi></math>",
            "x",
            None,
            Some("StartFraction a Over b EndFraction".to_string()),
        )
        .unwrap();

    let identical = validator.validate(
        "q-speak",
        "<math><mi>x</mi></math>",
        "x",
        None,
        Some("StartFraction a Over b EndFraction"),
    );
    assert!(identical.passed);
    assert!(identical.warnings.is_empty());
    assert_eq!(identical.metrics.mathspeak_similarity, Some(1.0));

    // One character off: similar enough to pass, noisy enough to warn.
    let drifted = validator.validate(
        "q-speak",
        "<math><mi>x</mi></math>",
        "x",
        None,
        Some("StartFraction a over b EndFraction"),
    );
    assert!(drifted.passed);
    assert!(drifted.warnings.iter().any(|w| w.contains("MathSpeak drift")));

    let mismatched = validator.validate(
        "q-speak",
        "<math><mi>x</mi></math>",
        "x",
        None,
        Some("something else entirely"),
    );
    assert!(!mismatched.passed);
    assert!(mismatched
        .errors
        .iter()
        .any(|e| e.contains("MathSpeak mismatch")));
}

#[test]
fn missing_golden_store_skips_golden_checks() {
    let validator = scratch_validator();
    let result = validator.validate(
        "q-unknown",
        "<math><mi>x</mi></math>",
        "x",
        Some("<svg>anything</svg>"),
        Some("any speech"),
    );
    assert!(result.passed, "errors: {:?}", result.errors);
    // The hash is still measured; there is just nothing to compare against.
    assert!(result.metrics.svg_hash.is_some());
    assert_eq!(result.metrics.mathspeak_similarity, None);
}

#[test]
fn save_to_an_unwritable_path_is_a_store_error() {
    let mut validator = Validator::new("/nonexistent/dir/golden.json");
    let result = validator.save_golden_entry("q", "<math/>", "x", None, None);
    assert!(result.is_err());
}
