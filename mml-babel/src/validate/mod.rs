//! Conversion-output validation against the golden set.
//!
//! The validator never throws for data-shaped problems: everything it finds
//! lands in the returned [`ValidationResult`] as an error (fails the case)
//! or a warning (recorded, never fails the case). Golden-dependent checks
//! are simply skipped when no golden data is available — a missing or
//! unreadable store must not fail a CI run that never blessed anything.

pub mod golden;
pub mod similarity;

use crate::error::ConvertError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::path::Path;

pub use golden::{GoldenEntry, GoldenStore};
pub use similarity::normalized_similarity;

/// Thresholds for the warning-level checks; see `mml-config` for the
/// user-facing knobs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationLimits {
    /// MathSpeak similarity below this is an error (at or above, up to
    /// but excluding 1.0, it is a warning).
    pub mathspeak_error_threshold: f64,
    /// Brace-nesting depth beyond this is a warning.
    pub nesting_warn_depth: usize,
    /// Output length (chars) beyond this is a warning.
    pub length_warn_chars: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        ValidationLimits {
            mathspeak_error_threshold: 0.90,
            nesting_warn_depth: 10,
            length_warn_chars: 5000,
        }
    }
}

/// Measurements taken during validation, kept regardless of pass/fail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationMetrics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub svg_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mathspeak_similarity: Option<f64>,
    pub nesting_depth: usize,
    pub tex_length: usize,
}

/// Outcome of validating one conversion. Owned by the caller; the
/// regression suite aggregates a list of these.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub question_id: String,
    pub passed: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub metrics: ValidationMetrics,
}

/// Content hash of a rendered SVG, used to detect unintended layout drift.
pub fn svg_content_hash(rendered_svg: &str) -> String {
    blake3::hash(rendered_svg.as_bytes()).to_hex().to_string()
}

/// Compares conversion results against golden reference entries and checks
/// TeX syntax invariants.
pub struct Validator {
    golden: GoldenStore,
    limits: ValidationLimits,
}

impl Validator {
    /// Build a validator over the golden set at `golden_path`, loading it
    /// once. Load failures degrade to an empty store.
    pub fn new(golden_path: impl AsRef<Path>) -> Self {
        Self::with_limits(golden_path, ValidationLimits::default())
    }

    pub fn with_limits(golden_path: impl AsRef<Path>, limits: ValidationLimits) -> Self {
        Validator {
            golden: GoldenStore::load(golden_path),
            limits,
        }
    }

    pub fn golden(&self) -> &GoldenStore {
        &self.golden
    }

    /// Validate one conversion result.
    ///
    /// `rendered_svg` and `mathspeak` come from external collaborators and
    /// are optional; the corresponding golden comparisons only run when
    /// both the input and a golden reference value are present. The source
    /// MathML is accepted for interface symmetry with
    /// [`Validator::save_golden_entry`] but plays no part in the checks.
    pub fn validate(
        &self,
        question_id: &str,
        _original_mathml: &str,
        converted_tex: &str,
        rendered_svg: Option<&str>,
        mathspeak: Option<&str>,
    ) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let scan = scan_braces(converted_tex);
        let mut metrics = ValidationMetrics {
            svg_hash: None,
            mathspeak_similarity: None,
            nesting_depth: scan.max_depth,
            tex_length: converted_tex.chars().count(),
        };

        let golden_entry = self.golden.get(question_id);

        if let Some(svg) = rendered_svg {
            let hash = svg_content_hash(svg);
            if let Some(expected) = golden_entry.and_then(|entry| entry.svg_hash.as_deref()) {
                if expected != hash {
                    errors.push("SVG layout mismatch".to_string());
                }
            }
            metrics.svg_hash = Some(hash);
        }

        if let Some(speech) = mathspeak {
            if let Some(reference) = golden_entry.and_then(|entry| entry.mathspeak.as_deref()) {
                let similarity = normalized_similarity(reference, speech);
                metrics.mathspeak_similarity = Some(similarity);
                if similarity < self.limits.mathspeak_error_threshold {
                    errors.push(format!("MathSpeak mismatch (similarity {similarity:.2})"));
                } else if similarity < 1.0 {
                    warnings.push(format!("MathSpeak drift (similarity {similarity:.2})"));
                }
            }
        }

        if scan.went_negative || scan.final_depth != 0 {
            errors.push("unbalanced braces".to_string());
        }

        let unknown = unknown_commands(converted_tex);
        if !unknown.is_empty() {
            let shown: Vec<&str> = unknown.iter().take(5).map(|s| s.as_str()).collect();
            errors.push(format!("unknown TeX commands: \\{}", shown.join(", \\")));
        }

        if converted_tex.contains("{}") {
            errors.push("empty group".to_string());
        }

        if scan.max_depth > self.limits.nesting_warn_depth {
            warnings.push(format!(
                "brace nesting depth {} exceeds {}",
                scan.max_depth, self.limits.nesting_warn_depth
            ));
        }
        if metrics.tex_length > self.limits.length_warn_chars {
            warnings.push(format!(
                "output length {} exceeds {} characters",
                metrics.tex_length, self.limits.length_warn_chars
            ));
        }

        ValidationResult {
            question_id: question_id.to_string(),
            passed: errors.is_empty(),
            errors,
            warnings,
            metrics,
        }
    }

    /// Bless a conversion: overwrite (or create) the golden entry for
    /// `question_id` and persist the whole store. The only mutating
    /// operation on the validator.
    pub fn save_golden_entry(
        &mut self,
        question_id: &str,
        original_mathml: &str,
        converted_tex: &str,
        svg_hash: Option<String>,
        mathspeak: Option<String>,
    ) -> Result<(), ConvertError> {
        self.golden.upsert(
            question_id,
            GoldenEntry {
                original_mathml: original_mathml.to_string(),
                converted_tex: converted_tex.to_string(),
                svg_hash,
                mathspeak,
            },
        )
    }
}

struct BraceScan {
    final_depth: i64,
    max_depth: usize,
    went_negative: bool,
}

/// Escape-aware brace scan: `\`-escaped characters are skipped, `{`
/// increments, `}` decrements.
fn scan_braces(tex: &str) -> BraceScan {
    let mut depth: i64 = 0;
    let mut max_depth: i64 = 0;
    let mut went_negative = false;

    let mut chars = tex.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '{' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            '}' => {
                depth -= 1;
                if depth < 0 {
                    went_negative = true;
                }
            }
            _ => {}
        }
    }

    BraceScan {
        final_depth: depth,
        max_depth: max_depth.max(0) as usize,
        went_negative,
    }
}

static COMMAND_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\([a-zA-Z]+)").expect("command pattern compiles"));

/// Commands the converter is allowed to emit: structural commands plus
/// everything the symbol tables can produce.
static COMMAND_ALLOWLIST: Lazy<HashSet<String>> = Lazy::new(|| {
    let mut allowed: HashSet<String> = [
        "frac", "sqrt", "text", "ce", "left", "right", "vec", "overline", "hat", "tilde",
        "overset", "underset",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    for command in crate::convert::tables::emittable_commands() {
        allowed.insert(command.trim_start_matches('\\').to_string());
    }
    allowed
});

/// Every `\word` token not on the allow-list, deduplicated, in order of
/// first appearance.
fn unknown_commands(tex: &str) -> Vec<String> {
    let mut unknown: Vec<String> = Vec::new();
    for capture in COMMAND_TOKEN.captures_iter(tex) {
        let name = &capture[1];
        if !COMMAND_ALLOWLIST.contains(name) && !unknown.iter().any(|seen| seen == name) {
            unknown.push(name.to_string());
        }
    }
    unknown
}
