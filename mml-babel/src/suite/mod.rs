//! Golden-corpus regression suite.
//!
//! Each test case is independent: one conversion plus one validation over a
//! read-only golden-store snapshot. That makes the per-case work
//! embarrassingly parallel, so the runner fans out with rayon and reduces
//! the per-case results into the aggregate counts. The only mutating
//! operation — blessing golden entries — takes `&mut self` and therefore
//! cannot overlap a run.

pub mod corpus;

use crate::convert::convert;
use crate::error::ConvertError;
use crate::validate::{ValidationResult, Validator};
use rayon::prelude::*;

/// One corpus entry. Defined statically, read-only at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    pub id: String,
    pub category: String,
    pub description: String,
    pub mathml: String,
    pub expected_tex: String,
    pub mathspeak: Option<String>,
}

/// Aggregate outcome of one suite run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Percentage in `[0, 100]`; an empty run counts as fully passing.
    pub pass_rate: f64,
    pub results: Vec<ValidationResult>,
}

impl RunSummary {
    /// Human-readable summary plus a per-failure error/warning dump.
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str("regression summary\n");
        out.push_str(&format!("  total:     {}\n", self.total));
        out.push_str(&format!("  passed:    {}\n", self.passed));
        out.push_str(&format!("  failed:    {}\n", self.failed));
        out.push_str(&format!("  pass rate: {:.1}%\n", self.pass_rate));

        if self.failed > 0 {
            out.push_str("\nfailures:\n");
            for result in self.results.iter().filter(|r| !r.passed) {
                out.push_str(&format!("  {}\n", result.question_id));
                for error in &result.errors {
                    out.push_str(&format!("    error: {error}\n"));
                }
                for warning in &result.warnings {
                    out.push_str(&format!("    warning: {warning}\n"));
                }
            }
        }

        out
    }
}

/// Runs the corpus through conversion and validation.
pub struct RegressionSuite {
    cases: Vec<TestCase>,
    validator: Validator,
}

impl RegressionSuite {
    pub fn new(cases: Vec<TestCase>, validator: Validator) -> Self {
        RegressionSuite { cases, validator }
    }

    /// Suite over the built-in corpus.
    pub fn with_builtin_corpus(validator: Validator) -> Self {
        Self::new(corpus::builtin_corpus(), validator)
    }

    /// Restrict the suite to one category. Unknown categories leave an
    /// empty suite, which runs (and passes) vacuously.
    pub fn filter_category(&mut self, category: &str) {
        self.cases.retain(|case| case.category == category);
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    /// Run every case and aggregate. A parse failure inside one case never
    /// aborts the run: the converter fails open and the mismatch surfaces
    /// as that case's validation errors.
    pub fn run(&self) -> RunSummary {
        let results: Vec<ValidationResult> = self
            .cases
            .par_iter()
            .map(|case| self.run_case(case))
            .collect();

        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        let failed = total - passed;
        let pass_rate = if total == 0 {
            100.0
        } else {
            passed as f64 * 100.0 / total as f64
        };

        RunSummary {
            total,
            passed,
            failed,
            pass_rate,
            results,
        }
    }

    fn run_case(&self, case: &TestCase) -> ValidationResult {
        let converted = convert(&case.mathml);
        let mut result = self.validator.validate(
            &case.id,
            &case.mathml,
            &converted,
            None,
            case.mathspeak.as_deref(),
        );

        if converted != case.expected_tex {
            result.errors.push(format!(
                "output mismatch: expected `{}`, got `{converted}`",
                case.expected_tex
            ));
            result.passed = false;
        }

        result
    }

    /// Bless the current converter output for every case in the suite:
    /// the explicit save operation that (re)builds the golden set.
    /// Returns the number of entries written.
    pub fn update_golden(&mut self) -> Result<usize, ConvertError> {
        for case in &self.cases {
            let converted = convert(&case.mathml);
            self.validator.save_golden_entry(
                &case.id,
                &case.mathml,
                &converted,
                None,
                case.mathspeak.clone(),
            )?;
        }
        Ok(self.cases.len())
    }
}
