//! MathML → TeX conversion and regression validation
//!
//!     This crate converts presentation MathML fragments into TeX strings
//!     (MathJax-class renderers consume the output), and guards that
//!     conversion with a golden-set regression harness.
//!
//!     TLDR for contributors:
//!         - The converter is a pure function. Same input, same output,
//!           no instance state. The chemistry/math domain decision is a
//!           parameter threaded through the recursion, never a field.
//!         - Nothing below the suite boundary throws for data-shaped
//!           problems: malformed MathML becomes an inline diagnostic,
//!           validation findings become errors/warnings on the result.
//!         - Every symbol table is a closed set, and the validator's
//!           command allow-list is derived from the tables, with a test
//!           pinning the two together.
//!
//! Architecture
//!
//!     The pipeline, leaf-first:
//!
//!     document → extract (find <math> spans)
//!              → parser (roxmltree XML → MathNode tree)
//!              → convert (recursive emission, chemistry classifier inline)
//!              → normalize (brace protection, keyword escaping, whitespace)
//!              → validate (golden comparison + TeX syntax invariants)
//!              → suite (corpus orchestration, aggregate report)
//!
//!     The file structure:
//!     .
//!     ├── error.rs            # ConvertError
//!     ├── node.rs             # MathNode tagged variants
//!     ├── parser.rs           # MathML source → MathNode
//!     ├── extract.rs          # document scanning, $-substitution
//!     ├── convert
//!     │   ├── mod.rs          # recursive emitter
//!     │   ├── tables.rs       # operator/greek/function tables
//!     │   ├── chemistry.rs    # domain classifier
//!     │   └── normalize.rs    # post-processing pass
//!     ├── validate
//!     │   ├── mod.rs          # Validator, syntax checks, metrics
//!     │   ├── golden.rs       # file-backed golden store
//!     │   └── similarity.rs   # edit-distance similarity
//!     └── suite
//!         ├── mod.rs          # runner + report
//!         └── corpus.rs       # built-in test cases
//!
//! Library Choices
//!
//!     Parsing leans on roxmltree rather than a hand-written scanner: the
//!     input is real XML and namespace/entity handling is exactly the kind
//!     of code we do not want to own. Hashing uses blake3 (content hash of
//!     the rendered SVG supplied by the external renderer), similarity is a
//!     small Levenshtein implementation (character-level, two-row DP), and
//!     the suite fans out per-case work with rayon since cases share
//!     nothing but a read-only golden snapshot.
//!
//!     This is a pure lib: it powers mml-cli but is shell agnostic. No
//!     printing, no env vars, no process exit; the only I/O lives in the
//!     golden store's explicit load/save.

pub mod convert;
pub mod error;
pub mod extract;
pub mod node;
pub mod parser;
pub mod suite;
pub mod validate;

pub use convert::{convert, normalize};
pub use error::ConvertError;
pub use extract::{convert_document, extract_math_fragments};
pub use node::MathNode;
pub use parser::parse_mathml;
pub use suite::{RegressionSuite, RunSummary, TestCase};
pub use validate::{
    svg_content_hash, GoldenEntry, GoldenStore, ValidationLimits, ValidationMetrics,
    ValidationResult, Validator,
};
