// Command-line interface for mml
//
// This binary fronts the mml-babel library with two commands:
//
//  mml convert <input> [-o <file>]   - Replace every <math> span in a
//                                      document with $<tex>$ and print or
//                                      write the result.
//  mml check [--category <name>]     - Run the regression corpus through
//      [--golden-set <path>]           conversion + validation and exit 1
//      [--update-golden]               if any case fails. This is the CI
//      [--report-json]                 gate.
//
// Configuration is layered: embedded defaults, an optional mml.toml in the
// working directory, then an explicit --config file. The CLI owns all
// printing and process exits; the library stays shell agnostic.

use clap::{Arg, ArgAction, Command, ValueHint};
use mml_babel::{convert_document, RegressionSuite, Validator};
use mml_config::{Loader, MmlConfig};
use std::fs;

fn build_cli() -> Command {
    Command::new("mml")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting MathML to TeX and guarding the conversion")
        .long_about(
            "mml converts MathML fragments and documents to TeX and runs a\n\
            golden-set regression suite over the conversion.\n\n\
            Commands:\n  \
            - convert: replace each <math> span in a document with $<tex>$\n  \
            - check:   run the regression corpus, exit 1 on any failure\n\n\
            Examples:\n  \
            mml convert lesson.html                 # Convert to stdout\n  \
            mml convert lesson.html -o lesson.tex   # Convert to a file\n  \
            mml check                               # Full corpus, CI gate\n  \
            mml check --category chemistry          # One category only\n  \
            mml check --update-golden               # Bless current output",
        )
        .arg_required_else_help(true)
        .subcommand_required(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an mml.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert every math span in a document to TeX")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Run the regression suite (exit 1 on any failure)")
                .long_about(
                    "Run the regression corpus through conversion and validation.\n\n\
                    Each case prints a pass/fail marker, followed by the aggregate\n\
                    report. The process exits 0 only when every case passed, so the\n\
                    command doubles as a CI gate.\n\n\
                    --update-golden blesses the current converter output into the\n\
                    golden set before validating; use it deliberately, after\n\
                    reviewing the diff it causes.",
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_name("NAME")
                        .help("Run only test cases in this category")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("golden-set")
                        .long("golden-set")
                        .value_name("PATH")
                        .help("Override the golden-set file path")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("update-golden")
                        .long("update-golden")
                        .help("Bless current converter output into the golden set")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("report-json")
                        .long("report-json")
                        .help("Print per-case results as JSON instead of the text report")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output);
        }
        Some(("check", sub_matches)) => {
            let category = sub_matches.get_one::<String>("category").map(|s| s.as_str());
            let golden_set = sub_matches
                .get_one::<String>("golden-set")
                .map(|s| s.as_str());
            let update_golden = sub_matches.get_flag("update-golden");
            let report_json = sub_matches.get_flag("report-json");
            handle_check_command(category, golden_set, update_golden, report_json, &config);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>) {
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let converted = convert_document(&source);

    match output {
        Some(path) => {
            fs::write(path, converted).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{converted}");
        }
    }
}

/// Handle the check command
fn handle_check_command(
    category: Option<&str>,
    golden_set: Option<&str>,
    update_golden: bool,
    report_json: bool,
    config: &MmlConfig,
) {
    let golden_path = golden_set.unwrap_or(&config.check.golden_set);
    let validator = Validator::with_limits(golden_path, (&config.validate).into());

    let mut suite = RegressionSuite::with_builtin_corpus(validator);
    if let Some(category) = category {
        suite.filter_category(category);
    }

    if update_golden {
        match suite.update_golden() {
            Ok(count) => println!("blessed {count} golden entries into {golden_path}"),
            Err(e) => {
                eprintln!("Error updating golden set: {e}");
                std::process::exit(1);
            }
        }
    }

    let summary = suite.run();

    if report_json {
        match serde_json::to_string_pretty(&summary.results) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error rendering JSON report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        for result in &summary.results {
            let marker = if result.passed { "[pass]" } else { "[FAIL]" };
            println!("{marker} {}", result.question_id);
        }
        println!();
        print!("{}", summary.report());
    }

    std::process::exit(if summary.failed > 0 { 1 } else { 0 });
}

fn load_cli_config(explicit_path: Option<&str>) -> MmlConfig {
    let loader = Loader::new().with_optional_file("mml.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
