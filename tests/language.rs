use std::fs;

use tally::{evaluate, evaluate_source, self_test};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "expr"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (line_number, case) in extract_cases(&content) {
            count += 1;
            let evaluation = evaluate_source(&case.source);
            assert_eq!(evaluation.as_signed(),
                       case.expected,
                       "{path:?}:{line_number}: '{}' evaluated to {} instead of {}",
                       case.source,
                       evaluation.as_signed(),
                       case.expected);
            assert_eq!(evaluation.is_clean(),
                       !case.recovers,
                       "{path:?}:{line_number}: '{}' reported {:?}",
                       case.source,
                       evaluation.diagnostics);
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

struct Case {
    source:   String,
    expected: i64,
    recovers: bool,
}

/// Reads `expression => expected` and `expression ~> expected` lines. The
/// second form expects diagnostics. Blank lines and `#` comments are skipped.
fn extract_cases(content: &str) -> Vec<(usize, Case)> {
    let mut cases = Vec::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (source, expected, recovers) = if let Some((source, expected)) = line.split_once("=>") {
            (source, expected, false)
        } else if let Some((source, expected)) = line.split_once("~>") {
            (source, expected, true)
        } else {
            panic!("Line {} is not a case: {line}", i + 1);
        };

        let expected = expected.trim()
                               .parse()
                               .unwrap_or_else(|e| panic!("Line {}: bad expected value: {e}", i + 1));
        cases.push((i + 1,
                    Case { source: source.to_string(),
                           expected,
                           recovers }));
    }

    cases
}

fn assert_value(src: &str, expected: i64) {
    let evaluation = evaluate_source(src);
    assert!(evaluation.is_clean(),
            "'{src}' reported diagnostics: {}",
            evaluation.diagnostics);
    assert_eq!(evaluation.as_signed(), expected, "'{src}'");
}

fn assert_recovers(src: &str, expected: i64) {
    let evaluation = evaluate_source(src);
    assert!(!evaluation.is_clean(), "'{src}' was expected to report a diagnostic");
    assert_eq!(evaluation.as_signed(), expected, "'{src}'");
}

#[test]
fn self_test_table_passes() {
    for report in self_test::run() {
        assert!(report.passed(), "{report}");
    }
}

#[test]
fn basic_arithmetic() {
    assert_value("1 + 2", 3);
    assert_value("7 * 9", 63);
    assert_value("8 - 5", 3);
    assert_value("4 + 3 * 8", 28);
    assert_value("(4 + 3) * 8", 56);
    assert_value("(4 + 3 * 8) + 8 * 8 + (4 * 4)", 108);
}

#[test]
fn whitespace_is_insignificant() {
    assert_value("4+3*8", 28);
    assert_value("\t4 +\n3\r\n* 8 ", 28);
    assert_value("  ( 4 )  ", 4);
}

#[test]
fn short_chains_are_left_to_right() {
    assert_value("10 - 4 - 3", 3);
    assert_value("2 * 3 * 4", 24);
}

#[test]
fn long_chains_nest_the_rest() {
    // (a - b) - (c - d), not ((a - b) - c) - d.
    assert_value("10 - 4 - 3 - 2", 5);
    assert_ne!(evaluate("10 - 4 - 3 - 2"), 10 - 4 - 3 - 2);

    // (a - b) - ((c - d) - e)
    assert_value("1 - 2 - 3 - 4 - 5", 5);
}

#[test]
fn subtraction_wraps_below_zero() {
    assert_value("0 - 1", -1);
    assert_eq!(evaluate_source("0 - 1").value, u64::MAX);
}

#[test]
fn multiplication_wraps_on_overflow() {
    assert_value("9223372036854775807 * 2", -2);
    assert_value("9223372036854775807 + 1", i64::MIN);
}

#[test]
fn oversized_literal_is_clamped() {
    assert_recovers("9223372036854775808", i64::MAX);
    assert_recovers("99999999999999999999999 - 7", i64::MAX - 7);
}

#[test]
fn unclosed_parenthesis_contributes_zero() {
    assert_recovers("(4 + 3", 0);
    assert_recovers("5 + (4 + 3", 5);
    assert_recovers("2 * (4 + 3", 0);
}

#[test]
fn malformed_number_keeps_digits() {
    assert_recovers("12abc + 3", 15);
    assert_recovers("1.5 + 1", 2);
}

#[test]
fn missing_operands_count_as_zero() {
    assert_recovers("", 0);
    assert_recovers("   ", 0);
    assert_recovers("5 -", 5);
    assert_recovers("- 5", -5);
    assert_recovers("()", 0);
}

#[test]
fn bad_characters_stop_the_expression() {
    assert_recovers("4 / 2", 4);
    assert_recovers("4 + \u{7}", 4);
    assert_recovers("x + 1", 0);
}

#[test]
fn trailing_input_is_reported_but_ignored() {
    assert_recovers("1 + 2)", 3);
    assert_recovers("3 4", 3);
    assert_recovers("(1) (2)", 1);
}

#[test]
fn strict_mode_rejects_recovered_results() {
    assert_eq!(evaluate_source("6 * 7").into_strict().ok(), Some(42));

    let diagnostics = evaluate_source("6 * (7")
        .into_strict()
        .expect_err("an unclosed parenthesis is an error in strict mode");
    assert_eq!(diagnostics.len(), 1);
}
