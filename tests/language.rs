use std::fs;

use lisma::eval_source;
use walkdir::WalkDir;

fn eval_to_string(src: &str) -> String {
    match eval_source(src) {
        Ok(value) => value.to_string(),
        Err(e) => panic!("Script failed to parse: {src}\nError: {e}"),
    }
}

fn assert_evals_to(src: &str, expected: &str) {
    assert_eq!(eval_to_string(src), expected, "for input: {src}");
}

fn assert_parse_error(src: &str) {
    if let Ok(value) = eval_source(src) {
        panic!("Script parsed but was expected to fail: {src} => {value}");
    }
}

fn assert_clean(src: &str) {
    let rendered = eval_to_string(src);
    assert!(!rendered.starts_with("Error:"),
            "Expression failed: {src} => {rendered}");
}

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_dsl_blocks(&content).into_iter().enumerate() {
            for line in code.lines().filter(|line| !line.trim().is_empty()) {
                count += 1;
                match eval_source(line) {
                    Ok(value) if value.is_error() => panic!("Example {} in {:?} evaluated to an error:\n{}\n=> {}",
                                                            i + 1,
                                                            path,
                                                            line,
                                                            value),
                    Ok(_) => {},
                    Err(e) => panic!("Example {} in {:?} failed to parse:\n{}\nError: {}",
                                     i + 1,
                                     path,
                                     line,
                                     e),
                }
            }
        }
    }

    assert!(count > 0, "No examples found in book/src");
}

fn extract_dsl_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```lisma") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

#[test]
fn basic_arithmetic() {
    assert_evals_to("(+ 1 2)", "3");
    assert_evals_to("(- 8 5)", "3");
    assert_evals_to("(* 7 9)", "63");
    assert_evals_to("(/ 10 2)", "5");
}

#[test]
fn division_truncates() {
    assert_evals_to("(/ 7 2)", "3");
    assert_evals_to("(/ -7 2)", "-3");
    assert_evals_to("(/ 7 -2)", "-3");
}

#[test]
fn unary_minus_negates() {
    assert_evals_to("(- 5)", "-5");
    assert_evals_to("(- -5)", "5");
    assert_evals_to("(- (+ 2 3))", "-5");
}

#[test]
fn variadic_operators_fold_left_to_right() {
    assert_evals_to("(- 10 2 3)", "5");
    assert_evals_to("(+ 1 2 3 4)", "10");
    assert_evals_to("(* 2 3 4)", "24");
    assert_evals_to("(/ 100 5 2)", "10");
}

#[test]
fn nested_expressions() {
    assert_evals_to("(+ 1 (* 2 3))", "7");
    assert_evals_to("(* (+ 1 2) (- 10 6))", "12");
    assert_evals_to("(+ (+ (+ 1 1) 1) 1)", "4");
}

#[test]
fn top_level_expression_needs_no_parens() {
    assert_evals_to("+ 1 2", "3");
    assert_evals_to("* 3 (+ 2 2)", "12");
}

#[test]
fn terminal_values_evaluate_to_themselves() {
    assert_evals_to("5", "5");
    assert_evals_to("(5)", "5");
    assert_evals_to("()", "()");
}

#[test]
fn surviving_symbols_render_verbatim() {
    assert_evals_to("foo", "foo");
    assert_evals_to("(foo)", "foo");
}

#[test]
fn division_by_zero_is_an_error_value() {
    assert_evals_to("(/ 1 0)", "Error: Division By Zero.");
    assert_evals_to("(/ 0 0)", "Error: Division By Zero.");
    assert_evals_to("(+ 1 (/ 10 0))", "Error: Division By Zero.");
}

#[test]
fn division_error_skips_remaining_operands() {
    assert_evals_to("(/ 10 0 5)", "Error: Division By Zero.");
}

#[test]
fn first_error_wins_by_index() {
    assert_evals_to("(+ (/ 1 0) (/ 1 0))", "Error: Division By Zero.");
    assert_evals_to("(+ (foo 1) (/ 1 0))", "Error: Invalid Operator!");
}

#[test]
fn non_number_operand_is_an_error_value() {
    assert_evals_to("(+ 1 foo)", "Error: Cannot operate on non-number!");
    assert_evals_to("(* 2 ())", "Error: Cannot operate on non-number!");
}

#[test]
fn unknown_operator_is_an_error_value() {
    assert_evals_to("(foo 1 2)", "Error: Invalid Operator!");
}

#[test]
fn expression_must_start_with_symbol() {
    assert_evals_to("(1 2 3)", "Error: S-expression does not start with symbol.");
    assert_evals_to("((+ 1 1) 2)", "Error: S-expression does not start with symbol.");
}

#[test]
fn arithmetic_wraps_on_overflow() {
    assert_evals_to("(+ 9223372036854775807 1)", "-9223372036854775808");
    assert_evals_to("(- -9223372036854775808 1)", "9223372036854775807");
    assert_evals_to("(/ -9223372036854775808 -1)", "-9223372036854775808");
}

#[test]
fn out_of_range_literal_is_an_error_value() {
    assert_evals_to("99999999999999999999", "Error: invalid number");
    assert_evals_to("(+ 1 99999999999999999999)", "Error: invalid number");
}

#[test]
fn power_operator() {
    assert_evals_to("(^ 2 10)", "1024");
    assert_evals_to("(^ 10 0)", "1");
    assert_evals_to("(^ -2 3)", "-8");
    assert_evals_to("(^ 2 3 2)", "64");
}

#[test]
fn power_with_negative_exponent_truncates() {
    assert_evals_to("(^ 2 -1)", "0");
    assert_evals_to("(^ 1 -5)", "1");
    assert_evals_to("(^ -1 -3)", "-1");
    assert_evals_to("(^ 0 -1)", "Error: Division By Zero.");
}

#[test]
fn min_and_max_operators() {
    assert_evals_to("(min 3 7 5)", "3");
    assert_evals_to("(max 3 7 5)", "7");
    assert_evals_to("(min -1 1)", "-1");
    assert_evals_to("(max (min 9 4) 2)", "4");
}

#[test]
fn lone_operator_survives_as_symbol() {
    assert_evals_to("(+)", "+");
    assert_evals_to("-", "-");
}

#[test]
fn comments_and_whitespace_are_ignored() {
    assert_evals_to("(+ 1 2) ; trailing comment", "3");
    assert_evals_to("  ( +   1\t2 )  ", "3");
}

#[test]
fn unclosed_paren_is_a_parse_error() {
    assert_parse_error("(+ 1 2");
    assert_parse_error("(+ 1 (derp 2)");
}

#[test]
fn stray_closing_paren_is_a_parse_error() {
    assert_parse_error(")");
    assert_parse_error("(+ 1 2))");
}

#[test]
fn unknown_character_is_a_parse_error() {
    assert_parse_error("(+ 1 $)");
}

#[test]
fn example_script_runs_clean() {
    let script = fs::read_to_string("tests/example.lisma").expect("missing file");

    for line in script.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(';') {
            continue;
        }

        assert_clean(line);
    }
}
