use std::fs;

use tortue::{error::ParseError, parse_program, run_program};
use walkdir::WalkDir;

/// Runs a program with a fixed seed and returns whether the pass was clean
/// plus both captured output streams.
fn run(source: &str) -> (bool, String, String) {
    let mut out = Vec::new();
    let mut diag = Vec::new();

    let clean = run_program(source, &mut out, &mut diag, Some(42))
        .unwrap_or_else(|e| panic!("Script failed to parse:\n{source}\nError: {e}"));

    (clean,
     String::from_utf8(out).expect("primary stream is not UTF-8"),
     String::from_utf8(diag).expect("diagnostic stream is not UTF-8"))
}

fn assert_clean(source: &str) -> (String, String) {
    let (clean, out, diag) = run(source);
    assert!(clean, "Script failed: {diag}");
    (out, diag)
}

fn assert_fails(source: &str) -> (String, String) {
    let (clean, out, diag) = run(source);
    assert!(!clean, "Script succeeded but was expected to fail");
    (out, diag)
}

#[test]
fn demo_programs_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "tortue"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;

        let mut out = Vec::new();
        let mut diag = Vec::new();
        match run_program(&source, &mut out, &mut diag, Some(7)) {
            Ok(true) => {},
            Ok(false) => panic!("Demo {path:?} hit a runtime error:\n{}",
                                String::from_utf8_lossy(&diag)),
            Err(e) => panic!("Demo {path:?} failed to parse: {e}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

#[test]
fn sequencing_preserves_source_order() {
    let (out, diag) = assert_clean("print 1 print 2 print 3");
    assert_eq!(diag, "1.000000\n2.000000\n3.000000\n");
    assert_eq!(out, "");
}

#[test]
fn print_writes_to_the_diagnostic_stream_only() {
    let (out, diag) = assert_clean("print 7");
    assert_eq!(out, "");
    assert_eq!(diag, "7.000000\n");
}

#[test]
fn forward_walks_up_from_the_origin() {
    let (out, _) = assert_clean("forward 10");
    assert_eq!(out, "LineTo 0.000000 -10.000000\n");
}

#[test]
fn turning_right_then_forward() {
    let (out, _) = assert_clean("forward 10 right 90 forward 10");
    assert_eq!(out, "LineTo 0.000000 -10.000000\nLineTo -10.000000 -10.000000\n");
}

#[test]
fn turning_left_then_forward() {
    let (out, _) = assert_clean("left 90 forward 10");
    assert_eq!(out, "LineTo 10.000000 -0.000000\n");
}

#[test]
fn heading_is_absolute() {
    // The earlier turn is overridden, not accumulated.
    let (out, _) = assert_clean("left 30 heading 90 forward 10");
    assert_eq!(out, "LineTo 10.000000 -0.000000\n");
}

#[test]
fn backward_is_forward_negated() {
    let (out, _) = assert_clean("backward 10");
    assert_eq!(out, "LineTo 0.000000 10.000000\n");
}

#[test]
fn pen_state_gates_the_primitive_kind() {
    let (out, _) = assert_clean("up forward 10 down forward 10");
    assert_eq!(out, "MoveTo 0.000000 -10.000000\nLineTo 0.000000 -20.000000\n");

    let (out, _) = assert_clean("up position 3, 4 down position 0, 0");
    assert_eq!(out, "MoveTo 3.000000 4.000000\nLineTo 0.000000 0.000000\n");
}

#[test]
fn home_resets_pose_and_is_always_visible() {
    let (out, _) = assert_clean("up forward 10 home forward 5");
    assert_eq!(out,
               "MoveTo 0.000000 -10.000000\nMoveTo 0.000000 0.000000\nLineTo 0.000000 -5.000000\n");
}

#[test]
fn color_emits_all_three_components() {
    let (out, _) = assert_clean("color 1, 0, 0.5");
    assert_eq!(out, "Color 1.000000 0.000000 0.500000\n");
}

#[test]
fn variables_assign_and_overwrite() {
    let (_, diag) = assert_clean("set x 5 print x set x x + 1 print x");
    assert_eq!(diag, "5.000000\n6.000000\n");
}

#[test]
fn precedence_and_grouping() {
    let (_, diag) = assert_clean("print 2 + 3 * 4");
    assert_eq!(diag, "14.000000\n");

    let (_, diag) = assert_clean("print (2 + 3) * 4");
    assert_eq!(diag, "20.000000\n");

    // Exponentiation associates to the right.
    let (_, diag) = assert_clean("print 2 ^ 3 ^ 2");
    assert_eq!(diag, "512.000000\n");

    // Subtraction associates to the left.
    let (_, diag) = assert_clean("print 10 - 2 - 3");
    assert_eq!(diag, "5.000000\n");

    let (_, diag) = assert_clean("print -(2 + 3)");
    assert_eq!(diag, "-5.000000\n");
}

#[test]
fn builtin_functions_evaluate() {
    let (_, diag) = assert_clean("print sin(0) print cos(0) print tan(0) print sqrt(9)");
    assert_eq!(diag, "0.000000\n1.000000\n0.000000\n3.000000\n");
}

#[test]
fn repeat_truncates_its_count_toward_zero() {
    let (out, _) = assert_clean("repeat 3.9 { forward 1 }");
    assert_eq!(out.lines().count(), 3);

    let (out, _) = assert_clean("repeat -1 { forward 1 }");
    assert_eq!(out, "");

    let (out, _) = assert_clean("repeat 0.9 { forward 1 }");
    assert_eq!(out, "");
}

#[test]
fn sticky_error_suppresses_later_primitives() {
    let (out, diag) = assert_fails("set x missing + 1 forward 10");
    assert_eq!(out, "", "no primitive may be emitted after the error");
    assert!(diag.contains("Unknown variable 'missing'"));
    assert_eq!(diag.lines().count(), 1, "exactly one diagnostic per failure");
}

#[test]
fn sticky_error_stops_a_running_loop() {
    // Two clean iterations happen before the third divides by zero; their
    // primitives stay valid, nothing follows.
    let source = "set n 3 repeat 3 { set n n - 1 forward 10 / n }";
    let (out, diag) = assert_fails(source);
    assert_eq!(out.lines().count(), 2);
    assert!(diag.contains("Division by zero"));
}

#[test]
fn division_by_zero_is_refused() {
    let (out, diag) = assert_fails("print 1 / 0");
    assert_eq!(out, "");
    assert!(diag.contains("Division by zero"));
    assert_eq!(diag.lines().count(), 1);
}

#[test]
fn negative_square_root_is_refused() {
    let (_, diag) = assert_fails("print sqrt(-1)");
    assert!(diag.contains("Square root of a negative number"));
}

#[test]
fn invalid_random_ranges_are_refused() {
    let (_, diag) = assert_fails("print random(5, 1)");
    assert!(diag.contains("Invalid random range"));

    // An empty interval is just as invalid as a reversed one.
    let (_, diag) = assert_fails("print random(1, 1)");
    assert!(diag.contains("Invalid random range"));
}

#[test]
fn random_respects_its_bounds_and_seed() {
    let (_, first) = assert_clean("print random(0, 1)");
    let value: f64 = first.trim().parse().expect("print output is numeric");
    assert!((0.0..1.0).contains(&value));

    // Same seed, same draw.
    let (_, second) = assert_clean("print random(0, 1)");
    assert_eq!(first, second);
}

#[test]
fn procedures_recurse_behind_a_repeat_guard() {
    let source = "proc p { forward 1 repeat 0 { call p } } call p";
    let (out, _) = assert_clean(source);
    assert_eq!(out, "LineTo 0.000000 -1.000000\n");
}

#[test]
fn procedures_resolve_at_call_time() {
    // `ping` references `pong` before it exists; both are defined by the
    // time the call is evaluated.
    let source = "proc ping { call pong } proc pong { forward 1 } call ping";
    let (out, _) = assert_clean(source);
    assert_eq!(out, "LineTo 0.000000 -1.000000\n");
}

#[test]
fn procedure_redefinition_replaces_the_body() {
    let source = "proc p { forward 1 } proc p { forward 2 } call p";
    let (out, _) = assert_clean(source);
    assert_eq!(out, "LineTo 0.000000 -2.000000\n");
}

#[test]
fn unknown_procedure_is_refused() {
    let (out, diag) = assert_fails("call ghost forward 1");
    assert_eq!(out, "");
    assert!(diag.contains("Unknown procedure 'ghost'"));
}

#[test]
fn empty_and_comment_only_programs_are_clean() {
    let (out, diag) = assert_clean("");
    assert_eq!(out, "");
    assert_eq!(diag, "");

    let (out, diag) = assert_clean("# just a comment\n");
    assert_eq!(out, "");
    assert_eq!(diag, "");
}

#[test]
fn parse_errors_are_reported() {
    assert!(matches!(parse_program("forward )"),
                     Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_program("repeat 3 { }"),
                     Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_program("set 5 5"),
                     Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse_program("print (1 + 2"),
                     Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse_program("repeat 2 { forward 1"),
                     Err(ParseError::UnexpectedEndOfInput { .. })));
    assert!(matches!(parse_program("forward 10 $"),
                     Err(ParseError::UnrecognizedToken { .. })));
}

#[test]
fn parse_errors_name_their_line() {
    let error = parse_program("forward 1\nforward )\n").unwrap_err();
    match error {
        ParseError::UnexpectedToken { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected an unexpected-token error, got {other:?}"),
    }
}

#[test]
fn pretty_printing_round_trips() {
    let source = "set side 40\nrepeat 4 {\n  forward side\n  right 90\n}\n";
    let ast = parse_program(source).unwrap();
    assert_eq!(ast.to_string(), source);

    // Printing a reparse of the printed form is a fixed point.
    let reparsed = parse_program(&ast.to_string()).unwrap();
    assert_eq!(reparsed.to_string(), ast.to_string());
}

#[test]
fn pretty_printing_nested_constructs() {
    let source = "proc zigzag {\n  repeat 2 {\n    forward 5\n    left 45\n  }\n}\ncall zigzag\n";
    let ast = parse_program(source).unwrap();
    assert_eq!(ast.to_string(), source);
}
