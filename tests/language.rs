use std::fs;

use reckon::{
    error::ErrorKind,
    get_result,
    interpreter::{
        normalizer::normalize,
        session::{Outcome, Session},
    },
    repl::{Ending, run},
};
use walkdir::WalkDir;

#[test]
fn session_transcripts_replay() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/sessions").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "session")
                                      })
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let (input, expected) = split_transcript(&content);

        let mut session = Session::new();
        let mut output = Vec::new();
        run(&mut session, input.as_bytes(), &mut output, None)
            .unwrap_or_else(|e| panic!("Transcript {path:?} failed to run: {e}"));

        let actual = String::from_utf8(output).expect("output is not UTF-8");
        assert_eq!(actual, expected, "Transcript {path:?} produced unexpected output");
        count += 1;
    }

    assert!(count > 0, "No transcripts found in tests/sessions");
}

/// Lines starting with `>` are fed to the session, every other non-comment
/// line is expected output.
fn split_transcript(content: &str) -> (String, String) {
    let mut input = String::new();
    let mut expected = String::new();

    for line in content.lines() {
        if line.starts_with('#') {
            continue;
        }
        if let Some(typed) = line.strip_prefix('>') {
            input.push_str(typed.strip_prefix(' ').unwrap_or(typed));
            input.push('\n');
        } else {
            expected.push_str(line);
            expected.push('\n');
        }
    }

    (input, expected)
}

fn assert_value(src: &str, expected: i64) {
    match get_result(src) {
        Ok(Some(value)) => assert_eq!(value, expected, "Script evaluated to the wrong value: {src}"),
        Ok(None) => panic!("Script produced no value: {src}"),
        Err(e) => panic!("Script failed: {src}\nError: {e:?}"),
    }
}

fn assert_failure(src: &str, kind: ErrorKind) {
    match get_result(src) {
        Ok(value) => panic!("Script succeeded with {value:?} but was expected to fail: {src}"),
        Err(e) => assert_eq!(e.kind(), kind, "Script failed with the wrong error: {src}"),
    }
}

#[test]
fn assignment_round_trip() {
    assert_value("x = 5\nx", 5);
    assert_value("x=5\nx = 6\nx", 6);
    assert_value("a = 3\nb = a\na = 4\nb", 3);
    assert_value("x = -5\nx", -5);
    assert_value("n = 3\nn = (n * 2)\nn", 6);
}

#[test]
fn precedence() {
    assert_value("2 + 3 * 4", 14);
    assert_value("(2 + 3) * 4", 20);
    assert_value("1 + 2 * 3 - 4 / 2", 5);
    assert_value("8 * 3 + 12 * (4 - 2)", 48);
}

#[test]
fn nested_parentheses() {
    assert_value("((1 + 2) * (3 + 4))", 21);
    assert_value("(1 + 2) * (3 - 10)", -21);
    assert_value("2 * (3 + (4 * (5 - 1)))", 38);
    assert_value("-(2 + 3)", -5);
    assert_value("3 - (1 - 5)", 7);
}

#[test]
fn same_tier_reduces_left_to_right() {
    assert_value("20 / 4 / 5", 1);
    assert_value("10 - 2 - 3", 5);
    assert_value("7 / 2 * 2", 6);
}

#[test]
fn division_truncates_toward_zero() {
    assert_value("7 / 2", 3);
    assert_value("-7 / 2", -3);
    assert_value("7 / -2", -3);
}

#[test]
fn minus_runs_resolve_by_parity() {
    assert_value("5 - -3", 8);
    assert_value("5 - --3", 2);
    assert_value("2--3", 5);
    assert_value("2 --- 3", -1);
    assert_value("--3", 3);
    assert_value("---3", -3);
}

#[test]
fn minus_runs_after_multiplicative_operators() {
    assert_value("2 * --3", 6);
    assert_value("2 * -3", -6);
    assert_value("2*---3", -6);
    assert_value("12 / -4", -3);
    assert_value("a = 4\n12 / --a", 3);
}

#[test]
fn failed_input_keeps_variables() {
    for failing in ["y = = 2", "y = (y - 3) + 1", "y + (y = 2)", "y = z", "y = 4 / 0"] {
        let mut session = Session::new();
        session.process("y = 10").unwrap();

        assert!(session.process(failing).is_err(), "'{failing}' should fail");
        assert_eq!(session.process("y").unwrap(), Outcome::Value(10), "'{failing}' changed y");
    }
}

#[test]
fn failures_do_not_leak_into_the_next_line() {
    let mut session = Session::new();

    assert!(session.process("1 + 2 * (3 +").is_err());
    assert!(session.process("4 / 0").is_err());
    assert_eq!(session.process("1 + 1").unwrap(), Outcome::Value(2));
    assert!(session.variables().is_empty());
}

#[test]
fn unknown_variable() {
    assert_failure("z", ErrorKind::UnknownVariable);
    assert_failure("x = 1\nX", ErrorKind::UnknownVariable);
    assert_failure("1 + (2 * q)", ErrorKind::UnknownVariable);
    assert_failure("a = b", ErrorKind::UnknownVariable);
}

#[test]
fn division_by_zero() {
    assert_failure("4 / 0", ErrorKind::DivisionByZero);
    assert_failure("4 / (2 - 2)", ErrorKind::DivisionByZero);
}

#[test]
fn overflow_is_an_error() {
    assert_failure("9223372036854775807 + 1", ErrorKind::Overflow);
    assert_failure("99999999999999999999", ErrorKind::Overflow);
    assert_failure("(0 - 9223372036854775807 - 1) / -1", ErrorKind::Overflow);
}

#[test]
fn invalid_expressions() {
    assert_failure("2 ** 3", ErrorKind::InvalidExpression);
    assert_failure("2 */ 3", ErrorKind::InvalidExpression);
    assert_failure("(1 + 2", ErrorKind::InvalidExpression);
    assert_failure("1 + 2)", ErrorKind::InvalidExpression);
    assert_failure("1 +", ErrorKind::InvalidExpression);
    assert_failure("1 + + 2", ErrorKind::InvalidExpression);
    assert_failure("3 4", ErrorKind::InvalidExpression);
    assert_failure("a = 1 = 2", ErrorKind::InvalidExpression);
    assert_failure("a = 1 + 2", ErrorKind::InvalidExpression);
    assert_failure("10 (0 - 3)", ErrorKind::InvalidExpression);
    assert_failure("(5 - 2)(0 - 1)", ErrorKind::InvalidExpression);
    assert_failure("2 (3 + 4)", ErrorKind::InvalidExpression);
    assert_failure("(0 - 3) 10", ErrorKind::InvalidExpression);
    assert_failure("x = 1\nx (0 - 1)", ErrorKind::InvalidExpression);
}

#[test]
fn groups_must_compute_a_value() {
    assert_failure("(5)", ErrorKind::InvalidExpression);
    assert_failure("()", ErrorKind::InvalidExpression);
    assert_failure("2 * ( )", ErrorKind::InvalidExpression);
    assert_failure("(x = 1)", ErrorKind::InvalidExpression);
    assert_failure("(x = 1)\nx", ErrorKind::InvalidExpression);

    let mut session = Session::new();
    assert!(session.process("(x = 1)").is_err());
    assert!(session.variables().get("x").is_err());
}

#[test]
fn invalid_identifiers() {
    assert_failure("a2 = 5", ErrorKind::InvalidIdentifier);
    assert_failure("a = b2", ErrorKind::InvalidIdentifier);
    assert_failure("3.5 + 1", ErrorKind::InvalidIdentifier);
    assert_failure("x_y", ErrorKind::InvalidIdentifier);
    assert_failure("x = 1\n2 * -x", ErrorKind::InvalidIdentifier);
}

#[test]
fn commands() {
    let mut session = Session::new();

    assert_eq!(session.process("/help").unwrap(), Outcome::Help);
    assert_eq!(session.process("  /exit").unwrap(), Outcome::Exit);
    let error = session.process("/quit").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnknownCommand);
    assert_eq!(error.to_string(), "Unknown command");
}

#[test]
fn blank_lines_change_nothing() {
    let mut session = Session::new();
    session.process("k = 2").unwrap();

    for blank in ["", "   ", "\t"] {
        assert_eq!(session.process(blank).unwrap(), Outcome::Silent);
    }
    assert_eq!(session.variables().len(), 1);
    assert_eq!(session.variables().get("k").unwrap(), 2);
}

#[test]
fn normalizer_is_idempotent() {
    for line in ["1 + 2", "1+2", " x =  -4", "(2+3)*4", "5 - --3", "-(1 - 2)", "2 ** 3", "/help"] {
        let once = normalize(line);
        assert_eq!(normalize(&once), once, "normalizing '{line}' twice changed it");
    }
    assert_eq!(normalize("1 + 2"), "1 + 2");
}

#[test]
fn invalid_utf8_only_fails_its_own_line() {
    let mut session = Session::new();
    let mut output = Vec::new();

    let ending = run(&mut session, &b"x = 5\n\xff\nx\n"[..], &mut output, None).unwrap();

    assert_eq!(ending, Ending::EndOfInput);
    assert_eq!(String::from_utf8(output).unwrap(), "Invalid identifier\n5\n");
}

#[test]
fn variables_are_listed_in_name_order() {
    let mut session = Session::new();
    for line in ["b = 2", "a = 1", "C = 3", "b = (a - 5)", "d = = 4"] {
        let _ = session.process(line);
    }

    let variables: Vec<(&str, i64)> = session.variables().iter().collect();
    assert_eq!(variables, vec![("C", 3), ("a", 1), ("b", -4)]);
}

#[test]
fn repl_ends_at_end_of_input() {
    let mut session = Session::new();
    let mut output = Vec::new();

    let ending = run(&mut session, "r = 2\nr * r\n".as_bytes(), &mut output, Some("> ")).unwrap();

    assert_eq!(ending, Ending::EndOfInput);
    assert_eq!(String::from_utf8(output).unwrap(), "> > 4\n> ");
    assert_eq!(session.variables().get("r").unwrap(), 2);
}
