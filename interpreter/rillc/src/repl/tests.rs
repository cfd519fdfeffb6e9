#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::run_session;

/// Run a whole session over `input`, returning (out, err) as strings.
fn session(input: &str) -> (String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    run_session(input.as_bytes(), &mut out, &mut err).unwrap();
    (
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn empty_input_prompts_once() {
    let (out, err) = session("");
    assert_eq!(out, ">> ");
    assert_eq!(err, "");
}

#[test]
fn addition_prints_the_sum() {
    let (out, err) = session("64 64 +\n");
    assert_eq!(out, ">> => 128\n>> ");
    assert_eq!(err, "");
}

#[test]
fn stack_prints_top_first() {
    let (out, _) = session("1 2 3\n");
    assert_eq!(out, ">> => 3 2 1\n>> ");
}

#[test]
fn stack_reprints_after_every_line() {
    let (out, _) = session("1\n2\n");
    assert_eq!(out, ">> => 1\n>> => 2 1\n>> ");
}

#[test]
fn empty_stack_prints_nothing() {
    let (out, err) = session("1 drop\n");
    assert_eq!(out, ">> >> ");
    assert_eq!(err, "");
}

#[test]
fn trailing_token_without_newline_still_runs() {
    let (out, _) = session("64 64 +");
    assert_eq!(out, ">> => 128\n");
}

#[test]
fn errors_go_to_the_error_channel() {
    let (out, err) = session("drop\n");
    assert_eq!(out, ">> >> ");
    assert_eq!(
        err,
        "Error: Not enough arguments to `drop'. Minimum stack size: 1; actual stack size: 0.\n"
    );
}

#[test]
fn session_continues_past_errors() {
    let (out, err) = session("foo\n1 2 +\n");
    assert_eq!(out, ">> >> => 3\n>> ");
    assert_eq!(err, "Error: Unknown word: `foo'.\n");
}
