// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end interpreter sessions driven through the public session loop.
//!
//! Each test pipes a whole script through `run_session` against in-memory
//! buffers and asserts on the exact bytes written to the output and error
//! channels.

use pretty_assertions::assert_eq;
use rillc::repl::run_session;

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
fn arithmetic_session() {
    let (out, err) = session("64 64 +\n");
    assert_eq!(out, ">> => 128\n>> ");
    assert_eq!(err, "");
}

#[test]
fn state_carries_across_lines() {
    let (out, err) = session("1 2\n+\n10 +\n");
    assert_eq!(out, ">> => 2 1\n>> => 3\n>> => 13\n>> ");
    assert_eq!(err, "");
}

#[test]
fn drop_on_empty_stack_reports_and_continues() {
    let (out, err) = session("drop\n5\n");
    assert_eq!(out, ">> >> => 5\n>> ");
    assert_eq!(
        err,
        "Error: Not enough arguments to `drop'. Minimum stack size: 1; actual stack size: 0.\n"
    );
}

#[test]
fn unknown_word_leaves_the_stack_alone() {
    let (out, err) = session("7 frobnicate\n");
    assert_eq!(out, ">> => 7\n>> ");
    assert_eq!(err, "Error: Unknown word: `frobnicate'.\n");
}

#[test]
fn clear_empties_a_deep_stack() {
    let mut script = String::new();
    for n in 0..40 {
        script.push_str(&n.to_string());
        script.push(' ');
    }
    script.push_str("\nclear\ndrop\n");

    let (out, err) = session(&script);
    // Line 1 prints 40 values; clear leaves nothing to print; drop errors.
    assert!(out.starts_with(">> => 39 38 "));
    assert!(out.ends_with("1 0\n>> >> >> "));
    assert_eq!(
        err,
        "Error: Not enough arguments to `drop'. Minimum stack size: 1; actual stack size: 0.\n"
    );
}

#[test]
fn permissive_integers_and_words_mix() {
    // `12abc` starts with a digit so it parses as 12; `-5` starts with a
    // dash so it is a word and reports as unknown.
    let (out, err) = session("12abc -5\n");
    assert_eq!(out, ">> => 12\n>> ");
    assert_eq!(err, "Error: Unknown word: `-5'.\n");
}

#[test]
fn no_trailing_newline_still_executes_the_last_token() {
    let (out, err) = session("1 2 +");
    assert_eq!(out, ">> => 3\n");
    assert_eq!(err, "");
}

#[test]
fn errors_never_leak_into_output() {
    let (out, err) = session("drop drop foo\n");
    assert_eq!(out, ">> >> ");
    assert_eq!(err.lines().count(), 3);
    assert!(out.chars().all(|ch| ">= \n".contains(ch)));
    assert!(err.lines().all(|l| l.starts_with("Error: ")));
}
