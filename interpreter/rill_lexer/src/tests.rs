#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use pretty_assertions::assert_eq;

fn word(text: &str) -> Value {
    Value::Word(text.to_string())
}

/// Tokenize `chunks` as successive buffers of one input stream.
fn scan(chunks: &[&str]) -> Vec<Value> {
    let mut scanner = Scanner::new();
    let mut tokens = Vec::new();
    for chunk in chunks {
        tokens.extend(scanner.feed(chunk));
    }
    tokens.extend(scanner.finish());
    tokens
}

// === Single-buffer scanning ===

#[test]
fn mixed_ints_and_words_in_order() {
    assert_eq!(
        scan(&["12 foo 34\n"]),
        vec![Value::Int(12), word("foo"), Value::Int(34)]
    );
}

#[test]
fn all_whitespace_kinds_delimit() {
    assert_eq!(
        scan(&["1 2\t3\n4 "]),
        vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
    );
}

#[test]
fn leading_and_repeated_whitespace_is_skipped() {
    assert_eq!(scan(&["   \t\n  hi   \n"]), vec![word("hi")]);
}

#[test]
fn empty_and_blank_input_yield_nothing() {
    assert_eq!(scan(&[""]), vec![]);
    assert_eq!(scan(&["  \t \n "]), vec![]);
}

#[test]
fn word_starting_with_symbol() {
    assert_eq!(scan(&["+ drop clear\n"]), vec![word("+"), word("drop"), word("clear")]);
}

#[test]
fn negative_sign_starts_a_word_not_an_int() {
    // Only a digit starts an integer token.
    assert_eq!(scan(&["-5\n"]), vec![word("-5")]);
}

#[test]
fn unterminated_final_token_is_flushed_by_finish() {
    assert_eq!(scan(&["1 2"]), vec![Value::Int(1), Value::Int(2)]);
}

#[test]
fn finish_is_idempotent() {
    let mut scanner = Scanner::new();
    let tokens: Vec<Value> = scanner.feed("abc").collect();
    assert_eq!(tokens, vec![]);
    assert_eq!(scanner.finish(), Some(word("abc")));
    assert_eq!(scanner.finish(), None);
}

// === Permissive integer parsing ===

#[test]
fn digit_led_token_with_letter_suffix_parses_numeric_prefix() {
    // A token that starts with a digit stays an int token even when later
    // characters are not digits.
    assert_eq!(scan(&["12abc\n"]), vec![Value::Int(12)]);
    assert_eq!(scan(&["7+ \n"]), vec![Value::Int(7)]);
}

#[test]
fn oversized_int_saturates() {
    assert_eq!(scan(&["99999999999999999999\n"]), vec![Value::Int(i32::MAX)]);
}

#[test]
fn int_boundaries_parse_exactly() {
    assert_eq!(scan(&["2147483647 0\n"]), vec![Value::Int(i32::MAX), Value::Int(0)]);
}

// === Buffer-boundary resumption ===

#[test]
fn token_split_across_chunks_is_reassembled() {
    assert_eq!(
        scan(&["12 f", "oo 34\n"]),
        vec![Value::Int(12), word("foo"), Value::Int(34)]
    );
}

#[test]
fn token_split_across_three_chunks() {
    assert_eq!(scan(&["ab", "cd", "ef\n"]), vec![word("abcdef")]);
}

#[test]
fn int_split_across_chunks_keeps_its_kind() {
    // The first character decides the token kind, even when the split
    // leaves only digits in one chunk and letters in the next.
    assert_eq!(scan(&["12", "34 \n"]), vec![Value::Int(1234)]);
    assert_eq!(scan(&["1", "x \n"]), vec![Value::Int(1)]);
    assert_eq!(scan(&["x", "1 \n"]), vec![word("x1")]);
}

#[test]
fn chunk_boundary_on_whitespace() {
    assert_eq!(
        scan(&["12 ", " foo\n"]),
        vec![Value::Int(12), word("foo")]
    );
    assert_eq!(
        scan(&["12", " foo\n"]),
        vec![Value::Int(12), word("foo")]
    );
}

#[test]
fn empty_chunk_between_fragments_is_harmless() {
    assert_eq!(scan(&["fo", "", "o \n"]), vec![word("foo")]);
}

#[test]
fn multibyte_word_text_survives_splitting() {
    // Delimiters are ASCII, so word text may be any UTF-8.
    assert_eq!(scan(&["héllo ", "wörld\n"]), vec![word("héllo"), word("wörld")]);
}

// === Properties ===

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_split_point_yields_the_unsplit_sequence(
            input in "[a-z0-9+ \t\n]{0,64}",
            split in 0usize..64,
        ) {
            let unsplit = scan(&[input.as_str()]);
            let cut = split.min(input.len());
            let split_scan = scan(&[&input[..cut], &input[cut..]]);
            prop_assert_eq!(split_scan, unsplit);
        }

        #[test]
        fn token_count_matches_whitespace_separated_fields(
            fields in proptest::collection::vec("[a-z]{1,6}", 0..20)
        ) {
            let input = fields.join(" ");
            let tokens = scan(&[input.as_str()]);
            prop_assert_eq!(tokens.len(), fields.len());
            for (token, field) in tokens.iter().zip(&fields) {
                prop_assert_eq!(token, &Value::Word(field.clone()));
            }
        }
    }
}
