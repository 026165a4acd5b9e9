//! Property-based tests for the escape tokenizer
//!
//! These tests use proptest to generate random inputs and check the
//! tokenizer's structural guarantees.

use ansiscroll::{tokenize, Token};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_tokenizer_doesnt_panic_on_random_input(s in "\\PC*") {
        let _ = tokenize(&s);
    }

    #[test]
    fn test_plain_strings_are_one_content_token(s in "[^\x1b]{1,200}") {
        let tokens = tokenize(&s).unwrap();
        prop_assert_eq!(tokens, vec![Token::Content(s)]);
    }

    #[test]
    fn test_sgr_params_round_out(params in prop::collection::vec(0u16..=u16::MAX, 1..8)) {
        let body: Vec<String> = params.iter().map(u16::to_string).collect();
        let input = format!("\x1b[{}m", body.join(";"));
        let tokens = tokenize(&input).unwrap();
        prop_assert_eq!(tokens, vec![Token::Sgr(params)]);
    }

    #[test]
    fn test_any_digit_run_tokenizes(digits in "[0-9]{1,30}") {
        let tokens = tokenize(&format!("\x1b[{}mx", digits)).unwrap();
        prop_assert_eq!(tokens.len(), 2);
        prop_assert!(tokens[0].is_sgr());
    }

    #[test]
    fn test_content_is_preserved(
        pieces in prop::collection::vec(("[a-zA-Z0-9 ]{0,20}", 0u16..110), 0..10),
    ) {
        let mut input = String::new();
        let mut expected = String::new();
        for (text, code) in &pieces {
            input.push_str(text);
            input.push_str(&format!("\x1b[{}m", code));
            expected.push_str(text);
        }

        let tokens = tokenize(&input).unwrap();
        let text: String = tokens
            .iter()
            .filter_map(|t| match t {
                Token::Content(s) => Some(s.as_str()),
                Token::Sgr(_) => None,
            })
            .collect();
        prop_assert_eq!(text, expected);
        prop_assert_eq!(tokens.iter().filter(|t| t.is_sgr()).count(), pieces.len());
    }

    #[test]
    fn test_content_tokens_never_empty_or_escaped(s in "[a-z\x1b\\[0-9;m]{0,60}") {
        if let Ok(tokens) = tokenize(&s) {
            for token in tokens {
                if let Token::Content(text) = token {
                    prop_assert!(!text.is_empty());
                    prop_assert!(!text.contains('\x1b'));
                }
            }
        }
    }

    #[test]
    fn test_unterminated_sequences_fail(
        prefix in "[a-zA-Z ]{0,20}",
        junk in "([0-9]{0,4};){0,4}[0-9]{0,4}",
    ) {
        let input = format!("{}\x1b[{}", prefix, junk);
        let err = tokenize(&input).unwrap_err();
        prop_assert_eq!(err.position, input.len());
    }

    #[test]
    fn test_non_sgr_final_bytes_fail(
        params in "[0-9;]{0,10}",
        final_byte in "[A-Za-ln-z@]",
    ) {
        let input = format!("\x1b[{}{}", params, final_byte);
        prop_assert!(tokenize(&input).is_err());
    }
}
