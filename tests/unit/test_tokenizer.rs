//! Unit tests for the escape tokenizer

use ansiscroll::{tokenize, ParseErrorKind, Token};

#[cfg(test)]
mod tokenizer_tests {
    use super::*;

    fn content(text: &str) -> Token {
        Token::Content(text.to_string())
    }

    #[test]
    fn test_plain_text_is_one_token() {
        let tokens = tokenize("Hello, World!").unwrap();
        assert_eq!(tokens, vec![content("Hello, World!")]);
    }

    #[test]
    fn test_color_codes() {
        for (code, text) in [
            (30, "Black"),
            (31, "Red"),
            (32, "Green"),
            (33, "Yellow"),
            (34, "Blue"),
            (35, "Magenta"),
            (36, "Cyan"),
            (37, "White"),
        ] {
            let input = format!("\x1b[{}m{}\x1b[0m", code, text);
            let tokens = tokenize(&input).unwrap();
            assert_eq!(
                tokens,
                vec![Token::Sgr(vec![code]), content(text), Token::Sgr(vec![0])]
            );
        }
    }

    #[test]
    fn test_mixed_message() {
        let input = "\x1b[1;31mBold Red\x1b[0m Normal \x1b[32mGreen\x1b[0m";
        let tokens = tokenize(input).unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Sgr(vec![1, 31]),
                content("Bold Red"),
                Token::Sgr(vec![0]),
                content(" Normal "),
                Token::Sgr(vec![32]),
                content("Green"),
                Token::Sgr(vec![0]),
            ]
        );
    }

    #[test]
    fn test_only_escape_codes() {
        let tokens = tokenize("\x1b[31m\x1b[0m").unwrap();
        assert!(tokens.iter().all(Token::is_sgr));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_extended_color_params_are_accepted_syntactically() {
        let tokens = tokenize("\x1b[38;5;196mx").unwrap();
        assert_eq!(tokens, vec![Token::Sgr(vec![38, 5, 196]), content("x")]);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(tokenize("\x1b[001m").unwrap(), vec![Token::Sgr(vec![1])]);
    }

    #[test]
    fn test_malformed_sequences_fail() {
        let cases = [
            ("\x1b[3p", ParseErrorKind::UnexpectedChar('p')),
            ("\x1b[31", ParseErrorKind::UnexpectedEnd),
            ("\x1b", ParseErrorKind::UnexpectedEnd),
            ("\x1bx", ParseErrorKind::MissingBracket),
            ("\x1b[1:2m", ParseErrorKind::UnexpectedChar(':')),
            ("\x1b[ 1m", ParseErrorKind::UnexpectedChar(' ')),
            ("\x1b[\x1b[m", ParseErrorKind::UnexpectedChar('\x1b')),
        ];

        for (input, kind) in cases {
            let err = tokenize(input).unwrap_err();
            assert_eq!(err.kind, kind, "input {:?}", input);
        }
    }

    #[test]
    fn test_oversized_parameter_is_not_an_error() {
        let tokens = tokenize("\x1b[70000mx").unwrap();
        assert_eq!(tokens, vec![Token::Sgr(vec![u16::MAX]), content("x")]);
    }

    #[test]
    fn test_error_message_names_position() {
        let err = tokenize("ok \x1b[2K").unwrap_err();
        assert_eq!(err.position, 6);
        assert!(err.to_string().contains("byte 6"));
    }
}
