//! Unit tests for the format engine

use ansiscroll::{apply_tokens, parse, Color, FormatMode, Style, StyledRun, Token};

#[cfg(test)]
mod format_engine_tests {
    use super::*;

    fn runs_for(input: &str) -> Vec<StyledRun> {
        parse(input, FormatMode::default()).unwrap().0
    }

    #[test]
    fn test_plain_content_uses_default_style() {
        let (runs, _) = apply_tokens(
            vec![Token::Content("text".to_string())],
            FormatMode::Enabled(Style::DEFAULT),
        );
        assert_eq!(runs, vec![StyledRun::new(Style::DEFAULT, "text")]);
    }

    #[test]
    fn test_bold_red() {
        let runs = runs_for("\x1b[1;31mx");
        assert_eq!(runs.len(), 1);
        assert!(runs[0].style.bold);
        assert_eq!(runs[0].style.foreground, Color::Red);
        assert_eq!(runs[0].style, Style::DEFAULT.apply_code(1).apply_code(31));
    }

    #[test]
    fn test_background_and_bright_colors() {
        let runs = runs_for("\x1b[41ma\x1b[95;102mb");
        assert_eq!(runs[0].style.background, Color::Red);
        assert_eq!(runs[1].style.foreground, Color::BrightMagenta);
        assert_eq!(runs[1].style.background, Color::BrightGreen);
    }

    #[test]
    fn test_bare_reset() {
        let runs = runs_for("\x1b[1;4;33mstyled\x1b[mplain");
        assert!(!runs[0].style.is_default());
        assert!(runs[1].style.is_default());
    }

    #[test]
    fn test_unknown_code_is_noop() {
        let runs = runs_for("\x1b[1m\x1b[59mx");
        assert_eq!(runs[0].style, Style::DEFAULT.apply_code(1));
    }

    #[test]
    fn test_extended_color_codes_do_nothing_special() {
        // 38 and 48 are no-ops; the trailing 5 and 1 are still read as codes
        let runs = runs_for("\x1b[38;5;1mx");
        assert!(runs[0].style.blink);
        assert!(runs[0].style.bold);
        assert_eq!(runs[0].style.foreground, Color::Default);
    }

    #[test]
    fn test_carry_over_between_calls() {
        let (_, mode) = parse("\x1b[1mA", FormatMode::default()).unwrap();
        let (runs, _) = parse("B", mode).unwrap();
        assert_eq!(runs.len(), 1);
        assert!(runs[0].style.bold);
        assert_eq!(runs[0].text, "B");
    }

    #[test]
    fn test_formatting_disabled() {
        let (runs, mode) = parse("\x1b[31mHi", FormatMode::Disabled).unwrap();
        assert_eq!(runs, vec![StyledRun::new(Style::DEFAULT, "Hi")]);
        assert_eq!(mode, FormatMode::Disabled);
    }

    #[test]
    fn test_runs_keep_parse_order() {
        let runs = runs_for("a\x1b[32mb\x1b[0mc");
        let texts: Vec<_> = runs.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }
}
