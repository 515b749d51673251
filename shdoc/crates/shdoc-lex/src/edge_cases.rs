//! Edge case tests for the lexer: degenerate inputs, missing
//! terminators, malformed grammars, and the totality guarantees.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use shdoc_util::Handler;

    use crate::lexer::{Lexer, LexerRules};
    use crate::lines::Stream;
    use crate::patterns::PatternSequence;
    use crate::token::TokenKind;

    fn lex_all(source: &str) -> Vec<TokenKind> {
        let handler = Handler::new();
        let mut lexer = Lexer::new(Stream::in_memory("test", source), &handler).unwrap();
        let kinds: Vec<_> = lexer.tokens().map(|t| t.kind).collect();
        assert!(!handler.has_errors(), "unexpected diagnostics");
        kinds
    }

    #[test]
    fn test_empty_source() {
        assert_eq!(lex_all(""), vec![]);
    }

    #[test]
    fn test_whitespace_only_source() {
        assert_eq!(lex_all("   \n \n\t\n"), vec![]);
    }

    #[test]
    fn test_comment_without_terminator_still_gets_eol() {
        assert_eq!(
            lex_all("# foo"),
            vec![
                TokenKind::Indent(2),
                TokenKind::Word("foo".into()),
                TokenKind::Eol,
            ]
        );
    }

    #[test]
    fn test_bare_marker() {
        assert_eq!(lex_all("#"), vec![TokenKind::Eol]);
    }

    #[test]
    fn test_marker_glued_to_text_is_not_a_directive() {
        assert_eq!(
            lex_all("#@foo\n"),
            vec![
                TokenKind::Indent(1),
                TokenKind::Word("@foo".into()),
                TokenKind::Eol,
            ]
        );
    }

    #[test]
    fn test_blank_lines_do_not_affect_indentation() {
        assert_eq!(lex_all("a\n\n  b\n"), vec![TokenKind::Indent(2)]);
    }

    #[test]
    fn test_code_without_terminator() {
        assert_eq!(lex_all("f()"), vec![TokenKind::Func("f".into())]);
    }

    #[test]
    fn test_unmatchable_line_becomes_invalid_token() {
        // a code-line table with no catch-all cannot consume plain code
        let mut rules = LexerRules::new().unwrap();
        rules.code_line = PatternSequence::new([(
            crate::lexer::rules::FUNC,
            r"function[ \t]+(?P<name>[-a-zA-Z0-9_:.]+).*\n?",
        )])
        .unwrap();

        let handler = Handler::new();
        let mut lexer = Lexer::with_rules(Stream::in_memory("test", "xyz\n"), rules, &handler);
        let kinds: Vec<_> = lexer.tokens().map(|t| t.kind).collect();

        assert_eq!(
            kinds,
            vec![TokenKind::Invalid(
                "test:1:1: no rule matches here".into()
            )]
        );
        assert!(handler.has_errors());
    }

    #[test]
    fn test_zero_width_grammar_is_reported_as_stall() {
        // this start-of-line table matches zero characters of "x" and
        // produces no token, so the machine would spin in place
        let mut rules = LexerRules::new().unwrap();
        rules.start_of_line =
            PatternSequence::new([(crate::lexer::rules::BLANK_LINE, r"[^\S\n]*")]).unwrap();

        let handler = Handler::new();
        let mut lexer = Lexer::with_rules(Stream::in_memory("test", "x\n"), rules, &handler);
        let kinds: Vec<_> = lexer.tokens().map(|t| t.kind).collect();

        assert_eq!(
            kinds,
            vec![TokenKind::Invalid(
                "test:1:1: lexer made no progress".into()
            )]
        );
        assert!(handler.has_errors());
    }

    fn expected_indentation(widths: &[usize]) -> Vec<TokenKind> {
        let mut stack = vec![0usize];
        let mut out = Vec::new();
        for &w in widths {
            while w < *stack.last().unwrap() {
                stack.pop();
                out.push(TokenKind::Dedent(*stack.last().unwrap()));
            }
            if w > *stack.last().unwrap() {
                stack.push(w);
                out.push(TokenKind::Indent(w));
            }
        }
        out
    }

    proptest! {
        #[test]
        fn indentation_tokens_follow_the_stack_discipline(
            widths in proptest::collection::vec(0usize..8, 0..10)
        ) {
            let mut source = String::new();
            for &w in &widths {
                source.push_str(&" ".repeat(w));
                source.push_str("x\n");
            }
            source.push_str("y\n");

            let mut all = widths.clone();
            all.push(0);

            prop_assert_eq!(lex_all(&source), expected_indentation(&all));
        }
    }
}
