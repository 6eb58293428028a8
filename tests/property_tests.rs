//! Property-based tests for the jackc front end
//!
//! These tests use proptest to check scanner and parser invariants across
//! many generated inputs, catching edge cases hand-written tests miss.

use jack_core::lang::{keywords, symbols};
use jackc::frontend::{lexer, parser};
use jackc::lexer::TokenKind;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn ident_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,8}".prop_filter("Not a keyword", |s| !keywords::is_keyword(s))
}

fn keyword_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(keywords::KEYWORDS.iter().map(|k| k.canonical).collect::<Vec<_>>())
}

fn symbol_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(symbols::SYMBOLS.iter().map(|s| s.canonical).collect::<Vec<_>>())
}

/// One lexeme paired with the kind the scanner must give it.
fn lexeme_strategy() -> impl Strategy<Value = (String, TokenKind)> {
    prop_oneof![
        ident_strategy().prop_map(|s| (s, TokenKind::Identifier)),
        keyword_strategy().prop_map(|s| (s.to_string(), TokenKind::Keyword)),
        symbol_strategy().prop_map(|s| (s.to_string(), TokenKind::Symbol)),
        "[0-9]{1,9}".prop_map(|s| (s, TokenKind::IntegerConstant)),
        "\"[a-z ]{1,6}\"".prop_map(|s| (s, TokenKind::StringConstant)),
    ]
}

// =============================================================================
// Scanner properties
// =============================================================================

proptest! {
    /// Property: scanning never fails, and every span slices back to its token text
    #[test]
    fn lexing_is_total_and_spans_match(source in any::<String>()) {
        let tokens = lexer::lex(&source).expect("scanning is total");
        for token in &tokens {
            prop_assert!(!token.text.is_empty());
            prop_assert_eq!(&source[token.span.start..token.span.end], token.text.as_str());
        }
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].span.end <= pair[1].span.start);
        }
    }

    /// Property: space-separated lexemes come back unchanged and correctly classified
    #[test]
    fn separated_lexemes_survive_lexing(lexemes in prop::collection::vec(lexeme_strategy(), 0..20)) {
        let source = lexemes.iter().map(|(text, _)| text.as_str()).collect::<Vec<_>>().join(" ");
        let tokens = lexer::lex(&source).expect("lex failed");

        prop_assert_eq!(tokens.len(), lexemes.len());
        for (token, (text, kind)) in tokens.iter().zip(&lexemes) {
            prop_assert_eq!(&token.text, text);
            prop_assert_eq!(token.kind, *kind);
        }
    }

    /// Property: re-joining scanned lexemes and scanning again is a fixed point
    #[test]
    fn relexing_is_idempotent(lexemes in prop::collection::vec(lexeme_strategy(), 0..20)) {
        let source = lexemes.iter().map(|(text, _)| text.as_str()).collect::<Vec<_>>().join("  ");
        let first = lexer::lex(&source).expect("lex failed");
        let rejoined = first.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ");
        let second = lexer::lex(&rejoined).expect("relex failed");

        let texts = |tokens: &[lexer::Token]| tokens.iter().map(|t| (t.kind, t.text.clone())).collect::<Vec<_>>();
        prop_assert_eq!(texts(first.as_slice()), texts(second.as_slice()));
    }

    /// Property: reserved words are always keywords, whatever surrounds them
    #[test]
    fn reserved_words_classify_as_keywords(word in keyword_strategy()) {
        prop_assert_eq!(TokenKind::classify(word), TokenKind::Keyword);
        let tokens = lexer::lex(&format!("( {word} )")).expect("lex failed");
        prop_assert_eq!(tokens[1].kind, TokenKind::Keyword);
    }
}

// =============================================================================
// Parser properties
// =============================================================================

proptest! {
    /// Property: the parser returns a result for any token sequence, never panics
    #[test]
    fn parser_never_panics(lexemes in prop::collection::vec(lexeme_strategy(), 0..30)) {
        let source = lexemes.iter().map(|(text, _)| text.as_str()).collect::<Vec<_>>().join(" ");
        let tokens = lexer::lex(&source).expect("lex failed");
        let _ = parser::parse(&tokens);
    }

    /// Property: a variable declaration emits every name and no commas
    #[test]
    fn var_declarations_emit_each_name(names in prop::collection::vec(ident_strategy(), 1..8)) {
        let source = format!("var int {} ;", names.join(" , "));
        let trace = jackc::analyze(&source).expect("parse failed");
        let lines: Vec<String> = trace.iter().map(|l| l.to_string()).collect();

        prop_assert_eq!(lines.len(), names.len() + 4);
        prop_assert_eq!(lines.first().map(String::as_str), Some("<varDec>"));
        prop_assert_eq!(lines.last().map(String::as_str), Some("</varDec>"));
        for (line, name) in lines[3..3 + names.len()].iter().zip(&names) {
            prop_assert_eq!(line, &format!("<identifier>{name}</identifier>"));
        }
        prop_assert!(!lines.iter().any(|l| l.contains("<symbol>,</symbol>")));
    }

    /// Property: every successful trace has balanced open and close tags
    #[test]
    fn successful_traces_are_balanced(names in prop::collection::vec(ident_strategy(), 1..5)) {
        let body: String = names.iter().map(|n| format!("method {n} {n} ( int {n} ) {{ var int {n} ; let {n} = {n} ; return ; }} ")).collect();
        let trace = jackc::analyze(&format!("class Main {{ {body} }}")).expect("parse failed");

        let mut depth: i64 = 0;
        for line in trace.iter().map(|l| l.to_string()) {
            if line.starts_with("</") {
                depth -= 1;
            } else if !line.contains("</") {
                depth += 1;
            }
            prop_assert!(depth >= 0);
        }
        prop_assert_eq!(depth, 0);
    }
}
