//! Property tests for the token stream contract.
//!
//! - Lossless: token texts concatenate back to the input
//! - Contiguous: each token starts where the previous one ended
//! - Non-empty: no zero-length tokens
//! - Deterministic: scanning twice gives the same stream
//! - Never fails on any `&str` with the built-in rule tables

use alba_lexer_core::{scan, tokenize, LexicalState, Token, TokenKind};
use proptest::prelude::*;

/// Inputs biased toward the characters that drive state changes.
fn alba_like() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            Just("{:".to_string()),
            Just(":}".to_string()),
            Just("--".to_string()),
            Just("\n".to_string()),
            Just("\r\n".to_string()),
            Just(" ".to_string()),
            Just(":".to_string()),
            Just("}".to_string()),
            Just("{".to_string()),
            Just("class".to_string()),
            Just("obejct".to_string()),
            Just("x_1".to_string()),
            Just("42".to_string()),
            Just("\u{3bb}".to_string()),
            "[a-zA-Z0-9_+*/=~\\\\@.-]{1,4}",
        ],
        0..64,
    )
    .prop_map(|parts| parts.concat())
}

fn check_stream(source: &str, tokens: &[Token<'_>]) -> Result<(), TestCaseError> {
    let rebuilt: String = tokens.iter().map(|t| t.text).collect();
    prop_assert_eq!(&rebuilt, source);

    let mut expected_start = 0u32;
    for token in tokens {
        prop_assert!(!token.is_empty(), "empty token {:?}", token);
        prop_assert_eq!(token.start(), expected_start);
        prop_assert_eq!(token.text, &source[token.span.to_range()]);
        expected_start = token.end();
    }
    prop_assert_eq!(expected_start as usize, source.len());
    Ok(())
}

proptest! {
    #[test]
    fn lossless_for_arbitrary_text(source in any::<String>()) {
        let tokens = tokenize(&source);
        prop_assert!(tokens.is_ok(), "scan failed: {:?}", tokens);
        check_stream(&source, &tokens.unwrap_or_default())?;
    }

    #[test]
    fn lossless_for_alba_like_text(source in alba_like()) {
        let tokens = tokenize(&source);
        prop_assert!(tokens.is_ok(), "scan failed: {:?}", tokens);
        check_stream(&source, &tokens.unwrap_or_default())?;
    }

    #[test]
    fn deterministic(source in alba_like()) {
        prop_assert_eq!(tokenize(&source), tokenize(&source));
    }

    #[test]
    fn adjacent_tokens_never_share_a_coalesced_kind_inside_comments(source in alba_like()) {
        let tokens = tokenize(&source).unwrap_or_default();
        for pair in tokens.windows(2) {
            let merged_runs = pair[0].kind == TokenKind::CommentBlock
                && pair[1].kind == TokenKind::CommentBlock
                && !pair[1].text.starts_with("{:");
            prop_assert!(!merged_runs, "split comment run: {:?}", pair);
        }
    }

    #[test]
    fn stack_is_root_after_exhaustion(source in alba_like()) {
        let mut tokens = scan(&source);
        for token in tokens.by_ref() {
            prop_assert!(token.is_ok());
        }
        prop_assert_eq!(tokens.depth(), 1);
        prop_assert_eq!(tokens.state(), LexicalState::Root);
    }

    #[test]
    fn whole_words_from_keyword_list_are_keywords(
        idx in 0usize..alba_lexer_core::KEYWORDS.len(),
        sep in prop_oneof![Just(" "), Just("\n"), Just("+"), Just("(")],
    ) {
        let kw = alba_lexer_core::KEYWORDS[idx];
        let source = format!("{sep}{kw}{sep}");
        let tokens = tokenize(&source).unwrap_or_default();
        let keyword = tokens.iter().find(|t| t.kind == TokenKind::Keyword);
        prop_assert_eq!(keyword.map(|t| t.text), Some(kw));
    }
}
