//! Standalone rule-table tokenizer for Alba.
//!
//! The scanner walks the source with a [`Cursor`], consults the ordered rule
//! table of the lexical state on top of its [`StateStack`], and lazily yields
//! classified [`Token`]s. Tokenization is lossless: the token texts, in order,
//! concatenate back to the input.
//!
//! ```text
//! &str ──► scan() ──► Tokens (Iterator<Item = Result<Token, LexError>>)
//!             │
//!             └── per step: rules of top state, first match wins,
//!                 emit / coalesce, push / pop
//! ```
//!
//! This crate has no `alba_*` dependencies. Language metadata, style tables
//! and host registration live in `alba_lexer`.

mod cursor;
mod error;
mod kind;
pub mod rules;
mod scanner;
mod span;
mod state;

pub use cursor::Cursor;
pub use error::LexError;
pub use kind::TokenKind;
pub use rules::{Action, Pattern, Rule, Transition, KEYWORDS};
pub use scanner::{scan, tokenize, Tokens};
pub use span::Span;
pub use state::{LexicalState, StateStack};

/// A classified slice of the input.
///
/// Tokens borrow their text from the scanned source and carry the byte
/// span they cover. They are never zero-length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, text: &'src str, span: Span) -> Self {
        debug_assert_eq!(text.len(), span.len() as usize, "token text/span mismatch");
        Token { kind, text, span }
    }

    /// Byte offset of the first byte of the token.
    #[inline]
    pub fn start(&self) -> u32 {
        self.span.start
    }

    /// Byte offset one past the last byte of the token.
    #[inline]
    pub fn end(&self) -> u32 {
        self.span.end
    }

    #[inline]
    pub fn len(&self) -> u32 {
        self.span.len()
    }

    /// Always `false` for tokens produced by the scanner.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }
}
