//! Alba lexer integration layer.
//!
//! Wraps the standalone scanner from `alba_lexer_core` with what a host
//! highlighter needs to use it:
//!
//! - [`LanguageInfo`] / [`ALBA`]: name, aliases, filename patterns, MIME types
//! - [`StyleTable`]: presentation hints keyed by dotted token class
//! - [`LexerRegistry`]: explicit, host-owned lookup by name, file or MIME type
//!
//! Nothing here registers itself on load. A host builds a registry (usually
//! [`LexerRegistry::with_builtin`]) and owns it.

mod language;
mod registry;
mod style;

pub use alba_lexer_core::{
    scan, tokenize, LexError, LexicalState, Span, Token, TokenKind, Tokens, KEYWORDS,
};
pub use language::{LanguageInfo, ALBA};
pub use registry::{Lexer, LexerRegistry, RegistryError};
pub use style::{token_class, StyleTable};

/// Lex a whole source text with the Alba lexer.
///
/// Same result as [`tokenize`], with the logging of [`Lexer::lex`].
pub fn lex(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    Lexer::alba().lex(source)
}

/// A token paired with its class and resolved style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledToken<'src, 'style> {
    pub token: Token<'src>,
    pub class: &'static str,
    pub style: &'style str,
}

/// Lex `source` with the Alba lexer and resolve every token's style.
pub fn highlight<'src, 'style>(
    source: &'src str,
    styles: &'style StyleTable,
) -> Result<Vec<StyledToken<'src, 'style>>, LexError> {
    Lexer::alba().highlight(source, styles)
}
