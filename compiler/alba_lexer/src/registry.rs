//! Explicit, host-owned lexer registry.
//!
//! Hosts obtain a [`Lexer`] from its factory and register it themselves.
//! Names and aliases share one case-insensitive namespace; registering a
//! second lexer under a taken name is an error rather than a silent override.

use rustc_hash::FxHashMap;

use crate::language::{LanguageInfo, ALBA};
use crate::style::{token_class, StyleTable};
use crate::{LexError, StyledToken, Token, Tokens};

/// A language description paired with its scan function.
#[derive(Clone, Copy)]
pub struct Lexer {
    info: &'static LanguageInfo,
    scan: fn(&str) -> Tokens<'_>,
}

impl Lexer {
    pub fn new(info: &'static LanguageInfo, scan: fn(&str) -> Tokens<'_>) -> Self {
        Lexer { info, scan }
    }

    /// The Alba lexer.
    pub fn alba() -> Self {
        Lexer::new(&ALBA, alba_lexer_core::scan)
    }

    pub fn info(&self) -> &'static LanguageInfo {
        self.info
    }

    pub fn name(&self) -> &'static str {
        self.info.name
    }

    /// Start a fresh scan of `source`.
    pub fn scan<'src>(&self, source: &'src str) -> Tokens<'src> {
        (self.scan)(source)
    }

    /// Lex all of `source`, stopping at the first error.
    ///
    /// Runs inside a `debug` span and logs aborts, block comments that end
    /// of input closed, and the token count.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(lexer = self.name(), len = source.len())
    )]
    pub fn lex<'src>(&self, source: &'src str) -> Result<Vec<Token<'src>>, LexError> {
        let mut stream = self.scan(source);
        let mut tokens = Vec::new();
        for token in stream.by_ref() {
            match token {
                Ok(token) => tokens.push(token),
                Err(err) => {
                    tracing::debug!(%err, "scan aborted");
                    return Err(err);
                }
            }
        }
        if stream.unclosed_comments() > 0 {
            tracing::debug!(
                unclosed = stream.unclosed_comments(),
                "end of input closed open block comments"
            );
        }
        tracing::debug!(count = tokens.len(), "lexed");
        Ok(tokens)
    }

    /// Lex `source` and resolve every token's class and style in `styles`.
    pub fn highlight<'src, 'style>(
        &self,
        source: &'src str,
        styles: &'style StyleTable,
    ) -> Result<Vec<StyledToken<'src, 'style>>, LexError> {
        let tokens = self.lex(source)?;
        Ok(tokens
            .into_iter()
            .map(|token| StyledToken {
                token,
                class: token_class(token.kind),
                style: styles.for_kind(token.kind),
            })
            .collect())
    }
}

impl std::fmt::Debug for Lexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexer")
            .field("name", &self.info.name)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("a lexer is already registered under the name `{name}`")]
    NameTaken { name: String },
}

#[derive(Clone, Debug, Default)]
pub struct LexerRegistry {
    lexers: Vec<Lexer>,
    /// Lowercased name or alias → index into `lexers`.
    by_name: FxHashMap<String, usize>,
}

impl LexerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in Alba lexer.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(Lexer::alba());
        registry
    }

    /// Add a lexer. Fails without modifying the registry if any of its
    /// names is already taken.
    pub fn register(&mut self, lexer: Lexer) -> Result<(), RegistryError> {
        if let Some(taken) = lexer
            .info()
            .names()
            .find(|name| self.by_name.contains_key(&name.to_ascii_lowercase()))
        {
            return Err(RegistryError::NameTaken {
                name: taken.to_string(),
            });
        }
        self.insert(lexer);
        Ok(())
    }

    fn insert(&mut self, lexer: Lexer) {
        let index = self.lexers.len();
        for name in lexer.info().names() {
            self.by_name.insert(name.to_ascii_lowercase(), index);
        }
        tracing::debug!(name = lexer.name(), "registered lexer");
        self.lexers.push(lexer);
    }

    /// Look up by name or alias, ignoring ASCII case.
    pub fn by_name(&self, name: &str) -> Option<&Lexer> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .map(|&index| &self.lexers[index])
    }

    /// First registered lexer whose filename patterns match `path`.
    pub fn for_filename(&self, path: &str) -> Option<&Lexer> {
        self.lexers
            .iter()
            .find(|lexer| lexer.info().matches_filename(path))
    }

    pub fn for_mimetype(&self, mimetype: &str) -> Option<&Lexer> {
        self.lexers
            .iter()
            .find(|lexer| lexer.info().matches_mimetype(mimetype))
    }

    /// Registered lexers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Lexer> {
        self.lexers.iter()
    }

    pub fn len(&self) -> usize {
        self.lexers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexers.is_empty()
    }
}
