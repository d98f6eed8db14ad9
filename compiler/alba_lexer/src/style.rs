//! Token classes and the style table.
//!
//! Every [`TokenKind`] maps to a dotted class such as `Comment.Multiline`.
//! Styles are looked up by class, falling back to the parent class
//! (`Comment.Multiline` → `Comment`) and finally to the table's default.
//! Style strings are opaque to the lexer; a renderer interprets them.

use rustc_hash::FxHashMap;

use crate::TokenKind;

/// Dotted highlighter class for a token kind.
pub fn token_class(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Whitespace => "Text.Whitespace",
        TokenKind::CommentLine => "Comment.Singleline",
        TokenKind::CommentBlock => "Comment.Multiline",
        TokenKind::Keyword => "Keyword",
        TokenKind::Identifier => "Name",
        TokenKind::Number => "Number",
        TokenKind::Operator => "Operator",
        TokenKind::Other => "Text",
    }
}

/// Style strings keyed by token class.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleTable {
    default: String,
    styles: FxHashMap<String, String>,
}

impl StyleTable {
    /// An empty table with an empty default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The Alba house style.
    ///
    /// `Name.Function`, `Name.Class` and `String` have no token kind of
    /// their own today but are part of the published style.
    pub fn alba() -> Self {
        let mut table = Self::new();
        table
            .set("Comment", "italic #888")
            .set("Keyword", "bold #005")
            .set("Name", "#f00")
            .set("Name.Function", "#0f0")
            .set("Name.Class", "bold #0f0")
            .set("String", "bg:#eee #111");
        table
    }

    /// Set the style of `class`, replacing any previous entry.
    pub fn set(&mut self, class: impl Into<String>, style: impl Into<String>) -> &mut Self {
        self.styles.insert(class.into(), style.into());
        self
    }

    /// Style used when neither a class nor any of its parents has an entry.
    pub fn default_style(&self) -> &str {
        &self.default
    }

    pub fn set_default(&mut self, style: impl Into<String>) -> &mut Self {
        self.default = style.into();
        self
    }

    /// Exact entry for `class`, without parent fallback.
    pub fn get(&self, class: &str) -> Option<&str> {
        self.styles.get(class).map(String::as_str)
    }

    /// Style for `class`, walking up the dotted hierarchy.
    pub fn resolve(&self, class: &str) -> &str {
        let mut class = class;
        loop {
            if let Some(style) = self.get(class) {
                return style;
            }
            match class.rfind('.') {
                Some(dot) => class = &class[..dot],
                None => return &self.default,
            }
        }
    }

    /// Style for a token kind.
    pub fn for_kind(&self, kind: TokenKind) -> &str {
        self.resolve(token_class(kind))
    }

    /// Entries sorted by class name.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .styles
            .iter()
            .map(|(class, style)| (class.as_str(), style.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
