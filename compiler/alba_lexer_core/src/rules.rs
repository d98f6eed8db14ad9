//! Ordered rule tables for each lexical state.
//!
//! A state's table is tried top to bottom at the current position and the
//! **first** rule that matches wins, not the longest. Keyword-versus-
//! identifier disambiguation depends on this: the keyword rule sits above
//! the identifier rule and only accepts whole words.
//!
//! # Root
//!
//! | # | Pattern | Action | Transition |
//! |---|---------|--------|------------|
//! | 1 | whitespace run | `Whitespace` | |
//! | 2 | `--` to end of line | `CommentLine` | |
//! | 3 | `{:` | none | push `BlockComment` |
//! | 4 | keyword (whole word) | `Keyword` | |
//! | 5 | `[A-Za-z][A-Za-z0-9_]*` | `Identifier` | |
//! | 6 | `[0-9]+` | `Number` | |
//! | 7 | one of `+ * / : = ~ \ -` | `Operator` | |
//! | 8 | any character | `Other` | |
//!
//! # `BlockComment`
//!
//! | # | Pattern | Action | Transition |
//! |---|---------|--------|------------|
//! | 1 | `{:` | none | push `BlockComment` |
//! | 2 | text other than `:` / `}` | coalesce `CommentBlock` | |
//! | 3 | `:}` | none | pop |
//! | 4 | a lone `:` or `}` | coalesce `CommentBlock` | |
//!
//! Both tables end in a rule that accepts any single character, so the
//! scanner always makes progress.

use crate::{Cursor, LexicalState, TokenKind};

/// What a rule looks for at the cursor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pattern {
    /// One or more of space, `\t`, `\n`, `\x0B`, `\x0C`, `\r`.
    Whitespace,
    /// `--` followed by everything up to (not including) `\n` or `\r`.
    LineComment,
    /// An exact byte sequence.
    Literal(&'static str),
    /// A word from [`KEYWORDS`] with word boundaries on both sides.
    Keyword,
    /// An ASCII letter followed by letters, digits or `_`.
    Identifier,
    /// One or more ASCII digits.
    Digits,
    /// Exactly one byte from the set.
    OneOf(&'static [u8]),
    /// One character other than `:` or `}`, then as many more as would
    /// match one at a time before a `:`, a `}` or a `{:` opener.
    CommentText,
    /// Exactly one character.
    AnyChar,
}

/// What a matching rule produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// A standalone token of this kind.
    Emit(TokenKind),
    /// Text merged with adjacent text of the same kind into one token.
    Coalesce(TokenKind),
    /// No token of its own. The text joins the run of the state being
    /// entered (on push) or left (on pop).
    Silent,
}

/// Stack effect of a matching rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    None,
    Push(LexicalState),
    Pop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub pattern: Pattern,
    pub action: Action,
    pub transition: Transition,
}

impl Rule {
    pub const fn new(pattern: Pattern, action: Action, transition: Transition) -> Self {
        Rule {
            pattern,
            action,
            transition,
        }
    }

    const fn emit(pattern: Pattern, kind: TokenKind) -> Self {
        Rule::new(pattern, Action::Emit(kind), Transition::None)
    }
}

/// Reserved words, case-sensitive.
///
/// `obejct` is listed as-is; it has always been part of the set.
pub const KEYWORDS: [&str; 35] = [
    "abstract", "all", "and", "And", "Any", "case", "class", "do", "else", "ghost", "in", "if",
    "inspect", "Level", "let", "match", "module", "mutual", "not", "Not", "obejct", "once", "or",
    "Or", "Prop", "record", "ref", "section", "some", "TT", "then", "type", "use", "Uni", "where",
];

/// Single-character operators.
pub const OPERATORS: &[u8] = b"+*/:=~\\-";

pub const ROOT_RULES: &[Rule] = &[
    Rule::emit(Pattern::Whitespace, TokenKind::Whitespace),
    Rule::emit(Pattern::LineComment, TokenKind::CommentLine),
    Rule::new(
        Pattern::Literal("{:"),
        Action::Silent,
        Transition::Push(LexicalState::BlockComment),
    ),
    Rule::emit(Pattern::Keyword, TokenKind::Keyword),
    Rule::emit(Pattern::Identifier, TokenKind::Identifier),
    Rule::emit(Pattern::Digits, TokenKind::Number),
    Rule::emit(Pattern::OneOf(OPERATORS), TokenKind::Operator),
    Rule::emit(Pattern::AnyChar, TokenKind::Other),
];

pub const BLOCK_COMMENT_RULES: &[Rule] = &[
    Rule::new(
        Pattern::Literal("{:"),
        Action::Silent,
        Transition::Push(LexicalState::BlockComment),
    ),
    Rule::new(
        Pattern::CommentText,
        Action::Coalesce(TokenKind::CommentBlock),
        Transition::None,
    ),
    Rule::new(Pattern::Literal(":}"), Action::Silent, Transition::Pop),
    Rule::new(
        Pattern::OneOf(b":}"),
        Action::Coalesce(TokenKind::CommentBlock),
        Transition::None,
    ),
];

impl Pattern {
    /// Length in bytes of the match starting exactly at `cursor`, if any.
    ///
    /// Never returns `Some(0)`.
    pub fn match_at(self, cursor: Cursor<'_>) -> Option<u32> {
        if cursor.is_eof() {
            return None;
        }
        let start = cursor.pos();
        let mut probe = cursor;
        match self {
            Pattern::Whitespace => probe.eat_while(is_whitespace),
            Pattern::LineComment => {
                if !probe.starts_with(b"--") {
                    return None;
                }
                probe.advance_n(2);
                probe.eat_until_line_end();
            }
            Pattern::Literal(lit) => {
                if !probe.starts_with(lit.as_bytes()) {
                    return None;
                }
                probe.advance_n(literal_len(lit));
            }
            Pattern::Keyword => {
                if probe.previous().is_some_and(is_word_byte) {
                    return None;
                }
                probe.eat_while(is_word_byte);
                if !is_keyword(probe.slice_from(start)) {
                    return None;
                }
            }
            Pattern::Identifier => {
                if !probe.current().is_ascii_alphabetic() {
                    return None;
                }
                probe.advance();
                probe.eat_while(is_word_byte);
            }
            Pattern::Digits => probe.eat_while(|b| b.is_ascii_digit()),
            Pattern::OneOf(set) => {
                if !set.contains(&probe.current()) {
                    return None;
                }
                probe.advance();
            }
            Pattern::CommentText => {
                if matches!(probe.current(), b':' | b'}') {
                    return None;
                }
                probe.advance_char();
                probe.eat_comment_text();
            }
            Pattern::AnyChar => probe.advance_char(),
        }
        let len = probe.pos() - start;
        (len > 0).then_some(len)
    }
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "literals are short static strings"
)]
const fn literal_len(lit: &str) -> u32 {
    lit.len() as u32
}

/// Whitespace bytes accepted by [`Pattern::Whitespace`].
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Bytes that form words for keyword boundary checks.
#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Check whether `text` is exactly one of [`KEYWORDS`].
///
/// Buckets by length first: keywords are 2 to 8 bytes long.
pub fn is_keyword(text: &str) -> bool {
    match text.len() {
        2 => matches!(text, "do" | "in" | "if" | "or" | "Or" | "TT"),
        3 => matches!(
            text,
            "all" | "and" | "And" | "Any" | "let" | "not" | "Not" | "ref" | "use" | "Uni"
        ),
        4 => matches!(
            text,
            "case" | "else" | "once" | "Prop" | "some" | "then" | "type"
        ),
        5 => matches!(text, "class" | "ghost" | "Level" | "match" | "where"),
        6 => matches!(text, "module" | "mutual" | "obejct" | "record"),
        7 => matches!(text, "inspect" | "section"),
        8 => text == "abstract",
        _ => false,
    }
}
