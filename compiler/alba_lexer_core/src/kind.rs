//! Token classification.

use std::fmt;

/// Classification of a token.
///
/// Closed set: every token the scanner yields carries exactly one kind.
/// `#[repr(u8)]` keeps tokens compact for hosts that store large streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    Whitespace = 0,
    /// `--` to end of line, excluding the line terminator.
    CommentLine = 1,
    /// A `{: ... :}` comment including its delimiters and nested comments.
    CommentBlock = 2,
    Keyword = 3,
    Identifier = 4,
    Number = 5,
    Operator = 6,
    /// Any single character no other rule accepts.
    Other = 7,
}

impl TokenKind {
    /// All kinds in discriminant order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::Whitespace,
        TokenKind::CommentLine,
        TokenKind::CommentBlock,
        TokenKind::Keyword,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::Other,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Whitespace => "Whitespace",
            TokenKind::CommentLine => "CommentLine",
            TokenKind::CommentBlock => "CommentBlock",
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::Operator => "Operator",
            TokenKind::Other => "Other",
        }
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self, TokenKind::CommentLine | TokenKind::CommentBlock)
    }

    /// Whitespace and comments: tokens a parser would skip.
    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::CommentLine | TokenKind::CommentBlock
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
