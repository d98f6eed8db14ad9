//! State machine driver: lazily turns source text into tokens.
//!
//! Each step looks at the state on top of the stack, runs that state's rule
//! table at the cursor, commits the first match, and applies the rule's
//! action and transition. Coalesced text (block comment content and
//! delimiters) accumulates in a pending run that is flushed when a token of
//! another kind is emitted, when the stack returns to root, or at EOF.
//!
//! # EOF inside a comment
//!
//! Reaching EOF with block comments still open is not an error. The pending
//! run is flushed as a final `CommentBlock` token and the scan ends.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::rules::{Action, Rule, Transition};
use crate::{Cursor, LexError, LexicalState, Span, StateStack, Token, TokenKind};

/// Lazily scan `source` into tokens.
///
/// Every call starts from a fresh `[Root]` stack at offset 0; nothing is
/// shared between scans.
pub fn scan(source: &str) -> Tokens<'_> {
    Tokens::new(source)
}

/// Scan all of `source`, stopping at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexError> {
    scan(source).collect()
}

/// Text awaiting coalescing into a single token.
#[derive(Clone, Copy, Debug)]
struct Run {
    kind: TokenKind,
    span: Span,
}

/// Iterator over the tokens of one source text.
///
/// Yields `Ok(token)` in source order. Yields at most one `Err`, after which
/// it is exhausted.
#[derive(Clone, Debug)]
pub struct Tokens<'src> {
    cursor: Cursor<'src>,
    stack: StateStack,
    /// Rule table lookup, [`LexicalState::rules`] outside of tests.
    table: fn(LexicalState) -> &'static [Rule],
    /// Coalesced text not yet emitted.
    run: Option<Run>,
    /// Completed tokens waiting to be yielded, in source order.
    ready: VecDeque<Token<'src>>,
    /// Error to yield once `ready` drains.
    error: Option<LexError>,
    /// Block comments still open when EOF was reached.
    unclosed: usize,
    done: bool,
}

impl<'src> Tokens<'src> {
    fn new(source: &'src str) -> Self {
        Self::with_table(source, LexicalState::rules)
    }

    fn with_table(source: &'src str, table: fn(LexicalState) -> &'static [Rule]) -> Self {
        let (cursor, error) = match u32::try_from(source.len()) {
            Ok(len) => (Cursor::new(source, len), None),
            Err(_) => (
                Cursor::new("", 0),
                Some(LexError::SourceTooLarge { len: source.len() }),
            ),
        };
        Tokens {
            cursor,
            stack: StateStack::new(),
            table,
            run: None,
            ready: VecDeque::new(),
            unclosed: 0,
            done: error.is_some(),
            error,
        }
    }

    /// Current lexical state (top of the stack).
    pub fn state(&self) -> LexicalState {
        self.stack.current()
    }

    /// Current stack depth: `1` at root, `1 + n` inside `n` nested comments.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    /// Number of block comments EOF closed implicitly.
    ///
    /// Only meaningful once the iterator is exhausted; `0` before that.
    pub fn unclosed_comments(&self) -> usize {
        self.unclosed
    }

    /// Byte offset the scanner has consumed up to.
    pub fn offset(&self) -> u32 {
        self.cursor.pos()
    }

    /// Apply one rule at the cursor. Returns `Err` when the scan must stop,
    /// before the failing rule has touched the run, the stack or the cursor.
    fn step(&mut self) -> Result<(), LexError> {
        let state = self.stack.current();
        let start = self.cursor.pos();
        let (rule, len) = first_match((self.table)(state), self.cursor)
            .ok_or(LexError::Stuck {
                offset: start,
                state,
            })?;
        if rule.transition == Transition::Pop && self.stack.is_root() {
            return Err(LexError::StackUnderflow { offset: start });
        }
        let span = Span::new(start, start + len);

        match rule.action {
            Action::Emit(kind) => {
                self.flush_run();
                let token = self.token(kind, span);
                self.ready.push_back(token);
            }
            Action::Coalesce(kind) => self.extend_run(kind, span),
            Action::Silent => {
                let kind = match rule.transition {
                    Transition::Push(next) => next.run_kind(),
                    Transition::Pop | Transition::None => state.run_kind(),
                };
                self.extend_run(kind, span);
            }
        }

        match rule.transition {
            Transition::None => {}
            Transition::Push(next) => self.stack.push(next),
            Transition::Pop => {
                self.stack.pop();
            }
        }
        self.cursor.advance_n(len);

        if self.stack.is_root() {
            self.flush_run();
        }
        Ok(())
    }

    fn extend_run(&mut self, kind: TokenKind, span: Span) {
        if let Some(run) = self.run.as_mut() {
            if run.kind == kind && run.span.end == span.start {
                run.span = run.span.extend_to(span.end);
                return;
            }
        }
        self.flush_run();
        self.run = Some(Run { kind, span });
    }

    fn flush_run(&mut self) {
        if let Some(run) = self.run.take() {
            let token = self.token(run.kind, run.span);
            self.ready.push_back(token);
        }
    }

    fn token(&self, kind: TokenKind, span: Span) -> Token<'src> {
        Token::new(kind, self.cursor.slice(span.start, span.end), span)
    }
}

/// First rule of `rules` matching at `cursor`, with its match length.
fn first_match(rules: &'static [Rule], cursor: Cursor<'_>) -> Option<(&'static Rule, u32)> {
    rules
        .iter()
        .find_map(|rule| rule.pattern.match_at(cursor).map(|len| (rule, len)))
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(token) = self.ready.pop_front() {
                return Some(Ok(token));
            }
            if let Some(err) = self.error.take() {
                return Some(Err(err));
            }
            if self.done {
                return None;
            }
            if self.cursor.is_eof() {
                // Open comments at EOF close implicitly.
                self.flush_run();
                self.unclosed = self.stack.unwind();
                self.done = true;
                continue;
            }
            if let Err(err) = self.step() {
                // Text consumed before the failing step is still yielded.
                self.flush_run();
                self.error = Some(err);
                self.done = true;
            }
        }
    }
}

impl FusedIterator for Tokens<'_> {}
