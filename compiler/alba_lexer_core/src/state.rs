//! Lexical states and the scanner's state stack.
//!
//! The stack replaces recursion for nested block comments: each `{:` pushes
//! a [`LexicalState::BlockComment`], each `:}` pops one. Nesting depth is
//! therefore bounded only by memory, never by the call stack.

use std::fmt;

use smallvec::SmallVec;

use crate::rules::{Rule, BLOCK_COMMENT_RULES, ROOT_RULES};
use crate::TokenKind;

/// A scanner mode selecting which rule table is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexicalState {
    /// Initial state. The only state allowed at the bottom of the stack.
    Root,
    /// Inside a `{: ... :}` comment. Entered from `Root` or from itself.
    BlockComment,
}

impl LexicalState {
    /// The ordered rule table for this state.
    #[inline]
    pub fn rules(self) -> &'static [Rule] {
        match self {
            LexicalState::Root => ROOT_RULES,
            LexicalState::BlockComment => BLOCK_COMMENT_RULES,
        }
    }

    /// Kind that text consumed without its own token is attributed to.
    ///
    /// Delimiters (`{:`, `:}`) emit no token of their own; their bytes join
    /// the run of the comment they open or close.
    #[inline]
    pub fn run_kind(self) -> TokenKind {
        match self {
            LexicalState::Root => TokenKind::Other,
            LexicalState::BlockComment => TokenKind::CommentBlock,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            LexicalState::Root => "root",
            LexicalState::BlockComment => "block-comment",
        }
    }
}

impl fmt::Display for LexicalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stack of lexical states, top = current state.
///
/// Invariant: never empty, bottom is always [`LexicalState::Root`].
/// Eight inline slots cover realistic comment nesting without allocating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateStack {
    states: SmallVec<[LexicalState; 8]>,
}

impl StateStack {
    pub fn new() -> Self {
        let mut states = SmallVec::new();
        states.push(LexicalState::Root);
        StateStack { states }
    }

    /// The state on top of the stack.
    #[inline]
    pub fn current(&self) -> LexicalState {
        self.states
            .last()
            .copied()
            .unwrap_or(LexicalState::Root)
    }

    /// Number of states on the stack, `1` when back at root.
    #[inline]
    pub fn depth(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.states.len() == 1
    }

    #[inline]
    pub fn push(&mut self, state: LexicalState) {
        self.states.push(state);
    }

    /// Pop the current state.
    ///
    /// Returns `None` and leaves the stack untouched when only the root
    /// state remains.
    pub fn pop(&mut self) -> Option<LexicalState> {
        if self.is_root() {
            return None;
        }
        self.states.pop()
    }

    /// Drop every state above root. Returns how many were dropped.
    pub fn unwind(&mut self) -> usize {
        let dropped = self.states.len() - 1;
        self.states.truncate(1);
        dropped
    }
}

impl Default for StateStack {
    fn default() -> Self {
        Self::new()
    }
}
