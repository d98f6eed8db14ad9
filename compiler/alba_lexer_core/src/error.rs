//! Scanner errors.
//!
//! Every error here aborts the scan that raised it. Unterminated block
//! comments are not errors: the scanner flushes the open comment and stops.

use crate::LexicalState;

#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum LexError {
    /// No rule of `state` matched at `offset`.
    ///
    /// Every built-in state ends in a single-character fallback rule, so this
    /// only fires for a rule table that lost its fallback.
    #[error("no rule of state {state} matches at byte {offset}")]
    Stuck { offset: u32, state: LexicalState },

    /// A rule tried to pop the root state off the stack.
    #[error("state stack underflow at byte {offset}")]
    StackUnderflow { offset: u32 },

    /// The source does not fit in `u32` byte offsets.
    #[error("source is {len} bytes, larger than the {max} byte limit", max = u32::MAX)]
    SourceTooLarge { len: usize },
}

impl LexError {
    /// Byte offset the error refers to, if it has one.
    pub fn offset(&self) -> Option<u32> {
        match self {
            LexError::Stuck { offset, .. } | LexError::StackUnderflow { offset } => Some(*offset),
            LexError::SourceTooLarge { .. } => None,
        }
    }
}
