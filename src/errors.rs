//! Error types for the memory model
//!
//! This module defines [`MemoryError`], the contract violations the memory model
//! detects. None of them describe a modeled language behavior (reading an
//! uninitialized slot is not an error); each one means the evaluator driving the
//! model broke an invariant that an earlier stage should have guaranteed.
//!
//! All memory errors are fatal - the evaluator propagates them and halts the run.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryError {
    /// Name not bound in the current frame's scope chain nor the global scope
    UnresolvedName { name: String },

    /// Block or call exit requested with an empty call stack
    NoActiveFrame { operation: &'static str },

    /// `leave_block` at a frame's base scope
    ScopeUnderflow { frame: String },

    /// Call depth exceeded the configured limit
    StackOverflow { depth: usize, limit: usize },
}

impl fmt::Display for MemoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryError::UnresolvedName { name } => {
                write!(f, "Failed to find '{}' in the current scope", name)
            }
            MemoryError::NoActiveFrame { operation } => {
                write!(f, "Cannot {}: no active stack frame", operation)
            }
            MemoryError::ScopeUnderflow { frame } => {
                write!(
                    f,
                    "Cannot leave block: frame '{}' is already at its base scope",
                    frame
                )
            }
            MemoryError::StackOverflow { depth, limit } => {
                write!(
                    f,
                    "Stack overflow: call depth {} exceeds limit of {}",
                    depth, limit
                )
            }
        }
    }
}

impl std::error::Error for MemoryError {}
