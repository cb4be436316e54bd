//! Call stack implementation
//!
//! This module provides the call stack for function activations:
//! - [`CallStack`]: The call stack containing frames
//! - [`Frame`]: A single function's activation record and its nested scopes
//!
//! # Scope Arena
//!
//! Each frame stores its scopes in a small arena. The base scope sits at index 0
//! and every block entered pushes a child whose parent is the previously current
//! scope. Because block exits are paired with entries, the innermost scope is
//! always the last arena slot and leaving a block simply pops it.
//!
//! Name resolution walks parent links from the current scope and stops at the
//! base scope. It never reaches into another frame.

use super::scope::{Scope, ScopeId};
use super::value::Address;
use crate::errors::MemoryError;
use std::fmt;

/// Stack frame for a function call
#[derive(Debug, Clone)]
pub struct Frame {
    name: String,
    scopes: Vec<Scope>,
}

impl Frame {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let base = Scope::new(scope_name(&name, 0), None);
        Frame {
            name,
            scopes: vec![base],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Nesting depth of the current scope, 0 at the base scope
    pub fn depth(&self) -> usize {
        self.scopes.len() - 1
    }

    pub fn current_id(&self) -> ScopeId {
        ScopeId(self.scopes.len() - 1)
    }

    pub fn current_scope(&self) -> &Scope {
        &self.scopes[self.scopes.len() - 1]
    }

    pub fn current_scope_mut(&mut self) -> &mut Scope {
        let last = self.scopes.len() - 1;
        &mut self.scopes[last]
    }

    pub fn scope(&self, id: ScopeId) -> Option<&Scope> {
        self.scopes.get(id.0)
    }

    /// Enter a new block scope nested in the current one
    pub fn enter_block(&mut self) {
        let parent = self.current_id();
        let child = Scope::new(scope_name(&self.name, parent.0 + 1), Some(parent));
        self.scopes.push(child);
    }

    /// Exit the current block scope, dropping its bindings
    pub fn leave_block(&mut self) -> Result<(), MemoryError> {
        if self.scopes.len() == 1 {
            return Err(MemoryError::ScopeUnderflow {
                frame: self.name.clone(),
            });
        }
        self.scopes.pop();
        Ok(())
    }

    /// Find the innermost scope of this frame that binds `name`
    pub fn resolve(&self, name: &str) -> Option<&Scope> {
        let mut id = Some(self.current_id());
        while let Some(ScopeId(index)) = id {
            let scope = &self.scopes[index];
            if scope.contains(name) {
                return Some(scope);
            }
            id = scope.parent();
        }
        None
    }

    pub fn resolve_address(&self, name: &str) -> Option<Address> {
        self.resolve(name).and_then(|scope| scope.resolve_local(name))
    }

    /// Scopes from the innermost outward to the base scope
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.iter().rev()
    }
}

/// Scope display name: `<frame>.scope_NN`
fn scope_name(frame: &str, depth: usize) -> String {
    format!("{}.scope_{:02}", frame, depth)
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame: {}\n{}\n", self.name, "*".repeat(40))?;
        for (i, scope) in self.scopes().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}\n{}", scope, "-".repeat(40))?;
        }
        Ok(())
    }
}

/// The call stack
#[derive(Debug, Clone, Default)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl CallStack {
    pub fn new() -> Self {
        CallStack { frames: Vec::new() }
    }

    /// Push a new stack frame with a fresh base scope
    pub fn push_frame(&mut self, name: impl Into<String>) {
        self.frames.push(Frame::new(name));
    }

    /// Pop the top stack frame
    pub fn pop_frame(&mut self) -> Option<Frame> {
        self.frames.pop()
    }

    /// Get the current (top) frame
    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Get a mutable reference to the current frame
    pub fn current_frame_mut(&mut self) -> Option<&mut Frame> {
        self.frames.last_mut()
    }

    /// Get all frames, outermost call first
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Get the depth of the call stack
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl fmt::Display for CallStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.frames.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", frame)?;
        }
        Ok(())
    }
}
