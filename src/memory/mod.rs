//! Memory model for the C interpreter
//!
//! This module provides the core memory abstractions:
//! - [`value`]: Runtime value representation and type classification
//! - [`raw`]: Bump allocator and the address → value table
//! - [`scope`]: Single-level name → address tables
//! - [`stack`]: Call stack with frames and their nested scopes
//!
//! [`Memory`] ties them together. Names are resolved to addresses through the
//! scope chain of the current frame, falling back to the global scope, and
//! values live in raw storage keyed by address. Keeping the two maps apart
//! mirrors a real machine, where symbol binding and memory contents are
//! independent.
//!
//! # Resolution Order
//!
//! ```text
//! innermost block → ... → frame base scope → global scope
//! ```
//!
//! The global scope is consulted only after the whole current frame chain has
//! been exhausted, and caller frames are never consulted at all.

pub mod raw;
pub mod scope;
pub mod stack;
pub mod value;

use crate::constants::{GLOBAL_SCOPE_NAME, STACK_ADDRESS_START};
use crate::errors::MemoryError;
use crate::types::{CTypes, TypeSystem};
use raw::{BumpAllocator, RawStorage};
use scope::Scope;
use stack::{CallStack, Frame};
use std::fmt;
use tracing::{debug, trace, warn};
use value::{Address, Value};

/// Construction-time settings for [`Memory`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryConfig {
    /// First address handed out by the allocator.
    ///
    /// Declarations advance from here by at least one unit each; allocating
    /// past `u64::MAX` panics, so leave room above the start.
    pub start_address: Address,
    /// Maximum number of simultaneously active frames, `None` for unbounded
    pub max_call_depth: Option<usize>,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        MemoryConfig {
            start_address: STACK_ADDRESS_START,
            max_call_depth: None,
        }
    }
}

/// The simulated program memory
#[derive(Debug, Clone)]
pub struct Memory<T: TypeSystem = CTypes> {
    types: T,
    config: MemoryConfig,
    global_scope: Scope,
    stack: CallStack,
    raw: RawStorage,
    allocator: BumpAllocator,
}

impl Default for Memory<CTypes> {
    fn default() -> Self {
        Memory::new(CTypes::new())
    }
}

impl<T: TypeSystem> Memory<T> {
    pub fn new(types: T) -> Self {
        Self::with_config(types, MemoryConfig::default())
    }

    pub fn with_config(types: T, config: MemoryConfig) -> Self {
        Memory {
            types,
            global_scope: Scope::new(GLOBAL_SCOPE_NAME, None),
            stack: CallStack::new(),
            raw: RawStorage::new(),
            allocator: BumpAllocator::new(config.start_address),
            config,
        }
    }

    /// Reserve space for a variable in the active scope and store its typed default
    pub fn declare(&mut self, type_name: &str, var_name: &str) -> Address {
        let info = self.types.resolve(type_name);
        let addr = self.allocator.allocate(info.size);
        let default = self.types.default_value(&info);

        let scope = match self.stack.current_frame_mut() {
            Some(frame) => frame.current_scope_mut(),
            None => &mut self.global_scope,
        };
        scope.bind(var_name, addr);
        trace!(
            scope = scope.name(),
            var = var_name,
            ty = type_name,
            kind = ?info.kind,
            address = addr,
            "declare"
        );

        self.raw.store(addr, default);
        addr
    }

    /// Find the scope that binds `name`
    pub fn resolve_scope(&self, name: &str) -> Result<&Scope, MemoryError> {
        let local = self
            .stack
            .current_frame()
            .and_then(|frame| frame.resolve(name));
        if let Some(scope) = local {
            return Ok(scope);
        }
        if self.global_scope.contains(name) {
            return Ok(&self.global_scope);
        }
        // Semantic analysis guarantees every referenced name was declared
        warn!(name, depth = self.stack.depth(), "unresolved name");
        Err(MemoryError::UnresolvedName {
            name: name.to_string(),
        })
    }

    pub fn resolve_address(&self, name: &str) -> Result<Address, MemoryError> {
        let local = self
            .stack
            .current_frame()
            .and_then(|frame| frame.resolve_address(name));
        if let Some(addr) = local.or_else(|| self.global_scope.resolve_local(name)) {
            return Ok(addr);
        }
        // Semantic analysis guarantees every referenced name was declared
        warn!(name, depth = self.stack.depth(), "unresolved name");
        Err(MemoryError::UnresolvedName {
            name: name.to_string(),
        })
    }

    /// Non-fatal check whether `name` is visible from the current position
    pub fn is_declared(&self, name: &str) -> bool {
        self.stack
            .current_frame()
            .is_some_and(|frame| frame.resolve(name).is_some())
            || self.global_scope.contains(name)
    }

    pub fn read(&mut self, name: &str) -> Result<&Value, MemoryError> {
        let addr = self.resolve_address(name)?;
        Ok(self.read_at(addr))
    }

    pub fn write(&mut self, name: &str, value: Value) -> Result<(), MemoryError> {
        let addr = self.resolve_address(name)?;
        self.write_at(addr, value);
        Ok(())
    }

    /// Read an address; a never-written address yields a stable garbage value
    pub fn read_at(&mut self, addr: Address) -> &Value {
        let types = &self.types;
        let (value, created) = self.raw.get_or_insert_with(addr, || types.garbage());
        if created {
            trace!(address = addr, "uninitialized read");
        }
        value
    }

    pub fn write_at(&mut self, addr: Address, value: Value) {
        self.raw.store(addr, value);
    }

    /// Look at an address without materializing it
    pub fn raw_value(&self, addr: Address) -> Option<&Value> {
        self.raw.peek(addr)
    }

    /// Push a fresh frame for a function call
    pub fn enter_call(&mut self, name: &str) -> Result<(), MemoryError> {
        if let Some(limit) = self.config.max_call_depth {
            let depth = self.stack.depth() + 1;
            if depth > limit {
                warn!(function = name, depth, limit, "call depth limit reached");
                return Err(MemoryError::StackOverflow { depth, limit });
            }
        }
        self.stack.push_frame(name);
        debug!(function = name, depth = self.stack.depth(), "enter call");
        Ok(())
    }

    /// Pop the current frame together with every scope it owns
    pub fn leave_call(&mut self) -> Result<(), MemoryError> {
        match self.stack.pop_frame() {
            Some(frame) => {
                debug!(function = frame.name(), depth = self.stack.depth(), "leave call");
                Ok(())
            }
            None => {
                warn!("leave_call with empty call stack");
                Err(MemoryError::NoActiveFrame {
                    operation: "leave call",
                })
            }
        }
    }

    pub fn enter_block(&mut self) -> Result<(), MemoryError> {
        let frame = self.frame_for("enter block")?;
        frame.enter_block();
        debug!(scope = frame.current_scope().name(), "enter block");
        Ok(())
    }

    pub fn leave_block(&mut self) -> Result<(), MemoryError> {
        let frame = self.frame_for("leave block")?;
        if let Err(err) = frame.leave_block() {
            warn!(%err, "unpaired block exit");
            return Err(err);
        }
        debug!(scope = frame.current_scope().name(), "leave block");
        Ok(())
    }

    fn frame_for(&mut self, operation: &'static str) -> Result<&mut Frame, MemoryError> {
        match self.stack.current_frame_mut() {
            Some(frame) => Ok(frame),
            None => {
                warn!(operation, "no active stack frame");
                Err(MemoryError::NoActiveFrame { operation })
            }
        }
    }

    pub fn global_scope(&self) -> &Scope {
        &self.global_scope
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.stack
    }

    /// Number of active frames
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn next_free_address(&self) -> Address {
        self.allocator.next_address()
    }

    pub fn types(&self) -> &T {
        &self.types
    }

    pub fn types_mut(&mut self) -> &mut T {
        &mut self.types
    }

    pub fn config(&self) -> &MemoryConfig {
        &self.config
    }
}

impl<T: TypeSystem> fmt::Display for Memory<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nStack\n{}\n{}",
            self.global_scope,
            "=".repeat(40),
            self.stack
        )
    }
}
