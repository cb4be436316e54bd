//! # Introduction
//!
//! cmemsim is the runtime memory model behind a tree-walking C interpreter. It
//! keeps *name resolution* (which slot an identifier refers to under block
//! shadowing, function-local isolation and global fallback) separate from
//! *value storage* (what currently occupies that slot).
//!
//! ## Layers
//!
//! ```text
//! Evaluator → Memory → { global Scope, CallStack → Frame → Scope } → RawStorage
//! ```
//!
//! 1. [`memory`] — [`Memory`] orchestrates declarations, reads, writes and the
//!    block/call lifecycle over the scope and stack types.
//! 2. [`types`] — the [`TypeSystem`] boundary: `sizeof`, primitive set and
//!    default values, plus the stock [`CTypes`] table.
//! 3. [`errors`] — [`MemoryError`], every variant fatal for the run.
//! 4. [`view`] — ratatui pane that draws the current memory state.
//!
//! Each interpreter run owns its own [`Memory`]; there is no shared or static
//! state, so independent runs can coexist.

pub mod constants;
pub mod errors;
pub mod memory;
pub mod types;
pub mod view;

pub use errors::MemoryError;
pub use memory::value::{Address, TypeKind, Value};
pub use memory::{Memory, MemoryConfig};
pub use types::{CTypes, TypeInfo, TypeSystem};
