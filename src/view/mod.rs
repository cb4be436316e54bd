//! Terminal rendering of the memory model
//!
//! Drivers that host the interpreter in a TUI can draw the current memory state
//! with [`render_memory_pane`]. The pane follows the usual layout: a bordered
//! list whose border is highlighted when focused, with the item window kept in
//! a caller-owned [`MemoryScrollState`].

pub mod memory_pane;
pub mod theme;

pub use memory_pane::{render_memory_pane, MemoryRenderData, MemoryScrollState};
