//! Lexical binding tables
//!
//! A [`Scope`] maps identifiers to addresses for exactly one nesting level.
//! The enclosing scope is referenced by [`ScopeId`], an index into the owning
//! frame's scope arena, so a scope never owns its parent.

use super::value::Address;
use rustc_hash::FxHashMap;
use std::fmt;

/// Index of a scope inside its frame's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(pub(crate) usize);

impl ScopeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single-level name → address table
#[derive(Debug, Clone)]
pub struct Scope {
    name: String,
    parent: Option<ScopeId>,
    addresses: FxHashMap<String, Address>,
}

impl Scope {
    pub fn new(name: impl Into<String>, parent: Option<ScopeId>) -> Self {
        Scope {
            name: name.into(),
            parent,
            addresses: FxHashMap::default(),
        }
    }

    /// Insert or overwrite a binding in this scope only
    pub fn bind(&mut self, name: impl Into<String>, addr: Address) {
        self.addresses.insert(name.into(), addr);
    }

    pub fn resolve_local(&self, name: &str) -> Option<Address> {
        self.addresses.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.addresses.contains_key(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The enclosing scope, `None` for a frame's base scope and the global scope
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    /// Bindings ordered by address, which is declaration order
    pub fn bindings(&self) -> Vec<(&str, Address)> {
        let mut entries: Vec<(&str, Address)> = self
            .addresses
            .iter()
            .map(|(name, addr)| (name.as_str(), *addr))
            .collect();
        entries.sort_by_key(|&(name, addr)| (addr, name));
        entries
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for (name, addr) in self.bindings() {
            write!(f, "\n{}:{}", name, addr)?;
        }
        Ok(())
    }
}
