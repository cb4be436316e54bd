//! Address allocation and raw storage
//!
//! This module provides the two halves of "memory contents" that know nothing
//! about names:
//! - [`BumpAllocator`]: a cursor over a flat address space that only advances
//! - [`RawStorage`]: the address → value table
//!
//! Addresses are never reclaimed. Advancement is strictly sequential, so ranges
//! handed out by the allocator can never overlap.

use super::value::{Address, Value};
use rustc_hash::FxHashMap;

/// Bump allocator over the simulated address space
#[derive(Debug, Clone)]
pub struct BumpAllocator {
    next_address: Address,
}

impl BumpAllocator {
    pub fn new(start: Address) -> Self {
        BumpAllocator {
            next_address: start,
        }
    }

    /// Reserve `size` units and return the first address of the range.
    ///
    /// Zero-sized requests still consume one unit so every allocation gets a
    /// distinct address.
    ///
    /// # Panics
    ///
    /// If the range would run past `u64::MAX`.
    pub fn allocate(&mut self, size: usize) -> Address {
        let addr = self.next_address;
        let step = size.max(1) as u64;
        self.next_address = addr
            .checked_add(step)
            .unwrap_or_else(|| panic!("Address space exhausted at 0x{:x}", addr));
        addr
    }

    /// The address the next allocation will return
    pub fn next_address(&self) -> Address {
        self.next_address
    }
}

/// The address → value map
#[derive(Debug, Clone, Default)]
pub struct RawStorage {
    cells: FxHashMap<Address, Value>,
}

impl RawStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditional overwrite
    pub fn store(&mut self, addr: Address, value: Value) {
        self.cells.insert(addr, value);
    }

    /// Look at a cell without creating it
    pub fn peek(&self, addr: Address) -> Option<&Value> {
        self.cells.get(&addr)
    }

    /// Return the stored value, first memoizing `default()` if the cell was never written.
    ///
    /// Returns whether the cell had to be created alongside the value.
    pub fn get_or_insert_with<F>(&mut self, addr: Address, default: F) -> (&Value, bool)
    where
        F: FnOnce() -> Value,
    {
        let mut created = false;
        let value: &Value = self.cells.entry(addr).or_insert_with(|| {
            created = true;
            default()
        });
        (value, created)
    }

    pub fn contains(&self, addr: Address) -> bool {
        self.cells.contains_key(&addr)
    }

    /// Number of cells that hold a value
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
