// Constants for the memory model

/// Starting address for variable storage
/// Addresses start at 1_000_000 and only ever grow
pub const STACK_ADDRESS_START: u64 = 1_000_000;

/// Display name of the global scope
pub const GLOBAL_SCOPE_NAME: &str = "global_scope";

/// Size of any pointer type, regardless of pointee
pub const POINTER_SIZE: usize = 8;
