//! Runtime value representation
//!
//! This module defines the [`Value`] enum stored in raw memory. The memory model
//! never inspects a value beyond storing and returning it; the only place values
//! are created on this side of the boundary is at declaration time (typed
//! defaults) and on reads of never-written addresses.
//!
//! # Value Types
//!
//! - [`Value::Int`]: integral number tagged with its C type name
//! - [`Value::Float`]: floating-point number tagged with its C type name
//! - [`Value::Pointer`]: address of another slot (0 is null)
//! - [`Value::Null`]: placeholder for aggregate and unrecognized types

use std::fmt;

/// Memory address type (64-bit)
pub type Address = u64;

/// Classification of a declared type, resolved once by the type system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Scalar,
    Pointer,
    Aggregate,
}

/// Runtime values in raw memory
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Int { type_name: String, value: i64 },
    Float { type_name: String, value: f64 },
    Pointer { type_name: String, target: Address },
    #[default]
    Null,
}

impl Value {
    pub fn int(type_name: impl Into<String>, value: i64) -> Self {
        Value::Int {
            type_name: type_name.into(),
            value,
        }
    }

    pub fn float(type_name: impl Into<String>, value: f64) -> Self {
        Value::Float {
            type_name: type_name.into(),
            value,
        }
    }

    pub fn pointer(type_name: impl Into<String>, target: Address) -> Self {
        Value::Pointer {
            type_name: type_name.into(),
            target,
        }
    }

    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Get the float value, returns None if not a Float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Get the pointer target, returns None if not a Pointer
    pub fn as_pointer(&self) -> Option<Address> {
        match self {
            Value::Pointer { target, .. } => Some(*target),
            _ => None,
        }
    }

    /// The C type this value was created for, if it carries one
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Value::Int { type_name, .. }
            | Value::Float { type_name, .. }
            | Value::Pointer { type_name, .. } => Some(type_name),
            Value::Null => None,
        }
    }

    pub fn kind(&self) -> TypeKind {
        match self {
            Value::Int { .. } | Value::Float { .. } => TypeKind::Scalar,
            Value::Pointer { .. } => TypeKind::Pointer,
            Value::Null => TypeKind::Aggregate,
        }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, Value::Pointer { .. })
    }

    /// Check if this is the aggregate placeholder
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int { value, .. } => write!(f, "{}", value),
            Value::Float { value, .. } => write!(f, "{}", value),
            Value::Pointer { target: 0, .. } => write!(f, "NULL"),
            Value::Pointer { target, .. } => write!(f, "0x{:08x}", target),
            Value::Null => write!(f, "<aggregate>"),
        }
    }
}
