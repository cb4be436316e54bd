//! Type system interface consumed by the memory model
//!
//! The memory model needs three things from the type layer when a variable is
//! declared: how many address units the type occupies, whether it is a
//! pointer, scalar or aggregate, and the default value of that kind. These are
//! bundled behind [`TypeSystem`] and resolved once per declaration into a
//! [`TypeInfo`].
//!
//! [`CTypes`] is the stock implementation for C:
//!
//! | type                | size |
//! |---------------------|------|
//! | `char`              | 1    |
//! | `short`             | 2    |
//! | `int`, `float`      | 4    |
//! | `long`, `double`    | 8    |
//! | `long long`         | 8    |
//! | `long double`       | 16   |
//! | any `T*`            | 8    |
//! | registered struct   | as registered |
//!
//! Integral types accept `signed`/`unsigned` prefixes. Unregistered aggregate
//! names have size 0; the allocator still gives them an address of their own.

use crate::constants::POINTER_SIZE;
use crate::memory::value::{TypeKind, Value};
use rustc_hash::FxHashMap;

/// A declared type resolved at the boundary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: String,
    pub size: usize,
    pub kind: TypeKind,
}

pub trait TypeSystem {
    /// Size of the type in address units
    fn sizeof(&self, type_name: &str) -> usize;

    /// Whether the type is a member of the recognized primitive set
    fn is_primitive(&self, type_name: &str) -> bool;

    fn classify(&self, type_name: &str) -> TypeKind {
        if type_name.trim_end().ends_with('*') {
            TypeKind::Pointer
        } else if self.is_primitive(type_name) {
            TypeKind::Scalar
        } else {
            TypeKind::Aggregate
        }
    }

    fn resolve(&self, type_name: &str) -> TypeInfo {
        TypeInfo {
            name: type_name.to_string(),
            size: self.sizeof(type_name),
            kind: self.classify(type_name),
        }
    }

    /// Value stored in a freshly declared slot
    fn default_value(&self, info: &TypeInfo) -> Value {
        match info.kind {
            TypeKind::Pointer => Value::pointer(info.name.as_str(), 0),
            TypeKind::Scalar if is_floating(&info.name) => Value::float(info.name.as_str(), 0.0),
            TypeKind::Scalar => Value::int(info.name.as_str(), 0),
            TypeKind::Aggregate => Value::Null,
        }
    }

    /// Value synthesized when a never-written address is read
    fn garbage(&self) -> Value {
        Value::int("int", 0)
    }
}

fn is_floating(type_name: &str) -> bool {
    matches!(type_name, "float" | "double" | "long double")
}

/// Stock C type table
#[derive(Debug, Clone)]
pub struct CTypes {
    primitives: FxHashMap<String, usize>,
    aggregates: FxHashMap<String, usize>,
}

impl CTypes {
    pub fn new() -> Self {
        let mut primitives = FxHashMap::default();
        for (name, size) in [("char", 1), ("short", 2), ("int", 4), ("long", 8)] {
            primitives.insert(name.to_string(), size);
            primitives.insert(format!("signed {}", name), size);
            primitives.insert(format!("unsigned {}", name), size);
        }
        for name in ["long long", "signed long long", "unsigned long long"] {
            primitives.insert(name.to_string(), 8);
        }
        primitives.insert("unsigned".to_string(), 4);
        primitives.insert("float".to_string(), 4);
        primitives.insert("double".to_string(), 8);
        primitives.insert("long double".to_string(), 16);

        CTypes {
            primitives,
            aggregates: FxHashMap::default(),
        }
    }

    /// Add a name to the primitive set (e.g. a `typedef` of a scalar)
    pub fn register_primitive(&mut self, name: impl Into<String>, size: usize) {
        self.primitives.insert(name.into(), size);
    }

    /// Record the size of a struct or union
    pub fn register_aggregate(&mut self, name: impl Into<String>, size: usize) {
        self.aggregates.insert(name.into(), size);
    }
}

impl Default for CTypes {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeSystem for CTypes {
    fn sizeof(&self, type_name: &str) -> usize {
        let name = type_name.trim();
        if name.ends_with('*') {
            return POINTER_SIZE;
        }
        self.primitives
            .get(name)
            .or_else(|| self.aggregates.get(name))
            .copied()
            .unwrap_or(0)
    }

    fn is_primitive(&self, type_name: &str) -> bool {
        self.primitives.contains_key(type_name.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        let types = CTypes::new();
        assert_eq!(types.sizeof("char"), 1);
        assert_eq!(types.sizeof("int"), 4);
        assert_eq!(types.sizeof("unsigned long"), 8);
        assert_eq!(types.sizeof("double"), 8);
        assert_eq!(types.sizeof("long double"), 16);
        assert_eq!(types.sizeof("long long"), 8);
        assert_eq!(types.sizeof("unsigned long long"), 8);
        assert_eq!(types.sizeof("char*"), 8);
        assert_eq!(types.sizeof("struct Point **"), 8);
        assert_eq!(types.sizeof("struct Point"), 0);
    }

    #[test]
    fn test_registered_aggregate() {
        let mut types = CTypes::new();
        types.register_aggregate("struct Point", 8);
        let info = types.resolve("struct Point");
        assert_eq!(info.size, 8);
        assert_eq!(info.kind, TypeKind::Aggregate);
        assert_eq!(types.default_value(&info), Value::Null);
    }

    #[test]
    fn test_classify() {
        let mut types = CTypes::new();
        assert_eq!(types.classify("int"), TypeKind::Scalar);
        assert_eq!(types.classify("int*"), TypeKind::Pointer);
        assert_eq!(types.classify("foo"), TypeKind::Aggregate);

        types.register_primitive("size_t", 8);
        assert_eq!(types.classify("size_t"), TypeKind::Scalar);
        assert_eq!(types.sizeof("size_t"), 8);
    }

    #[test]
    fn test_default_values() {
        let types = CTypes::new();
        assert_eq!(
            types.default_value(&types.resolve("int*")),
            Value::pointer("int*", 0)
        );
        assert_eq!(
            types.default_value(&types.resolve("double")),
            Value::float("double", 0.0)
        );
        assert_eq!(
            types.default_value(&types.resolve("char")),
            Value::int("char", 0)
        );
        assert_eq!(
            types.default_value(&types.resolve("long double")),
            Value::float("long double", 0.0)
        );
        assert_eq!(
            types.default_value(&types.resolve("long long")),
            Value::int("long long", 0)
        );
        assert_eq!(
            types.default_value(&types.resolve("unsigned long long")),
            Value::int("unsigned long long", 0)
        );
        assert_eq!(types.garbage(), Value::int("int", 0));
    }
}
