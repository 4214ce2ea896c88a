//! Type descriptors produced by the type-name parser
//!
//! Only what a cast target can name is modelled: scalar types, pointers,
//! arrays, tagged aggregates by name, and typedef names.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Void,

    /// Boolean type (_Bool)
    Bool,

    Char,
    SignedChar,
    UnsignedChar,

    Short,
    UnsignedShort,
    Int,
    UnsignedInt,
    Long,
    UnsignedLong,

    Pointer {
        target: Box<Type>,
    },

    /// Array type, `size` is `None` for `T[]`
    Array {
        element_type: Box<Type>,
        size: Option<u64>,
    },

    Struct(String),
    Union(String),
    Enum(String),

    /// Reference to a typedef name
    Typedef(String),
}

impl Type {
    pub fn pointer_to(target: Type) -> Self {
        Type::Pointer { target: Box::new(target) }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Bool => write!(f, "_Bool"),
            Type::Char => write!(f, "char"),
            Type::SignedChar => write!(f, "signed char"),
            Type::UnsignedChar => write!(f, "unsigned char"),
            Type::Short => write!(f, "short"),
            Type::UnsignedShort => write!(f, "unsigned short"),
            Type::Int => write!(f, "int"),
            Type::UnsignedInt => write!(f, "unsigned int"),
            Type::Long => write!(f, "long"),
            Type::UnsignedLong => write!(f, "unsigned long"),
            Type::Pointer { target } => write!(f, "{}*", target),
            Type::Array { element_type, size: Some(size) } => write!(f, "{}[{}]", element_type, size),
            Type::Array { element_type, size: None } => write!(f, "{}[]", element_type),
            Type::Struct(name) => write!(f, "struct {}", name),
            Type::Union(name) => write!(f, "union {}", name),
            Type::Enum(name) => write!(f, "enum {}", name),
            Type::Typedef(name) => write!(f, "{}", name),
        }
    }
}
