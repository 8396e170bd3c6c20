//! DataType - a native type reference with modifiers.
//!
//! This module provides the `DataType` structure which represents a parameter
//! or return type as it appears in a native declaration: the base type name
//! plus its modifiers (const, pointer, reference). This is distinct from
//! `TypeHash`, which only identifies the base type.
//!
//! The C++ spelling is preserved so that generation-time diagnostics can show
//! the signature the way it appears in the source header.
//!
//! # Example
//!
//! ```
//! use clrbridge_core::DataType;
//!
//! let simple = DataType::simple("int");
//! assert_eq!(simple.to_string(), "int");
//!
//! let by_const_ref = DataType::const_reference("Aklass");
//! assert_eq!(by_const_ref.to_string(), "const Aklass &");
//!
//! let raw = DataType::pointer("Aklass");
//! assert_eq!(raw.to_string(), "Aklass *");
//! ```

use std::fmt::{self, Display, Formatter};

use crate::TypeHash;

/// Indirection applied to the base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Indirection {
    /// Plain value.
    #[default]
    None,
    /// Raw pointer (`T *`).
    Pointer,
    /// Reference (`T &`).
    Reference,
}

impl Display for Indirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Indirection::None => Ok(()),
            Indirection::Pointer => write!(f, " *"),
            Indirection::Reference => write!(f, " &"),
        }
    }
}

/// A native type reference including all modifiers.
///
/// Equality compares the base type and every modifier, so `Aklass`,
/// `const Aklass &`, and `Aklass *` are three different `DataType`s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DataType {
    /// The native spelling of the base type (e.g., `int`, `Aklass`).
    pub name: String,
    /// Base type identity hash.
    pub type_hash: TypeHash,
    /// Whether the referenced value is const.
    pub is_const: bool,
    /// Pointer/reference indirection.
    pub indirection: Indirection,
}

impl DataType {
    /// Create a plain value type with no modifiers.
    pub fn simple(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            is_const: false,
            indirection: Indirection::None,
        }
    }

    /// Create a const value type.
    pub fn with_const(name: impl Into<String>) -> Self {
        let mut ty = Self::simple(name);
        ty.is_const = true;
        ty
    }

    /// Create a raw pointer type (`T *`).
    pub fn pointer(name: impl Into<String>) -> Self {
        let mut ty = Self::simple(name);
        ty.indirection = Indirection::Pointer;
        ty
    }

    /// Create a mutable reference type (`T &`).
    pub fn reference(name: impl Into<String>) -> Self {
        let mut ty = Self::simple(name);
        ty.indirection = Indirection::Reference;
        ty
    }

    /// Create a const reference type (`const T &`).
    pub fn const_reference(name: impl Into<String>) -> Self {
        let mut ty = Self::reference(name);
        ty.is_const = true;
        ty
    }

    /// The `void` return type.
    pub fn void() -> Self {
        Self::simple("void")
    }

    /// Check if this is the `void` type.
    pub fn is_void(&self) -> bool {
        self.name == "void" && self.indirection == Indirection::None
    }

    /// Signature hash folding the base type identity with the modifiers,
    /// so `f(int)` and `f(const int &)` are different signatures.
    pub fn signature_hash(&self) -> u64 {
        let modifier_bits = (self.is_const as u64)
            | (matches!(self.indirection, Indirection::Pointer) as u64) << 1
            | (matches!(self.indirection, Indirection::Reference) as u64) << 2;
        self.type_hash.0 ^ modifier_bits.wrapping_mul(crate::type_hash::hash_constants::SEP)
    }
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_const {
            write!(f, "const ")?;
        }
        write!(f, "{}{}", self.name, self.indirection)
    }
}
