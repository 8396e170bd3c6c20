//! Deterministic hash-based identity for native declarations.
//!
//! This module provides [`TypeHash`], a 64-bit hash identifying classes, enums,
//! constructors, and methods. Hashes are computed deterministically from names
//! and signatures, so identity is stable across regenerations and independent
//! of registration order:
//!
//! - Same declaration = same hash, run after run
//! - Forward references to bases work before the base is registered
//! - Overloads get distinct hashes because parameter types participate
//!
//! # Hash Computation
//!
//! Uses XXHash64 with domain-specific mixing constants so that a class, an enum,
//! and a method sharing the same name never collide.
//!
//! # Examples
//!
//! ```
//! use clrbridge_core::TypeHash;
//!
//! let a = TypeHash::from_name("Aklass");
//! let b = TypeHash::from_name("Aklass");
//! assert_eq!(a, b);  // Deterministic
//!
//! let m1 = TypeHash::from_method(a, "getNext", &[TypeHash::from_name("int").0], false);
//! let m2 = TypeHash::from_method(a, "getNext", &[], false);
//! assert_ne!(m1, m2);  // Overloads are distinct
//! ```

use std::fmt;
use xxhash_rust::xxh64::xxh64;

/// Domain-specific mixing constants for hash computation.
///
/// Each declaration kind gets its own constant so that entities of different
/// kinds never collide even when they share a name.
pub mod hash_constants {
    /// Separator constant folded in between signature components.
    pub const SEP: u64 = 0x4bc94d6bd06053ad;

    /// Domain marker for class and enum type hashes.
    pub const TYPE: u64 = 0x2fac10b63a6cc57c;

    /// Domain marker for instance method hashes.
    pub const METHOD: u64 = 0x7d3c8b4a92e15f6d;

    /// Domain marker for constructor hashes.
    pub const CONSTRUCTOR: u64 = 0x9a7f3d5e2b8c4601;

    /// Domain marker for enum value hashes.
    pub const ENUM_VALUE: u64 = 0x1a095090689d4647;

    /// Parameter position mixing constants.
    /// Each position gets a unique constant so that parameter order matters.
    pub const PARAM_MARKERS: [u64; 8] = [
        0x9e3779b97f4a7c15,
        0xbf58476d1ce4e5b9,
        0x94d049bb133111eb,
        0xd6e8feb86659fd93,
        0xe7037ed1a0b428db,
        0xc6a4a7935bd1e995,
        0x8648dbbc94d49b8d,
        0xa2b48b2c69e0d657,
    ];

    /// Mixing constant for the i-th parameter position.
    #[inline]
    pub fn param_marker(i: usize) -> u64 {
        PARAM_MARKERS
            .get(i)
            .copied()
            .unwrap_or_else(|| PARAM_MARKERS[0].wrapping_add(i as u64))
    }
}

/// A deterministic 64-bit hash identifying a class, enum, constructor, or method.
///
/// Computed from the declaration name (for types) or owner + name + signature
/// (for members). The same input always produces the same hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct TypeHash(pub u64);

impl TypeHash {
    /// Empty/invalid hash constant.
    pub const EMPTY: TypeHash = TypeHash(0);

    /// Create a type hash from a class or enum name.
    ///
    /// The same name always produces the same hash.
    #[inline]
    pub fn from_name(name: &str) -> Self {
        TypeHash(hash_constants::TYPE ^ xxh64(name.as_bytes(), 0))
    }

    /// Create a method hash from owner type, method name, parameter signature
    /// hashes, and constness.
    ///
    /// Parameter order matters: `(int, double)` hashes differently from
    /// `(double, int)`. Constness participates so `f()` and `f() const`
    /// stay distinct.
    #[inline]
    pub fn from_method(owner: TypeHash, name: &str, param_sig_hashes: &[u64], is_const: bool) -> Self {
        let const_bit = if is_const { 0x1 } else { 0x0 };
        let mut hash = hash_constants::METHOD ^ owner.0 ^ xxh64(name.as_bytes(), 0) ^ const_bit;
        for (i, param) in param_sig_hashes.iter().enumerate() {
            // wrapping_mul keeps the fold non-commutative so order matters
            hash = hash
                .wrapping_mul(hash_constants::SEP)
                .wrapping_add(hash_constants::param_marker(i) ^ param);
        }
        TypeHash(hash)
    }

    /// Create a constructor hash from owner type and parameter signature hashes.
    ///
    /// Constructors have no name, so they are identified by owner + params.
    #[inline]
    pub fn from_constructor(owner: TypeHash, param_sig_hashes: &[u64]) -> Self {
        let mut hash = hash_constants::CONSTRUCTOR ^ owner.0;
        for (i, param) in param_sig_hashes.iter().enumerate() {
            hash = hash
                .wrapping_mul(hash_constants::SEP)
                .wrapping_add(hash_constants::param_marker(i) ^ param);
        }
        TypeHash(hash)
    }

    /// Create an enum value hash from the owning enum and the value name.
    #[inline]
    pub fn from_enum_value(owner: TypeHash, name: &str) -> Self {
        TypeHash(hash_constants::ENUM_VALUE ^ owner.0 ^ xxh64(name.as_bytes(), 0))
    }

    /// Check if this is an empty/invalid hash.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying u64 value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeHash({:#018x})", self.0)
    }
}

impl fmt::Display for TypeHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_hash_is_deterministic() {
        assert_eq!(TypeHash::from_name("Aklass"), TypeHash::from_name("Aklass"));
        assert_ne!(TypeHash::from_name("Aklass"), TypeHash::from_name("Bklass"));
    }

    #[test]
    fn method_overloads_are_distinct() {
        let owner = TypeHash::from_name("A_second");
        let int_sig = TypeHash::from_name("int").0;

        let with_arg = TypeHash::from_method(owner, "getNext", &[int_sig], false);
        let without_arg = TypeHash::from_method(owner, "getNext", &[], false);
        assert_ne!(with_arg, without_arg);
    }

    #[test]
    fn method_param_order_matters() {
        let owner = TypeHash::from_name("Widget");
        let a = TypeHash::from_name("int").0;
        let b = TypeHash::from_name("double").0;

        let ab = TypeHash::from_method(owner, "set", &[a, b], false);
        let ba = TypeHash::from_method(owner, "set", &[b, a], false);
        assert_ne!(ab, ba);
    }

    #[test]
    fn const_method_is_distinct() {
        let owner = TypeHash::from_name("MZProvider");
        let plain = TypeHash::from_method(owner, "getMZ", &[], false);
        let konst = TypeHash::from_method(owner, "getMZ", &[], true);
        assert_ne!(plain, konst);
    }

    #[test]
    fn constructor_hash_includes_owner_and_params() {
        let a = TypeHash::from_name("Aklass");
        let b = TypeHash::from_name("A_second");
        let int_sig = TypeHash::from_name("int").0;

        assert_ne!(
            TypeHash::from_constructor(a, &[int_sig]),
            TypeHash::from_constructor(b, &[int_sig])
        );
        assert_ne!(
            TypeHash::from_constructor(a, &[int_sig]),
            TypeHash::from_constructor(a, &[])
        );
    }

    #[test]
    fn method_and_type_never_collide() {
        // Same name in different domains must produce different hashes.
        let owner = TypeHash::from_name("Owner");
        let as_type = TypeHash::from_name("value");
        let as_method = TypeHash::from_method(owner, "value", &[], false);
        assert_ne!(as_type, as_method);
    }

    #[test]
    fn empty_hash() {
        assert!(TypeHash::EMPTY.is_empty());
        assert!(!TypeHash::from_name("Aklass").is_empty());
    }
}
