//! ClassRegistry - storage for the parsed class model.
//!
//! This module provides [`ClassRegistry`], the central storage for all class
//! and enum declarations handed over by the parser front end. It provides
//! O(1) lookup by hash or name and preserves registration order so that every
//! downstream walk is deterministic across regenerations.
//!
//! # Thread Safety
//!
//! `ClassRegistry` is **not thread-safe** by design. Registration is a
//! single-threaded phase; after it the registry is effectively read-only for
//! the projection pass. Classes are analyzed independently once bases are
//! resolved, so a caller that wants per-class parallelism can share the
//! registry behind `Arc` after registration completes.
//!
//! # Example
//!
//! ```
//! use clrbridge_core::{ClassDecl, EnumDecl};
//! use clrbridge_projection::ClassRegistry;
//!
//! let mut registry = ClassRegistry::new();
//! registry.register_class(ClassDecl::new("RangeManager")).unwrap();
//! registry
//!     .register_enum(EnumDecl::new("testA").with_sequential_values(["AA", "AAA"]))
//!     .unwrap();
//!
//! assert!(registry.get_class("RangeManager").is_some());
//! ```

use rustc_hash::FxHashMap;

use clrbridge_core::{ClassDecl, EnumDecl, ProjectionError, TypeHash};

/// Central storage for class and enum declarations.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    /// Classes stored by type hash.
    classes: FxHashMap<TypeHash, ClassDecl>,
    /// Free-standing enums stored by type hash.
    enums: FxHashMap<TypeHash, EnumDecl>,
    /// Name index across classes and free enums, for duplicate detection
    /// and name-based lookup.
    names: FxHashMap<String, TypeHash>,
    /// Class registration order (deterministic iteration).
    class_order: Vec<TypeHash>,
    /// Enum registration order (deterministic iteration).
    enum_order: Vec<TypeHash>,
}

impl ClassRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    // ==========================================================================
    // Registration
    // ==========================================================================

    /// Register a class declaration.
    ///
    /// Rejects a name already taken by another class or enum, and rejects
    /// nested enums carrying duplicate value names.
    pub fn register_class(&mut self, class: ClassDecl) -> Result<(), ProjectionError> {
        if self.names.contains_key(&class.name) {
            return Err(ProjectionError::DuplicateType(class.name));
        }
        for nested in &class.enums {
            if let Some(dup) = nested.first_duplicate_value() {
                return Err(ProjectionError::DuplicateEnumValue {
                    enum_name: format!("{}::{}", class.name, nested.name),
                    value_name: dup.to_string(),
                });
            }
        }
        self.names.insert(class.name.clone(), class.type_hash);
        self.class_order.push(class.type_hash);
        self.classes.insert(class.type_hash, class);
        Ok(())
    }

    /// Register a free-standing enum declaration.
    pub fn register_enum(&mut self, decl: EnumDecl) -> Result<(), ProjectionError> {
        if self.names.contains_key(&decl.name) {
            return Err(ProjectionError::DuplicateType(decl.name));
        }
        if let Some(dup) = decl.first_duplicate_value() {
            let value_name = dup.to_string();
            return Err(ProjectionError::DuplicateEnumValue {
                enum_name: decl.name,
                value_name,
            });
        }
        self.names.insert(decl.name.clone(), decl.type_hash);
        self.enum_order.push(decl.type_hash);
        self.enums.insert(decl.type_hash, decl);
        Ok(())
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    /// Get a class by name.
    pub fn get_class(&self, name: &str) -> Option<&ClassDecl> {
        self.names.get(name).and_then(|hash| self.classes.get(hash))
    }

    /// Get a class by its type hash.
    pub fn class_by_hash(&self, hash: TypeHash) -> Option<&ClassDecl> {
        self.classes.get(&hash)
    }

    /// Get a free-standing enum by name.
    pub fn get_enum(&self, name: &str) -> Option<&EnumDecl> {
        self.names.get(name).and_then(|hash| self.enums.get(hash))
    }

    /// Check if a class or enum with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Iterate classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.class_order
            .iter()
            .filter_map(|hash| self.classes.get(hash))
    }

    /// Iterate free-standing enums in registration order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDecl> {
        self.enum_order
            .iter()
            .filter_map(|hash| self.enums.get(hash))
    }

    /// Number of registered classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of registered free-standing enums.
    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }
}
