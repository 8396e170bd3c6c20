//! Class declaration entry.
//!
//! This module provides `ClassDecl`, the class model the parser front end
//! hands to the projection pipeline: name, ordered bases, constructors,
//! members, and nested enums.

use crate::TypeHash;

use super::{CtorDecl, EnumDecl, FieldDecl, MethodDecl};

/// A native class declaration.
///
/// Base order is declaration order from the native header; it is the order
/// the flattening algorithm walks when disambiguating inherited members, so
/// it must be preserved exactly as parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    /// Class name.
    pub name: String,
    /// Type hash for identity.
    pub type_hash: TypeHash,
    /// Base class names in declaration order.
    pub bases: Vec<String>,
    /// Constructors in declaration order.
    pub ctors: Vec<CtorDecl>,
    /// Member functions in declaration order.
    pub methods: Vec<MethodDecl>,
    /// Public data members.
    pub fields: Vec<FieldDecl>,
    /// Nested enum declarations.
    pub enums: Vec<EnumDecl>,
    /// True when the native API hands instances around behind shared
    /// ownership handles.
    pub shared_ownership: bool,
}

impl ClassDecl {
    /// Create a new class declaration.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let type_hash = TypeHash::from_name(&name);
        Self {
            name,
            type_hash,
            bases: Vec::new(),
            ctors: Vec::new(),
            methods: Vec::new(),
            fields: Vec::new(),
            enums: Vec::new(),
            shared_ownership: false,
        }
    }

    // === Builder Methods ===

    /// Add a base class. Call order defines the declared base order.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.bases.push(base.into());
        self
    }

    /// Add a constructor.
    pub fn with_ctor(mut self, ctor: CtorDecl) -> Self {
        self.ctors.push(ctor);
        self
    }

    /// Add a method.
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    /// Add a field.
    pub fn with_field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a nested enum.
    pub fn with_enum(mut self, decl: EnumDecl) -> Self {
        self.enums.push(decl);
        self
    }

    /// Mark instances as handed around behind shared ownership handles.
    pub fn as_shared(mut self) -> Self {
        self.shared_ownership = true;
        self
    }

    // === Query Methods ===

    /// Check if this class has any base classes.
    pub fn has_bases(&self) -> bool {
        !self.bases.is_empty()
    }

    /// Check if this class participates in multiple inheritance.
    pub fn has_multiple_bases(&self) -> bool {
        self.bases.len() > 1
    }

    /// Find the methods the class itself declares under a name (overload set).
    pub fn own_methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodDecl> {
        self.methods
            .iter()
            .filter(move |m| m.is_own() && m.name() == name)
    }

    /// Check whether the class itself declares a member (method or field)
    /// under this name.
    pub fn declares_member(&self, name: &str) -> bool {
        self.own_methods_named(name).next().is_some()
            || self.fields.iter().any(|f| f.name == name)
    }

    /// Find a field by name.
    pub fn find_field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Find a nested enum by name.
    pub fn find_enum(&self, name: &str) -> Option<&EnumDecl> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Find a constructor accepting exactly the given parameter list.
    pub fn find_ctor(&self, params: &[crate::DataType]) -> Option<&CtorDecl> {
        self.ctors.iter().find(|c| c.matches(params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DataType, MethodSignature};

    fn fixture_a_second() -> ClassDecl {
        ClassDecl::new("A_second")
            .with_base("MZProvider")
            .with_base("RangeManager")
            .with_ctor(CtorDecl::new(vec![DataType::simple("int")]))
            .with_ctor(CtorDecl::new(vec![DataType::const_reference("A_second")]))
            .with_field(FieldDecl::new("i_", DataType::simple("int")))
            .with_method(MethodDecl::new(MethodSignature::new(
                "callA2",
                vec![],
                DataType::void(),
            )))
            .with_method(
                MethodDecl::new(MethodSignature::new(
                    "getNext",
                    vec![DataType::simple("int")],
                    DataType::simple("int"),
                ))
                .as_override(),
            )
            .with_method(MethodDecl::new(MethodSignature::new(
                "getNext",
                vec![],
                DataType::simple("int"),
            )))
    }

    #[test]
    fn base_order_is_declaration_order() {
        let decl = fixture_a_second();
        assert_eq!(decl.bases, vec!["MZProvider", "RangeManager"]);
        assert!(decl.has_multiple_bases());
    }

    #[test]
    fn own_methods_named_returns_overload_set() {
        let decl = fixture_a_second();
        let overloads: Vec<_> = decl.own_methods_named("getNext").collect();
        assert_eq!(overloads.len(), 2);
        assert!(overloads.iter().any(|m| m.is_override()));
    }

    #[test]
    fn declares_member_covers_methods_and_fields() {
        let decl = fixture_a_second();
        assert!(decl.declares_member("getNext"));
        assert!(decl.declares_member("i_"));
        assert!(!decl.declares_member("getMZ"));
    }

    #[test]
    fn find_ctor_is_exact_match() {
        let decl = fixture_a_second();
        assert!(decl.find_ctor(&[DataType::simple("int")]).is_some());
        assert!(decl
            .find_ctor(&[DataType::const_reference("A_second")])
            .is_some());
        assert!(decl.find_ctor(&[DataType::simple("double")]).is_none());
    }

    #[test]
    fn nested_enum_lookup() {
        let decl = ClassDecl::new("Aklass")
            .with_enum(EnumDecl::new("KlassE").with_sequential_values(["A1", "A2", "A3"]));
        assert!(decl.find_enum("KlassE").is_some());
        assert!(decl.find_enum("Other").is_none());
    }
}
