//! Method declaration entry.

use crate::{MethodSignature, MethodTraits};

/// A member function declaration inside a class model.
///
/// `declared_in` is `None` for methods the class declares itself. A parser
/// that restates inherited members may set it to the declaring base name;
/// such restatements are pre-resolved forwards and never count as overrides
/// unless the `OVERRIDE` trait is set.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    /// Signature (name, params, return type, constness).
    pub signature: MethodSignature,
    /// Declaration traits.
    pub traits: MethodTraits,
    /// Declaring base for restated inherited members, `None` for own members.
    pub declared_in: Option<String>,
}

impl MethodDecl {
    /// Create a method the class declares itself.
    pub fn new(signature: MethodSignature) -> Self {
        let mut traits = MethodTraits::default();
        if signature.is_const {
            traits |= MethodTraits::CONST;
        }
        Self {
            signature,
            traits,
            declared_in: None,
        }
    }

    /// Create a restated inherited member, pre-resolved to its declaring base.
    pub fn inherited_from(signature: MethodSignature, base: impl Into<String>) -> Self {
        let mut decl = Self::new(signature);
        decl.declared_in = Some(base.into());
        decl
    }

    /// Mark as an override of a base-class method.
    pub fn as_override(mut self) -> Self {
        self.traits |= MethodTraits::OVERRIDE | MethodTraits::VIRTUAL;
        self
    }

    /// Mark as virtual.
    pub fn as_virtual(mut self) -> Self {
        self.traits |= MethodTraits::VIRTUAL;
        self
    }

    /// Mark as static.
    pub fn as_static(mut self) -> Self {
        self.traits |= MethodTraits::STATIC;
        self
    }

    /// The method name.
    pub fn name(&self) -> &str {
        &self.signature.name
    }

    /// Check if this declaration overrides a base-class method.
    pub fn is_override(&self) -> bool {
        self.traits.contains(MethodTraits::OVERRIDE)
    }

    /// Check if this is an own declaration (not a restated inherited member).
    pub fn is_own(&self) -> bool {
        self.declared_in.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DataType;

    #[test]
    fn const_signature_sets_const_trait() {
        let decl = MethodDecl::new(MethodSignature::new_const(
            "getMZ",
            vec![],
            DataType::simple("double"),
        ));
        assert!(decl.traits.contains(MethodTraits::CONST));
        assert!(decl.is_own());
    }

    #[test]
    fn override_builder() {
        let decl = MethodDecl::new(MethodSignature::new(
            "getNext",
            vec![DataType::simple("int")],
            DataType::simple("int"),
        ))
        .as_override();

        assert!(decl.is_override());
        assert!(decl.traits.contains(MethodTraits::VIRTUAL));
    }

    #[test]
    fn inherited_restatement_is_not_own() {
        let decl = MethodDecl::inherited_from(
            MethodSignature::new("getNext", vec![], DataType::simple("int")),
            "RangeManager",
        );
        assert!(!decl.is_own());
        assert_eq!(decl.declared_in.as_deref(), Some("RangeManager"));
        assert!(!decl.is_override());
    }
}
