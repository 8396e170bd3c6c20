//! Projection artifacts - what the emitter consumes.
//!
//! For each class the pipeline decides a representation:
//!
//! - **Value**: the wrapper owns a single native value directly; no bridge.
//! - **Shared**: the native API hands instances around behind shared
//!   ownership handles; the wrapper holds an ownership-bridge
//!   specialization.
//! - **Flattened**: the class participates in multiple inheritance; the
//!   wrapper is a flattened-interface proxy whose forwarding methods resolve
//!   each member through a fixed table, backed by a bridge specialization.
//!
//! Shared and Flattened artifacts carry the concrete bridge specialization
//! name and the forwarding table; Value artifacts carry neither.

use std::fmt::{self, Display, Formatter};

use clrbridge_core::{ClassDecl, CtorDecl, DataType, EnumDecl, EnumValue, ProjectionError, TypeHash};

use crate::flatten::ForwardingTable;

/// The generation-time decision of how a native class is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionKind {
    /// Wrapper owns a single native value directly.
    Value,
    /// Wrapper holds a shared-ownership bridge over the native value.
    Shared,
    /// Flattened-interface proxy over a bridge, with a forwarding table.
    Flattened,
}

impl Display for ProjectionKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionKind::Value => write!(f, "value"),
            ProjectionKind::Shared => write!(f, "shared"),
            ProjectionKind::Flattened => write!(f, "flattened"),
        }
    }
}

/// Choose the representation for a class.
///
/// Multiple inheritance forces the flattened-interface proxy; otherwise the
/// model's shared-ownership flag selects the bridge-backed representation.
pub fn select_kind(class: &ClassDecl) -> ProjectionKind {
    if class.has_multiple_bases() {
        ProjectionKind::Flattened
    } else if class.shared_ownership {
        ProjectionKind::Shared
    } else {
        ProjectionKind::Value
    }
}

/// Resolve a requested construction against the class's native constructors.
///
/// Matching is exact on the parameter type list. No match fails with
/// [`ProjectionError::UnresolvedConstructor`] carrying the requested
/// signature as it would appear in the source header.
pub fn resolve_constructor<'a>(
    class: &'a ClassDecl,
    requested: &[DataType],
) -> Result<&'a CtorDecl, ProjectionError> {
    class
        .find_ctor(requested)
        .ok_or_else(|| ProjectionError::UnresolvedConstructor {
            class: class.name.clone(),
            signature: render_params(requested),
        })
}

fn render_params(params: &[DataType]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The per-class artifact handed to the emitter.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassProjection {
    /// Native class name.
    pub class_name: String,
    /// Class identity.
    pub type_hash: TypeHash,
    /// Chosen representation.
    pub kind: ProjectionKind,
    /// Concrete bridge specialization for shared/flattened projections.
    pub bridge_specialization: Option<String>,
    /// The exposed constructor surface.
    pub ctors: Vec<CtorDecl>,
    /// Member name -> resolved forwarding target.
    pub forwarding: ForwardingTable,
}

impl ClassProjection {
    /// Check if the wrapper is backed by an ownership bridge.
    pub fn is_bridge_backed(&self) -> bool {
        self.bridge_specialization.is_some()
    }
}

/// The bridge specialization a shared/flattened wrapper embeds.
pub fn bridge_specialization(class: &ClassDecl) -> String {
    format!("SharedBridge<{}>", class.name)
}

/// The per-enum artifact handed to the emitter.
///
/// Value order is declaration order, preserved for regeneration stability.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumProjection {
    /// Qualified name: `Name` for free enums, `Owner::Name` for nested ones.
    pub qualified_name: String,
    /// Enum identity (hashed over the qualified name).
    pub type_hash: TypeHash,
    /// Values in declaration order.
    pub values: Vec<EnumValue>,
}

impl EnumProjection {
    /// Project a free-standing enum.
    pub fn free(decl: &EnumDecl) -> Self {
        Self {
            qualified_name: decl.name.clone(),
            type_hash: decl.type_hash,
            values: decl.values.clone(),
        }
    }

    /// Project an enum nested inside a class.
    pub fn nested(owner: &str, decl: &EnumDecl) -> Self {
        let qualified_name = format!("{owner}::{}", decl.name);
        let type_hash = TypeHash::from_name(&qualified_name);
        Self {
            qualified_name,
            type_hash,
            values: decl.values.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clrbridge_core::EnumDecl;

    #[test]
    fn kind_selection() {
        let value = ClassDecl::new("Aklass");
        assert_eq!(select_kind(&value), ProjectionKind::Value);

        let shared = ClassDecl::new("Spectrum").as_shared();
        assert_eq!(select_kind(&shared), ProjectionKind::Shared);

        let flattened = ClassDecl::new("A_second")
            .with_base("MZProvider")
            .with_base("RangeManager")
            .as_shared();
        assert_eq!(select_kind(&flattened), ProjectionKind::Flattened);

        // Single inheritance alone does not force flattening.
        let single = ClassDecl::new("Narrow").with_base("MZProvider");
        assert_eq!(select_kind(&single), ProjectionKind::Value);
    }

    #[test]
    fn constructor_resolution_exact_match() {
        let class = ClassDecl::new("Aklass")
            .with_ctor(CtorDecl::new(vec![DataType::simple("int")]))
            .with_ctor(CtorDecl::new(vec![DataType::const_reference("Aklass")]));

        assert!(resolve_constructor(&class, &[DataType::simple("int")]).is_ok());
        assert!(resolve_constructor(&class, &[DataType::const_reference("Aklass")]).is_ok());

        let err = resolve_constructor(&class, &[DataType::simple("double")]);
        assert_eq!(
            err.err(),
            Some(ProjectionError::UnresolvedConstructor {
                class: "Aklass".to_string(),
                signature: "double".to_string(),
            })
        );
    }

    #[test]
    fn bridge_specialization_name() {
        let class = ClassDecl::new("Aklass");
        assert_eq!(bridge_specialization(&class), "SharedBridge<Aklass>");
    }

    #[test]
    fn nested_enum_gets_qualified_name() {
        let decl = EnumDecl::new("KlassE").with_sequential_values(["A1", "A2", "A3"]);
        let projection = EnumProjection::nested("Aklass", &decl);

        assert_eq!(projection.qualified_name, "Aklass::KlassE");
        assert_eq!(projection.type_hash, TypeHash::from_name("Aklass::KlassE"));
        assert_eq!(projection.values.len(), 3);
        assert_eq!(projection.values[0].name, "A1");
    }
}
