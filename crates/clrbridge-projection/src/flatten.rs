//! Member flattening for multiple inheritance.
//!
//! Flattening resolves every member name a class exposes - its own and the
//! ones visible through bases - to exactly one forwarding target, once, at
//! generation time. The emitted wrapper then forwards through a fixed table;
//! no runtime dynamic dispatch is involved.
//!
//! The algorithm, per class:
//!
//! 1. Members the class declares itself always win, including overrides of
//!    base methods.
//! 2. Remaining names are gathered from the direct bases' own flattened
//!    surfaces, bases walked in declaration order (bases are flattened
//!    first, so transitively inherited members are visible).
//! 3. A name reached through two or more bases but declared by a single
//!    class (a repeated base along diamond paths) is not ambiguous; it
//!    resolves to that declaring class through the earliest base.
//! 4. A name with two or more distinct declaring classes resolves to the
//!    first base in declaration order under
//!    [`AmbiguityPolicy::DeclaredBaseOrder`], and fails with
//!    [`ProjectionError::UnresolvedMemberAmbiguity`] under the default
//!    strict policy. A silent arbitrary pick is never allowed: it would
//!    change semantics across regenerations.
//!
//! The walk is order-stable: identical input produces an identical table,
//! run after run.

use rustc_hash::{FxHashMap, FxHashSet};

use clrbridge_core::{ClassDecl, ProjectionError, TypeHash};

use crate::registry::ClassRegistry;

/// How to resolve a member visible through multiple bases with no derived
/// override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguityPolicy {
    /// Fail with [`ProjectionError::UnresolvedMemberAmbiguity`]. The default:
    /// a pipeline that has not declared its base order authoritative must
    /// not have one picked for it.
    #[default]
    Strict,
    /// Resolve to the first declaring base in declaration order.
    DeclaredBaseOrder,
}

/// What kind of member a forwarding entry covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// A member function (an overload set forwards as a unit).
    Method,
    /// A public data member.
    Field,
}

/// The resolved forwarding target for one member name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardingTarget {
    /// The class that declares the member.
    pub declaring_class: String,
    /// The direct base the member is reached through; `None` for members the
    /// class declares itself.
    pub via_base: Option<String>,
    /// Member kind.
    pub kind: MemberKind,
    /// True when the class's own declaration overrides a base method.
    pub is_override: bool,
}

impl ForwardingTarget {
    /// Check if the member is declared by the class itself.
    pub fn is_own(&self) -> bool {
        self.via_base.is_none()
    }
}

/// A class's complete member surface: member name -> forwarding target.
///
/// Iteration order is the deterministic resolution order (own members in
/// declaration order, then inherited members by base order), so emitters
/// walking the table produce regeneration-stable output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForwardingTable {
    entries: FxHashMap<String, ForwardingTarget>,
    order: Vec<String>,
}

impl ForwardingTable {
    fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, name: String, target: ForwardingTarget) {
        if !self.entries.contains_key(&name) {
            self.order.push(name.clone());
            self.entries.insert(name, target);
        }
    }

    /// Look up the forwarding target for a member name.
    pub fn resolve(&self, name: &str) -> Option<&ForwardingTarget> {
        self.entries.get(name)
    }

    /// Check whether a member name is part of the surface.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterate entries in resolution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ForwardingTarget)> {
        self.order
            .iter()
            .filter_map(|name| self.entries.get(name).map(|t| (name.as_str(), t)))
    }

    /// Member names in resolution order.
    pub fn member_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of members in the surface.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the surface is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An inherited-member candidate collected while walking bases.
struct Candidate {
    declaring_class: String,
    via_base: String,
    kind: MemberKind,
}

/// Builds and caches flattened member surfaces, bases first.
pub struct Flattener<'r> {
    registry: &'r ClassRegistry,
    policy: AmbiguityPolicy,
    cache: FxHashMap<TypeHash, ForwardingTable>,
    in_progress: FxHashSet<TypeHash>,
}

impl<'r> Flattener<'r> {
    /// Create a flattener over a registry with the given ambiguity policy.
    pub fn new(registry: &'r ClassRegistry, policy: AmbiguityPolicy) -> Self {
        Self {
            registry,
            policy,
            cache: FxHashMap::default(),
            in_progress: FxHashSet::default(),
        }
    }

    /// Get (computing and caching if needed) the flattened surface of a class.
    pub fn table_for(&mut self, class: &ClassDecl) -> Result<&ForwardingTable, ProjectionError> {
        if !self.cache.contains_key(&class.type_hash) {
            if !self.in_progress.insert(class.type_hash) {
                return Err(ProjectionError::CircularInheritance {
                    class: class.name.clone(),
                });
            }
            let result = self.compute(class);
            self.in_progress.remove(&class.type_hash);
            let table = result?;
            self.cache.insert(class.type_hash, table);
        }
        Ok(&self.cache[&class.type_hash])
    }

    fn compute(&mut self, class: &ClassDecl) -> Result<ForwardingTable, ProjectionError> {
        let mut table = ForwardingTable::new();

        // Own declarations always win, overrides included. Overload sets
        // under one name forward as a unit, so a name is inserted once.
        for method in &class.methods {
            let target = match &method.declared_in {
                None => ForwardingTarget {
                    declaring_class: class.name.clone(),
                    via_base: None,
                    kind: MemberKind::Method,
                    is_override: method.is_override(),
                },
                // A restated inherited member is pre-resolved by the parser.
                Some(base) => ForwardingTarget {
                    declaring_class: base.clone(),
                    via_base: Some(base.clone()),
                    kind: MemberKind::Method,
                    is_override: false,
                },
            };
            table.insert(method.name().to_string(), target);
        }
        for field in &class.fields {
            table.insert(
                field.name.clone(),
                ForwardingTarget {
                    declaring_class: class.name.clone(),
                    via_base: None,
                    kind: MemberKind::Field,
                    is_override: false,
                },
            );
        }

        // Gather inherited candidates, bases in declaration order over each
        // base's own flattened surface.
        let registry = self.registry;
        let mut candidates: FxHashMap<String, Vec<Candidate>> = FxHashMap::default();
        let mut candidate_order: Vec<String> = Vec::new();

        for base_name in &class.bases {
            let base = registry
                .get_class(base_name)
                .ok_or_else(|| ProjectionError::UnknownBase {
                    class: class.name.clone(),
                    base: base_name.clone(),
                })?;
            let base_table = self.table_for(base)?;

            let mut found: Vec<(String, Candidate)> = Vec::new();
            for (name, target) in base_table.iter() {
                if table.contains(name) {
                    continue;
                }
                found.push((
                    name.to_string(),
                    Candidate {
                        declaring_class: target.declaring_class.clone(),
                        via_base: base_name.clone(),
                        kind: target.kind,
                    },
                ));
            }
            for (name, candidate) in found {
                let slot = candidates.entry(name.clone()).or_default();
                if slot.is_empty() {
                    candidate_order.push(name);
                }
                slot.push(candidate);
            }
        }

        // Resolve candidates. A repeated base along diamond paths yields
        // several candidates with one declaring class; that is not ambiguous.
        for name in candidate_order {
            let Some(found) = candidates.remove(&name) else {
                continue;
            };
            let mut declaring: Vec<&str> = Vec::new();
            for candidate in &found {
                if !declaring.contains(&candidate.declaring_class.as_str()) {
                    declaring.push(&candidate.declaring_class);
                }
            }

            if declaring.len() > 1 && self.policy == AmbiguityPolicy::Strict {
                return Err(ProjectionError::UnresolvedMemberAmbiguity {
                    class: class.name.clone(),
                    member: name,
                    candidates: declaring.into_iter().map(String::from).collect(),
                });
            }

            // Earliest base in declaration order wins.
            let first = &found[0];
            table.insert(
                name,
                ForwardingTarget {
                    declaring_class: first.declaring_class.clone(),
                    via_base: Some(first.via_base.clone()),
                    kind: first.kind,
                    is_override: false,
                },
            );
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clrbridge_core::{DataType, FieldDecl, MethodDecl, MethodSignature};

    fn method(name: &str, params: Vec<DataType>, ret: DataType) -> MethodDecl {
        MethodDecl::new(MethodSignature::new(name, params, ret))
    }

    fn full_lib_registry() -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        registry
            .register_class(
                ClassDecl::new("MZProvider")
                    .with_method(method("getMZ", vec![], DataType::simple("double")))
                    .with_method(method(
                        "setMZ",
                        vec![DataType::simple("double")],
                        DataType::void(),
                    )),
            )
            .unwrap();
        registry
            .register_class(ClassDecl::new("RangeManager").with_method(method(
                "getNext",
                vec![DataType::simple("int")],
                DataType::simple("int"),
            )))
            .unwrap();
        registry
            .register_class(
                ClassDecl::new("A_second")
                    .with_base("MZProvider")
                    .with_base("RangeManager")
                    .with_field(FieldDecl::new("i_", DataType::simple("int")))
                    .with_method(method("callA2", vec![], DataType::void()))
                    .with_method(
                        method(
                            "getNext",
                            vec![DataType::simple("int")],
                            DataType::simple("int"),
                        )
                        .as_override(),
                    )
                    .with_method(method("getNext", vec![], DataType::simple("int"))),
            )
            .unwrap();
        registry
    }

    #[test]
    fn override_beats_base_declaration() {
        let registry = full_lib_registry();
        let class = registry.get_class("A_second").unwrap();
        let mut flattener = Flattener::new(&registry, AmbiguityPolicy::Strict);
        let table = flattener.table_for(class).unwrap();

        let target = table.resolve("getNext").unwrap();
        assert!(target.is_own());
        assert!(target.is_override);
        assert_eq!(target.declaring_class, "A_second");
    }

    #[test]
    fn non_overridden_members_resolve_to_unique_declaring_base() {
        let registry = full_lib_registry();
        let class = registry.get_class("A_second").unwrap();
        let mut flattener = Flattener::new(&registry, AmbiguityPolicy::Strict);
        let table = flattener.table_for(class).unwrap();

        let get_mz = table.resolve("getMZ").unwrap();
        assert_eq!(get_mz.declaring_class, "MZProvider");
        assert_eq!(get_mz.via_base.as_deref(), Some("MZProvider"));
        assert!(!get_mz.is_override);

        let set_mz = table.resolve("setMZ").unwrap();
        assert_eq!(set_mz.declaring_class, "MZProvider");
    }

    #[test]
    fn own_fields_are_part_of_the_surface() {
        let registry = full_lib_registry();
        let class = registry.get_class("A_second").unwrap();
        let mut flattener = Flattener::new(&registry, AmbiguityPolicy::Strict);
        let table = flattener.table_for(class).unwrap();

        let field = table.resolve("i_").unwrap();
        assert!(field.is_own());
        assert_eq!(field.kind, MemberKind::Field);
    }

    fn conflicting_registry() -> ClassRegistry {
        let mut registry = ClassRegistry::new();
        registry
            .register_class(ClassDecl::new("BaseA").with_method(method(
                "getId",
                vec![],
                DataType::simple("int"),
            )))
            .unwrap();
        registry
            .register_class(ClassDecl::new("BaseB").with_method(method(
                "getId",
                vec![],
                DataType::simple("int"),
            )))
            .unwrap();
        registry
            .register_class(
                ClassDecl::new("Derived").with_base("BaseA").with_base("BaseB"),
            )
            .unwrap();
        registry
    }

    #[test]
    fn strict_policy_rejects_ambiguity() {
        let registry = conflicting_registry();
        let class = registry.get_class("Derived").unwrap();
        let mut flattener = Flattener::new(&registry, AmbiguityPolicy::Strict);

        let err = flattener.table_for(class);
        assert_eq!(
            err.err(),
            Some(ProjectionError::UnresolvedMemberAmbiguity {
                class: "Derived".to_string(),
                member: "getId".to_string(),
                candidates: vec!["BaseA".to_string(), "BaseB".to_string()],
            })
        );
    }

    #[test]
    fn declared_base_order_resolves_to_first_base() {
        let registry = conflicting_registry();
        let class = registry.get_class("Derived").unwrap();
        let mut flattener = Flattener::new(&registry, AmbiguityPolicy::DeclaredBaseOrder);

        let table = flattener.table_for(class).unwrap();
        let target = table.resolve("getId").unwrap();
        assert_eq!(target.declaring_class, "BaseA");
        assert_eq!(target.via_base.as_deref(), Some("BaseA"));
    }

    #[test]
    fn derived_override_silences_ambiguity_even_under_strict() {
        let mut registry = conflicting_registry();
        registry
            .register_class(
                ClassDecl::new("Overrider")
                    .with_base("BaseA")
                    .with_base("BaseB")
                    .with_method(
                        method("getId", vec![], DataType::simple("int")).as_override(),
                    ),
            )
            .unwrap();

        let class = registry.get_class("Overrider").unwrap();
        let mut flattener = Flattener::new(&registry, AmbiguityPolicy::Strict);
        let table = flattener.table_for(class).unwrap();
        assert!(table.resolve("getId").unwrap().is_own());
    }

    #[test]
    fn repeated_base_through_diamond_is_not_ambiguous() {
        let mut registry = ClassRegistry::new();
        registry
            .register_class(ClassDecl::new("Root").with_method(method(
                "name",
                vec![],
                DataType::simple("int"),
            )))
            .unwrap();
        registry
            .register_class(ClassDecl::new("Left").with_base("Root"))
            .unwrap();
        registry
            .register_class(ClassDecl::new("Right").with_base("Root"))
            .unwrap();
        registry
            .register_class(
                ClassDecl::new("Bottom").with_base("Left").with_base("Right"),
            )
            .unwrap();

        let class = registry.get_class("Bottom").unwrap();
        let mut flattener = Flattener::new(&registry, AmbiguityPolicy::Strict);
        let table = flattener.table_for(class).unwrap();

        let target = table.resolve("name").unwrap();
        assert_eq!(target.declaring_class, "Root");
        assert_eq!(target.via_base.as_deref(), Some("Left"));
    }

    #[test]
    fn transitively_inherited_members_are_visible() {
        let mut registry = ClassRegistry::new();
        registry
            .register_class(ClassDecl::new("Grandbase").with_method(method(
                "deep",
                vec![],
                DataType::void(),
            )))
            .unwrap();
        registry
            .register_class(ClassDecl::new("Mid").with_base("Grandbase"))
            .unwrap();
        registry
            .register_class(ClassDecl::new("Leaf").with_base("Mid"))
            .unwrap();

        let class = registry.get_class("Leaf").unwrap();
        let mut flattener = Flattener::new(&registry, AmbiguityPolicy::Strict);
        let table = flattener.table_for(class).unwrap();

        let target = table.resolve("deep").unwrap();
        assert_eq!(target.declaring_class, "Grandbase");
        assert_eq!(target.via_base.as_deref(), Some("Mid"));
    }

    #[test]
    fn restated_inherited_member_is_pre_resolved() {
        let mut registry = ClassRegistry::new();
        registry
            .register_class(ClassDecl::new("RangeManager").with_method(method(
                "getNext",
                vec![DataType::simple("int")],
                DataType::simple("int"),
            )))
            .unwrap();
        registry
            .register_class(
                ClassDecl::new("Restater")
                    .with_base("RangeManager")
                    .with_method(MethodDecl::inherited_from(
                        MethodSignature::new(
                            "getNext",
                            vec![DataType::simple("int")],
                            DataType::simple("int"),
                        ),
                        "RangeManager",
                    )),
            )
            .unwrap();

        let class = registry.get_class("Restater").unwrap();
        let mut flattener = Flattener::new(&registry, AmbiguityPolicy::Strict);
        let table = flattener.table_for(class).unwrap();

        let target = table.resolve("getNext").unwrap();
        assert!(!target.is_own());
        assert_eq!(target.declaring_class, "RangeManager");
    }

    #[test]
    fn table_is_regeneration_stable() {
        let registry = full_lib_registry();
        let class = registry.get_class("A_second").unwrap();

        let mut first = Flattener::new(&registry, AmbiguityPolicy::Strict);
        let mut second = Flattener::new(&registry, AmbiguityPolicy::Strict);
        let a = first.table_for(class).unwrap().clone();
        let b = second.table_for(class).unwrap().clone();

        assert_eq!(a, b);
        let names_a: Vec<_> = a.member_names().collect();
        let names_b: Vec<_> = b.member_names().collect();
        assert_eq!(names_a, names_b);
    }
}
