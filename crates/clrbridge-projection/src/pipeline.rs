//! The projection pipeline.
//!
//! A single non-concurrent pass over the class graph: resolve the
//! inheritance order (bases before derived classes), flatten each class's
//! member surface, choose its representation, and resolve its constructor
//! surface. A generation-time error aborts the affected class only; the
//! remaining classes still project, and every error is collected for the
//! invoking generation pipeline.
//!
//! # Example
//!
//! ```
//! use clrbridge_core::{ClassDecl, CtorDecl, DataType};
//! use clrbridge_projection::{ClassRegistry, Projector};
//!
//! let mut registry = ClassRegistry::new();
//! registry
//!     .register_class(ClassDecl::new("Aklass").with_ctor(CtorDecl::new(vec![DataType::simple("int")])))
//!     .unwrap();
//!
//! let outcome = Projector::new().run(&registry);
//! assert!(outcome.is_clean());
//! assert_eq!(outcome.classes.len(), 1);
//! ```

use rustc_hash::FxHashMap;

use clrbridge_core::{ClassDecl, CtorDecl, DataType, ProjectionError, ProjectionErrors, TypeHash};

use crate::flatten::{AmbiguityPolicy, Flattener};
use crate::graph::InheritanceGraph;
use crate::projection::{
    ClassProjection, EnumProjection, ProjectionKind, bridge_specialization, resolve_constructor,
    select_kind,
};
use crate::registry::ClassRegistry;

/// Everything one projection run produced.
#[derive(Debug, Default)]
pub struct ProjectionOutcome {
    /// Class artifacts in dependency order (bases before derived classes).
    pub classes: Vec<ClassProjection>,
    /// Enum artifacts: free enums in registration order, then nested enums
    /// of successfully projected classes.
    pub enums: Vec<EnumProjection>,
    /// Errors for classes whose generation was aborted.
    pub errors: ProjectionErrors,
}

impl ProjectionOutcome {
    /// Check if every class projected without error.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Find a class artifact by native class name.
    pub fn find_class(&self, name: &str) -> Option<&ClassProjection> {
        self.classes.iter().find(|c| c.class_name == name)
    }

    /// Find an enum artifact by qualified name.
    pub fn find_enum(&self, qualified_name: &str) -> Option<&EnumProjection> {
        self.enums.iter().find(|e| e.qualified_name == qualified_name)
    }

    /// Convert to a Result, yielding the artifacts or the first error.
    pub fn into_result(
        self,
    ) -> Result<(Vec<ClassProjection>, Vec<EnumProjection>), ProjectionError> {
        self.errors.into_result()?;
        Ok((self.classes, self.enums))
    }
}

/// Drives projection over a registered class model.
#[derive(Debug, Default)]
pub struct Projector {
    policy: AmbiguityPolicy,
    /// Explicitly requested constructor surfaces, per class name. Classes
    /// without a request expose every native constructor.
    ctor_requests: FxHashMap<String, Vec<Vec<DataType>>>,
}

impl Projector {
    /// Create a projector with the default strict ambiguity policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a projector with an explicit ambiguity policy.
    pub fn with_policy(policy: AmbiguityPolicy) -> Self {
        Self {
            policy,
            ctor_requests: FxHashMap::default(),
        }
    }

    /// Restrict a class's wrapper to an explicitly requested constructor.
    ///
    /// May be called several times per class; each request must match a
    /// native constructor exactly or the class fails with
    /// `UnresolvedConstructor`.
    pub fn request_constructor(
        &mut self,
        class: impl Into<String>,
        params: Vec<DataType>,
    ) -> &mut Self {
        self.ctor_requests.entry(class.into()).or_default().push(params);
        self
    }

    /// Run projection over the registry.
    pub fn run(&self, registry: &ClassRegistry) -> ProjectionOutcome {
        let mut outcome = ProjectionOutcome::default();

        for decl in registry.enums() {
            outcome.enums.push(EnumProjection::free(decl));
        }

        let order: Vec<TypeHash> = match InheritanceGraph::build(registry)
            .and_then(|graph| graph.topo_order(registry))
        {
            Ok(order) => order,
            Err(err) => {
                // A broken graph leaves no usable dependency order; class
                // generation is aborted wholesale, enums still project.
                outcome.errors.push(err);
                return outcome;
            }
        };

        let mut flattener = Flattener::new(registry, self.policy);
        for hash in order {
            let Some(class) = registry.class_by_hash(hash) else {
                continue;
            };

            let forwarding = match flattener.table_for(class) {
                Ok(table) => table.clone(),
                Err(err) => {
                    // A base's failure resurfaces under each dependent;
                    // report the underlying condition once.
                    if !outcome.errors.iter().any(|e| *e == err) {
                        outcome.errors.push(err);
                    }
                    continue;
                }
            };

            let ctors = match self.ctor_surface(class) {
                Ok(ctors) => ctors,
                Err(err) => {
                    outcome.errors.push(err);
                    continue;
                }
            };

            let kind = select_kind(class);
            let bridge = match kind {
                ProjectionKind::Value => None,
                _ => Some(bridge_specialization(class)),
            };

            for nested in &class.enums {
                outcome.enums.push(EnumProjection::nested(&class.name, nested));
            }

            outcome.classes.push(ClassProjection {
                class_name: class.name.clone(),
                type_hash: class.type_hash,
                kind,
                bridge_specialization: bridge,
                ctors,
                forwarding,
            });
        }

        outcome
    }

    fn ctor_surface(&self, class: &ClassDecl) -> Result<Vec<CtorDecl>, ProjectionError> {
        match self.ctor_requests.get(&class.name) {
            // Default surface: every native constructor.
            None => Ok(class.ctors.clone()),
            Some(requests) => {
                let mut ctors = Vec::with_capacity(requests.len());
                for requested in requests {
                    ctors.push(resolve_constructor(class, requested)?.clone());
                }
                Ok(ctors)
            }
        }
    }
}
