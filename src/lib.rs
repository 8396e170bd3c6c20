//! clrbridge - projects native C++ class hierarchies into managed-runtime
//! wrapper types.
//!
//! Two layers compose the core:
//!
//! - The **ownership bridge** ([`SharedBridge`]): a generic wrapper holding
//!   one shared-ownership handle to a native value, with two-phase teardown
//!   (finalize + deterministic dispose) that releases the native resource
//!   exactly once no matter how the managed side is disposed, collected, or
//!   copied.
//! - The **binding projection** ([`Projector`]): decides per class whether
//!   instances are projected by value, by bridge-wrapped shared handle, or by
//!   flattened-interface proxy, and builds the deterministic forwarding
//!   tables the code emitter consumes.
//!
//! The header parser and the code emitter are external collaborators: the
//! parser hands this crate [`ClassDecl`]/[`EnumDecl`] models, the emitter
//! consumes [`ClassProjection`]/[`EnumProjection`] artifacts.
//!
//! # Example
//!
//! ```
//! use clrbridge::{ClassDecl, ClassRegistry, CtorDecl, DataType, Projector, SharedBridge};
//!
//! // Generation time: project a parsed class model.
//! let mut registry = ClassRegistry::new();
//! registry
//!     .register_class(
//!         ClassDecl::new("Aklass")
//!             .with_ctor(CtorDecl::new(vec![DataType::simple("int")]))
//!             .as_shared(),
//!     )
//!     .unwrap();
//! let outcome = Projector::new().run(&registry);
//! assert!(outcome.is_clean());
//!
//! // Runtime: generated wrappers hold a bridge specialization.
//! struct Aklass { i: i32 }
//! let bridge = SharedBridge::from_value(Aklass { i: 5 });
//! assert_eq!(bridge.get().unwrap().i, 5);
//! ```

pub use clrbridge_core::{
    BridgeError, ClassDecl, ClrBridgeError, CtorDecl, DataType, EnumDecl, EnumValue, FieldDecl,
    Indirection, MethodDecl, MethodSignature, MethodTraits, ProjectionError, ProjectionErrors,
    TypeHash,
};
pub use clrbridge_projection::{
    AmbiguityPolicy, ClassProjection, ClassRegistry, EnumProjection, Flattener, ForwardingTable,
    ForwardingTarget, InheritanceGraph, MemberKind, ProjectionKind, ProjectionOutcome, Projector,
};
pub use clrbridge_runtime::{NativeHandle, SharedBridge, handle_count};
