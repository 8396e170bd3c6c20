//! Binding projection for native class hierarchies.
//!
//! Given a parsed class model, this crate decides how each native class is
//! represented on the managed side - by value, by shared ownership bridge,
//! or by flattened-interface proxy - and produces the artifacts the code
//! emitter consumes: projection kind, bridge specialization, constructor
//! surface, and a deterministic member forwarding table.
//!
//! The pass is single-threaded over the class graph in dependency order
//! (bases before derived classes); classes are analyzed independently once
//! their bases are resolved.

mod flatten;
mod graph;
mod pipeline;
mod projection;
mod registry;

pub use flatten::{AmbiguityPolicy, Flattener, ForwardingTable, ForwardingTarget, MemberKind};
pub use graph::InheritanceGraph;
pub use pipeline::{ProjectionOutcome, Projector};
pub use projection::{
    ClassProjection, EnumProjection, ProjectionKind, bridge_specialization, resolve_constructor,
    select_kind,
};
pub use registry::ClassRegistry;

// Generation-time errors live in the core crate's unified hierarchy.
pub use clrbridge_core::{ProjectionError, ProjectionErrors};
