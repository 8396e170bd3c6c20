//! Core types for clrbridge.
//!
//! This crate holds everything shared between the projection engine and the
//! ownership-bridge runtime: the class model handed over by the parser front
//! end, deterministic type hashing, method signatures, and the unified error
//! hierarchy.
//!
//! No parsing happens here. The parser front end produces [`ClassDecl`] and
//! [`EnumDecl`] values; the projection crate consumes them and produces
//! wrapper artifacts for the emitter.

mod data_type;
mod entries;
mod error;
mod method_traits;
mod signature;
pub mod type_hash;

pub use data_type::{DataType, Indirection};
pub use entries::{ClassDecl, CtorDecl, EnumDecl, EnumValue, FieldDecl, MethodDecl};
pub use error::{BridgeError, ClrBridgeError, ProjectionError, ProjectionErrors};
pub use method_traits::MethodTraits;
pub use signature::MethodSignature;
pub use type_hash::TypeHash;
