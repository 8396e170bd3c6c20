//! Class-model entry types.
//!
//! This module provides the declaration types the parser front end hands to
//! the projection pipeline:
//!
//! - [`ClassDecl`] - A native class: bases, constructors, members, nested enums
//! - [`MethodDecl`] - A member function declaration
//! - [`CtorDecl`] - A constructor signature
//! - [`FieldDecl`] - A public data member
//! - [`EnumDecl`] - An enumeration with ordered values
//!
//! Supporting types:
//! - [`EnumValue`] - A single named enum constant

mod class;
mod ctor;
mod enum_entry;
mod field;
mod method;

pub use class::ClassDecl;
pub use ctor::CtorDecl;
pub use enum_entry::{EnumDecl, EnumValue};
pub use field::FieldDecl;
pub use method::MethodDecl;
