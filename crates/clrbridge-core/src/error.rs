//! Unified error types for clrbridge.
//!
//! This module provides a consistent error type hierarchy for both phases
//! of the binding bridge: generation time (projection) and runtime (bridge).
//!
//! ## Error Hierarchy
//!
//! ```text
//! ClrBridgeError (top-level wrapper)
//! ├── ProjectionError - Generation-time errors (per-class, abort that class)
//! └── BridgeError     - Runtime errors surfaced by generated wrappers
//! ```
//!
//! Double teardown (a second dispose, or finalize after dispose) is
//! deliberately absent from this taxonomy: collector-triggered finalization
//! order relative to explicit disposal is unspecified, so the bridge absorbs
//! it silently instead of reporting it.
//!
//! ## Usage
//!
//! Each phase-specific error type can be used directly for fine-grained
//! handling, or converted to `ClrBridgeError` for unified handling:
//!
//! ```
//! use clrbridge_core::{ClrBridgeError, ProjectionError};
//!
//! fn report(err: ProjectionError) -> ClrBridgeError {
//!     err.into()
//! }
//! ```

use thiserror::Error;

// ============================================================================
// Projection (generation-time) Errors
// ============================================================================

/// Errors raised while projecting a class model into wrapper artifacts.
///
/// These abort binding generation for the affected class and carry enough
/// context (class name, member or constructor signature) to fix the source
/// header. They are not recoverable automatically.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// A requested construction matches no native constructor signature.
    #[error("class '{class}': no native constructor matches ({signature})")]
    UnresolvedConstructor {
        /// The class being projected.
        class: String,
        /// Rendering of the requested parameter list.
        signature: String,
    },

    /// A member is visible through more than one base with no derived
    /// override and no declared resolution order. Must never be resolved by
    /// arbitrary pick: that would silently change semantics across
    /// regenerations.
    #[error("class '{class}': member '{member}' is ambiguous across bases: {}", candidates.join(", "))]
    UnresolvedMemberAmbiguity {
        /// The class being projected.
        class: String,
        /// The ambiguous member name.
        member: String,
        /// The declaring bases that each expose the member.
        candidates: Vec<String>,
    },

    /// A declared base class was never registered.
    #[error("class '{class}': unknown base class '{base}'")]
    UnknownBase {
        /// The class naming the base.
        class: String,
        /// The unresolved base name.
        base: String,
    },

    /// The inheritance graph contains a cycle.
    #[error("circular inheritance involving '{class}'")]
    CircularInheritance {
        /// A class on the cycle.
        class: String,
    },

    /// A type with this name already exists in the registry.
    #[error("duplicate type: {0}")]
    DuplicateType(String),

    /// A duplicate value name inside an enum declaration.
    #[error("duplicate enum value: '{value_name}' in enum '{enum_name}'")]
    DuplicateEnumValue {
        /// The enum name.
        enum_name: String,
        /// The duplicate value name.
        value_name: String,
    },
}

/// A collection of projection errors.
///
/// The projection pipeline continues past a failing class, so several
/// classes may each contribute an error to one run.
#[derive(Debug, Clone, Default)]
pub struct ProjectionErrors {
    errors: Vec<ProjectionError>,
}

impl ProjectionErrors {
    /// Create a new empty error collection.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection.
    pub fn push(&mut self, error: ProjectionError) {
        self.errors.push(error);
    }

    /// Check if there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &ProjectionError> {
        self.errors.iter()
    }

    /// Convert to a Vec of errors.
    pub fn into_vec(self) -> Vec<ProjectionError> {
        self.errors
    }

    /// Convert to a Result, returning Ok(()) if empty or Err with the first error.
    pub fn into_result(self) -> Result<(), ProjectionError> {
        if let Some(first) = self.errors.into_iter().next() {
            Err(first)
        } else {
            Ok(())
        }
    }
}

impl IntoIterator for ProjectionErrors {
    type Item = ProjectionError;
    type IntoIter = std::vec::IntoIter<ProjectionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProjectionErrors {
    type Item = &'a ProjectionError;
    type IntoIter = std::slice::Iter<'a, ProjectionError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl From<ProjectionError> for ProjectionErrors {
    fn from(error: ProjectionError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl std::fmt::Display for ProjectionErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ProjectionErrors {}

// ============================================================================
// Bridge (runtime) Errors
// ============================================================================

/// Errors surfaced by the ownership bridge at runtime.
///
/// These are reported to the caller of the generated wrapper, never
/// swallowed: handing native code a stale or null pointer is undefined
/// behavior and must be rejected before it reaches native code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// Member access attempted on a disposed or empty bridge instance.
    #[error("use after dispose: native member access on a disposed or empty bridge of {type_name}")]
    UseAfterDispose {
        /// The native type the bridge is specialized over.
        type_name: &'static str,
    },
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// The unified error type for all clrbridge operations.
///
/// Each variant uses `#[from]` to enable automatic conversion with the `?`
/// operator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClrBridgeError {
    /// A generation-time projection error.
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// A runtime bridge error.
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}

impl ClrBridgeError {
    /// Check if this is a generation-time error.
    pub fn is_projection(&self) -> bool {
        matches!(self, ClrBridgeError::Projection(_))
    }

    /// Check if this is a runtime error.
    pub fn is_bridge(&self) -> bool {
        matches!(self, ClrBridgeError::Bridge(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
