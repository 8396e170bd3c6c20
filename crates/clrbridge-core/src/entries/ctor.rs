//! Constructor declaration entry.

use std::fmt::{self, Display, Formatter};

use crate::{DataType, TypeHash};

/// A constructor signature: ordered parameter types.
///
/// Constructors have no name; identity is owner + parameter list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CtorDecl {
    /// Parameter types in declaration order.
    pub params: Vec<DataType>,
}

impl CtorDecl {
    /// Create a constructor with the given parameter list.
    pub fn new(params: Vec<DataType>) -> Self {
        Self { params }
    }

    /// The default (zero-argument) constructor.
    pub fn default_ctor() -> Self {
        Self { params: Vec::new() }
    }

    /// Compute the constructor hash bound to an owner type.
    pub fn ctor_hash(&self, owner: TypeHash) -> TypeHash {
        let param_sig_hashes: Vec<u64> = self.params.iter().map(|p| p.signature_hash()).collect();
        TypeHash::from_constructor(owner, &param_sig_hashes)
    }

    /// Check whether this constructor accepts exactly the given parameter list.
    pub fn matches(&self, params: &[DataType]) -> bool {
        self.params == params
    }
}

impl Display for CtorDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        Ok(())
    }
}
