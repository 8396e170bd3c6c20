//! Method signature type for member declarations.

use std::fmt::{self, Display, Formatter};

use crate::{DataType, TypeHash};

/// A method signature: name, ordered parameters, return type, constness.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSignature {
    /// Method name.
    pub name: String,
    /// Parameter types in declaration order.
    pub params: Vec<DataType>,
    /// Return type.
    pub return_type: DataType,
    /// Whether the method is const.
    pub is_const: bool,
}

impl MethodSignature {
    /// Create a new method signature.
    pub fn new(name: impl Into<String>, params: Vec<DataType>, return_type: DataType) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            is_const: false,
        }
    }

    /// Create a new const method signature.
    pub fn new_const(
        name: impl Into<String>,
        params: Vec<DataType>,
        return_type: DataType,
    ) -> Self {
        Self {
            name: name.into(),
            params,
            return_type,
            is_const: true,
        }
    }

    /// Compute the signature hash for override and overload matching.
    ///
    /// Uses name and parameter types with modifiers (excludes owner and return
    /// type) so that overriding a base method produces the same signature hash
    /// in the derived class. Parameter modifiers participate so `f(int)` and
    /// `f(const int &)` are different signatures, as is `f() const` vs `f()`.
    pub fn signature_hash(&self) -> u64 {
        let param_sig_hashes: Vec<u64> = self.params.iter().map(|p| p.signature_hash()).collect();
        TypeHash::from_method(TypeHash::EMPTY, &self.name, &param_sig_hashes, self.is_const).0
    }

    /// Compute the method hash bound to a specific owner type.
    pub fn method_hash(&self, owner: TypeHash) -> TypeHash {
        let param_sig_hashes: Vec<u64> = self.params.iter().map(|p| p.signature_hash()).collect();
        TypeHash::from_method(owner, &self.name, &param_sig_hashes, self.is_const)
    }
}

impl Display for MethodSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")?;
        if self.is_const {
            write!(f, " const")?;
        }
        Ok(())
    }
}
