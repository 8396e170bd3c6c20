//! Method trait flags.

use bitflags::bitflags;

bitflags! {
    /// Flags describing how a method was declared in the native header.
    ///
    /// # Example
    ///
    /// ```
    /// use clrbridge_core::MethodTraits;
    ///
    /// let overriding = MethodTraits::VIRTUAL | MethodTraits::OVERRIDE;
    /// assert!(overriding.contains(MethodTraits::OVERRIDE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MethodTraits: u8 {
        /// Declared `const`.
        const CONST = 1 << 0;
        /// Declared `static`.
        const STATIC = 1 << 1;
        /// Declared `virtual` (or inherits virtuality).
        const VIRTUAL = 1 << 2;
        /// Declared `override` of a base-class method.
        const OVERRIDE = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        assert!(MethodTraits::default().is_empty());
    }

    #[test]
    fn override_implies_nothing_else() {
        let t = MethodTraits::OVERRIDE;
        assert!(t.contains(MethodTraits::OVERRIDE));
        assert!(!t.contains(MethodTraits::VIRTUAL));
    }
}
