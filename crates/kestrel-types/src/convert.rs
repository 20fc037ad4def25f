//! Implicit conversion rules
//!
//! Implements the convertibility relation S ~> T: a value of type S may be
//! used where a T is expected. The relation is neither symmetric nor
//! reflexive (`void` converts to nothing, not even itself).

use crate::error::TypeError;
use crate::ty::{IntWidth, Precision, Type};

impl Type {
    /// Check if a value of this type may be used where `target` is expected
    ///
    /// Numeric types widen:
    /// - an integer converts to any integer at least as wide, regardless of
    ///   signedness
    /// - an integer converts to any decimal, except that 64-bit integers only
    ///   fit in `double`
    /// - `float` converts to `float` and `double`; `double` only to `double`
    ///
    /// Strings and booleans only convert to themselves. Lists, functions and
    /// `void` convert to nothing. A user-defined type converts exactly like
    /// its base type.
    pub fn is_convertible_to(&self, target: &Type) -> bool {
        match (self, target) {
            (Type::Integer(from), Type::Integer(to)) => from.width() <= to.width(),

            (Type::Integer(from), Type::Decimal(to)) => {
                !(from.width() == IntWidth::W64 && to.is_single())
            }

            (Type::Decimal(from), Type::Decimal(to)) => {
                from.is_single() || to.precision() == Precision::Double
            }

            (Type::String, Type::String) => true,
            (Type::Bool, Type::Bool) => true,

            (Type::UserDefined(alias), _) => alias.base().is_convertible_to(target),

            // Decimal -> Integer, anything -> Void, Void/List/Function -> anything
            _ => false,
        }
    }

    /// Like [`is_convertible_to`](Type::is_convertible_to), but reports a
    /// rejected conversion as a [`TypeError::Mismatch`]
    pub fn expect_convertible_to(&self, target: &Type) -> Result<(), TypeError> {
        if self.is_convertible_to(target) {
            return Ok(());
        }

        tracing::trace!(
            source = %self.describe(),
            target = %target.describe(),
            "rejected implicit conversion"
        );
        Err(TypeError::Mismatch {
            expected: target.describe(),
            actual: self.describe(),
        })
    }
}
