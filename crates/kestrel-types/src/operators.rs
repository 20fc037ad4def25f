//! Result types of prefix and infix operators
//!
//! Both queries answer `None` when no rule covers the operator and operand
//! types; the caller turns that into a "no matching operator" diagnostic.

use crate::error::TypeError;
use crate::registry::TypeRegistry;
use crate::token::Operator;
use crate::ty::{Type, TypeRef};
use std::sync::Arc;

impl Type {
    /// Result type of applying the prefix operator `op` to this type
    ///
    /// - `not` on integers, decimals and strings yields `bool`
    /// - `-` and `~` on integers yield the default integer, whatever the
    ///   operand's width
    /// - `-` on decimals yields the default decimal
    ///
    /// No other type supports a prefix operator.
    pub fn prefix_operator_result(&self, op: Operator, types: &TypeRegistry) -> Option<TypeRef> {
        match (self, op) {
            (Type::Integer(_) | Type::Decimal(_) | Type::String, Operator::Not) => {
                Some(types.boolean())
            }
            (Type::Integer(_), Operator::Minus | Operator::BitNot) => Some(types.int()),
            (Type::Decimal(_), Operator::Minus) => Some(types.float()),
            _ => None,
        }
    }

    /// Result type of `self op rhs`
    ///
    /// With a numeric type on both sides, arithmetic yields the right
    /// operand's type as-is (no promotion) and comparison yields `bool`.
    /// Strings support `+` with another string (yielding the right operand)
    /// and `==`/`!=`. Every other left operand supports nothing, equality
    /// included.
    pub fn infix_operator_result(
        &self,
        op: Operator,
        rhs: &TypeRef,
        types: &TypeRegistry,
    ) -> Option<TypeRef> {
        match self {
            Type::Integer(_) | Type::Decimal(_) => {
                if !rhs.is_numeric() {
                    return None;
                }
                if op.is_arithmetic() {
                    return Some(Arc::clone(rhs));
                }
                if op.is_comparison() {
                    return Some(types.boolean());
                }
                // TODO: bitwise and shift operators on integers
                None
            }

            Type::String => match (&**rhs, op) {
                (Type::String, Operator::Plus) => Some(Arc::clone(rhs)),
                (Type::String, Operator::Equal | Operator::NotEqual) => Some(types.boolean()),
                _ => None,
            },

            Type::Bool | Type::Void | Type::List(_) | Type::UserDefined(_) | Type::Function(_) => {
                None
            }
        }
    }

    /// Like [`prefix_operator_result`](Type::prefix_operator_result), but
    /// reports an unsupported operator as a [`TypeError::NoPrefixOperator`]
    pub fn require_prefix(&self, op: Operator, types: &TypeRegistry) -> Result<TypeRef, TypeError> {
        self.prefix_operator_result(op, types).ok_or_else(|| {
            tracing::trace!(%op, operand = %self.describe(), "no prefix operator rule");
            TypeError::NoPrefixOperator {
                op,
                operand: self.describe(),
            }
        })
    }

    /// Like [`infix_operator_result`](Type::infix_operator_result), but
    /// reports an unsupported operator as a [`TypeError::NoInfixOperator`]
    pub fn require_infix(
        &self,
        op: Operator,
        rhs: &TypeRef,
        types: &TypeRegistry,
    ) -> Result<TypeRef, TypeError> {
        self.infix_operator_result(op, rhs, types).ok_or_else(|| {
            tracing::trace!(%op, lhs = %self.describe(), rhs = %rhs.describe(), "no infix operator rule");
            TypeError::NoInfixOperator {
                op,
                lhs: self.describe(),
                rhs: rhs.describe(),
            }
        })
    }
}
