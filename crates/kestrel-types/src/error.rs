//! Type engine errors
//!
//! The queries on [`Type`](crate::Type) never fail: a rejected conversion is
//! `false` and an unsupported operator is `None`. These errors are produced by
//! the `Result`-returning wrappers for callers that prefer `?`.

use crate::token::Operator;
use thiserror::Error;

/// Errors surfaced by the checked wrappers around the type queries
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TypeError {
    /// A value of one type was used where another was expected
    #[error("Type mismatch: expected {expected}, got {actual}")]
    Mismatch {
        /// Expected type
        expected: String,
        /// Actual type
        actual: String,
    },

    /// A name that is not one of the primitive type keywords
    #[error("Unknown type name: {name}")]
    UnknownTypeName {
        /// Name that was looked up
        name: String,
    },

    /// A spelling that is not one of the known operators
    #[error("Unknown operator: {spelling}")]
    UnknownOperator {
        /// Operator spelling that was parsed
        spelling: String,
    },

    /// No prefix operator rule matches the operand
    #[error("No operator '{op}' for operand of type {operand}")]
    NoPrefixOperator {
        /// Operator that was applied
        op: Operator,
        /// Operand type
        operand: String,
    },

    /// No infix operator rule matches the operands
    #[error("No operator '{op}' for operands of type {lhs} and {rhs}")]
    NoInfixOperator {
        /// Operator that was applied
        op: Operator,
        /// Left operand type
        lhs: String,
        /// Right operand type
        rhs: String,
    },
}
