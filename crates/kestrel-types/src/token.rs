//! Operator tags consumed by the operator-typing rules
//!
//! The lexer owns the full token set; this module only models the operator
//! tags the type engine inspects, together with the two classification
//! predicates (arithmetic and comparison) the rules are written against.

use crate::error::TypeError;
use std::fmt;

/// An operator tag as seen by the type engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    // Arithmetic
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `//`
    FloorDivide,
    /// `%`
    Modulo,
    /// `**`
    Power,

    // Comparison
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,

    // Bitwise
    /// `&`
    BitAnd,
    /// `|`
    BitOr,
    /// `^`
    BitXor,
    /// `~`
    BitNot,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,

    // Logical
    /// `not`
    Not,
    /// `and`
    And,
    /// `or`
    Or,

    /// `=`
    Assign,
}

impl Operator {
    /// Every operator tag, in declaration order
    pub const ALL: [Operator; 23] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::FloorDivide,
        Operator::Modulo,
        Operator::Power,
        Operator::Equal,
        Operator::NotEqual,
        Operator::Less,
        Operator::LessEqual,
        Operator::Greater,
        Operator::GreaterEqual,
        Operator::BitAnd,
        Operator::BitOr,
        Operator::BitXor,
        Operator::BitNot,
        Operator::ShiftLeft,
        Operator::ShiftRight,
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Assign,
    ];

    /// Check if this operator is an arithmetic operator
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operator::Plus
                | Operator::Minus
                | Operator::Multiply
                | Operator::Divide
                | Operator::FloorDivide
                | Operator::Modulo
                | Operator::Power
        )
    }

    /// Check if this operator is a comparison operator
    pub fn is_comparison(self) -> bool {
        matches!(
            self,
            Operator::Equal
                | Operator::NotEqual
                | Operator::Less
                | Operator::LessEqual
                | Operator::Greater
                | Operator::GreaterEqual
        )
    }

    /// Source spelling of the operator
    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::FloorDivide => "//",
            Operator::Modulo => "%",
            Operator::Power => "**",
            Operator::Equal => "==",
            Operator::NotEqual => "!=",
            Operator::Less => "<",
            Operator::LessEqual => "<=",
            Operator::Greater => ">",
            Operator::GreaterEqual => ">=",
            Operator::BitAnd => "&",
            Operator::BitOr => "|",
            Operator::BitXor => "^",
            Operator::BitNot => "~",
            Operator::ShiftLeft => "<<",
            Operator::ShiftRight => ">>",
            Operator::Not => "not",
            Operator::And => "and",
            Operator::Or => "or",
            Operator::Assign => "=",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Operator {
    type Error = TypeError;

    fn try_from(spelling: &str) -> Result<Self, Self::Error> {
        Operator::ALL
            .into_iter()
            .find(|op| op.as_str() == spelling)
            .ok_or_else(|| TypeError::UnknownOperator {
                spelling: spelling.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_are_disjoint() {
        for op in Operator::ALL {
            assert!(
                !(op.is_arithmetic() && op.is_comparison()),
                "{} is both arithmetic and comparison",
                op
            );
        }
    }

    #[test]
    fn test_unary_tags_are_unclassified() {
        assert!(!Operator::Not.is_arithmetic());
        assert!(!Operator::Not.is_comparison());
        assert!(!Operator::BitNot.is_arithmetic());
        assert!(!Operator::BitNot.is_comparison());
        // Minus doubles as binary subtraction
        assert!(Operator::Minus.is_arithmetic());
    }

    #[test]
    fn test_spelling_lookup() {
        for op in Operator::ALL {
            assert_eq!(Operator::try_from(op.as_str()), Ok(op));
        }
        assert_eq!(
            Operator::try_from("<>"),
            Err(TypeError::UnknownOperator {
                spelling: "<>".to_string()
            })
        );
        assert_eq!(format!("{}", Operator::FloorDivide), "//");
    }
}
