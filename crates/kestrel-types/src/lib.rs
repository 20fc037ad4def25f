//! Kestrel Type System
//!
//! Type representation, implicit conversion rules and operator typing for the
//! Kestrel semantic analyzer.
//!
//! This crate provides:
//! - A closed set of type kinds ([`Type`]) with structural equality
//! - The implicit conversion relation ([`Type::is_convertible_to`])
//! - Result types of prefix and infix operators
//! - A registry of canonical primitive types and the type keyword table
//!
//! # Usage
//!
//! ```ignore
//! use kestrel_types::{Operator, TypeRegistry};
//!
//! let types = TypeRegistry::new();
//! let small = types.lookup("i8").unwrap();
//! let int = types.lookup("int").unwrap();
//!
//! assert!(small.is_convertible_to(&int));
//! let sum = small.infix_operator_result(Operator::Plus, &int, &types);
//! ```

#![warn(missing_docs)]

pub mod ty;
pub mod registry;
pub mod token;
pub mod error;

mod convert;
mod operators;

pub use ty::{
    Category, DecimalType, FunctionType, IntType, IntWidth, ListType, Precision, Signedness, Type,
    TypeRef, UserDefinedType,
};
pub use registry::{TypeRegistry, PRIMITIVE_KEYWORDS};
pub use token::Operator;
pub use error::TypeError;
