//! Canonical instances of the primitive types
//!
//! Every primitive shape (eight integers, two decimals, `str`, `bool` and
//! `void`) is allocated exactly once per registry and handed out as a shared
//! [`TypeRef`], so identity comparisons between canonical handles are valid.
//! The registry also owns the table that maps source-level type keywords to
//! those handles.
//!
//! Build one registry at startup and pass it to every consumer, by reference
//! or behind an `Arc`. It is immutable after construction and can be shared
//! across threads.

use crate::error::TypeError;
use crate::ty::{
    DecimalType, FunctionType, IntType, IntWidth, ListType, Precision, Signedness, Type, TypeRef,
    UserDefinedType,
};
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Source keywords that name a primitive type
pub const PRIMITIVE_KEYWORDS: [&str; 10] = [
    "i8", "i16", "i32", "int", "i64", "float", "double", "str", "bool", "void",
];

/// Owner of the canonical primitive types and the keyword table
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    /// Integer table, indexed by signedness then width
    integers: [[TypeRef; 4]; 2],

    /// Decimal table, indexed by precision
    decimals: [TypeRef; 2],

    boolean: TypeRef,
    string: TypeRef,
    void: TypeRef,

    /// Keyword to canonical type
    keywords: FxHashMap<&'static str, TypeRef>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Build the canonical tables and the keyword table
    pub fn new() -> Self {
        let integers = Signedness::ALL.map(|signedness| {
            IntWidth::ALL.map(|width| Arc::new(Type::Integer(IntType::new(width, signedness))))
        });
        let decimals = Precision::ALL.map(|precision| Arc::new(Type::Decimal(DecimalType::new(precision))));

        let mut registry = TypeRegistry {
            integers,
            decimals,
            boolean: Arc::new(Type::Bool),
            string: Arc::new(Type::String),
            void: Arc::new(Type::Void),
            keywords: FxHashMap::default(),
        };

        registry.keywords = [
            ("i8", registry.integer(IntWidth::W8, Signedness::Signed)),
            ("i16", registry.integer(IntWidth::W16, Signedness::Signed)),
            ("i32", registry.int()),
            ("int", registry.int()),
            ("i64", registry.integer(IntWidth::W64, Signedness::Signed)),
            ("float", registry.float()),
            ("double", registry.decimal(Precision::Double)),
            ("str", registry.string()),
            ("bool", registry.boolean()),
            ("void", registry.void_type()),
        ]
        .into_iter()
        .collect();

        tracing::debug!(
            canonical = registry.canonical_count(),
            keywords = registry.keywords.len(),
            "built type registry"
        );
        registry
    }

    fn canonical_count(&self) -> usize {
        self.integers.iter().map(|row| row.len()).sum::<usize>() + self.decimals.len() + 3
    }

    // Canonical primitive types

    /// Get the integer type of the given width and signedness
    pub fn integer(&self, width: IntWidth, signedness: Signedness) -> TypeRef {
        let row = match signedness {
            Signedness::Signed => 0,
            Signedness::Unsigned => 1,
        };
        Arc::clone(&self.integers[row][width.index()])
    }

    /// Get the default integer type (32-bit signed)
    pub fn int(&self) -> TypeRef {
        self.integer(IntWidth::default(), Signedness::default())
    }

    /// Get the decimal type of the given precision
    pub fn decimal(&self, precision: Precision) -> TypeRef {
        Arc::clone(&self.decimals[precision.index()])
    }

    /// Get the default decimal type (single precision)
    pub fn float(&self) -> TypeRef {
        self.decimal(Precision::default())
    }

    /// Get the bool type
    pub fn boolean(&self) -> TypeRef {
        Arc::clone(&self.boolean)
    }

    /// Get the string type
    pub fn string(&self) -> TypeRef {
        Arc::clone(&self.string)
    }

    /// Get the void type
    pub fn void_type(&self) -> TypeRef {
        Arc::clone(&self.void)
    }

    // Keyword lookup

    /// The keyword table
    pub fn keywords(&self) -> &FxHashMap<&'static str, TypeRef> {
        &self.keywords
    }

    /// Look up a primitive type keyword
    ///
    /// `None` means the name is not a primitive type; resolving it further is
    /// up to the caller.
    pub fn lookup(&self, name: &str) -> Option<TypeRef> {
        self.keywords.get(name).cloned()
    }

    /// Resolve a primitive type keyword, returning an error if not found
    pub fn resolve(&self, name: &str) -> Result<TypeRef, TypeError> {
        self.lookup(name).ok_or_else(|| {
            tracing::debug!(name, "not a primitive type keyword");
            TypeError::UnknownTypeName {
                name: name.to_string(),
            }
        })
    }

    // Composite types, built fresh on every call

    /// Create a list type
    pub fn list(&self, element: TypeRef) -> TypeRef {
        Arc::new(Type::List(ListType::new(element)))
    }

    /// Create a user-defined alias of `base`
    pub fn user_defined(&self, base: TypeRef) -> TypeRef {
        Arc::new(Type::UserDefined(UserDefinedType::new(base)))
    }

    /// Create a function type
    pub fn function(&self, params: Vec<TypeRef>, return_type: TypeRef) -> TypeRef {
        Arc::new(Type::Function(FunctionType::new(params, return_type)))
    }

    /// Check if two handles point at the same instance
    pub fn same_instance(a: &TypeRef, b: &TypeRef) -> bool {
        Arc::ptr_eq(a, b)
    }
}
