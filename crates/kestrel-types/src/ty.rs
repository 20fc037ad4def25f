//! Core type definitions for the Kestrel type system

use std::fmt;
use std::sync::Arc;

/// Shared handle to a type
///
/// Primitive types are handed out by the [`TypeRegistry`](crate::TypeRegistry)
/// as canonical handles, so two handles to the same primitive shape are
/// pointer-equal. Composite types are built per use-site.
pub type TypeRef = Arc<Type>;

/// Coarse kind tag of a type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Fixed-width integers
    Integer,
    /// Floating point numbers
    Decimal,
    /// The `str` type
    String,
    /// The `bool` type
    Bool,
    /// The `void` type
    Void,
    /// Lists of a single element type
    List,
    /// User-defined aliases of another type
    UserDefined,
    /// Function signatures
    Function,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Integer => write!(f, "integer"),
            Category::Decimal => write!(f, "decimal"),
            Category::String => write!(f, "string"),
            Category::Bool => write!(f, "bool"),
            Category::Void => write!(f, "void"),
            Category::List => write!(f, "list"),
            Category::UserDefined => write!(f, "user-defined"),
            Category::Function => write!(f, "function"),
        }
    }
}

/// Bit width of an integer type
///
/// Ordered from narrowest to widest, so `<=` is the widening check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntWidth {
    /// 8 bits
    W8,
    /// 16 bits
    W16,
    /// 32 bits
    #[default]
    W32,
    /// 64 bits
    W64,
}

impl IntWidth {
    /// Every width, narrowest first
    pub const ALL: [IntWidth; 4] = [IntWidth::W8, IntWidth::W16, IntWidth::W32, IntWidth::W64];

    /// Number of bits
    pub fn bits(self) -> u32 {
        match self {
            IntWidth::W8 => 8,
            IntWidth::W16 => 16,
            IntWidth::W32 => 32,
            IntWidth::W64 => 64,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Signedness of an integer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Signedness {
    /// Two's complement signed
    #[default]
    Signed,
    /// Unsigned
    Unsigned,
}

impl Signedness {
    /// Both signedness values
    pub const ALL: [Signedness; 2] = [Signedness::Signed, Signedness::Unsigned];
}

/// Precision of a decimal type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// Single precision (`float`)
    #[default]
    Single,
    /// Double precision (`double`)
    Double,
}

impl Precision {
    /// Both precisions, narrowest first
    pub const ALL: [Precision; 2] = [Precision::Single, Precision::Double];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Integer type: a width and a signedness
///
/// Neither `Clone` nor constructible outside the crate, so the registry is
/// the only source of integer types.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct IntType {
    width: IntWidth,
    signedness: Signedness,
}

impl IntType {
    pub(crate) fn new(width: IntWidth, signedness: Signedness) -> Self {
        IntType { width, signedness }
    }

    /// Bit width
    pub fn width(&self) -> IntWidth {
        self.width
    }

    /// Signedness
    pub fn signedness(&self) -> Signedness {
        self.signedness
    }

    /// Number of bits
    pub fn bits(&self) -> u32 {
        self.width.bits()
    }

    /// Check if this is a signed integer
    pub fn is_signed(&self) -> bool {
        self.signedness == Signedness::Signed
    }
}

/// Decimal type: a floating point precision
///
/// Like [`IntType`], only the registry can produce one.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct DecimalType {
    precision: Precision,
}

impl DecimalType {
    pub(crate) fn new(precision: Precision) -> Self {
        DecimalType { precision }
    }

    /// Floating point precision
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Check if this is the single precision `float`
    pub fn is_single(&self) -> bool {
        self.precision == Precision::Single
    }
}

/// List type: `[T]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListType {
    element: TypeRef,
}

impl ListType {
    /// Create a list of `element`
    pub fn new(element: TypeRef) -> Self {
        ListType { element }
    }

    /// Element type
    pub fn element(&self) -> &TypeRef {
        &self.element
    }
}

/// User-defined alias of another type
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserDefinedType {
    base: TypeRef,
}

impl UserDefinedType {
    /// Create an alias of `base`
    pub fn new(base: TypeRef) -> Self {
        UserDefinedType { base }
    }

    /// The aliased type
    pub fn base(&self) -> &TypeRef {
        &self.base
    }
}

/// Function type: `(T1, ..., Tn) -> R`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    params: Vec<TypeRef>,
    return_type: TypeRef,
}

impl FunctionType {
    /// Create a function type from its parameter and return types
    pub fn new(params: Vec<TypeRef>, return_type: TypeRef) -> Self {
        FunctionType {
            params,
            return_type,
        }
    }

    /// Parameter types, in declaration order
    pub fn params(&self) -> &[TypeRef] {
        &self.params
    }

    /// Return type
    pub fn return_type(&self) -> &TypeRef {
        &self.return_type
    }
}

/// The core type representation in Kestrel
///
/// Equality is structural: integers compare width and signedness, decimals
/// compare precision, composites compare their component types recursively.
/// Whether two handles are the *same* canonical instance is a separate
/// question answered by [`TypeRegistry::same_instance`](crate::TypeRegistry::same_instance).
///
/// `Type` is not `Clone`: share it through [`TypeRef`]. Integer and decimal
/// payloads cannot be built outside the crate. The unit variants (`String`,
/// `Bool`, `Void`) can be written by anyone; take them from the registry
/// when identity matters.
#[derive(Debug, PartialEq, Eq, Hash)]
pub enum Type {
    /// Fixed-width integer
    Integer(IntType),

    /// Floating point number
    Decimal(DecimalType),

    /// String
    String,

    /// Boolean
    Bool,

    /// Absence of a value
    Void,

    /// List: [T]
    List(ListType),

    /// Alias of another type
    UserDefined(UserDefinedType),

    /// Function: (params) -> return
    Function(FunctionType),
}

impl Type {
    /// The kind tag of this type
    pub fn category(&self) -> Category {
        match self {
            Type::Integer(_) => Category::Integer,
            Type::Decimal(_) => Category::Decimal,
            Type::String => Category::String,
            Type::Bool => Category::Bool,
            Type::Void => Category::Void,
            Type::List(_) => Category::List,
            Type::UserDefined(_) => Category::UserDefined,
            Type::Function(_) => Category::Function,
        }
    }

    /// Human-readable label used in type mismatch messages
    ///
    /// Lists and user-defined types have no label yet and yield `""`.
    pub fn stringify(&self) -> &'static str {
        match self {
            Type::Integer(_) => "integer",
            Type::Decimal(d) => {
                if d.is_single() {
                    "float"
                } else {
                    "double"
                }
            }
            Type::String => "string",
            Type::Bool => "bool",
            Type::Void => "void",
            Type::Function(_) => "function",
            Type::List(_) | Type::UserDefined(_) => "",
        }
    }

    /// Detailed rendering for diagnostics
    ///
    /// Unlike [`stringify`](Type::stringify) this spells out integer widths
    /// and the structure of composite types.
    pub fn describe(&self) -> String {
        match self {
            Type::Integer(int) => match int.signedness() {
                Signedness::Signed => format!("i{}", int.bits()),
                Signedness::Unsigned => format!("u{}", int.bits()),
            },
            Type::List(list) => format!("list<{}>", list.element().describe()),
            Type::UserDefined(alias) => format!("alias of {}", alias.base().describe()),
            Type::Function(func) => {
                let params: Vec<String> = func.params().iter().map(|p| p.describe()).collect();
                format!("fn({}) -> {}", params.join(", "), func.return_type().describe())
            }
            other => other.stringify().to_string(),
        }
    }

    /// Structural equality against another type
    pub fn equals(&self, other: &Type) -> bool {
        self == other
    }

    /// Check if this type is an integer or a decimal
    pub fn is_numeric(&self) -> bool {
        matches!(self, Type::Integer(_) | Type::Decimal(_))
    }

    /// Check if this type is the void type
    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Get the integer type if this is an integer
    pub fn as_int(&self) -> Option<&IntType> {
        match self {
            Type::Integer(int) => Some(int),
            _ => None,
        }
    }

    /// Get the decimal type if this is a decimal
    pub fn as_decimal(&self) -> Option<&DecimalType> {
        match self {
            Type::Decimal(d) => Some(d),
            _ => None,
        }
    }

    /// Get the list type if this is a list
    pub fn as_list(&self) -> Option<&ListType> {
        match self {
            Type::List(list) => Some(list),
            _ => None,
        }
    }

    /// Get the alias if this is a user-defined type
    pub fn as_user_defined(&self) -> Option<&UserDefinedType> {
        match self {
            Type::UserDefined(alias) => Some(alias),
            _ => None,
        }
    }

    /// Get the function type if this is a function
    pub fn as_function(&self) -> Option<&FunctionType> {
        match self {
            Type::Function(func) => Some(func),
            _ => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stringify())
    }
}
