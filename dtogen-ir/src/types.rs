//! Structural type model.
//!
//! Every type reference in a DTO property or endpoint is a [`TypeExpr`]:
//! a closed set of variants that emitters match on exhaustively.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Built-in primitive types with a fixed mapping in every target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Int,
    Float,
    Bool,
    Array,
    Mixed,
    Null,
}

impl Primitive {
    /// Look up a primitive by its source-language name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "string" => Some(Self::String),
            "int" | "integer" => Some(Self::Int),
            "float" | "double" => Some(Self::Float),
            "bool" | "boolean" | "true" | "false" => Some(Self::Bool),
            "array" | "iterable" => Some(Self::Array),
            "mixed" => Some(Self::Mixed),
            "null" => Some(Self::Null),
            _ => None,
        }
    }

    /// Canonical name of the primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Array => "array",
            Self::Mixed => "mixed",
            Self::Null => "null",
        }
    }
}

/// A named type, optionally instantiated with type arguments.
///
/// The name is either a primitive (`string`, `int`, ...) or a class name.
/// `Generic<Inner>` is represented as `SingleType { name: "Generic", args: [Inner] }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SingleType {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeExpr>,
}

impl SingleType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A generic instantiation, e.g. `JsonResponse<UserOutput>`.
    pub fn generic(name: impl Into<String>, args: Vec<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn null() -> Self {
        Self::new(Primitive::Null.as_str())
    }

    /// The opaque type used when nothing better is known.
    pub fn mixed() -> Self {
        Self::new(Primitive::Mixed.as_str())
    }

    pub fn primitive(&self) -> Option<Primitive> {
        if self.args.is_empty() {
            Primitive::from_name(&self.name)
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        self.primitive() == Some(Primitive::Null)
    }

    pub fn is_generic(&self) -> bool {
        !self.args.is_empty()
    }
}

/// An ordered set of distinct member types.
///
/// Invariants: at least one member, no nested unions, no duplicates.
/// Construct through [`TypeExpr::union`], which enforces them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnionType {
    types: Vec<TypeExpr>,
}

impl UnionType {
    pub fn types(&self) -> &[TypeExpr] {
        &self.types
    }

    /// A union is nullable when one of its members is `null`.
    pub fn is_nullable(&self) -> bool {
        self.types.iter().any(TypeExpr::is_null)
    }
}

/// An array of elements of a given type. Nesting expresses `T[][]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArrayType {
    pub element: Box<TypeExpr>,
}

impl ArrayType {
    /// Number of array dimensions (`T[]` = 1, `T[][]` = 2).
    pub fn depth(&self) -> usize {
        match self.element.as_ref() {
            TypeExpr::Array(inner) => inner.depth() + 1,
            _ => 1,
        }
    }
}

/// A type reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeExpr {
    Single(SingleType),
    Union(UnionType),
    Array(ArrayType),
}

impl TypeExpr {
    pub fn single(name: impl Into<String>) -> Self {
        Self::Single(SingleType::new(name))
    }

    pub fn null() -> Self {
        Self::Single(SingleType::null())
    }

    pub fn mixed() -> Self {
        Self::Single(SingleType::mixed())
    }

    pub fn array_of(element: TypeExpr) -> Self {
        Self::Array(ArrayType {
            element: Box::new(element),
        })
    }

    /// Build a union, flattening nested unions and removing duplicates.
    ///
    /// A union that collapses to a single distinct member is returned as
    /// that member. An empty input yields `mixed`.
    pub fn union(members: impl IntoIterator<Item = TypeExpr>) -> Self {
        let mut types: Vec<TypeExpr> = Vec::new();
        for member in members {
            let flattened = match member {
                TypeExpr::Union(union) => union.types,
                other => vec![other],
            };
            for ty in flattened {
                if !types.contains(&ty) {
                    types.push(ty);
                }
            }
        }

        match types.len() {
            0 => Self::mixed(),
            1 => types.remove(0),
            _ => Self::Union(UnionType { types }),
        }
    }

    /// `T` becomes `T|null`. Already nullable types are returned unchanged.
    pub fn nullable(ty: TypeExpr) -> Self {
        Self::union([ty, Self::null()])
    }

    pub fn is_null(&self) -> bool {
        matches!(self, TypeExpr::Single(single) if single.is_null())
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            TypeExpr::Single(single) => single.is_null(),
            TypeExpr::Union(union) => union.is_nullable(),
            TypeExpr::Array(_) => false,
        }
    }

    /// Whether the type mentions the native `array` primitive at the top level
    /// (directly or as a union member).
    pub fn mentions_native_array(&self) -> bool {
        match self {
            TypeExpr::Single(single) => single.primitive() == Some(Primitive::Array),
            TypeExpr::Union(union) => union.types.iter().any(Self::mentions_native_array),
            TypeExpr::Array(_) => false,
        }
    }

    /// Collect every named type reachable through unions, arrays and
    /// generic arguments, in depth-first order.
    pub fn singles(&self) -> Vec<&SingleType> {
        let mut out = Vec::new();
        self.collect_singles(&mut out);
        out
    }

    fn collect_singles<'a>(&'a self, out: &mut Vec<&'a SingleType>) {
        match self {
            TypeExpr::Single(single) => {
                out.push(single);
                for arg in &single.args {
                    arg.collect_singles(out);
                }
            }
            TypeExpr::Union(union) => {
                for ty in &union.types {
                    ty.collect_singles(out);
                }
            }
            TypeExpr::Array(array) => array.element.collect_singles(out),
        }
    }
}

impl From<SingleType> for TypeExpr {
    fn from(single: SingleType) -> Self {
        Self::Single(single)
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Single(single) => write!(f, "{single}"),
            TypeExpr::Union(union) => {
                let members: Vec<String> = union.types.iter().map(ToString::to_string).collect();
                write!(f, "{}", members.join("|"))
            }
            TypeExpr::Array(array) => match array.element.as_ref() {
                TypeExpr::Union(_) => write!(f, "({})[]", array.element),
                element => write!(f, "{element}[]"),
            },
        }
    }
}

impl fmt::Display for SingleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.name)
        } else {
            let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
            write!(f, "{}<{}>", self.name, args.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_dedupes_and_keeps_order() {
        let ty = TypeExpr::union([
            TypeExpr::single("A"),
            TypeExpr::null(),
            TypeExpr::single("A"),
        ]);
        match &ty {
            TypeExpr::Union(union) => {
                assert_eq!(union.types(), &[TypeExpr::single("A"), TypeExpr::null()]);
            }
            other => panic!("expected union, got {other:?}"),
        }
        assert!(ty.is_nullable());
    }

    #[test]
    fn test_nullable_matches_explicit_union() {
        let nullable = TypeExpr::nullable(TypeExpr::single("A"));
        let explicit = TypeExpr::union([TypeExpr::single("A"), TypeExpr::null()]);
        assert_eq!(nullable, explicit);
    }

    #[test]
    fn test_union_flattens_nested_unions() {
        let inner = TypeExpr::union([TypeExpr::single("int"), TypeExpr::single("string")]);
        let outer = TypeExpr::union([inner, TypeExpr::single("string"), TypeExpr::null()]);
        assert_eq!(outer.to_string(), "int|string|null");
    }

    #[test]
    fn test_single_member_union_collapses() {
        let ty = TypeExpr::union([TypeExpr::single("int"), TypeExpr::single("int")]);
        assert_eq!(ty, TypeExpr::single("int"));
    }

    #[test]
    fn test_primitive_lookup() {
        assert_eq!(Primitive::from_name("String"), Some(Primitive::String));
        assert_eq!(Primitive::from_name("integer"), Some(Primitive::Int));
        assert_eq!(Primitive::from_name("UserOutput"), None);
        assert_eq!(SingleType::generic("array", vec![TypeExpr::single("int")]).primitive(), None);
    }

    #[test]
    fn test_array_depth_and_display() {
        let matrix = TypeExpr::array_of(TypeExpr::array_of(TypeExpr::single("int")));
        match &matrix {
            TypeExpr::Array(array) => assert_eq!(array.depth(), 2),
            other => panic!("expected array, got {other:?}"),
        }
        assert_eq!(matrix.to_string(), "int[][]");

        let mixed = TypeExpr::array_of(TypeExpr::union([
            TypeExpr::single("int"),
            TypeExpr::single("string"),
            TypeExpr::null(),
        ]));
        assert_eq!(mixed.to_string(), "(int|string|null)[]");
    }

    #[test]
    fn test_singles_walks_generic_args() {
        let ty = TypeExpr::Single(SingleType::generic(
            "JsonResponse",
            vec![TypeExpr::array_of(TypeExpr::single("UserOutput"))],
        ));
        let names: Vec<&str> = ty.singles().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["JsonResponse", "UserOutput"]);
        assert_eq!(ty.to_string(), "JsonResponse<UserOutput[]>");
    }

    #[test]
    fn test_mentions_native_array() {
        assert!(TypeExpr::single("array").mentions_native_array());
        assert!(TypeExpr::nullable(TypeExpr::single("array")).mentions_native_array());
        assert!(!TypeExpr::array_of(TypeExpr::single("int")).mentions_native_array());
    }
}
