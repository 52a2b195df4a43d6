//! Normalized DTO model.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::TypeExpr;

/// A property of a DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtoProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    /// Whether the declaration provides a default value.
    #[serde(default)]
    pub has_default: bool,
}

impl DtoProperty {
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            has_default: false,
        }
    }

    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// A literal value carried by an enum member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Null,
    Bool(bool),
    Int(i64),
    String(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::String(s) => write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        }
    }
}

/// Backing kind of an enum, inferred from its first int or string literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumBacking {
    #[default]
    None,
    Int,
    String,
}

impl EnumBacking {
    /// Infer the backing kind from member values.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a LiteralValue>) -> Self {
        values
            .into_iter()
            .find_map(|value| match value {
                LiteralValue::Int(_) => Some(Self::Int),
                LiteralValue::String(_) => Some(Self::String),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// A named enum member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumMember {
    pub name: String,
    pub value: LiteralValue,
}

impl EnumMember {
    pub fn new(name: impl Into<String>, value: LiteralValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Enum description attached to an enum DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtoEnum {
    pub backing: EnumBacking,
    pub members: Vec<EnumMember>,
}

impl DtoEnum {
    /// Build an enum, inferring the backing kind from the members.
    pub fn new(members: Vec<EnumMember>) -> Self {
        let backing = EnumBacking::infer(members.iter().map(|m| &m.value));
        Self { backing, members }
    }

    pub fn has_null_member(&self) -> bool {
        self.members.iter().any(|m| m.value == LiteralValue::Null)
    }

    pub fn has_bool_member(&self) -> bool {
        self.members
            .iter()
            .any(|m| matches!(m.value, LiteralValue::Bool(_)))
    }
}

/// A normalized class description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtoType {
    pub title: String,
    pub properties: Vec<DtoProperty>,
    /// Formal generic parameter name (e.g. `T` from a template hint).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_param: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", rename = "enum")]
    pub enum_type: Option<DtoEnum>,
}

impl DtoType {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            properties: Vec::new(),
            generic_param: None,
            enum_type: None,
        }
    }

    pub fn enumeration(title: impl Into<String>, members: Vec<EnumMember>) -> Self {
        Self {
            enum_type: Some(DtoEnum::new(members)),
            ..Self::new(title)
        }
    }

    pub fn property(mut self, property: DtoProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generic_param = Some(param.into());
        self
    }

    pub fn is_enum(&self) -> bool {
        self.enum_type.is_some()
    }

    /// Whether `name` is this DTO's formal generic parameter.
    pub fn is_generic_param(&self, name: &str) -> bool {
        self.generic_param.as_deref() == Some(name)
    }
}

/// Ordered collection of DTOs keyed by title.
///
/// Adding a DTO whose title already exists replaces the earlier one
/// (last write wins) while keeping its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DtoList {
    dtos: IndexMap<String, DtoType>,
}

impl DtoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a DTO. Returns the replaced DTO on title collision.
    pub fn add(&mut self, dto: DtoType) -> Option<DtoType> {
        self.dtos.insert(dto.title.clone(), dto)
    }

    /// Merge another list into this one, last write wins.
    pub fn merge(&mut self, other: DtoList) {
        for (_, dto) in other.dtos {
            self.add(dto);
        }
    }

    pub fn get(&self, title: &str) -> Option<&DtoType> {
        self.dtos.get(title)
    }

    pub fn has(&self, title: &str) -> bool {
        self.dtos.contains_key(title)
    }

    /// Iterate over DTOs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DtoType> {
        self.dtos.values()
    }

    pub fn len(&self) -> usize {
        self.dtos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dtos.is_empty()
    }
}

impl FromIterator<DtoType> for DtoList {
    fn from_iter<I: IntoIterator<Item = DtoType>>(iter: I) -> Self {
        let mut list = Self::new();
        for dto in iter {
            list.add(dto);
        }
        list
    }
}
