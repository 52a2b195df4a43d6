//! Declarations exposed by the source parser.

use serde::{Deserialize, Serialize};

use crate::{Error, Marker, MarkerValue, Result};

/// Strip namespace qualifiers from a name (`\App\Dto\User` -> `User`).
pub fn short_name(name: &str) -> &str {
    let trimmed = name.trim_start_matches('\\');
    trimmed.rsplit('\\').next().unwrap_or(trimmed)
}

/// One parsed source file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceUnit {
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl SourceUnit {
    pub fn new(declarations: Vec<Declaration>) -> Self {
        Self { declarations }
    }

    /// Parse a unit from JSON text.
    pub fn from_json_with_filename(src: &str, filename: &str) -> Result<Self> {
        serde_json::from_str(src).map_err(|e| Error::parse(e, src, filename))
    }
}

/// Kind of a top-level declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    #[default]
    Class,
    Enum,
    Interface,
}

/// A declared type shape as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeNode {
    /// `Foo`
    Named { name: String },
    /// `?Foo`
    Nullable { name: String },
    /// `Foo|Bar|null`
    Union { types: Vec<String> },
}

impl TypeNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named { name: name.into() }
    }

    pub fn nullable(name: impl Into<String>) -> Self {
        Self::Nullable { name: name.into() }
    }

    pub fn union(types: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::Union {
            types: types.into_iter().map(Into::into).collect(),
        }
    }
}

/// A class property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeNode>,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub has_default: bool,
    #[serde(default)]
    pub is_static: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: Option<TypeNode>) -> Self {
        Self {
            name: name.into(),
            ty,
            doc: None,
            has_default: false,
            is_static: false,
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }
}

/// A method or constructor parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default, rename = "type")]
    pub ty: Option<TypeNode>,
    #[serde(default)]
    pub has_default: bool,
    /// Constructor parameter promoted to a property (carries a visibility modifier).
    #[serde(default)]
    pub promoted: bool,
    #[serde(default)]
    pub markers: Vec<Marker>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: Option<TypeNode>) -> Self {
        Self {
            name: name.into(),
            ty,
            has_default: false,
            promoted: false,
            markers: Vec::new(),
        }
    }

    pub fn promoted(mut self) -> Self {
        self.promoted = true;
        self
    }

    pub fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn has_marker(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m.is(name))
    }
}

/// A method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub constructor: bool,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub params: Vec<Param>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            constructor: false,
            markers: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn constructor() -> Self {
        Self {
            constructor: true,
            ..Self::new("__construct")
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    pub fn find_marker(&self, name: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.is(name))
    }
}

/// A class constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
    pub value: MarkerValue,
}

/// An enum case, with its literal value when backed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumCase {
    pub name: String,
    #[serde(default)]
    pub value: Option<MarkerValue>,
}

/// A top-level class, enum or interface declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    #[serde(default)]
    pub kind: DeclarationKind,
    pub name: String,
    #[serde(default)]
    pub doc: Option<String>,
    #[serde(default)]
    pub extends: Option<String>,
    #[serde(default)]
    pub markers: Vec<Marker>,
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub constants: Vec<Constant>,
    #[serde(default)]
    pub cases: Vec<EnumCase>,
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl Declaration {
    pub fn class(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn enumeration(name: impl Into<String>) -> Self {
        Self {
            kind: DeclarationKind::Enum,
            ..Self::class(name)
        }
    }

    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends = Some(parent.into());
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.markers.push(marker);
        self
    }

    pub fn property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn constant(mut self, name: impl Into<String>, value: MarkerValue) -> Self {
        self.constants.push(Constant {
            name: name.into(),
            value,
        });
        self
    }

    pub fn case(mut self, name: impl Into<String>, value: Option<MarkerValue>) -> Self {
        self.cases.push(EnumCase {
            name: name.into(),
            value,
        });
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Declaration name without namespace qualifiers.
    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }

    pub fn constructor(&self) -> Option<&Method> {
        self.methods.iter().find(|m| m.constructor)
    }

    pub fn has_marker(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m.is(name))
    }

    /// All markers with the given name, in declaration order.
    pub fn markers_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Marker> {
        self.markers.iter().filter(move |m| m.is(name))
    }
}
