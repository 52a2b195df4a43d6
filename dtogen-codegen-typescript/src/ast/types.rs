//! Object types and type aliases.

use dtogen_codegen::{CodeFragment, Renderable};

/// A member of an object type. `name` is emitted as-is, so it may already
/// carry a `?` or quotes.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: String,
    pub ty: String,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

/// `export type Name<T> = { ... };`
#[derive(Debug, Clone)]
pub struct ObjectType {
    name: String,
    generics: Vec<String>,
    fields: Vec<Field>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            fields: Vec::new(),
        }
    }

    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    fn head(&self) -> String {
        if self.generics.is_empty() {
            format!("export type {} =", self.name)
        } else {
            format!("export type {}<{}> =", self.name, self.generics.join(", "))
        }
    }
}

impl Renderable for ObjectType {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            return vec![CodeFragment::line(format!("{} {{}};", self.head()))];
        }

        let body = self
            .fields
            .iter()
            .map(|field| CodeFragment::line(format!("{}: {};", field.name, field.ty)))
            .collect();

        vec![CodeFragment::block(
            format!("{} {{", self.head()),
            body,
            Some("};".into()),
        )]
    }
}

/// `export type Name = <type>;`
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// Alias for a union of the given members. No members is `never`.
    pub fn union(name: impl Into<String>, members: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        if members.is_empty() {
            return Self::new(name, "never");
        }
        Self::new(name, members.join(" | "))
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "export type {} = {};",
            self.name, self.ty
        ))]
    }
}
