//! Markers (attributes/annotations) attached to declarations.
//!
//! Only literal argument shapes are modeled: scalars, class references,
//! ordered arrays with optional keys, and nested marker instances.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::short_name;

/// A marker instance, e.g. `Route('/api/users', methods: ['GET'])`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub name: String,
    #[serde(default)]
    pub args: Vec<MarkerArg>,
}

impl Marker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Add a positional argument.
    pub fn positional(mut self, value: MarkerValue) -> Self {
        self.args.push(MarkerArg { name: None, value });
        self
    }

    /// Add a named argument.
    pub fn named(mut self, name: impl Into<String>, value: MarkerValue) -> Self {
        self.args.push(MarkerArg {
            name: Some(name.into()),
            value,
        });
        self
    }

    /// Marker name without namespace qualifiers.
    pub fn short_name(&self) -> &str {
        short_name(&self.name)
    }

    /// Whether this marker has the given (unqualified) name.
    pub fn is(&self, name: &str) -> bool {
        self.short_name() == short_name(name)
    }

    /// Look up a named argument.
    pub fn arg(&self, name: &str) -> Option<&MarkerValue> {
        self.args
            .iter()
            .find(|arg| arg.name.as_deref() == Some(name))
            .map(|arg| &arg.value)
    }

    /// Look up the `index`-th positional argument.
    pub fn positional_arg(&self, index: usize) -> Option<&MarkerValue> {
        self.args
            .iter()
            .filter(|arg| arg.name.is_none())
            .nth(index)
            .map(|arg| &arg.value)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(ToString::to_string).collect();
        write!(f, "{}({})", self.short_name(), args.join(", "))
    }
}

/// One marker argument, positional when `name` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerArg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub value: MarkerValue,
}

impl fmt::Display for MarkerArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{name}: {}", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

/// An entry of an ordered array; keyed entries form a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub value: MarkerValue,
}

impl ArrayItem {
    pub fn value(value: MarkerValue) -> Self {
        Self { key: None, value }
    }

    pub fn keyed(key: impl Into<String>, value: MarkerValue) -> Self {
        Self {
            key: Some(key.into()),
            value,
        }
    }
}

/// A literal marker argument value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// A class-name reference, e.g. `UserOutput::class`.
    Class(String),
    Array(Vec<ArrayItem>),
    /// A nested marker instance, e.g. `new Get(output: ...)`.
    Marker(Marker),
}

impl MarkerValue {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::Class(name.into())
    }

    /// A list of unkeyed values.
    pub fn list(values: impl IntoIterator<Item = MarkerValue>) -> Self {
        Self::Array(values.into_iter().map(ArrayItem::value).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The referenced class name, unqualified. Strings naming a class are accepted too.
    pub fn as_class(&self) -> Option<&str> {
        match self {
            Self::Class(name) | Self::String(name) => Some(short_name(name)),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_false(&self) -> bool {
        matches!(self, Self::Bool(false))
    }

    pub fn items(&self) -> &[ArrayItem] {
        match self {
            Self::Array(items) => items,
            _ => &[],
        }
    }

    /// Look up a keyed array entry.
    pub fn get(&self, key: &str) -> Option<&MarkerValue> {
        self.items()
            .iter()
            .find(|item| item.key.as_deref() == Some(key))
            .map(|item| &item.value)
    }

    /// A string, or the first string of a list (e.g. `methods: ['GET']`).
    pub fn first_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Array(items) => items.iter().find_map(|item| item.value.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for MarkerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => write!(f, "'{s}'"),
            Self::Class(name) => write!(f, "{name}::class"),
            Self::Array(items) => {
                let items: Vec<String> = items
                    .iter()
                    .map(|item| match &item.key {
                        Some(key) => format!("'{key}' => {}", item.value),
                        None => item.value.to_string(),
                    })
                    .collect();
                write!(f, "[{}]", items.join(", "))
            }
            Self::Marker(marker) => write!(f, "new {marker}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_lookup() {
        let route = Marker::new("Symfony\\Component\\Routing\\Annotation\\Route")
            .positional(MarkerValue::string("/api/users"))
            .named("methods", MarkerValue::list([MarkerValue::string("GET")]));

        assert!(route.is("Route"));
        assert_eq!(
            route.positional_arg(0).and_then(MarkerValue::as_str),
            Some("/api/users")
        );
        assert_eq!(
            route.arg("methods").and_then(MarkerValue::first_str),
            Some("GET")
        );
        assert!(route.arg("name").is_none());
    }

    #[test]
    fn test_marker_display_echoes_arguments() {
        let resource = Marker::new("ApiResource").named(
            "collectionOperations",
            MarkerValue::Array(vec![ArrayItem::keyed(
                "post",
                MarkerValue::Array(vec![ArrayItem::keyed(
                    "output",
                    MarkerValue::class("StudentNotesOutput"),
                )]),
            )]),
        );
        assert_eq!(
            resource.to_string(),
            "ApiResource(collectionOperations: ['post' => ['output' => StudentNotesOutput::class]])"
        );

        let modern = Marker::new("ApiResource").named(
            "operations",
            MarkerValue::list([MarkerValue::Marker(Marker::new("Get"))]),
        );
        assert_eq!(modern.to_string(), "ApiResource(operations: [new Get()])");
    }

    #[test]
    fn test_marker_value_deserializes_from_json() {
        let value: MarkerValue = serde_json::from_str(
            r#"{"array": [{"value": {"string": "get"}}, {"key": "put", "value": {"array": []}}]}"#,
        )
        .unwrap();
        assert_eq!(value.items().len(), 2);
        assert!(value.get("put").is_some());
        assert_eq!(value.items()[0].value.as_str(), Some("get"));
    }
}
