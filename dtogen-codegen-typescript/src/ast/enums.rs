use dtogen_codegen::{CodeFragment, Renderable};

use crate::naming::property_key;

/// `export enum Name { MEMBER = value, }`
#[derive(Debug, Clone)]
pub struct Enum {
    name: String,
    members: Vec<(String, String)>,
}

impl Enum {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member with an already rendered value.
    pub fn member(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.members.push((name.into(), value.into()));
        self
    }
}

impl Renderable for Enum {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let body = self
            .members
            .iter()
            .map(|(name, value)| CodeFragment::line(format!("{} = {value},", property_key(name))))
            .collect();
        vec![CodeFragment::block(
            format!("export enum {} {{", self.name),
            body,
            Some("}".into()),
        )]
    }
}
