//! Strategies for naming object type members.

use dtogen_core::to_camel_case;
use dtogen_ir::DtoProperty;

use crate::naming::property_key;

/// Produces the key written before `:` in an object type.
pub trait PropertyNameGenerator {
    fn supports(&self, property: &DtoProperty) -> bool;

    fn generate(&self, property: &DtoProperty) -> String;
}

/// The source name, quoted when it is not an identifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPropertyNameGenerator;

impl PropertyNameGenerator for PlainPropertyNameGenerator {
    fn supports(&self, _property: &DtoProperty) -> bool {
        true
    }

    fn generate(&self, property: &DtoProperty) -> String {
        property_key(&property.name)
    }
}

/// `name?` for properties that have a default value.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionalPropertyNameGenerator;

impl PropertyNameGenerator for OptionalPropertyNameGenerator {
    fn supports(&self, property: &DtoProperty) -> bool {
        property.has_default
    }

    fn generate(&self, property: &DtoProperty) -> String {
        format!("{}?", property_key(&property.name))
    }
}

/// camelCase keys, e.g. `created_at` becomes `createdAt`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCasePropertyNameGenerator;

impl PropertyNameGenerator for CamelCasePropertyNameGenerator {
    fn supports(&self, _property: &DtoProperty) -> bool {
        true
    }

    fn generate(&self, property: &DtoProperty) -> String {
        property_key(&to_camel_case(&property.name))
    }
}

/// Ordered generators; the first that supports a property names it.
/// Falls back to [`PlainPropertyNameGenerator`].
#[derive(Default)]
pub struct PropertyNameChain {
    generators: Vec<Box<dyn PropertyNameGenerator>>,
}

impl PropertyNameChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, generator: impl PropertyNameGenerator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    pub fn generate(&self, property: &DtoProperty) -> String {
        self.generators
            .iter()
            .find(|g| g.supports(property))
            .map(|g| g.generate(property))
            .unwrap_or_else(|| PlainPropertyNameGenerator.generate(property))
    }
}
