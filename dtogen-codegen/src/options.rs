//! Switches shared by every backend.

/// Options that change how types are emitted.
///
/// The generator hands them to every resolver through
/// [`ResolveContext`](crate::ResolveContext), so resolvers never carry
/// their own copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Emit enums as unions of literals and inline those unions at use sites.
    pub use_types_instead_of_enums: bool,
    /// Render entity references inside input DTOs as IRI template literals.
    pub nested_generics_use_template_literal: bool,
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_types_instead_of_enums(mut self, value: bool) -> Self {
        self.use_types_instead_of_enums = value;
        self
    }

    pub fn nested_generics_use_template_literal(mut self, value: bool) -> Self {
        self.nested_generics_use_template_literal = value;
        self
    }
}
