use dtogen_codegen::{ResolveContext, Result, TypeRenderer, UnknownTypeResolver};
use dtogen_ir::SingleType;

use super::render_generic;
use crate::COLLECTION_RESPONSE_TYPE;

/// Resolves the synthetic collection wrapper put around collection outputs.
///
/// The wrapper type itself is appended to the output by
/// [`AppendCollectionResponseFileProcessor`](crate::AppendCollectionResponseFileProcessor).
/// A DTO with the same name takes precedence.
#[derive(Debug, Clone)]
pub struct CollectionResponseTypeResolver {
    name: String,
}

impl CollectionResponseTypeResolver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Default for CollectionResponseTypeResolver {
    fn default() -> Self {
        Self::new(COLLECTION_RESPONSE_TYPE)
    }
}

impl UnknownTypeResolver for CollectionResponseTypeResolver {
    fn name(&self) -> &'static str {
        "collection-response"
    }

    fn supports(&self, ty: &SingleType, ctx: &ResolveContext<'_>) -> bool {
        ty.name == self.name && !ctx.dto_list.has(&ty.name)
    }

    fn resolve(&self, ty: &SingleType, ctx: &ResolveContext<'_>, renderer: &dyn TypeRenderer) -> Result<String> {
        if ty.args.is_empty() {
            return Ok(format!("{}<any>", self.name));
        }
        render_generic(&self.name, ty, ctx, renderer)
    }
}
