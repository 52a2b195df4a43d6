use dtogen_codegen::{ResolveContext, Result, TypeRenderer, UnknownTypeResolver};
use dtogen_ir::SingleType;

use super::{enum_union, render_generic};

/// Resolves names of known DTOs to a reference to their generated type.
///
/// With [`use_types_instead_of_enums`](dtogen_codegen::GeneratorOptions)
/// set, a reference to an enum DTO is replaced by the union of its member
/// values.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassNameTypeResolver;

impl UnknownTypeResolver for ClassNameTypeResolver {
    fn name(&self) -> &'static str {
        "class-name"
    }

    fn supports(&self, ty: &SingleType, ctx: &ResolveContext<'_>) -> bool {
        ctx.dto_list.has(&ty.name)
    }

    fn resolve(
        &self,
        ty: &SingleType,
        ctx: &ResolveContext<'_>,
        renderer: &dyn TypeRenderer,
    ) -> Result<String> {
        let Some(dto) = ctx.dto_list.get(&ty.name) else {
            return Err(ctx.unsupported(ty));
        };

        match &dto.enum_type {
            Some(enumeration) if ctx.options.use_types_instead_of_enums => Ok(enum_union(enumeration)),
            _ => render_generic(&dto.title, ty, ctx, renderer),
        }
    }
}
