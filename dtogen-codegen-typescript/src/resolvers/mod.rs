//! Resolvers for names that are not primitives.
//!
//! Order them most specific first. [`ClassNameTypeResolver`] accepts any
//! known DTO, so it usually goes last.

mod class_name;
mod collection_response;
mod date_time;
mod literal_override;

pub use class_name::ClassNameTypeResolver;
pub use collection_response::CollectionResponseTypeResolver;
pub use date_time::DateTimeTypeResolver;
pub use literal_override::LiteralOverrideTypeResolver;

use dtogen_codegen::{ResolveContext, Result, TypeRenderer};
use dtogen_ir::{DtoEnum, SingleType};

/// Member values of an enum as a literal union. No members is `never`.
pub(crate) fn enum_union(enumeration: &DtoEnum) -> String {
    if enumeration.members.is_empty() {
        return "never".to_string();
    }
    enumeration
        .members
        .iter()
        .map(|m| m.value.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render `Name<A, B>` with every argument through `renderer`.
pub(crate) fn render_generic(
    name: &str,
    ty: &SingleType,
    ctx: &ResolveContext<'_>,
    renderer: &dyn TypeRenderer,
) -> Result<String> {
    if ty.args.is_empty() {
        return Ok(name.to_string());
    }
    let args = ty
        .args
        .iter()
        .map(|arg| renderer.render(arg, ctx))
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("{name}<{}>", args.join(", ")))
}
