use dtogen_codegen::{ResolveContext, Result, TypeRenderer, UnknownTypeResolver};
use dtogen_ir::SingleType;

const DATE_TIME_TYPES: &[&str] = &["DateTime", "DateTimeImmutable", "DateTimeInterface"];

/// Date objects travel as ISO-8601 strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeTypeResolver;

impl UnknownTypeResolver for DateTimeTypeResolver {
    fn name(&self) -> &'static str {
        "date-time"
    }

    fn supports(&self, ty: &SingleType, _ctx: &ResolveContext<'_>) -> bool {
        DATE_TIME_TYPES.contains(&ty.name.as_str())
    }

    fn resolve(&self, _ty: &SingleType, _ctx: &ResolveContext<'_>, _renderer: &dyn TypeRenderer) -> Result<String> {
        Ok("string".to_string())
    }
}
