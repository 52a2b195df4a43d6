use dtogen_codegen::{ResolveContext, Result, TypeOwner, TypeRenderer, UnknownTypeResolver};
use dtogen_core::{pluralize, to_snake_case};
use dtogen_ir::SingleType;
use indexmap::IndexMap;

/// Replaces selected foreign class names with caller-supplied type text,
/// and entity references inside input DTOs with IRIs.
///
/// An input DTO is one whose title ends in `Input`. Clients send related
/// entities as IRIs, so any class it references that is neither a DTO nor
/// in the override map becomes `string`. With
/// [`nested_generics_use_template_literal`](dtogen_codegen::GeneratorOptions)
/// set, the IRI is spelled as a template literal type instead:
/// `Industry` becomes `` `/api/industries/${string}` ``.
///
/// Map entries always win and are emitted verbatim.
#[derive(Debug, Clone, Default)]
pub struct LiteralOverrideTypeResolver {
    overrides: IndexMap<String, String>,
}

impl LiteralOverrideTypeResolver {
    pub fn new(overrides: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl UnknownTypeResolver for LiteralOverrideTypeResolver {
    fn name(&self) -> &'static str {
        "literal-override"
    }

    fn supports(&self, ty: &SingleType, ctx: &ResolveContext<'_>) -> bool {
        self.overrides.contains_key(&ty.name) || (is_input(ctx) && !ctx.dto_list.has(&ty.name))
    }

    fn resolve(&self, ty: &SingleType, ctx: &ResolveContext<'_>, _renderer: &dyn TypeRenderer) -> Result<String> {
        if let Some(value) = self.overrides.get(&ty.name) {
            return Ok(value.clone());
        }
        if !is_input(ctx) {
            return Err(ctx.unsupported(ty));
        }
        if ctx.options.nested_generics_use_template_literal {
            Ok(format!("`{}${{string}}`", iri_prefix(&ty.name)))
        } else {
            Ok("string".to_string())
        }
    }
}

fn is_input(ctx: &ResolveContext<'_>) -> bool {
    matches!(ctx.owner, TypeOwner::Dto(dto) if dto.title.ends_with("Input"))
}

/// `LocationPoint` becomes `/api/location_points/`.
fn iri_prefix(class: &str) -> String {
    format!("/api/{}/", pluralize(&to_snake_case(class)))
}
