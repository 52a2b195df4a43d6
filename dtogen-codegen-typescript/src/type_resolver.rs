//! Type expression rendering.

use dtogen_codegen::{ResolveContext, Result, TypeRenderer, TypeResolverChain};
use dtogen_ir::{Primitive, SingleType, TypeExpr};

/// Maps primitives directly and delegates every other name to a resolver chain.
///
/// Primitive mapping:
///
/// | source | TypeScript |
/// |---|---|
/// | `string` | `string` |
/// | `int`, `float` | `number` |
/// | `bool` | `boolean` |
/// | `array` | `any[]` |
/// | `mixed` | `any` |
/// | `null` | `null` |
///
/// A name equal to the owning DTO's generic parameter is emitted as-is.
#[derive(Debug, Default)]
pub struct TypeScriptTypeResolver {
    chain: TypeResolverChain,
}

impl TypeScriptTypeResolver {
    pub fn new(chain: TypeResolverChain) -> Self {
        Self { chain }
    }

    fn render_single(&self, ty: &SingleType, ctx: &ResolveContext<'_>) -> Result<String> {
        if let Some(primitive) = ty.primitive() {
            return Ok(map_primitive(primitive).to_string());
        }
        if ctx.owner.generic_param() == Some(ty.name.as_str()) {
            return Ok(ty.name.clone());
        }
        self.chain.resolve(ty, ctx, self)
    }
}

fn map_primitive(primitive: Primitive) -> &'static str {
    match primitive {
        Primitive::String => "string",
        Primitive::Int | Primitive::Float => "number",
        Primitive::Bool => "boolean",
        Primitive::Array => "any[]",
        Primitive::Mixed => "any",
        Primitive::Null => "null",
    }
}

impl TypeRenderer for TypeScriptTypeResolver {
    fn render(&self, ty: &TypeExpr, ctx: &ResolveContext<'_>) -> Result<String> {
        match ty {
            TypeExpr::Single(single) => self.render_single(single, ctx),
            TypeExpr::Union(union) => {
                let mut members: Vec<String> = Vec::with_capacity(union.types().len());
                for member in union.types() {
                    let rendered = self.render(member, ctx)?;
                    // Distinct source types may map to one TS type (int|float)
                    if !members.contains(&rendered) {
                        members.push(rendered);
                    }
                }
                Ok(members.join(" | "))
            }
            TypeExpr::Array(array) => {
                let element = self.render(&array.element, ctx)?;
                if element.contains(" | ") {
                    Ok(format!("({element})[]"))
                } else {
                    Ok(format!("{element}[]"))
                }
            }
        }
    }
}
