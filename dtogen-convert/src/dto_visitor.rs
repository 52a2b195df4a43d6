//! Classes and enums to DTOs.

use dtogen_ir::{DtoProperty, DtoType, EnumMember, LiteralValue, TypeExpr};
use dtogen_syntax::{Declaration, DeclarationKind, MarkerValue, SourceUnit, TypeNode, short_name};
use tracing::{debug, warn};

use crate::{
    AcceptAll, ConvertContext, DeclarationFilter, Result, Visitor,
    doc_hint::{DocBlock, parse_type},
};

/// Builds a [`DtoType`] for every accepted class or enum.
///
/// Properties come from typed instance properties followed by promoted
/// constructor parameters. Constants never become properties, except as
/// the members of a legacy enum class (one extending `Enum`).
pub struct DtoVisitor {
    filter: Box<dyn DeclarationFilter>,
}

impl DtoVisitor {
    pub fn new() -> Self {
        Self {
            filter: Box::new(AcceptAll),
        }
    }

    pub fn with_filter(filter: impl DeclarationFilter + 'static) -> Self {
        Self {
            filter: Box::new(filter),
        }
    }

    fn normalize(&self, decl: &Declaration, ctx: &mut ConvertContext) -> DtoType {
        let title = decl.short_name();

        if decl.kind == DeclarationKind::Enum {
            let members = decl
                .cases
                .iter()
                .map(|case| {
                    let value = match &case.value {
                        Some(value) => literal(value),
                        // Pure enum cases are sent over the wire by name
                        None => LiteralValue::String(case.name.clone()),
                    };
                    EnumMember::new(&case.name, value)
                })
                .collect();
            return DtoType::enumeration(title, members);
        }

        if is_legacy_enum(decl) {
            let members = decl
                .constants
                .iter()
                .map(|constant| EnumMember::new(&constant.name, literal(&constant.value)))
                .collect();
            return DtoType::enumeration(title, members);
        }

        let mut dto = DtoType::new(title);
        if let Some(param) = decl.doc.as_deref().and_then(|doc| DocBlock::parse(doc).template()) {
            dto = dto.generic(param);
        }

        for prop in decl.properties.iter().filter(|p| !p.is_static) {
            let hint = prop.doc.as_deref().and_then(|doc| DocBlock::parse(doc).var());
            let location = format!("{title}::{}", prop.name);
            let ty = member_type(prop.ty.as_ref(), hint, ctx, self.name(), &location);
            dto = dto.property(property(&prop.name, ty, prop.has_default));
        }

        if let Some(ctor) = decl.constructor() {
            let doc = ctor.doc.as_deref().map(DocBlock::parse);
            for param in ctor.params.iter().filter(|p| p.promoted) {
                let hint = doc.as_ref().and_then(|doc| doc.param(&param.name));
                let location = format!("{title}::{}", param.name);
                let ty = member_type(param.ty.as_ref(), hint, ctx, self.name(), &location);
                dto = dto.property(property(&param.name, ty, param.has_default));
            }
        }

        dto
    }
}

impl Default for DtoVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for DtoVisitor {
    fn name(&self) -> &'static str {
        "dto"
    }

    fn visit(&self, unit: &SourceUnit, ctx: &mut ConvertContext) -> Result<()> {
        for decl in &unit.declarations {
            if decl.kind == DeclarationKind::Interface {
                continue;
            }
            if !self.filter.is_dto(&decl.markers) {
                debug!(declaration = %decl.name, "skipped by filter");
                continue;
            }
            let dto = self.normalize(decl, ctx);
            ctx.add_dto(dto);
        }
        Ok(())
    }
}

fn property(name: &str, ty: TypeExpr, has_default: bool) -> DtoProperty {
    let property = DtoProperty::new(name, ty);
    if has_default {
        property.with_default()
    } else {
        property
    }
}

fn is_legacy_enum(decl: &Declaration) -> bool {
    decl.extends
        .as_deref()
        .is_some_and(|parent| short_name(parent) == "Enum")
}

fn literal(value: &MarkerValue) -> LiteralValue {
    match value {
        MarkerValue::Bool(b) => LiteralValue::Bool(*b),
        MarkerValue::Int(i) => LiteralValue::Int(*i),
        MarkerValue::Float(x) => LiteralValue::String(x.to_string()),
        MarkerValue::String(s) | MarkerValue::Class(s) => LiteralValue::String(s.clone()),
        MarkerValue::Null | MarkerValue::Array(_) | MarkerValue::Marker(_) => LiteralValue::Null,
    }
}

/// Convert a declared type shape into a type expression.
pub(crate) fn type_from_node(node: &TypeNode) -> TypeExpr {
    match node {
        TypeNode::Named { name } => TypeExpr::single(short_name(name)),
        TypeNode::Nullable { name } => TypeExpr::nullable(TypeExpr::single(short_name(name))),
        TypeNode::Union { types } => {
            TypeExpr::union(types.iter().map(|name| TypeExpr::single(short_name(name))))
        }
    }
}

/// Parse a doc hint, degrading to `mixed` and recording a warning when malformed.
pub(crate) fn parse_hint(
    hint: &str,
    ctx: &mut ConvertContext,
    visitor: &str,
    location: &str,
) -> TypeExpr {
    match parse_type(hint) {
        Ok(ty) => ty,
        Err(err) => {
            warn!(%location, "{err}");
            ctx.add_warning(visitor, location, err.to_string());
            TypeExpr::mixed()
        }
    }
}

/// Pick the type of a member from its declared type and doc hint.
///
/// A declared type wins unless it mentions the native `array`, in which
/// case the hint describes the elements. Untyped members fall back to the
/// hint, then to `mixed`.
pub(crate) fn member_type(
    declared: Option<&TypeNode>,
    hint: Option<&str>,
    ctx: &mut ConvertContext,
    visitor: &str,
    location: &str,
) -> TypeExpr {
    match (declared.map(type_from_node), hint) {
        (Some(ty), Some(hint)) if ty.mentions_native_array() => {
            let hinted = parse_hint(hint, ctx, visitor, location);
            if ty.is_nullable() {
                TypeExpr::nullable(hinted)
            } else {
                hinted
            }
        }
        (Some(ty), _) => ty,
        (None, Some(hint)) => parse_hint(hint, ctx, visitor, location),
        (None, None) => TypeExpr::mixed(),
    }
}
