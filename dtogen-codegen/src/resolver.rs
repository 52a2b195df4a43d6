//! Resolution of non-primitive type names.
//!
//! A backend maps primitives itself and hands every other [`SingleType`]
//! to a [`TypeResolverChain`]. The first resolver whose `supports` answers
//! `true` renders the type; when none does, emission fails with
//! [`Error::UnsupportedType`].

use dtogen_ir::{ApiEndpoint, DtoList, DtoType, SingleType, TypeExpr};
use tracing::trace;

use crate::{Error, GeneratorOptions, Result};

/// The DTO or endpoint a type reference appears in.
#[derive(Debug, Clone, Copy)]
pub enum TypeOwner<'a> {
    Dto(&'a DtoType),
    Endpoint(&'a ApiEndpoint),
}

impl TypeOwner<'_> {
    /// Human-readable owner name used in error messages.
    pub fn name(&self) -> String {
        match self {
            Self::Dto(dto) => dto.title.clone(),
            Self::Endpoint(endpoint) => format!("{} {}", endpoint.method, endpoint.path),
        }
    }

    /// The formal generic parameter in scope, if any.
    pub fn generic_param(&self) -> Option<&str> {
        match self {
            Self::Dto(dto) => dto.generic_param.as_deref(),
            Self::Endpoint(_) => None,
        }
    }
}

/// Everything a resolver may consult.
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub owner: TypeOwner<'a>,
    pub dto_list: &'a DtoList,
    pub options: GeneratorOptions,
}

impl<'a> ResolveContext<'a> {
    /// A context with default options.
    pub fn new(owner: TypeOwner<'a>, dto_list: &'a DtoList) -> Self {
        Self {
            owner,
            dto_list,
            options: GeneratorOptions::default(),
        }
    }

    pub fn with_options(mut self, options: GeneratorOptions) -> Self {
        self.options = options;
        self
    }

    pub fn unsupported(&self, ty: &SingleType) -> Error {
        Error::UnsupportedType {
            ty: ty.to_string(),
            owner: self.owner.name(),
        }
    }
}

/// Renders a whole type expression in the target language.
///
/// Resolvers receive the renderer so generic arguments go through the
/// same mapping as top-level types.
pub trait TypeRenderer {
    fn render(&self, ty: &TypeExpr, ctx: &ResolveContext<'_>) -> Result<String>;
}

/// A pluggable mapping for one family of named types.
pub trait UnknownTypeResolver {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn supports(&self, ty: &SingleType, ctx: &ResolveContext<'_>) -> bool;

    fn resolve(
        &self,
        ty: &SingleType,
        ctx: &ResolveContext<'_>,
        renderer: &dyn TypeRenderer,
    ) -> Result<String>;
}

/// Ordered list of resolvers. The first that supports a type wins.
#[derive(Default)]
pub struct TypeResolverChain {
    resolvers: Vec<Box<dyn UnknownTypeResolver>>,
}

impl TypeResolverChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resolver after the existing ones.
    pub fn with(mut self, resolver: impl UnknownTypeResolver + 'static) -> Self {
        self.push(resolver);
        self
    }

    pub fn push(&mut self, resolver: impl UnknownTypeResolver + 'static) {
        self.resolvers.push(Box::new(resolver));
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolve `ty` with the first supporting resolver.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedType`] naming the type and its owner
    /// when no resolver supports it.
    pub fn resolve(
        &self,
        ty: &SingleType,
        ctx: &ResolveContext<'_>,
        renderer: &dyn TypeRenderer,
    ) -> Result<String> {
        let resolver = self
            .resolvers
            .iter()
            .find(|r| r.supports(ty, ctx))
            .ok_or_else(|| ctx.unsupported(ty))?;
        trace!(resolver = resolver.name(), ty = %ty, "resolving type");
        resolver.resolve(ty, ctx, renderer)
    }
}

impl std::fmt::Debug for TypeResolverChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.resolvers.iter().map(|r| r.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use dtogen_ir::{DtoProperty, HttpMethod};

    use super::*;

    struct Upper;

    impl UnknownTypeResolver for Upper {
        fn name(&self) -> &'static str {
            "upper"
        }

        fn supports(&self, ty: &SingleType, _: &ResolveContext<'_>) -> bool {
            ty.name.starts_with('X')
        }

        fn resolve(&self, ty: &SingleType, _: &ResolveContext<'_>, _: &dyn TypeRenderer) -> Result<String> {
            Ok(ty.name.to_uppercase())
        }
    }

    struct Known;

    impl UnknownTypeResolver for Known {
        fn name(&self) -> &'static str {
            "known"
        }

        fn supports(&self, ty: &SingleType, ctx: &ResolveContext<'_>) -> bool {
            ctx.dto_list.has(&ty.name)
        }

        fn resolve(&self, ty: &SingleType, _: &ResolveContext<'_>, _: &dyn TypeRenderer) -> Result<String> {
            Ok(format!("known {}", ty.name))
        }
    }

    struct Plain;

    impl TypeRenderer for Plain {
        fn render(&self, ty: &TypeExpr, _: &ResolveContext<'_>) -> Result<String> {
            Ok(ty.to_string())
        }
    }

    #[test]
    fn test_first_supporting_resolver_wins() {
        let dto_list: DtoList = [DtoType::new("Xray")].into_iter().collect();
        let dto = DtoType::new("A").property(DtoProperty::new("b", TypeExpr::single("Xray")));
        let ctx = ResolveContext::new(TypeOwner::Dto(&dto), &dto_list);

        let chain = TypeResolverChain::new().with(Upper).with(Known);
        assert_eq!(chain.resolve(&SingleType::new("Xray"), &ctx, &Plain).unwrap(), "XRAY");

        let chain = TypeResolverChain::new().with(Known).with(Upper);
        assert_eq!(chain.resolve(&SingleType::new("Xray"), &ctx, &Plain).unwrap(), "known Xray");
        assert_eq!(format!("{chain:?}"), r#"["known", "upper"]"#);
    }

    #[test]
    fn test_unsupported_names_type_and_owner() {
        let dto_list = DtoList::new();
        let dto = DtoType::new("A");
        let chain = TypeResolverChain::new().with(Known);

        let ctx = ResolveContext::new(TypeOwner::Dto(&dto), &dto_list);
        let err = chain.resolve(&SingleType::new("B"), &ctx, &Plain).unwrap_err();
        assert_eq!(err.to_string(), "type B is not supported, referenced from A");

        let endpoint = ApiEndpoint::new("users", "/api/users", HttpMethod::Get);
        let ctx = ResolveContext::new(TypeOwner::Endpoint(&endpoint), &dto_list);
        let err = chain.resolve(&SingleType::new("B"), &ctx, &Plain).unwrap_err();
        assert_eq!(err.to_string(), "type B is not supported, referenced from GET /api/users");
    }
}
