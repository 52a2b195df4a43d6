//! Endpoints declared as marked controller methods.

use dtogen_ir::{ApiEndpoint, ApiEndpointParam, HttpMethod, ParamSource, Primitive, TypeExpr};
use dtogen_syntax::{Declaration, DeclarationKind, Marker, MarkerValue, Method, Param, SourceUnit};
use tracing::{debug, warn};

use crate::{
    AcceptAll, ConvertContext, DeclarationFilter, Result, Visitor,
    doc_hint::DocBlock,
    dto_visitor::{parse_hint, type_from_node},
};

/// Marker names recognized on controllers.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Routing marker carrying path and methods (`Route`).
    pub route_marker: String,
    /// Endpoint marker carrying the default output (`DtoEndpoint`).
    pub endpoint_marker: String,
    /// Parameter marker for the request body.
    pub input_marker: String,
    /// Parameter marker for a DTO flattened into query parameters.
    pub query_marker: String,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            route_marker: "Route".into(),
            endpoint_marker: "DtoEndpoint".into(),
            input_marker: "Input".into(),
            query_marker: "Query".into(),
        }
    }
}

impl ControllerOptions {
    pub fn route_marker(mut self, name: impl Into<String>) -> Self {
        self.route_marker = name.into();
        self
    }

    pub fn endpoint_marker(mut self, name: impl Into<String>) -> Self {
        self.endpoint_marker = name.into();
        self
    }

    pub fn input_marker(mut self, name: impl Into<String>) -> Self {
        self.input_marker = name.into();
        self
    }

    pub fn query_marker(mut self, name: impl Into<String>) -> Self {
        self.query_marker = name.into();
        self
    }
}

/// Extracts one endpoint per routed controller method.
///
/// Output precedence, highest first:
/// 1. the method's `@return` doc hint (generic instantiations included),
/// 2. the endpoint marker's `output` / `returnOne` / `returnMany` argument.
///
/// Without either the endpoint returns nothing.
///
/// Path parameters follow the order of the `{placeholders}` in the route
/// path, not the order the method declares them. Each takes the scalar
/// type of the unmarked method parameter with the same name, or `string`.
pub struct ControllerVisitor {
    options: ControllerOptions,
    filter: Box<dyn DeclarationFilter>,
}

impl ControllerVisitor {
    pub fn new() -> Self {
        Self::with_options(ControllerOptions::default())
    }

    pub fn with_options(options: ControllerOptions) -> Self {
        Self {
            options,
            filter: Box::new(AcceptAll),
        }
    }

    pub fn filter(mut self, filter: impl DeclarationFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    fn visit_method(
        &self,
        decl: &Declaration,
        prefix: &str,
        method: &Method,
        route: &Marker,
        ctx: &mut ConvertContext,
    ) {
        let location = format!("{}::{}", decl.short_name(), method.name);

        let Some(path) = route_path(route) else {
            warn!(%location, "routing marker has no path");
            ctx.add_warning(self.name(), &location, format!("{route} has no path or name"));
            return;
        };
        let path = join_path(prefix, path);

        let http_method = match route.arg("methods").and_then(MarkerValue::first_str) {
            None => HttpMethod::Get,
            Some(raw) => raw.parse::<HttpMethod>().unwrap_or_else(|err| {
                ctx.add_warning(self.name(), &location, format!("{err}, using GET"));
                HttpMethod::Get
            }),
        };

        let mut endpoint = ApiEndpoint::new(&method.name, &path, http_method);

        let placeholders: Vec<String> = endpoint
            .path_placeholders()
            .into_iter()
            .map(String::from)
            .collect();
        for placeholder in &placeholders {
            let ty = method
                .params
                .iter()
                .find(|p| &p.name == placeholder && !self.is_marked(p))
                .and_then(|p| p.ty.as_ref())
                .map(type_from_node)
                .filter(is_scalar)
                .unwrap_or_else(|| TypeExpr::single(Primitive::String.as_str()));
            endpoint = endpoint.param(ApiEndpointParam::new(placeholder, ty, ParamSource::Path));
        }

        for param in &method.params {
            if param.has_marker(&self.options.input_marker) {
                let ty = param.ty.as_ref().map_or_else(TypeExpr::mixed, type_from_node);
                endpoint = endpoint.input(ty);
            } else if param.has_marker(&self.options.query_marker) {
                endpoint = self.query_params(endpoint, param, ctx);
            } else if !placeholders.contains(&param.name) {
                debug!(%location, param = %param.name, "parameter not bound to the request");
                ctx.add_info(
                    self.name(),
                    &location,
                    format!("parameter ${} is not bound to the request and was ignored", param.name),
                );
            }
        }

        let output = self.output(method, ctx, &location);
        ctx.add_endpoint(endpoint.output(output));
    }

    fn is_marked(&self, param: &Param) -> bool {
        param.has_marker(&self.options.input_marker) || param.has_marker(&self.options.query_marker)
    }

    /// Flatten a query DTO into one query parameter per property.
    fn query_params(&self, mut endpoint: ApiEndpoint, param: &Param, ctx: &ConvertContext) -> ApiEndpoint {
        let ty = param.ty.as_ref().map_or_else(TypeExpr::mixed, type_from_node);
        let dto = match &ty {
            TypeExpr::Single(single) => ctx.dto_list.get(&single.name),
            _ => None,
        };

        match dto {
            Some(dto) => {
                for prop in &dto.properties {
                    endpoint = endpoint.param(ApiEndpointParam::new(
                        &prop.name,
                        prop.ty.clone(),
                        ParamSource::Query,
                    ));
                }
            }
            None => {
                endpoint = endpoint.param(ApiEndpointParam::new(&param.name, ty, ParamSource::Query));
            }
        }
        endpoint
    }

    fn output(&self, method: &Method, ctx: &mut ConvertContext, location: &str) -> Option<TypeExpr> {
        if let Some(hint) = method.doc.as_deref().and_then(|doc| DocBlock::parse(doc).return_type()) {
            if hint.eq_ignore_ascii_case("void") {
                return None;
            }
            return Some(parse_hint(hint, ctx, self.name(), location));
        }

        let marker = method.find_marker(&self.options.endpoint_marker)?;
        if let Some(class) = marker
            .arg("output")
            .or_else(|| marker.arg("returnOne"))
            .and_then(MarkerValue::as_class)
        {
            return Some(TypeExpr::single(class));
        }
        marker
            .arg("returnMany")
            .and_then(MarkerValue::as_class)
            .map(|class| TypeExpr::array_of(TypeExpr::single(class)))
    }
}

impl Default for ControllerVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for ControllerVisitor {
    fn name(&self) -> &'static str {
        "controller"
    }

    fn visit(&self, unit: &SourceUnit, ctx: &mut ConvertContext) -> Result<()> {
        let route_marker = self.options.route_marker.as_str();

        for decl in &unit.declarations {
            if decl.kind != DeclarationKind::Class {
                continue;
            }
            // A class-level route is a prefix for every method route
            let prefix = decl
                .markers
                .iter()
                .find(|m| m.is(route_marker))
                .and_then(route_path)
                .unwrap_or("");

            for method in decl.methods.iter().filter(|m| !m.constructor) {
                let Some(route) = method.find_marker(route_marker) else {
                    continue;
                };
                if !self.filter.is_endpoint(&method.markers) {
                    debug!(method = %method.name, "skipped by filter");
                    continue;
                }
                self.visit_method(decl, prefix, method, route, ctx);
            }
        }
        Ok(())
    }
}

/// `path` wins over the first positional argument, which wins over `name`.
fn route_path(route: &Marker) -> Option<&str> {
    route
        .arg("path")
        .or_else(|| route.positional_arg(0))
        .or_else(|| route.arg("name"))
        .and_then(MarkerValue::as_str)
}

pub(crate) fn join_path(prefix: &str, path: &str) -> String {
    if prefix.is_empty() {
        return path.to_string();
    }
    if path.is_empty() {
        return prefix.to_string();
    }
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn is_scalar(ty: &TypeExpr) -> bool {
    matches!(
        ty,
        TypeExpr::Single(single) if matches!(
            single.primitive(),
            Some(Primitive::String | Primitive::Int | Primitive::Float | Primitive::Bool)
        )
    )
}
