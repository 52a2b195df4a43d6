//! Axios client functions for endpoints.

use std::collections::HashMap;

use dtogen_codegen::{ResolveContext, Result, TypeRenderer};
use dtogen_core::{to_camel_case, to_pascal_case};
use dtogen_ir::{ApiEndpoint, HttpMethod};
use tracing::warn;

use crate::TS_NAMING;
use crate::ast::{ArrowConst, MethodChain, Param};
use crate::naming::property_key;

/// Client function name: the path's words in camelCase, then the method.
/// `PUT /api/users/{userToUpdate}` becomes `apiUsersUserToUpdatePut`.
pub(crate) fn function_name(endpoint: &ApiEndpoint) -> String {
    let base = to_camel_case(&endpoint.path);
    if base.is_empty() {
        return endpoint.method.as_str().to_string();
    }
    format!("{base}{}", to_pascal_case(endpoint.method.as_str()))
}

/// Hands out unique client function names. The second endpoint sharing a
/// path and method becomes `apiUsersGet2`, the third `apiUsersGet3`.
#[derive(Debug, Default)]
pub(crate) struct FunctionNames {
    seen: HashMap<String, usize>,
}

impl FunctionNames {
    pub(crate) fn next(&mut self, endpoint: &ApiEndpoint) -> String {
        let base = function_name(endpoint);
        let count = self.seen.entry(base.clone()).or_default();
        *count += 1;
        if *count == 1 {
            return base;
        }
        warn!(
            method = %endpoint.method,
            path = %endpoint.path,
            handler = %endpoint.name,
            "client function {base} already exists, using {base}{count}"
        );
        format!("{base}{count}")
    }
}

/// Path template as a JS template literal body, placeholders replaced
/// by the matching parameter names.
fn interpolate_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len() + 8);
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        let name = &rest[start + 1..start + len];
        out.push_str(&rest[..start]);
        out.push_str(&format!("${{{}}}", TS_NAMING.safe_name(name)));
        rest = &rest[start + len + 1..];
    }
    out.push_str(rest);
    out
}

/// Build the client function for one endpoint.
///
/// Parameters are the path parameters in declaration order, then `body`
/// when the endpoint has an input, then `query` holding every query
/// parameter.
pub(crate) fn endpoint_function(
    name: String,
    endpoint: &ApiEndpoint,
    renderer: &dyn TypeRenderer,
    ctx: &ResolveContext<'_>,
) -> Result<ArrowConst> {
    let output = match &endpoint.output {
        Some(ty) => renderer.render(ty, ctx)?,
        None => "void".to_string(),
    };

    let mut function = ArrowConst::new(name).returns(format!("Promise<{output}>"));

    for param in endpoint.path_params() {
        function = function.param(Param::new(
            TS_NAMING.safe_name(&param.name),
            renderer.render(&param.ty, ctx)?,
        ));
    }

    let body = match endpoint.input_type() {
        Some(ty) => {
            function = function.param(Param::new("body", renderer.render(ty, ctx)?));
            true
        }
        None => false,
    };

    let mut query_fields = Vec::new();
    for param in endpoint.query_params() {
        query_fields.push(format!(
            "{}: {}",
            property_key(&param.name),
            renderer.render(&param.ty, ctx)?
        ));
    }
    let query = !query_fields.is_empty();
    if query {
        function = function.param(Param::new("query", format!("{{ {} }}", query_fields.join("; "))));
    }

    let mut args = vec![format!("`{}`", interpolate_path(&endpoint.path))];
    match (body, query) {
        (true, _) => args.push("body".into()),
        (false, true) if takes_body(endpoint.method) => args.push("undefined".into()),
        _ => {}
    }
    if query {
        args.push("{ params: query }".into());
    }

    let chain = MethodChain::new("axios")
        .call(format!("{}<{output}>", endpoint.method.as_str()), args)
        .call("then", ["response => response.data"])
        .returned();

    Ok(function.body(&chain))
}

/// Axios methods whose second argument is the request body.
fn takes_body(method: HttpMethod) -> bool {
    matches!(method, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
}
