//! Endpoints declared by a class-level resource marker.
//!
//! Two argument shapes are understood:
//!
//! - legacy: `collectionOperations` / `itemOperations` maps keyed by verb
//!   or operation name, each with optional `method`, `path`, `input` and
//!   `output` entries;
//! - modern: an `operations` list of operation markers (`new Get(...)`,
//!   `new GetCollection(...)`, `new Post(...)`, ...).
//!
//! Resource-level `input` / `output` fill in for operations lacking their
//! own. `false` disables a body or output explicitly.

use dtogen_core::{pluralize, to_snake_case};
use dtogen_ir::{ApiEndpoint, ApiEndpointParam, HttpMethod, ParamSource, SingleType, TypeExpr};
use dtogen_syntax::{Declaration, DeclarationKind, Marker, MarkerValue, SourceUnit};
use tracing::debug;

use crate::{
    AcceptAll, ConvertContext, DeclarationFilter, Error, Result, Visitor,
    controller_visitor::join_path,
};

/// Options for resource extraction.
#[derive(Debug, Clone)]
pub struct ResourceOptions {
    /// Class-level marker enumerating the operations (`ApiResource`).
    pub resource_marker: String,
    /// Generic wrapper for collection GET outputs; `None` leaves them bare.
    pub collection_response: Option<String>,
}

impl Default for ResourceOptions {
    fn default() -> Self {
        Self {
            resource_marker: "ApiResource".into(),
            collection_response: Some("CollectionResponse".into()),
        }
    }
}

impl ResourceOptions {
    pub fn resource_marker(mut self, name: impl Into<String>) -> Self {
        self.resource_marker = name.into();
        self
    }

    pub fn collection_response(mut self, name: Option<String>) -> Self {
        self.collection_response = name;
        self
    }
}

/// Resource-wide settings read from one resource marker.
struct Resource<'a> {
    name: &'a str,
    marker: &'a Marker,
    /// Name used for default paths (`shortName`, else the class name).
    short_name: &'a str,
    uri_template: Option<&'a str>,
    route_prefix: Option<&'a str>,
    input: Option<&'a MarkerValue>,
    output: Option<&'a MarkerValue>,
}

struct Operation<'a> {
    name: String,
    method: HttpMethod,
    collection: bool,
    path: Option<&'a str>,
    route_prefix: Option<&'a str>,
    input: Option<&'a MarkerValue>,
    output: Option<&'a MarkerValue>,
}

/// Extracts one endpoint per operation of every resource marker.
pub struct ResourceVisitor {
    options: ResourceOptions,
    filter: Box<dyn DeclarationFilter>,
}

impl ResourceVisitor {
    pub fn new() -> Self {
        Self::with_options(ResourceOptions::default())
    }

    pub fn with_options(options: ResourceOptions) -> Self {
        Self {
            options,
            filter: Box::new(AcceptAll),
        }
    }

    pub fn filter(mut self, filter: impl DeclarationFilter + 'static) -> Self {
        self.filter = Box::new(filter);
        self
    }

    fn visit_resource(
        &self,
        decl: &Declaration,
        marker: &Marker,
        ctx: &mut ConvertContext,
    ) -> Result<()> {
        let resource = Resource {
            name: decl.short_name(),
            marker,
            short_name: marker
                .arg("shortName")
                .and_then(MarkerValue::as_str)
                .unwrap_or_else(|| decl.short_name()),
            uri_template: marker.arg("uriTemplate").and_then(MarkerValue::as_str),
            route_prefix: marker.arg("routePrefix").and_then(MarkerValue::as_str),
            input: marker.arg("input"),
            output: marker.arg("output"),
        };

        let operations = match marker.arg("operations") {
            Some(list) => modern_operations(list),
            None => legacy_operations(marker),
        };
        if operations.is_empty() {
            debug!(resource = %resource.name, "resource declares no operations");
        }

        // Resolve every operation first so a failure adds nothing
        let endpoints = operations
            .into_iter()
            .map(|op| self.endpoint(&resource, op))
            .collect::<Result<Vec<_>>>()?;
        for endpoint in endpoints {
            ctx.add_endpoint(endpoint);
        }
        Ok(())
    }

    fn endpoint(&self, resource: &Resource<'_>, op: Operation<'_>) -> Result<ApiEndpoint> {
        let path = match op.path.or(resource.uri_template) {
            Some(path) => strip_format(path),
            None => default_path(resource.short_name, op.collection),
        };
        let path = match op.route_prefix.or(resource.route_prefix) {
            Some(prefix) => join_path(prefix, &path),
            None => path,
        };

        let name = format!("{}::{}", resource.name, op.name);
        let mut endpoint = ApiEndpoint::new(name, path, op.method);

        let placeholders: Vec<String> = endpoint
            .path_placeholders()
            .into_iter()
            .map(String::from)
            .collect();
        for placeholder in placeholders {
            endpoint = endpoint.param(ApiEndpointParam::new(
                placeholder,
                TypeExpr::single("string"),
                ParamSource::Path,
            ));
        }

        if op.method.has_body()
            && let Some(class) = op
                .input
                .or(resource.input)
                .and_then(MarkerValue::as_class)
        {
            endpoint = endpoint.input(TypeExpr::single(class));
        }

        let output = match op.output.or(resource.output) {
            Some(value) if value.is_false() => None,
            Some(value) => value.as_class().map(TypeExpr::single),
            None if op.method == HttpMethod::Delete => None,
            None => {
                return Err(Error::MissingOutput {
                    resource: resource.name.to_string(),
                    context: resource.marker.to_string(),
                });
            }
        };

        let output = match (&self.options.collection_response, output) {
            (Some(wrapper), Some(output)) if op.collection && op.method == HttpMethod::Get => {
                Some(SingleType::generic(wrapper, vec![output]).into())
            }
            (_, output) => output,
        };

        Ok(endpoint.output(output))
    }
}

impl Default for ResourceVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visitor for ResourceVisitor {
    fn name(&self) -> &'static str {
        "resource"
    }

    fn visit(&self, unit: &SourceUnit, ctx: &mut ConvertContext) -> Result<()> {
        for decl in &unit.declarations {
            if decl.kind != DeclarationKind::Class || !self.filter.is_endpoint(&decl.markers) {
                continue;
            }
            for marker in decl.markers_named(&self.options.resource_marker) {
                self.visit_resource(decl, marker, ctx)?;
            }
        }
        Ok(())
    }
}

fn legacy_operations(marker: &Marker) -> Vec<Operation<'_>> {
    let mut operations = Vec::new();

    for (arg, collection) in [("collectionOperations", true), ("itemOperations", false)] {
        let Some(list) = marker.arg(arg) else {
            continue;
        };
        for item in list.items() {
            // `'get'` or `'post' => [...]`
            let (name, config) = match (&item.key, &item.value) {
                (Some(key), config) => (key.as_str(), Some(config)),
                (None, value) => match value.as_str() {
                    Some(name) => (name, None),
                    None => continue,
                },
            };
            let entry = |key: &str| config.and_then(|c| c.get(key));

            let method = entry("method")
                .and_then(MarkerValue::as_str)
                .unwrap_or(name)
                .parse()
                .unwrap_or_default();

            operations.push(Operation {
                name: name.to_string(),
                method,
                collection,
                path: entry("path").and_then(MarkerValue::as_str),
                route_prefix: None,
                input: entry("input"),
                output: entry("output"),
            });
        }
    }

    operations
}

fn modern_operations(list: &MarkerValue) -> Vec<Operation<'_>> {
    list.items()
        .iter()
        .filter_map(|item| match &item.value {
            MarkerValue::Marker(op) => Some(op),
            _ => None,
        })
        .filter_map(|op| {
            let (method, collection) = match op.short_name() {
                "Get" => (HttpMethod::Get, false),
                "GetCollection" => (HttpMethod::Get, true),
                "Post" => (HttpMethod::Post, true),
                "Put" => (HttpMethod::Put, false),
                "Patch" => (HttpMethod::Patch, false),
                "Delete" => (HttpMethod::Delete, false),
                "HttpOperation" => (
                    op.arg("method")
                        .and_then(MarkerValue::as_str)
                        .and_then(|m| m.parse().ok())
                        .unwrap_or_default(),
                    false,
                ),
                other => {
                    debug!(operation = %other, "unknown resource operation");
                    return None;
                }
            };

            Some(Operation {
                name: op.short_name().to_string(),
                method,
                collection,
                path: op.arg("uriTemplate").and_then(MarkerValue::as_str),
                route_prefix: op.arg("routePrefix").and_then(MarkerValue::as_str),
                input: op.arg("input"),
                output: op.arg("output"),
            })
        })
        .collect()
}

/// `/users/{id}.{_format}` -> `/users/{id}`
fn strip_format(path: &str) -> String {
    path.replace(".{_format}", "").replace("{._format}", "")
}

/// `/plural_snake_name` for collections, with `/{id}` appended for items.
fn default_path(short_name: &str, collection: bool) -> String {
    let base = format!("/{}", pluralize(&to_snake_case(short_name)));
    if collection {
        base
    } else {
        format!("{base}/{{id}}")
    }
}

#[cfg(test)]
mod tests {
    use dtogen_syntax::ArrayItem;

    use super::*;

    fn list(names: &[&str]) -> MarkerValue {
        MarkerValue::list(names.iter().map(|n| MarkerValue::string(*n)))
    }

    fn run(decls: Vec<Declaration>) -> Result<ConvertContext> {
        let mut ctx = ConvertContext::new();
        ResourceVisitor::new().visit(&SourceUnit::new(decls), &mut ctx)?;
        Ok(ctx)
    }

    fn summary(ctx: &ConvertContext) -> Vec<String> {
        ctx.endpoints
            .iter()
            .map(|e| {
                let output = e.output.as_ref().map_or("void".to_string(), ToString::to_string);
                format!("{} {} -> {output}", e.method, e.path)
            })
            .collect()
    }

    #[test]
    fn test_legacy_operations() {
        let chat = Declaration::class("App\\Entity\\Chat").marker(
            Marker::new("ApiResource")
                .named("collectionOperations", list(&["get", "post"]))
                .named("itemOperations", list(&["get", "put", "delete"]))
                .named("input", MarkerValue::class("ChatInput"))
                .named("output", MarkerValue::class("ChatOutput")),
        );

        let ctx = run(vec![chat]).unwrap();
        assert_eq!(
            summary(&ctx),
            vec![
                "GET /chats -> CollectionResponse<ChatOutput>",
                "POST /chats -> ChatOutput",
                "GET /chats/{id} -> ChatOutput",
                "PUT /chats/{id} -> ChatOutput",
                "DELETE /chats/{id} -> void",
            ]
        );

        let endpoints: Vec<&ApiEndpoint> = ctx.endpoints.iter().collect();
        assert_eq!(endpoints[1].input_type(), Some(&TypeExpr::single("ChatInput")));
        assert!(endpoints[2].input_type().is_none());
        assert_eq!(endpoints[3].path_params().next().unwrap().name, "id");
    }

    #[test]
    fn test_legacy_custom_operations_and_short_name() {
        let notes = Declaration::class("StudentNotes").marker(
            Marker::new("ApiResource")
                .named("shortName", MarkerValue::string("push_history_item"))
                .named("routePrefix", MarkerValue::string("/api"))
                .named(
                    "itemOperations",
                    MarkerValue::Array(vec![
                        ArrayItem::value(MarkerValue::string("get")),
                        ArrayItem::keyed(
                            "archive",
                            MarkerValue::Array(vec![
                                ArrayItem::keyed("method", MarkerValue::string("POST")),
                                ArrayItem::keyed("path", MarkerValue::string("/notes/{id}/archive.{_format}")),
                                ArrayItem::keyed("input", MarkerValue::Bool(false)),
                                ArrayItem::keyed("output", MarkerValue::class("ArchiveOutput")),
                            ]),
                        ),
                    ]),
                )
                .named("output", MarkerValue::class("NotesOutput")),
        );

        let ctx = run(vec![notes]).unwrap();
        assert_eq!(
            summary(&ctx),
            vec![
                "GET /api/push_history_items/{id} -> NotesOutput",
                "POST /api/notes/{id}/archive -> ArchiveOutput",
            ]
        );
        assert!(ctx.endpoints.iter().nth(1).unwrap().input_type().is_none());
    }

    #[test]
    fn test_legacy_missing_output() {
        let notes = Declaration::class("StudentNotes").marker(
            Marker::new("ApiResource").named(
                "collectionOperations",
                MarkerValue::Array(vec![
                    ArrayItem::keyed(
                        "post",
                        MarkerValue::Array(vec![ArrayItem::keyed(
                            "output",
                            MarkerValue::class("StudentNotesOutput"),
                        )]),
                    ),
                    ArrayItem::value(MarkerValue::string("put")),
                ]),
            ),
        );

        let err = run(vec![notes]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "output is required for resource StudentNotes. Context: ApiResource(collectionOperations: ['post' => ['output' => StudentNotesOutput::class], 'put'])"
        );
    }

    #[test]
    fn test_modern_operations() {
        let booking = Declaration::class("Booking")
            .marker(
                Marker::new("ApiResource")
                    .named("uriTemplate", MarkerValue::string("/users/{userId}/bookings.{_format}"))
                    .named(
                        "operations",
                        MarkerValue::list([MarkerValue::Marker(Marker::new("GetCollection"))]),
                    )
                    .named("output", MarkerValue::class("BookingOutput")),
            )
            .marker(
                Marker::new("ApiResource").named(
                    "operations",
                    MarkerValue::list([
                        MarkerValue::Marker(
                            Marker::new("Post")
                                .named("input", MarkerValue::class("BookingInput"))
                                .named("output", MarkerValue::class("BookingOutput")),
                        ),
                        MarkerValue::Marker(Marker::new("Delete")),
                        MarkerValue::Marker(
                            Marker::new("Patch")
                                .named("uriTemplate", MarkerValue::string("/bookings/{id}/cancel"))
                                .named("output", MarkerValue::Bool(false)),
                        ),
                    ]),
                ),
            );

        let ctx = run(vec![booking]).unwrap();
        assert_eq!(
            summary(&ctx),
            vec![
                "GET /users/{userId}/bookings -> CollectionResponse<BookingOutput>",
                "POST /bookings -> BookingOutput",
                "DELETE /bookings/{id} -> void",
                "PATCH /bookings/{id}/cancel -> void",
            ]
        );
        let first = ctx.endpoints.iter().next().unwrap();
        assert_eq!(first.path_params().next().unwrap().name, "userId");
    }

    #[test]
    fn test_modern_missing_output() {
        let hub = Declaration::class("HubUser").marker(Marker::new("ApiResource").named(
            "operations",
            MarkerValue::list([MarkerValue::Marker(Marker::new("Get"))]),
        ));

        let err = run(vec![hub]).unwrap_err();
        let Error::MissingOutput { resource, context } = err;
        assert_eq!(resource, "HubUser");
        assert_eq!(context, "ApiResource(operations: [new Get()])");
    }

    #[test]
    fn test_collection_wrapper_can_be_disabled() {
        let tags = Declaration::class("TagCollection").marker(
            Marker::new("ApiResource")
                .named("collectionOperations", list(&["get"]))
                .named("output", MarkerValue::class("TagOutput")),
        );

        let visitor = ResourceVisitor::with_options(ResourceOptions::default().collection_response(None));
        let mut ctx = ConvertContext::new();
        visitor.visit(&SourceUnit::new(vec![tags]), &mut ctx).unwrap();
        assert_eq!(summary(&ctx), vec!["GET /tag_collections -> TagOutput"]);
    }
}
