//! Endpoint model.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::TypeExpr;

/// HTTP method of an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Lowercase method name, as used by HTTP client method calls.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Patch => "patch",
            Self::Delete => "delete",
        }
    }

    /// Whether requests with this method carry a body.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(format!("unknown HTTP method '{other}'")),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str().to_ascii_uppercase())
    }
}

/// Where an endpoint parameter is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamSource {
    Path,
    Query,
    Body,
}

/// A single endpoint parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpointParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    pub source: ParamSource,
}

impl ApiEndpointParam {
    pub fn new(name: impl Into<String>, ty: TypeExpr, source: ParamSource) -> Self {
        Self {
            name: name.into(),
            ty,
            source,
        }
    }
}

/// One callable network operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    /// Handler name (controller method or resource operation name).
    pub name: String,
    /// Path template with `{placeholder}` segments.
    pub path: String,
    pub method: HttpMethod,
    pub params: Vec<ApiEndpointParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<TypeExpr>,
}

impl ApiEndpoint {
    pub fn new(name: impl Into<String>, path: impl Into<String>, method: HttpMethod) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            method,
            params: Vec::new(),
            output: None,
        }
    }

    pub fn param(mut self, param: ApiEndpointParam) -> Self {
        self.params.push(param);
        self
    }

    /// Set the request body type. Replaces any previous body parameter.
    pub fn input(mut self, ty: TypeExpr) -> Self {
        self.params.retain(|p| p.source != ParamSource::Body);
        self.params
            .push(ApiEndpointParam::new("body", ty, ParamSource::Body));
        self
    }

    pub fn output(mut self, ty: Option<TypeExpr>) -> Self {
        self.output = ty;
        self
    }

    /// Placeholder names in the path template, in order of appearance.
    pub fn path_placeholders(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = self.path.as_str();
        while let Some(start) = rest.find('{') {
            let Some(len) = rest[start..].find('}') else {
                break;
            };
            out.push(&rest[start + 1..start + len]);
            rest = &rest[start + len + 1..];
        }
        out
    }

    pub fn path_params(&self) -> impl Iterator<Item = &ApiEndpointParam> {
        self.params_from(ParamSource::Path)
    }

    pub fn query_params(&self) -> impl Iterator<Item = &ApiEndpointParam> {
        self.params_from(ParamSource::Query)
    }

    /// The request body type, if any.
    pub fn input_type(&self) -> Option<&TypeExpr> {
        self.params_from(ParamSource::Body).next().map(|p| &p.ty)
    }

    fn params_from(&self, source: ParamSource) -> impl Iterator<Item = &ApiEndpointParam> {
        self.params.iter().filter(move |p| p.source == source)
    }
}

/// Ordered list of endpoints, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiEndpointList {
    endpoints: Vec<ApiEndpoint>,
}

impl ApiEndpointList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, endpoint: ApiEndpoint) {
        self.endpoints.push(endpoint);
    }

    pub fn merge(&mut self, other: ApiEndpointList) {
        self.endpoints.extend(other.endpoints);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ApiEndpoint> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

impl FromIterator<ApiEndpoint> for ApiEndpointList {
    fn from_iter<I: IntoIterator<Item = ApiEndpoint>>(iter: I) -> Self {
        Self {
            endpoints: iter.into_iter().collect(),
        }
    }
}
